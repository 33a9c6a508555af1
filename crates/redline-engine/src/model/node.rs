use thiserror::Error;

/// Category tag of a leaf: letters and digits are [`LeafKind::Character`],
/// everything else (including whitespace) is [`LeafKind::Punctuation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeafKind {
    Character,
    Punctuation,
}

/// A terminal tree node holding exactly one character.
///
/// Leaves are never edited in place; a transformation that wants a different
/// character replaces the leaf wholesale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Leaf {
    kind: LeafKind,
    value: char,
}

impl Leaf {
    /// Tags `value` by the letter/digit rule and builds the leaf.
    pub fn from_char(value: char) -> Self {
        let kind = if value.is_alphanumeric() {
            LeafKind::Character
        } else {
            LeafKind::Punctuation
        };
        Self { kind, value }
    }

    pub fn character(value: char) -> Self {
        Self {
            kind: LeafKind::Character,
            value,
        }
    }

    pub fn punctuation(value: char) -> Self {
        Self {
            kind: LeafKind::Punctuation,
            value,
        }
    }

    pub fn kind(&self) -> LeafKind {
        self.kind
    }

    pub fn value(&self) -> char {
        self.value
    }
}

/// The kind of a composite node, top of the tree first.
///
/// The kind decides the separator used when flattening the subtree back to
/// text; nothing else about a composite depends on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompositeKind {
    Document,
    Paragraph,
    Sentence,
    Word,
    Lexeme,
}

impl CompositeKind {
    /// Separator written between adjacent children, never before the first
    /// or after the last.
    pub fn separator(self) -> &'static str {
        match self {
            CompositeKind::Document => "\n\n",
            CompositeKind::Paragraph => "\n",
            CompositeKind::Sentence => " ",
            CompositeKind::Word | CompositeKind::Lexeme => "",
        }
    }
}

/// Structural access failures on a composite's child list.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("child index {index} out of bounds for composite with {len} children")]
    IndexOutOfBounds { index: usize, len: usize },
}

/// A tree node with ordered children and a kind-specific text-joining rule.
///
/// Children are owned exclusively by their composite; the model is a strict
/// tree and no node ever has two parents.
#[derive(Debug, Clone, PartialEq)]
pub struct Composite {
    name: String,
    kind: CompositeKind,
    children: Vec<Node>,
}

impl Composite {
    pub fn new(name: impl Into<String>, kind: CompositeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            children: Vec::new(),
        }
    }

    /// Human-readable name, for diagnostics only.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> CompositeKind {
        self.kind
    }

    /// Ordered view of the children. Callers cannot mutate through it.
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    pub fn append_child(&mut self, child: Node) {
        self.children.push(child);
    }

    /// Removes and returns the child at `index`.
    pub fn remove_child(&mut self, index: usize) -> Result<Node, ModelError> {
        if index >= self.children.len() {
            return Err(ModelError::IndexOutOfBounds {
                index,
                len: self.children.len(),
            });
        }
        Ok(self.children.remove(index))
    }

    pub fn child_at(&self, index: usize) -> Result<&Node, ModelError> {
        self.children.get(index).ok_or(ModelError::IndexOutOfBounds {
            index,
            len: self.children.len(),
        })
    }

    pub fn clear_children(&mut self) {
        self.children.clear();
    }

    /// Discards the current children wholesale and installs `children` in
    /// their place. This is the rebuild operation used when a stage rewrites
    /// a whole subtree.
    pub fn replace_children(&mut self, children: Vec<Node>) {
        self.children = children;
    }

    pub(crate) fn children_mut(&mut self) -> &mut Vec<Node> {
        &mut self.children
    }

    pub fn render_text(&self) -> String {
        let separator = self.kind.separator();
        let mut out = String::new();
        for (i, child) in self.children.iter().enumerate() {
            if i > 0 {
                out.push_str(separator);
            }
            out.push_str(&child.render_text());
        }
        out
    }

    pub fn element_count(&self) -> usize {
        self.children.iter().map(Node::element_count).sum()
    }
}

/// A polymorphic tree element: either a single tagged character or a
/// composite with ordered children.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Leaf(Leaf),
    Composite(Composite),
}

impl Node {
    /// Flattens the subtree back to text using each composite's separator.
    pub fn render_text(&self) -> String {
        match self {
            Node::Leaf(leaf) => leaf.value().to_string(),
            Node::Composite(composite) => composite.render_text(),
        }
    }

    /// Number of leaves in the subtree; composites do not count themselves.
    pub fn element_count(&self) -> usize {
        match self {
            Node::Leaf(_) => 1,
            Node::Composite(composite) => composite.element_count(),
        }
    }

    pub fn as_composite(&self) -> Option<&Composite> {
        match self {
            Node::Composite(composite) => Some(composite),
            Node::Leaf(_) => None,
        }
    }

    pub fn as_leaf(&self) -> Option<&Leaf> {
        match self {
            Node::Leaf(leaf) => Some(leaf),
            Node::Composite(_) => None,
        }
    }
}

pub mod span_removal;
pub mod whitespace;

pub use span_removal::SpanRemoval;
pub use whitespace::WhitespaceCollapse;

use crate::model::{Composite, Leaf, LeafKind, Node};

/// Verdict a stage returns for a leaf it has been offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeafAction {
    /// Pass the leaf through unchanged.
    Keep,
    /// Substitute the leaf; later stages observe the replacement.
    Replace(Leaf),
    /// Remove the leaf from the tree; later stages never see it.
    Drop,
}

/// A unit of rewriting logic in the transformation pipeline.
///
/// The traversal driver offers every node of the tree to every stage, in
/// stage order, in a single depth-first pre-order pass. A stage that does not
/// care about a node kind leaves the default no-op in place; unlike a manual
/// forwarding chain there is nothing a stage must do to keep traversal going.
pub trait Stage {
    /// Observe (and possibly rewrite in place) a composite, before its
    /// children are visited.
    fn on_composite(&mut self, _composite: &mut Composite) {}

    /// Observe a letter/digit leaf.
    fn on_character(&mut self, _leaf: Leaf) -> LeafAction {
        LeafAction::Keep
    }

    /// Observe a punctuation leaf.
    fn on_punctuation(&mut self, _leaf: Leaf) -> LeafAction {
        LeafAction::Keep
    }
}

/// An ordered chain of rewrite stages applied in one coordinated pass.
///
/// One instance covers exactly one document run: stages may carry state that
/// persists across the whole traversal (see [`WhitespaceCollapse`]), so a
/// pipeline must be rebuilt rather than reused for the next document.
pub struct Pipeline {
    stages: Vec<Box<dyn Stage>>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    pub fn with_stage(mut self, stage: impl Stage + 'static) -> Self {
        self.stages.push(Box::new(stage));
        self
    }

    /// The standard two-stage pipeline: delimiter-span removal first, then
    /// whitespace collapse, so rebuilt sentences are still normalized in the
    /// same pass.
    pub fn standard(start_delimiter: char, end_delimiter: char) -> Self {
        Self::new()
            .with_stage(SpanRemoval::new(start_delimiter, end_delimiter))
            .with_stage(WhitespaceCollapse::new())
    }

    /// Walks the tree once, offering every node to every stage in order.
    pub fn process(&mut self, root: &mut Node) {
        traverse(root, &mut self.stages);
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Depth-first pre-order walk: a composite is offered to all stages before
/// its children, and children are visited in order after any in-place
/// rebuild, so stages see the current subtree, not a stale snapshot.
fn traverse(node: &mut Node, stages: &mut [Box<dyn Stage>]) {
    match node {
        Node::Leaf(leaf) => {
            // A root leaf has no parent to drop it from; replacements still
            // apply.
            if let Some(kept) = offer_leaf(*leaf, stages) {
                *node = Node::Leaf(kept);
            }
        }
        Node::Composite(composite) => {
            for stage in stages.iter_mut() {
                stage.on_composite(composite);
            }

            let children = std::mem::take(composite.children_mut());
            let mut kept = Vec::with_capacity(children.len());
            for mut child in children {
                match child {
                    Node::Leaf(leaf) => {
                        if let Some(leaf) = offer_leaf(leaf, stages) {
                            kept.push(Node::Leaf(leaf));
                        }
                    }
                    Node::Composite(_) => {
                        traverse(&mut child, stages);
                        kept.push(child);
                    }
                }
            }
            *composite.children_mut() = kept;
        }
    }
}

/// Runs a leaf through every stage in order, applying each verdict before the
/// next stage observes it. `None` means some stage dropped the leaf.
fn offer_leaf(leaf: Leaf, stages: &mut [Box<dyn Stage>]) -> Option<Leaf> {
    let mut current = leaf;
    for stage in stages.iter_mut() {
        let action = match current.kind() {
            LeafKind::Character => stage.on_character(current),
            LeafKind::Punctuation => stage.on_punctuation(current),
        };
        match action {
            LeafAction::Keep => {}
            LeafAction::Replace(replacement) => current = replacement,
            LeafAction::Drop => return None,
        }
    }
    Some(current)
}

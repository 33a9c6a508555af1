//! Sentence, word and character segmentation.
//!
//! Shared between the parser and the span-removal stage, which rebuilds a
//! sentence's children with exactly the same word/character rules.

use crate::model::{Composite, CompositeKind, Leaf, Node};

/// Splits `text` into sentence fragments.
///
/// A boundary occurs after a `.`, `!` or `?` that is followed by one or more
/// whitespace characters; the whitespace is consumed as the separator and
/// retained in neither fragment. A terminator not followed by whitespace
/// (`"e.g.2"`, end of text) does not split.
pub(crate) fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if !matches!(c, '.' | '!' | '?') {
            continue;
        }
        let end = i + c.len_utf8();
        let mut next_start = end;
        let mut consumed_whitespace = false;
        while let Some(&(j, w)) = chars.peek() {
            if !w.is_whitespace() {
                break;
            }
            consumed_whitespace = true;
            next_start = j + w.len_utf8();
            chars.next();
        }
        if consumed_whitespace {
            sentences.push(&text[start..end]);
            start = next_start;
        }
    }

    if start < text.len() {
        sentences.push(&text[start..]);
    }
    sentences
}

/// Builds a sentence composite: whitespace-split words, each split into
/// tagged character/punctuation leaves.
pub(crate) fn sentence(name: &str, text: &str) -> Node {
    let mut sentence = Composite::new(name, CompositeKind::Sentence);
    for word in words_from_text(text) {
        sentence.append_child(word);
    }
    Node::Composite(sentence)
}

/// Word composites for `text`, split on runs of whitespace; empty fragments
/// are discarded.
pub(crate) fn words_from_text(text: &str) -> Vec<Node> {
    text.split_whitespace()
        .enumerate()
        .map(|(i, fragment)| word(&format!("word_{i}"), fragment))
        .collect()
}

fn word(name: &str, text: &str) -> Node {
    let mut word = Composite::new(name, CompositeKind::Word);
    for c in text.chars() {
        word.append_child(Node::Leaf(Leaf::from_char(c)));
    }
    Node::Composite(word)
}

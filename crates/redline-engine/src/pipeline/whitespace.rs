use tracing::trace;

use super::{LeafAction, Stage};
use crate::model::Leaf;

/// Collapses runs of spaces and tabs into a single canonical space.
///
/// Stateful across the whole traversal: the previous-was-whitespace flag is
/// deliberately not reset between composites, so a run that straddles a word
/// or sentence boundary still collapses to one space. One instance covers
/// exactly one document run; build a fresh one (or a fresh [`Pipeline`]) for
/// the next document.
///
/// [`Pipeline`]: super::Pipeline
pub struct WhitespaceCollapse {
    previous_was_whitespace: bool,
}

impl WhitespaceCollapse {
    pub fn new() -> Self {
        Self {
            previous_was_whitespace: false,
        }
    }

    fn observe(&mut self, leaf: Leaf) -> LeafAction {
        if leaf.value() == ' ' || leaf.value() == '\t' {
            if self.previous_was_whitespace {
                trace!("dropping redundant whitespace leaf");
                return LeafAction::Drop;
            }
            self.previous_was_whitespace = true;
            LeafAction::Replace(Leaf::punctuation(' '))
        } else {
            self.previous_was_whitespace = false;
            LeafAction::Keep
        }
    }
}

impl Default for WhitespaceCollapse {
    fn default() -> Self {
        Self::new()
    }
}

impl Stage for WhitespaceCollapse {
    fn on_character(&mut self, leaf: Leaf) -> LeafAction {
        self.observe(leaf)
    }

    fn on_punctuation(&mut self, leaf: Leaf) -> LeafAction {
        self.observe(leaf)
    }
}

use regex::Regex;
use tracing::{debug, info, trace};

use super::Stage;
use crate::model::{Composite, CompositeKind};
use crate::parsing::segment;

/// Removes the longest delimiter-bounded span from each sentence.
///
/// Spans run from the start delimiter to the next end delimiter (shortest
/// match); among all non-overlapping spans in a sentence the longest is
/// deleted and the sentence's children are rebuilt from the remaining text.
/// Only sentences are touched; every other node passes through unobserved.
pub struct SpanRemoval {
    pattern: Regex,
}

impl SpanRemoval {
    /// Any two characters are accepted, equal or whitespace included; the
    /// span search then finds whatever it finds.
    pub fn new(start_delimiter: char, end_delimiter: char) -> Self {
        let pattern = Regex::new(&format!(
            "{}.*?{}",
            regex::escape(&start_delimiter.to_string()),
            regex::escape(&end_delimiter.to_string())
        ))
        .expect("escaped delimiter pattern is valid");
        debug!(
            start = %start_delimiter,
            end = %end_delimiter,
            "span removal stage created"
        );
        Self { pattern }
    }

    /// Longest span by character length; first found wins ties, since later
    /// finds of equal length do not replace the maximum.
    fn longest_span<'t>(&self, text: &'t str) -> Option<&'t str> {
        let mut longest: Option<&str> = None;
        for found in self.pattern.find_iter(text) {
            let found = found.as_str();
            if longest.is_none_or(|best| found.len() > best.len()) {
                longest = Some(found);
            }
        }
        longest
    }
}

impl Stage for SpanRemoval {
    fn on_composite(&mut self, composite: &mut Composite) {
        if composite.kind() != CompositeKind::Sentence {
            return;
        }

        let text = composite.render_text();
        let Some(span) = self.longest_span(&text) else {
            trace!(sentence = %text, "no span to remove");
            return;
        };

        // Textual, not positional: if the matched text recurs earlier in the
        // sentence, the earlier occurrence is the one removed.
        let rewritten = text.replacen(span, "", 1);
        info!(was = %text, now = %rewritten, "removed span from sentence");

        composite.replace_children(segment::words_from_text(&rewritten));
    }
}

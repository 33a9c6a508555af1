pub mod builder;
pub mod classify;
pub(crate) mod segment;

use tracing::{debug, info, trace, warn};

use crate::model::{Composite, CompositeKind, Node};
use builder::ParagraphBuilder;
use classify::LineClassifier;

/// Parses raw text into a document tree.
///
/// Never fails on UTF-8 input: empty or whitespace-only text yields an empty
/// document composite rather than an error.
///
/// Lines are classified locally (red line / blank), grouped greedily into
/// paragraph buffers, and each buffer is segmented bottom-up into sentences,
/// words and tagged character leaves.
pub fn parse_document(text: &str) -> Node {
    debug!("parsing document");

    if text.trim().is_empty() {
        warn!("input is empty or whitespace-only, producing an empty document");
        return Node::Composite(Composite::new("empty", CompositeKind::Document));
    }

    let classifier = LineClassifier;
    let mut builder = ParagraphBuilder::new();
    let mut line_count = 0;
    for line in text.split('\n') {
        builder.push(line, &classifier.classify(line));
        line_count += 1;
    }
    debug!(lines = line_count, "lines classified");

    let mut document = Composite::new("document", CompositeKind::Document);
    for (i, buffer) in builder.finish().iter().enumerate() {
        document.append_child(parse_paragraph(&format!("paragraph_{i}"), buffer));
    }

    info!(
        paragraphs = document.child_count(),
        elements = document.element_count(),
        "document parsed"
    );
    Node::Composite(document)
}

fn parse_paragraph(name: &str, text: &str) -> Node {
    trace!(name, chars = text.len(), "parsing paragraph");
    let mut paragraph = Composite::new(name, CompositeKind::Paragraph);

    let mut index = 0;
    for fragment in segment::split_sentences(text.trim()) {
        if fragment.trim().is_empty() {
            continue;
        }
        paragraph.append_child(segment::sentence(
            &format!("sentence_{index}"),
            fragment.trim(),
        ));
        index += 1;
    }

    Node::Composite(paragraph)
}

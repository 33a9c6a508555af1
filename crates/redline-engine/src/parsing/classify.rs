/// Classification of a single line containing only local facts.
///
/// This is phase 1 of paragraph parsing: each line is classified
/// independently, without reference to surrounding context.
#[derive(Debug, Clone)]
pub struct LineClass {
    /// Whether the line is empty or whitespace-only.
    pub is_blank: bool,
    /// Whether the line is a red line, i.e. opens a new paragraph.
    pub opens_paragraph: bool,
}

/// A red line opens with exactly this many leading spaces.
const RED_LINE_INDENT: usize = 4;

/// Whether a leading tab also marks a red line. Fixed configuration, not
/// runtime input.
const TAB_OPENS_PARAGRAPH: bool = true;

/// Classifies individual lines for the paragraph grouping phase.
pub struct LineClassifier;

impl LineClassifier {
    pub fn classify(&self, line: &str) -> LineClass {
        LineClass {
            is_blank: line.trim().is_empty(),
            opens_paragraph: is_red_line(line),
        }
    }
}

/// A line is red if it starts with exactly [`RED_LINE_INDENT`] spaces
/// followed by a non-space, or with a tab when [`TAB_OPENS_PARAGRAPH`] is
/// set. Five or more leading spaces do not qualify.
fn is_red_line(line: &str) -> bool {
    if line.is_empty() {
        return false;
    }

    if line.starts_with(' ') {
        let leading = line.chars().take_while(|&c| c == ' ').count();
        return leading == RED_LINE_INDENT && line.chars().count() > leading;
    }

    if TAB_OPENS_PARAGRAPH && line.starts_with('\t') {
        return true;
    }

    false
}

use tracing::trace;

use super::classify::LineClass;

/// Phase 2 of paragraph parsing: greedily accumulates classified lines into
/// paragraph buffers.
///
/// A red line always closes the open paragraph and starts the next one. Blank
/// lines are kept (as empty lines) once a paragraph is open and dropped
/// before the first one. `finish` flushes whatever is still open at EOF.
pub struct ParagraphBuilder {
    current: Vec<String>,
    open: bool,
    out: Vec<String>,
}

impl ParagraphBuilder {
    pub fn new() -> Self {
        Self {
            current: Vec::new(),
            open: false,
            out: Vec::new(),
        }
    }

    pub fn push(&mut self, line: &str, class: &LineClass) {
        if class.opens_paragraph {
            if self.open && !self.current.is_empty() {
                self.flush();
            }
            self.open = true;
            self.current.push(line.to_string());
            trace!(line, "red line opens a new paragraph");
        } else if self.open && !class.is_blank {
            self.current.push(line.to_string());
            trace!(line, "line continues the open paragraph");
        } else if self.open && class.is_blank {
            // Kept as an empty line within the paragraph, does not close it.
            self.current.push(String::new());
            trace!("blank line kept inside the open paragraph");
        } else if !self.open && !class.is_blank {
            self.open = true;
            self.current.push(line.to_string());
            trace!(line, "first paragraph opens");
        } else {
            trace!("blank line before any paragraph, dropped");
        }
    }

    /// EOF: flush the open buffer and return the paragraph texts, each the
    /// newline-join of its lines.
    pub fn finish(mut self) -> Vec<String> {
        if !self.current.is_empty() {
            self.flush();
        }
        self.out
    }

    fn flush(&mut self) {
        self.out.push(self.current.join("\n"));
        self.current.clear();
    }
}

impl Default for ParagraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

use std::fmt::Display;

/// Append-only text buffer backing the output console.
///
/// The rendered display always mirrors the full buffer contents; `revision`
/// increments on every mutation that requires a refresh, so the view layer
/// can tell real appends apart from the empty-string no-op.
#[derive(Debug, Clone, Default)]
pub struct OutputBuffer {
    text: String,
    revision: u64,
}

impl OutputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the stringified value. An empty string is a complete no-op:
    /// no buffer growth and no display refresh.
    pub fn append<T: Display>(&mut self, value: T) {
        let s = value.to_string();
        if s.is_empty() {
            return;
        }
        self.text.push_str(&s);
        self.revision += 1;
    }

    /// Append the stringified value followed by a newline. As with
    /// [`append`](Self::append), an empty string leaves the buffer untouched.
    pub fn append_line<T: Display>(&mut self, value: T) {
        let s = value.to_string();
        if s.is_empty() {
            return;
        }
        self.text.push_str(&s);
        self.text.push('\n');
        self.revision += 1;
    }

    /// Append a blank line. Unlike `append_line("")`, this always mutates.
    pub fn append_blank_line(&mut self) {
        self.text.push('\n');
        self.revision += 1;
    }

    /// Empty the buffer unconditionally and refresh the display.
    pub fn clear(&mut self) {
        self.text.clear();
        self.revision += 1;
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }
}

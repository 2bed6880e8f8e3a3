use crate::color::Highlight;

/// Per-exchange metadata shown next to the exchange in the proxy history.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Annotations {
    highlight: Option<Highlight>,
    notes: String,
}

impl Annotations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn highlight(&self) -> Option<&Highlight> {
        self.highlight.as_ref()
    }

    pub fn set_highlight(&mut self, highlight: Highlight) {
        self.highlight = Some(highlight);
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    /// Notes only grow while an exchange is in flight.
    pub fn append_notes(&mut self, text: &str) {
        self.notes.push_str(text);
    }

    /// Host-side replacement, e.g. when a user edits the notes by hand.
    pub fn set_notes(&mut self, notes: impl Into<String>) {
        self.notes = notes.into();
    }
}

#[cfg(test)]
#[path = "annotations_test.rs"]
mod annotations_test;

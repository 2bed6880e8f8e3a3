use crate::annotations::Annotations;
use crate::options::RewriteOptions;

/// What the request phase learned about a preflight, carried to the
/// response phase of the same exchange.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PreflightFacts {
    /// The preflight asked for the marker header and the list was rewritten.
    pub marker_preflight: bool,
    /// Removing the marker emptied the list and the default header was injected.
    pub default_substituted: bool,
}

impl PreflightFacts {
    pub fn is_empty(&self) -> bool {
        !self.marker_preflight && !self.default_substituted
    }

    /// Facts never revert to `false` once recorded for an exchange.
    pub fn merge(&mut self, other: PreflightFacts) {
        self.marker_preflight |= other.marker_preflight;
        self.default_substituted |= other.default_substituted;
    }

    /// Appends one line per fact to the notes: the marker header name for a
    /// marker preflight, the default header name for a substitution.
    pub fn write_notes(&self, annotations: &mut Annotations, options: &RewriteOptions) {
        if self.marker_preflight {
            annotations.append_notes(&format!("\n{}\n", options.marker_header));
        }
        if self.default_substituted {
            annotations.append_notes(&format!("{}\n", options.default_request_header));
        }
    }

    /// Reads the facts back from free text. Each fact is checked on its own,
    /// and text that merely mentions a marker line counts as the fact.
    pub fn read_notes(notes: &str, options: &RewriteOptions) -> Self {
        Self {
            marker_preflight: notes.contains(options.marker_header.as_str()),
            default_substituted: notes.contains(options.default_request_header.as_str()),
        }
    }
}

#[cfg(test)]
#[path = "correlation_test.rs"]
mod correlation_test;

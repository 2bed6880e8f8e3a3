/// Message handed back to the proxy pipeline.
///
/// Rewriting never drops, blocks or replays traffic, so every outcome
/// continues with a message; `modified` tells the host whether it changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Forward<T> {
    pub message: T,
    pub modified: bool,
}

impl<T> Forward<T> {
    pub(crate) fn unchanged(message: T) -> Self {
        Self {
            message,
            modified: false,
        }
    }

    pub(crate) fn new(message: T, modified: bool) -> Self {
        Self { message, modified }
    }

    pub fn into_inner(self) -> T {
        self.message
    }
}

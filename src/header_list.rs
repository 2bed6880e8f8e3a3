use crate::util::{equals_ignore_case, join_list, split_list};

/// Comma-separated list carried by headers such as
/// `Access-Control-Request-Headers` or `Access-Control-Allow-Methods`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct HeaderList {
    tokens: Vec<String>,
}

impl HeaderList {
    pub fn parse(value: &str) -> Self {
        Self {
            tokens: split_list(value).map(str::to_string).collect(),
        }
    }

    /// Drops every token matching `name` without regard to case.
    /// Returns `true` when at least one token was removed.
    pub fn remove_ignore_case(&mut self, name: &str) -> bool {
        let before = self.tokens.len();
        self.tokens.retain(|token| !equals_ignore_case(token, name));
        self.tokens.len() != before
    }

    pub fn push(&mut self, token: impl Into<String>) {
        self.tokens.push(token.into());
    }

    pub fn contains_ignore_case(&self, name: &str) -> bool {
        self.tokens.iter().any(|token| equals_ignore_case(token, name))
    }

    /// Exact comparison, for method lists where case is significant.
    pub fn contains_exact(&self, value: &str) -> bool {
        self.tokens.iter().any(|token| token == value)
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    pub fn to_header_value(&self) -> String {
        join_list(&self.tokens)
    }
}

#[cfg(test)]
#[path = "header_list_test.rs"]
mod header_list_test;

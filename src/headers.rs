use crate::util::{equals_ignore_case, join_list};

/// A single header line. The name keeps the casing it was written with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub name: String,
    pub value: String,
}

impl Header {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn is(&self, name: &str) -> bool {
        equals_ignore_case(&self.name, name)
    }
}

/// Ordered header lines of a request or response.
///
/// Lookups ignore case, storage preserves it, and repeated names are allowed
/// (`Set-Cookie` routinely appears more than once).
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct HeaderCollection {
    headers: Vec<Header>,
}

impl HeaderCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            headers: Vec::with_capacity(capacity),
        }
    }

    /// Value of the first header with this name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|header| header.is(name))
            .map(|header| header.value.as_str())
    }

    pub fn get_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.headers
            .iter()
            .filter(move |header| header.is(name))
            .map(|header| header.value.as_str())
    }

    /// Every line with this name folded into one comma-separated value.
    /// Blank lines are skipped; `None` only when the name is absent.
    pub fn get_joined(&self, name: &str) -> Option<String> {
        if !self.contains(name) {
            return None;
        }
        Some(join_list(
            self.get_all(name)
                .map(str::trim)
                .filter(|value| !value.is_empty()),
        ))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.headers.iter().any(|header| header.is(name))
    }

    /// Appends a header line, keeping any existing lines with the same name.
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.headers.push(Header::new(name, value));
    }

    /// Replaces the first line with this name in place and drops the rest,
    /// or appends when the name is absent. The stored name takes the casing
    /// passed here.
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.headers.iter().position(|header| header.is(name)) {
            Some(index) => {
                self.headers[index] = Header::new(name, value);
                let mut seen = 0usize;
                self.headers.retain(|header| {
                    if !header.is(name) {
                        return true;
                    }
                    seen += 1;
                    seen == 1
                });
            }
            None => self.push(name, value),
        }
    }

    /// Removes every line with this name and returns how many were dropped.
    pub fn remove(&mut self, name: &str) -> usize {
        let before = self.headers.len();
        self.headers.retain(|header| !header.is(name));
        before - self.headers.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Header> {
        self.headers.iter()
    }

    pub fn len(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    pub fn into_vec(self) -> Vec<Header> {
        self.headers
    }
}

impl<N, V> FromIterator<(N, V)> for HeaderCollection
where
    N: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        Self {
            headers: iter
                .into_iter()
                .map(|(name, value)| Header::new(name, value))
                .collect(),
        }
    }
}

impl IntoIterator for HeaderCollection {
    type Item = Header;
    type IntoIter = std::vec::IntoIter<Header>;

    fn into_iter(self) -> Self::IntoIter {
        self.headers.into_iter()
    }
}

#[cfg(test)]
#[path = "headers_test.rs"]
mod headers_test;

//! Class token view
//!
//! Read-only view of an element's `class` attribute as whitespace-separated
//! tokens. The attribute string itself stays the source of truth.

/// Borrowed token list over a class-name string
#[derive(Debug, Clone, Copy)]
pub struct ClassList<'a> {
    value: &'a str,
}

impl<'a> ClassList<'a> {
    pub fn new(value: &'a str) -> Self {
        Self { value }
    }

    /// Get number of tokens
    pub fn length(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// Get token at index
    pub fn item(&self, index: usize) -> Option<&'a str> {
        self.iter().nth(index)
    }

    /// Check if token exists
    pub fn contains(&self, token: &str) -> bool {
        self.iter().any(|t| t == token)
    }

    /// Underlying attribute string
    pub fn value(&self) -> &'a str {
        self.value
    }

    /// Iterate over tokens
    pub fn iter(&self) -> std::str::SplitWhitespace<'a> {
        self.value.split_whitespace()
    }
}

impl std::fmt::Display for ClassList<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

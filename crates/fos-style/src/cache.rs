//! Class-name pattern cache
//!
//! Compiled word-boundary patterns keyed by class name. Entries are built
//! on first lookup and kept for the cache's lifetime; the set of class
//! names a page uses is small, so there is no eviction.

use crate::StyleError;
use regex::Regex;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Per-mixin cache of class membership patterns
///
/// Each pattern matches the class as a whole token: preceded by whitespace
/// or the start of the string, followed by whitespace or the end.
#[derive(Debug, Default)]
pub struct ClassNameRegexCache {
    patterns: RefCell<HashMap<String, Rc<Regex>>>,
}

impl ClassNameRegexCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            patterns: RefCell::new(HashMap::with_capacity(capacity)),
        }
    }

    /// Pattern for `class_name`, compiling it on first use
    ///
    /// Repeated lookups return the same `Rc`.
    pub fn get(&self, class_name: &str) -> Result<Rc<Regex>, StyleError> {
        if let Some(pattern) = self.patterns.borrow().get(class_name) {
            return Ok(Rc::clone(pattern));
        }

        let source = format!(r"(^|\s){}(\s|$)", regex::escape(class_name));
        let pattern = Regex::new(&source).map_err(|source| StyleError::InvalidClassName {
            class_name: class_name.to_string(),
            source,
        })?;
        tracing::debug!("Compiled class pattern for {:?}", class_name);

        let pattern = Rc::new(pattern);
        self.patterns
            .borrow_mut()
            .insert(class_name.to_string(), Rc::clone(&pattern));
        Ok(pattern)
    }

    /// Check if a pattern has been compiled for `class_name`
    pub fn contains(&self, class_name: &str) -> bool {
        self.patterns.borrow().contains_key(class_name)
    }

    /// Number of compiled patterns
    pub fn len(&self) -> usize {
        self.patterns.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.borrow().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_cached() {
        let cache = ClassNameRegexCache::new();
        assert!(cache.is_empty());

        let first = cache.get("active").unwrap();
        let second = cache.get("active").unwrap();
        assert!(Rc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);
        assert!(cache.contains("active"));
        assert!(!cache.contains("inactive"));
    }

    #[test]
    fn test_whole_token_matching() {
        let cache = ClassNameRegexCache::new();
        let re = cache.get("b").unwrap();
        assert!(re.is_match("b"));
        assert!(re.is_match("a b c"));
        assert!(re.is_match("a\tb"));
        assert!(re.is_match("a\u{a0}b"));
        assert!(!re.is_match("ab"));
        assert!(!re.is_match("a-b c"));
        assert!(!re.is_match(""));
    }

    #[test]
    fn test_metacharacters_are_literal() {
        let cache = ClassNameRegexCache::new();
        let re = cache.get("w-1/2").unwrap();
        assert!(re.is_match("flex w-1/2"));

        let dot = cache.get("a.b").unwrap();
        assert!(dot.is_match("a.b"));
        assert!(!dot.is_match("axb"));
        assert_eq!(cache.len(), 2);
    }
}

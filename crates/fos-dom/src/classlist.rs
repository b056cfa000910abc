//! Class list (DOMTokenList semantics)
//!
//! Space-separated token set backing the `class` attribute.

use std::fmt;

/// Ordered, duplicate-free list of class tokens
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    tokens: Vec<String>,
}

impl ClassList {
    /// Create empty token list
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse from space-separated string, dropping repeats
    pub fn parse(s: &str) -> Self {
        let mut list = Self::new();
        for token in s.split_whitespace() {
            list.add(token);
        }
        list
    }

    /// Number of tokens
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Check if token exists
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t == token)
    }

    /// Add a token; returns false if it was already present or empty
    pub fn add(&mut self, token: &str) -> bool {
        if token.is_empty() || self.contains(token) {
            return false;
        }
        self.tokens.push(token.to_string());
        true
    }

    /// Remove a token; returns true if something was removed
    pub fn remove(&mut self, token: &str) -> bool {
        let before = self.tokens.len();
        self.tokens.retain(|t| t != token);
        self.tokens.len() != before
    }

    /// Toggle token, returns new state
    pub fn toggle(&mut self, token: &str, force: Option<bool>) -> bool {
        match force {
            Some(true) => {
                self.add(token);
                true
            }
            Some(false) => {
                self.remove(token);
                false
            }
            None => {
                if self.remove(token) {
                    false
                } else {
                    self.add(token)
                }
            }
        }
    }

    /// Serialized attribute value
    pub fn value(&self) -> String {
        self.tokens.join(" ")
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dedups() {
        let list = ClassList::parse("  js-accordion  accordion js-accordion ");
        assert_eq!(list.len(), 2);
        assert_eq!(list.value(), "js-accordion accordion");
    }

    #[test]
    fn test_add_remove() {
        let mut list = ClassList::new();
        assert!(list.add("foo"));
        assert!(!list.add("foo"));
        assert!(!list.add(""));
        assert!(list.add("bar"));
        assert!(list.remove("foo"));
        assert!(!list.remove("foo"));
        assert_eq!(list.value(), "bar");
    }

    #[test]
    fn test_toggle() {
        let mut list = ClassList::new();
        assert!(list.toggle("open", None));
        assert!(!list.toggle("open", None));
        assert!(list.toggle("open", Some(true)));
        assert!(list.toggle("open", Some(true)));
        assert_eq!(list.len(), 1);
        assert!(!list.toggle("open", Some(false)));
        assert!(list.is_empty());
    }
}

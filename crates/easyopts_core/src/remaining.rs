//! Command-line tokens left over after processing.

use tracing::debug;

/// Owned copies of the tokens no registered option consumed, in their
/// original order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemainingArgs {
    args: Vec<String>,
}

impl RemainingArgs {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, token: impl Into<String>) {
        self.args.push(token.into());
    }

    pub fn len(&self) -> usize {
        self.args.len()
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.args
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.args.iter()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.args
    }

    /// Release every contained string and the container.
    pub fn free(self) {
        debug!("Releasing {} remaining argument(s)", self.args.len());
    }
}

impl From<Vec<String>> for RemainingArgs {
    fn from(args: Vec<String>) -> Self {
        Self { args }
    }
}

impl Extend<String> for RemainingArgs {
    fn extend<I: IntoIterator<Item = String>>(&mut self, iter: I) {
        self.args.extend(iter);
    }
}

impl IntoIterator for RemainingArgs {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.args.into_iter()
    }
}

impl<'a> IntoIterator for &'a RemainingArgs {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.args.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_preserves_order() {
        let mut remaining = RemainingArgs::new();
        remaining.push("one");
        remaining.push("two".to_string());
        assert_eq!(remaining.len(), 2);
        assert_eq!(remaining.as_slice(), &["one".to_string(), "two".to_string()]);
        assert_eq!(remaining.into_vec(), vec!["one", "two"]);
    }

    #[test]
    fn test_free_empty() {
        let remaining = RemainingArgs::new();
        assert!(remaining.is_empty());
        remaining.free();
    }
}

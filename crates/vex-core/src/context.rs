//! Evaluation context supplied to compiled predicates

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// The label set a predicate is tested against.
///
/// Labels are unique and unordered. The context is read-only from the
/// predicate's perspective and is never retained beyond a single
/// invocation; the caller owns its lifetime.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationContext {
    pub labels: HashSet<String>,
}

impl EvaluationContext {
    /// Create an empty context
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a label to the context
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.labels.insert(label.into());
        self
    }

    /// Check whether the context contains a label
    pub fn contains(&self, label: &str) -> bool {
        self.labels.contains(label)
    }
}

impl<S: Into<String>> FromIterator<S> for EvaluationContext {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            labels: iter.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let ctx = EvaluationContext::new().with_label("beta").with_label("internal");
        assert!(ctx.contains("beta"));
        assert!(ctx.contains("internal"));
        assert!(!ctx.contains("prod"));
    }

    #[test]
    fn test_labels_are_unique() {
        let ctx = EvaluationContext::new().with_label("beta").with_label("beta");
        assert_eq!(ctx.labels.len(), 1);
    }

    #[test]
    fn test_from_iterator() {
        let ctx: EvaluationContext = ["a", "b"].into_iter().collect();
        assert!(ctx.contains("a"));
        assert!(ctx.contains("b"));
        assert_eq!(ctx.labels.len(), 2);
    }

    #[test]
    fn test_serde_round_trip() {
        let ctx: EvaluationContext = ["beta", "env-prod"].into_iter().collect();
        let json = serde_json::to_string(&ctx).unwrap();
        let back: EvaluationContext = serde_json::from_str(&json).unwrap();
        assert_eq!(ctx, back);
    }
}

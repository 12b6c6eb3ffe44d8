//! Threshold-based advisory rules

/// Emit `message` when the metric mean is strictly below `threshold`
#[derive(Debug, Clone, Copy)]
pub struct AdvisoryRule {
    pub threshold: f64,
    pub message: &'static str,
}

impl AdvisoryRule {
    pub const fn new(threshold: f64, message: &'static str) -> Self {
        Self { threshold, message }
    }

    pub fn fires(&self, mean: f64) -> bool {
        mean < self.threshold
    }
}

/// Collect advisories for `(rule, mean)` pairs in order, falling back to
/// `fallback` when no rule fires. Never returns an empty list.
pub fn advise<'a, I>(pairs: I, fallback: &str) -> Vec<String>
where
    I: IntoIterator<Item = (&'a AdvisoryRule, f64)>,
{
    let mut advice: Vec<String> = pairs
        .into_iter()
        .filter(|(rule, mean)| rule.fires(*mean))
        .map(|(rule, _)| rule.message.to_string())
        .collect();

    if advice.is_empty() {
        advice.push(fallback.to_string());
    }
    advice
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const A: AdvisoryRule = AdvisoryRule::new(0.6, "fix a");
    const B: AdvisoryRule = AdvisoryRule::new(0.6, "fix b");

    #[test]
    fn test_rules_in_order() {
        let advice = advise([(&A, 0.2), (&B, 0.59)], "great");
        assert_eq!(advice, vec!["fix a", "fix b"]);
    }

    #[test]
    fn test_threshold_is_strict() {
        let advice = advise([(&A, 0.6), (&B, 0.9)], "great");
        assert_eq!(advice, vec!["great"]);
    }

    proptest! {
        #[test]
        fn prop_never_empty(a in 0.0f64..=1.0, b in 0.0f64..=1.0) {
            prop_assert!(!advise([(&A, a), (&B, b)], "great").is_empty());
        }
    }
}

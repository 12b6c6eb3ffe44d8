//! Table-driven band lookups
//!
//! Two shapes of table show up in the engines:
//! - metric step tables, mapping a raw geometric quantity to a fixed score
//!   with strict `<` upper bounds
//! - verdict tables, mapping an aggregated score to an assessment with
//!   inclusive `>=` lower bounds

use tracing::debug;

/// One step of a metric table: values strictly below `below` score `score`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    pub below: f64,
    pub score: f64,
}

impl Step {
    pub const fn new(below: f64, score: f64) -> Self {
        Self { below, score }
    }
}

/// Ascending step table with a score for everything past the last bound
#[derive(Debug, Clone, Copy)]
pub struct StepTable {
    pub steps: &'static [Step],
    pub otherwise: f64,
}

/// Look up `value` in a step table.
///
/// A value equal to a bound falls through to the next step.
pub fn step_score(value: f64, table: &StepTable) -> f64 {
    table
        .steps
        .iter()
        .find(|step| value < step.below)
        .map(|step| step.score)
        .unwrap_or(table.otherwise)
}

/// One verdict band: scores at or above `min_score` get `assessment`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Verdict<A> {
    pub min_score: f64,
    pub assessment: A,
    pub interpretation: &'static str,
}

/// Pick the first band (ordered best to worst) whose floor `score` reaches,
/// or `floor` when none does.
pub fn classify<'a, A: Copy + std::fmt::Debug>(
    score: f64,
    bands: &'a [Verdict<A>],
    floor: &'a Verdict<A>,
) -> &'a Verdict<A> {
    let verdict = bands
        .iter()
        .find(|band| score >= band.min_score)
        .unwrap_or(floor);
    debug!("Score {:.3} classified as {:?}", score, verdict.assessment);
    verdict
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const OPENING: StepTable = StepTable {
        steps: &[
            Step::new(0.015, 0.1),
            Step::new(0.025, 0.5),
            Step::new(0.035, 0.75),
            Step::new(0.065, 1.0),
            Step::new(0.10, 0.7),
        ],
        otherwise: 0.3,
    };

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Grade {
        High,
        Mid,
        Low,
    }

    const GRADES: [Verdict<Grade>; 2] = [
        Verdict { min_score: 0.7, assessment: Grade::High, interpretation: "high" },
        Verdict { min_score: 0.5, assessment: Grade::Mid, interpretation: "mid" },
    ];
    const FLOOR: Verdict<Grade> = Verdict { min_score: 0.0, assessment: Grade::Low, interpretation: "low" };

    #[test]
    fn test_step_lookup() {
        assert_eq!(step_score(0.0, &OPENING), 0.1);
        assert_eq!(step_score(0.05, &OPENING), 1.0);
        assert_eq!(step_score(0.2, &OPENING), 0.3);
    }

    #[test]
    fn test_step_boundary_falls_to_next_band() {
        assert_eq!(step_score(0.015, &OPENING), 0.5);
        assert_eq!(step_score(0.065, &OPENING), 0.7);
        assert_eq!(step_score(0.10, &OPENING), 0.3);
    }

    #[test]
    fn test_classify_inclusive_floor() {
        assert_eq!(classify(0.7, &GRADES, &FLOOR).assessment, Grade::High);
        assert_eq!(classify(0.69, &GRADES, &FLOOR).assessment, Grade::Mid);
        assert_eq!(classify(0.5, &GRADES, &FLOOR).assessment, Grade::Mid);
        assert_eq!(classify(0.49, &GRADES, &FLOOR).assessment, Grade::Low);
        assert_eq!(classify(f64::NAN, &GRADES, &FLOOR).interpretation, "low");
    }

    proptest! {
        #[test]
        fn prop_step_score_is_a_table_entry(value in -1.0f64..2.0) {
            let score = step_score(value, &OPENING);
            let known = OPENING.steps.iter().any(|s| s.score == score) || score == OPENING.otherwise;
            prop_assert!(known);
        }
    }
}

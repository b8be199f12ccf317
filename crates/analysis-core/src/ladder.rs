//! Threshold ladders.
//!
//! Interpretation rules are plain data: an ordered list of rungs, each a cut
//! point with the score and label it yields. Evaluation returns the first rung
//! the value satisfies, so tables are written best-first or worst-first and the
//! rung order is part of the rule.

use serde::Serialize;

/// Comparison a rung applies to the observed value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Cut {
    /// value > bound
    Above(f64),
    /// value >= bound
    AtLeast(f64),
    /// value < bound
    Below(f64),
    /// value <= bound
    AtMost(f64),
}

impl Cut {
    pub fn admits(&self, value: f64) -> bool {
        match *self {
            Cut::Above(b) => value > b,
            Cut::AtLeast(b) => value >= b,
            Cut::Below(b) => value < b,
            Cut::AtMost(b) => value <= b,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Outcome {
    pub score: f64,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rung {
    pub cut: Cut,
    pub outcome: Outcome,
}

pub const fn above(bound: f64, score: f64, label: &'static str) -> Rung {
    Rung { cut: Cut::Above(bound), outcome: Outcome { score, label } }
}

pub const fn at_least(bound: f64, score: f64, label: &'static str) -> Rung {
    Rung { cut: Cut::AtLeast(bound), outcome: Outcome { score, label } }
}

pub const fn below(bound: f64, score: f64, label: &'static str) -> Rung {
    Rung { cut: Cut::Below(bound), outcome: Outcome { score, label } }
}

pub const fn at_most(bound: f64, score: f64, label: &'static str) -> Rung {
    Rung { cut: Cut::AtMost(bound), outcome: Outcome { score, label } }
}

pub const fn outcome(score: f64, label: &'static str) -> Outcome {
    Outcome { score, label }
}

/// An ordered rule table for one indicator in one context.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Ladder {
    pub rungs: &'static [Rung],
    /// Result when no rung matches.
    pub otherwise: Outcome,
    /// Result when the value is absent or not finite.
    pub missing: Outcome,
}

impl Ladder {
    pub const fn new(rungs: &'static [Rung], otherwise: Outcome, missing: Outcome) -> Self {
        Self { rungs, otherwise, missing }
    }

    pub fn evaluate(&self, value: Option<f64>) -> Outcome {
        match value {
            Some(v) if v.is_finite() => self.rate(v),
            _ => self.missing,
        }
    }

    fn rate(&self, value: f64) -> Outcome {
        self.rungs
            .iter()
            .find(|rung| rung.cut.admits(value))
            .map(|rung| rung.outcome)
            .unwrap_or(self.otherwise)
    }

    /// Every score the table can produce, including fallbacks.
    pub fn scores(&self) -> impl Iterator<Item = f64> + '_ {
        self.rungs
            .iter()
            .map(|r| r.outcome.score)
            .chain([self.otherwise.score, self.missing.score])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static SAMPLE: Ladder = Ladder::new(
        &[
            above(0.20, 10.0, "excellent"),
            above(0.10, 7.0, "good"),
            at_least(0.0, 4.0, "weak"),
        ],
        outcome(1.0, "negative"),
        outcome(4.0, "unavailable"),
    );

    #[test]
    fn test_first_matching_rung_wins() {
        assert_eq!(SAMPLE.evaluate(Some(0.5)).score, 10.0);
        assert_eq!(SAMPLE.evaluate(Some(0.15)).score, 7.0);
        assert_eq!(SAMPLE.evaluate(Some(0.0)).label, "weak");
    }

    #[test]
    fn test_boundaries_are_strict_for_above() {
        assert_eq!(SAMPLE.evaluate(Some(0.20)).score, 7.0);
        assert_eq!(SAMPLE.evaluate(Some(0.10)).score, 4.0);
    }

    #[test]
    fn test_fallbacks() {
        assert_eq!(SAMPLE.evaluate(Some(-0.3)).label, "negative");
        assert_eq!(SAMPLE.evaluate(None).label, "unavailable");
        assert_eq!(SAMPLE.evaluate(Some(f64::NAN)).label, "unavailable");
        assert_eq!(SAMPLE.evaluate(Some(f64::INFINITY)).label, "unavailable");
    }

    #[test]
    fn test_cut_variants() {
        assert!(Cut::Below(1.0).admits(0.99));
        assert!(!Cut::Below(1.0).admits(1.0));
        assert!(Cut::AtMost(1.0).admits(1.0));
        assert!(Cut::AtLeast(1.0).admits(1.0));
    }

    #[test]
    fn test_scores_lists_every_outcome() {
        let all: Vec<f64> = SAMPLE.scores().collect();
        assert_eq!(all, vec![10.0, 7.0, 4.0, 1.0, 4.0]);
    }
}

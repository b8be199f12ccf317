use analysis_core::{AnalysisError, SentimentClassifier, SentimentProbabilities};
use async_trait::async_trait;
use std::collections::HashSet;

const POSITIVE_WORDS: &[&str] = &[
    "bullish", "rally", "surge", "gain", "gains", "profit", "growth", "beat", "beats",
    "upgrade", "upgraded", "outperform", "strong", "positive", "rise", "increase",
    "breakthrough", "record", "exceed", "exceeds", "momentum", "optimistic", "advance",
    "dividend", "buyback", "repurchase", "accretive", "upside", "recovery", "rebound",
    "expansion", "robust", "accelerating", "overweight", "raised", "tailwind",
];

const NEGATIVE_WORDS: &[&str] = &[
    "bearish", "decline", "loss", "losses", "fall", "plunge", "crash", "miss", "misses",
    "downgrade", "downgraded", "underperform", "weak", "negative", "drop", "decrease",
    "concern", "risk", "fail", "disappoint", "slump", "warning", "pessimistic", "fear",
    "dilution", "dilutive", "headwind", "lawsuit", "litigation", "recall", "investigation",
    "probe", "default", "bankruptcy", "restructuring", "layoff", "layoffs", "downside",
    "overvalued", "underweight", "lowered", "suspended",
];

const NEGATION_WORDS: &[&str] = &[
    "not", "no", "never", "don't", "doesn't", "didn't", "isn't", "aren't", "wasn't",
    "weren't", "won't", "wouldn't", "couldn't", "shouldn't", "hardly", "without",
];

/// A negation flips polarity words up to this many positions after it.
const NEGATION_WINDOW: usize = 3;

/// Net hits that saturate the polarity scale.
const SATURATION: f64 = 3.0;

/// Word-list classifier used when no pretrained model is reachable.
pub struct LexiconClassifier {
    positive: HashSet<&'static str>,
    negative: HashSet<&'static str>,
    negation: HashSet<&'static str>,
}

impl LexiconClassifier {
    pub fn new() -> Self {
        Self {
            positive: POSITIVE_WORDS.iter().copied().collect(),
            negative: NEGATIVE_WORDS.iter().copied().collect(),
            negation: NEGATION_WORDS.iter().copied().collect(),
        }
    }

    /// Signed count of polarity words, with negation applied.
    pub fn net_hits(&self, text: &str) -> i32 {
        let lowered = text.to_lowercase();
        let words: Vec<&str> = lowered
            .split(|c: char| c.is_whitespace() || matches!(c, ',' | ';' | '.' | '!' | '?' | ':' | '(' | ')'))
            .filter(|w| !w.is_empty())
            .collect();

        let negations: Vec<usize> = words
            .iter()
            .enumerate()
            .filter(|(_, w)| self.negation.contains(*w))
            .map(|(i, _)| i)
            .collect();

        let mut score = 0;
        for (i, word) in words.iter().enumerate() {
            let sign = if self.positive.contains(*word) {
                1
            } else if self.negative.contains(*word) {
                -1
            } else {
                continue;
            };

            let negated = negations.iter().any(|&n| n < i && i - n <= NEGATION_WINDOW);
            score += if negated { -sign } else { sign };
        }
        score
    }

    /// Map net hits onto class probabilities. Whatever is not assigned to
    /// the dominant polarity stays neutral.
    pub fn probabilities(&self, text: &str) -> SentimentProbabilities {
        let strength = (self.net_hits(text) as f64 / SATURATION).tanh();
        if strength >= 0.0 {
            SentimentProbabilities {
                positive: strength,
                neutral: 1.0 - strength,
                negative: 0.0,
            }
        } else {
            SentimentProbabilities {
                positive: 0.0,
                neutral: 1.0 + strength,
                negative: -strength,
            }
        }
    }
}

impl Default for LexiconClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SentimentClassifier for LexiconClassifier {
    async fn classify(&self, text: &str) -> Result<SentimentProbabilities, AnalysisError> {
        Ok(self.probabilities(text))
    }
}

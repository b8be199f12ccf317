use analysis_core::{AnalysisError, Axis, AxisScore};
use serde::{Deserialize, Serialize};

const WEIGHT_TOLERANCE: f64 = 1e-6;

/// Share of each axis in the final score. Must sum to 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlendWeights {
    pub fundamental: f64,
    pub technical: f64,
    pub news: f64,
}

impl BlendWeights {
    pub fn new(fundamental: f64, technical: f64, news: f64) -> Self {
        Self {
            fundamental,
            technical,
            news,
        }
    }

    /// Give `news` its share and scale the other two down proportionally.
    pub fn with_news(self, news: f64) -> Self {
        let rest = 1.0 - news;
        Self {
            fundamental: self.fundamental * rest,
            technical: self.technical * rest,
            news,
        }
    }

    pub fn validate(&self) -> Result<(), AnalysisError> {
        let parts = [self.fundamental, self.technical, self.news];
        if parts.iter().any(|w| !w.is_finite() || *w < 0.0 || *w > 1.0) {
            return Err(AnalysisError::InvalidWeights(format!(
                "each weight must be within [0, 1], got {:?}",
                parts
            )));
        }

        let total: f64 = parts.iter().sum();
        if (total - 1.0).abs() > WEIGHT_TOLERANCE {
            return Err(AnalysisError::InvalidWeights(format!(
                "weights must sum to 1, got {:.6}",
                total
            )));
        }
        Ok(())
    }
}

impl Default for BlendWeights {
    fn default() -> Self {
        Self::new(0.75, 0.25, 0.0)
    }
}

/// Investment reading of the final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recommendation {
    Excellent,
    Good,
    Average,
    Weak,
}

impl Recommendation {
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            Recommendation::Excellent
        } else if score >= 65.0 {
            Recommendation::Good
        } else if score >= 50.0 {
            Recommendation::Average
        } else {
            Recommendation::Weak
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Recommendation::Excellent => "Excellent (low risk)",
            Recommendation::Good => "Good (moderate risk)",
            Recommendation::Average => "Average (watch)",
            Recommendation::Weak => "Weak (avoid)",
        }
    }
}

/// One axis as it entered the blend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlendComponent {
    pub axis: Axis,
    pub value: f64,
    /// Weight after renormalization over the axes actually present.
    pub weight: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompositeScore {
    pub score: f64,
    pub recommendation: Recommendation,
    pub label: String,
    pub components: Vec<BlendComponent>,
}

/// Convex blend of the axis scores.
///
/// Axes without any applied weight, and a missing news score, are left out
/// and the remaining blend weights are renormalized to sum to 1.
pub fn compute_final_score(
    fundamental: &AxisScore,
    technical: &AxisScore,
    news: Option<f64>,
    weights: &BlendWeights,
) -> Result<CompositeScore, AnalysisError> {
    weights.validate()?;

    let mut present = Vec::with_capacity(3);
    if !fundamental.is_empty() {
        present.push((Axis::Fundamental, fundamental.value, weights.fundamental));
    }
    if !technical.is_empty() {
        present.push((Axis::Technical, technical.value, weights.technical));
    }
    if let Some(news) = news.filter(|n| n.is_finite()) {
        present.push((Axis::Sentiment, news.clamp(0.0, 100.0), weights.news));
    }
    present.retain(|(_, _, w)| *w > 0.0);

    let total: f64 = present.iter().map(|(_, _, w)| w).sum();
    if total <= 0.0 {
        return Err(AnalysisError::InsufficientData(
            "No weighted axis available for the final score".to_string(),
        ));
    }

    let components: Vec<BlendComponent> = present
        .into_iter()
        .map(|(axis, value, w)| BlendComponent {
            axis,
            value,
            weight: w / total,
        })
        .collect();

    let score = components
        .iter()
        .map(|c| c.value * c.weight)
        .sum::<f64>()
        .clamp(0.0, 100.0);
    let recommendation = Recommendation::from_score(score);

    Ok(CompositeScore {
        score,
        recommendation,
        label: recommendation.label().to_string(),
        components,
    })
}

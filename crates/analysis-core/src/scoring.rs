use crate::{Axis, AxisScore, IndicatorScore};

/// Aggregate scored indicators into a 0-100 axis value.
///
/// Indicators with zero weight are dropped. The weighted sum
/// `Σ(score × weight) / 10` is rescaled by `100 / Σweight` so that indicators
/// absent from the list do not drag the result down. With no applied weight
/// the value is 0 and `applied_weight` is 0.
pub fn compute_axis_score(axis: Axis, scores: Vec<IndicatorScore>) -> AxisScore {
    let contributing: Vec<IndicatorScore> = scores
        .into_iter()
        .filter(|s| s.weight > 0.0)
        .collect();

    let applied_weight: f64 = contributing.iter().map(|s| s.weight).sum();
    let points: f64 = contributing.iter().map(|s| s.weighted_points()).sum();

    let value = if applied_weight > 0.0 {
        (points * 100.0 / applied_weight).clamp(0.0, 100.0)
    } else {
        0.0
    };

    AxisScore {
        axis,
        value,
        applied_weight,
        contributing,
    }
}

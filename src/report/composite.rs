use super::scores::ScoreMap;
use super::steps::AssessmentStep;

/// Weighting declaration faults. These indicate a policy or taxonomy bug,
/// never bad assessment data, and are not recovered from.
#[derive(Debug, thiserror::Error)]
pub enum CompositeError {
    #[error("expected one weight per source, got {sources} sources and {weights} weights")]
    WeightCountMismatch { sources: usize, weights: usize },
    #[error("stage weight at position {index} is negative ({weight})")]
    NegativeWeight { index: usize, weight: f64 },
}

/// Supplies the per-stage weights applied when one taxonomy is measured at
/// several assessment stages. Policy lives outside the engine; the engine
/// only requires non-negative weights aligned positionally with the stages
/// it passes in.
pub trait StageWeighting: Send + Sync {
    fn stage_weights(&self, stages: &[AssessmentStep]) -> Vec<f64>;
}

/// Fixed weight-per-stage table. Stages without an entry weigh 1.0.
#[derive(Debug, Clone)]
pub struct StageWeightTable {
    weights: Vec<(AssessmentStep, f64)>,
}

impl StageWeightTable {
    pub fn new(weights: Vec<(AssessmentStep, f64)>) -> Self {
        Self { weights }
    }

    fn weight_for(&self, stage: AssessmentStep) -> f64 {
        self.weights
            .iter()
            .find(|(candidate, _)| *candidate == stage)
            .map(|(_, weight)| *weight)
            .unwrap_or(1.0)
    }
}

impl Default for StageWeightTable {
    fn default() -> Self {
        Self::new(
            AssessmentStep::ordered()
                .into_iter()
                .map(|stage| (stage, 1.0))
                .collect(),
        )
    }
}

impl StageWeighting for StageWeightTable {
    fn stage_weights(&self, stages: &[AssessmentStep]) -> Vec<f64> {
        stages.iter().map(|stage| self.weight_for(*stage)).collect()
    }
}

/// Combines per-category scores measured at several stages into one score
/// per category.
///
/// Output categories are the union of the sources' categories in first-seen
/// order. Each category's weighted score sum is divided by the summed
/// weights of only the sources that measured it, so a category measured by
/// a single source is not diluted by the weights of sources that never saw
/// it. A zero score counts as "not measured": historical exports never
/// distinguished a zero from an absent category, and both stay out of the
/// divisor.
pub fn composite_of(sources: &[ScoreMap], weights: &[f64]) -> Result<ScoreMap, CompositeError> {
    if sources.len() != weights.len() {
        return Err(CompositeError::WeightCountMismatch {
            sources: sources.len(),
            weights: weights.len(),
        });
    }
    if let Some((index, weight)) = weights
        .iter()
        .copied()
        .enumerate()
        .find(|(_, weight)| *weight < 0.0)
    {
        return Err(CompositeError::NegativeWeight { index, weight });
    }

    let mut composite = ScoreMap::new();
    for source in sources {
        for (label, _) in source.iter() {
            if composite.contains(label) {
                continue;
            }

            let mut weighted_sum = 0.0;
            let mut measured_weight = 0.0;
            for (other, weight) in sources.iter().zip(weights) {
                match other.get(label) {
                    Some(score) if score != 0.0 => {
                        weighted_sum += weight * score;
                        measured_weight += weight;
                    }
                    _ => {}
                }
            }

            let score = if measured_weight > 0.0 {
                weighted_sum / measured_weight
            } else {
                0.0
            };
            composite.insert(label, score);
        }
    }

    Ok(composite)
}

//! Per-number scoring.
//!
//! The "AI" signal is a [`ScoreModel`]. The only model so far is
//! [`PlaceholderModel`], seeded uniform noise standing in for a trained
//! predictor. Anything implementing the trait can be dropped in without
//! touching the statistics or the selection.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::Weights;
use crate::draw::POOL_SIZE;
use crate::stats::NumberStats;

pub trait ScoreModel {
    fn name(&self) -> &str;

    /// One score per number, index `i` for number `i + 1`.
    fn scores(&self, stats: &NumberStats) -> Vec<f64>;
}

/// Uniform `[0, 1)` scores from a seeded generator, independent of history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaceholderModel {
    seed: u64,
}

impl PlaceholderModel {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl ScoreModel for PlaceholderModel {
    fn name(&self) -> &str {
        "placeholder"
    }

    fn scores(&self, _stats: &NumberStats) -> Vec<f64> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        (0..POOL_SIZE).map(|_| rng.gen::<f64>()).collect()
    }
}

/// `model * w.model + frequency * w.frequency + gap * w.gap`, element-wise.
pub fn hybrid_scores(model: &[f64], frequency: &[f64], gap: &[f64], weights: &Weights) -> Vec<f64> {
    model
        .iter()
        .zip(frequency)
        .zip(gap)
        .map(|((m, f), g)| weights.model * m + weights.frequency * f + weights.gap * g)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::History;

    fn empty_stats() -> NumberStats {
        NumberStats::compute(&History::default(), 100)
    }

    #[test]
    fn test_placeholder_is_reproducible() {
        let stats = empty_stats();
        let a = PlaceholderModel::new(42).scores(&stats);
        let b = PlaceholderModel::new(42).scores(&stats);
        assert_eq!(a.len(), POOL_SIZE);
        assert_eq!(a, b);
    }

    #[test]
    fn test_placeholder_range() {
        let scores = PlaceholderModel::new(7).scores(&empty_stats());
        assert!(scores.iter().all(|&s| (0.0..1.0).contains(&s)));
    }

    #[test]
    fn test_placeholder_seed_matters() {
        let stats = empty_stats();
        assert_ne!(
            PlaceholderModel::new(1).scores(&stats),
            PlaceholderModel::new(2).scores(&stats)
        );
    }

    #[test]
    fn test_hybrid_is_weighted_sum() {
        let w = Weights::default();
        let hybrid = hybrid_scores(&[1.0, 0.0, 0.4], &[0.0, 1.0, 0.2], &[0.0, 0.0, 1.0], &w);
        assert!((hybrid[0] - 0.5).abs() < 1e-12);
        assert!((hybrid[1] - 0.3).abs() < 1e-12);
        assert!((hybrid[2] - (0.2 + 0.06 + 0.2)).abs() < 1e-12);
    }
}

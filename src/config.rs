//! Fixed tuning constants of the analysis.

use crate::draw::PICK_COUNT;

/// Number of most recent draws the frequency statistic looks at.
pub const DEFAULT_WINDOW: usize = 100;
/// Length of the "coldest numbers" ranking.
pub const DEFAULT_COLD_LIMIT: usize = 10;
/// Seed of the placeholder model.
pub const DEFAULT_SEED: u64 = 42;

/// Weights of the hybrid score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weights {
    pub model: f64,
    pub frequency: f64,
    pub gap: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            model: 0.5,
            frequency: 0.3,
            gap: 0.2,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisConfig {
    pub window: usize,
    pub pick_count: usize,
    pub cold_limit: usize,
    pub seed: u64,
    pub weights: Weights,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            window: DEFAULT_WINDOW,
            pick_count: PICK_COUNT,
            cold_limit: DEFAULT_COLD_LIMIT,
            seed: DEFAULT_SEED,
            weights: Weights::default(),
        }
    }
}

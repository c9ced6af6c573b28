//! History in, display-ready data products out.

use chrono::NaiveDate;
use tracing::info;

use crate::config::AnalysisConfig;
use crate::draw::History;
use crate::scorer::{hybrid_scores, PlaceholderModel, ScoreModel};
use crate::selector::top_k;
use crate::stats::{ColdNumber, NumberStats};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredictionKind {
    Model,
    Statistical,
    Hybrid,
}

impl PredictionKind {
    pub const ALL: [PredictionKind; 3] = [
        PredictionKind::Model,
        PredictionKind::Statistical,
        PredictionKind::Hybrid,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PredictionKind::Model => "AI prediction",
            PredictionKind::Statistical => "Statistical prediction",
            PredictionKind::Hybrid => "Hybrid prediction",
        }
    }

    /// Badge colour as RGB.
    pub fn color(&self) -> [u8; 3] {
        match self {
            PredictionKind::Model => [0x21, 0x96, 0xF3],
            PredictionKind::Statistical => [0x9C, 0x27, 0xB0],
            PredictionKind::Hybrid => [0xFF, 0x57, 0x22],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prediction {
    pub kind: PredictionKind,
    pub numbers: Vec<u8>,
}

/// Everything one run produces.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub draw_count: usize,
    pub date_range: Option<(NaiveDate, NaiveDate)>,
    pub stats: NumberStats,
    pub model_scores: Vec<f64>,
    pub hybrid_scores: Vec<f64>,
    pub predictions: Vec<Prediction>,
    pub coldest: Vec<ColdNumber>,
}

impl Analysis {
    /// Runs the analysis with the seeded placeholder model.
    pub fn run(history: &History, config: &AnalysisConfig) -> Self {
        analyze(history, config, &PlaceholderModel::new(config.seed))
    }

    pub fn prediction(&self, kind: PredictionKind) -> Option<&Prediction> {
        self.predictions.iter().find(|p| p.kind == kind)
    }
}

pub fn analyze(history: &History, config: &AnalysisConfig, model: &dyn ScoreModel) -> Analysis {
    let stats = NumberStats::compute(history, config.window);
    let model_scores = model.scores(&stats);

    // Blend model, frequency and gap into one score per number
    let hybrid = hybrid_scores(&model_scores, &stats.frequency, &stats.gap, &config.weights);

    // One prediction per signal
    let predictions: Vec<Prediction> = PredictionKind::ALL
        .iter()
        .map(|&kind| {
            let scores = match kind {
                PredictionKind::Model => &model_scores,
                PredictionKind::Statistical => &stats.frequency,
                PredictionKind::Hybrid => &hybrid,
            };
            Prediction {
                kind,
                numbers: top_k(scores, config.pick_count),
            }
        })
        .collect();

    for p in &predictions {
        info!(kind = p.kind.label(), model = model.name(), numbers = ?p.numbers, "prediction");
    }

    // Longest absent numbers for the ranking table
    let coldest = stats.coldest(config.cold_limit);

    Analysis {
        draw_count: history.len(),
        date_range: history.date_range(),
        stats,
        model_scores,
        hybrid_scores: hybrid,
        predictions,
        coldest,
    }
}

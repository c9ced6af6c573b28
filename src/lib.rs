//! Loto6 number predictor.
//!
//! Loads the published draw history, derives per-number frequency and gap
//! statistics, blends them with a model score and picks three candidate sets.

pub mod app;
pub mod chart;
pub mod config;
pub mod draw;
pub mod error;
pub mod pipeline;
pub mod report;
pub mod scorer;
pub mod selector;
pub mod source;
pub mod stats;

pub use config::{AnalysisConfig, Weights};
pub use draw::{Draw, DrawError, History, PICK_COUNT, POOL_SIZE};
pub use error::{LotoError, LotoResult};
pub use pipeline::{analyze, Analysis, Prediction, PredictionKind};

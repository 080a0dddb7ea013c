//! Training pipeline abstractions
//!
//! This module provides composable pipelines for:
//! - Training the rote learner against scripted opponents
//! - Running curricula of sequential training blocks
//! - Recording observations during training

pub mod learners;
pub mod observers;
pub mod regimen;
pub mod training;

// Re-export learner implementations (adapters)
pub use learners::{AggressiveLearner, FirstMoveLearner, RandomLearner, RoteLearner, opponent};
// Re-export observer implementations (adapters)
pub use observers::{GameLogEntry, JsonlObserver, MilestoneObserver, ProgressObserver};
pub use regimen::{OpponentType, TrainingBlock};
pub use training::{TrainingConfig, TrainingPipeline, TrainingResult};

pub use crate::ports::{Learner, Observer};

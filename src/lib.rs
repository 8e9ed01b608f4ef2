//! Frequency-weighted predictive text over a prefix tree.
//!
//! [`PredictiveText`] bundles a [`TrieStore`] with autocompletion, bounded
//! spelling correction, coarse next-word prediction and a flat text
//! persistence format.

pub mod config;
pub mod correct;
pub mod engine;
pub mod error;
pub mod persist;
pub mod predict;
pub mod suggest;
pub mod text;
pub mod trie;

pub use config::EngineConfig;
pub use correct::{Correction, CorrectionEngine, CorrectionOutcome};
pub use engine::PredictiveText;
pub use error::{ConfigError, PersistError};
pub use predict::{ContextClass, ContextPredictor};
pub use trie::{Stats, TrieNode, TrieStore};

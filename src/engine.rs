use crate::config::EngineConfig;
use crate::correct::{Correction, CorrectionEngine};
use crate::error::PersistError;
use crate::persist;
use crate::predict::ContextPredictor;
use crate::suggest::suggest;
use crate::text::split_words;
use crate::trie::{Stats, TrieStore};
use log::{debug, info};
use std::path::Path;

/// Starter vocabulary with initial weights. "would" is listed twice and the
/// second entry accumulates like any other insert.
#[rustfmt::skip]
const COMMON_WORDS: &[(&str, u64)] = &[
    ("the", 100), ("and", 90), ("to", 85), ("of", 80), ("a", 75),
    ("in", 70), ("is", 65), ("it", 60), ("you", 55), ("that", 50),
    ("he", 45), ("was", 45), ("for", 40), ("on", 40), ("are", 35),
    ("as", 35), ("with", 30), ("his", 30), ("they", 25), ("i", 25),
    ("at", 20), ("be", 20), ("this", 20), ("have", 18), ("from", 18),
    ("or", 15), ("one", 15), ("had", 15), ("by", 12), ("word", 12),
    ("but", 10), ("not", 10), ("what", 10), ("all", 8), ("were", 8),
    ("would", 7), ("there", 7), ("we", 6), ("when", 6), ("your", 5),
    ("can", 12), ("said", 11), ("each", 9), ("which", 9), ("she", 8),
    ("do", 15), ("how", 12), ("their", 10), ("if", 14), ("will", 13),
    ("up", 11), ("other", 8), ("about", 7), ("out", 10), ("many", 6),
    ("then", 9), ("them", 8), ("these", 6), ("so", 12), ("some", 7),
    ("her", 9), ("would", 7), ("make", 8), ("like", 9), ("into", 6),
    ("him", 7), ("time", 8), ("has", 9), ("two", 6), ("more", 7),
    ("go", 8), ("no", 9), ("way", 6), ("could", 6), ("my", 10),
    ("than", 6), ("first", 5), ("been", 6), ("call", 4), ("who", 7),
    ("its", 5), ("now", 8), ("find", 5), ("long", 4), ("down", 5),
    ("day", 6), ("did", 6), ("get", 8), ("come", 5), ("made", 5),
    ("may", 4), ("part", 4), ("over", 5), ("new", 6), ("sound", 3),
    ("take", 6), ("only", 5), ("little", 4), ("work", 5), ("know", 7),
];

/// A predictive text engine: one frequency-weighted word store plus the
/// completion, correction, prediction and persistence operations over it.
///
/// Readers take `&self` and writers `&mut self`; wrap the engine in a lock
/// to share it across threads.
#[derive(Debug, Clone)]
pub struct PredictiveText {
    store: TrieStore,
    config: EngineConfig,
}

impl Default for PredictiveText {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl PredictiveText {
    pub fn new(config: EngineConfig) -> Self {
        let mut engine = PredictiveText {
            store: TrieStore::new(),
            config,
        };
        if engine.config.seed_common_words {
            for (word, frequency) in COMMON_WORDS {
                engine.store.insert(word, *frequency);
            }
            debug!("seeded {} common words", engine.store.stats().words);
        }
        engine
    }

    /// An engine with default settings and no seeded vocabulary.
    pub fn empty() -> Self {
        Self::new(EngineConfig {
            seed_common_words: false,
            ..EngineConfig::default()
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn store(&self) -> &TrieStore {
        &self.store
    }

    pub fn insert(&mut self, word: &str, increment: u64) {
        self.store.insert(word, increment);
    }

    pub fn lookup(&self, word: &str) -> bool {
        self.store.lookup(word)
    }

    pub fn frequency(&self, word: &str) -> Option<u64> {
        self.store.frequency(word)
    }

    pub fn suggest(&self, prefix: &str, limit: usize) -> Vec<String> {
        suggest(&self.store, prefix, limit)
    }

    pub fn suggest_default(&self, prefix: &str) -> Vec<String> {
        self.suggest(prefix, self.config.default_limit)
    }

    fn corrector(&self) -> CorrectionEngine<'_> {
        CorrectionEngine::new(&self.store, self.config.max_edit_cost, self.config.edit_penalty)
    }

    pub fn correct(&self, word: &str) -> String {
        self.corrector().correct(word)
    }

    pub fn corrections(&self, word: &str, n: usize) -> Vec<Correction> {
        self.corrector().candidates(word, n)
    }

    pub fn correct_words(&self, words: &[String]) -> Vec<String> {
        self.corrector().correct_words(words)
    }

    pub fn predict_next(&self, context: &str) -> Vec<String> {
        ContextPredictor::new(
            &self.store,
            self.config.prediction_limit,
            self.config.starter_suggestions,
        )
        .predict(context)
    }

    /// Records that the user picked `word`, boosting it well above a plain use.
    pub fn select(&mut self, word: &str) {
        self.store.insert(word, self.config.selection_boost);
        debug!("boosted '{}' by {}", word, self.config.selection_boost);
    }

    /// Learns every word of `text` once; returns how many were learned.
    pub fn train(&mut self, text: &str) -> usize {
        let words = split_words(text);
        for word in &words {
            self.store.insert(word, 1);
        }
        info!("trained on {} words", words.len());
        words.len()
    }

    pub fn stats(&self) -> Stats {
        self.store.stats()
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<usize, PersistError> {
        persist::save(&self.store, path.as_ref())
    }

    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<usize, PersistError> {
        persist::load(&mut self.store, path.as_ref())
    }
}

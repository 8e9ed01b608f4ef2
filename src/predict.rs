use crate::suggest::suggest;
use crate::text::{normalize, split_words};
use crate::trie::TrieStore;

const PRONOUNS: &[&str] = &["i", "you", "we", "they"];
const ARTICLES: &[&str] = &["the", "a", "an"];

const PRONOUN_VERBS: &[&str] = &["am", "are", "will", "can", "have", "want", "need"];
const NOUN_STARTERS: &[char] = &['c', 'b', 'f', 'm', 'p', 's', 'w', 'h'];
const GENERAL_STARTERS: &[char] = &['t', 'a', 'i', 'o', 'h', 'w'];

/// Coarse class of the last word of a context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextClass {
    Pronoun,
    Article,
    Other,
}

impl ContextClass {
    pub fn of(word: &str) -> Self {
        if PRONOUNS.contains(&word) {
            ContextClass::Pronoun
        } else if ARTICLES.contains(&word) {
            ContextClass::Article
        } else {
            ContextClass::Other
        }
    }
}

/// Rule-based next-word guesses driven only by the last context word.
#[derive(Debug, Clone, Copy)]
pub struct ContextPredictor<'a> {
    store: &'a TrieStore,
    limit: usize,
    per_starter: usize,
}

impl<'a> ContextPredictor<'a> {
    pub fn new(store: &'a TrieStore, limit: usize, per_starter: usize) -> Self {
        ContextPredictor {
            store,
            limit,
            per_starter,
        }
    }

    fn from_starters(&self, starters: &[char]) -> Vec<String> {
        starters
            .iter()
            .flat_map(|c| suggest(self.store, &c.to_string(), self.per_starter))
            .collect()
    }

    /// Sorted, deduplicated and truncated guesses; empty for an empty context.
    pub fn predict(&self, context: &str) -> Vec<String> {
        let Some(last) = split_words(context).pop() else {
            return Vec::new();
        };

        let mut predictions = match ContextClass::of(&normalize(&last)) {
            ContextClass::Pronoun => PRONOUN_VERBS
                .iter()
                .filter(|verb| self.store.lookup(verb))
                .map(|verb| verb.to_string())
                .collect(),
            ContextClass::Article => self.from_starters(NOUN_STARTERS),
            ContextClass::Other => self.from_starters(GENERAL_STARTERS),
        };

        predictions.sort();
        predictions.dedup();
        predictions.truncate(self.limit);
        predictions
    }
}

use crate::text::normalize;
use crate::trie::{TrieNode, TrieStore};
use log::debug;
use rayon::prelude::*;
use std::collections::HashMap;

/// A dictionary word reached by the bounded search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Correction {
    pub word: String,
    /// Accumulated insertion/substitution cost along the path that found it.
    pub cost: u32,
    /// `frequency - cost * penalty`, exact for any `u64` inputs; higher is better.
    pub score: i128,
}

#[derive(Debug, Clone)]
pub enum CorrectionOutcome {
    /// The word is already in the store.
    Known,
    Corrected(Correction),
    /// Nothing within the cost cap.
    NoCandidates,
}

/// Bounded fuzzy search over the whole tree.
///
/// This is not an edit distance: only two operations are modelled, a
/// character of the candidate inserted relative to the target, and a
/// substitution. Both advance the target position together with the path,
/// and deleting a candidate character is never explored, so any fix that
/// needs the two to shift against each other is unreachable.
#[derive(Debug, Clone, Copy)]
pub struct CorrectionEngine<'a> {
    store: &'a TrieStore,
    max_cost: u32,
    penalty: u64,
}

impl<'a> CorrectionEngine<'a> {
    pub fn new(store: &'a TrieStore, max_cost: u32, penalty: u64) -> Self {
        CorrectionEngine {
            store,
            max_cost,
            penalty,
        }
    }

    fn explore(
        &self,
        node: &TrieNode,
        depth: usize,
        target: &[char],
        cost: u32,
        found: &mut HashMap<String, Correction>,
    ) {
        if cost > self.max_cost {
            return;
        }

        if node.is_terminal() {
            let score = i128::from(node.frequency()) - i128::from(cost) * i128::from(self.penalty);
            let better = found.get(node.word()).is_none_or(|c| score > c.score);
            if better {
                found.insert(
                    node.word().to_owned(),
                    Correction {
                        word: node.word().to_owned(),
                        cost,
                        score,
                    },
                );
            }
        }

        for (c, child) in node.children() {
            // insertion
            self.explore(child, depth + 1, target, cost + 1, found);

            if target.is_empty() {
                continue;
            }
            if depth < target.len() && target[depth] == c {
                self.explore(child, depth + 1, target, cost, found);
            } else {
                // substitution
                self.explore(child, depth + 1, target, cost + 1, found);
            }
        }
    }

    /// Up to `n` candidates for `word`, best score first, ties by word.
    pub fn candidates(&self, word: &str, n: usize) -> Vec<Correction> {
        if word.is_empty() {
            return Vec::new();
        }
        let target: Vec<char> = normalize(word).chars().collect();

        let mut found = HashMap::new();
        self.explore(self.store.root(), 0, &target, 0, &mut found);

        let mut candidates: Vec<Correction> = found.into_values().collect();
        candidates.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.word.cmp(&b.word)));
        candidates.truncate(n);
        candidates
    }

    pub fn check(&self, word: &str) -> CorrectionOutcome {
        if self.store.lookup(word) {
            return CorrectionOutcome::Known;
        }
        match self.candidates(word, 1).into_iter().next() {
            Some(best) => {
                debug!("correct '{}' -> '{}' (cost {}, score {})", word, best.word, best.cost, best.score);
                CorrectionOutcome::Corrected(best)
            }
            None => CorrectionOutcome::NoCandidates,
        }
    }

    /// Best replacement for `word`, or `word` itself when it is known,
    /// empty, or has no candidate within the cap.
    pub fn correct(&self, word: &str) -> String {
        match self.check(word) {
            CorrectionOutcome::Corrected(best) => best.word,
            CorrectionOutcome::Known | CorrectionOutcome::NoCandidates => word.to_owned(),
        }
    }

    pub fn correct_words(&self, words: &[String]) -> Vec<String> {
        words.par_iter().map(|word| self.correct(word)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(words: &[(&str, u64)]) -> TrieStore {
        let mut store = TrieStore::new();
        for (w, f) in words {
            store.insert(w, *f);
        }
        store
    }

    #[test]
    fn test_known_word_unchanged() {
        let store = store_with(&[("the", 100), ("then", 9)]);
        let engine = CorrectionEngine::new(&store, 2, 10);
        assert_eq!(engine.correct("the"), "the");
        assert!(matches!(engine.check("The"), CorrectionOutcome::Known));
        assert_eq!(engine.correct("The"), "The");
    }

    #[test]
    fn test_transposition_found_via_substitutions() {
        let store = store_with(&[("the", 100), ("to", 85), ("a", 75)]);
        let engine = CorrectionEngine::new(&store, 2, 10);
        // t matches, h and e are substituted: cost 2, score 80 beats "to" (75) and "a" (65)
        assert_eq!(engine.correct("teh"), "the");
        let best = engine.candidates("teh", 1);
        assert_eq!(best[0].cost, 2);
        assert_eq!(best[0].score, 80);
    }

    #[test]
    fn test_missing_trailing_letter() {
        let store = store_with(&[("spelling", 5)]);
        let engine = CorrectionEngine::new(&store, 2, 10);
        assert_eq!(engine.correct("spellin"), "spelling");
    }

    #[test]
    fn test_positions_never_shift() {
        let store = store_with(&[("spelling", 5), ("cat", 50)]);
        let engine = CorrectionEngine::new(&store, 2, 10);
        // a missing inner letter misaligns every later position
        assert_eq!(engine.correct("speling"), "speling");
        // an extra letter cannot be deleted; "cat" is only reached by
        // substituting its last letter against the doubled "a"
        let found = engine.candidates("caat", 5);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].cost, 1);
        assert_eq!(engine.correct("xxxxcat"), "xxxxcat");
    }

    #[test]
    fn test_empty_store_returns_input() {
        let store = TrieStore::new();
        let engine = CorrectionEngine::new(&store, 2, 10);
        assert_eq!(engine.correct("anything"), "anything");
        assert!(matches!(engine.check("anything"), CorrectionOutcome::NoCandidates));
    }

    #[test]
    fn test_empty_word_is_identity() {
        let store = store_with(&[("a", 75)]);
        let engine = CorrectionEngine::new(&store, 2, 10);
        assert_eq!(engine.correct(""), "");
        assert!(engine.candidates("", 5).is_empty());
        assert!(matches!(engine.check(""), CorrectionOutcome::NoCandidates));
    }

    #[test]
    fn test_candidates_never_exceed_cap() {
        let store = store_with(&[("abcdef", 1), ("abc", 1), ("xyz", 1), ("ab", 1)]);
        let engine = CorrectionEngine::new(&store, 2, 10);
        for c in engine.candidates("abd", 10) {
            assert!(c.cost <= 2, "{:?}", c);
        }
        let words: Vec<String> = engine.candidates("abd", 10).into_iter().map(|c| c.word).collect();
        assert!(!words.contains(&"abcdef".to_string()));
        assert!(!words.contains(&"xyz".to_string()));
    }

    #[test]
    fn test_score_ties_break_alphabetically() {
        let store = store_with(&[("bat", 10), ("cat", 10)]);
        let engine = CorrectionEngine::new(&store, 2, 10);
        assert_eq!(engine.correct("aat"), "bat");
    }

    #[test]
    fn test_frequency_outweighs_cost() {
        let store = store_with(&[("cart", 1), ("cares", 100)]);
        let engine = CorrectionEngine::new(&store, 2, 10);
        // "cart" matches exactly as a prefix, "cares" costs 2 but is far more frequent
        assert_eq!(engine.correct("cartx"), "cares");
    }

    #[test]
    fn test_empty_target_explores_insertions_only() {
        let store = store_with(&[("a", 75), ("ab", 1), ("abc", 1)]);
        let engine = CorrectionEngine::new(&store, 2, 10);
        let mut found = HashMap::new();
        engine.explore(store.root(), 0, &[], 0, &mut found);
        let mut words: Vec<(String, u32)> = found.into_values().map(|c| (c.word, c.cost)).collect();
        words.sort();
        assert_eq!(words, vec![("a".to_string(), 1), ("ab".to_string(), 2)]);
    }

    #[test]
    fn test_huge_frequency_still_ranks_first() {
        let store = store_with(&[("cats", 9_300_000_000_000_000_000), ("cata", 5)]);
        let engine = CorrectionEngine::new(&store, 2, 10);
        let found = engine.candidates("catx", 5);
        assert_eq!(found[0].word, "cats");
        assert_eq!(found[0].score, 9_300_000_000_000_000_000 - 10);
        assert_eq!(found[1].score, -5);
        assert_eq!(engine.correct("catx"), "cats");
    }

    #[test]
    fn test_extreme_frequency_and_penalty() {
        let store = store_with(&[("cats", u64::MAX), ("cata", 1)]);
        let engine = CorrectionEngine::new(&store, 2, u64::MAX);
        let found = engine.candidates("catx", 5);
        assert_eq!(found[0].word, "cats");
        assert_eq!(found[0].score, 0);
        assert_eq!(found[1].score, 1 - i128::from(u64::MAX));
        // a huge penalty never turns into a reward for cost
        assert!(found.iter().all(|c| c.score <= 0));
    }

    #[test]
    fn test_zero_cap_only_matches_prefix_paths() {
        let store = store_with(&[("car", 3), ("cart", 9)]);
        let engine = CorrectionEngine::new(&store, 0, 10);
        assert_eq!(engine.correct("cax"), "cax");
    }

    #[test]
    fn test_correct_words_parallel() {
        let store = store_with(&[("the", 100), ("spelling", 5)]);
        let engine = CorrectionEngine::new(&store, 2, 10);
        let words: Vec<String> = ["teh", "spellin", "the"].iter().map(|s| s.to_string()).collect();
        assert_eq!(engine.correct_words(&words), vec!["the", "spelling", "the"]);
    }
}

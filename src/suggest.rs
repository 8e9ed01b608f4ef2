use crate::trie::{TrieNode, TrieStore};

/// Every word under `node` with its frequency, in depth-first order.
fn collect_words(node: &TrieNode) -> Vec<(String, u64)> {
    let mut words = Vec::new();
    node.for_each_word(&mut |n| words.push((n.word().to_owned(), n.frequency())));
    words
}

/// Ranks all completions of `prefix`: frequency descending, then word ascending.
///
/// The whole subtree is collected before ranking, so `limit` never prunes
/// the traversal. An empty or unknown prefix yields nothing.
pub fn ranked_completions(store: &TrieStore, prefix: &str, limit: usize) -> Vec<(String, u64)> {
    if prefix.is_empty() {
        return Vec::new();
    }
    let Some(node) = store.find_prefix_node(prefix) else {
        return Vec::new();
    };

    let mut candidates = collect_words(node);
    candidates.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    candidates.truncate(limit);
    candidates
}

pub fn suggest(store: &TrieStore, prefix: &str, limit: usize) -> Vec<String> {
    ranked_completions(store, prefix, limit)
        .into_iter()
        .map(|(word, _)| word)
        .collect()
}

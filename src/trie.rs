use crate::text::normalize;
use log::trace;
use std::collections::BTreeMap;

/// One character position along a path from the root.
///
/// Children are ordered by character, which makes every depth-first walk
/// over the tree (collection, correction, saving) deterministic.
#[derive(Debug, Clone, Default)]
pub struct TrieNode {
    children: BTreeMap<char, TrieNode>,
    terminal: bool,
    frequency: u64,
    word: String,
}

impl TrieNode {
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// Accumulated weight; zero for non-terminal nodes.
    pub fn frequency(&self) -> u64 {
        self.frequency
    }

    /// The full word spelled by the path to this node, empty unless terminal.
    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn children(&self) -> impl Iterator<Item = (char, &TrieNode)> {
        self.children.iter().map(|(&c, child)| (c, child))
    }

    pub fn child(&self, c: char) -> Option<&TrieNode> {
        self.children.get(&c)
    }

    /// Visits every terminal node of this subtree in depth-first order,
    /// the node itself first, then children in ascending character order.
    pub fn for_each_word<F: FnMut(&TrieNode)>(&self, f: &mut F) {
        if self.terminal {
            f(self);
        }
        for child in self.children.values() {
            child.for_each_word(f);
        }
    }
}

/// Aggregate counts over all terminal nodes. The total saturates at `u64::MAX`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub words: usize,
    pub total_frequency: u64,
}

impl Stats {
    pub fn average_frequency(&self) -> f64 {
        if self.words == 0 {
            0.0
        } else {
            self.total_frequency as f64 / self.words as f64
        }
    }
}

/// Owns the node graph. The root represents the empty prefix and is never terminal.
#[derive(Debug, Clone, Default)]
pub struct TrieStore {
    root: TrieNode,
}

impl TrieStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    pub fn is_empty(&self) -> bool {
        self.root.children.is_empty()
    }

    /// Adds `increment` to the frequency of `word`, creating the path as needed.
    /// Empty input is ignored.
    pub fn insert(&mut self, word: &str, increment: u64) {
        if word.is_empty() {
            return;
        }
        let word = normalize(word);

        let mut node = &mut self.root;
        for c in word.chars() {
            node = node.children.entry(c).or_default();
        }
        node.terminal = true;
        node.frequency = node.frequency.saturating_add(increment);
        trace!("insert '{}' +{} -> {}", word, increment, node.frequency);
        node.word = word;
    }

    /// True only when the whole path exists and ends on a terminal node.
    pub fn lookup(&self, word: &str) -> bool {
        self.find_node(word).is_some_and(TrieNode::is_terminal)
    }

    pub fn frequency(&self, word: &str) -> Option<u64> {
        self.find_node(word)
            .filter(|node| node.terminal)
            .map(TrieNode::frequency)
    }

    /// Node reached by walking `prefix` from the root, if every edge exists.
    pub fn find_prefix_node(&self, prefix: &str) -> Option<&TrieNode> {
        self.find_node(prefix)
    }

    fn find_node(&self, path: &str) -> Option<&TrieNode> {
        let path = normalize(path);
        let mut node = &self.root;
        for c in path.chars() {
            node = node.children.get(&c)?;
        }
        Some(node)
    }

    pub fn stats(&self) -> Stats {
        let mut stats = Stats::default();
        self.root.for_each_word(&mut |node| {
            stats.words += 1;
            stats.total_frequency = stats.total_frequency.saturating_add(node.frequency);
        });
        stats
    }
}

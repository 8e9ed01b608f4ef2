/// Lowercases ASCII letters, leaving every other byte untouched.
pub fn normalize(word: &str) -> String {
    word.to_ascii_lowercase()
}

/// Splits `text` on whitespace and strips every non-alphanumeric character
/// from each token. Tokens left empty are dropped; case is preserved.
pub fn split_words(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|w| w.chars().filter(|c| c.is_ascii_alphanumeric()).collect::<String>())
        .filter(|w| !w.is_empty())
        .collect()
}

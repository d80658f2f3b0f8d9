use std::collections::HashSet;
use std::sync::LazyLock;

static ENGLISH: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    include_str!("data/stopwords_en.txt")
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect()
});

/// High-frequency English words that carry no topical weight.
pub fn is_stop_word(word: &str) -> bool {
    ENGLISH.contains(word)
}

pub fn stop_word_count() -> usize {
    ENGLISH.len()
}

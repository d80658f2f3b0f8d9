use crate::text::lemma::lemmatize;
use crate::text::stopwords::is_stop_word;
use regex::Regex;
use std::sync::LazyLock;
use unicode_segmentation::UnicodeSegmentation;

static PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\p{P}\p{S}]").expect("punctuation class is a valid pattern"));

/// Turns a sentence or query into the tokens used for vectorization:
/// lowercase, strip, drop punctuation, split into words, drop stop words,
/// lemmatize.
pub fn normalize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let stripped = PUNCTUATION.replace_all(lowered.trim(), "");

    stripped
        .unicode_words()
        .filter(|word| !is_stop_word(word))
        .map(lemmatize)
        .collect()
}

//! Rule-based lemmatizer for English nouns.
//!
//! Plural forms are reduced to their dictionary base form through an
//! irregular table followed by suffix rules. Rules are applied until the word
//! stops changing, so `lemmatize(lemmatize(w)) == lemmatize(w)` always holds.

use crate::text::stopwords::is_stop_word;

const IRREGULAR: &[(&str, &str)] = &[
    ("alumni", "alumnus"),
    ("analyses", "analysis"),
    ("cacti", "cactus"),
    ("children", "child"),
    ("crises", "crisis"),
    ("criteria", "criterion"),
    ("feet", "foot"),
    ("fungi", "fungus"),
    ("geese", "goose"),
    ("halves", "half"),
    ("indices", "index"),
    ("knives", "knife"),
    ("leaves", "leaf"),
    ("lice", "louse"),
    ("lives", "life"),
    ("loaves", "loaf"),
    ("matrices", "matrix"),
    ("men", "man"),
    ("mice", "mouse"),
    ("nuclei", "nucleus"),
    ("oxen", "ox"),
    ("people", "person"),
    ("phenomena", "phenomenon"),
    ("radii", "radius"),
    ("selves", "self"),
    ("shelves", "shelf"),
    ("teeth", "tooth"),
    ("theses", "thesis"),
    ("thieves", "thief"),
    ("vertices", "vertex"),
    ("wives", "wife"),
    ("wolves", "wolf"),
    ("women", "woman"),
];

// Words ending in `s` whose base form is the word itself.
const INVARIANT: &[&str] = &[
    "alias",
    "always",
    "athletics",
    "atlas",
    "canvas",
    "chaos",
    "christmas",
    "economics",
    "ethics",
    "gas",
    "lens",
    "mathematics",
    "means",
    "news",
    "perhaps",
    "physics",
    "politics",
    "series",
    "species",
    "texas",
];

// Plurals in `-oes` whose singular keeps the `e`.
const OES_PLURALS: &[&str] = &[
    "canoes", "floes", "foes", "hoes", "oboes", "shoes", "sloes", "toes", "woes",
];

const MIN_STEM: usize = 3;

/// Reduces `word` (already lowercased) to its base form.
pub fn lemmatize(word: &str) -> String {
    let mut current = word.to_string();
    loop {
        let next = step(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

fn step(word: &str) -> String {
    if let Some((_, base)) = IRREGULAR.iter().find(|(plural, _)| *plural == word) {
        return (*base).to_string();
    }
    if INVARIANT.contains(&word) {
        return word.to_string();
    }

    let Some(candidate) = strip_plural(word) else {
        return word.to_string();
    };
    if is_stop_word(&candidate) {
        return word.to_string();
    }
    candidate
}

fn strip_plural(word: &str) -> Option<String> {
    if word.chars().count() > 4
        && let Some(stem) = word.strip_suffix("ies")
    {
        return Some(format!("{stem}y"));
    }
    if word.ends_with("sses") || word.ends_with("zzes") {
        return word.strip_suffix("es").map(str::to_string);
    }
    if let Some(stem) = word.strip_suffix("ses") {
        let singular = format!("{stem}s");
        if INVARIANT.contains(&singular.as_str()) || ends_with_consonant_us(&singular) {
            return Some(singular);
        }
    }
    if word.ends_with("oes") && !OES_PLURALS.contains(&word) {
        return word.strip_suffix("es").map(str::to_string);
    }
    for suffix in ["xes", "ches", "shes"] {
        if word.ends_with(suffix) {
            return word.strip_suffix("es").map(str::to_string);
        }
    }
    if word.ends_with("ss") || word.ends_with("us") || word.ends_with("is") {
        return None;
    }
    if word.chars().count() > MIN_STEM {
        return word.strip_suffix('s').map(str::to_string);
    }
    None
}

// `bus`, `virus`, `bonus`; not the `-ous`/`-aus` stems of `house` or `cause`.
fn ends_with_consonant_us(word: &str) -> bool {
    let Some(stem) = word.strip_suffix("us") else {
        return false;
    };
    stem.chars()
        .last()
        .is_some_and(|c| !matches!(c, 'a' | 'e' | 'i' | 'o' | 'u'))
}

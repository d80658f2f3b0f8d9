use crate::text::stopwords::is_stop_word;
use unicode_segmentation::UnicodeSegmentation;

// Abbreviations that are practically never the last word of a sentence.
const ABBREVIATIONS: &[&str] = &[
    "approx", "capt", "cf", "col", "dr", "fig", "ft", "gen", "jr", "lt", "mr", "mrs", "ms", "mt",
    "pp", "prof", "rev", "sen", "sgt", "sr", "st", "vol", "vs",
];

/// Splits a paragraph into trimmed sentences.
///
/// Boundaries come from the Unicode sentence rules (UAX #29). A boundary right
/// after a title abbreviation (`Dr.`, `St.`) is merged back. A boundary after a
/// single capital (`J.`) is merged back only when the next sentence does not
/// open with a function word, so `John F. Kennedy` stays whole while
/// `World War I. After the war` splits.
pub fn sentences(paragraph: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut pending = String::new();
    let mut pieces = paragraph.split_sentence_bounds().peekable();

    while let Some(piece) = pieces.next() {
        pending.push_str(piece);
        let joins_next = match trailing_abbreviation(&pending) {
            Some(Abbreviation::Title) => true,
            Some(Abbreviation::Initial) => pieces.peek().is_some_and(|next| !opens_clause(next)),
            None => false,
        };
        if !joins_next {
            flush(&mut out, &mut pending);
        }
    }
    flush(&mut out, &mut pending);

    out
}

fn flush(out: &mut Vec<String>, pending: &mut String) {
    let sentence = pending.trim();
    if !sentence.is_empty() {
        out.push(sentence.to_string());
    }
    pending.clear();
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Abbreviation {
    Title,
    Initial,
}

fn trailing_abbreviation(text: &str) -> Option<Abbreviation> {
    let stem = text.trim_end().strip_suffix('.')?;
    let word = stem
        .rsplit(|c: char| c.is_whitespace() || c == '(' || c == '"')
        .next()
        .unwrap_or(stem);

    let mut chars = word.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return c.is_uppercase().then_some(Abbreviation::Initial);
    }

    ABBREVIATIONS
        .contains(&word.to_lowercase().as_str())
        .then_some(Abbreviation::Title)
}

// Sentences usually open with a pronoun, article or preposition; surnames
// after an initial do not.
fn opens_clause(text: &str) -> bool {
    text.unicode_words()
        .next()
        .is_some_and(|word| is_stop_word(&word.to_lowercase()))
}

/// One sentence of the article together with the paragraph it came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexedSentence {
    pub text: String,
    pub paragraph_id: usize,
}

impl AsRef<str> for IndexedSentence {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

/// Flat, order-preserving list of every sentence in an article, each traceable
/// back to its source paragraph.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SentenceIndex {
    entries: Vec<IndexedSentence>,
}

impl SentenceIndex {
    pub fn build<S: AsRef<str>>(paragraphs: &[S]) -> Self {
        let entries = paragraphs
            .iter()
            .enumerate()
            .flat_map(|(paragraph_id, paragraph)| {
                sentences(paragraph.as_ref())
                    .into_iter()
                    .map(move |text| IndexedSentence { text, paragraph_id })
            })
            .collect();

        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[IndexedSentence] {
        &self.entries
    }

    pub fn get(&self, id: usize) -> Option<&IndexedSentence> {
        self.entries.get(id)
    }

    pub fn sentence(&self, id: usize) -> Option<&str> {
        self.get(id).map(|entry| entry.text.as_str())
    }

    pub fn paragraph_id(&self, id: usize) -> Option<usize> {
        self.get(id).map(|entry| entry.paragraph_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &IndexedSentence> {
        self.entries.iter()
    }
}

pub mod lemma;
pub mod normalize;
pub mod segment;
pub mod stopwords;

pub use normalize::normalize;
pub use segment::{IndexedSentence, SentenceIndex, sentences};

use bellows::text::{SentenceIndex, sentences};

#[test]
fn test_simple_sentences() {
    assert_eq!(
        sentences("The sky is blue. Grass is green."),
        vec!["The sky is blue.", "Grass is green."]
    );
    assert_eq!(
        sentences("Is it?  Yes! Fine."),
        vec!["Is it?", "Yes!", "Fine."]
    );
}

#[test]
fn test_abbreviations_do_not_split() {
    assert_eq!(
        sentences("It was written by Dr. Smith in London. It sold well."),
        vec!["It was written by Dr. Smith in London.", "It sold well."]
    );
    assert_eq!(
        sentences("J. R. R. Tolkien wrote it. Then he slept."),
        vec!["J. R. R. Tolkien wrote it.", "Then he slept."]
    );
}

#[test]
fn test_capital_letter_can_end_a_sentence() {
    assert_eq!(
        sentences("He served in World War I. After the war he returned home."),
        vec!["He served in World War I.", "After the war he returned home."]
    );
    assert_eq!(
        sentences("The beef was rated Grade A. The farm closed in 1990."),
        vec!["The beef was rated Grade A.", "The farm closed in 1990."]
    );
    assert_eq!(
        sentences("John F. Kennedy was elected. He was young."),
        vec!["John F. Kennedy was elected.", "He was young."]
    );
}

#[test]
fn test_empty_paragraph() {
    assert!(sentences("").is_empty());
    assert!(sentences("   \n ").is_empty());
}

#[test]
fn test_index_traces_paragraphs() {
    let paragraphs = vec![
        "One. Two.".to_string(),
        String::new(),
        "Three?".to_string(),
    ];
    let index = SentenceIndex::build(&paragraphs);

    assert_eq!(index.len(), 3);
    assert_eq!(index.sentence(0), Some("One."));
    assert_eq!(index.sentence(1), Some("Two."));
    assert_eq!(index.sentence(2), Some("Three?"));
    assert_eq!(index.paragraph_id(0), Some(0));
    assert_eq!(index.paragraph_id(1), Some(0));
    assert_eq!(index.paragraph_id(2), Some(2));
    assert_eq!(index.sentence(3), None);
}

#[test]
fn test_index_covers_every_sentence() {
    let paragraphs = [
        "Rust is fast. It is safe. Mr. Ferris approves.",
        "",
        "   ",
        "Cargo builds crates!",
        "Is it stable? Yes. Since 2015.",
    ];
    let index = SentenceIndex::build(&paragraphs);

    let expected: usize = paragraphs.iter().map(|p| sentences(p).len()).sum();
    assert_eq!(index.len(), expected);
    assert!(index.iter().all(|entry| entry.paragraph_id < paragraphs.len()));

    let ids: Vec<usize> = index.iter().map(|entry| entry.paragraph_id).collect();
    assert!(ids.windows(2).all(|pair| pair[0] <= pair[1]));
}

#[test]
fn test_empty_index() {
    let index = SentenceIndex::build::<String>(&[]);
    assert!(index.is_empty());
}

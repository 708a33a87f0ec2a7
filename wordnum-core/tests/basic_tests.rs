//! End-to-end tests for wordnum-core

use wordnum_core::*;

#[test]
fn test_pipeline_stages_compose() {
    let sentence = "Twenty-five thousand and one people came.";

    let tokens: Vec<Token> = tokenize(sentence).collect();
    let rebuilt: String = tokens.iter().map(|t| t.as_str()).collect();
    assert_eq!(rebuilt, sentence);

    let classified: Vec<ClassifiedToken> = tokens.into_iter().map(classify).collect();
    assert_eq!(classified[0].kind, TokenKind::Number(20));
    assert_eq!(classified[2].kind, TokenKind::Number(5));
    assert_eq!(classified[4].kind, TokenKind::Exponent(1000));

    let converted = convert_numerals(&classified).unwrap();
    assert_eq!(converted[0].kind, TokenKind::Number(25_001));
    assert_eq!(render(&converted), "25001 people came.");
    assert_eq!(digitize(sentence).unwrap(), "25001 people came.");
}

#[test]
fn test_document_round_trip() {
    let document = "\
My grandmother turned ninety nine.
She has four children, eleven grandchildren and one great grandchild.
Nothing else to report.
";
    let output = Digitizer::new().process_text(document).unwrap();
    assert_eq!(
        output.joined(),
        "My grandmother turned 99.\n\
         She has 4 children, 11 grandchildren and 1 great grandchild.\n\
         Nothing else to report.\n"
    );
    assert_eq!(output.converted_count(), 2);
}

#[test]
fn test_sentences_split_before_digitizing() {
    let sentences = split_sentences("one. two.\nthree.");
    assert_eq!(sentences, vec!["one.", " two.", "three."]);

    let digitized: Vec<String> = sentences
        .iter()
        .map(|s| digitize(s).unwrap())
        .collect();
    assert_eq!(digitized, vec!["1.", " 2.", "3."]);
}

#[test]
fn test_multiline_number() {
    // Newlines are adders, so a number may span lines
    assert_eq!(digitize("one hundred\nand five.").unwrap(), "105.");
}

#[test]
fn test_large_but_valid_number() {
    assert_eq!(
        digitize("ninety nine billion nine hundred ninety nine million.").unwrap(),
        "99999000000."
    );
}

#[test]
fn test_overflow_is_an_error() {
    let sentence = format!("ninety{}.", " hundred".repeat(12));
    let err = digitize(&sentence).unwrap_err();
    assert!(err.to_string().contains("integer overflow"));
}

#[test]
fn test_vocabulary_is_exposed() {
    assert_eq!(vocabulary::number_words()[0], ("zero", 0));
    assert_eq!(vocabulary::scale_words()[0], ("hundred", 100));
    assert_eq!(vocabulary::adder_words(), &[" ", "-", "and", "\n"]);
}

//! Token classification

use crate::token::Token;
use crate::vocabulary::{self, Entry};

/// Semantic category of a token, with the numeric weight where it has one
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    /// A literal `.`; ends the sentence
    Period,
    /// Continues a number run without changing its value
    Adder,
    /// Number word, or an accumulated run value
    Number(u64),
    /// Scale word and its multiplier
    Exponent(u64),
    /// Anything else
    NotANumber,
}

impl TokenKind {
    /// Whether this token can extend a run that a number word started
    pub fn continues_run(&self) -> bool {
        matches!(
            self,
            TokenKind::Number(_) | TokenKind::Exponent(_) | TokenKind::Adder
        )
    }
}

/// A token paired with its category
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClassifiedToken<'a> {
    /// Category and weight
    pub kind: TokenKind,
    /// Original text; empty for synthesized numbers
    pub text: &'a str,
}

impl<'a> ClassifiedToken<'a> {
    /// Create a classified token
    pub fn new(kind: TokenKind, text: &'a str) -> Self {
        Self { kind, text }
    }

    /// Numeric weight; zero for categories without one
    pub fn weight(&self) -> u64 {
        match self.kind {
            TokenKind::Number(value) | TokenKind::Exponent(value) => value,
            _ => 0,
        }
    }
}

/// Classify a single token
pub fn classify(token: Token<'_>) -> ClassifiedToken<'_> {
    let text = token.as_str();
    let lowered = text.to_ascii_lowercase();

    let kind = if lowered == "." {
        TokenKind::Period
    } else {
        match vocabulary::lookup(&lowered) {
            Some(Entry::Adder) => TokenKind::Adder,
            Some(Entry::Number(value)) => TokenKind::Number(value),
            Some(Entry::Scale(value)) => TokenKind::Exponent(value),
            None => TokenKind::NotANumber,
        }
    };

    ClassifiedToken::new(kind, text)
}

/// Classify a token stream up to and including the first period
pub fn classify_sentence<'a, I>(tokens: I) -> Vec<ClassifiedToken<'a>>
where
    I: IntoIterator<Item = Token<'a>>,
{
    let mut classified = Vec::new();
    for token in tokens {
        let entry = classify(token);
        classified.push(entry);
        if entry.kind == TokenKind::Period {
            break;
        }
    }
    classified
}

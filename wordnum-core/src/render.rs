//! Token sequence rendering

use crate::classify::{ClassifiedToken, TokenKind};
use std::fmt::Write;

/// Concatenate tokens, writing numbers as decimal digits
pub fn render(tokens: &[ClassifiedToken<'_>]) -> String {
    let mut output = String::with_capacity(tokens.iter().map(|t| t.text.len()).sum());
    for token in tokens {
        match token.kind {
            TokenKind::Number(value) => {
                // Writing into a String cannot fail
                let _ = write!(output, "{value}");
            }
            _ => output.push_str(token.text),
        }
    }
    output
}

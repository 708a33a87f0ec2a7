//! Conversion of spelled-out English numbers into digits
//!
//! Text flows through a fixed pipeline:
//!
//! - **Sentence splitting**: the document is cut after every period
//! - **Tokenizing**: each sentence becomes runs of letters and single symbols
//! - **Classification**: tokens are tagged as period, adder, number, exponent
//!   or plain text using static vocabulary tables
//! - **Accumulation**: each run of number words is folded into one integer
//! - **Rendering**: tokens are concatenated back, numbers as digits
//!
//! Everything that is not part of a number is preserved as written.
//!
//! # Example
//!
//! ```rust
//! use wordnum_core::digitize;
//!
//! let text = digitize("I have twenty one apples and three oranges.").unwrap();
//! assert_eq!(text, "I have 21 apples and 3 oranges.");
//! ```

pub mod accumulator;
pub mod classify;
pub mod config;
pub mod error;
pub mod processor;
pub mod render;
pub mod sentence;
pub mod token;
pub mod vocabulary;

pub use accumulator::{convert_numerals, AccumulationRun};
pub use classify::{classify, classify_sentence, ClassifiedToken, TokenKind};
pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use processor::{Digitizer, Output, SentenceRecord};
pub use render::render;
pub use sentence::{split_sentences, split_sentences_with, TrailingFragment};
pub use token::{tokenize, Token, Tokenizer};

/// Replace the spelled-out numbers of one sentence with digits
///
/// Classification stops at the first period, so anything after it is not
/// part of the result.
pub fn digitize(sentence: &str) -> Result<String> {
    let classified = classify_sentence(tokenize(sentence));
    let converted = convert_numerals(&classified)?;
    Ok(render(&converted))
}

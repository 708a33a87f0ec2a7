//! Lossless word/symbol tokenizer
//!
//! Text is cut into runs of ASCII letters and single non-letter characters.
//! Every non-letter character flushes the pending word first, even when that
//! word is empty, so two adjacent symbols are separated by an empty token.
//! Concatenating the tokens in order always reproduces the input.

/// A borrowed span of the source text
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'a> {
    text: &'a str,
}

impl<'a> Token<'a> {
    /// Wrap a slice of source text
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }

    /// The original text of the token
    pub fn as_str(&self) -> &'a str {
        self.text
    }

    /// Whether this is an empty word token
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Iterator over the tokens of a string
///
/// Cloning the tokenizer before it is consumed gives an independent
/// iterator that restarts from the same position.
#[derive(Clone, Debug)]
pub struct Tokenizer<'a> {
    text: &'a str,
    /// Byte position of the first unconsumed character
    pos: usize,
    /// Symbol that follows a word that was just emitted
    pending_symbol: Option<(usize, usize)>,
}

impl<'a> Tokenizer<'a> {
    /// Create a tokenizer over `text`
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            pos: 0,
            pending_symbol: None,
        }
    }
}

/// Letters that may form a word
fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphabetic()
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some((start, end)) = self.pending_symbol.take() {
            return Some(Token::new(&self.text[start..end]));
        }

        if self.pos >= self.text.len() {
            return None;
        }

        let start = self.pos;
        let rest = &self.text[start..];
        match rest.char_indices().find(|&(_, ch)| !is_word_char(ch)) {
            Some((offset, ch)) => {
                let word_end = start + offset;
                let symbol_end = word_end + ch.len_utf8();
                self.pos = symbol_end;
                self.pending_symbol = Some((word_end, symbol_end));
                Some(Token::new(&self.text[start..word_end]))
            }
            None => {
                // Trailing word with no terminating symbol
                self.pos = self.text.len();
                Some(Token::new(rest))
            }
        }
    }
}

/// Tokenize a sentence
pub fn tokenize(text: &str) -> Tokenizer<'_> {
    Tokenizer::new(text)
}

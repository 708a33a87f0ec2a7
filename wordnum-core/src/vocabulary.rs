//! Static English numeral vocabulary
//!
//! Three fixed tables drive classification: adder words, which keep a
//! number run going without changing its value, number words with their
//! digit value, and scale words with their multiplier. The tables are
//! declared as constants and indexed once on first lookup.

use std::collections::HashMap;
use std::sync::OnceLock;

/// Words that do not break the continuity of a spelled-out number
const ADDER_WORDS: &[&str] = &[" ", "-", "and", "\n"];

/// Cardinal words from zero to ninety
const NUMBER_WORDS: &[(&str, u64)] = &[
    ("zero", 0),
    ("one", 1),
    ("two", 2),
    ("three", 3),
    ("four", 4),
    ("five", 5),
    ("six", 6),
    ("seven", 7),
    ("eight", 8),
    ("nine", 9),
    ("ten", 10),
    ("eleven", 11),
    ("twelve", 12),
    ("thirteen", 13),
    ("fourteen", 14),
    ("fifteen", 15),
    ("sixteen", 16),
    ("seventeen", 17),
    ("eighteen", 18),
    ("nineteen", 19),
    ("twenty", 20),
    ("thirty", 30),
    ("forty", 40),
    ("fifty", 50),
    ("sixty", 60),
    ("seventy", 70),
    ("eighty", 80),
    ("ninety", 90),
];

/// Multiplicative scale words, singular and plural
const SCALE_WORDS: &[(&str, u64)] = &[
    ("hundred", HUNDRED),
    ("hundreds", HUNDRED),
    ("thousand", 1_000),
    ("thousands", 1_000),
    ("million", 1_000_000),
    ("millions", 1_000_000),
    ("billion", 1_000_000_000),
    ("billions", 1_000_000_000),
];

/// Scale value that multiplies the inner accumulator in place
pub const HUNDRED: u64 = 100;

/// Kind of entry a word resolves to in the vocabulary
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Entry {
    /// Adder word
    Adder,
    /// Number word with its digit value
    Number(u64),
    /// Scale word with its multiplier
    Scale(u64),
}

static INDEX: OnceLock<HashMap<&'static str, Entry>> = OnceLock::new();

fn index() -> &'static HashMap<&'static str, Entry> {
    INDEX.get_or_init(|| {
        let mut map = HashMap::with_capacity(
            ADDER_WORDS.len() + NUMBER_WORDS.len() + SCALE_WORDS.len(),
        );

        // Insert in reverse priority so that adders win over numbers and
        // numbers win over scales if a word ever appears twice.
        for &(word, value) in SCALE_WORDS {
            map.insert(word, Entry::Scale(value));
        }
        for &(word, value) in NUMBER_WORDS {
            map.insert(word, Entry::Number(value));
        }
        for &word in ADDER_WORDS {
            map.insert(word, Entry::Adder);
        }

        map
    })
}

/// Look up an already lowercased word
pub fn lookup(word: &str) -> Option<Entry> {
    index().get(word).copied()
}

/// Check whether `word` is an adder word
pub fn is_adder(word: &str) -> bool {
    matches!(lookup(word), Some(Entry::Adder))
}

/// Adder words in declaration order
pub fn adder_words() -> &'static [&'static str] {
    ADDER_WORDS
}

/// Number words and their values in declaration order
pub fn number_words() -> &'static [(&'static str, u64)] {
    NUMBER_WORDS
}

/// Scale words and their multipliers in declaration order
pub fn scale_words() -> &'static [(&'static str, u64)] {
    SCALE_WORDS
}

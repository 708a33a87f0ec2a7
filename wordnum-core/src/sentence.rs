//! Period-terminated sentence splitting

use serde::{Deserialize, Serialize};

/// What to do with text after the last period
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrailingFragment {
    /// Discard it
    #[default]
    Drop,
    /// Emit it as one more sentence unless it is blank
    Keep,
}

/// Split `text` into sentences, dropping any unterminated remainder
pub fn split_sentences(text: &str) -> Vec<&str> {
    split_sentences_with(text, TrailingFragment::Drop)
}

/// Split `text` into sentences
///
/// A sentence runs up to and including the next `.`. Newlines at the start
/// of a sentence are skipped, so each sentence begins with its first
/// non-newline character.
pub fn split_sentences_with(text: &str, trailing: TrailingFragment) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for (i, ch) in text.char_indices() {
        if ch == '\n' && i == start {
            start = i + 1;
            continue;
        }
        if ch == '.' {
            sentences.push(&text[start..=i]);
            start = i + 1;
        }
    }

    if trailing == TrailingFragment::Keep {
        let rest = &text[start..];
        if !rest.trim().is_empty() {
            sentences.push(rest);
        }
    }

    log::trace!("split {} bytes into {} sentences", text.len(), sentences.len());
    sentences
}

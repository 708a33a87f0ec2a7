//! Document-level processing
//!
//! A [`Digitizer`] splits a document into sentences and digitizes each one
//! independently. Sentences share no state, so they may be processed in
//! parallel; the output always keeps source order.

use crate::config::Config;
use crate::error::Result;
use crate::sentence::split_sentences_with;
use serde::Serialize;

/// One sentence before and after digitizing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SentenceRecord {
    /// Position of the sentence in the document
    pub index: usize,
    /// Sentence as it appears in the source
    pub original: String,
    /// Sentence with number words replaced by digits
    pub digitized: String,
}

impl SentenceRecord {
    /// Whether digitizing changed the sentence
    pub fn is_converted(&self) -> bool {
        self.original != self.digitized
    }
}

/// Result of processing a document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Output {
    /// Sentences in source order
    pub sentences: Vec<SentenceRecord>,
}

impl Output {
    /// All digitized sentences, each followed by a newline
    pub fn joined(&self) -> String {
        let mut joined = String::new();
        for sentence in &self.sentences {
            joined.push_str(&sentence.digitized);
            joined.push('\n');
        }
        joined
    }

    /// Number of sentences that contained at least one number
    pub fn converted_count(&self) -> usize {
        self.sentences.iter().filter(|s| s.is_converted()).count()
    }

    /// Whether the document produced no sentences
    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

/// Converts spelled-out numbers across a whole document
#[derive(Debug, Clone, Default)]
pub struct Digitizer {
    config: Config,
}

impl Digitizer {
    /// Create a digitizer with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a digitizer with custom configuration
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Digitize every sentence of `text`
    pub fn process_text(&self, text: &str) -> Result<Output> {
        let sentences = split_sentences_with(text, self.config.trailing_fragment);
        log::debug!("processing {} sentences", sentences.len());

        let records = if self.config.parallel {
            Self::process_parallel(&sentences)?
        } else {
            Self::process_sequential(&sentences)?
        };

        let output = Output { sentences: records };
        log::info!(
            "digitized {} of {} sentences",
            output.converted_count(),
            output.sentences.len()
        );
        Ok(output)
    }

    fn process_sequential(sentences: &[&str]) -> Result<Vec<SentenceRecord>> {
        sentences
            .iter()
            .enumerate()
            .map(|(index, sentence)| Self::record(index, sentence))
            .collect()
    }

    #[cfg(feature = "parallel")]
    fn process_parallel(sentences: &[&str]) -> Result<Vec<SentenceRecord>> {
        use rayon::prelude::*;

        sentences
            .par_iter()
            .enumerate()
            .map(|(index, sentence)| Self::record(index, sentence))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    fn process_parallel(sentences: &[&str]) -> Result<Vec<SentenceRecord>> {
        Self::process_sequential(sentences)
    }

    fn record(index: usize, sentence: &str) -> Result<SentenceRecord> {
        Ok(SentenceRecord {
            index,
            original: sentence.to_string(),
            digitized: crate::digitize(sentence)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::sentence::TrailingFragment;

    const DOCUMENT: &str = "I have twenty one apples.\nThe cat sat.\nnine hundred.\n";

    #[test]
    fn test_process_document() {
        let output = Digitizer::new().process_text(DOCUMENT).unwrap();
        assert_eq!(output.sentences.len(), 3);
        assert_eq!(output.sentences[0].digitized, "I have 21 apples.");
        assert_eq!(output.sentences[1].digitized, "The cat sat.");
        assert_eq!(output.sentences[2].digitized, "900.");
        assert_eq!(output.converted_count(), 2);
    }

    #[test]
    fn test_joined() {
        let output = Digitizer::new().process_text(DOCUMENT).unwrap();
        assert_eq!(output.joined(), "I have 21 apples.\nThe cat sat.\n900.\n");
    }

    #[test]
    fn test_empty_document() {
        let output = Digitizer::new().process_text("").unwrap();
        assert!(output.is_empty());
        assert_eq!(output.joined(), "");
    }

    #[test]
    fn test_trailing_fragment_policy() {
        let text = "Two dogs. three cats";

        let dropped = Digitizer::new().process_text(text).unwrap();
        assert_eq!(dropped.joined(), "2 dogs.\n");

        let config = Config::builder()
            .trailing_fragment(TrailingFragment::Keep)
            .build();
        let kept = Digitizer::with_config(config).process_text(text).unwrap();
        assert_eq!(kept.joined(), "2 dogs.\n 3 cats\n");
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let text = "one. two hundred. three thousand and four. no numbers here. ".repeat(50);
        let sequential = Digitizer::new().process_text(&text).unwrap();
        let parallel = Digitizer::with_config(Config::builder().parallel(true).build())
            .process_text(&text)
            .unwrap();
        assert_eq!(sequential, parallel);
        assert_eq!(sequential.sentences[49 * 4 + 2].index, 198);
    }

    #[test]
    fn test_overflow_propagates() {
        let text = "Fine. ninety hundred hundred hundred hundred hundred hundred hundred \
                    hundred hundred hundred.";
        let result = Digitizer::new().process_text(text);
        assert!(matches!(result, Err(Error::Overflow { .. })));
    }
}

//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::Write;
use wordnum_core::SentenceRecord;

/// JSON formatter - outputs sentences as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    sentences: Vec<SentenceRecord>,
    pretty: bool,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            sentences: Vec::new(),
            pretty,
        }
    }
}

impl<W: Write> OutputFormatter for JsonFormatter<W> {
    fn format_sentence(&mut self, record: &SentenceRecord) -> Result<()> {
        self.sentences.push(record.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.sentences)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.sentences)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_array() {
        let mut buffer = Vec::new();
        JsonFormatter::new(&mut buffer, false).finish().unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "[]\n");
    }

    #[test]
    fn test_compact_record() {
        let mut buffer = Vec::new();
        {
            let mut formatter = JsonFormatter::new(&mut buffer, false);
            formatter
                .format_sentence(&SentenceRecord {
                    index: 3,
                    original: "eighty.".to_string(),
                    digitized: "80.".to_string(),
                })
                .unwrap();
            formatter.finish().unwrap();
        }
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "[{\"index\":3,\"original\":\"eighty.\",\"digitized\":\"80.\"}]\n"
        );
    }

    #[test]
    fn test_pretty_is_indented() {
        let mut buffer = Vec::new();
        {
            let mut formatter = JsonFormatter::new(&mut buffer, true);
            formatter
                .format_sentence(&SentenceRecord {
                    index: 0,
                    original: "one.".to_string(),
                    digitized: "1.".to_string(),
                })
                .unwrap();
            formatter.finish().unwrap();
        }
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("\n  {"));
        assert!(text.contains("\"digitized\": \"1.\""));
    }
}

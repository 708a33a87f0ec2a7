//! Output formatting module

use anyhow::Result;
use std::io::Write;
use std::str::FromStr;
use wordnum_core::{Output, SentenceRecord};

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format and output a single sentence
    fn format_sentence(&mut self, record: &SentenceRecord) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Digitized sentences, one per line
    Text,
    /// JSON array of sentences with their original text
    Json,
}

impl OutputFormat {
    /// All formats, in display order
    pub const ALL: [OutputFormat; 2] = [OutputFormat::Text, OutputFormat::Json];

    /// Name used on the command line and in configuration files
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }

    /// Short description for `list formats`
    pub fn description(&self) -> &'static str {
        match self {
            OutputFormat::Text => "Digitized sentences, one per line",
            OutputFormat::Json => "JSON array of {index, original, digitized} records",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format '{other}'")),
        }
    }
}

/// Create a formatter for `format` that writes into `writer`
pub fn create_formatter<'w>(
    format: OutputFormat,
    writer: &'w mut dyn Write,
    pretty_json: bool,
) -> Box<dyn OutputFormatter + 'w> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty_json)),
    }
}

/// Write every sentence of `output` with the given format
pub fn write_output(
    output: &Output,
    format: OutputFormat,
    writer: &mut dyn Write,
    pretty_json: bool,
) -> Result<()> {
    let mut formatter = create_formatter(format, writer, pretty_json);
    for record in &output.sentences {
        formatter.format_sentence(record)?;
    }
    formatter.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use wordnum_core::Digitizer;

    #[test]
    fn test_format_names_round_trip() {
        for format in OutputFormat::ALL {
            assert_eq!(format.as_str().parse::<OutputFormat>().unwrap(), format);
        }
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("markdown".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_write_text_matches_joined() {
        let output = Digitizer::new()
            .process_text("Ten green bottles.\nOne fell.\n")
            .unwrap();
        let mut buffer = Vec::new();
        write_output(&output, OutputFormat::Text, &mut buffer, true).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), output.joined());
    }

    #[test]
    fn test_write_json() {
        let output = Digitizer::new().process_text("Six geese.").unwrap();
        let mut buffer = Vec::new();
        write_output(&output, OutputFormat::Json, &mut buffer, false).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value[0]["index"], 0);
        assert_eq!(value[0]["original"], "Six geese.");
        assert_eq!(value[0]["digitized"], "6 geese.");
    }
}

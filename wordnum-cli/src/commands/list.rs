//! List command implementation

use crate::output::OutputFormat;
use anyhow::Result;
use std::io::Write;
use wordnum_core::vocabulary;

/// Write the recognized vocabulary
pub fn write_words(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "Number words:")?;
    for (word, value) in vocabulary::number_words() {
        writeln!(out, "  {word:<12} {value}")?;
    }

    writeln!(out, "Scale words:")?;
    for (word, value) in vocabulary::scale_words() {
        writeln!(out, "  {word:<12} {value}")?;
    }

    writeln!(out, "Adder words:")?;
    for word in vocabulary::adder_words() {
        writeln!(out, "  {word:?}")?;
    }
    Ok(())
}

/// Write the available output formats
pub fn write_formats(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "Available output formats:")?;
    for format in OutputFormat::ALL {
        writeln!(out, "  {:<6} {}", format.as_str(), format.description())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_words() {
        let mut buffer = Vec::new();
        write_words(&mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert!(text.contains("  ninety       90\n"));
        assert!(text.contains("  billion      1000000000\n"));
        assert!(text.contains("  \"and\"\n"));
        assert!(text.contains("  \"\\n\"\n"));
    }

    #[test]
    fn test_write_formats() {
        let mut buffer = Vec::new();
        write_formats(&mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert!(text.contains("text"));
        assert!(text.contains("json"));
    }
}

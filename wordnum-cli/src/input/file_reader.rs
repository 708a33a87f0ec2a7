//! File reading utilities

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Line-oriented text file reader
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text, line by line
    ///
    /// Every line is re-terminated with `\n`, so CRLF endings become LF and
    /// a last line without a newline gains one.
    pub fn read_lines(path: &Path) -> Result<String> {
        let file =
            File::open(path).with_context(|| format!("Failed to open file: {}", path.display()))?;

        let mut content = String::new();
        for line in BufReader::new(file).lines() {
            let line =
                line.with_context(|| format!("Failed to read file: {}", path.display()))?;
            content.push_str(&line);
            content.push('\n');
        }

        log::debug!("Read {} bytes from {}", content.len(), path.display());
        Ok(content)
    }
}

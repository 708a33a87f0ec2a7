//! Process command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::FileReader;
use crate::output::{write_output, OutputFormat};
use anyhow::{Context, Result};
use clap::Args;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use wordnum_core::{Config, Digitizer, TrailingFragment};

/// Arguments for the process command
#[derive(Debug, Args)]
pub struct ProcessArgs {
    /// Input text file
    #[arg(short, long, value_name = "FILE", required = true)]
    pub input: PathBuf,

    /// Also write the result to this file
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format [default: from config, else text]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Emit text after the last period as a final sentence
    #[arg(long)]
    pub keep_trailing: bool,

    /// Digitize sentences in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl ProcessArgs {
    /// Execute the process command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::info!("Starting text processing");
        log::debug!("Arguments: {:?}", self);

        let config = match &self.config {
            Some(path) => CliConfig::from_file(path)?,
            None => CliConfig::default(),
        };
        let format = match self.format {
            Some(format) => format,
            None => config.output.format()?,
        };
        let digitizer = Digitizer::with_config(self.core_config(&config));

        let text = self.read_input();
        let output = digitizer
            .process_text(&text)
            .map_err(CliError::from)
            .with_context(|| format!("Failed to digitize {}", self.input.display()))?;

        let stdout = io::stdout();
        let mut stdout = stdout.lock();
        write_output(&output, format, &mut stdout, config.output.pretty_json)?;
        if format == OutputFormat::Text {
            writeln!(stdout)?;
        }

        if let Some(path) = &self.output {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            write_output(&output, format, &mut writer, config.output.pretty_json)?;
            log::info!("Wrote {}", path.display());
        }

        Ok(())
    }

    /// Merge command-line flags over the configuration file
    fn core_config(&self, config: &CliConfig) -> Config {
        let trailing = if self.keep_trailing {
            TrailingFragment::Keep
        } else {
            config.processing.trailing_fragment
        };

        Config::builder()
            .trailing_fragment(trailing)
            .parallel(self.parallel || config.processing.parallel)
            .build()
    }

    /// Read the input file; an unreadable file yields empty text
    fn read_input(&self) -> String {
        match FileReader::read_lines(&self.input) {
            Ok(text) => text,
            Err(err) => {
                eprintln!("ERROR: Input file can't be opened.");
                log::debug!(
                    "{}: {err:#}",
                    CliError::FileNotFound(self.input.display().to_string())
                );
                String::new()
            }
        }
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // A logger may already be installed when embedded in another binary
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> ProcessArgs {
        ProcessArgs {
            input: PathBuf::from("input.txt"),
            output: None,
            format: None,
            config: None,
            keep_trailing: false,
            parallel: false,
            quiet: true,
            verbose: 0,
        }
    }

    #[test]
    fn test_core_config_defaults() {
        let config = args().core_config(&CliConfig::default());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_flags_override_config() {
        let mut args = args();
        args.keep_trailing = true;
        args.parallel = true;

        let config = args.core_config(&CliConfig::default());
        assert_eq!(config.trailing_fragment, TrailingFragment::Keep);
        assert!(config.parallel);
    }

    #[test]
    fn test_config_file_values_used_without_flags() {
        let mut cli_config = CliConfig::default();
        cli_config.processing.trailing_fragment = TrailingFragment::Keep;
        cli_config.processing.parallel = true;

        let config = args().core_config(&cli_config);
        assert_eq!(config.trailing_fragment, TrailingFragment::Keep);
        assert!(config.parallel);
    }

    #[test]
    fn test_unreadable_input_is_empty() {
        let mut args = args();
        args.input = PathBuf::from("/nonexistent/input.txt");
        assert_eq!(args.read_input(), "");
    }
}

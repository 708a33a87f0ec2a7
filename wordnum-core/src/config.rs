//! Processing configuration

use crate::sentence::TrailingFragment;

/// Configuration for a [`Digitizer`](crate::Digitizer)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Handling of text after the last period
    pub trailing_fragment: TrailingFragment,
    /// Digitize sentences concurrently
    pub parallel: bool,
}

impl Config {
    /// Create a builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the trailing fragment policy
    pub fn trailing_fragment(mut self, trailing: TrailingFragment) -> Self {
        self.config.trailing_fragment = trailing;
        self
    }

    /// Enable or disable parallel processing
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.config.parallel = parallel;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Config {
        if self.config.parallel && !cfg!(feature = "parallel") {
            log::warn!("parallel processing requested but the `parallel` feature is disabled");
        }
        self.config
    }
}

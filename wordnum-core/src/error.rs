//! Core error types

use thiserror::Error;

/// Errors raised while digitizing text
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The value of a spelled-out number does not fit in a `u64`
    #[error("integer overflow while accumulating \"{run}\"")]
    Overflow {
        /// Source text of the run that overflowed
        run: String,
    },
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, Error>;

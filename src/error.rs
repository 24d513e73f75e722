//! # Error Types
//!
//! Encoding and decoding never fail: malformed notation is skipped and empty text
//! encodes to an empty string. The errors below only come from the outer
//! surfaces of the crate (configuration and the command-line binary).
//!
//! ## Error Types
//! - `ConfigError` - YAML encoder configuration is malformed or out of range
//! - `Io` - an input or configuration file could not be read
//! - `Serialize` - decoded events could not be written as JSON
//!
//! ## Usage
//! ```rust
//! use textmml::{EncoderConfig, MmlError};
//!
//! match EncoderConfig::from_yaml("short-line-tempo: 0") {
//!     Ok(_) => unreachable!(),
//!     Err(MmlError::ConfigError(message)) => eprintln!("bad config: {}", message),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MmlError {
    /// Invalid encoder configuration.
    ///
    /// # Example
    /// ```
    /// # use textmml::MmlError;
    /// let err = MmlError::ConfigError("long-line-tempo must be positive".to_string());
    /// assert_eq!(err.to_string(), "Invalid config: long-line-tempo must be positive");
    /// ```
    #[error("Invalid config: {0}")]
    ConfigError(String),

    /// A file could not be read.
    #[error("Cannot read '{path}': {message}")]
    Io { path: String, message: String },

    /// Events could not be serialized.
    #[error("Serialization failed: {0}")]
    Serialize(String),
}

pub mod ast;
pub mod config;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod lexer;
pub mod script;

pub use config::{EncoderConfig, Instrument};
pub use decoder::{decode, decode_with_diagnostics, schedule, total_seconds, Event};
pub use encoder::{encode, encode_with_config};
pub use error::*;

/// Encode text and decode the resulting notation in one go.
/// This is the main entry point for players and renderers.
pub fn convert(text: &str) -> Vec<Event> {
    decode(&encode(text))
}

/// Convert with a custom encoder configuration.
pub fn convert_with_config(text: &str, config: &EncoderConfig) -> Vec<Event> {
    decode(&encode_with_config(text, config))
}

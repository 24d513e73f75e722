//! # Encoder Configuration
//!
//! The constants of the text-to-MML rule set, optionally overridden from YAML.
//! [`EncoderConfig::default()`] is the production rule set.
//!
//! ```rust
//! use textmml::EncoderConfig;
//!
//! let config = EncoderConfig::from_yaml("long-line-threshold: 10\nshort-line-tempo: 150")?;
//! assert_eq!(config.long_line_threshold, 10);
//! assert_eq!(config.short_line_tempo, 150);
//! assert_eq!(config.long_line_tempo, 100);
//! # Ok::<(), textmml::MmlError>(())
//! ```

use crate::error::MmlError;
use clap::ValueEnum;
use serde::Deserialize;

/// Named instrument presets for the preamble's `@n` hint, as General MIDI
/// program numbers.
#[derive(ValueEnum, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Instrument {
    Piano,
    Chiptune,
    Strings,
    Flute,
    Guitar,
    Lead,
}

impl Instrument {
    pub fn program(self) -> u32 {
        match self {
            Instrument::Piano => 1,
            Instrument::Chiptune => 81,
            Instrument::Strings => 49,
            Instrument::Flute => 74,
            Instrument::Guitar => 25,
            Instrument::Lead => 82,
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct EncoderConfig {
    /// Tempo of the `t` command opening every notation string.
    pub preamble_tempo: u32,
    /// Volume of the `v` command opening every notation string.
    pub preamble_volume: u32,
    /// Instrument hint (`@n`) opening every notation string.
    pub preamble_instrument: u32,
    /// Lines with more characters than this get `long_line_tempo`.
    pub long_line_threshold: usize,
    pub long_line_tempo: u32,
    pub short_line_tempo: u32,
    /// Denominator of the rest emitted for a blank line.
    pub blank_line_rest: u32,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            preamble_tempo: 120,
            preamble_volume: 10,
            preamble_instrument: 0,
            long_line_threshold: 20,
            long_line_tempo: 100,
            short_line_tempo: 180,
            blank_line_rest: 4,
        }
    }
}

impl EncoderConfig {
    /// Parse a YAML document; missing keys keep their defaults.
    pub fn from_yaml(content: &str) -> Result<Self, MmlError> {
        // An empty document deserializes to unit, not to a map
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: EncoderConfig =
            serde_yaml::from_str(content).map_err(|e| MmlError::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Tempo and rest values end up as `t`/`r` arguments and must stay positive.
    pub fn validate(&self) -> Result<(), MmlError> {
        let positive = [
            ("preamble-tempo", self.preamble_tempo),
            ("long-line-tempo", self.long_line_tempo),
            ("short-line-tempo", self.short_line_tempo),
            ("blank-line-rest", self.blank_line_rest),
        ];
        for (key, value) in positive {
            if value == 0 {
                return Err(MmlError::ConfigError(format!("{} must be positive", key)));
            }
        }
        Ok(())
    }

    /// Use a named instrument's program number in the preamble.
    pub fn with_instrument(self, instrument: Instrument) -> Self {
        Self {
            preamble_instrument: instrument.program(),
            ..self
        }
    }

    /// Tempo for a line of `len` characters.
    pub fn tempo_for_line(&self, len: usize) -> u32 {
        if len > self.long_line_threshold {
            self.long_line_tempo
        } else {
            self.short_line_tempo
        }
    }
}

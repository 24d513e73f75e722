//! Notation decoding engine
//!
//! Folds the token stream left to right through a small [`FoldState`], emitting
//! at most one event per token.

use super::types::{Decoded, Diagnostic, Event, NoteEvent, Pitch, RestEvent, ScheduledEvent};
use crate::ast::{Command, Duration};
use crate::lexer::{Lexer, LocatedToken};
use log::debug;

pub const DEFAULT_OCTAVE: i32 = 4;
pub const DEFAULT_DENOMINATOR: u32 = 8;
pub const DEFAULT_BPM: u32 = 120;

/// Values in effect at a point in the token stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FoldState {
    pub octave: i32,
    pub default_denominator: u32,
    pub bpm: u32,
}

impl Default for FoldState {
    fn default() -> Self {
        Self {
            octave: DEFAULT_OCTAVE,
            default_denominator: DEFAULT_DENOMINATOR,
            bpm: DEFAULT_BPM,
        }
    }
}

/// What a single token did to the fold.
enum Outcome {
    Emit(Event),
    /// Emitted, but part of the token's argument was ignored
    Fallback(Event, &'static str),
    Quiet,
    Skip(&'static str),
}

const MALFORMED_LENGTH: &str = "malformed length argument";

impl Outcome {
    fn timed(event: Event, duration: Duration) -> Self {
        if duration.malformed {
            Outcome::Fallback(event, MALFORMED_LENGTH)
        } else {
            Outcome::Emit(event)
        }
    }
}

impl FoldState {
    /// Seconds for `1/denominator` of a whole note at the current tempo.
    pub fn seconds(&self, denominator: u32) -> f64 {
        (4.0 / f64::from(denominator)) * (60.0 / f64::from(self.bpm))
    }

    fn resolve(&self, duration: Duration) -> u32 {
        duration.denominator.unwrap_or(self.default_denominator)
    }

    fn apply(&mut self, command: &Command) -> Outcome {
        match *command {
            Command::Tempo(Some(bpm)) => {
                self.bpm = bpm;
                Outcome::Emit(Event::Tempo { bpm })
            }
            Command::Tempo(None) => Outcome::Skip("tempo must be a positive integer"),
            Command::Octave(Some(octave)) => {
                self.octave = octave;
                Outcome::Emit(Event::Octave { octave })
            }
            Command::Octave(None) => Outcome::Skip("octave must be an integer"),
            Command::Length(Some(denominator)) => {
                self.default_denominator = denominator;
                Outcome::Quiet
            }
            Command::Length(None) => Outcome::Skip("length must be a positive integer"),
            // Volume is accepted for compatibility and otherwise ignored
            Command::Volume(Some(_)) => Outcome::Quiet,
            Command::Volume(None) => Outcome::Skip("volume must be an integer"),
            Command::Rest(duration) => {
                let denominator = self.resolve(duration);
                let rest = Event::Rest(RestEvent {
                    denominator,
                    dotted: duration.dotted,
                    seconds: self.seconds(denominator),
                });
                Outcome::timed(rest, duration)
            }
            Command::Note {
                name,
                accidental,
                duration,
            } => {
                let denominator = self.resolve(duration);
                let pitch = Pitch {
                    name,
                    accidental,
                    octave: self.octave,
                };
                let note = Event::Note(NoteEvent {
                    pitch,
                    denominator,
                    dotted: duration.dotted,
                    seconds: self.seconds(denominator),
                    midi_note: pitch.midi_note(),
                });
                Outcome::timed(note, duration)
            }
            Command::Unknown => Outcome::Skip("unrecognized command"),
        }
    }
}

/// Decode a notation string into events. Never fails; malformed tokens are skipped.
pub fn decode(notation: &str) -> Vec<Event> {
    decode_with_diagnostics(notation).events
}

/// Decode and report every token that was skipped, rejected, or only partly used.
pub fn decode_with_diagnostics(notation: &str) -> Decoded {
    let tokens = Lexer::new(notation).tokenize();
    let mut state = FoldState::default();
    let mut decoded = Decoded::default();

    for token in &tokens {
        match state.apply(&token.command) {
            Outcome::Emit(event) => decoded.events.push(event),
            Outcome::Fallback(event, reason) => {
                debug!(
                    "Token {} '{}' at byte {}: {}",
                    token.index, token.text, token.offset, reason
                );
                decoded.events.push(event);
                decoded.diagnostics.push(diagnostic(token, reason));
            }
            Outcome::Quiet => {}
            Outcome::Skip(reason) => {
                debug!(
                    "Skipping token {} '{}' at byte {}: {}",
                    token.index, token.text, token.offset, reason
                );
                decoded.diagnostics.push(diagnostic(token, reason));
            }
        }
    }

    debug!(
        "Decoded {} tokens into {} events ({} skipped)",
        tokens.len(),
        decoded.events.len(),
        decoded.diagnostics.len()
    );

    decoded
}

fn diagnostic(token: &LocatedToken<'_>, reason: &str) -> Diagnostic {
    Diagnostic {
        index: token.index,
        offset: token.offset,
        token: token.text.to_string(),
        reason: reason.to_string(),
    }
}

/// Place events on a timeline. Notes and rests advance the clock; tempo and
/// octave events take the start time of whatever follows them.
pub fn schedule(events: &[Event]) -> Vec<ScheduledEvent> {
    let mut clock = 0.0;
    events
        .iter()
        .map(|event| {
            let scheduled = ScheduledEvent {
                start_seconds: clock,
                event: event.clone(),
            };
            clock += event.seconds().unwrap_or(0.0);
            scheduled
        })
        .collect()
}

/// Total playing time of the sequence in seconds.
pub fn total_seconds(events: &[Event]) -> f64 {
    events.iter().filter_map(Event::seconds).sum()
}

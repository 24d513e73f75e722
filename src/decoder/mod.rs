//! # Decoder Module
//!
//! Expand a notation string into resolved, timed events.
//!
//! ## Purpose
//! The event sequence is what playback scheduling, notation rendering and MIDI
//! export consume. Each note and rest already carries its pitch, length and
//! duration in seconds, so consumers never replay the fold themselves.
//!
//! ## Sub-modules
//! - `types` - Event, NoteEvent, RestEvent, Pitch and friends
//! - `engine` - the fold over tokens
//!
//! ## Fold State
//! Decoding starts at octave 4, default length 8 and 120 BPM.
//! - `t<n>` sets the tempo (positive only) and emits a tempo event
//! - `o<n>` sets the octave and emits an octave event
//! - `l<n>` sets the default length (positive only), no event
//! - `v<n>` is accepted and ignored
//! - `r`, `c`..`b` always emit rests and notes; a missing length uses the current
//!   default, and a zero or unreadable one falls back to it with a diagnostic
//! - anything else is skipped
//!
//! ## Example
//! ```rust
//! use textmml::decoder::{decode, Event};
//!
//! let events = decode("t60 o5 c+4 r8");
//!
//! assert_eq!(events.len(), 4);
//! assert_eq!(events[0], Event::Tempo { bpm: 60 });
//! match &events[2] {
//!     Event::Note(note) => {
//!         assert_eq!(note.pitch.to_string(), "C#5");
//!         assert_eq!(note.seconds, 1.0);
//!         assert_eq!(note.midi_note, Some(73));
//!     }
//!     other => panic!("expected a note, got {:?}", other),
//! }
//! ```
//!
//! ## Durations
//! `seconds = (4 / denominator) * (60 / bpm)`. A trailing `.` is recorded in
//! `dotted` but is not part of that formula.

mod engine;
mod types;


pub use engine::{
    decode, decode_with_diagnostics, schedule, total_seconds, FoldState, DEFAULT_BPM,
    DEFAULT_DENOMINATOR, DEFAULT_OCTAVE,
};
pub use types::{Decoded, Diagnostic, Event, NoteEvent, Pitch, RestEvent, ScheduledEvent};

//! Decoded event type definitions
//!
//! These are the values handed to playback, notation rendering and MIDI export.
//! They are fully resolved: no consumer needs to know about fold state.

use crate::ast::{Accidental, NoteName};
use serde::{Serialize, Serializer};
use std::fmt;

/// A resolved pitch, written like `C4`, `C#5` or `Bb3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pitch {
    pub name: NoteName,
    pub accidental: Accidental,
    pub octave: i32,
}

impl Pitch {
    /// MIDI note number with C4 = 60, or `None` outside 0..=127.
    pub fn midi_note(&self) -> Option<u8> {
        // Widened so extreme octaves cannot overflow
        let midi = (i64::from(self.octave) + 1) * 12
            + i64::from(self.name.semitone() + self.accidental.offset());
        u8::try_from(midi).ok().filter(|m| *m <= 127)
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let accidental = match self.accidental {
            Accidental::Natural => "",
            Accidental::Sharp => "#",
            Accidental::Flat => "b",
        };
        write!(f, "{}{}{}", self.name, accidental, self.octave)
    }
}

impl Serialize for Pitch {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A sounding note.
///
/// # Fields
/// - `denominator`: length as `1/denominator` of a whole note
/// - `dotted`: the token carried a trailing `.`; recorded for renderers, not
///   folded into `seconds`
/// - `seconds`: `(4 / denominator) * (60 / bpm)` at the tempo in effect
/// - `midi_note`: concert pitch for MIDI consumers
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteEvent {
    pub pitch: Pitch,
    pub denominator: u32,
    pub dotted: bool,
    pub seconds: f64,
    pub midi_note: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RestEvent {
    pub denominator: u32,
    pub dotted: bool,
    pub seconds: f64,
}

/// One decoded event. The sequence of these is the whole output of decoding.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Event {
    Tempo { bpm: u32 },
    Octave { octave: i32 },
    Note(NoteEvent),
    Rest(RestEvent),
}

impl Event {
    /// Duration in seconds for notes and rests.
    pub fn seconds(&self) -> Option<f64> {
        match self {
            Event::Note(note) => Some(note.seconds),
            Event::Rest(rest) => Some(rest.seconds),
            Event::Tempo { .. } | Event::Octave { .. } => None,
        }
    }

    pub fn denominator(&self) -> Option<u32> {
        match self {
            Event::Note(note) => Some(note.denominator),
            Event::Rest(rest) => Some(rest.denominator),
            Event::Tempo { .. } | Event::Octave { .. } => None,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::Tempo { bpm } => write!(f, "tempo {}", bpm),
            Event::Octave { octave } => write!(f, "octave {}", octave),
            Event::Note(note) => write!(
                f,
                "note {} 1/{}{} {:.3}s",
                note.pitch,
                note.denominator,
                if note.dotted { "." } else { "" },
                note.seconds
            ),
            Event::Rest(rest) => write!(
                f,
                "rest 1/{}{} {:.3}s",
                rest.denominator,
                if rest.dotted { "." } else { "" },
                rest.seconds
            ),
        }
    }
}

/// An event placed on the playback timeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledEvent {
    pub start_seconds: f64,
    #[serde(flatten)]
    pub event: Event,
}

/// A token that decoding skipped, or whose argument was rejected or only partly used.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostic {
    pub index: usize,
    pub offset: usize,
    pub token: String,
    pub reason: String,
}

/// Events plus the diagnostics collected while decoding them.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Decoded {
    pub events: Vec<Event>,
    pub diagnostics: Vec<Diagnostic>,
}

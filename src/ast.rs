//! # Notation Command Types
//!
//! The closed set of commands a notation token can express.
//!
//! ## Command Table
//! ```text
//! Command
//!   ├── Tempo(bpm)          t120
//!   ├── Octave(n)           o4
//!   ├── Length(denominator) l8
//!   ├── Volume(n)           v10   (accepted, no effect)
//!   ├── Rest(Duration)      r  r4  r8.
//!   ├── Note                c  c+8  d#4.  e-16
//!   │     ├── name: NoteName (C-B)
//!   │     ├── accidental: Accidental (+ or # sharp, - flat)
//!   │     └── duration: Duration
//!   └── Unknown             anything else, skipped
//! ```
//!
//! ## Arguments
//! A `None` argument means the token had the right command letter but its number
//! was missing, not an integer, or not positive where a positive value is needed.
//! For notes and rests a `None` denominator means "use the current default".
//! A note or rest is never dropped for a bad length: the leading digits are kept
//! when they form a positive number, and `malformed` marks anything else that
//! was written after the letter and accidental.

use std::fmt;

/// Note names A through G
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NoteName {
    #[default]
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl NoteName {
    /// Case-insensitive lookup of an MML note letter.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'c' => Some(NoteName::C),
            'd' => Some(NoteName::D),
            'e' => Some(NoteName::E),
            'f' => Some(NoteName::F),
            'g' => Some(NoteName::G),
            'a' => Some(NoteName::A),
            'b' => Some(NoteName::B),
            _ => None,
        }
    }

    /// Semitones above C.
    pub fn semitone(&self) -> i32 {
        match self {
            NoteName::C => 0,
            NoteName::D => 2,
            NoteName::E => 4,
            NoteName::F => 5,
            NoteName::G => 7,
            NoteName::A => 9,
            NoteName::B => 11,
        }
    }
}

impl fmt::Display for NoteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            NoteName::C => "C",
            NoteName::D => "D",
            NoteName::E => "E",
            NoteName::F => "F",
            NoteName::G => "G",
            NoteName::A => "A",
            NoteName::B => "B",
        };
        f.write_str(letter)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Accidental {
    #[default]
    Natural,
    Sharp, // + or #
    Flat,  // -
}

impl Accidental {
    pub fn offset(&self) -> i32 {
        match self {
            Accidental::Natural => 0,
            Accidental::Sharp => 1,
            Accidental::Flat => -1,
        }
    }
}

/// Duration argument of a note or rest token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Duration {
    pub denominator: Option<u32>,
    pub dotted: bool,
    /// The argument was not `[positive digits][.]`
    pub malformed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Tempo(Option<u32>),
    Octave(Option<i32>),
    Length(Option<u32>),
    Volume(Option<i32>),
    Rest(Duration),
    Note {
        name: NoteName,
        accidental: Accidental,
        duration: Duration,
    },
    Unknown,
}

impl Command {
    /// Classify a single whitespace-free token.
    pub fn parse(token: &str) -> Self {
        let mut chars = token.chars();
        let Some(letter) = chars.next() else {
            return Command::Unknown;
        };
        let arg = chars.as_str();

        match letter.to_ascii_lowercase() {
            't' => Command::Tempo(parse_positive(arg)),
            'o' => Command::Octave(parse_integer(arg)),
            'l' => Command::Length(parse_positive(arg)),
            'v' => Command::Volume(parse_integer(arg)),
            'r' => Command::Rest(parse_duration(arg)),
            other => match NoteName::from_char(other) {
                Some(name) => parse_note(name, arg),
                None => Command::Unknown,
            },
        }
    }
}

fn parse_integer(arg: &str) -> Option<i32> {
    arg.parse().ok()
}

fn parse_positive(arg: &str) -> Option<u32> {
    arg.parse::<u32>().ok().filter(|n| *n > 0)
}

/// Leading digits give the denominator when positive; a trailing `.` dots it.
/// Anything other than `[positive digits][.]` is flagged as malformed.
fn parse_duration(arg: &str) -> Duration {
    let digits_end = arg
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(arg.len());
    let (digits, tail) = arg.split_at(digits_end);

    let denominator = if digits.is_empty() {
        None
    } else {
        parse_positive(digits)
    };
    let bad_digits = !digits.is_empty() && denominator.is_none();

    Duration {
        denominator,
        dotted: arg.ends_with('.'),
        malformed: bad_digits || !matches!(tail, "" | "."),
    }
}

fn parse_note(name: NoteName, arg: &str) -> Command {
    let (accidental, rest) = if let Some(rest) = arg.strip_prefix(['+', '#']) {
        (Accidental::Sharp, rest)
    } else if let Some(rest) = arg.strip_prefix('-') {
        (Accidental::Flat, rest)
    } else {
        (Accidental::Natural, arg)
    };

    Command::Note {
        name,
        accidental,
        duration: parse_duration(rest),
    }
}

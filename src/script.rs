//! Unicode script classification for the encoder's octave rule.
//!
//! Plain inclusive range checks over the code point; no regex or Unicode tables.

/// Script family of a single character, as far as the encoder cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Script {
    Hiragana,
    Katakana,
    Kanji,
    Other,
}

impl Script {
    pub fn of(c: char) -> Self {
        if is_hiragana(c) {
            Script::Hiragana
        } else if is_katakana(c) {
            Script::Katakana
        } else if is_kanji(c) {
            Script::Kanji
        } else {
            Script::Other
        }
    }

    /// Octave a character of this script is played in.
    pub fn octave(&self) -> i32 {
        match self {
            Script::Hiragana => 5,
            Script::Katakana => 4,
            Script::Kanji => 3,
            Script::Other => 4,
        }
    }
}

pub fn is_hiragana(c: char) -> bool {
    ('\u{3040}'..='\u{309F}').contains(&c)
}

pub fn is_katakana(c: char) -> bool {
    ('\u{30A0}'..='\u{30FF}').contains(&c)
}

/// CJK Unified Ideographs plus Extension A.
pub fn is_kanji(c: char) -> bool {
    ('\u{3400}'..='\u{4DBF}').contains(&c) || ('\u{4E00}'..='\u{9FFF}').contains(&c)
}

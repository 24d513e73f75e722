//! # Text Encoder
//!
//! Maps arbitrary text onto a flat MML notation string.
//!
//! ## Rule Set
//! Every notation string opens with the preamble `t120 v10 @0`. Each input line is
//! then encoded on its own:
//!
//! - A blank line (only whitespace or byte order marks) becomes a single `r4`.
//! - Any other line gets a tempo command: `t100` above 20 characters, else `t180`.
//! - The line is read two characters at a time. The first character picks the pitch
//!   (code point mod 12) and the octave (its script). The second character picks the
//!   rhythm (code point mod 8), which may turn the pair into a rest.
//! - A final unpaired character is always a quarter note.
//!
//! ```rust
//! use textmml::encode;
//!
//! // 'a' = U+0061: 97 % 12 = 1 -> c+, octave 4
//! // 'b' = U+0062: 98 % 8 = 2 -> eighth note
//! assert_eq!(encode("ab"), "t120 v10 @0 t180 o4 c+8");
//! assert_eq!(encode(""), "");
//! ```

use crate::config::EncoderConfig;
use crate::script::Script;
use log::debug;
use std::fmt;

/// Chromatic note names indexed by pitch class, C = 0.
const NOTE_NAMES: [&str; 12] = [
    "c", "c+", "d", "d+", "e", "f", "f+", "g", "g+", "a", "a+", "b",
];

/// A note length as written in MML: `1/denominator` of a whole note, optionally dotted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Length {
    pub denominator: u32,
    pub dotted: bool,
}

impl Length {
    pub const fn plain(denominator: u32) -> Self {
        Self {
            denominator,
            dotted: false,
        }
    }

    pub const fn dotted(denominator: u32) -> Self {
        Self {
            denominator,
            dotted: true,
        }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.denominator)?;
        if self.dotted {
            write!(f, ".")?;
        }
        Ok(())
    }
}

/// What the second character of a pair turns the pair into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rhythm {
    Note(Length),
    Rest(Length),
}

impl Rhythm {
    /// Rhythm of an unpaired character at the end of a line.
    pub const UNPAIRED: Rhythm = Rhythm::Note(Length::plain(4));

    /// Rhythm selected by a pair's second character.
    pub fn from_char(c: char) -> Self {
        match u32::from(c) % 8 {
            0 => Rhythm::Note(Length::plain(16)),
            1 | 2 => Rhythm::Note(Length::plain(8)),
            3 => Rhythm::Note(Length::plain(4)),
            4 => Rhythm::Note(Length::plain(2)),
            5 => Rhythm::Note(Length::dotted(8)),
            6 => Rhythm::Rest(Length::plain(8)),
            _ => Rhythm::Rest(Length::plain(4)),
        }
    }
}

/// MML note name for a character's code point.
pub fn note_name(c: char) -> &'static str {
    NOTE_NAMES[(u32::from(c) % 12) as usize]
}

/// Encode text with the production rule set.
pub fn encode(text: &str) -> String {
    encode_with_config(text, &EncoderConfig::default())
}

/// Encode text with custom rule constants.
pub fn encode_with_config(text: &str, config: &EncoderConfig) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mut tokens = vec![
        format!("t{}", config.preamble_tempo),
        format!("v{}", config.preamble_volume),
        format!("@{}", config.preamble_instrument),
    ];

    let mut line_count = 0;
    for line in text.lines() {
        encode_line(line, config, &mut tokens);
        line_count += 1;
    }

    debug!(
        "Encoded {} line(s) into {} notation tokens",
        line_count,
        tokens.len()
    );

    tokens.join(" ")
}

/// Whitespace, plus the byte order mark that editors leave at the start of files.
fn is_blank(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

/// Append the tokens for one line. Lines never influence each other.
fn encode_line(line: &str, config: &EncoderConfig, tokens: &mut Vec<String>) {
    let chars: Vec<char> = line.chars().collect();

    if chars.iter().all(|&c| is_blank(c)) {
        tokens.push(format!("r{}", config.blank_line_rest));
        return;
    }

    tokens.push(format!("t{}", config.tempo_for_line(chars.len())));

    for pair in chars.chunks(2) {
        let lead = pair[0];
        let rhythm = pair.get(1).map_or(Rhythm::UNPAIRED, |&c| Rhythm::from_char(c));

        match rhythm {
            Rhythm::Note(length) => {
                tokens.push(format!("o{}", Script::of(lead).octave()));
                tokens.push(format!("{}{}", note_name(lead), length));
            }
            Rhythm::Rest(length) => tokens.push(format!("r{}", length)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(encode(""), "");
    }

    #[test]
    fn test_single_pair() {
        assert_eq!(encode("ab"), "t120 v10 @0 t180 o4 c+8");
    }

    #[test]
    fn test_odd_trailing_character() {
        // 'a' pairs with 'b'; 'c' (99 % 12 = 3 -> d+) stands alone as a quarter note
        assert_eq!(encode("abc"), "t120 v10 @0 t180 o4 c+8 o4 d+4");
    }

    #[test]
    fn test_single_character_line_is_never_rest() {
        // 'A' = 65 % 12 = 5 -> f
        assert_eq!(encode("A"), "t120 v10 @0 t180 o4 f4");
    }

    #[test]
    fn test_rest_pairs() {
        // 'f' = 102 % 8 = 6 -> eighth rest; 'g' = 103 % 8 = 7 -> quarter rest
        assert_eq!(encode("af"), "t120 v10 @0 t180 r8");
        assert_eq!(encode("ag"), "t120 v10 @0 t180 r4");
    }

    #[test]
    fn test_rhythm_table() {
        assert_eq!(Rhythm::from_char('h'), Rhythm::Note(Length::plain(16))); // 104 % 8 = 0
        assert_eq!(Rhythm::from_char('a'), Rhythm::Note(Length::plain(8))); // 97 % 8 = 1
        assert_eq!(Rhythm::from_char('b'), Rhythm::Note(Length::plain(8))); // 98 % 8 = 2
        assert_eq!(Rhythm::from_char('c'), Rhythm::Note(Length::plain(4))); // 99 % 8 = 3
        assert_eq!(Rhythm::from_char('d'), Rhythm::Note(Length::plain(2))); // 100 % 8 = 4
        assert_eq!(Rhythm::from_char('e'), Rhythm::Note(Length::dotted(8))); // 101 % 8 = 5
        assert_eq!(Rhythm::from_char('f'), Rhythm::Rest(Length::plain(8))); // 102 % 8 = 6
        assert_eq!(Rhythm::from_char('g'), Rhythm::Rest(Length::plain(4))); // 103 % 8 = 7
    }

    #[test]
    fn test_dotted_length_rendering() {
        // 'e' = 101 % 8 = 5 -> dotted eighth
        assert_eq!(encode("ae"), "t120 v10 @0 t180 o4 c+8.");
    }

    #[test]
    fn test_note_names_cover_chromatic_scale() {
        assert_eq!(note_name('\u{0}'), "c");
        assert_eq!(note_name('\u{1}'), "c+");
        assert_eq!(note_name('\u{B}'), "b");
        assert_eq!(note_name('\u{C}'), "c");
    }

    #[test]
    fn test_japanese_octaves() {
        // 'あ' = U+3042 = 12354, 12354 % 12 = 6 -> f+, hiragana -> o5
        // 'い' = U+3044 = 12356, 12356 % 8 = 4 -> half note
        assert_eq!(encode("あい"), "t120 v10 @0 t180 o5 f+2");
        // 'ア' = U+30A2 = 12450, 12450 % 12 = 6 -> f+, katakana -> o4
        assert_eq!(encode("ア"), "t120 v10 @0 t180 o4 f+4");
        // '日' = U+65E5 = 26085, 26085 % 12 = 9 -> a, kanji -> o3
        assert_eq!(encode("日"), "t120 v10 @0 t180 o3 a4");
    }

    #[test]
    fn test_long_line_tempo() {
        let line = "x".repeat(21);
        let encoded = encode(&line);
        assert!(encoded.starts_with("t120 v10 @0 t100 "));

        let line = "x".repeat(20);
        let encoded = encode(&line);
        assert!(encoded.starts_with("t120 v10 @0 t180 "));
    }

    #[test]
    fn test_line_length_counts_characters() {
        // 20 hiragana are 60 bytes but still a short line
        let line = "あ".repeat(20);
        assert!(encode(&line).starts_with("t120 v10 @0 t180 "));
    }

    #[test]
    fn test_blank_lines() {
        assert_eq!(encode("\n"), "t120 v10 @0 r4");
        assert_eq!(encode("\n\n\n"), "t120 v10 @0 r4 r4 r4");
        assert_eq!(encode("   \t"), "t120 v10 @0 r4");
    }

    #[test]
    fn test_byte_order_mark_line_is_blank() {
        assert_eq!(encode("\u{FEFF}"), "t120 v10 @0 r4");
        assert_eq!(encode("\u{FEFF} \nab"), "t120 v10 @0 r4 t180 o4 c+8");
        // A BOM on a line with text is still just a character: 65279 % 12 = 11 -> b
        assert_eq!(encode("\u{FEFF}a"), "t120 v10 @0 t180 o4 b8");
    }

    #[test]
    fn test_crlf_lines() {
        assert_eq!(encode("ab\r\nab"), encode("ab\nab"));
        assert_eq!(
            encode("ab\r\n\r\nab"),
            "t120 v10 @0 t180 o4 c+8 r4 t180 o4 c+8"
        );
    }

    #[test]
    fn test_lines_are_independent() {
        let first = encode("abc");
        let second = encode("hello");
        let both = encode("abc\nhello");
        let first_body = first.trim_start_matches("t120 v10 @0 ");
        let second_body = second.trim_start_matches("t120 v10 @0 ");
        assert_eq!(both, format!("t120 v10 @0 {} {}", first_body, second_body));
    }

    #[test]
    fn test_interior_spaces_are_characters() {
        // ' ' = 32 % 12 = 8 -> g+; 'a' = 97 % 8 = 1 -> eighth
        assert_eq!(encode(" a"), "t120 v10 @0 t180 o4 g+8");
    }

    #[test]
    fn test_custom_config() {
        let config = EncoderConfig {
            preamble_instrument: 81,
            short_line_tempo: 150,
            blank_line_rest: 2,
            ..EncoderConfig::default()
        };
        assert_eq!(
            encode_with_config("ab\n", &config),
            "t120 v10 @81 t150 o4 c+8"
        );
        assert_eq!(encode_with_config("\n", &config), "t120 v10 @81 r2");
    }

    #[test]
    fn test_deterministic() {
        let text = "吾輩は猫である。名前はまだ無い。\n\nThe quick brown fox";
        assert_eq!(encode(text), encode(text));
    }
}

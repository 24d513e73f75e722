use crate::ast::Command;

/// A notation token with its position in the source
#[derive(Debug, Clone, PartialEq)]
pub struct LocatedToken<'a> {
    pub text: &'a str,
    pub command: Command,
    /// 0-based position among the tokens of the notation string
    pub index: usize,
    /// Byte offset of the token's first character
    pub offset: usize,
}

/// Lexer for splitting a notation string into classified tokens
pub struct Lexer<'a> {
    input: &'a str,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input }
    }

    /// Split on runs of whitespace and classify every token. Never fails;
    /// unrecognized tokens come back as `Command::Unknown`.
    pub fn tokenize(&self) -> Vec<LocatedToken<'a>> {
        let mut tokens = Vec::new();
        let mut start: Option<usize> = None;

        for (position, c) in self.input.char_indices() {
            match (c.is_whitespace(), start) {
                (true, Some(token_start)) => {
                    tokens.push(self.located(token_start, position, tokens.len()));
                    start = None;
                }
                (false, None) => start = Some(position),
                _ => {}
            }
        }

        if let Some(token_start) = start {
            tokens.push(self.located(token_start, self.input.len(), tokens.len()));
        }

        tokens
    }

    fn located(&self, start: usize, end: usize, index: usize) -> LocatedToken<'a> {
        let text = &self.input[start..end];
        LocatedToken {
            text,
            command: Command::parse(text),
            index,
            offset: start,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Duration;

    #[test]
    fn test_simple_tokens() {
        let tokens = Lexer::new("t120 o4 c8").tokenize();
        let texts: Vec<_> = tokens.iter().map(|t| t.text).collect();
        assert_eq!(texts, vec!["t120", "o4", "c8"]);
        assert_eq!(tokens[0].command, Command::Tempo(Some(120)));
        assert_eq!(tokens[1].command, Command::Octave(Some(4)));
    }

    #[test]
    fn test_whitespace_runs() {
        let tokens = Lexer::new("  t120 \t\n o4\r\n\n r  ").tokenize();
        let texts: Vec<_> = tokens.iter().map(|t| t.text).collect();
        assert_eq!(texts, vec!["t120", "o4", "r"]);
        assert_eq!(
            tokens[2].command,
            Command::Rest(Duration {
                denominator: None,
                dotted: false,
                malformed: false,
            })
        );
    }

    #[test]
    fn test_positions() {
        let tokens = Lexer::new("t120  o4 c").tokenize();
        assert_eq!(tokens[0].index, 0);
        assert_eq!(tokens[0].offset, 0);
        assert_eq!(tokens[1].index, 1);
        assert_eq!(tokens[1].offset, 6);
        assert_eq!(tokens[2].index, 2);
        assert_eq!(tokens[2].offset, 9);
    }

    #[test]
    fn test_empty_input() {
        assert!(Lexer::new("").tokenize().is_empty());
        assert!(Lexer::new(" \n\t ").tokenize().is_empty());
    }

    #[test]
    fn test_non_ascii_tokens_are_unknown() {
        let tokens = Lexer::new("あ c").tokenize();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].command, Command::Unknown);
        assert_eq!(tokens[1].offset, 4);
    }
}

//! Character cursor used by the parser.
//!
//! The parser only needs sequential reads plus one character of
//! lookahead/putback. [`Reader`] provides exactly that over a `&str`,
//! tracking the byte offset so errors and callers can tell where parsing
//! stopped.

/// Forward cursor over JSON text with single-character putback.
#[derive(Debug, Clone)]
pub struct Reader<'a> {
    input: &'a str,
    pos: usize,
}

/// Whitespace skipped between tokens.
pub fn is_whitespace(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\r')
}

impl<'a> Reader<'a> {
    /// Create a reader positioned at the start of `input`.
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// Current byte offset into the input.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Unread remainder of the input.
    pub fn remaining(&self) -> &'a str {
        &self.input[self.pos..]
    }

    /// Returns true once every character has been consumed.
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Look at the next character without consuming it.
    pub fn peek(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// Consume and return the next character.
    pub fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    /// Push back the character returned by the last [`Reader::advance`].
    pub fn putback(&mut self, ch: char) {
        debug_assert!(self.input[..self.pos].ends_with(ch));
        self.pos = self.pos.saturating_sub(ch.len_utf8());
    }

    /// Skip whitespace characters.
    pub fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek() {
            if !is_whitespace(ch) {
                break;
            }
            self.pos += ch.len_utf8();
        }
    }

    /// Consume the next non-whitespace character.
    pub fn next_token_char(&mut self) -> Option<char> {
        self.skip_whitespace();
        self.advance()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_and_peek() {
        let mut reader = Reader::new("ab");
        assert_eq!(reader.peek(), Some('a'));
        assert_eq!(reader.advance(), Some('a'));
        assert_eq!(reader.advance(), Some('b'));
        assert_eq!(reader.advance(), None);
        assert!(reader.is_at_end());
    }

    #[test]
    fn test_putback_restores_position() {
        let mut reader = Reader::new("xy");
        let ch = reader.advance().unwrap();
        assert_eq!(reader.position(), 1);
        reader.putback(ch);
        assert_eq!(reader.position(), 0);
        assert_eq!(reader.remaining(), "xy");
    }

    #[test]
    fn test_putback_multibyte() {
        let mut reader = Reader::new("жz");
        let ch = reader.advance().unwrap();
        assert_eq!(reader.position(), 2);
        reader.putback(ch);
        assert_eq!(reader.peek(), Some('ж'));
    }

    #[test]
    fn test_next_token_char_skips_whitespace() {
        let mut reader = Reader::new(" \t\r\n [");
        assert_eq!(reader.next_token_char(), Some('['));
        assert_eq!(reader.next_token_char(), None);
    }

    #[test]
    fn test_whitespace_set() {
        assert!(is_whitespace(' '));
        assert!(is_whitespace('\n'));
        assert!(!is_whitespace(','));
        assert!(!is_whitespace('\x0C'));
    }
}

//! Recursive descent JSON parser.
//!
//! The parser holds no state machine object: the state is the call stack
//! plus the [`Reader`] position. [`Parser::load_node`] reads one
//! non-whitespace character and dispatches on it:
//!
//! | Lookahead     | Sub-parser              |
//! |---------------|-------------------------|
//! | `[`           | array, up to `]`        |
//! | `{`           | object, up to `}`       |
//! | `"`           | string, up to `"`       |
//! | digit or `-`  | number                  |
//! | `t` or `f`    | `true` / `false`        |
//! | `n`           | `null`                  |
//!
//! Any error is fatal; no partial document is ever returned.

use std::io::Read;
use std::str::FromStr;

use log::{debug, trace};

use super::node::{Array, Dict, Document, Node};
use super::options::ParseOptions;
use super::reader::Reader;
use crate::error::{ParseResult, ParsingError, Result};

/// JSON parser over a borrowed input string.
pub struct Parser<'a> {
    reader: Reader<'a>,
    options: ParseOptions,
    depth: u64,
}

/// Characters allowed directly after a `true`/`false`/`null` literal.
fn is_literal_terminator(ch: Option<char>) -> bool {
    match ch {
        None => true,
        Some(c) => matches!(c, ' ' | ',' | ']' | '}' | '\n' | '\t' | '\r'),
    }
}

impl<'a> Parser<'a> {
    /// Create a new parser for the given input.
    pub fn new(input: &'a str, options: ParseOptions) -> Self {
        Self {
            reader: Reader::new(input),
            options,
            depth: 0,
        }
    }

    /// Byte offset of the first unconsumed character.
    pub fn position(&self) -> usize {
        self.reader.position()
    }

    /// Parse the whole input as exactly one value.
    ///
    /// With `reject_trailing_content` set, only whitespace may follow the
    /// root value.
    pub fn parse(&mut self) -> ParseResult<Node> {
        let node = self.load_node()?;

        if self.options.reject_trailing_content {
            self.reader.skip_whitespace();
            if !self.reader.is_at_end() {
                return Err(ParsingError::TrailingContent(self.reader.position()));
            }
        }

        Ok(node)
    }

    /// Parse a single value starting at the current position.
    ///
    /// The reader is left directly after the value.
    pub fn load_node(&mut self) -> ParseResult<Node> {
        let ch = self
            .reader
            .next_token_char()
            .ok_or(ParsingError::UnexpectedEof)?;
        trace!("dispatch on {:?} at offset {}", ch, self.reader.position() - ch.len_utf8());

        match ch {
            '[' => self.load_array(),
            '{' => self.load_dict(),
            '"' => self.load_string().map(Node::String),
            '0'..='9' | '-' => {
                self.reader.putback(ch);
                self.load_number()
            }
            't' | 'f' => {
                self.reader.putback(ch);
                self.load_bool()
            }
            'n' => {
                self.reader.putback(ch);
                self.load_null()
            }
            other => Err(ParsingError::UnexpectedChar(other)),
        }
    }

    fn enter(&mut self) -> ParseResult<()> {
        self.depth += 1;
        if self.depth > self.options.max_nesting_depth {
            return Err(ParsingError::NestingTooDeep(
                self.depth,
                self.options.max_nesting_depth,
            ));
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    /// Parse array elements; the opening `[` is already consumed.
    ///
    /// Any character other than `,` or `]` is pushed back and parsed as the
    /// next element, so `[,1]` and `[1 2]` are accepted.
    fn load_array(&mut self) -> ParseResult<Node> {
        self.enter()?;
        let mut result = Array::new();

        loop {
            let ch = self
                .reader
                .next_token_char()
                .ok_or(ParsingError::ArrayNotClosed)?;
            if ch == ']' {
                break;
            }
            if ch != ',' {
                self.reader.putback(ch);
            }

            self.reader.skip_whitespace();
            if self.reader.is_at_end() {
                return Err(ParsingError::ArrayNotClosed);
            }
            result.push(self.load_node()?);
        }

        self.leave();
        Ok(Node::Array(result))
    }

    /// Parse object entries; the opening `{` is already consumed.
    ///
    /// Duplicate keys overwrite earlier ones.
    fn load_dict(&mut self) -> ParseResult<Node> {
        self.enter()?;
        let mut result = Dict::new();

        loop {
            let mut ch = self
                .reader
                .next_token_char()
                .ok_or(ParsingError::DictNotClosed)?;
            if ch == '}' {
                break;
            }
            if ch == ',' {
                ch = self
                    .reader
                    .next_token_char()
                    .ok_or(ParsingError::DictNotClosed)?;
            }
            if self.options.strict_punctuation && ch != '"' {
                return Err(ParsingError::UnexpectedChar(ch));
            }

            let key = self.load_string()?;

            let separator = self
                .reader
                .next_token_char()
                .ok_or(ParsingError::DictNotClosed)?;
            if self.options.strict_punctuation && separator != ':' {
                return Err(ParsingError::UnexpectedChar(separator));
            }

            self.reader.skip_whitespace();
            if self.reader.is_at_end() {
                return Err(ParsingError::DictNotClosed);
            }
            let value = self.load_node()?;
            result.insert(key, value);
        }

        self.leave();
        Ok(Node::Object(result))
    }

    /// Read string contents; the opening quote is already consumed.
    fn load_string(&mut self) -> ParseResult<String> {
        let mut line = String::new();

        loop {
            let ch = self
                .reader
                .advance()
                .ok_or(ParsingError::StringNotClosed)?;
            match ch {
                '"' => break,
                '\\' => {
                    let escaped = self
                        .reader
                        .advance()
                        .ok_or(ParsingError::StringNotClosed)?;
                    line.push(match escaped {
                        'n' => '\n',
                        'r' => '\r',
                        't' => '\t',
                        '"' => '"',
                        '\\' => '\\',
                        other => return Err(ParsingError::InvalidEscape(other)),
                    });
                }
                other => line.push(other),
            }
        }

        Ok(line)
    }

    /// Parse a number.
    ///
    /// A buffer with `.` or an exponent is tried as f64 first; otherwise, or
    /// if that fails or overflows to infinity, it is read as i32.
    fn load_number(&mut self) -> ParseResult<Node> {
        let mut buffer = String::new();
        let mut is_double = false;

        while let Some(ch) = self.reader.advance() {
            match ch {
                '0'..='9' => buffer.push(ch),
                '.' => {
                    is_double = true;
                    buffer.push('.');
                }
                '-' => {
                    if self.options.strict_sign && !buffer.is_empty() {
                        buffer.push('-');
                        return Err(ParsingError::MisplacedSign(buffer));
                    }
                    // Legacy behaviour: a sign anywhere applies to the whole number.
                    buffer.insert(0, '-');
                }
                'e' | 'E' => {
                    is_double = true;
                    buffer.push('e');
                    self.load_exponent(&mut buffer)?;
                    break;
                }
                other => {
                    self.reader.putback(other);
                    break;
                }
            }
        }

        if is_double {
            match buffer.parse::<f64>() {
                Ok(value) if value.is_finite() => return Ok(Node::Double(value)),
                _ => {}
            }
        }

        buffer
            .parse::<i32>()
            .map(Node::Int)
            .map_err(|_| ParsingError::InvalidNumber(buffer))
    }

    /// Consume the run of digits and `-` after an exponent marker.
    fn load_exponent(&mut self, buffer: &mut String) -> ParseResult<()> {
        let marker = buffer.len();

        while let Some(ch) = self.reader.advance() {
            match ch {
                '0'..='9' => buffer.push(ch),
                '-' => {
                    if self.options.strict_sign && buffer.len() != marker {
                        buffer.push('-');
                        return Err(ParsingError::MisplacedSign(std::mem::take(buffer)));
                    }
                    buffer.push('-');
                }
                other => {
                    self.reader.putback(other);
                    break;
                }
            }
        }

        Ok(())
    }

    /// Read up to `len` characters verbatim.
    fn read_literal(&mut self, len: usize) -> String {
        let mut literal = String::with_capacity(len);
        for _ in 0..len {
            match self.reader.advance() {
                Some(ch) => literal.push(ch),
                None => break,
            }
        }
        literal
    }

    fn load_bool(&mut self) -> ParseResult<Node> {
        let size = if self.reader.peek() == Some('t') { 4 } else { 5 };
        let literal = self.read_literal(size);

        if !is_literal_terminator(self.reader.peek()) {
            return Err(ParsingError::InvalidBool);
        }

        match literal.as_str() {
            "true" => Ok(Node::Bool(true)),
            "false" => Ok(Node::Bool(false)),
            _ => Err(ParsingError::InvalidBool),
        }
    }

    fn load_null(&mut self) -> ParseResult<Node> {
        let literal = self.read_literal(4);

        if literal == "null" && is_literal_terminator(self.reader.peek()) {
            Ok(Node::Null)
        } else {
            Err(ParsingError::InvalidNull)
        }
    }
}

/// Parse a JSON string into a Document with default (strict) options.
pub fn load_str(input: &str) -> ParseResult<Document> {
    load_str_with_options(input, ParseOptions::default())
}

/// Parse a JSON string into a Document with custom options.
pub fn load_str_with_options(input: &str, options: ParseOptions) -> ParseResult<Document> {
    let mut parser = Parser::new(input, options);
    let root = parser.parse()?;
    debug!(
        "loaded {} document from {} bytes",
        root.type_name(),
        parser.position()
    );
    Ok(Document::new(root))
}

/// Read the whole stream and parse it with default options.
pub fn load<R: Read>(input: R) -> Result<Document> {
    load_with_options(input, ParseOptions::default())
}

/// Read the whole stream and parse it with custom options.
///
/// Bytes that are not valid UTF-8 fail with [`ParsingError::InvalidUtf8`].
pub fn load_with_options<R: Read>(mut input: R, options: ParseOptions) -> Result<Document> {
    let mut bytes = Vec::new();
    input.read_to_end(&mut bytes)?;
    let text = String::from_utf8(bytes)
        .map_err(|e| ParsingError::InvalidUtf8(e.utf8_error().valid_up_to()))?;
    Ok(load_str_with_options(&text, options)?)
}

impl FromStr for Document {
    type Err = ParsingError;

    fn from_str(s: &str) -> ParseResult<Self> {
        load_str(s)
    }
}

//! Lexical analyzer for content documents.
//!
//! Content documents are strict JSON; the lexer tracks line and column for
//! error reporting and enforces the configured input limits while reading.

use crate::content::limits::DocumentLimits;
use crate::error::{LexicalError, RenderError, RenderErrorKind, Result};

/// Tokens produced while scanning a content document
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    LeftBrace,
    RightBrace,
    LeftBracket,
    RightBracket,
    Colon,
    Comma,
    String(String),
    Number(f64),
    Boolean(bool),
    Null,
    EOF,
}

#[derive(Debug)]
pub struct Lexer {
    /// Input text as a character array
    input: Vec<char>,
    /// Current position in the input
    position: usize,
    /// Current character being processed
    current_char: Option<char>,
    /// Limits applied while scanning
    limits: DocumentLimits,
    /// Location tracking for error messages
    line: usize,
    column: usize,
}

impl Lexer {
    /// Creates a new lexer over the given input text
    pub fn new(input: &str) -> Result<Self> {
        let limits = DocumentLimits::default();
        limits.validate_input_size(input.len())?;

        let input_vec: Vec<char> = input.chars().collect();
        let current_char = input_vec.first().copied();
        Ok(Self {
            input: input_vec,
            position: 0,
            current_char,
            limits,
            line: 1,
            column: 1,
        })
    }

    /// Moves to the next character in the input
    fn advance(&mut self) {
        if let Some(c) = self.current_char {
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        self.position += 1;
        self.current_char = self.input.get(self.position).copied();
    }

    /// Skips whitespace characters in the input
    fn skip_whitespace(&mut self) {
        while let Some(c) = self.current_char {
            if !c.is_whitespace() {
                break;
            }
            self.advance();
        }
    }

    /// Helper method to get current location
    pub fn get_location(&self) -> (usize, usize) {
        (self.line, self.column)
    }

    /// Produces the next token from the input
    pub fn next_token(&mut self) -> Result<Token> {
        self.skip_whitespace();

        match self.current_char {
            None => Ok(Token::EOF),
            Some(c) => {
                let (line, column) = (self.line, self.column);
                match c {
                    '{' => {
                        self.advance();
                        Ok(Token::LeftBrace)
                    }
                    '}' => {
                        self.advance();
                        Ok(Token::RightBrace)
                    }
                    '[' => {
                        self.advance();
                        Ok(Token::LeftBracket)
                    }
                    ']' => {
                        self.advance();
                        Ok(Token::RightBracket)
                    }
                    ':' => {
                        self.advance();
                        Ok(Token::Colon)
                    }
                    ',' => {
                        self.advance();
                        Ok(Token::Comma)
                    }
                    '"' => {
                        let s = self.read_string()?;
                        Ok(Token::String(s))
                    }
                    '0'..='9' | '-' => {
                        let n = self.read_number()?;
                        Ok(Token::Number(n))
                    }
                    't' => self.read_keyword("true", Token::Boolean(true)),
                    'f' => self.read_keyword("false", Token::Boolean(false)),
                    'n' => self.read_keyword("null", Token::Null),
                    _ => Err(
                        RenderError::new(RenderErrorKind::Lexical(LexicalError::InvalidToken(
                            format!("Unexpected character '{}'", c),
                        )))
                        .with_location(line, column),
                    ),
                }
            }
        }
    }

    /// Reads a quoted string, handling escape sequences
    fn read_string(&mut self) -> Result<String> {
        let (line, column) = self.get_location();
        self.advance(); // consume opening quote

        let mut result = String::new();
        loop {
            match self.current_char {
                None => {
                    return Err(RenderError::new(RenderErrorKind::Lexical(
                        LexicalError::UnterminatedString,
                    ))
                    .with_location(line, column));
                }
                Some('"') => {
                    self.advance();
                    self.limits.validate_string(&result)?;
                    return Ok(result);
                }
                Some('\\') => {
                    self.advance();
                    let escaped = self.read_escape()?;
                    result.push(escaped);
                }
                Some(c) => {
                    result.push(c);
                    self.advance();
                }
            }
        }
    }

    /// Resolves a single escape sequence after a backslash
    fn read_escape(&mut self) -> Result<char> {
        let (line, column) = self.get_location();
        let c = self.current_char.ok_or_else(|| {
            RenderError::new(RenderErrorKind::Lexical(LexicalError::UnexpectedEOF))
        })?;
        self.advance();

        match c {
            '"' => Ok('"'),
            '\\' => Ok('\\'),
            '/' => Ok('/'),
            'b' => Ok('\u{0008}'),
            'f' => Ok('\u{000C}'),
            'n' => Ok('\n'),
            'r' => Ok('\r'),
            't' => Ok('\t'),
            'u' => self.read_unicode_escape(),
            other => Err(
                RenderError::new(RenderErrorKind::Lexical(LexicalError::InvalidEscape(other)))
                    .with_location(line, column),
            ),
        }
    }

    /// Reads a `\uXXXX` escape, pairing surrogates when needed
    fn read_unicode_escape(&mut self) -> Result<char> {
        let (line, column) = self.get_location();
        let high = self.read_hex4()?;

        // Surrogate pairs arrive as two consecutive \uXXXX escapes
        if (0xD800..=0xDBFF).contains(&high) {
            if self.current_char == Some('\\') {
                self.advance();
                if self.current_char == Some('u') {
                    self.advance();
                    let low = self.read_hex4()?;
                    if (0xDC00..=0xDFFF).contains(&low) {
                        let combined =
                            0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00);
                        return char::from_u32(combined).ok_or_else(|| {
                            RenderError::new(RenderErrorKind::Lexical(
                                LexicalError::InvalidUnicode,
                            ))
                            .with_location(line, column)
                        });
                    }
                }
            }
            return Err(
                RenderError::new(RenderErrorKind::Lexical(LexicalError::InvalidUnicode))
                    .with_location(line, column),
            );
        }

        char::from_u32(high).ok_or_else(|| {
            RenderError::new(RenderErrorKind::Lexical(LexicalError::InvalidUnicode))
                .with_location(line, column)
        })
    }

    /// Reads exactly four hex digits
    fn read_hex4(&mut self) -> Result<u32> {
        let mut value = 0u32;
        for _ in 0..4 {
            let c = self.current_char.ok_or_else(|| {
                RenderError::new(RenderErrorKind::Lexical(LexicalError::UnexpectedEOF))
            })?;
            let digit = c.to_digit(16).ok_or_else(|| {
                RenderError::new(RenderErrorKind::Lexical(LexicalError::InvalidUnicode))
            })?;
            value = value * 16 + digit;
            self.advance();
        }
        Ok(value)
    }

    /// Reads a number literal
    fn read_number(&mut self) -> Result<f64> {
        let (line, column) = self.get_location();
        let mut literal = String::new();

        if self.current_char == Some('-') {
            literal.push('-');
            self.advance();
        }
        while let Some(c) = self.current_char {
            if c.is_ascii_digit() {
                literal.push(c);
                self.advance();
            } else {
                break;
            }
        }
        if self.current_char == Some('.') {
            literal.push('.');
            self.advance();
            while let Some(c) = self.current_char {
                if c.is_ascii_digit() {
                    literal.push(c);
                    self.advance();
                } else {
                    break;
                }
            }
        }
        if matches!(self.current_char, Some('e') | Some('E')) {
            literal.push('e');
            self.advance();
            if matches!(self.current_char, Some('+') | Some('-')) {
                if let Some(sign) = self.current_char {
                    literal.push(sign);
                }
                self.advance();
            }
            while let Some(c) = self.current_char {
                if c.is_ascii_digit() {
                    literal.push(c);
                    self.advance();
                } else {
                    break;
                }
            }
        }

        literal.parse::<f64>().map_err(|_| {
            RenderError::new(RenderErrorKind::Lexical(LexicalError::InvalidNumber(
                literal.clone(),
            )))
            .with_location(line, column)
        })
    }

    /// Reads a bare keyword (`true`, `false`, `null`); anything else at this
    /// position is a lexical error
    fn read_keyword(&mut self, keyword: &str, token: Token) -> Result<Token> {
        let (line, column) = self.get_location();
        let mut actual = String::new();
        while let Some(c) = self.current_char {
            if c.is_ascii_alphabetic() {
                actual.push(c);
                self.advance();
            } else {
                break;
            }
        }

        if actual == keyword {
            Ok(token)
        } else {
            Err(
                RenderError::new(RenderErrorKind::Lexical(LexicalError::InvalidToken(
                    actual,
                )))
                .with_location(line, column),
            )
        }
    }
}

//! Content document parser.
//!
//! This module provides a recursive descent parser for the JSON content
//! documents that describe page copy. It validates syntax, constructs the
//! value tree, and enforces nesting/size limits while descending.

use std::collections::HashMap;

use super::lexer::{Lexer, Token};
use super::limits::{DocumentLimits, ParsingContext};
use super::value::Value;
use crate::error::{LexicalError, RenderError, RenderErrorKind, Result, SyntaxError};

/// Parser for JSON content documents
pub struct ContentParser {
    /// Lexer that provides tokens
    lexer: Lexer,
    /// Current token being processed
    current_token: Token,
    /// Limits applied while descending
    limits: DocumentLimits,
    /// Depth tracking
    context: ParsingContext,
}

impl ContentParser {
    /// Creates a new parser for the given input
    pub fn new(input: &str) -> Result<Self> {
        Self::with_limits(input, DocumentLimits::default())
    }

    /// Creates a new parser with explicit limits
    pub fn with_limits(input: &str, limits: DocumentLimits) -> Result<Self> {
        limits.validate_input_size(input.len())?;
        let mut lexer = Lexer::new(input)?;
        let current_token = lexer.next_token()?;
        Ok(Self {
            lexer,
            current_token,
            limits,
            context: ParsingContext::new(),
        })
    }

    fn advance(&mut self) -> Result<()> {
        self.current_token = self.lexer.next_token()?;
        Ok(())
    }

    fn error_here(&self, kind: RenderErrorKind) -> RenderError {
        let (line, column) = self.lexer.get_location();
        RenderError::new(kind).with_location(line, column)
    }

    /// Parses a complete content document
    ///
    /// # Returns
    /// - Ok(Value) containing the parsed value tree
    /// - Err if the input is not valid JSON
    pub fn parse(&mut self) -> Result<Value> {
        let value = self.parse_value()?;

        // Check for trailing content
        if self.current_token != Token::EOF {
            return Err(self.error_here(RenderErrorKind::Lexical(
                LexicalError::UnexpectedToken("Unexpected trailing content".to_string()),
            )));
        }

        Ok(value)
    }

    /// Parses a single value
    fn parse_value(&mut self) -> Result<Value> {
        match self.current_token {
            Token::LeftBrace => self.parse_map(),
            Token::LeftBracket => self.parse_array(),
            Token::String(ref s) => {
                let value = Value::String(s.clone());
                self.context.add_size(s.len(), &self.limits)?;
                self.advance()?;
                Ok(value)
            }
            Token::Number(n) => {
                let value = Value::Number(n);
                self.advance()?;
                Ok(value)
            }
            Token::Boolean(b) => {
                let value = Value::Boolean(b);
                self.advance()?;
                Ok(value)
            }
            Token::Null => {
                let value = Value::Null;
                self.advance()?;
                Ok(value)
            }
            _ => Err(self.error_here(RenderErrorKind::Lexical(
                LexicalError::UnexpectedToken(format!("{:?}", self.current_token)),
            ))),
        }
    }

    /// Parses a mapping (JSON object)
    fn parse_map(&mut self) -> Result<Value> {
        self.context.enter_nested(&self.limits)?;
        let mut map = HashMap::new();
        self.advance()?; // consume '{'

        if self.current_token == Token::EOF {
            return Err(self.error_here(RenderErrorKind::Lexical(LexicalError::UnexpectedEOF)));
        }

        // Handle empty map
        if self.current_token == Token::RightBrace {
            self.advance()?;
            self.context.exit_nested();
            return Ok(Value::Map(map));
        }

        loop {
            // Parse key - only string tokens are valid keys
            let key = match &self.current_token {
                Token::String(s) => s.clone(),
                Token::RightBrace => {
                    return Err(self
                        .error_here(RenderErrorKind::Syntax(SyntaxError::TrailingComma)))
                }
                Token::EOF => {
                    return Err(
                        self.error_here(RenderErrorKind::Lexical(LexicalError::UnexpectedEOF))
                    )
                }
                other => {
                    return Err(self.error_here(RenderErrorKind::Syntax(
                        SyntaxError::InvalidKey(format!("{:?}", other)),
                    )))
                }
            };
            self.advance()?;

            // Parse colon
            if self.current_token != Token::Colon {
                return Err(self.error_here(RenderErrorKind::Syntax(SyntaxError::MissingColon)));
            }
            self.advance()?;

            if self.current_token == Token::EOF {
                return Err(
                    self.error_here(RenderErrorKind::Lexical(LexicalError::UnexpectedEOF))
                );
            }

            // Parse value
            let value = self.parse_value()?;
            map.insert(key, value);
            self.limits.validate_map_entries(map.len())?;

            // Handle comma or end of map
            match self.current_token {
                Token::Comma => {
                    self.advance()?;
                    if self.current_token == Token::RightBrace {
                        return Err(self
                            .error_here(RenderErrorKind::Syntax(SyntaxError::TrailingComma)));
                    }
                }
                Token::RightBrace => {
                    self.advance()?;
                    break;
                }
                Token::EOF => {
                    return Err(
                        self.error_here(RenderErrorKind::Lexical(LexicalError::UnexpectedEOF))
                    )
                }
                _ => {
                    return Err(self.error_here(RenderErrorKind::Lexical(
                        LexicalError::UnexpectedToken("Expected comma or }".to_string()),
                    )))
                }
            }
        }

        self.context.exit_nested();
        Ok(Value::Map(map))
    }

    /// Parses an ordered sequence (JSON array)
    fn parse_array(&mut self) -> Result<Value> {
        self.context.enter_nested(&self.limits)?;
        let mut array = Vec::new();
        self.advance()?; // consume '['

        // Handle empty array
        if self.current_token == Token::RightBracket {
            self.advance()?;
            self.context.exit_nested();
            return Ok(Value::Array(array));
        }

        loop {
            let value = self.parse_value()?;
            array.push(value);

            match self.current_token {
                Token::Comma => {
                    self.advance()?;
                    if self.current_token == Token::RightBracket {
                        return Err(self
                            .error_here(RenderErrorKind::Syntax(SyntaxError::TrailingComma)));
                    }
                }
                Token::RightBracket => {
                    self.advance()?;
                    break;
                }
                Token::EOF => {
                    return Err(
                        self.error_here(RenderErrorKind::Lexical(LexicalError::UnexpectedEOF))
                    )
                }
                _ => {
                    return Err(self.error_here(RenderErrorKind::Lexical(
                        LexicalError::UnexpectedToken("Expected comma or ]".to_string()),
                    )))
                }
            }
        }

        self.context.exit_nested();
        Ok(Value::Array(array))
    }
}

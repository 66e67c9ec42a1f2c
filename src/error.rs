//! Error handling types for the renderer
//!
//! This module provides custom error types that give detailed information
//! about content-parsing, template-parsing, and binding failures, including
//! line and column information where available.

use std::{error::Error, fmt};

/// Main error type for rendering operations
#[derive(Debug)]
pub struct RenderError {
    /// The specific kind of error
    kind: RenderErrorKind,
    /// Location where the error occurred
    location: Option<Location>,
    /// Source error that caused this error
    source: Option<Box<dyn Error>>,
    /// Additional context for the error
    context: Option<String>,
}

/// Represents a location in the input text
#[derive(Debug)]
pub struct Location {
    /// Line number (1-based)
    pub line: usize,
    /// Column number (1-based)
    pub column: usize,
}

/// Top-level error categories
#[derive(Debug, Clone)]
pub enum RenderErrorKind {
    IO(IOError),
    Lexical(LexicalError),
    Security(SecurityError),
    Semantic(SemanticError),
    Syntax(SyntaxError),
}

/// Lexical analysis errors
#[derive(Debug, Clone)]
pub enum LexicalError {
    /// Invalid escape sequence in a string
    InvalidEscape(char),
    /// Found an invalid number format
    InvalidNumber(String),
    /// Found an invalid token in the input
    InvalidToken(String),
    /// Invalid Unicode escape sequence
    InvalidUnicode,
    /// Found a valid token in an unexpected position
    UnexpectedToken(String),
    /// Reached end of input unexpectedly
    UnexpectedEOF,
    /// Unterminated string
    UnterminatedString,
}

/// Syntax parsing errors
#[derive(Debug, Clone)]
pub enum SyntaxError {
    /// Invalid object key format
    InvalidKey(String),
    /// Value passed to a function is not a valid type
    InvalidValue(String),
    /// Missing colon after key
    MissingColon,
    /// Trailing comma in an array or object
    TrailingComma,
    /// Found an unexpected character in the input
    UnexpectedCharacter(char),
    /// Close tag does not match the open tag (template)
    MismatchedCloseTag { expected: String, found: String },
    /// Malformed attribute in a template element
    InvalidAttribute(String),
    /// Malformed or unterminated tag in a template
    UnterminatedTag(String),
}

/// Semantic validation errors
#[derive(Debug, Clone)]
pub enum SemanticError {
    /// Content document root is not a mapping
    DocumentNotMap,
}

/// Security-related errors
#[derive(Debug, Clone)]
pub enum SecurityError {
    /// Exceeded maximum depth of nesting
    MaxDepthExceeded,
    /// Exceeded maximum number of map entries
    MaxEntriesExceeded,
    /// Exceeded maximum input size
    MaxSizeExceeded,
    /// Exceeded maximum string length
    MaxStringLengthExceeded,
}

/// IO operation errors
#[derive(Debug, Clone)]
pub enum IOError {
    /// File not found
    FileNotFound(String),
    /// Permission denied
    PermissionDenied(String),
    /// Error reading from a file
    ReadError(String),
    /// Error writing to a file
    WriteError(String),
}

impl RenderError {
    pub fn new(kind: RenderErrorKind) -> Self {
        Self {
            kind,
            location: None,
            source: None,
            context: None,
        }
    }

    pub fn with_location(mut self, line: usize, column: usize) -> Self {
        self.location = Some(Location { line, column });
        self
    }

    pub fn location(&self) -> Option<&Location> {
        self.location.as_ref()
    }

    pub fn kind(&self) -> &RenderErrorKind {
        &self.kind
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Start with base error description
        let base_error = match &self.kind {
            RenderErrorKind::IO(err) => err.to_string(),
            RenderErrorKind::Lexical(err) => err.to_string(),
            RenderErrorKind::Security(err) => err.to_string(),
            RenderErrorKind::Semantic(err) => err.to_string(),
            RenderErrorKind::Syntax(err) => err.to_string(),
        };

        // Format with location if available
        if let Some(loc) = &self.location {
            write!(
                f,
                "at line {}, column {}: {}",
                loc.line, loc.column, base_error
            )?;
        } else {
            write!(f, "Error: {}", base_error)?;
        }

        // Add context if available
        if let Some(ctx) = &self.context {
            write!(f, "\nContext: {}", ctx)?;
        }

        // Add source if available
        if let Some(source) = &self.source {
            write!(f, "\nCaused by: {}", source)?;
        }

        Ok(())
    }
}

impl fmt::Display for LexicalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEscape(c) => write!(f, "Invalid escape sequence '\\{}'", c),
            Self::InvalidNumber(s) => write!(f, "Invalid number format: {}", s),
            Self::InvalidToken(s) => write!(f, "Invalid token: {}", s),
            Self::InvalidUnicode => write!(f, "Invalid unicode escape sequence"),
            Self::UnexpectedToken(s) => write!(f, "Unexpected token: {}", s),
            Self::UnexpectedEOF => write!(f, "Unexpected end of input"),
            Self::UnterminatedString => write!(f, "Unterminated string"),
        }
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidKey(s) => write!(f, "Invalid key: {}", s),
            Self::InvalidValue(s) => write!(f, "Invalid value: {}", s),
            Self::MissingColon => write!(f, "Missing colon after key"),
            Self::TrailingComma => write!(f, "Trailing comma"),
            Self::UnexpectedCharacter(c) => write!(f, "Unexpected character '{}'", c),
            Self::MismatchedCloseTag { expected, found } => {
                write!(f, "Expected </{}>, found </{}>", expected, found)
            }
            Self::InvalidAttribute(s) => write!(f, "Invalid attribute: {}", s),
            Self::UnterminatedTag(s) => write!(f, "Unterminated tag <{}>", s),
        }
    }
}

impl fmt::Display for SemanticError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DocumentNotMap => write!(f, "Content document root must be a mapping"),
        }
    }
}

impl fmt::Display for SecurityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MaxDepthExceeded => write!(f, "Maximum nesting depth exceeded"),
            Self::MaxEntriesExceeded => write!(f, "Maximum number of map entries exceeded"),
            Self::MaxSizeExceeded => write!(f, "Maximum input size exceeded"),
            Self::MaxStringLengthExceeded => write!(f, "Maximum string length exceeded"),
        }
    }
}

impl fmt::Display for IOError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FileNotFound(path) => write!(f, "File not found: {}", path),
            Self::PermissionDenied(path) => write!(f, "Permission denied: {}", path),
            Self::ReadError(msg) => write!(f, "Read error: {}", msg),
            Self::WriteError(msg) => write!(f, "Write error: {}", msg),
        }
    }
}

impl Error for RenderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source.as_ref().map(Box::as_ref)
    }
}

pub type Result<T> = std::result::Result<T, RenderError>;

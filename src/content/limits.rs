use std::fmt;

use crate::error::{RenderError, RenderErrorKind, Result, SecurityError};

/// Maximum nesting depth (32) based on realistic site configurations
pub const DEFAULT_MAX_DEPTH: usize = 32;
/// Maximum input size (1MB) to prevent memory exhaustion
pub const DEFAULT_MAX_SIZE: usize = 1_048_576; // 1MB
/// Maximum string length (100KB); page copy never comes close
pub const DEFAULT_MAX_STRING_LENGTH: usize = 102_400; // 100KB
/// Maximum number of entries per mapping (1K)
pub const DEFAULT_MAX_MAP_ENTRIES: usize = 1_000;

/// Limits applied while parsing content documents and templates
#[derive(Debug, Clone)]
pub struct DocumentLimits {
    /// Maximum nesting depth for maps/arrays/elements
    pub max_depth: usize,
    /// Maximum input size in bytes
    pub max_size: usize,
    /// Maximum string length
    pub max_string_length: usize,
    /// Maximum number of map entries
    pub max_map_entries: usize,
}

/// Tracks input size and nesting depth during parsing
#[derive(Debug, Default)]
pub struct ParsingContext {
    pub current_depth: usize,
    current_size: usize,
}

impl Default for DocumentLimits {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_size: DEFAULT_MAX_SIZE,
            max_string_length: DEFAULT_MAX_STRING_LENGTH,
            max_map_entries: DEFAULT_MAX_MAP_ENTRIES,
        }
    }
}

impl fmt::Display for DocumentLimits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DocumentLimits {{ max_depth: {}, max_size: {}, max_string_length: {}, max_map_entries: {} }}",
            self.max_depth, self.max_size, self.max_string_length, self.max_map_entries
        )
    }
}

impl DocumentLimits {
    pub fn validate_input_size(&self, len: usize) -> Result<()> {
        if len > self.max_size {
            return Err(RenderError::new(RenderErrorKind::Security(
                SecurityError::MaxSizeExceeded,
            )));
        }
        Ok(())
    }

    pub fn validate_string(&self, s: &str) -> Result<()> {
        if s.len() > self.max_string_length {
            return Err(RenderError::new(RenderErrorKind::Security(
                SecurityError::MaxStringLengthExceeded,
            )));
        }
        Ok(())
    }

    pub fn validate_map_entries(&self, count: usize) -> Result<()> {
        if count > self.max_map_entries {
            return Err(RenderError::new(RenderErrorKind::Security(
                SecurityError::MaxEntriesExceeded,
            )));
        }
        Ok(())
    }
}

impl ParsingContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enter_nested(&mut self, limits: &DocumentLimits) -> Result<()> {
        self.current_depth += 1;
        if self.current_depth > limits.max_depth {
            return Err(RenderError::new(RenderErrorKind::Security(
                SecurityError::MaxDepthExceeded,
            )));
        }
        Ok(())
    }

    pub fn exit_nested(&mut self) {
        self.current_depth = self.current_depth.saturating_sub(1);
    }

    pub fn add_size(&mut self, size: usize, limits: &DocumentLimits) -> Result<()> {
        self.current_size += size;
        if self.current_size > limits.max_size {
            return Err(RenderError::new(RenderErrorKind::Security(
                SecurityError::MaxSizeExceeded,
            )));
        }
        Ok(())
    }
}

//! Configuration options for TSV to JSON conversion

/// Conversion configuration options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertConfig {
    /// Spaces per indentation level (0-8)
    pub indent_size: u8,
    /// Pretty-print output (vs compact)
    pub pretty: bool,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            indent_size: 2,
            pretty: true,
        }
    }
}

impl ConvertConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set indentation size
    pub fn with_indent_size(mut self, size: u8) -> Result<Self, String> {
        if size > 8 {
            return Err("Indent size must be 0-8 spaces".to_string());
        }
        self.indent_size = size;
        Ok(self)
    }

    /// Enable/disable pretty printing
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Validate configuration consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.indent_size > 8 {
            return Err("Indent size must be 0-8 spaces".to_string());
        }
        Ok(())
    }
}

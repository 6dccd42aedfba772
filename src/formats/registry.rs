//! Format registry for tree serialization
//!
//! Every output style implements [`Formatter`]; [`FormatRegistry`] looks them
//! up by name so callers (the CLI among them) can pick one from a string.

use std::collections::HashMap;
use std::fmt;

use super::Style;
use crate::ast::Node;

/// Error that can occur during formatting
#[derive(Debug, Clone, PartialEq)]
pub enum FormatError {
    /// Format not found in registry
    FormatNotFound(String),
    /// Error during serialization
    SerializationError(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::FormatNotFound(name) => write!(f, "Format '{name}' not found"),
            FormatError::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
        }
    }
}

impl std::error::Error for FormatError {}

/// Trait for tree formatters
pub trait Formatter: Send + Sync {
    /// The name the format is selected by (e.g. "short", "json")
    fn name(&self) -> &str;

    fn serialize(&self, node: &Node) -> Result<String, FormatError>;

    /// Serialize with `key=value` parameters. Formatters without
    /// parameters ignore them.
    fn serialize_with_params(
        &self,
        node: &Node,
        _params: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        self.serialize(node)
    }

    fn description(&self) -> &str {
        ""
    }
}

impl Formatter for Style {
    fn name(&self) -> &str {
        Style::name(*self)
    }

    fn serialize(&self, node: &Node) -> Result<String, FormatError> {
        super::render(node, *self)
    }

    fn serialize_with_params(
        &self,
        node: &Node,
        params: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        super::render_with_params(node, *self, params)
    }

    fn description(&self) -> &str {
        Style::description(*self)
    }
}

/// Registry of tree formatters, keyed by name
pub struct FormatRegistry {
    formatters: HashMap<String, Box<dyn Formatter>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formatters: HashMap::new(),
        }
    }

    /// Register a formatter, replacing any formatter of the same name
    pub fn register<F: Formatter + 'static>(&mut self, formatter: F) {
        self.formatters
            .insert(formatter.name().to_string(), Box::new(formatter));
    }

    pub fn get(&self, name: &str) -> Option<&dyn Formatter> {
        self.formatters.get(name).map(|f| f.as_ref())
    }

    pub fn has(&self, name: &str) -> bool {
        self.formatters.contains_key(name)
    }

    /// Serialize a tree using the named format
    pub fn serialize(&self, node: &Node, format: &str) -> Result<String, FormatError> {
        let formatter = self
            .get(format)
            .ok_or_else(|| FormatError::FormatNotFound(format.to_string()))?;
        formatter.serialize(node)
    }

    /// Serialize a tree using the named format and its parameters
    pub fn serialize_with_params(
        &self,
        node: &Node,
        format: &str,
        params: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        let formatter = self
            .get(format)
            .ok_or_else(|| FormatError::FormatNotFound(format.to_string()))?;
        formatter.serialize_with_params(node, params)
    }

    /// All format names, sorted
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formatters.keys().cloned().collect();
        names.sort();
        names
    }

    /// A registry holding every built-in [`Style`]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for style in Style::ALL {
            registry.register(style);
        }
        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

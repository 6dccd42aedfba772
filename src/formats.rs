//! Output styles for built trees
//!
//! Every style is a variant of [`Style`]. The bracket and JSON styles share
//! one depth-first walker and differ only in the five hooks of
//! [`printer::TreePrinter`]; `treeviz` and `yaml` have their own renderers.
//!
//! | name           | example                                 |
//! |----------------|-----------------------------------------|
//! | `short`        | one node per line, 4-space indentation  |
//! | `short-inline` | `Root [ L a, L b ]`                     |
//! | `nice`         | `Root [ a, b ]` (name, else type)       |
//! | `json`         | pretty-printed `{"type", "name", "args"}` |
//! | `json-inline`  | the same on a single line               |
//! | `treeviz`      | box-drawing outline                     |
//! | `yaml`         | the serde representation as YAML        |
//!
//! Rendering never changes the tree. Styles may take `key=value`
//! parameters through [`render_with_params`]; `treeviz` understands
//! `show-linum=true`, the others ignore every parameter.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::ast::Node;

pub mod printer;
pub mod registry;
pub mod treeviz;

pub use registry::{FormatError, FormatRegistry, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    Short,
    ShortInline,
    Nice,
    Json,
    JsonInline,
    Treeviz,
    Yaml,
}

impl Style {
    pub const ALL: [Style; 7] = [
        Style::Short,
        Style::ShortInline,
        Style::Nice,
        Style::Json,
        Style::JsonInline,
        Style::Treeviz,
        Style::Yaml,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Style::Short => "short",
            Style::ShortInline => "short-inline",
            Style::Nice => "nice",
            Style::Json => "json",
            Style::JsonInline => "json-inline",
            Style::Treeviz => "treeviz",
            Style::Yaml => "yaml",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Style::Short => "One node per line, children indented",
            Style::ShortInline => "Bracketed tree on a single line",
            Style::Nice => "Like short-inline, showing names instead of types",
            Style::Json => "Pretty-printed JSON",
            Style::JsonInline => "JSON on a single line",
            Style::Treeviz => "Box-drawing outline of the children",
            Style::Yaml => "YAML, including token positions",
        }
    }
}

impl FromStr for Style {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Style::ALL
            .into_iter()
            .find(|style| style.name() == s)
            .ok_or_else(|| FormatError::FormatNotFound(s.to_string()))
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Render `node` in `style`
pub fn render(node: &Node, style: Style) -> Result<String, FormatError> {
    match style {
        Style::Short => Ok(printer::print(node, &printer::Short)),
        Style::ShortInline => Ok(printer::print(node, &printer::ShortInline)),
        Style::Nice => Ok(printer::print(node, &printer::Nice)),
        Style::Json => Ok(printer::print(node, &printer::Json)),
        Style::JsonInline => Ok(printer::print(node, &printer::JsonInline)),
        Style::Treeviz => Ok(treeviz::to_treeviz_str(node)),
        Style::Yaml => serde_yaml::to_string(node)
            .map_err(|err| FormatError::SerializationError(err.to_string())),
    }
}

/// Render `node` in `style`, passing style parameters along
pub fn render_with_params(
    node: &Node,
    style: Style,
    params: &HashMap<String, String>,
) -> Result<String, FormatError> {
    match style {
        Style::Treeviz => Ok(treeviz::to_treeviz_str_with_params(node, params)),
        _ => render(node, style),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_names_round_trip() {
        for style in Style::ALL {
            assert_eq!(style.name().parse::<Style>(), Ok(style));
            assert_eq!(style.to_string(), style.name());
        }
    }

    #[test]
    fn test_unknown_style() {
        assert_eq!(
            "xml".parse::<Style>(),
            Err(FormatError::FormatNotFound("xml".to_string()))
        );
    }

    #[test]
    fn test_yaml_includes_positions() {
        let mut root = Node::root();
        root.children.push(Node::leaf(
            "L",
            crate::code::Token {
                text: "a".into(),
                pos: 0,
                row: 1,
                col: 1,
            },
        ));
        let yaml = render(&root, Style::Yaml).unwrap();
        assert!(yaml.contains("type: Root"), "{yaml}");
        assert!(yaml.contains("text: a"), "{yaml}");
        assert!(yaml.contains("row: 1"), "{yaml}");
    }
}

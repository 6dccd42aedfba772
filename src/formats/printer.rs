//! The bracket and JSON printers
//!
//! One walker drives every printer. For each node it calls `write_open`,
//! then, if the node has children, `write_args_open`, the children
//! separated by `write_args_sep`, and `write_args_close`, and finally
//! `write_close`. Printers only decide what text each hook emits.

use crate::ast::Node;

/// Output buffer plus the walker's position in the tree
pub(crate) struct Pen {
    out: String,
    depth: usize,
    pad: String,
}

impl Pen {
    fn push(&mut self, s: &str) {
        self.out.push_str(s);
    }

    fn pad(&mut self) {
        self.out.push_str(&self.pad);
    }
}

pub(crate) trait TreePrinter {
    fn write_open(&self, pen: &mut Pen, node: &Node);
    fn write_close(&self, pen: &mut Pen);
    fn write_args_open(&self, pen: &mut Pen);
    fn write_args_close(&self, pen: &mut Pen);
    fn write_args_sep(&self, pen: &mut Pen);
}

pub(crate) fn print(node: &Node, printer: &dyn TreePrinter) -> String {
    let mut pen = Pen {
        out: String::new(),
        depth: 0,
        pad: String::new(),
    };
    visit(&mut pen, printer, node);
    pen.out
}

fn visit(pen: &mut Pen, printer: &dyn TreePrinter, node: &Node) {
    let pad = "    ".repeat(pen.depth);
    pen.pad = pad.clone();
    printer.write_open(pen, node);
    if !node.children.is_empty() {
        printer.write_args_open(pen);
        pen.depth += 1;
        for (i, child) in node.children.iter().enumerate() {
            if i > 0 {
                printer.write_args_sep(pen);
            }
            visit(pen, printer, child);
        }
        pen.depth -= 1;
        pen.pad = pad;
        printer.write_args_close(pen);
    }
    printer.write_close(pen);
}

fn quote(s: &str) -> String {
    serde_json::Value::from(s).to_string()
}

fn type_and_name(pen: &mut Pen, node: &Node) {
    pen.push(&node.kind);
    if !node.name.is_empty() {
        pen.push(" ");
        pen.push(node.text());
    }
}

pub(crate) struct Short;

impl TreePrinter for Short {
    fn write_open(&self, pen: &mut Pen, node: &Node) {
        pen.pad();
        type_and_name(pen, node);
    }

    fn write_close(&self, pen: &mut Pen) {
        if pen.depth > 0 {
            pen.push("\n");
        }
    }

    fn write_args_open(&self, pen: &mut Pen) {
        pen.push(" [\n");
    }

    fn write_args_close(&self, pen: &mut Pen) {
        pen.pad();
        pen.push("]");
    }

    fn write_args_sep(&self, _pen: &mut Pen) {}
}

pub(crate) struct ShortInline;

impl TreePrinter for ShortInline {
    fn write_open(&self, pen: &mut Pen, node: &Node) {
        type_and_name(pen, node);
    }

    fn write_close(&self, _pen: &mut Pen) {}

    fn write_args_open(&self, pen: &mut Pen) {
        pen.push(" [ ");
    }

    fn write_args_close(&self, pen: &mut Pen) {
        pen.push(" ]");
    }

    fn write_args_sep(&self, pen: &mut Pen) {
        pen.push(", ");
    }
}

/// `short-inline` showing the name of named nodes instead of their type
pub(crate) struct Nice;

impl TreePrinter for Nice {
    fn write_open(&self, pen: &mut Pen, node: &Node) {
        if node.name.is_empty() {
            pen.push(&node.kind);
        } else {
            pen.push(node.text());
        }
    }

    fn write_close(&self, pen: &mut Pen) {
        ShortInline.write_close(pen);
    }

    fn write_args_open(&self, pen: &mut Pen) {
        ShortInline.write_args_open(pen);
    }

    fn write_args_close(&self, pen: &mut Pen) {
        ShortInline.write_args_close(pen);
    }

    fn write_args_sep(&self, pen: &mut Pen) {
        ShortInline.write_args_sep(pen);
    }
}

pub(crate) struct Json;

impl Json {
    fn indent(pen: &mut Pen) {
        pen.pad();
        pen.pad();
    }
}

impl TreePrinter for Json {
    fn write_open(&self, pen: &mut Pen, node: &Node) {
        Json::indent(pen);
        pen.push("{\n");
        Json::indent(pen);
        pen.push(&format!("    \"type\": {}", quote(&node.kind)));
        if !node.name.is_empty() {
            pen.push(",\n");
            Json::indent(pen);
            pen.push(&format!("    \"name\": {}", quote(node.text())));
        }
    }

    fn write_close(&self, pen: &mut Pen) {
        pen.push("\n");
        Json::indent(pen);
        pen.push("}");
    }

    fn write_args_open(&self, pen: &mut Pen) {
        pen.push(",\n");
        Json::indent(pen);
        pen.push("    \"args\": [\n");
    }

    fn write_args_close(&self, pen: &mut Pen) {
        pen.push("\n");
        Json::indent(pen);
        pen.push("    ]");
    }

    fn write_args_sep(&self, pen: &mut Pen) {
        pen.push(",\n");
    }
}

pub(crate) struct JsonInline;

impl TreePrinter for JsonInline {
    fn write_open(&self, pen: &mut Pen, node: &Node) {
        pen.push(&format!("{{ \"type\": {}", quote(&node.kind)));
        if !node.name.is_empty() {
            pen.push(&format!(", \"name\": {}", quote(node.text())));
        }
    }

    fn write_close(&self, pen: &mut Pen) {
        pen.push(" }");
    }

    fn write_args_open(&self, pen: &mut Pen) {
        pen.push(", \"args\": [");
    }

    fn write_args_close(&self, pen: &mut Pen) {
        pen.push("]");
    }

    fn write_args_sep(&self, pen: &mut Pen) {
        pen.push(", ");
    }
}

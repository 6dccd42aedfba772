//! Treeviz: a one-line-per-node outline of a tree
//!
//! The node the rendering starts from is printed bare, every node below it
//! gets a `├─`/`└─` connector and its label. Labels are `Type` for groups and
//! `Type: name` for named nodes, cut at 30 characters.
//!
//! ```text
//! Root
//! ├─ Func: func
//! │ ├─ Name: One
//! │ └─ Body
//! │   └─ Call: A
//! └─ Func: func
//! ```
//!
//! With `show-linum` each line starts with the row its token came from.

use std::collections::HashMap;

use crate::ast::Node;

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

fn label(node: &Node) -> String {
    if node.name.is_empty() {
        return truncate(&node.kind, 30);
    }
    let text = node.text().replace('\n', "\\n");
    truncate(&format!("{}: {}", node.kind, text), 30)
}

fn linum(node: &Node, show_linum: bool) -> String {
    match (show_linum, node.name.is_empty()) {
        (false, _) => String::new(),
        (true, true) => "   ".to_string(),
        (true, false) => format!("{:02} ", node.name.row),
    }
}

fn format_node(node: &Node, prefix: &str, is_last: bool, show_linum: bool) -> String {
    let connector = if is_last { "└─" } else { "├─" };
    let mut output = format!(
        "{}{}{} {}\n",
        linum(node, show_linum),
        prefix,
        connector,
        label(node)
    );

    let child_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
    output.push_str(&format_children(node, &child_prefix, show_linum));
    output
}

fn format_children(node: &Node, prefix: &str, show_linum: bool) -> String {
    let count = node.children.len();
    node.children
        .iter()
        .enumerate()
        .map(|(i, child)| format_node(child, prefix, i + 1 == count, show_linum))
        .collect()
}

pub fn to_treeviz_str(node: &Node) -> String {
    to_treeviz_str_with_params(node, &HashMap::new())
}

pub fn to_treeviz_str_with_params(node: &Node, params: &HashMap<String, String>) -> String {
    let show_linum = params
        .get("show-linum")
        .map(|v| v != "false")
        .unwrap_or(false);

    let mut output = format!("{}{}\n", linum(node, show_linum), label(node));
    output.push_str(&format_children(node, "", show_linum));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code::Token;

    fn named(kind: &str, text: &str, row: usize, children: Vec<Node>) -> Node {
        let name = Token {
            text: text.to_string(),
            pos: 0,
            row,
            col: 1,
        };
        Node {
            kind: kind.to_string(),
            name,
            children,
        }
    }

    fn sample() -> Node {
        let mut root = Node::root();
        let mut body = Node::new("Body");
        body.children.push(named("Call", "A", 2, vec![]));
        root.children.push(named(
            "Func",
            "func",
            1,
            vec![named("Name", "One", 1, vec![]), body],
        ));
        root.children.push(named("Func", "func", 3, vec![]));
        root
    }

    #[test]
    fn test_treeviz() {
        let expected = "\
Root
├─ Func: func
│ ├─ Name: One
│ └─ Body
│   └─ Call: A
└─ Func: func
";
        assert_eq!(to_treeviz_str(&sample()), expected);
    }

    #[test]
    fn test_treeviz_with_linum() {
        let params = HashMap::from([("show-linum".to_string(), "true".to_string())]);
        let out = to_treeviz_str_with_params(&sample(), &params);
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines[0], "   Root");
        assert_eq!(lines[1], "01 ├─ Func: func");
        assert_eq!(lines[3], "   │ └─ Body");
        assert_eq!(lines[4], "02 │   └─ Call: A");
    }

    #[test]
    fn test_long_labels_are_truncated() {
        let mut root = Node::root();
        root.children.push(named("Comment", &"x".repeat(40), 1, vec![]));
        let out = to_treeviz_str(&root);
        assert_eq!(
            out.lines().nth(1),
            Some(format!("└─ Comment: {}...", "x".repeat(21)).as_str())
        );
    }

    #[test]
    fn test_newlines_in_names_stay_on_one_line() {
        let mut root = Node::root();
        root.children.push(named("Comment", "a\nb", 1, vec![]));
        assert_eq!(to_treeviz_str(&root), "Root\n└─ Comment: a\\nb\n");
    }
}

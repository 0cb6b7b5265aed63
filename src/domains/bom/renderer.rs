//! Indented text rendering of a materialized subtree.

use std::borrow::Cow;
use std::fmt::Write;

use super::materializer::PartTree;
use super::part::Part;

/// Indentation added per level below the root.
pub const INDENT_UNIT: &str = "    ";

/// Marker placed in front of every node below the root.
pub const BRANCH_MARKER: &str = "└─ ";

/// Text line for a single part, without indentation.
///
/// Control characters in stored values are escaped, so the line never breaks.
pub fn render_line(part: &Part) -> String {
    format!(
        "Part Id: {}, Name: {}, Number: {}",
        part.id,
        single_line(&part.name),
        single_line(&part.number)
    )
}

fn single_line(value: &str) -> Cow<'_, str> {
    if !value.chars().any(char::is_control) {
        return Cow::Borrowed(value);
    }

    let mut escaped = String::with_capacity(value.len() + 2);
    for c in value.chars() {
        if c.is_control() {
            escaped.extend(c.escape_default());
        } else {
            escaped.push(c);
        }
    }
    Cow::Owned(escaped)
}

/// Render `tree` pre-order, one line per node, each line terminated by `\n`.
///
/// Siblings appear in the order the materializer loaded them.
pub fn render(tree: &PartTree) -> String {
    let mut out = String::new();

    for (depth, part) in tree.preorder() {
        if depth > 0 {
            out.push_str(&INDENT_UNIT.repeat(depth - 1));
            out.push_str(BRANCH_MARKER);
        }
        // Writing into a String cannot fail.
        let _ = writeln!(out, "{}", render_line(part));
    }

    out
}

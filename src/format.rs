//! Formatting helpers shared by the renderers.

use crate::model::{Argument, ReturnType};
use regex::Regex;
use std::sync::LazyLock;

/// Default plain-text wrap column.
pub const DEFAULT_WIDTH: usize = 80;

static RE_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").unwrap());

/// `label: type` pairs joined by `, `, with `?` after optional types.
///
/// `[{x, number, opt}, {y, string}]` → `x: number?, y: string`
pub fn format_arguments(args: &[Argument]) -> String {
    args.iter()
        .map(|a| format!("{}: {}{}", a.label, a.ty, if a.opt { "?" } else { "" }))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Join return descriptors with `sep`; structured descriptors become JSON.
pub fn join_returns(returns: &[ReturnType], sep: &str) -> String {
    returns
        .iter()
        .map(ReturnType::to_string)
        .collect::<Vec<_>>()
        .join(sep)
}

/// Returns as a union type, or `void` when there is nothing to show.
pub fn format_returns(returns: &[ReturnType]) -> String {
    let joined = join_returns(returns, " | ");
    if joined.is_empty() {
        "void".to_string()
    } else {
        joined
    }
}

/// Full call signature: `object.method(args) -> returns`.
pub fn format_signature(object: &str, method: &str, args: &[Argument], returns: &[ReturnType]) -> String {
    format!(
        "{}.{}({}) -> {}",
        object,
        method,
        format_arguments(args),
        format_returns(returns)
    )
}

/// Remove every `<...>` span, leaving plain text.
pub fn strip_tags(html: &str) -> String {
    RE_TAG.replace_all(html, "").into_owned()
}

/// Greedy word wrap. Each output line starts with `indent`, and the indent
/// counts toward `width`. Words are never split: a word longer than the
/// available space gets a line of its own.
pub fn wrap_text(text: &str, width: usize, indent: &str) -> String {
    let indent_cols = indent.chars().count();
    let mut lines: Vec<String> = Vec::new();
    let mut line = String::new();
    // Width of `line` in chars
    let mut cols = 0;

    for word in text.split_whitespace() {
        let word_cols = word.chars().count();
        if line.is_empty() {
            line.push_str(indent);
            line.push_str(word);
            cols = indent_cols + word_cols;
        } else if cols + 1 + word_cols > width {
            lines.push(std::mem::take(&mut line));
            line.push_str(indent);
            line.push_str(word);
            cols = indent_cols + word_cols;
        } else {
            line.push(' ');
            line.push_str(word);
            cols += 1 + word_cols;
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }

    lines.join("\n")
}

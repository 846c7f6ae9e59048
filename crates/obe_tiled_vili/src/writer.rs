//! vili text writer.
//!
//! Objects reached from the root through objects are written as indented
//! blocks, one `key: value` per line. Anything inside an array is written
//! inline: arrays in brackets, objects in braces, wrapped into rows of
//! [`DumpOptions`] items.

use serde_json::{Map, Number, Value};
use tracing::warn;

use crate::options::DumpOptions;

pub fn dump(value: &Value, options: &DumpOptions) -> String {
    let mut out = String::new();
    match value {
        Value::Object(map) => write_block(&mut out, map, 0, options),
        other => {
            out.push_str(&inline(other, 0, options));
            out.push('\n');
        }
    }
    out
}

fn write_block(out: &mut String, map: &Map<String, Value>, depth: usize, options: &DumpOptions) {
    for (key, value) in map {
        check_key(key);
        indent(out, depth, options);
        out.push_str(key);
        out.push(':');
        match value {
            Value::Object(child) if !child.is_empty() => {
                out.push('\n');
                write_block(out, child, depth + 1, options);
            }
            _ => {
                out.push(' ');
                out.push_str(&inline(value, depth, options));
                out.push('\n');
            }
        }
    }
}

fn inline(value: &Value, depth: usize, options: &DumpOptions) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => number(n),
        Value::String(s) => quote(s),
        Value::Array(items) => {
            let rendered: Vec<String> = items
                .iter()
                .map(|item| inline(item, depth + 1, options))
                .collect();
            rows(
                ("[", "]"),
                &rendered,
                options.array_items_per_line,
                depth,
                options,
            )
        }
        Value::Object(map) => {
            let rendered: Vec<String> = map
                .iter()
                .map(|(key, item)| {
                    check_key(key);
                    format!("{key}: {}", inline(item, depth + 1, options))
                })
                .collect();
            rows(
                ("{", "}"),
                &rendered,
                options.object_items_per_line,
                depth,
                options,
            )
        }
    }
}

/// Items on one line when they fit, otherwise `per_line` items per row.
fn rows(
    (open, close): (&str, &str),
    items: &[String],
    per_line: usize,
    depth: usize,
    options: &DumpOptions,
) -> String {
    if items.is_empty() {
        return format!("{open}{close}");
    }

    let multiline_item = items.iter().any(|item| item.contains('\n'));
    let per_line = if multiline_item { 1 } else { per_line.max(1) };
    if items.len() <= per_line && !multiline_item {
        return format!("{open}{}{close}", items.join(", "));
    }

    let mut out = String::from(open);
    out.push('\n');
    let row_count = items.len().div_ceil(per_line);
    for (i, row) in items.chunks(per_line).enumerate() {
        indent(&mut out, depth + 1, options);
        out.push_str(&row.join(", "));
        if i + 1 < row_count {
            out.push(',');
        }
        out.push('\n');
    }
    indent(&mut out, depth, options);
    out.push_str(close);
    out
}

fn indent(out: &mut String, depth: usize, options: &DumpOptions) {
    out.extend(std::iter::repeat_n(' ', depth * options.indent));
}

/// Integers as-is, floats always with a fractional part.
fn number(n: &Number) -> String {
    if n.is_f64() {
        let text = n.to_string();
        if text.contains(['.', 'e', 'E']) {
            text
        } else {
            format!("{text}.0")
        }
    } else {
        n.to_string()
    }
}

fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

/// vili keys are identifiers; anything else will not read back.
fn check_key(key: &str) {
    let mut chars = key.chars();
    let valid = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_');
    if !valid {
        warn!("Key '{}' is not a valid vili identifier", key);
    }
}

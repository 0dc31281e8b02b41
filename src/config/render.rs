//! Canonical text encoding of a [`Config`]
//!
//! The output is a pure function of the profiles: names are sorted, every
//! field is written for every profile, and nothing from the source file's
//! formatting survives.

use std::collections::HashMap;
use std::fmt::Write;

use super::Config;

const SECTION_INDENT: &str = "  ";
const FIELD_INDENT: &str = "    ";

/// Render the full document for `config`
pub fn render(config: &Config) -> String {
    let mut out = String::new();

    out.push_str("[service]\n");
    for (name, profile) in sorted(&config.service) {
        push_table(&mut out, "service", name, &profile.fields());
    }

    out.push('\n');

    out.push_str("[app]\n");
    for (name, profile) in sorted(&config.app) {
        push_table(&mut out, "app", name, &profile.fields());
    }

    out
}

fn sorted<V>(profiles: &HashMap<String, V>) -> Vec<(&str, &V)> {
    let mut entries: Vec<(&str, &V)> = profiles.iter().map(|(k, v)| (k.as_str(), v)).collect();
    entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
    entries
}

fn push_table(out: &mut String, section: &str, name: &str, fields: &[(&str, &str)]) {
    // Writing into a String cannot fail
    let _ = writeln!(out, "{SECTION_INDENT}[{section}.{}]", key(name));
    for (field, value) in fields {
        let _ = writeln!(out, "{FIELD_INDENT}{field} = {}", basic_string(value));
    }
}

/// Bare key when TOML allows it, quoted key otherwise
fn key(name: &str) -> String {
    let bare = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if bare {
        name.to_string()
    } else {
        basic_string(name)
    }
}

/// Quote `value` as a TOML basic string
fn basic_string(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\u{8}' => quoted.push_str("\\b"),
            '\t' => quoted.push_str("\\t"),
            '\n' => quoted.push_str("\\n"),
            '\u{c}' => quoted.push_str("\\f"),
            '\r' => quoted.push_str("\\r"),
            c if c.is_control() => {
                let _ = write!(quoted, "\\u{:04X}", c as u32);
            }
            c => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}

//! Parser for the freedesktop os-release format
//!
//! Each line is `KEY=value`. Values may be wrapped in double or single quotes;
//! inside double quotes `\"`, `\\`, `\$` and `` \` `` are unescaped. Blank lines,
//! comments and lines without `=` are skipped.

use std::collections::BTreeMap;
use tracing::trace;

/// Parse os-release content into a key/value map
///
/// Later assignments of the same key win.
pub fn parse_os_release(content: &str) -> BTreeMap<String, String> {
    let mut values = BTreeMap::new();

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((key, raw)) = line.split_once('=') else {
            trace!(line, "Skipping os-release line without assignment");
            continue;
        };

        let key = key.trim();
        if key.is_empty() || key.contains(char::is_whitespace) {
            trace!(line, "Skipping os-release line with invalid key");
            continue;
        }

        values.insert(key.to_string(), unquote(raw.trim()));
    }

    values
}

fn unquote(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    let mut quote: Option<char> = None;

    while let Some(c) = chars.next() {
        match (quote, c) {
            (None, '"' | '\'') => quote = Some(c),
            (Some(q), c) if c == q => quote = None,
            (Some('\''), c) => out.push(c),
            (_, '\\') => match chars.next() {
                Some(next) => {
                    if quote.is_some() && !matches!(next, '"' | '\\' | '$' | '`') {
                        out.push('\\');
                    }
                    out.push(next);
                }
                None => out.push('\\'),
            },
            // Unquoted whitespace ends the value
            (None, c) if c.is_whitespace() => break,
            (_, c) => out.push(c),
        }
    }

    out
}

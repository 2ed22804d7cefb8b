//! Textual form of dictionaries.
//!
//! ```text
//! {
//! 	a = 1
//! 	b = {
//! 		c = 2
//! 	}
//! }
//! ```
//!
//! An empty dictionary is `{}`. Each entry is `key = value`, every line of
//! the body indented by one tab. Keys are quoted when they could be
//! mistaken for part of the grammar. Values run from ` = ` to the next
//! unindented key line; a value shaped like a braced block is parsed as a
//! nested dictionary, and kept as text when that parse fails.
//!
//! Text values are written unquoted, so a text value that is itself shaped
//! like a block (including the literal `{}`) reads back as a dictionary.

use smallvec::SmallVec;

use crate::config::Resolver;
use crate::container::ResolveGuard;
use crate::dictionary::Dictionary;
use crate::error::ValueResult;
use crate::stack::ensure_sufficient_stack;
use crate::value::Value;

const SEPARATOR: &str = " = ";

/// Render `dict`. Nested dictionaries become indented blocks; other values
/// use their language-level text.
pub fn render(dict: &Dictionary, resolver: &dyn Resolver) -> ValueResult<String> {
    ensure_sufficient_stack(|| {
        if dict.is_empty() {
            return Ok("{}".to_string());
        }
        let mut body = String::new();
        for (key, value) in dict.iter() {
            let _guard = ResolveGuard::for_value(value)?;
            let value_text = match value.as_primitive(resolver)? {
                Value::Dictionary(nested) => render(&nested, resolver)?,
                other => other.to_text(resolver)?,
            };
            body.push_str(&render_key(key));
            body.push_str(SEPARATOR);
            body.push_str(&value_text);
            body.push('\n');
        }
        body.pop();

        let mut out = String::with_capacity(body.len() + 16);
        out.push_str("{\n");
        for line in body.split('\n') {
            out.push('\t');
            out.push_str(line);
            out.push('\n');
        }
        out.push('}');
        Ok(out)
    })
}

/// `key`, quoted and escaped if it could be misread.
pub fn render_key(key: &str) -> String {
    if !needs_quotes(key) {
        return key.to_string();
    }
    let mut out = String::with_capacity(key.len() + 2);
    out.push('"');
    for c in key.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            other => out.push(other),
        }
    }
    out.push('"');
    out
}

fn needs_quotes(key: &str) -> bool {
    key.is_empty()
        || key.starts_with(char::is_whitespace)
        || key.ends_with(char::is_whitespace)
        || key.contains(['=', '"', '\\', '\n', '\r', '\t'])
}

/// Parse the textual form. `None` when `text` is not a dictionary block.
pub fn parse(text: &str) -> Option<Dictionary> {
    let normalized = text.replace("\r\n", "\n");
    parse_block(normalized.trim_end_matches(['\n', '\r']))
}

fn is_block(text: &str) -> bool {
    text == "{}" || text == "{\n}" || (text.starts_with("{\n") && text.ends_with("\n}"))
}

fn parse_block(text: &str) -> Option<Dictionary> {
    ensure_sufficient_stack(|| {
        let text = text.trim();
        if text == "{}" || text == "{\n}" {
            return Some(Dictionary::new());
        }
        let inner = text.strip_prefix("{\n")?.strip_suffix("\n}")?;

        let mut entries: Vec<(String, SmallVec<[&str; 4]>)> = Vec::new();
        for line in inner.split('\n') {
            let line = if line.is_empty() {
                line
            } else {
                line.strip_prefix('\t')?
            };
            match key_line(line) {
                Some((key, rest)) => entries.push((key, SmallVec::from_elem(rest, 1))),
                None => match entries.last_mut() {
                    Some((_, lines)) => lines.push(line),
                    None if line.trim().is_empty() => {}
                    None => return None,
                },
            }
        }

        let mut parsed = Vec::with_capacity(entries.len());
        for (key, lines) in entries {
            let joined = lines.join("\n");
            let value_text = joined.trim_end_matches(['\n', '\r']);
            let value = if is_block(value_text) {
                match parse_block(value_text) {
                    Some(nested) => Value::Dictionary(nested),
                    None => {
                        tracing::trace!(key = %key, "nested block kept as text");
                        Value::text(value_text)
                    }
                }
            } else {
                Value::text(value_text)
            };
            parsed.push((key, value));
        }
        Some(Dictionary::from_entries(parsed))
    })
}

/// Split an entry's first line into its key and the rest of the value.
/// Indented lines are continuations, never keys.
fn key_line(line: &str) -> Option<(String, &str)> {
    if line.starts_with('\t') {
        return None;
    }
    if line.starts_with('"') {
        return quoted_key_line(line);
    }
    let (key, rest) = line.split_once(SEPARATOR)?;
    Some((key.to_string(), rest))
}

fn quoted_key_line(line: &str) -> Option<(String, &str)> {
    let mut key = String::new();
    let mut chars = line.char_indices().skip(1);
    while let Some((at, c)) = chars.next() {
        match c {
            '"' => {
                let rest = line[at + 1..].strip_prefix(SEPARATOR)?;
                return Some((key, rest));
            }
            '\\' => {
                let (_, escaped) = chars.next()?;
                key.push(match escaped {
                    'n' => '\n',
                    'r' => '\r',
                    't' => '\t',
                    other => other,
                });
            }
            other => key.push(other),
        }
    }
    None
}

//! Payload preprocessing shared by both config documents.
//!
//! Before any schema check runs, `comment` keys are stripped and
//! `$name` / `${name}` placeholders in string values are substituted from
//! the document's `variables` table. Substitution is strict and single
//! pass: an undefined variable or a `$` that starts no valid placeholder
//! is an error, and substituted text is never re-scanned.

use crate::config::document::json_type_name;
use crate::error::MixtureError;

use regex::Regex;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// JSON key removed from objects wherever it appears in the payload.
pub const COMMENT_KEY: &str = "comment";

/// Placeholder grammar: `$$` escape, `$name`, `${name}`.
///
/// The trailing `?` makes every `$` match even when no alternative does,
/// so invalid placeholders are caught instead of passed through.
const PLACEHOLDER_RE: &str = r"\$(?:(\$)|([A-Za-z_][A-Za-z0-9_]*)|\{([A-Za-z_][A-Za-z0-9_]*)\})?";

/// Convert a raw `variables` object into a substitution table.
///
/// Strings pass through and numbers render with their JSON representation;
/// any other value type is rejected.
pub fn variable_table(raw: &Map<String, Value>) -> Result<BTreeMap<String, String>, MixtureError> {
    let mut table = BTreeMap::new();
    for (name, value) in raw {
        let rendered = match value {
            Value::String(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            other => {
                return Err(MixtureError::Schema(format!(
                    "variable \"{}\" must be a string or number, got {}",
                    name,
                    json_type_name(other)
                )));
            }
        };
        table.insert(name.clone(), rendered);
    }
    Ok(table)
}

/// Remove `comment` keys from the payload, at every nesting level.
pub fn strip_comments(entries: &mut Map<String, Value>) {
    entries.retain(|key, _| key != COMMENT_KEY);
    for value in entries.values_mut() {
        strip_comments_value(value);
    }
}

fn strip_comments_value(value: &mut Value) {
    match value {
        Value::Object(map) => {
            map.retain(|key, _| key != COMMENT_KEY);
            for nested in map.values_mut() {
                strip_comments_value(nested);
            }
        }
        Value::Array(items) => {
            for item in items {
                strip_comments_value(item);
            }
        }
        _ => {}
    }
}

/// Substitute placeholders in every string value of the payload.
pub fn interpolate(
    entries: &mut Map<String, Value>,
    vars: &BTreeMap<String, String>,
) -> Result<(), MixtureError> {
    let re = Regex::new(PLACEHOLDER_RE)
        .map_err(|err| MixtureError::Schema(format!("bad placeholder pattern: {}", err)))?;
    for value in entries.values_mut() {
        interpolate_value(value, vars, &re)?;
    }
    Ok(())
}

fn interpolate_value(
    value: &mut Value,
    vars: &BTreeMap<String, String>,
    re: &Regex,
) -> Result<(), MixtureError> {
    match value {
        Value::String(s) => *s = substitute(s, vars, re)?,
        Value::Array(items) => {
            for item in items {
                interpolate_value(item, vars, re)?;
            }
        }
        Value::Object(map) => {
            for nested in map.values_mut() {
                interpolate_value(nested, vars, re)?;
            }
        }
        _ => {}
    }
    Ok(())
}

fn substitute(
    text: &str,
    vars: &BTreeMap<String, String>,
    re: &Regex,
) -> Result<String, MixtureError> {
    let mut out = String::with_capacity(text.len());
    let mut tail = 0;
    for caps in re.captures_iter(text) {
        let whole = caps.get(0).unwrap();
        out.push_str(&text[tail..whole.start()]);
        tail = whole.end();

        if caps.get(1).is_some() {
            out.push('$');
            continue;
        }
        let name = match caps.get(2).or(caps.get(3)) {
            Some(m) => m.as_str(),
            None => {
                return Err(MixtureError::Schema(format!(
                    "invalid placeholder at byte {} in {:?}",
                    whole.start(),
                    text
                )));
            }
        };
        match vars.get(name) {
            Some(replacement) => out.push_str(replacement),
            None => return Err(MixtureError::UndefinedVariable(name.to_string())),
        }
    }
    out.push_str(&text[tail..]);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {:?}", other),
        }
    }

    fn vars(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn variable_table_accepts_strings_and_numbers() {
        let raw = object(json!({ "root": "/data", "shard": 3, "rate": 0.5 }));
        let table = variable_table(&raw).unwrap();
        assert_eq!(table.get("root"), Some(&"/data".to_string()));
        assert_eq!(table.get("shard"), Some(&"3".to_string()));
        assert_eq!(table.get("rate"), Some(&"0.5".to_string()));
    }

    #[test]
    fn variable_table_rejects_non_scalars() {
        let raw = object(json!({ "flag": true }));
        let err = variable_table(&raw).unwrap_err();
        match err {
            MixtureError::Schema(msg) => {
                assert!(msg.contains("flag"), "message should name the variable: {}", msg);
                assert!(msg.contains("boolean"), "message should name the type: {}", msg);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn strips_comment_keys_at_every_level() {
        let mut entries = object(json!({
            "comment": "top level",
            "wiki": { "comment": "nested", "keep": 1 },
            "extras": [ { "comment": "in array", "v": "x" } ]
        }));
        strip_comments(&mut entries);
        assert_eq!(
            Value::Object(entries),
            json!({ "wiki": { "keep": 1 }, "extras": [ { "v": "x" } ] })
        );
    }

    #[test]
    fn substitutes_bare_braced_and_escaped_placeholders() {
        let table = vars(&[("root", "/data")]);
        let mut entries = object(json!({
            "wiki": "$root/wiki",
            "books": "${root}/books",
            "literal": "$$HOME/cache"
        }));
        interpolate(&mut entries, &table).unwrap();
        assert_eq!(entries["wiki"], json!("/data/wiki"));
        assert_eq!(entries["books"], json!("/data/books"));
        assert_eq!(entries["literal"], json!("$HOME/cache"));
    }

    #[test]
    fn substitutes_inside_nested_values() {
        let table = vars(&[("root", "/data")]);
        let mut entries = object(json!({
            "group": { "shards": ["$root/a", "$root/b"] }
        }));
        interpolate(&mut entries, &table).unwrap();
        assert_eq!(
            Value::Object(entries),
            json!({ "group": { "shards": ["/data/a", "/data/b"] } })
        );
    }

    #[test]
    fn substituted_text_is_not_rescanned() {
        let table = vars(&[("a", "$b"), ("b", "oops")]);
        let mut entries = object(json!({ "v": "$a" }));
        interpolate(&mut entries, &table).unwrap();
        assert_eq!(entries["v"], json!("$b"));
    }

    #[test]
    fn undefined_variable_is_fatal() {
        let mut entries = object(json!({ "wiki": "$root/wiki" }));
        let err = interpolate(&mut entries, &vars(&[])).unwrap_err();
        match err {
            MixtureError::UndefinedVariable(name) => assert_eq!(name, "root"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn dangling_dollar_is_fatal() {
        let mut entries = object(json!({ "bad": "price: $5" }));
        let err = interpolate(&mut entries, &vars(&[])).unwrap_err();
        match err {
            MixtureError::Schema(msg) => assert!(msg.contains("invalid placeholder"), "{}", msg),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}

use std::collections::HashMap;

use crate::{empty::is_empty, env::env_get};

/// Parses a comma-separated list of `key<delimiter>value` pairs.
///
/// Keys and values are trimmed; empty segments are skipped; a segment
/// without the delimiter maps the key to an empty string. Values of the
/// form `${VAR:default}` are resolved from the environment, with the
/// default applying when the variable is unset or empty.
pub fn key_values_with_delimiter(s: &str, delimiter: &str) -> HashMap<String, String> {
    let mut map = HashMap::new();

    for pair in s.split(',') {
        if is_empty(pair) {
            continue;
        }
        match pair.split_once(delimiter) {
            Some((key, value)) => {
                map.insert(key.trim().to_owned(), expand_env(value.trim()));
            }
            None => {
                map.insert(pair.trim().to_owned(), String::new());
            }
        }
    }
    map
}

/// Parses `key=value` pairs; see [`key_values_with_delimiter`].
pub fn key_values(s: &str) -> HashMap<String, String> {
    key_values_with_delimiter(s, "=")
}

fn expand_env(value: &str) -> String {
    let Some(inner) = value.strip_prefix("${").and_then(|v| v.strip_suffix('}')) else {
        return value.to_owned();
    };
    let (name, default) = inner.split_once(':').unwrap_or((inner, ""));
    let resolved: String = env_get(name, String::new());
    if resolved.is_empty() && !default.is_empty() {
        default.to_owned()
    } else {
        resolved
    }
}

/// Flattens a map into `key<separator>value` strings; entries with an
/// empty value render as the bare key.
pub fn to_array_with_separator(map: &HashMap<String, String>, separator: &str) -> Vec<String> {
    let mut arr = Vec::with_capacity(map.len());
    for (key, value) in map {
        if is_empty(value) {
            arr.push(key.clone());
        } else {
            arr.push(format!("{key}{separator}{value}"));
        }
    }
    arr
}

/// Flattens a map into `key=value` strings; see [`to_array_with_separator`].
pub fn to_array(map: &HashMap<String, String>) -> Vec<String> {
    to_array_with_separator(map, "=")
}

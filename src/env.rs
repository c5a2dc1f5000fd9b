use std::str::FromStr;

/// Resolves an environment variable with a typed default.
///
/// An unset or empty variable yields `default`; so does a value that does
/// not parse as `T`. `T = String` never fails to parse, so string lookups
/// fall back only when the variable is unset or empty.
pub fn env_get<T: FromStr>(key: &str, default: T) -> T {
    match std::env::var(key) {
        Ok(value) if !value.is_empty() => value.parse().unwrap_or(default),
        _ => default,
    }
}

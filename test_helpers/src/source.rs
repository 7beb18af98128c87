//! Builders for in-memory environment sources.
//!
//! The maps returned here implement `envbind::EnvSource` directly.
//!
//! # Examples
//!
//! ```
//! use envbind_test_helpers::source;
//!
//! let vars = source::vars([("PORT", "8080"), ("HOST", "localhost")]);
//! assert_eq!(vars.get("PORT").map(String::as_str), Some("8080"));
//! ```

use std::collections::{BTreeMap, HashMap};

/// Collects key/value pairs into an owned `HashMap`.
#[must_use]
pub fn vars<I, K, V>(pairs: I) -> HashMap<String, String>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(key, value)| (key.into(), value.into()))
        .collect()
}

/// Collects key/value pairs into a `BTreeMap`, for deterministic iteration.
#[must_use]
pub fn ordered_vars<I, K, V>(pairs: I) -> BTreeMap<String, String>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(key, value)| (key.into(), value.into()))
        .collect()
}

/// Collects pairs into a `HashMap`, prepending `prefix` to every key.
///
/// # Examples
///
/// ```
/// use envbind_test_helpers::source;
///
/// let vars = source::prefixed("APP_", [("PORT", "80")]);
/// assert!(vars.contains_key("APP_PORT"));
/// ```
#[must_use]
pub fn prefixed<I, K, V>(prefix: &str, pairs: I) -> HashMap<String, String>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(key, value)| (format!("{prefix}{}", key.as_ref()), value.into()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn later_pairs_override_earlier_ones() {
        let vars = vars([("A", "1"), ("A", "2")]);
        assert_eq!(vars.len(), 1);
        assert_eq!(vars.get("A").map(String::as_str), Some("2"));
    }

    #[rstest]
    fn ordered_vars_iterate_by_key() {
        let keys: Vec<String> = ordered_vars([("B", ""), ("A", "")]).into_keys().collect();
        assert_eq!(keys, ["A", "B"]);
    }

    #[rstest]
    #[case::empty_prefix("", "PORT")]
    #[case::prefix("SVC_", "SVC_PORT")]
    fn prefixed_keys(#[case] prefix: &str, #[case] expected: &str) {
        assert!(prefixed(prefix, [("PORT", "1")]).contains_key(expected));
    }
}

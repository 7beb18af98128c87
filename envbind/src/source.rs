//! Read-only key/value lookups that feed the walker.
//!
//! Lookups are exact and case-sensitive. A key mapped to the empty string is
//! present; only a missing key is absent.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// Read-only string lookup consulted while populating a struct.
///
/// Implemented for the standard map types so tests and embedders can pass
/// their own data, and for [`SystemEnv`], a snapshot of the process
/// environment.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use envbind::EnvSource;
///
/// let source = HashMap::from([("PORT", "8080"), ("EMPTY", "")]);
/// assert_eq!(EnvSource::get(&source, "PORT"), Some("8080"));
/// assert!(source.contains("EMPTY"));
/// assert!(!source.contains("port"));
/// ```
pub trait EnvSource {
    /// Returns the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<&str>;

    /// Reports whether `key` is present, regardless of its value.
    fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}

impl<T: EnvSource + ?Sized> EnvSource for &T {
    fn get(&self, key: &str) -> Option<&str> {
        (**self).get(key)
    }
}

impl<H: BuildHasher> EnvSource for HashMap<String, String, H> {
    fn get(&self, key: &str) -> Option<&str> {
        HashMap::get(self, key).map(String::as_str)
    }
}

impl<H: BuildHasher> EnvSource for HashMap<&str, &str, H> {
    fn get(&self, key: &str) -> Option<&str> {
        HashMap::get(self, key).copied()
    }
}

impl EnvSource for BTreeMap<String, String> {
    fn get(&self, key: &str) -> Option<&str> {
        BTreeMap::get(self, key).map(String::as_str)
    }
}

impl EnvSource for BTreeMap<&str, &str> {
    fn get(&self, key: &str) -> Option<&str> {
        BTreeMap::get(self, key).copied()
    }
}

/// Owned snapshot of the process environment.
///
/// [`load`](crate::load) takes one snapshot per call and drops it when the
/// call returns. Every value handed back to the caller is an owned copy, so
/// nothing outlives the snapshot.
///
/// Variables whose name or value is not valid UTF-8 are left out and
/// therefore behave as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SystemEnv {
    vars: HashMap<String, String>,
}

impl SystemEnv {
    /// Captures the current process environment.
    #[must_use]
    pub fn snapshot() -> Self {
        let mut vars = HashMap::new();
        for (name, value) in std::env::vars_os() {
            match (name.into_string(), value.into_string()) {
                (Ok(name), Ok(value)) => {
                    vars.insert(name, value);
                }
                (Ok(name), Err(_)) => {
                    tracing::warn!(key = %name, "skipping environment variable with non UTF-8 value");
                }
                (Err(name), _) => {
                    tracing::warn!(
                        key = %name.to_string_lossy(),
                        "skipping environment variable with non UTF-8 name"
                    );
                }
            }
        }
        tracing::debug!(count = vars.len(), "captured process environment");
        Self { vars }
    }

    /// Builds a snapshot from explicit pairs.
    ///
    /// # Examples
    ///
    /// ```
    /// use envbind::{EnvSource, SystemEnv};
    ///
    /// let env = SystemEnv::from_vars([("HOME", "/root")]);
    /// assert_eq!(env.get("HOME"), Some("/root"));
    /// ```
    #[must_use]
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: vars
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }

    /// Number of captured variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Whether the snapshot holds no variables.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl EnvSource for SystemEnv {
    fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }
}

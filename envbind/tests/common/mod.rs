//! Shared fixtures for integration tests.

use std::cell::RefCell;
use std::collections::HashMap;

use envbind::EnvSource;

/// In-memory source that records every key it is asked for.
#[derive(Debug, Default)]
pub struct RecordingSource {
    vars: HashMap<String, String>,
    lookups: RefCell<Vec<String>>,
}

impl RecordingSource {
    #[must_use]
    pub fn new<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            vars: test_helpers::source::vars(pairs),
            lookups: RefCell::default(),
        }
    }

    /// Keys requested so far, in lookup order.
    #[must_use]
    pub fn lookups(&self) -> Vec<String> {
        self.lookups.borrow().clone()
    }

    #[must_use]
    pub fn was_consulted(&self, key: &str) -> bool {
        self.lookups.borrow().iter().any(|seen| seen == key)
    }
}

impl EnvSource for RecordingSource {
    fn get(&self, key: &str) -> Option<&str> {
        self.lookups.borrow_mut().push(key.to_owned());
        self.vars.get(key).map(String::as_str)
    }
}

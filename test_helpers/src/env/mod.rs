//! Helpers for mutating the process environment in tests.
//!
//! Every mutation takes a global re-entrant lock and returns a guard that
//! restores the variable's previous state (including absence) on drop.
//! `envbind::load` snapshots the whole environment, so a test that sets
//! several variables and then loads should hold an [`EnvScope`] for the
//! whole sequence; [`set_vars`] builds one in a single call.
//!
//! Guards for the same key restore in LIFO order. Separate guards on
//! different keys may interleave across threads; take [`lock`] when a test
//! needs exclusive access for longer than one mutation.
//!
//! # Examples
//!
//! ```
//! use envbind_test_helpers::env;
//!
//! let _scope = env::set_vars([("APP_PORT", "8080"), ("APP_NAME", "svc")]);
//! assert_eq!(std::env::var("APP_PORT").ok().as_deref(), Some("8080"));
//! ```

use parking_lot::{ReentrantMutex, ReentrantMutexGuard};
use std::env;
use std::ffi::{OsStr, OsString};
use std::fmt;
use std::sync::LazyLock;

static ENV_MUTEX: LazyLock<ReentrantMutex<()>> = LazyLock::new(ReentrantMutex::default);

/// Wrapper around `std::env::set_var`.
///
/// # Safety
///
/// Callers must hold `ENV_MUTEX`.
unsafe fn env_set_var(key: &str, value: &OsStr) {
    unsafe { env::set_var(key, value) };
}

/// Wrapper around `std::env::remove_var`.
///
/// # Safety
///
/// Callers must hold `ENV_MUTEX`.
unsafe fn env_remove_var(key: &str) {
    unsafe { env::remove_var(key) };
}

fn mutate_locked<F>(key: String, mutator: F, _held: &ReentrantMutexGuard<'static, ()>) -> VarGuard
where
    F: FnOnce(&str),
{
    let original = env::var_os(&key);
    mutator(&key);
    VarGuard { key, original }
}

/// Restores one environment variable to its prior value on drop.
#[must_use = "dropping restores the prior value"]
pub struct VarGuard {
    key: String,
    original: Option<OsString>,
}

impl fmt::Debug for VarGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VarGuard")
            .field("key", &self.key)
            .field("had_original", &self.original.is_some())
            .finish_non_exhaustive()
    }
}

impl Drop for VarGuard {
    fn drop(&mut self) {
        let _held = ENV_MUTEX.lock();
        match self.original.take() {
            // SAFETY: `ENV_MUTEX` is held for the restoration.
            Some(value) => unsafe { env_set_var(&self.key, &value) },
            // SAFETY: `ENV_MUTEX` is held for the restoration.
            None => unsafe { env_remove_var(&self.key) },
        }
    }
}

/// Holds the global environment lock.
#[must_use = "dropping releases the environment lock"]
pub struct EnvLock {
    held: ReentrantMutexGuard<'static, ()>,
}

impl EnvLock {
    /// Sets a variable under this lock.
    pub fn set_var<K, V>(&self, key: K, value: V) -> VarGuard
    where
        K: Into<String>,
        V: AsRef<OsStr>,
    {
        // SAFETY: `self.held` keeps `ENV_MUTEX` locked.
        mutate_locked(key.into(), |k| unsafe { env_set_var(k, value.as_ref()) }, &self.held)
    }

    /// Removes a variable under this lock.
    pub fn remove_var<K>(&self, key: K) -> VarGuard
    where
        K: Into<String>,
    {
        // SAFETY: `self.held` keeps `ENV_MUTEX` locked.
        mutate_locked(key.into(), |k| unsafe { env_remove_var(k) }, &self.held)
    }
}

/// Holds the environment lock together with a set of guards.
///
/// Guards are restored before the lock is released.
#[must_use = "dropping restores the variables and releases the lock"]
pub struct EnvScope {
    guards: Vec<VarGuard>,
    _lock: EnvLock,
}

impl EnvScope {
    /// Runs `builder` under the lock and keeps the guards it returns.
    pub fn new_with<F>(builder: F) -> Self
    where
        F: FnOnce(&EnvLock) -> Vec<VarGuard>,
    {
        let lock = lock();
        let guards = builder(&lock);
        Self {
            guards,
            _lock: lock,
        }
    }
}

impl Drop for EnvScope {
    fn drop(&mut self) {
        // Restore in reverse so repeated keys unwind correctly.
        while let Some(guard) = self.guards.pop() {
            drop(guard);
        }
    }
}

/// Sets an environment variable and returns a guard restoring its prior value.
///
/// # Examples
///
/// ```
/// use envbind_test_helpers::env;
///
/// let _g = env::set_var("ENVBIND_DOC_SET", "bar");
/// assert_eq!(std::env::var("ENVBIND_DOC_SET").ok().as_deref(), Some("bar"));
/// ```
pub fn set_var<K, V>(key: K, value: V) -> VarGuard
where
    K: Into<String>,
    V: AsRef<OsStr>,
{
    lock().set_var(key, value)
}

/// Removes an environment variable and returns a guard restoring its prior
/// value.
///
/// # Examples
///
/// ```
/// use envbind_test_helpers::env;
///
/// let _g = env::remove_var("ENVBIND_DOC_REMOVED");
/// assert!(std::env::var_os("ENVBIND_DOC_REMOVED").is_none());
/// ```
pub fn remove_var<K>(key: K) -> VarGuard
where
    K: Into<String>,
{
    lock().remove_var(key)
}

/// Sets every pair while holding the lock, returning a scope that restores
/// them all.
pub fn set_vars<I, K, V>(pairs: I) -> EnvScope
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: AsRef<OsStr>,
{
    EnvScope::new_with(|lock| {
        pairs
            .into_iter()
            .map(|(key, value)| lock.set_var(key, value))
            .collect()
    })
}

/// Removes every key while holding the lock, returning a scope that restores
/// them all.
pub fn remove_vars<I, K>(keys: I) -> EnvScope
where
    I: IntoIterator<Item = K>,
    K: Into<String>,
{
    EnvScope::new_with(|lock| keys.into_iter().map(|key| lock.remove_var(key)).collect())
}

/// Acquires the global environment lock for the lifetime of the guard.
pub fn lock() -> EnvLock {
    EnvLock {
        held: ENV_MUTEX.lock(),
    }
}

//! Test helpers shared across the envbind workspace.
//!
//! - [`env`] mutates the real process environment behind a global
//!   re-entrant lock and restores it when guards drop.
//! - [`source`] builds in-memory variable maps for `load_from` tests.

pub mod env;
pub mod source;

//! Trybuild fixture verifying `#[envbind(crate = "...")]` works when the
//! runtime crate is only reachable through a re-export.

use std::collections::HashMap;

mod deps {
    pub use envbind as settings;
}

/// Verifies that `#[envbind(crate = "deps::settings")]` resolves through a
/// module path rather than the crate root.
#[derive(Debug, deps::settings::FromEnv)]
#[envbind(crate = "deps::settings")]
struct AliasedConfig {
    #[envbind(default)]
    value: String,
    #[envbind(nested)]
    inner: Option<Inner>,
}

#[derive(Debug, deps::settings::FromEnv)]
#[envbind(crate = "deps::settings", prefix = "INNER_")]
struct Inner {
    enabled: bool,
}

fn main() {
    use deps::settings::FromEnv as _;

    let source: HashMap<String, String> = HashMap::new();
    let result = AliasedConfig::load_from(&source);
    let _: deps::settings::EnvResult<AliasedConfig> = result;
}

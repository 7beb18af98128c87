use std::collections::HashMap;

use envbind::{EnvValue, FromEnv};

/// Verifies that `#[envbind(crate = "envbind")]` is accepted and the
/// generated code compiles. The real crate name is used as a self-referential
/// alias so no workspace reconfiguration is needed.
#[derive(Debug, FromEnv)]
#[envbind(crate = "envbind", prefix = "APP_")]
struct CratePathConfig {
    #[envbind(default)]
    value: String,
    #[envbind(default = 1)]
    count: u32,
    #[envbind(default = Mode::Fast)]
    mode: Mode,
}

#[derive(Debug, EnvValue)]
#[envbind(crate = "envbind")]
enum Mode {
    Fast,
    Safe,
}

fn main() {
    let source = HashMap::from([("APP_value", "hello")]);
    let result = CratePathConfig::load_from(&source);
    let _: envbind::EnvResult<CratePathConfig> = result;
    let _ = Mode::Safe;
}

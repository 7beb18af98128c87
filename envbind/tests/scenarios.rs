//! End-to-end population scenarios against in-memory sources.
//!
//! Each test derives a small struct and loads it from a `HashMap`, checking
//! either the populated value or the kind and context of the first error.

use std::collections::HashMap;

use anyhow::{Result, bail, ensure};
use envbind::{EnvError, ErrorKind, FromEnv};
use rstest::rstest;
use thiserror::Error;

#[derive(Debug, PartialEq, FromEnv)]
struct Service {
    name: String,
    port: u32,
    #[envbind(default = false)]
    debug: bool,
}

#[rstest]
fn defaults_fill_unset_fields() -> Result<()> {
    let source = HashMap::from([("name", "svc"), ("port", "8080")]);
    let service: Service = envbind::load_from(&source)?;
    ensure!(
        service
            == Service {
                name: String::from("svc"),
                port: 8080,
                debug: false,
            },
        "unexpected service: {service:?}"
    );
    Ok(())
}

#[rstest]
#[case::truthy("yes", true)]
#[case::mixed_case("TRUE", true)]
#[case::one("1", true)]
#[case::typo("ture", false)]
#[case::empty("", false)]
fn present_bool_overrides_default(#[case] raw: &str, #[case] expected: bool) -> Result<()> {
    let source = HashMap::from([("name", "svc"), ("port", "1"), ("debug", raw)]);
    let service = Service::load_from(&source)?;
    ensure!(service.debug == expected, "'{raw}' gave {}", service.debug);
    Ok(())
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("port {0} is out of range")]
struct PortOutOfRange(u32);

const fn check_port(port: u32) -> Result<u32, PortOutOfRange> {
    if port > 65_535 {
        Err(PortOutOfRange(port))
    } else {
        Ok(port)
    }
}

#[derive(Debug, FromEnv)]
struct Listener {
    #[envbind(validate = check_port)]
    port: u32,
}

#[rstest]
fn validator_rejection_is_reported_as_custom_error() -> Result<()> {
    let source = HashMap::from([("port", "99999")]);
    let Err(err) = Listener::load_from(&source) else {
        bail!("99999 should fail validation");
    };
    ensure!(err.kind() == ErrorKind::CustomParserError, "kind was {}", err.kind());
    let EnvError::Custom { source, .. } = &err else {
        bail!("expected a custom error, got {err:?}");
    };
    ensure!(
        source.downcast_ref::<PortOutOfRange>() == Some(&PortOutOfRange(99_999)),
        "validator error was not passed through: {source}"
    );
    Ok(())
}

#[rstest]
#[case::accepted("8080", None)]
#[case::unparsable("http", Some(ErrorKind::InvalidInteger))]
#[case::negative("-1", Some(ErrorKind::InvalidInteger))]
#[case::out_of_range("70000", Some(ErrorKind::CustomParserError))]
fn validator_runs_after_builtin_parsing(
    #[case] raw: &str,
    #[case] expected: Option<ErrorKind>,
) -> Result<()> {
    let source = HashMap::from([("port", raw)]);
    let outcome = Listener::load_from(&source).err().map(|err| err.kind());
    ensure!(outcome == expected, "'{raw}' gave {outcome:?}");
    Ok(())
}

#[derive(Debug, FromEnv)]
struct Database {
    host: String,
    #[envbind(default = 5432)]
    port: u16,
}

#[derive(Debug, FromEnv)]
struct App {
    #[envbind(nested)]
    database: Option<Database>,
}

#[rstest]
fn absent_optional_group_is_none() -> Result<()> {
    let app = App::load_from(&HashMap::<&str, &str>::new())?;
    ensure!(app.database.is_none(), "expected no database, got {:?}", app.database);
    Ok(())
}

#[rstest]
fn present_optional_group_is_populated() -> Result<()> {
    let app = App::load_from(&HashMap::from([("host", "db.local")]))?;
    let Some(database) = app.database else {
        bail!("database should be populated once host is set");
    };
    ensure!(database.host == "db.local", "host was {}", database.host);
    ensure!(database.port == 5432, "port was {}", database.port);
    Ok(())
}

#[derive(Debug, FromEnv)]
struct Secrets {
    #[envbind("-")]
    token: String,
}

#[rstest]
#[case::empty_source(&[])]
#[case::same_named_key(&[("token", "abc"), ("-", "abc")])]
fn skipped_field_without_default_is_missing(#[case] pairs: &[(&str, &str)]) -> Result<()> {
    let source: HashMap<&str, &str> = pairs.iter().copied().collect();
    let Err(err) = Secrets::load_from(&source) else {
        bail!("a skipped required field must fail");
    };
    ensure!(err.kind() == ErrorKind::MissingRequiredField, "kind was {}", err.kind());
    ensure!(err.field() == "token", "field was {}", err.field());
    ensure!(err.key().is_none(), "skipped field reported key {:?}", err.key());
    Ok(())
}

#[rstest]
fn missing_required_field_names_the_key() -> Result<()> {
    let Err(err) = Service::load_from(&HashMap::from([("name", "svc")])) else {
        bail!("port is required");
    };
    ensure!(err.kind() == ErrorKind::MissingRequiredField, "kind was {}", err.kind());
    ensure!(
        err.to_string() == "missing required field 'port' (environment key 'port' is not set)",
        "message was {err}"
    );
    Ok(())
}

#[rstest]
fn first_failing_field_wins() -> Result<()> {
    // `name` is declared first and is missing; `port` would fail to parse.
    let source = HashMap::from([("port", "eighty")]);
    let Err(err) = Service::load_from(&source) else {
        bail!("name is missing and port is malformed");
    };
    ensure!(err.field() == "name", "first error was for {}", err.field());
    Ok(())
}

#[rstest]
#[case::float("ratio", "abc", ErrorKind::InvalidFloat)]
#[case::int("count", "1.5", ErrorKind::InvalidInteger)]
#[case::narrow_int("small", "300", ErrorKind::InvalidInteger)]
fn malformed_numbers_are_classified(
    #[case] key: &str,
    #[case] raw: &str,
    #[case] expected: ErrorKind,
) -> Result<()> {
    #[derive(Debug, FromEnv)]
    struct Numbers {
        #[envbind(default = 0.5)]
        ratio: f64,
        #[envbind(default)]
        count: i64,
        #[envbind(default)]
        small: u8,
    }

    let source = HashMap::from([(key, raw)]);
    let Err(err) = Numbers::load_from(&source) else {
        bail!("'{raw}' should not parse for {key}");
    };
    ensure!(err.kind() == expected, "kind was {}", err.kind());
    ensure!(err.key() == Some(key), "key was {:?}", err.key());
    Ok(())
}

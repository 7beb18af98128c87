//! Key mapping forms: literal keys, keyed records, skips and renames.

mod common;

use std::collections::HashMap;
use std::convert::Infallible;

use anyhow::{Result, bail, ensure};
use common::RecordingSource;
use envbind::{ErrorKind, FromEnv, ParseContext};
use rstest::rstest;

#[derive(Debug, FromEnv)]
#[envbind(prefix = "SVC_")]
struct Service {
    #[envbind("LISTEN_PORT")]
    port: u16,
    #[envbind(key = "HOSTNAME")]
    host: String,
    #[envbind(skip, default)]
    internal: bool,
    #[envbind(key = "-", default = String::from("unset"))]
    token: String,
    #[envbind("-")]
    note: Option<String>,
}

#[rstest]
fn explicit_keys_are_prefixed() -> Result<()> {
    let source = HashMap::from([("SVC_LISTEN_PORT", "8080"), ("SVC_HOSTNAME", "api")]);
    let service = Service::load_from(&source)?;
    ensure!(service.port == 8080, "port was {}", service.port);
    ensure!(service.host == "api", "host was {}", service.host);
    Ok(())
}

#[rstest]
fn skipped_fields_are_never_looked_up() -> Result<()> {
    let source = RecordingSource::new([
        ("SVC_LISTEN_PORT", "8080"),
        ("SVC_HOSTNAME", "api"),
        ("SVC_internal", "true"),
        ("SVC_token", "secret"),
        ("SVC_note", "hello"),
        ("SVC_-", "dash"),
    ]);
    let service = Service::load_from(&source)?;
    ensure!(!service.internal, "skip must use the default");
    ensure!(service.token == "unset", "token was {}", service.token);
    ensure!(service.note.is_none(), "note was {:?}", service.note);
    for key in ["SVC_internal", "SVC_token", "SVC_note", "SVC_-"] {
        ensure!(!source.was_consulted(key), "{key} was looked up");
    }
    ensure!(
        source.lookups() == ["SVC_LISTEN_PORT", "SVC_HOSTNAME"],
        "unexpected lookups: {:?}",
        source.lookups()
    );
    Ok(())
}

#[rstest]
fn field_name_keys_are_case_sensitive() -> Result<()> {
    #[derive(Debug, FromEnv)]
    struct Plain {
        port: u16,
    }

    let Err(err) = Plain::load_from(&HashMap::from([("PORT", "80")])) else {
        bail!("'PORT' must not satisfy field 'port'");
    };
    ensure!(err.key() == Some("port"), "key was {:?}", err.key());
    Ok(())
}

#[rstest]
#[case::lower("lowercase", "max_connections")]
#[case::upper("UPPERCASE", "MAX_CONNECTIONS")]
#[case::snake("snake_case", "max_connections")]
#[case::screaming("SCREAMING_SNAKE_CASE", "MAX_CONNECTIONS")]
#[case::kebab("kebab-case", "max-connections")]
#[case::screaming_kebab("SCREAMING-KEBAB-CASE", "MAX-CONNECTIONS")]
#[case::camel("camelCase", "maxConnections")]
#[case::pascal("PascalCase", "MaxConnections")]
fn rename_all_rules_rewrite_field_names(#[case] rule: &str, #[case] key: &str) -> Result<()> {
    #[derive(Debug, FromEnv)]
    #[envbind(rename_all = "lowercase")]
    struct Lower {
        max_connections: u32,
    }
    #[derive(Debug, FromEnv)]
    #[envbind(rename_all = "UPPERCASE")]
    struct Upper {
        max_connections: u32,
    }
    #[derive(Debug, FromEnv)]
    #[envbind(rename_all = "snake_case")]
    struct Snake {
        max_connections: u32,
    }
    #[derive(Debug, FromEnv)]
    #[envbind(rename_all = "SCREAMING_SNAKE_CASE")]
    struct Screaming {
        max_connections: u32,
    }
    #[derive(Debug, FromEnv)]
    #[envbind(rename_all = "kebab-case")]
    struct Kebab {
        max_connections: u32,
    }
    #[derive(Debug, FromEnv)]
    #[envbind(rename_all = "SCREAMING-KEBAB-CASE")]
    struct ScreamingKebab {
        max_connections: u32,
    }
    #[derive(Debug, FromEnv)]
    #[envbind(rename_all = "camelCase")]
    struct Camel {
        max_connections: u32,
    }
    #[derive(Debug, FromEnv)]
    #[envbind(rename_all = "PascalCase")]
    struct Pascal {
        max_connections: u32,
    }

    let source = HashMap::from([(key, "7")]);
    let loaded = match rule {
        "lowercase" => Lower::load_from(&source).map(|c| c.max_connections),
        "UPPERCASE" => Upper::load_from(&source).map(|c| c.max_connections),
        "snake_case" => Snake::load_from(&source).map(|c| c.max_connections),
        "SCREAMING_SNAKE_CASE" => Screaming::load_from(&source).map(|c| c.max_connections),
        "kebab-case" => Kebab::load_from(&source).map(|c| c.max_connections),
        "SCREAMING-KEBAB-CASE" => ScreamingKebab::load_from(&source).map(|c| c.max_connections),
        "camelCase" => Camel::load_from(&source).map(|c| c.max_connections),
        "PascalCase" => Pascal::load_from(&source).map(|c| c.max_connections),
        other => bail!("no fixture for rule {other}"),
    };
    ensure!(loaded? == 7, "rule {rule} did not read key {key}");
    Ok(())
}

#[rstest]
fn rename_all_leaves_explicit_keys_alone() -> Result<()> {
    #[derive(Debug, FromEnv)]
    #[envbind(prefix = "APP_", rename_all = "SCREAMING_SNAKE_CASE")]
    struct Mixed {
        log_level: String,
        #[envbind("logFormat")]
        log_format: String,
    }

    let source = HashMap::from([("APP_LOG_LEVEL", "info"), ("APP_logFormat", "json")]);
    let mixed = Mixed::load_from(&source)?;
    ensure!(mixed.log_level == "info", "level was {}", mixed.log_level);
    ensure!(mixed.log_format == "json", "format was {}", mixed.log_format);
    Ok(())
}

fn split_hosts(raw: &str, _ctx: &ParseContext<'_>) -> Result<Vec<String>, Infallible> {
    Ok(raw
        .split(',')
        .map(str::trim)
        .filter(|host| !host.is_empty())
        .map(str::to_owned)
        .collect())
}

fn parse_millis(raw: &str, ctx: &ParseContext<'_>) -> Result<std::time::Duration, String> {
    raw.parse::<u64>()
        .map(std::time::Duration::from_millis)
        .map_err(|err| format!("{} must be milliseconds: {err}", ctx.key()))
}

#[derive(Debug, FromEnv)]
#[envbind(prefix = "CLUSTER_")]
struct Cluster {
    #[envbind(key = "PEERS", parser = split_hosts)]
    peers: Vec<String>,
    #[envbind(parser = parse_millis, default = std::time::Duration::from_secs(1))]
    timeout: std::time::Duration,
    #[envbind(key = "BACKUP", parser = split_hosts)]
    backup: Option<Vec<String>>,
}

#[rstest]
fn custom_parsers_handle_unsupported_types() -> Result<()> {
    let source = HashMap::from([("CLUSTER_PEERS", "a, b,,c"), ("CLUSTER_timeout", "250")]);
    let cluster = Cluster::load_from(&source)?;
    ensure!(cluster.peers == ["a", "b", "c"], "peers were {:?}", cluster.peers);
    ensure!(
        cluster.timeout == std::time::Duration::from_millis(250),
        "timeout was {:?}",
        cluster.timeout
    );
    ensure!(cluster.backup.is_none(), "backup was {:?}", cluster.backup);
    Ok(())
}

#[rstest]
fn custom_parser_errors_pass_through_verbatim() -> Result<()> {
    let source = HashMap::from([("CLUSTER_PEERS", "a"), ("CLUSTER_timeout", "soon")]);
    let Err(err) = Cluster::load_from(&source) else {
        bail!("'soon' is not a duration");
    };
    ensure!(err.kind() == ErrorKind::CustomParserError, "kind was {}", err.kind());
    ensure!(err.field() == "timeout", "field was {}", err.field());
    let message = err.to_string();
    ensure!(
        message.ends_with("CLUSTER_timeout must be milliseconds: invalid digit found in string"),
        "message was {message}"
    );
    Ok(())
}

#[rstest]
fn custom_parser_sees_empty_values() -> Result<()> {
    let source = HashMap::from([("CLUSTER_PEERS", ""), ("CLUSTER_BACKUP", "")]);
    let cluster = Cluster::load_from(&source)?;
    ensure!(cluster.peers.is_empty(), "peers were {:?}", cluster.peers);
    ensure!(
        cluster.backup == Some(Vec::new()),
        "an empty but present key must still be parsed: {:?}",
        cluster.backup
    );
    Ok(())
}

#[derive(Debug, FromEnv)]
struct Limits {
    retries: Option<u8>,
    #[envbind(default = Some(30))]
    timeout_secs: Option<u32>,
    label: Option<String>,
}

#[rstest]
#[case::absent(&[], None, Some(30), None)]
#[case::present(
    &[("retries", "3"), ("timeout_secs", "5"), ("label", "")],
    Some(3),
    Some(5),
    Some("")
)]
fn optional_scalars_resolve_to_absence_or_default(
    #[case] pairs: &[(&str, &str)],
    #[case] retries: Option<u8>,
    #[case] timeout_secs: Option<u32>,
    #[case] label: Option<&str>,
) -> Result<()> {
    let source: HashMap<&str, &str> = pairs.iter().copied().collect();
    let limits = Limits::load_from(&source)?;
    ensure!(limits.retries == retries, "retries were {:?}", limits.retries);
    ensure!(
        limits.timeout_secs == timeout_secs,
        "timeout was {:?}",
        limits.timeout_secs
    );
    ensure!(limits.label.as_deref() == label, "label was {:?}", limits.label);
    Ok(())
}

#[rstest]
fn present_optional_scalar_must_parse() -> Result<()> {
    let Err(err) = Limits::load_from(&HashMap::from([("retries", "many")])) else {
        bail!("a present value is parsed even for optional fields");
    };
    ensure!(err.kind() == ErrorKind::InvalidInteger, "kind was {}", err.kind());
    Ok(())
}

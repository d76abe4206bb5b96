//! The unwinding channel: helpers abort without returning `Result`.
//!
//! Run with: cargo run --example unwind_boundary

use std::collections::HashMap;

use errless::prelude::*;

#[derive(Debug, Clone, PartialEq)]
enum ConfigError {
    Missing(&'static str),
    Invalid { key: &'static str, value: String },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Missing(key) => write!(f, "missing key {key}"),
            ConfigError::Invalid { key, value } => write!(f, "invalid value {value:?} for {key}"),
        }
    }
}

fn lookup(env: &HashMap<&str, &str>, key: &'static str) -> String {
    let value = env.get(key).map(|v| v.to_string());
    let err = value.is_none().then_some(ConfigError::Missing(key));
    try1(value.unwrap_or_default(), err).check().or_abort()
}

fn port(env: &HashMap<&str, &str>) -> u16 {
    let raw = lookup(env, "PORT");
    let parsed = raw.parse::<u16>().ok();
    let err = parsed.is_none().then(|| ConfigError::Invalid { key: "PORT", value: raw.clone() });
    try1(parsed.unwrap_or_default(), err).err_wrap("reading port").or_abort()
}

fn workers(env: &HashMap<&str, &str>) -> usize {
    let raw = env.get("WORKERS").map(|v| v.to_string());
    let err = raw.is_none().then_some(ConfigError::Missing("WORKERS"));
    // A missing key keeps the default.
    let raw = try1(raw.unwrap_or_default(), err)
        .if_not(ConfigError::Missing("WORKERS"))
        .check()
        .or_abort();
    raw.parse().unwrap_or(4)
}

fn load(env: &HashMap<&str, &str>) -> WrappedResult<(u16, usize), ConfigError> {
    unwind::handle(|err| err.with_message("loading config"), || (port(env), workers(env)))
}

fn main() {
    let good = HashMap::from([("PORT", "8080")]);
    let bad = HashMap::from([("PORT", "80http")]);

    for env in [good, bad] {
        match load(&env) {
            Ok((port, workers)) => println!("port {port}, {workers} workers"),
            Err(err) => println!("{err}"),
        }
    }
}

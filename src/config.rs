use std::env;

use crate::routes::DEFAULT_KEY;

/// Environment variable naming the server this process serves for
pub const SERVER_ID_VAR: &str = "SERVER_ID";

#[derive(Debug, Clone)]
pub struct Config {
    pub server_id: String,
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            server_id: identify(SERVER_ID_VAR),
        }
    }

    pub fn log_startup(&self) {
        tracing::debug!("Configuration loaded:");
        tracing::debug!("  {}: {}", SERVER_ID_VAR, self.server_id);
    }
}

/// Read `key_name` from the environment, or `"default"` when it is unset or
/// empty. Invalid UTF-8 is replaced lossily rather than dropped.
pub fn identify(key_name: &str) -> String {
    let raw = env::var_os(key_name).map(|value| match value.into_string() {
        Ok(value) => value,
        Err(value) => {
            tracing::debug!("{} is not valid UTF-8, decoding lossily", key_name);
            value.to_string_lossy().into_owned()
        }
    });
    identify_value(raw)
}

/// Turn a raw variable value into a route key. Non-empty values pass through
/// untouched.
pub fn identify_value(raw: Option<String>) -> String {
    match raw {
        Some(value) if !value.is_empty() => value,
        _ => DEFAULT_KEY.to_string(),
    }
}

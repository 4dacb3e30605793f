//! Bot configuration: BaseConfig (Telegram + log) + WorkflowConfig (transform parameters).

mod base;
mod bot_config;
mod workflow;

#[cfg(test)]
mod tests;

pub use base::BaseConfig;
pub use bot_config::BotConfig;
pub use workflow::WorkflowConfig;

use anyhow::{Context, Result};
use std::env;
use std::str::FromStr;

/// Reads `name` and parses it; `default` when unset. A set but unparsable value is an error.
fn env_parse<T>(name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{} is set but not valid: {}", name, raw)),
        Err(_) => Ok(default),
    }
}

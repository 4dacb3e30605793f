//! Config tests.

use crate::config::bot_config::BotConfig;
use crate::config::WorkflowConfig;
use serial_test::serial;
use std::env;
use std::time::Duration;

const VARS: &[&str] = &[
    "BOT_TOKEN",
    "TELEGRAM_BOT_TOKEN",
    "TELEGRAM_API_URL",
    "TELOXIDE_API_URL",
    "LOG_FILE",
    "ASCII_WIDTH",
    "PIXEL_BLOCK_SIZE",
    "STICKER_SIZE",
    "DEFAULT_PALETTE",
    "JPEG_QUALITY",
    "SESSION_TTL_SECS",
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_load_config_with_defaults() {
    clear_env();
    env::set_var("BOT_TOKEN", "test_token");

    let config = BotConfig::load(None).unwrap();

    assert_eq!(config.bot_token(), "test_token");
    assert!(config.telegram_api_url().is_none());
    assert_eq!(config.log_file(), "logs/photo-bot.log");
    let wf = config.workflow();
    assert_eq!(wf.ascii_width, 40);
    assert_eq!(wf.pixel_block_size, 20);
    assert_eq!(wf.sticker_size, 512);
    assert_eq!(wf.default_palette, "@%#*+=-:. ");
    assert_eq!(wf.jpeg_quality, 75);
    assert_eq!(wf.session_ttl(), Some(Duration::from_secs(86_400)));
    assert!(config.validate().is_ok());

    clear_env();
}

#[test]
#[serial]
fn test_load_config_with_custom_values() {
    clear_env();
    env::set_var("BOT_TOKEN", "custom_token");
    env::set_var("LOG_FILE", "/tmp/bot.log");
    env::set_var("ASCII_WIDTH", "80");
    env::set_var("PIXEL_BLOCK_SIZE", "8");
    env::set_var("DEFAULT_PALETTE", "#.");
    env::set_var("SESSION_TTL_SECS", "0");

    let config = BotConfig::load(None).unwrap();

    assert_eq!(config.bot_token(), "custom_token");
    assert_eq!(config.log_file(), "/tmp/bot.log");
    assert_eq!(config.workflow().ascii_width, 80);
    assert_eq!(config.workflow().pixel_block_size, 8);
    assert_eq!(config.workflow().default_palette, "#.");
    assert_eq!(config.workflow().session_ttl(), None);

    clear_env();
}

#[test]
#[serial]
fn test_load_config_with_override_token() {
    clear_env();
    env::set_var("BOT_TOKEN", "env_token");

    let config = BotConfig::load(Some("override_token".to_string())).unwrap();

    assert_eq!(config.bot_token(), "override_token");

    clear_env();
}

#[test]
#[serial]
fn test_load_config_token_fallback() {
    clear_env();
    env::set_var("TELEGRAM_BOT_TOKEN", "fallback_token");

    let config = BotConfig::load(None).unwrap();
    assert_eq!(config.bot_token(), "fallback_token");

    clear_env();
}

#[test]
#[serial]
fn test_load_config_missing_token() {
    clear_env();
    assert!(BotConfig::load(None).is_err());
}

#[test]
#[serial]
fn test_load_config_unparsable_number() {
    clear_env();
    env::set_var("BOT_TOKEN", "test_token");
    env::set_var("ASCII_WIDTH", "wide");

    assert!(BotConfig::load(None).is_err());

    clear_env();
}

#[test]
#[serial]
fn test_validate_telegram_api_url_invalid() {
    clear_env();
    env::set_var("BOT_TOKEN", "test_token");
    env::set_var("TELEGRAM_API_URL", "not-a-valid-url");

    let config = BotConfig::load(None).unwrap();
    assert!(config.validate().is_err());

    clear_env();
}

#[test]
fn test_validate_workflow_ranges() {
    let ok = WorkflowConfig::default();
    assert!(ok.validate().is_ok());

    let cases = [
        WorkflowConfig { ascii_width: 0, ..WorkflowConfig::default() },
        WorkflowConfig { ascii_width: 1999, ..WorkflowConfig::default() },
        WorkflowConfig { pixel_block_size: 0, ..WorkflowConfig::default() },
        WorkflowConfig { sticker_size: 0, ..WorkflowConfig::default() },
        WorkflowConfig { default_palette: String::new(), ..WorkflowConfig::default() },
        WorkflowConfig { jpeg_quality: 0, ..WorkflowConfig::default() },
        WorkflowConfig { jpeg_quality: 101, ..WorkflowConfig::default() },
    ];
    for case in cases {
        assert!(case.validate().is_err(), "{:?} should be rejected", case);
    }
}

use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use rust_decimal_macros::dec;

use nexus_portfolio::error::{ConfigError, Error};
use nexus_portfolio::infrastructure::config::settings::Config;

static TEMP_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn temp_config_path() -> PathBuf {
    let mut path = std::env::temp_dir();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let suffix = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    path.push(format!("nexus-portfolio-config-test-{nanos}-{suffix}.toml"));
    path
}

fn write_temp_config(contents: &str) -> PathBuf {
    let path = temp_config_path();
    fs::write(&path, contents).expect("write temp config");
    path
}

fn load(contents: &str) -> Result<Config, Error> {
    let path = write_temp_config(contents);
    let result = Config::load(&path);
    let _ = fs::remove_file(&path);
    result
}

#[test]
fn full_config_loads() {
    let toml = r#"
[server]
host = "127.0.0.1"
port = 8080
allowed_origins = ["http://localhost:5173"]

[upstream]
coingecko_url = "https://pro-api.coingecko.com/api/v3"
chain_id = 137

[upstream.http]
timeout_ms = 5000
retry_max_attempts = 3

[logging]
level = "debug"
format = "json"

[storage]
seed_default_tokens = false

[dashboard]
default_user_id = 2
default_wallet_id = 3
fallback_eth_usd = 3100.5
"#;

    let config = load(toml).expect("valid config");

    assert_eq!(config.server.address(), "127.0.0.1:8080");
    assert_eq!(config.server.allowed_origins, ["http://localhost:5173"]);
    assert_eq!(config.upstream.chain_id, 137);
    assert_eq!(config.upstream.http.timeout_ms, 5000);
    assert_eq!(config.upstream.http.retry_max_attempts, 3);
    assert_eq!(config.logging.format, "json");
    assert!(!config.storage.seed_default_tokens);
    assert_eq!(config.dashboard.default_wallet_id, 3);
    assert_eq!(config.dashboard.fallback_eth_usd, dec!(3100.5));
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let path = temp_config_path();

    let config = Config::load_or_default(&path).expect("defaults");

    assert_eq!(config.server.port, 5000);
    assert!(config.storage.seed_default_tokens);
    assert_eq!(config.dashboard.default_user_id, 1);
}

#[test]
fn missing_file_is_an_error_for_strict_load() {
    let path = temp_config_path();

    match Config::load(&path) {
        Err(Error::Config(ConfigError::ReadFile(_))) => {}
        other => panic!("expected read error, got {other:?}"),
    }
}

#[test]
fn config_rejects_zero_timeout() {
    let toml = r#"
[upstream.http]
timeout_ms = 0
"#;

    match load(toml) {
        Err(Error::Config(ConfigError::InvalidValue {
            field: "timeout_ms",
            ..
        })) => {}
        other => panic!("expected invalid timeout, got {other:?}"),
    }
}

#[test]
fn config_rejects_blank_upstream_url() {
    let toml = r#"
[upstream]
blockscout_url = ""
"#;

    match load(toml) {
        Err(Error::Config(ConfigError::MissingField {
            field: "blockscout_url",
        })) => {}
        other => panic!("expected missing blockscout url, got {other:?}"),
    }
}

#[test]
fn config_rejects_malformed_upstream_url() {
    let toml = r#"
[upstream]
oneinch_url = "not a url"
"#;

    match load(toml) {
        Err(Error::Config(ConfigError::InvalidValue {
            field: "oneinch_url",
            ..
        })) => {}
        other => panic!("expected invalid 1inch url, got {other:?}"),
    }
}

#[test]
fn config_rejects_non_positive_fallback_price() {
    let toml = r#"
[dashboard]
fallback_eth_usd = 0
"#;

    match load(toml) {
        Err(Error::Config(ConfigError::InvalidValue {
            field: "fallback_eth_usd",
            ..
        })) => {}
        other => panic!("expected invalid fallback price, got {other:?}"),
    }
}

#[test]
fn config_rejects_malformed_toml() {
    match load("[server\nport = 1") {
        Err(Error::Config(ConfigError::Parse(_))) => {}
        other => panic!("expected parse error, got {other:?}"),
    }
}

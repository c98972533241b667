use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use chrono::Weekday;
use promocal::config::Config;
use promocal::error::{ConfigError, Error};

static TEMP_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn write_temp_config(contents: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let suffix = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    path.push(format!("promocal-config-test-{nanos}-{suffix}.toml"));
    fs::write(&path, contents).expect("write temp config");
    path
}

#[test]
fn minimal_config_loads_with_defaults() {
    let toml = r#"
[network]
api_url = "http://localhost:8080/api"

[logging]
level = "info"
format = "pretty"
"#;

    let path = write_temp_config(toml);
    let result = Config::load(&path);
    let _ = fs::remove_file(&path);

    let config = result.expect("minimal config should load");
    assert_eq!(config.network.request_timeout_secs, 30);
    assert_eq!(config.week_start(), Weekday::Sun);
    assert_eq!(config.calendar.visible_per_day, 3);
}

#[test]
fn config_rejects_empty_api_url() {
    let toml = r#"
[network]
api_url = ""

[logging]
level = "info"
format = "pretty"
"#;

    let path = write_temp_config(toml);
    let result = Config::load(&path);
    let _ = fs::remove_file(&path);

    assert!(
        matches!(
            result,
            Err(Error::Config(ConfigError::MissingField { field: "api_url" }))
        ),
        "Expected empty api_url to be rejected"
    );
}

#[test]
fn config_rejects_unparsable_api_url() {
    let toml = r#"
[network]
api_url = "not a url"

[logging]
level = "info"
format = "pretty"
"#;

    let path = write_temp_config(toml);
    let result = Config::load(&path);
    let _ = fs::remove_file(&path);

    match result {
        Err(Error::Config(ConfigError::InvalidValue {
            field: "api_url", ..
        })) => {}
        Err(err) => panic!("Expected invalid api_url error, got {err}"),
        Ok(config) => panic!(
            "Expected invalid api_url to be rejected, got {}",
            config.network.api_url
        ),
    }
}

#[test]
fn config_rejects_zero_timeout() {
    let toml = r#"
[network]
api_url = "http://localhost:8080/api"
request_timeout_secs = 0

[logging]
level = "info"
format = "pretty"
"#;

    let path = write_temp_config(toml);
    let result = Config::load(&path);
    let _ = fs::remove_file(&path);

    match result {
        Err(Error::Config(ConfigError::InvalidValue {
            field: "request_timeout_secs",
            ..
        })) => {}
        Err(err) => panic!("Expected invalid timeout error, got {err}"),
        Ok(_) => panic!("Expected zero timeout to be rejected"),
    }
}

#[test]
fn config_rejects_unknown_week_start() {
    let toml = r#"
[network]
api_url = "http://localhost:8080/api"

[logging]
level = "info"
format = "pretty"

[calendar]
week_start = "someday"
"#;

    let path = write_temp_config(toml);
    let result = Config::load(&path);
    let _ = fs::remove_file(&path);

    match result {
        Err(Error::Config(ConfigError::InvalidValue {
            field: "week_start",
            ..
        })) => {}
        Err(err) => panic!("Expected invalid week_start error, got {err}"),
        Ok(_) => panic!("Expected unknown week_start to be rejected"),
    }
}

#[test]
fn config_accepts_monday_week_start() {
    let toml = r#"
[network]
api_url = "http://localhost:8080/api"

[logging]
level = "info"
format = "pretty"

[calendar]
week_start = "monday"
visible_per_day = 2
"#;

    let path = write_temp_config(toml);
    let result = Config::load(&path);
    let _ = fs::remove_file(&path);

    let config = result.expect("monday config should load");
    assert_eq!(config.week_start(), Weekday::Mon);
    assert_eq!(config.calendar.visible_per_day, 2);
}

#[test]
fn config_rejects_missing_network_section() {
    let toml = r#"
[logging]
level = "info"
format = "pretty"
"#;

    let path = write_temp_config(toml);
    let result = Config::load(&path);
    let _ = fs::remove_file(&path);

    assert!(
        matches!(result, Err(Error::Config(ConfigError::Parse(_)))),
        "Expected missing [network] section to fail parsing"
    );
}

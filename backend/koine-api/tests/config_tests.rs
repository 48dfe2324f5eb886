use koine_api::config::{Config, StorageBackend};

const VARS: [&str; 5] = [
    "APP_ENV",
    "APP__STATS__STORAGE",
    "STATS_STORAGE",
    "DATA_DIR",
    "METRICS_AUTH",
];

fn clear_env() {
    for var in VARS {
        std::env::remove_var(var);
    }
}

#[test]
#[serial_test::serial]
fn test_defaults() {
    clear_env();

    let config = Config::load().unwrap();

    assert_eq!(config.storage_backend, StorageBackend::File);
    assert_eq!(config.stats_key, "koine:question-stats:v1");
    assert_eq!(config.metrics_auth, "admin:changeme");
}

#[test]
#[serial_test::serial]
fn test_env_overrides() {
    clear_env();
    std::env::set_var("STATS_STORAGE", "memory");
    std::env::set_var("DATA_DIR", "/tmp/koine-profile");

    let config = Config::load().unwrap();

    assert_eq!(config.storage_backend, StorageBackend::Memory);
    assert_eq!(config.data_dir, std::path::PathBuf::from("/tmp/koine-profile"));
    clear_env();
}

#[test]
#[serial_test::serial]
fn test_prefixed_env_wins() {
    clear_env();
    std::env::set_var("STATS_STORAGE", "memory");
    std::env::set_var("APP__STATS__STORAGE", "none");

    let config = Config::load().unwrap();

    assert_eq!(config.storage_backend, StorageBackend::None);
    clear_env();
}

#[test]
#[serial_test::serial]
fn test_unknown_storage_backend_fails() {
    clear_env();
    std::env::set_var("STATS_STORAGE", "sqlite");

    assert!(Config::load().is_err());
    clear_env();
}

#[test]
#[serial_test::serial]
fn test_prod_requires_metrics_auth() {
    clear_env();
    std::env::set_var("APP_ENV", "prod");

    assert!(Config::load().is_err());
    clear_env();
}

//! `AppConfig::load` reads the process environment, so everything that
//! touches env vars lives in one test and runs in sequence.

use std::env;
use std::io::Write;

use hubs::config::{AppConfig, StorageBackendKind};
use tempfile::NamedTempFile;

const VARS: [&str; 6] = [
    "HUBS_CONFIG",
    "HUBS_SERVER_PORT",
    "HUBS_STORAGE_BACKEND",
    "HUBS_STORAGE_LOCAL_ROOT_PATH",
    "HUBS_LOGGING_LEVEL",
    "PORT",
];

fn clear_vars() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
fn load_layers_file_and_environment() {
    clear_vars();

    let mut file = NamedTempFile::with_suffix(".toml").unwrap();
    writeln!(
        file,
        r#"
        [server]
        host = "127.0.0.1"
        port = 4000

        [logging]
        level = ""
        format = "text"
        "#
    )
    .unwrap();
    env::set_var("HUBS_CONFIG", file.path());

    // File values, with an empty level falling back to info
    let config = AppConfig::load().unwrap();
    assert_eq!(config.bind_addr(), "127.0.0.1:4000");
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.storage.backend, StorageBackendKind::Memory);

    // Bare PORT overrides the file
    env::set_var("PORT", "5000");
    assert_eq!(AppConfig::load().unwrap().server.port, 5000);

    // The prefixed variable wins over PORT
    env::set_var("HUBS_SERVER_PORT", "6000");
    assert_eq!(AppConfig::load().unwrap().server.port, 6000);

    // Nested keys containing `_`
    env::set_var("HUBS_STORAGE_BACKEND", "local");
    env::set_var("HUBS_STORAGE_LOCAL_ROOT_PATH", "/tmp/hubs-data");
    let config = AppConfig::load().unwrap();
    assert_eq!(config.storage.backend, StorageBackendKind::Local);
    assert_eq!(
        config.storage.local.map(|l| l.root_path).as_deref(),
        Some("/tmp/hubs-data")
    );

    env::set_var("HUBS_LOGGING_LEVEL", "debug");
    assert_eq!(AppConfig::load().unwrap().logging.level, "debug");

    // An unparsable PORT is rejected once nothing shadows it
    env::remove_var("HUBS_SERVER_PORT");
    env::set_var("PORT", "not-a-port");
    assert!(AppConfig::load().is_err());

    // Without a config file everything comes from defaults
    clear_vars();
    env::set_var("HUBS_CONFIG", file.path().with_extension("missing"));
    let config = AppConfig::load().unwrap();
    assert_eq!(config.bind_addr(), "0.0.0.0:3000");
    assert_eq!(config.logging.level, "info");

    clear_vars();
}

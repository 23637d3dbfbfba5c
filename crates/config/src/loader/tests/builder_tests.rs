//! Tests for the `RangerLoader` entry point.
//!
//! Responsibilities:
//! - Test environment name precedence (explicit > `ENV_NAME` > none).
//! - Test the aggregate result of a full load.
//! - Test that repeated loads over the same state are equal.

use secrecy::ExposeSecret;
use serde::Deserialize;
use serde_json::json;
use serial_test::serial;

use super::{temp_root, write_file};
use crate::constants::ENV_NAME_VAR;
use crate::loader::builder::RangerLoader;
use crate::loader::error::RangerError;

fn populate_test_env(root: &std::path::Path) {
    write_file(root, ".env-test", "_RANGER_BUILDER=from-file\n");
    write_file(root, ".cert-test/chain.pem", "CHAIN");
    write_file(root, ".cert-test/cert.pem", "CERT");
    write_file(root, ".config-test.json", r#"{"port": 8443, "name": "ranger"}"#);
}

#[test]
#[serial]
fn test_full_load_collects_all_sources() {
    let root = temp_root();
    populate_test_env(root.path());

    temp_env::with_var_unset("_RANGER_BUILDER", || {
        let ranger = RangerLoader::new()
            .with_root(root.path())
            .with_env_name("test")
            .local_only(true)
            .load()
            .unwrap();

        assert_eq!(ranger.env_name.as_deref(), Some("test"));
        assert_eq!(ranger.root, root.path());
        assert_eq!(ranger.env_var("_RANGER_BUILDER"), Some("from-file"));
        assert_eq!(ranger.cert.ca.as_deref(), Some("CHAIN"));
        assert_eq!(ranger.cert.cert.as_deref(), Some("CERT"));
        assert!(ranger.cert.key.is_none());
        assert_eq!(ranger.config, json!({"port": 8443, "name": "ranger"}));
        assert_eq!(ranger.config_value("port"), Some(&json!(8443)));
        assert_eq!(ranger.paths.env, root.path().join(".env-test"));
    });
}

#[test]
#[serial]
fn test_env_name_var_is_used_when_no_explicit_name() {
    let root = temp_root();
    populate_test_env(root.path());

    temp_env::with_vars(
        [(ENV_NAME_VAR, Some("test")), ("_RANGER_BUILDER", None)],
        || {
            let ranger = RangerLoader::new()
                .with_root(root.path())
                .local_only(true)
                .load()
                .unwrap();

            assert_eq!(ranger.env_name.as_deref(), Some("test"));
            assert_eq!(ranger.config["port"], json!(8443));
        },
    );
}

#[test]
#[serial]
fn test_explicit_name_overrides_env_name_var() {
    let root = temp_root();
    populate_test_env(root.path());
    write_file(root.path(), ".config-other.json", r#"{"port": 1}"#);

    temp_env::with_var(ENV_NAME_VAR, Some("other"), || {
        let ranger = RangerLoader::new()
            .with_root(root.path())
            .with_env_name("test")
            .local_only(true)
            .load()
            .unwrap();

        assert_eq!(ranger.config["port"], json!(8443));
    });
}

#[test]
#[serial]
fn test_no_env_name_uses_unsuffixed_files() {
    let root = temp_root();
    populate_test_env(root.path());
    write_file(root.path(), ".config.json", r#"{"plain": true}"#);

    temp_env::with_var_unset(ENV_NAME_VAR, || {
        let ranger = RangerLoader::new()
            .with_root(root.path())
            .local_only(true)
            .load()
            .unwrap();

        assert!(ranger.env_name.is_none());
        assert_eq!(ranger.config, json!({"plain": true}));
        assert!(ranger.cert.is_empty());
    });
}

#[test]
#[serial]
fn test_repeated_loads_are_equal() {
    let root = temp_root();
    populate_test_env(root.path());
    write_file(root.path(), ".cert-test/privkey.pem", "KEY");

    temp_env::with_var_unset("_RANGER_BUILDER", || {
        let load = || {
            RangerLoader::new()
                .with_root(root.path())
                .with_env_name("test")
                .local_only(true)
                .load()
                .unwrap()
        };
        let first = load();
        let second = load();

        assert_eq!(first.env, second.env);
        assert_eq!(first.config, second.config);
        assert_eq!(first.paths, second.paths);
        assert_eq!(first.cert.ca, second.cert.ca);
        assert_eq!(first.cert.cert, second.cert.cert);
        assert_eq!(
            first.cert.key.as_ref().map(|k| k.expose_secret().to_string()),
            second.cert.key.as_ref().map(|k| k.expose_secret().to_string())
        );
    });
}

#[test]
#[serial]
fn test_invalid_config_fails_whole_load() {
    let root = temp_root();
    write_file(root.path(), ".config-test.json", "{ nope");

    let result = RangerLoader::new()
        .with_root(root.path())
        .with_env_name("test")
        .local_only(true)
        .load();

    assert!(matches!(result, Err(RangerError::ConfigFileParse { .. })));
}

#[derive(Debug, Deserialize, PartialEq)]
struct ServerSettings {
    port: u16,
    name: String,
}

#[test]
#[serial]
fn test_config_as_deserializes_typed_settings() {
    let root = temp_root();
    populate_test_env(root.path());

    let ranger = RangerLoader::new()
        .with_root(root.path())
        .with_env_name("test")
        .local_only(true)
        .load()
        .unwrap();

    let settings: ServerSettings = ranger.config_as().unwrap();
    assert_eq!(
        settings,
        ServerSettings {
            port: 8443,
            name: "ranger".to_string()
        }
    );

    #[derive(Debug, Deserialize)]
    #[allow(dead_code)]
    struct NeedsHost {
        host: String,
    }
    assert!(matches!(
        ranger.config_as::<NeedsHost>(),
        Err(RangerError::ConfigShape { .. })
    ));
}

#[test]
fn test_resolver_uses_explicit_root() {
    let loader = RangerLoader::new()
        .with_root("/srv/app")
        .with_env_name("prod");

    let resolver = loader.resolver().unwrap();
    assert_eq!(resolver.root(), std::path::Path::new("/srv/app"));
    assert_eq!(resolver.env_name(), Some("prod"));
    assert!(!loader.is_local_only());
}

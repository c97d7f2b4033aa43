//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for sandboxed files and env vars.

use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};
use mitigate_config::{ConfigError, MitigateConfig};
use pretty_assertions::assert_eq;

#[test]
fn loads_server_and_store_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[server]
host = "127.0.0.1"
port = 8080

[store]
path = "/var/lib/mitigate/data.db"
normalize_on_startup = false
"#,
        )?;

        let config: MitigateConfig = Figment::from(Serialized::defaults(MitigateConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.store.path, "/var/lib/mitigate/data.db");
        assert!(!config.store.normalize_on_startup);
        Ok(())
    });
}

#[test]
fn partial_toml_keeps_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[server]\nport = 9000\n")?;

        let config: MitigateConfig = Figment::from(Serialized::defaults(MitigateConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.store.path, "mitigate.db");
        assert!(config.store.normalize_on_startup);
        Ok(())
    });
}

#[test]
fn env_beats_toml() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[server]\nport = 9000\n")?;
        jail.set_env("MITIGATE_SERVER__PORT", "9100");

        let config: MitigateConfig = Figment::from(Serialized::defaults(MitigateConfig::default()))
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("MITIGATE_").split("__"))
            .extract()?;

        assert_eq!(config.server.port, 9100);
        Ok(())
    });
}

#[test]
fn project_config_file_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.create_dir(".mitigate")?;
        jail.create_file(
            ".mitigate/config.toml",
            "[store]\npath = \"project.db\"\n",
        )?;

        let config = MitigateConfig::load().expect("config loads");
        assert_eq!(config.store.path, "project.db");
        Ok(())
    });
}

#[test]
fn invalid_value_is_reported_after_extraction() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[server]\nport = 0\n")?;

        let figment = Figment::from(Serialized::defaults(MitigateConfig::default()))
            .merge(Toml::file("config.toml"));
        let result = MitigateConfig::from_figment(figment);

        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
        Ok(())
    });
}

#[test]
fn malformed_toml_is_a_figment_error() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[server]\nport = \"not a port\"\n")?;

        let figment = Figment::from(Serialized::defaults(MitigateConfig::default()))
            .merge(Toml::file("config.toml"));
        let result = MitigateConfig::from_figment(figment);

        assert!(matches!(result, Err(ConfigError::Figment(_))));
        Ok(())
    });
}

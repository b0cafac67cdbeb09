// src/config/mod.rs
mod models;

pub use models::*;

use anyhow::{Context, Result};
use std::path::Path;

const ENV_PREFIX: &str = "NAGIOS_PROBE";

/// Load configuration from an optional file (YAML, JSON or TOML, by
/// extension) layered under `NAGIOS_PROBE_*` environment variables.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let mut builder = ::config::Config::builder();

    if let Some(path) = path {
        builder = builder.add_source(::config::File::from(path).required(true));
    }

    let config: Config = builder
        .add_source(
            ::config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__"),
        )
        .build()
        .context("Failed to read config")?
        .try_deserialize()
        .context("Failed to parse config")?;

    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn write_temp(extension: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "nagios-probes-{}.{}",
            uuid::Uuid::new_v4(),
            extension
        ));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_defaults_without_file() {
        let config = load_config(None).unwrap();

        assert_eq!(config.http.timeout_secs, 30);
        assert!(!config.http.accept_invalid_certs);
        assert_eq!(config.retry.max_attempts, 4);
        assert_eq!(config.ssh.port, 22);
        assert_eq!(config.routes.warning, 10);
        assert_eq!(config.routes.critical, 6);
    }

    #[test]
    fn test_yaml_file_overrides_defaults() {
        let path = write_temp(
            "yaml",
            "http:\n  timeout_secs: 5\n  accept_invalid_certs: true\nroutes:\n  warning: 20\n",
        );

        let config = load_config(Some(&path)).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(config.http.timeout_secs, 5);
        assert!(config.http.accept_invalid_certs);
        assert_eq!(config.routes.warning, 20);
        assert_eq!(config.routes.critical, 6);
        assert_eq!(config.retry.max_attempts, 4);
    }

    #[test]
    fn test_json_file() {
        let path = write_temp("json", r#"{"ssh": {"port": 2222}}"#);

        let config = load_config(Some(&path)).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(config.ssh.port, 2222);
        assert_eq!(config.ssh.timeout_secs, 30);
    }

    #[test]
    fn test_environment_overrides_file() {
        // only keys no other test asserts, since tests share the process env
        let path = write_temp(
            "yaml",
            "retry:\n  backoff_base_ms: 10\n  backoff_max_ms: 50\n",
        );
        std::env::set_var("NAGIOS_PROBE_RETRY__BACKOFF_MAX_MS", "250");

        let config = load_config(Some(&path));
        std::env::remove_var("NAGIOS_PROBE_RETRY__BACKOFF_MAX_MS");
        std::fs::remove_file(&path).ok();

        let config = config.unwrap();
        assert_eq!(config.retry.backoff_base_ms, 10);
        assert_eq!(config.retry.backoff_max_ms, 250);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let path = std::env::temp_dir().join("nagios-probes-does-not-exist.yaml");
        assert!(load_config(Some(&path)).is_err());
    }

    #[test]
    fn test_validate_rejects_zero_attempts() {
        let mut config = Config::default();
        config.retry.max_attempts = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_inverted_backoff() {
        let mut config = Config::default();
        config.retry.backoff_base_ms = 500;
        config.retry.backoff_max_ms = 100;
        assert!(config.validate().is_err());
    }
}

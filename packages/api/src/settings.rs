//! Host-side loading of [`AdminConfig`]: defaults, then `admin.toml`, then
//! `ADMIN_<SECTION>__<KEY>` environment variables (`.env` is honored).

use config::{Config, Environment, File, FileFormat, Map};
use domain::AdminConfig;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error(transparent)]
    Config(#[from] config::ConfigError),
    #[error(transparent)]
    Invalid(#[from] domain::ConfigError),
}

/// Effective configuration for this process.
pub fn load() -> Result<AdminConfig, SettingsError> {
    dotenvy::dotenv().ok();
    build(AdminConfig::filename(), None)
}

fn environment(vars: Option<Map<String, String>>) -> Environment {
    Environment::with_prefix("ADMIN")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
        .list_separator(",")
        .with_list_parse_key("paging.page_sizes")
        .source(vars)
}

fn build(path: &str, vars: Option<Map<String, String>>) -> Result<AdminConfig, SettingsError> {
    let defaults = AdminConfig::default();
    let page_sizes: Vec<i64> = defaults
        .paging
        .page_sizes
        .iter()
        .map(|size| i64::from(*size))
        .collect();

    let config = Config::builder()
        .set_default("api.base_url", defaults.api.base_url.clone())?
        .set_default("search.debounce_ms", defaults.search.debounce_ms as i64)?
        .set_default(
            "paging.default_page_size",
            i64::from(defaults.paging.default_page_size),
        )?
        .set_default("paging.page_sizes", page_sizes)?
        .set_default("auth.provider", defaults.auth.provider.clone())?
        .set_default("auth.dev_mode", defaults.auth.dev_mode)?
        .add_source(File::with_name(path).format(FileFormat::Toml).required(false))
        .add_source(environment(vars))
        .build()?;

    let settings: AdminConfig = config.try_deserialize()?;
    settings.validate()?;
    tracing::debug!(base_url = %settings.api.base_url, "Loaded admin settings");
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn vars(pairs: &[(&str, &str)]) -> Option<Map<String, String>> {
        Some(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("admin.toml");
        let settings = build(path.to_str().unwrap(), vars(&[])).unwrap();
        assert_eq!(settings, AdminConfig::default());
    }

    #[test]
    fn test_file_overrides_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[api]\nbase_url = \"https://api.example.com\"\n\n[search]\ndebounce_ms = 300"
        )
        .unwrap();

        let settings = build(file.path().to_str().unwrap(), vars(&[])).unwrap();
        assert_eq!(settings.api.base_url, "https://api.example.com");
        assert_eq!(settings.search.debounce_ms, 300);
        assert_eq!(settings.auth.provider, "aad");
    }

    #[test]
    fn test_environment_overrides_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[auth]\nprovider = \"github\"").unwrap();

        let settings = build(
            file.path().to_str().unwrap(),
            vars(&[
                ("ADMIN_AUTH__PROVIDER", "aad"),
                ("ADMIN_AUTH__DEV_MODE", "true"),
                ("ADMIN_PAGING__PAGE_SIZES", "5,25"),
            ]),
        )
        .unwrap();
        assert_eq!(settings.auth.provider, "aad");
        assert!(settings.auth.dev_mode);
        assert_eq!(settings.paging.page_sizes, vec![5, 25]);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("admin.toml");
        let err = build(
            path.to_str().unwrap(),
            vars(&[("ADMIN_PAGING__DEFAULT_PAGE_SIZE", "0")]),
        )
        .unwrap_err();
        assert!(matches!(err, SettingsError::Invalid(_)));
    }
}

//! Configuration loading from disk and environment.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::RouterConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable carrying the deploy-time base path.
pub const BASE_URL_ENV: &str = "BASE_URL";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parse and validate configuration from TOML text.
pub fn parse_config(content: &str) -> Result<RouterConfig, ConfigError> {
    let config: RouterConfig = toml::from_str(content)?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<RouterConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

/// Load configuration for a binary: the file if given, defaults otherwise,
/// then the `BASE_URL` override.
pub fn load(path: Option<&Path>) -> Result<RouterConfig, ConfigError> {
    let config = match path {
        Some(path) => toml::from_str(&fs::read_to_string(path)?)?,
        None => RouterConfig::default(),
    };
    let config = with_base_url(config, std::env::var(BASE_URL_ENV).ok());
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Apply a base path supplied by the build environment.
pub fn with_base_url(mut config: RouterConfig, base_url: Option<String>) -> RouterConfig {
    if let Some(base) = base_url.filter(|b| !b.trim().is_empty()) {
        tracing::debug!(base_path = %base, "Base path taken from environment");
        config.history.base_path = base;
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_full_config() {
        let config = parse_config(
            r#"
            [history]
            base_path = "/app/"

            [listener]
            bind_address = "0.0.0.0:8080"

            [[routes]]
            path = "/"
            name = "home"
            view = "HomeView"

            [[routes]]
            path = "/operadora/:cnpj"
            name = "details"
            view = "OperadoraDetails"
            props = true
            strict = true
            "#,
        )
        .unwrap();

        assert_eq!(config.history.base_path, "/app/");
        assert_eq!(config.listener.bind_address, "0.0.0.0:8080");
        assert_eq!(config.observability.log_level, "info");
        assert_eq!(config.routes.len(), 2);
        assert!(config.routes[1].props);
        assert!(config.routes[1].strict);
        assert!(!config.routes[1].sensitive);
    }

    #[test]
    fn test_empty_config_uses_declared_routes() {
        let config = parse_config("").unwrap();
        let names: Vec<_> = config.routes.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["home", "details"]);
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(
            parse_config("[[routes]]\npath = 1"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            parse_config("[[routes]]\npath = \"/\"\nname = \"home\"\nview = \"Unknown\""),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_validation_error() {
        let err = parse_config(
            r#"
            [[routes]]
            path = "/"
            name = "home"
            view = "HomeView"

            [[routes]]
            path = "/inicio"
            name = "home"
            view = "HomeView"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Validation(ref errors) if errors.len() == 1));
        assert!(err.to_string().contains("\"home\""));
    }

    #[test]
    fn test_load_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[history]\nbase_path = \"/painel\"").unwrap();
        let config = load_config(file.path()).unwrap();
        assert_eq!(config.history.base_path, "/painel");
    }

    #[test]
    fn test_load_config_missing_file() {
        let err = load_config(Path::new("/nonexistent/router.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_with_base_url() {
        let config = with_base_url(RouterConfig::default(), Some("/app/".to_string()));
        assert_eq!(config.history.base_path, "/app/");

        let config = with_base_url(RouterConfig::default(), Some("  ".to_string()));
        assert_eq!(config.history.base_path, "/");

        let config = with_base_url(RouterConfig::default(), None);
        assert_eq!(config.history.base_path, "/");
    }
}

use camino::{Utf8Path, Utf8PathBuf};
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    /// Where the recipe dataset comes from
    #[serde(default)]
    pub dataset: DatasetConfig,
    /// Random suggestion settings
    #[serde(default)]
    pub suggestions: SuggestionsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatasetConfig {
    /// Path to the recipe CSV file
    #[serde(default = "default_dataset_path")]
    pub path: Utf8PathBuf,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            path: default_dataset_path(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct SuggestionsConfig {
    /// Number of random recipes to suggest
    #[serde(default = "default_suggestion_count")]
    pub count: usize,
}

impl Default for SuggestionsConfig {
    fn default() -> Self {
        Self {
            count: default_suggestion_count(),
        }
    }
}

fn default_dataset_path() -> Utf8PathBuf {
    Utf8PathBuf::from("Food_Recipe_cleaned.csv")
}

fn default_suggestion_count() -> usize {
    9
}

impl AppConfig {
    /// Load configuration from the default file and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        load_config(None)
    }
}

/// Load configuration from file and environment variables
///
/// Configuration is loaded with the following priority (highest to lowest):
/// 1. Environment variables with RECIPE_FINDER__ prefix
/// 2. The given file, or `recipe-finder.toml` in the current directory if present
/// 3. Default values
///
/// Environment variable format: RECIPE_FINDER__DATASET__PATH
pub fn load_config(path: Option<&Utf8Path>) -> Result<AppConfig, ConfigError> {
    let file = match path {
        Some(path) => File::from(path.as_std_path()).required(true),
        None => File::with_name("recipe-finder").required(false),
    };

    let settings = Config::builder()
        .add_source(file)
        .add_source(
            Environment::with_prefix("RECIPE_FINDER")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_values() {
        let config = AppConfig::default();
        assert_eq!(config.dataset.path, "Food_Recipe_cleaned.csv");
        assert_eq!(config.suggestions.count, 9);
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = Utf8PathBuf::from_path_buf(temp_dir.path().join("custom.toml")).unwrap();
        fs::write(
            &path,
            indoc! {r#"
                [dataset]
                path = "data/recipes.csv"
            "#},
        )
        .unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.dataset.path, "data/recipes.csv");
        // Missing sections fall back to defaults
        assert!(config.suggestions.count > 0);
    }

    #[test]
    fn test_load_missing_explicit_file() {
        let result = load_config(Some(Utf8Path::new("/nonexistent/recipe-finder.toml")));
        assert!(result.is_err());
    }
}

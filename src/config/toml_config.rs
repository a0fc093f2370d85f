use crate::domain::ports::ConfigProvider;
use crate::utils::error::{PuzzleError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_path, validate_positive_number, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings file layout:
///
/// ```toml
/// [puzzle]
/// name = "kota-scramble"
/// description = "Guess the Indonesian city"
///
/// [source]
/// path = "data/cities.ts"
///
/// [solve]
/// max_results = 20
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub puzzle: PuzzleConfig,
    pub source: SourceConfig,
    pub solve: Option<SolveConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PuzzleConfig {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolveConfig {
    pub max_results: Option<usize>,
}

impl TomlConfig {
    pub fn from_file(path: &str) -> Result<Self> {
        if !Path::new(path).exists() {
            return Err(PuzzleError::ConfigError {
                message: format!("Settings file not found: {}", path),
            });
        }

        let content = std::fs::read_to_string(path)?;
        let content = Self::interpolate_env_vars(&content);
        let config: TomlConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Replaces `${VAR}` with the value of the environment variable VAR.
    /// Unset variables are left as-is.
    fn interpolate_env_vars(content: &str) -> String {
        use regex::Regex;

        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| caps[0].to_string())
        });
        result.to_string()
    }
}

impl ConfigProvider for TomlConfig {
    fn cities_path(&self) -> &str {
        &self.source.path
    }

    fn max_results(&self) -> Option<usize> {
        self.solve.as_ref().and_then(|solve| solve.max_results)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("puzzle.name", &self.puzzle.name)?;
        validate_path("source.path", &self.source.path)?;
        if let Some(solve) = &self.solve {
            if let Some(max_results) = solve.max_results {
                validate_positive_number("solve.max_results", max_results, 1)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
[puzzle]
name = "kota-scramble"
description = "Guess the Indonesian city"

[source]
path = "data/cities.ts"

[solve]
max_results = 20
"#;

    #[test]
    fn parses_sample_settings() {
        let config: TomlConfig = toml::from_str(SAMPLE).unwrap();
        assert_eq!(config.puzzle.name, "kota-scramble");
        assert_eq!(config.cities_path(), "data/cities.ts");
        assert_eq!(config.max_results(), Some(20));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn solve_section_is_optional() {
        let config: TomlConfig = toml::from_str(
            r#"
[puzzle]
name = "kota-scramble"

[source]
path = "cities.ts"
"#,
        )
        .unwrap();
        assert_eq!(config.max_results(), None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn interpolates_environment_variables() {
        std::env::set_var("KOTACARI_TEST_DATA", "/tmp/data");
        let content = "path = \"${KOTACARI_TEST_DATA}/cities.ts\"";
        let interpolated = TomlConfig::interpolate_env_vars(content);
        assert_eq!(interpolated, "path = \"/tmp/data/cities.ts\"");
    }

    #[test]
    fn unset_variables_are_left_verbatim() {
        let content = "path = \"${KOTACARI_UNSET_VARIABLE}/cities.ts\"";
        let interpolated = TomlConfig::interpolate_env_vars(content);
        assert_eq!(interpolated, content);
    }

    #[test]
    fn rejects_empty_source_path() {
        let config: TomlConfig = toml::from_str(
            r#"
[puzzle]
name = "kota-scramble"

[source]
path = ""
"#,
        )
        .unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_zero_max_results() {
        let config: TomlConfig = toml::from_str(
            r#"
[puzzle]
name = "kota-scramble"

[source]
path = "cities.ts"

[solve]
max_results = 0
"#,
        )
        .unwrap();
        assert!(config.validate().is_err());
    }
}

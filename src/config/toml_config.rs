use crate::core::report::OutputFormat;
use crate::utils::error::{PatternError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    pub run: RunConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Patterns to run, in order. Empty means all of them.
    pub patterns: Vec<String>,
    pub fail_fast: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            patterns: Vec::new(),
            fail_fast: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: String,
    pub banners: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text.as_str().to_string(),
            banners: true,
        }
    }
}

impl GalleryConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| PatternError::ConfigParse {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the variable's value. Unset variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| PatternError::ConfigParse {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| {
                tracing::debug!("{} is not set, leaving it unexpanded", var_name);
                format!("${{{}}}", var_name)
            })
        });

        Ok(result.into_owned())
    }

    pub fn output_format(&self) -> Result<OutputFormat> {
        self.output.format.parse()
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_pattern_names("run.patterns", &self.run.patterns)?;
        validation::validate_one_of("output.format", &self.output.format, &OutputFormat::NAMES)?;
        Ok(())
    }
}

impl Validate for GalleryConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_when_sections_missing() {
        let config = GalleryConfig::from_toml_str("").unwrap();

        assert_eq!(config, GalleryConfig::default());
        assert!(config.run.patterns.is_empty());
        assert!(config.run.fail_fast);
        assert!(config.output.banners);
        assert_eq!(config.output_format().unwrap(), OutputFormat::Text);
    }

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[run]
patterns = ["command", "template_method"]
fail_fast = false

[output]
format = "json"
banners = false
"#;

        let config = GalleryConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.run.patterns, vec!["command", "template_method"]);
        assert!(!config.run.fail_fast);
        assert!(!config.output.banners);
        assert_eq!(config.output_format().unwrap(), OutputFormat::Json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("PATTERN_GALLERY_TEST_FORMAT", "json");

        let toml_content = r#"
[output]
format = "${PATTERN_GALLERY_TEST_FORMAT}"
"#;

        let config = GalleryConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.output.format, "json");

        std::env::remove_var("PATTERN_GALLERY_TEST_FORMAT");
    }

    #[test]
    fn test_unset_variable_is_left_alone() {
        let toml_content = r#"
[run]
patterns = ["${PATTERN_GALLERY_SURELY_UNSET}"]
"#;

        let config = GalleryConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.run.patterns, vec!["${PATTERN_GALLERY_SURELY_UNSET}"]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation() {
        let mut config = GalleryConfig::default();
        config.run.patterns = vec!["visitor".to_string()];
        assert!(config.validate().is_err());

        let mut config = GalleryConfig::default();
        config.output.format = "yaml".to_string();
        assert!(matches!(
            config.validate(),
            Err(PatternError::InvalidConfigValue { field, .. }) if field == "output.format"
        ));
    }

    #[test]
    fn test_malformed_toml() {
        let result = GalleryConfig::from_toml_str("[run\npatterns = 3");
        assert!(matches!(result, Err(PatternError::ConfigParse { .. })));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[run]\npatterns = [\"singleton\"]\n")
            .unwrap();

        let config = GalleryConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.run.patterns, vec!["singleton"]);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = GalleryConfig::from_file("/definitely/not/here/gallery.toml");
        assert!(matches!(result, Err(PatternError::Io(_))));
    }
}

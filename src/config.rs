use crate::error::{Error, Result};
use crate::walker::WalkOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Directory under the docs root that receives generated pages
pub const DEFAULT_CONTENT_DIR: &str = "content";

/// Default heading for the category statistics table
pub const DEFAULT_STATS_TITLE: &str = "Current Statistics";

/// Config file looked up when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "gazetteer.toml";

/// Main configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub generator: GeneratorConfig,
    pub output: OutputConfig,
    pub index: IndexConfig,
}

/// Generation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Document single-underscore members and modules
    pub show_private: bool,
    /// Request inherited members on class pages
    pub show_inherited: bool,
    /// Append the auto-generated notice to the index
    pub notice: bool,
}

/// Output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Docs root: receives index.rst and the content tree
    pub directory: PathBuf,
    /// Name of the content directory under the docs root
    pub content_dir: String,
}

/// Top-level index settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    /// Existing page used as the base of index.rst instead of the default
    /// welcome text
    pub base: Option<PathBuf>,
    /// Extra page names spliced into the self toctree
    pub intro_pages: Vec<String>,
    /// Literal text placed before the generated navigation
    pub preamble: Option<String>,
    /// Literal text placed after the generated navigation
    pub epilogue: Option<String>,
    /// Heading of the category statistics table
    pub stats_title: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            show_private: false,
            show_inherited: false,
            notice: true,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            content_dir: DEFAULT_CONTENT_DIR.to_string(),
        }
    }
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            base: None,
            intro_pages: Vec::new(),
            preamble: None,
            epilogue: None,
            stats_title: DEFAULT_STATS_TITLE.to_string(),
        }
    }
}

impl Config {
    /// Load config from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from file or return defaults
    pub fn load_or_default(path: &Path) -> Self {
        Self::load(path).unwrap_or_default()
    }

    /// Merge CLI arguments into config (CLI takes precedence)
    pub fn merge_cli(
        &mut self,
        output: Option<PathBuf>,
        show_private: bool,
        show_inherited: bool,
        index_base: Option<PathBuf>,
        no_notice: bool,
    ) {
        if let Some(dir) = output {
            self.output.directory = dir;
        }

        if show_private {
            self.generator.show_private = true;
        }

        if show_inherited {
            self.generator.show_inherited = true;
        }

        if let Some(base) = index_base {
            self.index.base = Some(base);
        }

        if no_notice {
            self.generator.notice = false;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.output.content_dir.is_empty() {
            return Err(Error::config_validation("content_dir must not be empty"));
        }

        if self.output.content_dir.contains('/') || self.output.content_dir.contains('\\') {
            return Err(Error::config_validation(
                "content_dir must be a single path component",
            ));
        }

        if self.index.stats_title.is_empty() {
            return Err(Error::config_validation("stats_title must not be empty"));
        }

        Ok(())
    }

    /// The walk options this configuration selects
    pub fn walk_options(&self) -> WalkOptions {
        WalkOptions {
            show_private: self.generator.show_private,
            show_inherited: self.generator.show_inherited,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(!config.generator.show_private);
        assert!(!config.generator.show_inherited);
        assert!(config.generator.notice);
        assert_eq!(config.output.directory, PathBuf::from("."));
        assert_eq!(config.output.content_dir, "content");
        assert_eq!(config.index.stats_title, "Current Statistics");
    }

    #[test]
    fn test_load_valid_config() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[generator]
show_private = true
notice = false

[output]
directory = "docs/source"
content_dir = "reference"

[index]
intro_pages = ["install", "usage"]
stats_title = "Feature Counts"
"#
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert!(config.generator.show_private);
        assert!(!config.generator.notice);
        assert_eq!(config.output.directory, PathBuf::from("docs/source"));
        assert_eq!(config.output.content_dir, "reference");
        assert_eq!(config.index.intro_pages, vec!["install", "usage"]);
        assert_eq!(config.index.stats_title, "Feature Counts");
    }

    #[test]
    fn test_load_missing_file() {
        let result = Config::load(Path::new("/nonexistent/gazetteer.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_validation_empty_content_dir() {
        let mut config = Config::default();
        config.output.content_dir.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_nested_content_dir() {
        let mut config = Config::default();
        config.output.content_dir = "a/b".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_empty_stats_title() {
        let mut config = Config::default();
        config.index.stats_title.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_merge_cli_output() {
        let mut config = Config::default();
        config.merge_cli(Some(PathBuf::from("/custom/docs")), false, false, None, false);
        assert_eq!(config.output.directory, PathBuf::from("/custom/docs"));
    }

    #[test]
    fn test_merge_cli_flags() {
        let mut config = Config::default();
        config.merge_cli(None, true, true, None, true);
        assert!(config.generator.show_private);
        assert!(config.generator.show_inherited);
        assert!(!config.generator.notice);
    }

    #[test]
    fn test_merge_cli_keeps_config_when_flags_absent() {
        let mut config = Config::default();
        config.generator.show_private = true;
        config.merge_cli(None, false, false, None, false);
        assert!(config.generator.show_private);
        assert!(config.generator.notice);
    }

    #[test]
    fn test_merge_cli_index_base() {
        let mut config = Config::default();
        config.merge_cli(None, false, false, Some(PathBuf::from("README.rst")), false);
        assert_eq!(config.index.base, Some(PathBuf::from("README.rst")));
    }

    #[test]
    fn test_walk_options() {
        let mut config = Config::default();
        config.generator.show_private = true;
        let options = config.walk_options();
        assert!(options.show_private);
        assert!(!options.show_inherited);
    }
}

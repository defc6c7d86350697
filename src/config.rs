//! Configuration management for the skill analyzer

use crate::error::{Result, SkillAnalyzerError};
use crate::processing::analyzer::AnalysisSettings;
use crate::processing::matcher::MatchMode;
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub analysis: AnalysisConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub threshold: usize,
    pub min_distinct_keywords: usize,
    pub match_mode: MatchMode,
    pub skills_file: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub color_output: bool,
    pub detailed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Console,
    Json,
    Markdown,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        let settings = AnalysisSettings::default();
        Self {
            threshold: settings.threshold,
            min_distinct_keywords: settings.min_distinct_keywords,
            match_mode: settings.match_mode,
            skills_file: None,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Console,
            color_output: true,
            detailed: false,
        }
    }
}

impl Config {
    /// Load from `path` if given, else from the default location if a file exists there.
    ///
    /// The analyzer never writes a config file; a missing default file means defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => match Self::config_path() {
                Some(default_path) if default_path.is_file() => Self::from_file(&default_path)?,
                _ => {
                    debug!("No configuration file found, using defaults");
                    Self::default()
                }
            },
        };

        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from {}", path.display());
        let content =
            std::fs::read_to_string(path).map_err(|e| SkillAnalyzerError::from_io(e, path))?;
        Self::from_toml_str(&content).map_err(|e| match e {
            SkillAnalyzerError::Configuration(msg) => {
                SkillAnalyzerError::Configuration(format!("{}: {}", path.display(), msg))
            }
            other => other,
        })
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| SkillAnalyzerError::Configuration(format!("Failed to parse config: {}", e)))
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| {
            SkillAnalyzerError::Configuration(format!("Failed to serialize config: {}", e))
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.analysis.min_distinct_keywords == 0 {
            return Err(SkillAnalyzerError::Configuration(
                "analysis.min_distinct_keywords must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// `<config dir>/resume-skill-analyzer/config.toml`
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir()
            .or_else(dirs::home_dir)
            .map(|dir| dir.join("resume-skill-analyzer").join("config.toml"))
    }

    pub fn analysis_settings(&self) -> AnalysisSettings {
        AnalysisSettings {
            threshold: self.analysis.threshold,
            min_distinct_keywords: self.analysis.min_distinct_keywords,
            match_mode: self.analysis.match_mode,
        }
    }
}

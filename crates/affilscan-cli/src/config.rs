//! Configuration loading from TOML files

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Global configuration for affilscan
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub eutils: EutilsConfig,
    pub keywords: KeywordsConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EutilsConfig {
    pub base_url: String,
    pub tool: String,
    pub email: Option<String>,
    #[serde(deserialize_with = "deserialize_env_var")]
    pub api_key: Option<String>,
    pub max_results: usize,
}

impl Default for EutilsConfig {
    fn default() -> Self {
        let defaults = affilscan_pubmed::Config::default();
        Self {
            base_url: defaults.base_url,
            tool: defaults.tool,
            email: None,
            api_key: std::env::var("NCBI_API_KEY").ok(),
            max_results: defaults.max_results,
        }
    }
}

/// Affiliation keyword lists; replacing a list replaces the defaults entirely
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct KeywordsConfig {
    pub company: Vec<String>,
    pub academic: Vec<String>,
}

impl Default for KeywordsConfig {
    fn default() -> Self {
        let defaults = affilscan_pubmed::Config::default();
        Self {
            company: defaults.company_terms,
            academic: defaults.academic_terms,
        }
    }
}

/// Deserialize a string that may contain environment variable reference like ${VAR}
fn deserialize_env_var<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt: Option<String> = Option::deserialize(deserializer)?;
    Ok(opt.and_then(|s| expand_env_var(&s)))
}

/// Expand ${VAR} to environment variable value
fn expand_env_var(s: &str) -> Option<String> {
    if let Some(var_name) = s.strip_prefix("${").and_then(|s| s.strip_suffix('}')) {
        std::env::var(var_name).ok()
    } else {
        Some(s.to_string())
    }
}

impl Config {
    /// Load configuration from default locations
    ///
    /// Search order:
    /// 1. ./affilscan.toml (current directory)
    /// 2. ~/.config/affilscan/config.toml
    ///
    /// If no config file found, returns default config.
    pub fn load() -> Result<Self> {
        let local_config = PathBuf::from("affilscan.toml");
        if local_config.exists() {
            return Self::from_file(&local_config);
        }

        if let Some(config_dir) = directories::ProjectDirs::from("", "", "affilscan") {
            let user_config = config_dir.config_dir().join("config.toml");
            if user_config.exists() {
                return Self::from_file(&user_config);
            }
        }

        log::debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Load configuration from a specific file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Pipeline config, with the CLI's `--max-results` taking precedence.
    pub fn pubmed_config(&self, max_results: Option<usize>) -> affilscan_pubmed::Config {
        affilscan_pubmed::Config {
            base_url: self.eutils.base_url.clone(),
            tool: self.eutils.tool.clone(),
            email: self.eutils.email.clone(),
            api_key: self.eutils.api_key.clone(),
            max_results: max_results.unwrap_or(self.eutils.max_results),
            company_terms: self.keywords.company.clone(),
            academic_terms: self.keywords.academic.clone(),
        }
    }
}

use crate::{Error, Result};
use rolodex_providers::{DataSource, FileSource, HttpSource};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://randomuser.me/api/";
pub const DEFAULT_NATIONALITY: &str = "us";
pub const DEFAULT_RESULTS: usize = 12;

/// Resolve the workspace directory based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. ROLODEX_PATH environment variable (with tilde expansion)
/// 3. XDG config directory
/// 4. ~/.rolodex (fallback for systems without XDG)
pub fn resolve_workspace_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("ROLODEX_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(config_dir) = dirs::config_dir() {
        return Ok(config_dir.join("rolodex"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".rolodex"));
    }

    Err(Error::Config(
        "Could not determine workspace path: no HOME directory or XDG config directory found"
            .to_string(),
    ))
}

fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_nationality() -> String {
    DEFAULT_NATIONALITY.to_string()
}

fn default_results() -> usize {
    DEFAULT_RESULTS
}

/// Where the startup batch is requested from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_nationality")]
    pub nationality: String,
    #[serde(default = "default_results")]
    pub results: usize,
    /// No timeout when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            nationality: default_nationality(),
            results: default_results(),
            timeout_secs: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn path_in(workspace: &Path) -> PathBuf {
        workspace.join("config.toml")
    }

    /// Full request URL: endpoint plus locale and count parameters.
    pub fn request_url(&self) -> String {
        let separator = if self.source.endpoint.contains('?') {
            '&'
        } else {
            '?'
        };
        format!(
            "{}{}nat={}&results={}",
            self.source.endpoint, separator, self.source.nationality, self.source.results
        )
    }

    /// The data source for this session: a saved batch file when given,
    /// otherwise the configured HTTP endpoint.
    pub fn build_source(&self, source_file: Option<&Path>) -> Result<Box<dyn DataSource>> {
        if let Some(path) = source_file {
            return Ok(Box::new(FileSource::new(path)));
        }

        let timeout = self.source.timeout_secs.map(Duration::from_secs);
        Ok(Box::new(HttpSource::new(self.request_url(), timeout)?))
    }
}

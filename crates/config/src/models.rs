use super::errors::ConfigError;
use super::policy::OutputPolicy;
use autofilm_filesystem::FileSystem;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub settings: Settings,
    /// Kept as raw tables so one broken entry cannot fail the whole file
    #[serde(default)]
    pub servers: Vec<toml::Table>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default = "super::defaults::output_dir")]
    pub output_dir: String,
    #[serde(default)]
    pub library_mode: bool,
    #[serde(default)]
    pub subtitle: bool,
    #[serde(default)]
    pub img: bool,
    #[serde(default)]
    pub nfo: bool,
    #[serde(default = "super::defaults::concurrency")]
    pub concurrency: usize,
}

/// Server block as written in the config file
#[derive(Deserialize)]
struct ServerEntry {
    #[serde(default)]
    name: Option<String>,
    url: String,
    username: String,
    password: String,
    #[serde(default)]
    base_path: Option<String>,
    #[serde(default)]
    token: Option<String>,
}

/// A validated AList server
#[derive(Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub name: String,
    /// Never ends with `/`
    pub base_url: String,
    pub username: String,
    pub password: String,
    /// Always starts with `/`
    pub base_path: String,
    pub token: Option<String>,
}

impl fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerConfig")
            .field("name", &self.name)
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("base_path", &self.base_path)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl ServerConfig {
    pub fn new(
        name: Option<String>,
        url: &str,
        username: String,
        password: String,
        base_path: Option<&str>,
        token: Option<String>,
    ) -> Self {
        let base_url = url.trim_end_matches('/').to_string();
        let name = name
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| base_url.clone());

        Self {
            name,
            base_url,
            username,
            password,
            base_path: normalize_base_path(base_path),
            token: token.filter(|t| !t.is_empty()),
        }
    }
}

fn normalize_base_path(base_path: Option<&str>) -> String {
    match base_path.map(str::trim) {
        None | Some("") => super::defaults::base_path(),
        Some(p) if p.starts_with('/') => p.to_string(),
        Some(p) => format!("/{}", p),
    }
}

impl Config {
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Validates each server block independently, in file order
    pub fn server_configs(&self) -> Vec<Result<ServerConfig, ConfigError>> {
        self.servers
            .iter()
            .enumerate()
            .map(|(index, table)| Self::validate_server(index, table))
            .collect()
    }

    fn validate_server(index: usize, table: &toml::Table) -> Result<ServerConfig, ConfigError> {
        let label = table
            .get("name")
            .or_else(|| table.get("url"))
            .and_then(|v| v.as_str())
            .unwrap_or("unnamed")
            .to_string();

        let entry = toml::Value::Table(table.clone())
            .try_into::<ServerEntry>()
            .map_err(|e: toml::de::Error| ConfigError::InvalidServer {
                index,
                label: label.clone(),
                reason: e.message().to_string(),
            })?;

        if entry.url.trim().is_empty() {
            return Err(ConfigError::InvalidServer {
                index,
                label,
                reason: "url is empty".to_string(),
            });
        }

        Ok(ServerConfig::new(
            entry.name,
            entry.url.trim(),
            entry.username,
            entry.password,
            entry.base_path.as_deref(),
            entry.token,
        ))
    }

    /// Builds the output policy, resolving `output_dir` against the working directory
    pub fn output_policy(&self) -> Result<OutputPolicy, ConfigError> {
        let settings = &self.settings;
        if settings.output_dir.trim().is_empty() {
            return Err(ConfigError::InvalidConfig("settings.output_dir is empty".to_string()));
        }

        let output_dir = FileSystem::get_absolute_path(&PathBuf::from(&settings.output_dir))
            .map_err(|e| ConfigError::InvalidConfig(format!("cannot resolve output_dir: {}", e)))?;

        Ok(OutputPolicy::new(
            output_dir,
            settings.library_mode,
            settings.subtitle,
            settings.img,
            settings.nfo,
            (settings.concurrency > 0).then_some(settings.concurrency),
        ))
    }
}

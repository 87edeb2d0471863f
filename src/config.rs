use crate::error::{Error, Result};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::OnceLock;

pub const DEFAULT_JOBS_API_URL: &str = "https://api.civilservicejobs.service.gov.uk";
pub const DEFAULT_PLACES_API_URL: &str = "https://api.os.uk/search/places/v1/find";

/// Where job records come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DataSource {
    /// Bundled or file-backed fixture list.
    #[default]
    Mock,
    /// Remote job API, responses go through the contract mapper.
    Api,
}

impl DataSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataSource::Mock => "mock",
            DataSource::Api => "api",
        }
    }
}

impl FromStr for DataSource {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mock" => Ok(DataSource::Mock),
            "api" => Ok(DataSource::Api),
            other => Err(format!("expected `mock` or `api`, got `{}`", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(format!("expected `pretty` or `json`, got `{}`", other)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server_address: String,
    pub data_source: DataSource,
    pub jobs_api_url: String,
    pub jobs_api_key: Option<String>,
    pub jobs_data_file: Option<PathBuf>,
    pub places_api_url: String,
    pub places_api_key: Option<String>,
    pub http_timeout_secs: u64,
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_address: "0.0.0.0:3000".to_string(),
            data_source: DataSource::Mock,
            jobs_api_url: DEFAULT_JOBS_API_URL.to_string(),
            jobs_api_key: None,
            jobs_data_file: None,
            places_api_url: DEFAULT_PLACES_API_URL.to_string(),
            places_api_key: None,
            http_timeout_secs: 10,
            log_format: LogFormat::Pretty,
        }
    }
}

pub static CONFIG: OnceLock<Config> = OnceLock::new();

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();
        let defaults = Config::default();

        Ok(Self {
            server_address: get_env_or("SERVER_ADDRESS", defaults.server_address),
            data_source: get_env_parse_or("JOBS_DATA_SOURCE", defaults.data_source)?,
            jobs_api_url: get_env_or("JOBS_API_URL", defaults.jobs_api_url),
            jobs_api_key: get_env_opt("JOBS_API_KEY"),
            jobs_data_file: get_env_opt("JOBS_DATA_FILE").map(PathBuf::from),
            places_api_url: get_env_or("OS_PLACES_API_URL", defaults.places_api_url),
            places_api_key: get_env_opt("OS_PLACES_API_KEY"),
            http_timeout_secs: get_env_parse_or("HTTP_TIMEOUT_SECS", defaults.http_timeout_secs)?,
            log_format: get_env_parse_or("LOG_FORMAT", defaults.log_format)?,
        })
    }
}

/// Unset and blank values are both treated as absent.
fn get_env_opt(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}

fn get_env_or(name: &str, default: String) -> String {
    get_env_opt(name).unwrap_or(default)
}

fn get_env_parse_or<T>(name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match get_env_opt(name) {
        Some(raw) => raw
            .parse()
            .map_err(|e| Error::Config(format!("Invalid value for {}: {}", name, e))),
        None => Ok(default),
    }
}

pub fn init_config() -> Result<()> {
    let config = Config::from_env()?;
    CONFIG
        .set(config)
        .map_err(|_| Error::Config("Configuration has already been initialized".to_string()))?;
    Ok(())
}

pub fn get_config() -> &'static Config {
    CONFIG
        .get()
        .expect("Configuration has not been initialized")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_source_parses_case_insensitively() {
        assert_eq!("API".parse::<DataSource>().unwrap(), DataSource::Api);
        assert_eq!(" mock ".parse::<DataSource>().unwrap(), DataSource::Mock);
        assert!("postgres".parse::<DataSource>().is_err());
    }

    #[test]
    fn log_format_accepts_text_alias() {
        assert_eq!("text".parse::<LogFormat>().unwrap(), LogFormat::Pretty);
        assert_eq!("JSON".parse::<LogFormat>().unwrap(), LogFormat::Json);
    }

    #[test]
    fn defaults_point_at_public_endpoints() {
        let config = Config::default();
        assert_eq!(config.data_source, DataSource::Mock);
        assert_eq!(config.places_api_url, DEFAULT_PLACES_API_URL);
        assert!(config.places_api_key.is_none());
    }
}

//! Configuration for the recommendation service
use serde::Deserialize;
use std::path::PathBuf;

use crate::models::{DEFAULT_MIN_RATING, DEFAULT_TOP_N};

/// Main configuration struct, loaded from environment variables
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Directory holding the trained model artifacts
    #[serde(default = "default_model_dir")]
    pub model_dir: PathBuf,

    /// HTTP bind address
    #[serde(default = "default_http_host")]
    pub http_host: String,

    /// HTTP port
    #[serde(default = "default_http_port")]
    pub http_port: u16,

    /// Number of recommendations when the request does not say
    #[serde(default = "default_top_n")]
    pub default_top_n: usize,

    /// Minimum predicted rating when the request does not say
    #[serde(default = "default_min_rating")]
    pub default_min_rating: f64,

    /// Upper bound applied to `top_n` on the HTTP surface
    #[serde(default = "default_max_top_n")]
    pub max_top_n: usize,

    /// `text` or `json`
    #[serde(default = "default_log_format")]
    pub log_format: String,
}

fn default_model_dir() -> PathBuf {
    PathBuf::from("./recommendation_model")
}

fn default_http_host() -> String {
    "0.0.0.0".to_string()
}

fn default_http_port() -> u16 {
    8013
}

fn default_top_n() -> usize {
    DEFAULT_TOP_N
}

fn default_min_rating() -> f64 {
    DEFAULT_MIN_RATING
}

fn default_max_top_n() -> usize {
    100
}

fn default_log_format() -> String {
    "text".to_string()
}

/// Settings read by the one-shot `recommend` binary.
///
/// Only `MODEL_DIR` is read, so server-only variables cannot fail an invocation.
#[derive(Debug, Clone, Deserialize)]
pub struct CliConfig {
    #[serde(default = "default_model_dir")]
    pub model_dir: PathBuf,
}

impl CliConfig {
    pub fn from_env() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }
}

impl Config {
    /// Load configuration from environment variables (and `.env` if present)
    pub fn from_env() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.http_host, self.http_port)
    }

    pub fn json_logs(&self) -> bool {
        self.log_format.eq_ignore_ascii_case("json")
    }
}

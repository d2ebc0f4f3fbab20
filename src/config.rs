//! Settings file, per-run input file and command-line overrides.
//!
//! Priority for every run parameter: command line > input file > settings
//! file > built-in default.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use crate::error::{Result, ScrapeError};
use crate::tools::export::ExportFormat;
use crate::tools::fetch::{
    FetchSettings, ProxySettings, DEFAULT_BACKOFF_FACTOR, DEFAULT_MAX_RETRIES,
    DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT,
};

pub const DEFAULT_MAX_ITEMS: usize = 250;
pub const DEFAULT_OUTPUT_PATH: &str = "data/output.sample.json";
const LOCAL_SETTINGS_PATH: &str = "config/settings.json";

/// Tool-wide settings, usually from `settings.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub user_agent: String,
    /// Seconds.
    pub timeout: u64,
    pub max_retries: u32,
    pub backoff_factor: f64,
    pub default_max_items: usize,
    pub output: OutputSettings,
    pub proxy: ProxySettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    pub path: PathBuf,
    pub formats: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: DEFAULT_TIMEOUT_SECS,
            max_retries: DEFAULT_MAX_RETRIES,
            backoff_factor: DEFAULT_BACKOFF_FACTOR,
            default_max_items: DEFAULT_MAX_ITEMS,
            output: OutputSettings::default(),
            proxy: ProxySettings::default(),
        }
    }
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            formats: vec!["json".to_string()],
        }
    }
}

impl Settings {
    /// Load settings from `path`. A missing file falls back to defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            warn!(path = %path.display(), "settings file not found, using defaults");
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(path).map_err(|e| {
            ScrapeError::config(format!("cannot read settings {}: {e}", path.display()))
        })?;
        let settings = serde_json::from_str(&raw).map_err(|e| {
            ScrapeError::config(format!("invalid settings {}: {e}", path.display()))
        })?;
        debug!(path = %path.display(), "loaded settings");
        Ok(settings)
    }

    pub fn fetch_settings(&self) -> FetchSettings {
        FetchSettings {
            user_agent: self.user_agent.clone(),
            timeout: Duration::from_secs(self.timeout),
            max_retries: self.max_retries,
            backoff_factor: self.backoff_factor,
            proxy: self.proxy.clone(),
        }
    }
}

/// Settings location when none is given on the command line.
///
/// The per-user config directory wins when it holds a settings file;
/// otherwise `config/settings.json` relative to the working directory.
pub fn default_settings_path() -> PathBuf {
    ProjectDirs::from("io", "hotel-reviews", "hotel-reviews")
        .map(|proj| proj.config_dir().join("settings.json"))
        .filter(|path| path.exists())
        .unwrap_or_else(|| PathBuf::from(LOCAL_SETTINGS_PATH))
}

/// Per-run input file (`--input`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputConfig {
    #[serde(default, alias = "hotel_url")]
    pub hotel_url: Option<String>,
    #[serde(default)]
    pub max_items: Option<usize>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub output_path: Option<PathBuf>,
    #[serde(default)]
    pub formats: Option<Vec<String>>,
}

impl InputConfig {
    /// Read an input file. The document root must be a JSON object.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|e| {
            ScrapeError::config(format!("cannot read input config {}: {e}", path.display()))
        })?;
        let value: Value = serde_json::from_str(&raw).map_err(|e| {
            ScrapeError::config(format!("invalid input config {}: {e}", path.display()))
        })?;
        if !value.is_object() {
            return Err(ScrapeError::config(
                "input config must be a JSON object at the root level",
            ));
        }
        serde_json::from_value(value).map_err(|e| {
            ScrapeError::config(format!("invalid input config {}: {e}", path.display()))
        })
    }
}

/// Values given on the command line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overrides {
    pub hotel_url: Option<String>,
    pub max_items: Option<usize>,
    pub language: Option<String>,
    pub output: Option<PathBuf>,
    /// Comma separated, e.g. `json,csv`.
    pub formats: Option<String>,
}

/// Fully resolved parameters of one run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub hotel_url: Url,
    pub max_items: usize,
    pub language: Option<String>,
    pub output_path: PathBuf,
    pub formats: Vec<ExportFormat>,
    pub fetch: FetchSettings,
}

impl RunConfig {
    /// Resolve every parameter. Fails before any network activity on a
    /// missing or non-http(s) hotel URL or an unknown output format.
    pub fn merge(settings: &Settings, input: &InputConfig, overrides: &Overrides) -> Result<Self> {
        let raw_url = non_blank(overrides.hotel_url.as_deref())
            .or_else(|| non_blank(input.hotel_url.as_deref()))
            .ok_or_else(|| {
                ScrapeError::config(
                    "a hotel URL must be provided via --hotel-url or the input file (hotelUrl)",
                )
            })?;
        let hotel_url = parse_hotel_url(raw_url)?;

        let max_items = overrides
            .max_items
            .or(input.max_items)
            .unwrap_or(settings.default_max_items);

        let language = non_blank(overrides.language.as_deref())
            .or_else(|| non_blank(input.language.as_deref()))
            .map(str::to_string);

        let output_path = overrides
            .output
            .clone()
            .or_else(|| input.output_path.clone())
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| settings.output.path.clone());

        let names: Vec<String> = match (&overrides.formats, &input.formats) {
            (Some(list), _) => list.split(',').map(str::to_string).collect(),
            (None, Some(list)) => list.clone(),
            (None, None) => settings.output.formats.clone(),
        };

        Ok(Self {
            hotel_url,
            max_items,
            language,
            output_path,
            formats: parse_formats(&names)?,
            fetch: settings.fetch_settings(),
        })
    }
}

fn parse_hotel_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw).map_err(|e| ScrapeError::InvalidUrl(format!("{raw}: {e}")))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ScrapeError::InvalidUrl(format!("{raw}: only http(s) is supported")));
    }
    Ok(url)
}

/// Blank entries are ignored; nothing left means JSON.
fn parse_formats(names: &[String]) -> Result<Vec<ExportFormat>> {
    let formats = names
        .iter()
        .map(|name| name.trim())
        .filter(|name| !name.is_empty())
        .map(str::parse)
        .collect::<Result<Vec<ExportFormat>>>()?;

    if formats.is_empty() {
        Ok(vec![ExportFormat::Json])
    } else {
        Ok(formats)
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

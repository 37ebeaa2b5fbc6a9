use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use shared::{domain::Layout, error::ValidationError};
use thiserror::Error;
use url::Url;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";
pub const DEFAULT_SHARE_BASE_URL: &str = "http://localhost:3000/profile";
pub const SETTINGS_FILE: &str = "resume.toml";

#[derive(Debug, Clone, PartialEq)]
pub struct ClientSettings {
    pub api_base_url: Url,
    pub share_base_url: Url,
    pub default_layout: Layout,
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse settings file '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid {key} '{value}': {reason}")]
    InvalidUrl {
        key: &'static str,
        value: String,
        reason: String,
    },
    #[error(transparent)]
    Layout(#[from] ValidationError),
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    api_base_url: Option<String>,
    share_base_url: Option<String>,
    default_layout: Option<String>,
}

#[derive(Debug, Clone)]
struct RawSettings {
    api_base_url: String,
    share_base_url: String,
    default_layout: String,
}

impl Default for RawSettings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.into(),
            share_base_url: DEFAULT_SHARE_BASE_URL.into(),
            default_layout: Layout::Classic.wire_name().into(),
        }
    }
}

impl RawSettings {
    fn apply_file(&mut self, file: FileSettings) {
        if let Some(v) = file.api_base_url {
            self.api_base_url = v;
        }
        if let Some(v) = file.share_base_url {
            self.share_base_url = v;
        }
        if let Some(v) = file.default_layout {
            self.default_layout = v;
        }
    }

    fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let read = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        if let Some(v) = read("RESUME_API_BASE_URL") {
            self.api_base_url = v;
        }
        if let Some(v) = read("APP__API_BASE_URL") {
            self.api_base_url = v;
        }

        if let Some(v) = read("RESUME_SHARE_BASE_URL") {
            self.share_base_url = v;
        }
        if let Some(v) = read("APP__SHARE_BASE_URL") {
            self.share_base_url = v;
        }

        if let Some(v) = read("APP__DEFAULT_LAYOUT") {
            self.default_layout = v;
        }
    }

    fn resolve(self) -> Result<ClientSettings, SettingsError> {
        Ok(ClientSettings {
            api_base_url: normalize_base_url("api_base_url", &self.api_base_url)?,
            share_base_url: normalize_base_url("share_base_url", &self.share_base_url)?,
            default_layout: self.default_layout.parse()?,
        })
    }
}

/// Loads settings from defaults, then the TOML file, then the environment.
///
/// An explicit `path` must exist; the implicit `resume.toml` in the working
/// directory is optional.
pub fn load_settings(path: Option<&Path>) -> Result<ClientSettings, SettingsError> {
    load_settings_with_env(path, |name| std::env::var(name).ok())
}

fn load_settings_with_env(
    path: Option<&Path>,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<ClientSettings, SettingsError> {
    let mut raw = RawSettings::default();

    match path {
        Some(path) => {
            let text = fs::read_to_string(path).map_err(|source| SettingsError::Read {
                path: path.to_path_buf(),
                source,
            })?;
            raw.apply_file(parse_settings_file(path, &text)?);
        }
        None => {
            let path = Path::new(SETTINGS_FILE);
            if let Ok(text) = fs::read_to_string(path) {
                raw.apply_file(parse_settings_file(path, &text)?);
            }
        }
    }

    raw.apply_env(lookup);
    raw.resolve()
}

fn parse_settings_file(path: &Path, text: &str) -> Result<FileSettings, SettingsError> {
    toml::from_str(text).map_err(|source| SettingsError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn normalize_base_url(key: &'static str, raw: &str) -> Result<Url, SettingsError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let url = Url::parse(trimmed).map_err(|err| SettingsError::InvalidUrl {
        key,
        value: raw.to_string(),
        reason: err.to_string(),
    })?;

    if url.cannot_be_a_base() {
        return Err(SettingsError::InvalidUrl {
            key,
            value: raw.to_string(),
            reason: "url cannot carry a path".to_string(),
        });
    }

    Ok(url)
}

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A GitHub login that has already been trimmed and checked for emptiness.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Username(String);

impl Username {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyUsername);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for Username {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Username::parse(&raw).map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Layout {
    #[default]
    #[serde(rename = "default", alias = "classic")]
    Classic,
    #[serde(rename = "modern")]
    Modern,
}

impl Layout {
    pub const ALL: [Layout; 2] = [Layout::Classic, Layout::Modern];

    pub fn label(self) -> &'static str {
        match self {
            Layout::Classic => "Classic",
            Layout::Modern => "Modern",
        }
    }

    pub fn wire_name(self) -> &'static str {
        match self {
            Layout::Classic => "default",
            Layout::Modern => "modern",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Layout::Classic => Layout::Modern,
            Layout::Modern => Layout::Classic,
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Layout {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "default" | "classic" => Ok(Layout::Classic),
            "modern" => Ok(Layout::Modern),
            other => Err(ValidationError::UnknownLayout(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn username_is_trimmed() {
        let name = Username::parse("  octocat \n").expect("valid username");
        assert_eq!(name.as_str(), "octocat");
    }

    #[test]
    fn blank_usernames_are_rejected() {
        assert_eq!(Username::parse(""), Err(ValidationError::EmptyUsername));
        assert_eq!(Username::parse(" \t "), Err(ValidationError::EmptyUsername));
    }

    #[test]
    fn layout_accepts_wire_and_display_names() {
        assert_eq!("default".parse::<Layout>(), Ok(Layout::Classic));
        assert_eq!("Classic".parse::<Layout>(), Ok(Layout::Classic));
        assert_eq!(" modern ".parse::<Layout>(), Ok(Layout::Modern));
        assert!("fancy".parse::<Layout>().is_err());
    }

    #[test]
    fn layout_serializes_with_wire_names() {
        assert_eq!(
            serde_json::to_string(&Layout::Classic).expect("json"),
            "\"default\""
        );
        let parsed: Layout = serde_json::from_str("\"classic\"").expect("alias");
        assert_eq!(parsed, Layout::Classic);
    }
}

//! ChartMark configuration — output format and optional image geometry.
//!
//! Stored as TOML. Every section is optional:
//!
//! ```toml
//! [output]
//! format = "markdown"
//!
//! [image]
//! width = 1200
//! height = 800
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("image dimensions must be non-zero (got {width}x{height})")]
    InvalidImage { width: u32, height: u32 },
}

/// How parsed annotations are rendered for output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable grouped listing.
    #[default]
    Summary,
    Json,
    Csv,
    Markdown,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OutputFormat::Summary => "summary",
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Markdown => "markdown",
        };
        f.write_str(s)
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "summary" => Ok(OutputFormat::Summary),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            other => Err(format!(
                "unknown output format '{other}'. Valid: summary, json, csv, markdown"
            )),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

/// Pixel size of the chart image the annotations will be drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

impl ImageSize {
    pub fn new(width: u32, height: u32) -> Result<Self, ConfigError> {
        let size = Self { width, height };
        size.validate()?;
        Ok(size)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::InvalidImage {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub output: OutputConfig,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageSize>,
}

impl Config {
    /// Load a config from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Parse a config from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        if let Some(image) = &config.image {
            image.validate()?;
        }
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_is_default() {
        let c = Config::from_toml("").unwrap();
        assert_eq!(c, Config::default());
        assert_eq!(c.output.format, OutputFormat::Summary);
        assert!(c.image.is_none());
    }

    #[test]
    fn full_config_parses() {
        let c = Config::from_toml(
            "[output]\nformat = \"csv\"\n\n[image]\nwidth = 1200\nheight = 800\n",
        )
        .unwrap();
        assert_eq!(c.output.format, OutputFormat::Csv);
        assert_eq!(c.image, Some(ImageSize { width: 1200, height: 800 }));
    }

    #[test]
    fn zero_image_dimension_rejected() {
        let err = Config::from_toml("[image]\nwidth = 0\nheight = 800\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidImage { width: 0, height: 800 }));
    }

    #[test]
    fn unknown_format_rejected() {
        assert!(matches!(
            Config::from_toml("[output]\nformat = \"xml\"\n"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn toml_roundtrip() {
        let c = Config {
            output: OutputConfig { format: OutputFormat::Markdown },
            image: Some(ImageSize { width: 640, height: 480 }),
        };
        let parsed = Config::from_toml(&c.to_toml().unwrap()).unwrap();
        assert_eq!(c, parsed);
    }

    #[test]
    fn from_file_reports_missing_path() {
        let err = Config::from_file(Path::new("/nonexistent/chartmark.toml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/chartmark.toml"));
    }

    #[test]
    fn format_from_str() {
        assert_eq!("md".parse::<OutputFormat>().unwrap(), OutputFormat::Markdown);
        assert!("xml".parse::<OutputFormat>().is_err());
    }
}

use crate::diagram::RenderOptions;
use crate::fs::FileSystem;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

pub const CONFIG_FILE: &str = ".bundlegraph.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub render: RenderOptions,
}

#[derive(Debug, Deserialize)]
struct RawConfig {
    diagram: Option<RawDiagram>,
}

#[derive(Debug, Deserialize)]
struct RawDiagram {
    diameter: Option<f64>,
    label_padding: Option<f64>,
    tension: Option<f64>,
    sweep: Option<f64>,
    label_offset: Option<f64>,
}

impl Config {
    /// Load `.bundlegraph.toml` from `dir`, falling back to defaults when it is absent.
    pub fn load(fs: &dyn FileSystem, dir: &Path) -> Result<Self, ConfigError> {
        let config_path = dir.join(CONFIG_FILE);

        if !fs.exists(&config_path) {
            return Ok(Self::default());
        }

        let content = fs.read_to_string(&config_path)?;
        Self::parse(&content)
    }

    /// Parse TOML, filling unset `[diagram]` keys from the defaults.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = toml::from_str(content)?;
        let defaults = RenderOptions::default();

        let render = match raw.diagram {
            Some(d) => RenderOptions {
                diameter: d.diameter.unwrap_or(defaults.diameter),
                label_padding: d.label_padding.unwrap_or(defaults.label_padding),
                tension: d.tension.unwrap_or(defaults.tension),
                sweep: d.sweep.unwrap_or(defaults.sweep),
                label_offset: d.label_offset.unwrap_or(defaults.label_offset),
            },
            None => defaults,
        };

        Ok(Self { render })
    }
}

/// Commented config file written by `bundlegraph init`.
pub fn generate_config_template() -> String {
    let d = RenderOptions::default();
    format!(
        r#"# bundlegraph configuration

[diagram]
# Width and height of the SVG in pixels
diameter = {}
# Room left for labels; the node ring radius is diameter / 2 - label_padding
label_padding = {}
# Bundle strength, 0 draws straight lines and 1 follows the tree exactly
tension = {}
# Angular extent of the ring in degrees
sweep = {}
# Gap between a node and its label
label_offset = {}
"#,
        d.diameter, d.label_padding, d.tension, d.sweep, d.label_offset
    )
}

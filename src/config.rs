use anyhow::{bail, Context, Result};
use leb128::format::Notation;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_CONFIG_FILE: &str = "leb128.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolConfig {
    pub format: Notation,
    pub separator: bool,
    pub json: bool,
    pub log_level: String,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            format: Notation::Hex,
            separator: true,
            json: false,
            log_level: "info".to_string(),
        }
    }
}

impl ToolConfig {
    /// Read the config at `config_path`. Without a path, `leb128.toml` is
    /// used when present and defaults otherwise; a named file must exist.
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        match config_path {
            Some(path) => Self::load_file(path, true),
            None => Self::load_file(DEFAULT_CONFIG_FILE, false),
        }
    }

    fn load_file(config_file: &str, required: bool) -> Result<Self> {
        if !Path::new(config_file).exists() {
            if required {
                bail!("config file {} does not exist", config_file);
            }
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(config_file)
            .with_context(|| format!("failed to read config {}", config_file))?;
        let config: ToolConfig = toml::from_str(&content)
            .with_context(|| format!("failed to parse config {}", config_file))?;
        Ok(config)
    }

    pub fn save(&self, config_path: &str) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        tracing::info!("Wrote config: {}", config_path);
        Ok(())
    }
}

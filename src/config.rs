use serde::{Deserialize, Serialize};

use crate::math::{Projection, Vec3};

/// Environment variable naming a JSON file that overrides [`AppConfig::default`].
pub const CONFIG_ENV: &str = "GLPROJ_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub title: String,
    pub projection: Projection,
    /// Where the square sits in eye space before any keyboard nudging.
    pub offset: Vec3,
    pub clear_color: [f64; 4],
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "glproj".to_string(),
            projection: Projection::default(),
            offset: Vec3::new(0.0, 0.0, -5.0),
            clear_color: [0.0, 0.0, 0.0, 1.0],
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.projection.validate()?;
        Ok(config)
    }

    /// Reads the file named by `GLPROJ_CONFIG`, or falls back to the defaults.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> anyhow::Result<Self> {
        use anyhow::Context;

        let Some(path) = std::env::var_os(CONFIG_ENV) else {
            log::info!("{} not set, using default configuration", CONFIG_ENV);
            return Ok(Self::default());
        };

        let json = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read config file {}", path.to_string_lossy()))?;
        let config = Self::from_json(&json)
            .with_context(|| format!("invalid config file {}", path.to_string_lossy()))?;

        log::info!("Loaded configuration from {}", path.to_string_lossy());
        Ok(config)
    }

    #[cfg(target_arch = "wasm32")]
    pub fn load() -> anyhow::Result<Self> {
        Ok(Self::default())
    }
}

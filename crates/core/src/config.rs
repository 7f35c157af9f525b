use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("up_delay must be a finite, non-negative length (got {0})")]
    UpDelay(f64),
    #[error("avatar.{field} must be finite (got {value})")]
    NonFinite { field: &'static str, value: f64 },
    #[error("avatar.to_scale must be non-zero")]
    ZeroScale,
}

/// Endpoints of the avatar shrink animation.
///
/// `from_*` applies at the top of the page, `to_*` once the header has
/// detached. Translations are in `rem`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AvatarConfig {
    pub from_scale: f64,
    pub to_scale: f64,
    pub from_x: f64,
    pub to_x: f64,
}

impl Default for AvatarConfig {
    fn default() -> Self {
        Self {
            from_scale: 1.0,
            to_scale: 36.0 / 64.0,
            from_x: 0.0,
            to_x: 2.0 / 16.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Hysteresis band (px) the header must clear upward before it
    /// starts collapsing.
    pub up_delay: f64,
    /// Path on which the large avatar is shown and animated.
    pub home_path: String,
    pub avatar: AvatarConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            up_delay: 64.0,
            home_path: "/".to_string(),
            avatar: AvatarConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json(data: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = serde_json::from_str(data)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.up_delay.is_finite() || self.up_delay < 0.0 {
            return Err(ConfigError::UpDelay(self.up_delay));
        }
        let avatar = &self.avatar;
        for (field, value) in [
            ("from_scale", avatar.from_scale),
            ("to_scale", avatar.to_scale),
            ("from_x", avatar.from_x),
            ("to_x", avatar.to_x),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field, value });
            }
        }
        if avatar.to_scale == 0.0 {
            return Err(ConfigError::ZeroScale);
        }
        Ok(())
    }
}

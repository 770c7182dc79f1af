//! Configuration for overlay layers
//!
//! Layers created through [`LayerRegistry`](crate::layers::manager::LayerRegistry)
//! or the [`blocks`](crate::blocks) functions take their defaults from a
//! [`LayerConfig`]. Configs come from presets, from code, or from JSON.

use crate::{
    core::constants::{DEFAULT_OVERSCAN, MAX_OVERSCAN},
    LayerError, Result,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayerProfile {
    /// Visible layers with one extra row and column of tiles.
    Standard,
    /// Two extra rows and columns, for hosts whose camera offset can run a
    /// frame ahead of the layer.
    Generous,
    /// Layers start hidden and are revealed later.
    Hidden,
    Custom(LayerConfig),
}

impl LayerProfile {
    pub fn resolve(&self) -> LayerConfig {
        match self {
            Self::Standard => LayerConfig {
                default_visible: true,
                overscan: DEFAULT_OVERSCAN,
            },
            Self::Generous => LayerConfig {
                default_visible: true,
                overscan: DEFAULT_OVERSCAN + 1,
            },
            Self::Hidden => LayerConfig {
                default_visible: false,
                overscan: DEFAULT_OVERSCAN,
            },
            Self::Custom(config) => config.clone(),
        }
    }
}

impl Default for LayerProfile {
    fn default() -> Self {
        Self::Standard
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayerConfig {
    /// Visibility given to newly created layers
    pub default_visible: bool,
    /// Extra tile rows and columns drawn past the viewport edge
    pub overscan: u32,
}

impl LayerConfig {
    /// Overscan below one leaves a strip of the viewport uncovered whenever
    /// the camera offset is not a multiple of the tile size. It is capped at
    /// [`MAX_OVERSCAN`].
    pub fn validate(&self) -> Result<()> {
        if self.overscan == 0 {
            return Err(LayerError::InvalidConfig(
                "overscan must be at least 1".to_string(),
            ));
        }
        if self.overscan > MAX_OVERSCAN {
            return Err(LayerError::InvalidConfig(format!(
                "overscan {} exceeds the maximum of {}",
                self.overscan, MAX_OVERSCAN
            )));
        }
        Ok(())
    }

    /// Parse and validate a config. Missing fields fall back to the
    /// standard profile.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Default for LayerConfig {
    fn default() -> Self {
        LayerProfile::default().resolve()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_profile_presets() {
        let standard = LayerProfile::Standard.resolve();
        let generous = LayerProfile::Generous.resolve();
        let hidden = LayerProfile::Hidden.resolve();

        assert!(standard.default_visible);
        assert_eq!(standard.overscan, 1);

        assert!(generous.overscan > standard.overscan);
        assert!(generous.default_visible);

        assert!(!hidden.default_visible);
        assert_eq!(hidden.overscan, standard.overscan);

        let custom = LayerConfig {
            default_visible: false,
            overscan: 3,
        };
        assert_eq!(LayerProfile::Custom(custom.clone()).resolve(), custom);
    }

    #[test]
    fn test_default_matches_standard() {
        assert_eq!(LayerConfig::default(), LayerProfile::Standard.resolve());
    }

    #[test]
    fn test_zero_overscan_rejected() {
        let config = LayerConfig {
            default_visible: true,
            overscan: 0,
        };
        assert!(matches!(
            config.validate(),
            Err(LayerError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_oversized_overscan_rejected() {
        let at_limit = LayerConfig {
            default_visible: true,
            overscan: MAX_OVERSCAN,
        };
        assert!(at_limit.validate().is_ok());

        assert!(matches!(
            LayerConfig::from_json(r#"{ "overscan": 4294967295 }"#),
            Err(LayerError::InvalidConfig(_))
        ));
        assert!(matches!(
            LayerProfile::Custom(LayerConfig {
                default_visible: true,
                overscan: MAX_OVERSCAN + 1,
            })
            .resolve()
            .validate(),
            Err(LayerError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_config_from_json() {
        let config = LayerConfig::from_json(r#"{ "overscan": 2 }"#).unwrap();
        assert_eq!(config.overscan, 2);
        assert!(config.default_visible, "missing fields use defaults");

        let back = LayerConfig::from_json(&config.to_json().unwrap()).unwrap();
        assert_eq!(back, config);

        assert!(matches!(
            LayerConfig::from_json(r#"{ "overscan": 0 }"#),
            Err(LayerError::InvalidConfig(_))
        ));
        assert!(matches!(
            LayerConfig::from_json("not json"),
            Err(LayerError::Serialization(_))
        ));
    }
}

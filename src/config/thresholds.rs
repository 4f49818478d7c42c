use serde::{Deserialize, Serialize};

use crate::classifier::{LabelThresholds, DEFAULT_MIXED_CEILING, DEFAULT_NEUTRAL_BAND};

/// `[thresholds]` section: cut-offs for labelling compound scores
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdsConfig {
    /// Half-width of the neutral dead zone around zero
    #[serde(default = "default_neutral_band")]
    pub neutral_band: f64,

    /// Marker-bearing units stay mixed only while |compound| is below this
    #[serde(default = "default_mixed_ceiling")]
    pub mixed_ceiling: f64,
}

impl Default for ThresholdsConfig {
    fn default() -> Self {
        Self {
            neutral_band: default_neutral_band(),
            mixed_ceiling: default_mixed_ceiling(),
        }
    }
}

impl ThresholdsConfig {
    pub fn validate(&self) -> Result<(), String> {
        self.to_label_thresholds().validate()
    }

    pub fn to_label_thresholds(&self) -> LabelThresholds {
        LabelThresholds {
            neutral_band: self.neutral_band,
            mixed_ceiling: self.mixed_ceiling,
        }
    }
}

fn default_neutral_band() -> f64 {
    DEFAULT_NEUTRAL_BAND
}
fn default_mixed_ceiling() -> f64 {
    DEFAULT_MIXED_CEILING
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_section_uses_defaults() {
        let config: ThresholdsConfig = toml::from_str("neutral_band = 0.1").unwrap();
        assert_eq!(config.neutral_band, 0.1);
        assert_eq!(config.mixed_ceiling, DEFAULT_MIXED_CEILING);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_inverted_thresholds_rejected() {
        let config = ThresholdsConfig {
            neutral_band: 0.6,
            mixed_ceiling: 0.5,
        };
        assert!(config.validate().is_err());
    }
}

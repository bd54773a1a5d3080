//! Engine configuration.
//!
//! Every field defaults to the reference behavior, so `KundliConfig::default()`
//! and an empty TOML file produce the same chart.

use kundli_vedic::{KalaClock, LagnaMode, NodeMode};
use serde::{Deserialize, Serialize};

/// Knobs that select between alternative formulas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct KundliConfig {
    /// Lunar node placement.
    pub node_mode: NodeMode,
    /// Ascendant formula.
    pub lagna_mode: LagnaMode,
    /// Clock whose hour decides day or night for Kala Bala.
    pub kala_clock: KalaClock,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_is_default() {
        let cfg: KundliConfig = toml::from_str("").unwrap();
        assert_eq!(cfg, KundliConfig::default());
        assert_eq!(cfg.node_mode, NodeMode::Fixed);
        assert_eq!(cfg.lagna_mode, LagnaMode::Simplified);
        assert_eq!(cfg.kala_clock, KalaClock::Utc);
    }

    #[test]
    fn partial_toml_overrides_one_field() {
        let cfg: KundliConfig = toml::from_str("lagna_mode = \"spherical\"\n").unwrap();
        assert_eq!(cfg.lagna_mode, LagnaMode::Spherical);
        assert_eq!(cfg.node_mode, NodeMode::Fixed);
    }

    #[test]
    fn unknown_variant_is_rejected() {
        let res: Result<KundliConfig, _> = toml::from_str("node_mode = \"true\"\n");
        assert!(res.is_err());
    }

    #[test]
    fn json_round_trip() {
        let cfg = KundliConfig {
            node_mode: NodeMode::Mean,
            lagna_mode: LagnaMode::Spherical,
            kala_clock: KalaClock::LocalMean,
        };
        let json = serde_json::to_string(&cfg).unwrap();
        assert_eq!(
            json,
            r#"{"node_mode":"mean","lagna_mode":"spherical","kala_clock":"local_mean"}"#
        );
        let back: KundliConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cfg);
    }
}

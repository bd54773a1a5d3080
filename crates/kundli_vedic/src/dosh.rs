//! Dosh (affliction) diagnosis.
//!
//! Three independent rule checks over placed planets: Mangal (Mars),
//! Shani (Saturn) and Rahu-Ketu. Each present dosh appends a fixed block of
//! remedies, in the order Mangal, Shani, Rahu-Ketu.

use serde::{Deserialize, Serialize};

use crate::chart::ChartPositions;
use crate::graha::Graha;
use crate::rashi::Rashi;

/// Houses that trigger Shani Dosh.
pub const SHANI_HOUSES: [u8; 6] = [1, 4, 7, 8, 10, 12];

/// Houses that trigger Rahu-Ketu Dosh, for either node.
pub const RAHU_KETU_HOUSES: [u8; 5] = [1, 5, 7, 9, 10];

pub const MANGAL_REMEDIES: [&str; 3] = [
    "Recite Hanuman Chalisa on Tuesdays",
    "Fast on Tuesdays",
    "Donate red lentils and red cloth",
];

pub const SHANI_REMEDIES: [&str; 3] = [
    "Light mustard oil lamp under Peepal tree on Saturdays",
    "Donate black sesame seeds and iron",
    "Recite Shani mantras",
];

pub const RAHU_KETU_REMEDIES: [&str; 3] = [
    "Recite Maha Mrityunjaya Mantra",
    "Donate to spiritual causes",
    "Wear Gomed (Hessonite) for Rahu or Cat's Eye for Ketu after consultation",
];

/// Mangal Dosh severity. `None` iff absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DoshSeverity {
    None,
    Mild,
    Moderate,
    Strong,
}

impl DoshSeverity {
    /// Points subtracted from the Kundli score.
    pub const fn score_penalty(self) -> f64 {
        match self {
            Self::None => 0.0,
            Self::Mild => 5.0,
            Self::Moderate => 10.0,
            Self::Strong => 15.0,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Mild => "Mild",
            Self::Moderate => "Moderate",
            Self::Strong => "Strong",
        }
    }
}

impl core::fmt::Display for DoshSeverity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MangalDosh {
    pub present: bool,
    pub severity: DoshSeverity,
    pub details: String,
}

/// A present/absent finding with its explanatory sentence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DoshFinding {
    pub present: bool,
    pub details: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DoshAnalysis {
    pub mangal: MangalDosh,
    pub shani: DoshFinding,
    pub rahu_ketu: DoshFinding,
    pub remedies: Vec<String>,
}

impl DoshAnalysis {
    /// Number of present doshas (0..=3).
    pub fn count_present(&self) -> usize {
        [self.mangal.present, self.shani.present, self.rahu_ketu.present]
            .iter()
            .filter(|p| **p)
            .count()
    }
}

fn mangal_house_descriptor(house: u8) -> Option<&'static str> {
    match house {
        1 => Some("First house (self) - may cause aggressive temperament"),
        2 => Some("Second house (family) - may cause family discord"),
        4 => Some("Fourth house (home) - may cause domestic turbulence"),
        7 => Some("Seventh house (marriage) - may cause marital challenges"),
        8 => Some("Eighth house (longevity) - may cause health and transformation issues"),
        12 => Some("Twelfth house (losses) - may cause separation tendencies"),
        _ => None,
    }
}

/// Mangal Dosh from Mars' house and sign.
pub fn mangal_dosh(mars_house: u8, mars_sign: Rashi) -> MangalDosh {
    if let Some(desc) = mangal_house_descriptor(mars_house) {
        let severity = if mars_house == 2 {
            DoshSeverity::Moderate
        } else {
            DoshSeverity::Strong
        };
        return MangalDosh {
            present: true,
            severity,
            details: format!("Mangal Dosh present: Mars in {desc}"),
        };
    }
    if matches!(mars_sign, Rashi::Mesha | Rashi::Vrischika) {
        return MangalDosh {
            present: true,
            severity: DoshSeverity::Mild,
            details: "Mild Mangal Dosh: Mars in own sign (Aries or Scorpio) - effects are reduced"
                .to_string(),
        };
    }
    MangalDosh {
        present: false,
        severity: DoshSeverity::None,
        details: "No Mangal Dosh detected".to_string(),
    }
}

pub fn shani_dosh(saturn_house: u8) -> DoshFinding {
    if SHANI_HOUSES.contains(&saturn_house) {
        DoshFinding {
            present: true,
            details: "Saturn placed in challenging houses causing delays and obstacles".to_string(),
        }
    } else {
        DoshFinding {
            present: false,
            details: "No Shani Dosh detected".to_string(),
        }
    }
}

pub fn rahu_ketu_dosh(rahu_house: u8, ketu_house: u8) -> DoshFinding {
    if RAHU_KETU_HOUSES.contains(&rahu_house) || RAHU_KETU_HOUSES.contains(&ketu_house) {
        DoshFinding {
            present: true,
            details: "Rahu/Ketu in critical houses causing karmic challenges".to_string(),
        }
    } else {
        DoshFinding {
            present: false,
            details: "No Rahu-Ketu Dosh detected".to_string(),
        }
    }
}

/// Run all three checks and collect remedies.
pub fn analyze_dosh(chart: &ChartPositions) -> DoshAnalysis {
    let mars = chart.position(Graha::Mangal);
    let mangal = mangal_dosh(mars.house, mars.sign);
    let shani = shani_dosh(chart.position(Graha::Shani).house);
    let rahu_ketu = rahu_ketu_dosh(
        chart.position(Graha::Rahu).house,
        chart.position(Graha::Ketu).house,
    );

    let mut remedies = Vec::new();
    for (present, block) in [
        (mangal.present, &MANGAL_REMEDIES),
        (shani.present, &SHANI_REMEDIES),
        (rahu_ketu.present, &RAHU_KETU_REMEDIES),
    ] {
        if present {
            remedies.extend(block.iter().map(|s| s.to_string()));
        }
    }

    DoshAnalysis {
        mangal,
        shani,
        rahu_ketu,
        remedies,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Ascendant at 0° so house n spans [30(n-1), 30n).
    fn chart_with(mars: f64, saturn: f64, rahu: f64) -> ChartPositions {
        let ketu = (rahu + 180.0) % 360.0;
        let bodies = [
            (100.0, 1.0),
            (130.0, 13.0),
            (mars, 0.5),
            (160.0, 1.2),
            (175.0, 0.1),
            (140.0, 1.1),
            (saturn, 0.05),
            (rahu, -0.05),
            (ketu, -0.05),
        ];
        ChartPositions::from_longitudes(0.0, &bodies)
    }

    #[test]
    fn mars_in_seventh_is_strong() {
        let d = mangal_dosh(7, Rashi::Tula);
        assert!(d.present);
        assert_eq!(d.severity, DoshSeverity::Strong);
        assert_eq!(
            d.details,
            "Mangal Dosh present: Mars in Seventh house (marriage) - may cause marital challenges"
        );
    }

    #[test]
    fn mars_in_second_is_moderate() {
        let d = mangal_dosh(2, Rashi::Mesha);
        assert_eq!(d.severity, DoshSeverity::Moderate);
        assert!(d.details.contains("Second house (family)"));
    }

    #[test]
    fn mars_in_own_sign_elsewhere_is_mild() {
        let d = mangal_dosh(3, Rashi::Vrischika);
        assert!(d.present);
        assert_eq!(d.severity, DoshSeverity::Mild);
        let d = mangal_dosh(11, Rashi::Mesha);
        assert_eq!(d.severity, DoshSeverity::Mild);
    }

    #[test]
    fn mars_absent() {
        let d = mangal_dosh(10, Rashi::Makara);
        assert!(!d.present);
        assert_eq!(d.severity, DoshSeverity::None);
        assert_eq!(d.details, "No Mangal Dosh detected");
    }

    #[test]
    fn shani_houses() {
        for h in 1..=12u8 {
            assert_eq!(shani_dosh(h).present, SHANI_HOUSES.contains(&h), "house {h}");
        }
    }

    #[test]
    fn rahu_ketu_either_node() {
        assert!(rahu_ketu_dosh(3, 9).present);
        assert!(rahu_ketu_dosh(5, 11).present);
        assert!(!rahu_ketu_dosh(2, 8).present);
        assert!(!rahu_ketu_dosh(6, 12).present);
    }

    #[test]
    fn mars_in_house_seven_puts_mangal_remedies_first() {
        // Mars at 190° (Libra) sits in house 7 with ascendant at 0°.
        let analysis = analyze_dosh(&chart_with(190.0, 50.0, 80.0));
        assert!(analysis.mangal.present);
        assert_eq!(analysis.mangal.severity, DoshSeverity::Strong);
        assert_eq!(&analysis.remedies[..3], &MANGAL_REMEDIES.map(String::from));
    }

    #[test]
    fn all_three_present_remedies_in_order() {
        // Mars house 1, Saturn house 4, Rahu house 5.
        let analysis = analyze_dosh(&chart_with(10.0, 100.0, 130.0));
        assert_eq!(analysis.count_present(), 3);
        let expected: Vec<String> = MANGAL_REMEDIES
            .iter()
            .chain(&SHANI_REMEDIES)
            .chain(&RAHU_KETU_REMEDIES)
            .map(|s| s.to_string())
            .collect();
        assert_eq!(analysis.remedies, expected);
    }

    #[test]
    fn none_present_has_no_remedies() {
        // Mars house 3 (Gemini), Saturn house 2, Rahu house 2, Ketu house 8.
        let analysis = analyze_dosh(&chart_with(70.0, 40.0, 40.0));
        assert!(!analysis.mangal.present);
        assert!(!analysis.shani.present);
        assert!(!analysis.rahu_ketu.present);
        assert!(analysis.remedies.is_empty());
        assert_eq!(analysis.count_present(), 0);
    }

    #[test]
    fn severity_serializes_as_label() {
        let json = serde_json::to_string(&DoshSeverity::Moderate).unwrap();
        assert_eq!(json, "\"Moderate\"");
    }
}

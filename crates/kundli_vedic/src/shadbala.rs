//! Shad Bala (six-fold planetary strength).
//!
//! Pure math over a placed chart. **Sapta grahas only** (Sun through Saturn);
//! single-graha functions return 0.0 for Rahu/Ketu.
//!
//! The six components, all in virupas (60 virupas = 1 rupa):
//! 1. Sthana (positional): uchcha + own sign + friendly sign lord
//! 2. Dig (directional)
//! 3. Kala (temporal): day/night affinity
//! 4. Cheshta (motional)
//! 5. Naisargika (natural)
//! 6. Drik (aspectual), over the seven planets only

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::chart::ChartPositions;
use crate::graha::{Graha, SAPTA_GRAHAS};
use crate::graha_relationships::{
    exaltation_degree, in_friendly_sign, is_natural_friend, is_own_sign,
};
use crate::rashi::Rashi;
use crate::util::minor_arc;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Natural strength in virupas, Sun..Saturn.
pub const NAISARGIKA_BALA: [f64; 7] = [60.0, 51.43, 17.14, 25.71, 34.29, 42.86, 8.57];

/// House of directional strength, Sun..Saturn.
pub const DIG_BALA_BHAVA: [u8; 7] = [10, 4, 10, 1, 1, 4, 7];

/// Aspect angles, their weights and the orb, checked in this order.
const DRIK_ASPECTS: [(f64, f64); 4] = [(180.0, 15.0), (120.0, 10.0), (90.0, 7.5), (60.0, 5.0)];
const DRIK_ORB_DEG: f64 = 10.0;

const VIRUPAS_PER_RUPA: f64 = 60.0;

fn is_sapta_graha(graha: Graha) -> bool {
    graha.index() < 7
}

// ---------------------------------------------------------------------------
// Labels and the day/night gate
// ---------------------------------------------------------------------------

/// Qualitative strength bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StrengthLabel {
    VeryWeak,
    Weak,
    Average,
    Good,
    Excellent,
}

impl StrengthLabel {
    /// `≥10 Excellent, ≥7 Good, ≥5 Average, ≥3 Weak, else VeryWeak`.
    pub fn from_rupas(rupas: f64) -> Self {
        if rupas >= 10.0 {
            Self::Excellent
        } else if rupas >= 7.0 {
            Self::Good
        } else if rupas >= 5.0 {
            Self::Average
        } else if rupas >= 3.0 {
            Self::Weak
        } else {
            Self::VeryWeak
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::VeryWeak => "Very Weak",
            Self::Weak => "Weak",
            Self::Average => "Average",
            Self::Good => "Good",
            Self::Excellent => "Excellent",
        }
    }
}

impl Display for StrengthLabel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Clock whose hour gates day and night for Kala Bala.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KalaClock {
    /// Hour of the UTC instant.
    #[default]
    Utc,
    /// UTC shifted by east longitude / 15 hours.
    LocalMean,
}

impl KalaClock {
    /// Whole hour of day (0..=23) on this clock.
    pub fn hour(self, utc_fractional_hour: f64, longitude_east_deg: f64) -> u32 {
        let h = match self {
            Self::Utc => utc_fractional_hour,
            Self::LocalMean => utc_fractional_hour + longitude_east_deg / 15.0,
        };
        (h.rem_euclid(24.0).floor() as u32).min(23)
    }
}

/// Day is 06:00 through 17:59.
pub fn is_daytime(hour: u32) -> bool {
    (6..18).contains(&hour)
}

// ---------------------------------------------------------------------------
// Components
// ---------------------------------------------------------------------------

/// Uchcha Bala: 60 * (1 - distance_from_exaltation / 180).
pub fn uchcha_bala(graha: Graha, sidereal_lon: f64) -> f64 {
    match exaltation_degree(graha) {
        Some(exalt) => 60.0 * (1.0 - minor_arc(sidereal_lon, exalt) / 180.0),
        None => 0.0,
    }
}

/// Sthana Bala: uchcha, +30 in an own sign, +22.5 when the sign lord is a
/// natural friend. Unclamped.
pub fn sthana_bala(graha: Graha, sidereal_lon: f64, rashi: Rashi) -> f64 {
    if !is_sapta_graha(graha) {
        return 0.0;
    }
    let mut bala = uchcha_bala(graha, sidereal_lon);
    if is_own_sign(graha, rashi) {
        bala += 30.0;
    }
    if in_friendly_sign(graha, rashi) {
        bala += 22.5;
    }
    bala
}

/// Dig Bala: 60 in the house of directional strength, else 30.
pub fn dig_bala(graha: Graha, house: u8) -> f64 {
    if !is_sapta_graha(graha) {
        return 0.0;
    }
    if DIG_BALA_BHAVA[graha.index() as usize] == house {
        60.0
    } else {
        30.0
    }
}

/// Kala Bala: 60 when the day/night affinity matches, else 30.
/// Mercury is neutral.
pub fn kala_bala(graha: Graha, is_daytime: bool) -> f64 {
    match graha {
        Graha::Surya | Graha::Guru | Graha::Shukra if is_daytime => 60.0,
        Graha::Chandra | Graha::Mangal | Graha::Shani if !is_daytime => 60.0,
        Graha::Rahu | Graha::Ketu => 0.0,
        _ => 30.0,
    }
}

/// Cheshta Bala: 60 retrograde, 45 when faster than 1°/day, else 30.
/// Applied uniformly, the luminaries included.
pub fn cheshta_bala(graha: Graha, speed_deg_per_day: f64) -> f64 {
    if !is_sapta_graha(graha) {
        return 0.0;
    }
    if speed_deg_per_day < 0.0 {
        60.0
    } else if speed_deg_per_day.abs() > 1.0 {
        45.0
    } else {
        30.0
    }
}

/// Naisargika (natural) bala for a graha.
pub fn naisargika_bala(graha: Graha) -> f64 {
    if is_sapta_graha(graha) {
        NAISARGIKA_BALA[graha.index() as usize]
    } else {
        0.0
    }
}

/// Drik Bala: 30 adjusted by each other sapta graha.
///
/// Within 10° of 180/120/90/60 the other planet adds 15/10/7.5/5, positive
/// for a natural friend, negative otherwise. Only the first matching aspect
/// counts for each pair. `sidereal_lons` = Sun..Saturn.
pub fn drik_bala(graha: Graha, sidereal_lons: &[f64; 7]) -> f64 {
    if !is_sapta_graha(graha) {
        return 0.0;
    }
    let lon = sidereal_lons[graha.index() as usize];
    let mut adjustment = 0.0;
    for other in SAPTA_GRAHAS {
        if other == graha {
            continue;
        }
        let separation = minor_arc(lon, sidereal_lons[other.index() as usize]);
        let friend = is_natural_friend(graha, other);
        if let Some(&(_, weight)) = DRIK_ASPECTS
            .iter()
            .find(|(angle, _)| (separation - angle).abs() < DRIK_ORB_DEG)
        {
            adjustment += if friend { weight } else { -weight };
        }
    }
    30.0 + adjustment
}

/// Drik bala for all 7 sapta grahas.
pub fn all_drik_balas(sidereal_lons: &[f64; 7]) -> [f64; 7] {
    let mut result = [0.0; 7];
    for (i, g) in SAPTA_GRAHAS.iter().enumerate() {
        result[i] = drik_bala(*g, sidereal_lons);
    }
    result
}

// ---------------------------------------------------------------------------
// Complete Shad Bala
// ---------------------------------------------------------------------------

/// Shad Bala breakdown for one planet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShadBalaScore {
    pub planet: Graha,
    pub sthana: f64,
    pub dig: f64,
    pub kala: f64,
    pub cheshta: f64,
    pub naisargika: f64,
    pub drik: f64,
    pub total_virupas: f64,
    pub total_rupas: f64,
    pub label: StrengthLabel,
}

/// Compute Shad Bala for all 7 sapta grahas of a chart.
pub fn calculate_shad_bala(chart: &ChartPositions, is_daytime: bool) -> [ShadBalaScore; 7] {
    let lons: [f64; 7] = std::array::from_fn(|i| chart.planets[i].sidereal_longitude_deg);
    let drik = all_drik_balas(&lons);

    std::array::from_fn(|i| {
        let p = &chart.planets[i];
        let graha = p.planet;
        let sthana = sthana_bala(graha, p.sidereal_longitude_deg, p.sign);
        let dig = dig_bala(graha, p.house);
        let kala = kala_bala(graha, is_daytime);
        let cheshta = cheshta_bala(graha, p.speed_deg_per_day);
        let naisargika = naisargika_bala(graha);
        let total = sthana + dig + kala + cheshta + naisargika + drik[i];
        let rupas = total / VIRUPAS_PER_RUPA;
        ShadBalaScore {
            planet: graha,
            sthana,
            dig,
            kala,
            cheshta,
            naisargika,
            drik: drik[i],
            total_virupas: total,
            total_rupas: rupas,
            label: StrengthLabel::from_rupas(rupas),
        }
    })
}

/// Mean `total_rupas`. Zero for an empty slice.
pub fn average_rupas(scores: &[ShadBalaScore]) -> f64 {
    if scores.is_empty() {
        return 0.0;
    }
    scores.iter().map(|s| s.total_rupas).sum::<f64>() / scores.len() as f64
}

/// The `n` strongest planets by rupas, descending. Ties keep canonical order.
pub fn strongest(scores: &[ShadBalaScore], n: usize) -> Vec<ShadBalaScore> {
    let mut sorted = scores.to_vec();
    sorted.sort_by(|a, b| b.total_rupas.total_cmp(&a.total_rupas));
    sorted.truncate(n);
    sorted
}

//! Aggregate 0–100 Kundli strength score.

use crate::chart::ChartPositions;
use crate::dosh::DoshAnalysis;
use crate::graha::Graha;
use crate::shadbala::{ShadBalaScore, average_rupas};

/// Starting value before any adjustment.
pub const BASE_SCORE: f64 = 50.0;

/// Ceiling of the Shad Bala contribution.
pub const MAX_STRENGTH_BONUS: f64 = 20.0;

/// Grahas that earn a bonus in a favourable house.
pub const BENEFICS: [Graha; 4] = [Graha::Chandra, Graha::Guru, Graha::Shukra, Graha::Buddh];

/// Kendra and trikona houses plus the 11th.
pub const FAVOURABLE_HOUSES: [u8; 7] = [1, 4, 5, 7, 9, 10, 11];

pub const BENEFIC_BONUS: f64 = 3.0;
pub const SHANI_PENALTY: f64 = 8.0;
pub const RAHU_KETU_PENALTY: f64 = 7.0;

/// Bonus when the first occupant of house 1 sits in a fire sign.
pub const FIRE_LAGNA_BONUS: f64 = 10.0;

/// Shad Bala contribution: `min(avg / 10 · 20, 20)`.
pub fn strength_bonus(shad_bala: &[ShadBalaScore]) -> f64 {
    (average_rupas(shad_bala) / 10.0 * 20.0).min(MAX_STRENGTH_BONUS)
}

/// Unclamped, unrounded score.
pub fn raw_score(chart: &ChartPositions, shad_bala: &[ShadBalaScore], dosh: &DoshAnalysis) -> f64 {
    let mut score = BASE_SCORE + strength_bonus(shad_bala);

    let benefics_placed = BENEFICS
        .iter()
        .filter(|g| FAVOURABLE_HOUSES.contains(&chart.position(**g).house))
        .count();
    score += BENEFIC_BONUS * benefics_placed as f64;

    if dosh.mangal.present {
        score -= dosh.mangal.severity.score_penalty();
    }
    if dosh.shani.present {
        score -= SHANI_PENALTY;
    }
    if dosh.rahu_ketu.present {
        score -= RAHU_KETU_PENALTY;
    }

    // Only the first occupant in canonical order counts.
    let first_in_lagna = chart.planets.iter().find(|p| p.house == 1);
    if first_in_lagna.is_some_and(|p| matches!(p.sign.number(), 1 | 5 | 9)) {
        score += FIRE_LAGNA_BONUS;
    }

    score
}

/// Final score, clamped to [0, 100] and rounded half away from zero.
pub fn kundli_score(chart: &ChartPositions, shad_bala: &[ShadBalaScore], dosh: &DoshAnalysis) -> u8 {
    raw_score(chart, shad_bala, dosh).clamp(0.0, 100.0).round() as u8
}

//! Ashtakavarga (benefic points).
//!
//! For each of the 7 grahas (Sun through Saturn), the 7 grahas themselves
//! contribute benefic points to rashis based on their relative offset. The
//! Lagna is not a contributor.
//!
//! Mathematical invariants (totals across 12 rashis, constant for ALL charts):
//! - Sun: 42, Moon: 45, Mars: 34, Mercury: 47, Jupiter: 47, Venus: 44, Saturn: 33
//! - Sarvashtakavarga total: 292

use serde::Serialize;

use crate::chart::ChartPositions;
use crate::graha::{Graha, SAPTA_GRAHAS};
use crate::rashi::Rashi;
use crate::shadbala::StrengthLabel;

// ---------------------------------------------------------------------------
// Rules table (bitmask encoding)
// ---------------------------------------------------------------------------

/// Build a bitmask from 1-based offset values.
/// Bit i is set if offset i appears in the list.
const fn bits(offsets: &[u8]) -> u16 {
    let mut mask = 0u16;
    let mut i = 0;
    while i < offsets.len() {
        mask |= 1u16 << offsets[i];
        i += 1;
    }
    mask
}

/// BENEFIC[native][reference] = bitmask of favourable offsets.
///
/// Both indices: 0=Sun, 1=Moon, 2=Mars, 3=Mercury, 4=Jupiter, 5=Venus, 6=Saturn.
/// Offsets are 1-based (1=same rashi, 2=next rashi, ..., 12=previous rashi).
/// Source: BPHS.
const BENEFIC: [[u16; 7]; 7] = [
    // Sun
    [
        bits(&[1, 2, 4, 7, 8, 9, 10, 11]), // from Sun
        bits(&[3, 6, 10, 11]),             // from Moon
        bits(&[1, 2, 4, 7, 8, 9, 10, 11]), // from Mars
        bits(&[3, 5, 6, 9, 10, 11, 12]),   // from Mercury
        bits(&[5, 6, 9, 11]),              // from Jupiter
        bits(&[6, 7, 12]),                 // from Venus
        bits(&[1, 2, 4, 7, 8, 9, 10, 11]), // from Saturn
    ],
    // Moon
    [
        bits(&[3, 6, 7, 8, 10, 11]),        // from Sun
        bits(&[1, 3, 6, 7, 10, 11]),        // from Moon
        bits(&[2, 3, 5, 6, 9, 10, 11]),     // from Mars
        bits(&[1, 3, 4, 5, 7, 8, 10, 11]),  // from Mercury
        bits(&[1, 4, 7, 8, 10, 11, 12]),    // from Jupiter
        bits(&[3, 4, 5, 7, 9, 10, 11]),     // from Venus
        bits(&[3, 5, 6, 11]),               // from Saturn
    ],
    // Mars
    [
        bits(&[3, 5, 6, 10, 11]),          // from Sun
        bits(&[3, 6, 11]),                 // from Moon
        bits(&[1, 2, 4, 7, 8, 10, 11]),    // from Mars
        bits(&[3, 5, 6, 11]),              // from Mercury
        bits(&[6, 10, 11, 12]),            // from Jupiter
        bits(&[6, 8, 11, 12]),             // from Venus
        bits(&[1, 4, 7, 8, 9, 10, 11]),    // from Saturn
    ],
    // Mercury
    [
        bits(&[5, 6, 9, 11, 12]),              // from Sun
        bits(&[2, 4, 6, 8, 10, 11]),           // from Moon
        bits(&[1, 2, 4, 7, 8, 9, 10, 11]),     // from Mars
        bits(&[1, 3, 5, 6, 9, 10, 11, 12]),    // from Mercury
        bits(&[6, 8, 11, 12]),                 // from Jupiter
        bits(&[1, 2, 3, 4, 5, 8, 9, 11]),      // from Venus
        bits(&[1, 2, 4, 7, 8, 9, 10, 11]),     // from Saturn
    ],
    // Jupiter
    [
        bits(&[1, 2, 3, 4, 7, 8, 9, 10, 11]), // from Sun
        bits(&[2, 5, 7, 9, 11]),              // from Moon
        bits(&[1, 2, 4, 7, 8, 10, 11]),       // from Mars
        bits(&[1, 2, 4, 5, 6, 9, 10, 11]),    // from Mercury
        bits(&[1, 2, 3, 4, 7, 8, 10, 11]),    // from Jupiter
        bits(&[2, 5, 6, 9, 10, 11]),          // from Venus
        bits(&[3, 5, 6, 12]),                 // from Saturn
    ],
    // Venus
    [
        bits(&[8, 11, 12]),                   // from Sun
        bits(&[1, 2, 3, 4, 5, 8, 9, 11, 12]), // from Moon
        bits(&[3, 4, 6, 9, 11, 12]),          // from Mars
        bits(&[3, 5, 6, 9, 11]),              // from Mercury
        bits(&[5, 8, 9, 10, 11]),             // from Jupiter
        bits(&[1, 2, 3, 4, 5, 8, 9, 10, 11]), // from Venus
        bits(&[3, 4, 5, 8, 9, 10, 11]),       // from Saturn
    ],
    // Saturn
    [
        bits(&[1, 2, 4, 7, 8, 10, 11]), // from Sun
        bits(&[3, 6, 11]),              // from Moon
        bits(&[3, 5, 6, 10, 11, 12]),   // from Mars
        bits(&[6, 8, 9, 10, 11, 12]),   // from Mercury
        bits(&[5, 6, 11, 12]),          // from Jupiter
        bits(&[6, 11, 12]),             // from Venus
        bits(&[3, 5, 6, 11]),           // from Saturn
    ],
];

/// Chart-independent totals per native graha.
pub const CHART_TOTALS: [u8; 7] = [42, 45, 34, 47, 47, 44, 33];

/// Sarvashtakavarga grand total, the same for every chart.
pub const SARVA_TOTAL: u16 = 292;

const _: () = {
    let mut sum = 0u16;
    let mut i = 0;
    while i < CHART_TOTALS.len() {
        sum += CHART_TOTALS[i] as u16;
        i += 1;
    }
    assert!(sum == SARVA_TOTAL);
};

/// Whether `offset` (1..=12) is benefic for `native` counted from `reference`.
pub fn is_benefic_offset(native: Graha, reference: Graha, offset: u8) -> bool {
    let (n, r) = (native.index() as usize, reference.index() as usize);
    n < 7 && r < 7 && (1..=12).contains(&offset) && (BENEFIC[n][r] >> offset) & 1 == 1
}

// ---------------------------------------------------------------------------
// Bhinna Ashtakavarga
// ---------------------------------------------------------------------------

/// Benefic points of one native graha across the 12 rashis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AshtakavargaChart {
    pub planet: Graha,
    /// Points per rashi, Aries first (0..=7 each).
    pub sign_points: [u8; 12],
    pub total_points: u8,
}

/// Compute the chart of one native graha.
///
/// `graha_rashis` = rashi of each sapta graha, Sun..Saturn.
pub fn calculate_chart(native: Graha, graha_rashis: &[Rashi; 7]) -> AshtakavargaChart {
    let mut sign_points = [0u8; 12];
    for (rashi_idx, points) in sign_points.iter_mut().enumerate() {
        for reference in SAPTA_GRAHAS {
            let ref_idx = graha_rashis[reference.index() as usize].index() as usize;
            let offset = ((rashi_idx + 12 - ref_idx) % 12 + 1) as u8;
            if is_benefic_offset(native, reference, offset) {
                *points += 1;
            }
        }
    }
    AshtakavargaChart {
        planet: native,
        sign_points,
        total_points: sign_points.iter().sum(),
    }
}

/// Compute all 7 charts.
pub fn calculate_all_charts(graha_rashis: &[Rashi; 7]) -> [AshtakavargaChart; 7] {
    let charts = std::array::from_fn(|i| calculate_chart(SAPTA_GRAHAS[i], graha_rashis));
    debug_assert!(
        charts
            .iter()
            .zip(CHART_TOTALS)
            .all(|(c, total)| c.total_points == total)
    );
    charts
}

/// Compute all 7 charts from placed planets.
pub fn ashtakavarga_for(chart: &ChartPositions) -> [AshtakavargaChart; 7] {
    let rashis: [Rashi; 7] = std::array::from_fn(|i| chart.planets[i].sign);
    calculate_all_charts(&rashis)
}

// ---------------------------------------------------------------------------
// Sarvashtakavarga
// ---------------------------------------------------------------------------

/// Entry-wise sum of the seven charts (0..=49 each).
pub fn sarvashtakavarga(charts: &[AshtakavargaChart; 7]) -> [u8; 12] {
    let mut total = [0u8; 12];
    for chart in charts {
        for (t, p) in total.iter_mut().zip(chart.sign_points) {
            *t += p;
        }
    }
    total
}

/// Bucket a single cell: `≥6 Excellent, ≥4 Good, ≥3 Average, ≥2 Weak`,
/// else VeryWeak.
pub fn interpret_points(points: u8) -> StrengthLabel {
    match points {
        6.. => StrengthLabel::Excellent,
        4..=5 => StrengthLabel::Good,
        3 => StrengthLabel::Average,
        2 => StrengthLabel::Weak,
        _ => StrengthLabel::VeryWeak,
    }
}

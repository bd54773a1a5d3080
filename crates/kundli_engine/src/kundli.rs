//! Full chart computation: birth event in, [`Kundli`] out.
//!
//! Stages run leaves first: ephemeris positions and ascendant, placed chart,
//! then Shad Bala, Ashtakavarga and dosh over that chart, then the score.
//! Every stage after input validation is total.

use kundli_vedic::{
    AshtakavargaChart, ChartPositions, DoshAnalysis, Graha, PlanetPosition, Rashi, ShadBalaScore,
    StrengthLabel, analyze_dosh, ashtakavarga_for, ayanamsha_deg, calculate_shad_bala,
    house_cusps, interpret_points, is_daytime, kundli_score, sarvashtakavarga,
    sidereal_lagna_deg, strongest,
};
use serde::Serialize;

use crate::birth::BirthEvent;
use crate::config::KundliConfig;
use crate::error::KundliError;
use crate::positions::graha_sidereal_positions;

/// The complete chart with all derived analyses.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Kundli {
    pub birth_event: BirthEvent,
    /// Ascendant, placed planets and the D9 mapping.
    #[serde(flatten)]
    pub chart: ChartPositions,
    pub shad_bala: [ShadBalaScore; 7],
    pub ashtakavarga: [AshtakavargaChart; 7],
    pub sarvashtakavarga: [u8; 12],
    pub dosh_analysis: DoshAnalysis,
    /// Aggregate strength, 0..=100.
    pub kundli_score: u8,
}

impl Kundli {
    pub fn ascendant_longitude_deg(&self) -> f64 {
        self.chart.ascendant_longitude_deg
    }

    pub fn ascendant_sign(&self) -> Rashi {
        self.chart.ascendant_sign
    }

    /// Nine placed planets, canonical order.
    pub fn planets(&self) -> &[PlanetPosition; 9] {
        &self.chart.planets
    }

    /// Sidereal cusp longitudes, house 1 first.
    pub fn house_cusps(&self) -> [f64; 12] {
        house_cusps(self.chart.ascendant_longitude_deg)
    }

    pub fn position(&self, graha: Graha) -> &PlanetPosition {
        self.chart.position(graha)
    }

    pub fn navamsha(&self, graha: Graha) -> Rashi {
        self.chart.navamsha(graha)
    }

    /// D1 wheel grouping.
    pub fn planets_in_sign(&self, rashi: Rashi) -> Vec<Graha> {
        self.chart.planets_in_sign(rashi)
    }

    /// D9 wheel grouping.
    pub fn planets_in_navamsha(&self, rashi: Rashi) -> Vec<Graha> {
        self.chart.planets_in_navamsha(rashi)
    }

    /// The `n` strongest planets by Shad Bala, descending.
    pub fn strongest(&self, n: usize) -> Vec<ShadBalaScore> {
        strongest(&self.shad_bala, n)
    }

    /// Interpretation of the sarvashtakavarga cell for `rashi`.
    pub fn sarva_strength(&self, rashi: Rashi) -> StrengthLabel {
        interpret_points(self.sarvashtakavarga[rashi.index() as usize])
    }
}

/// Compute a Kundli with the default configuration.
pub fn compute_kundli(event: &BirthEvent) -> Result<Kundli, KundliError> {
    compute_kundli_with_config(event, &KundliConfig::default())
}

/// Compute a Kundli.
///
/// Fails only on invalid input: coordinates out of range or an instant the
/// ephemeris cannot evaluate.
pub fn compute_kundli_with_config(
    event: &BirthEvent,
    config: &KundliConfig,
) -> Result<Kundli, KundliError> {
    event.validate()?;
    let utc = event.utc_time();
    let jd = utc.jd();
    if !jd.is_finite() {
        return Err(KundliError::InvalidInstant(utc.to_string()));
    }

    let positions = graha_sidereal_positions(jd, config.node_mode)?;
    let ascendant = sidereal_lagna_deg(
        jd,
        event.latitude_deg,
        event.longitude_deg,
        ayanamsha_deg(jd),
        config.lagna_mode,
    );
    let chart = ChartPositions::from_longitudes(ascendant, &positions);

    let hour = config
        .kala_clock
        .hour(utc.fractional_hour(), event.longitude_deg);
    let shad_bala = calculate_shad_bala(&chart, is_daytime(hour));
    let ashtakavarga = ashtakavarga_for(&chart);
    let sarva = sarvashtakavarga(&ashtakavarga);
    let dosh_analysis = analyze_dosh(&chart);
    let kundli_score = kundli_score(&chart, &shad_bala, &dosh_analysis);

    Ok(Kundli {
        birth_event: event.clone(),
        chart,
        shad_bala,
        ashtakavarga,
        sarvashtakavarga: sarva,
        dosh_analysis,
        kundli_score,
    })
}

//! Pure Vedic chart math over sidereal longitudes.
//!
//! This crate provides:
//! - Graha, rashi and nakshatra tables with their lordships
//! - Ayanamsha, lagna (ascendant) and whole-sign houses
//! - Navamsha (D9) mapping and lunar node placement
//! - Shad Bala, Ashtakavarga, dosh diagnosis and the aggregate score
//!
//! Nothing here touches an ephemeris: callers supply longitudes and speeds.

pub mod amsha;
pub mod ashtakavarga;
pub mod ayanamsha;
pub mod bhava;
pub mod chart;
pub mod dosh;
pub mod graha;
pub mod graha_relationships;
pub mod lagna;
pub mod lunar_nodes;
pub mod nakshatra;
pub mod rashi;
pub mod score;
pub mod shadbala;
pub mod util;

pub use amsha::{NAVAMSHA_SPAN, navamsha_from_rashi_position, navamsha_rashi};
pub use ashtakavarga::{
    AshtakavargaChart, CHART_TOTALS, SARVA_TOTAL, ashtakavarga_for, calculate_all_charts,
    calculate_chart, interpret_points, sarvashtakavarga,
};
pub use ayanamsha::{ayanamsha_deg, tropical_to_sidereal};
pub use bhava::{house_cusps, house_number};
pub use chart::{ChartPositions, PlanetPosition};
pub use dosh::{DoshAnalysis, DoshFinding, DoshSeverity, MangalDosh, analyze_dosh};
pub use graha::{ALL_GRAHAS, Graha, SAPTA_GRAHAS, rashi_lord};
pub use lagna::{LagnaMode, sidereal_lagna_deg, tropical_lagna_deg};
pub use lunar_nodes::{
    FIXED_NODE_SPEED_DEG_PER_DAY, NodeMode, ketu_from_rahu, mean_rahu_deg, tropical_rahu_deg,
};
pub use nakshatra::{ALL_NAKSHATRAS_27, Nakshatra, NakshatraInfo, nakshatra_from_longitude};
pub use rashi::{ALL_RASHIS, Dms, Rashi, RashiInfo, deg_to_dms, rashi_from_longitude};
pub use score::{kundli_score, raw_score};
pub use shadbala::{
    KalaClock, ShadBalaScore, StrengthLabel, average_rupas, calculate_shad_bala, is_daytime,
    strongest,
};
pub use util::normalize_360;

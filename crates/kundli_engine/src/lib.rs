//! Vedic birth-chart (Kundli) computation.
//!
//! Takes a [`BirthEvent`] and produces a [`Kundli`]: sidereal positions of
//! the seven classical planets and the lunar nodes, ascendant and houses,
//! navamsha, Shad Bala, Ashtakavarga, dosh diagnosis and an aggregate score.
//!
//! The engine is pure and deterministic. It never logs and holds no state
//! between calls.

pub mod birth;
pub mod config;
pub mod error;
pub mod kundli;
pub mod positions;
pub mod report;

pub use birth::BirthEvent;
pub use config::KundliConfig;
pub use error::KundliError;
pub use kundli::{Kundli, compute_kundli, compute_kundli_with_config};
pub use positions::{graha_sidereal_longitudes, graha_sidereal_positions};
pub use report::{ChartContext, chart_context};

//! Bridge from the analytical ephemeris to sidereal graha positions.
//!
//! Queries all seven bodies at an epoch in one ephemeris pass, places the nodes, and converts
//! everything to sidereal longitudes with the epoch's own ayanamsha.

use kundli_ephem::{Body, all_tropical_longitudes};
use kundli_time::jd_to_centuries;
use kundli_vedic::util::signed_delta;
use kundli_vedic::{
    ALL_GRAHAS, FIXED_NODE_SPEED_DEG_PER_DAY, Graha, NodeMode, ayanamsha_deg, ketu_from_rahu,
    tropical_rahu_deg, tropical_to_sidereal,
};

use crate::error::KundliError;

/// Days between the two samples of the speed finite difference.
const SPEED_STEP_DAYS: f64 = 1.0;

/// Map a Graha to its ephemeris body. Nodes have none.
fn graha_to_body(graha: Graha) -> Option<Body> {
    match graha {
        Graha::Surya => Some(Body::Sun),
        Graha::Chandra => Some(Body::Moon),
        Graha::Mangal => Some(Body::Mars),
        Graha::Buddh => Some(Body::Mercury),
        Graha::Guru => Some(Body::Jupiter),
        Graha::Shukra => Some(Body::Venus),
        Graha::Shani => Some(Body::Saturn),
        Graha::Rahu | Graha::Ketu => None,
    }
}

/// Sidereal longitudes of all nine grahas, canonical order.
pub fn graha_sidereal_longitudes(jd: f64, node_mode: NodeMode) -> Result<[f64; 9], KundliError> {
    let aya = ayanamsha_deg(jd);
    let tropical = all_tropical_longitudes(jd)?;
    let rahu = tropical_to_sidereal(tropical_rahu_deg(jd_to_centuries(jd), node_mode), aya);

    let mut longitudes = [0.0f64; 9];
    for graha in ALL_GRAHAS {
        let idx = graha.index() as usize;
        longitudes[idx] = match graha_to_body(graha) {
            Some(body) => tropical_to_sidereal(tropical[body.index()], aya),
            None if graha == Graha::Rahu => rahu,
            None => ketu_from_rahu(rahu),
        };
    }
    Ok(longitudes)
}

/// Sidereal `(longitude, speed)` pairs of all nine grahas, canonical order.
///
/// Speed is the one-day backward difference of sidereal longitude, each
/// sample with its own ayanamsha, wrapped into [-180, 180). Fixed nodes
/// report their nominal speed instead.
pub fn graha_sidereal_positions(
    jd: f64,
    node_mode: NodeMode,
) -> Result<[(f64, f64); 9], KundliError> {
    let now = graha_sidereal_longitudes(jd, node_mode)?;
    let before = graha_sidereal_longitudes(jd - SPEED_STEP_DAYS, node_mode)?;

    Ok(std::array::from_fn(|i| {
        let speed = match (ALL_GRAHAS[i], node_mode) {
            (Graha::Rahu | Graha::Ketu, NodeMode::Fixed) => FIXED_NODE_SPEED_DEG_PER_DAY,
            _ => signed_delta(now[i], before[i]) / SPEED_STEP_DAYS,
        };
        (now[i], speed)
    }))
}

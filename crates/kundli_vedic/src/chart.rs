//! Chart assembly from sidereal longitudes.
//!
//! Turns nine (longitude, speed) pairs and an ascendant into placed planets:
//! sign, degree in sign, nakshatra and pada, whole-sign house, retrograde
//! flag and navamsha. No astronomy happens here.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::amsha::navamsha_rashi;
use crate::bhava::house_number;
use crate::graha::{ALL_GRAHAS, Graha};
use crate::nakshatra::{Nakshatra, nakshatra_from_longitude};
use crate::rashi::{Rashi, rashi_from_longitude};
use crate::util::normalize_360;

/// One placed planet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanetPosition {
    pub planet: Graha,
    pub sidereal_longitude_deg: f64,
    pub speed_deg_per_day: f64,
    pub sign: Rashi,
    pub degree_in_sign: f64,
    pub nakshatra: Nakshatra,
    pub nakshatra_lord: Graha,
    pub pada: u8,
    pub house: u8,
    pub is_retrograde: bool,
}

impl PlanetPosition {
    /// Place a planet relative to an ascendant.
    pub fn new(
        planet: Graha,
        sidereal_lon_deg: f64,
        speed_deg_per_day: f64,
        ascendant_deg: f64,
    ) -> Self {
        let lon = normalize_360(sidereal_lon_deg);
        let rashi = rashi_from_longitude(lon);
        let nak = nakshatra_from_longitude(lon);
        Self {
            planet,
            sidereal_longitude_deg: lon,
            speed_deg_per_day,
            sign: rashi.rashi,
            degree_in_sign: rashi.degrees_in_rashi,
            nakshatra: nak.nakshatra,
            nakshatra_lord: nak.lord,
            pada: nak.pada,
            house: house_number(lon, ascendant_deg),
            is_retrograde: speed_deg_per_day < 0.0,
        }
    }
}

/// All nine placed planets plus the ascendant and the D9 mapping.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartPositions {
    pub ascendant_longitude_deg: f64,
    pub ascendant_sign: Rashi,
    /// Canonical order Sun … Ketu.
    pub planets: [PlanetPosition; 9],
    #[serde(serialize_with = "serialize_by_graha")]
    pub navamsha_by_planet: [Rashi; 9],
}

impl ChartPositions {
    /// Assemble a chart from sidereal `(longitude, speed)` pairs in
    /// canonical graha order.
    pub fn from_longitudes(ascendant_deg: f64, bodies: &[(f64, f64); 9]) -> Self {
        let ascendant = normalize_360(ascendant_deg);
        let planets = std::array::from_fn(|i| {
            let (lon, speed) = bodies[i];
            PlanetPosition::new(ALL_GRAHAS[i], lon, speed, ascendant)
        });
        let navamsha_by_planet = std::array::from_fn(|i| navamsha_rashi(bodies[i].0));
        Self {
            ascendant_longitude_deg: ascendant,
            ascendant_sign: rashi_from_longitude(ascendant).rashi,
            planets,
            navamsha_by_planet,
        }
    }

    pub fn position(&self, graha: Graha) -> &PlanetPosition {
        &self.planets[graha.index() as usize]
    }

    pub fn navamsha(&self, graha: Graha) -> Rashi {
        self.navamsha_by_planet[graha.index() as usize]
    }

    /// The seven classical planets, Sun … Saturn.
    pub fn sapta(&self) -> &[PlanetPosition] {
        &self.planets[..7]
    }

    /// Planets whose D1 sign is `rashi`, in canonical order.
    pub fn planets_in_sign(&self, rashi: Rashi) -> Vec<Graha> {
        self.planets
            .iter()
            .filter(|p| p.sign == rashi)
            .map(|p| p.planet)
            .collect()
    }

    /// Planets whose D9 sign is `rashi`, in canonical order.
    pub fn planets_in_navamsha(&self, rashi: Rashi) -> Vec<Graha> {
        ALL_GRAHAS
            .iter()
            .copied()
            .filter(|g| self.navamsha(*g) == rashi)
            .collect()
    }
}

fn serialize_by_graha<S: Serializer>(
    signs: &[Rashi; 9],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(9))?;
    for (graha, sign) in ALL_GRAHAS.iter().zip(signs) {
        map.serialize_entry(graha, sign)?;
    }
    map.end()
}

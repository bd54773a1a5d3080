//! Nakshatra (lunar mansion) computation.
//!
//! The ecliptic circle is divided into 27 equal nakshatras of 13°20′, each
//! with 4 padas of 3°20′. Every nakshatra carries a Vimshottari lord; the
//! nine-lord sequence starting from Ketu repeats three times.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::graha::Graha;
use crate::util::normalize_360;

/// Span of one nakshatra: 360/27 = 13.3333... degrees.
pub const NAKSHATRA_SPAN_27: f64 = 360.0 / 27.0;

/// Span of one pada: 13.3333.../4 = 3.3333... degrees.
pub const PADA_SPAN: f64 = NAKSHATRA_SPAN_27 / 4.0;

/// Vimshottari lord sequence, starting at Ashwini.
pub const NAKSHATRA_LORD_SEQUENCE: [Graha; 9] = [
    Graha::Ketu,
    Graha::Shukra,
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Rahu,
    Graha::Guru,
    Graha::Shani,
    Graha::Buddh,
];

/// The 27 nakshatras from Ashwini to Revati.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Nakshatra {
    Ashwini,
    Bharani,
    Krittika,
    Rohini,
    Mrigashira,
    Ardra,
    Punarvasu,
    Pushya,
    Ashlesha,
    Magha,
    #[serde(rename = "Purva Phalguni")]
    PurvaPhalguni,
    #[serde(rename = "Uttara Phalguni")]
    UttaraPhalguni,
    Hasta,
    Chitra,
    Swati,
    Vishakha,
    Anuradha,
    Jyeshtha,
    Mula,
    #[serde(rename = "Purva Ashadha")]
    PurvaAshadha,
    #[serde(rename = "Uttara Ashadha")]
    UttaraAshadha,
    Shravana,
    Dhanishta,
    Shatabhisha,
    #[serde(rename = "Purva Bhadrapada")]
    PurvaBhadrapada,
    #[serde(rename = "Uttara Bhadrapada")]
    UttaraBhadrapada,
    Revati,
}

/// All 27 nakshatras in order (0 = Ashwini, 26 = Revati).
pub const ALL_NAKSHATRAS_27: [Nakshatra; 27] = [
    Nakshatra::Ashwini,
    Nakshatra::Bharani,
    Nakshatra::Krittika,
    Nakshatra::Rohini,
    Nakshatra::Mrigashira,
    Nakshatra::Ardra,
    Nakshatra::Punarvasu,
    Nakshatra::Pushya,
    Nakshatra::Ashlesha,
    Nakshatra::Magha,
    Nakshatra::PurvaPhalguni,
    Nakshatra::UttaraPhalguni,
    Nakshatra::Hasta,
    Nakshatra::Chitra,
    Nakshatra::Swati,
    Nakshatra::Vishakha,
    Nakshatra::Anuradha,
    Nakshatra::Jyeshtha,
    Nakshatra::Mula,
    Nakshatra::PurvaAshadha,
    Nakshatra::UttaraAshadha,
    Nakshatra::Shravana,
    Nakshatra::Dhanishta,
    Nakshatra::Shatabhisha,
    Nakshatra::PurvaBhadrapada,
    Nakshatra::UttaraBhadrapada,
    Nakshatra::Revati,
];

impl Nakshatra {
    /// Display name of the nakshatra.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ashwini => "Ashwini",
            Self::Bharani => "Bharani",
            Self::Krittika => "Krittika",
            Self::Rohini => "Rohini",
            Self::Mrigashira => "Mrigashira",
            Self::Ardra => "Ardra",
            Self::Punarvasu => "Punarvasu",
            Self::Pushya => "Pushya",
            Self::Ashlesha => "Ashlesha",
            Self::Magha => "Magha",
            Self::PurvaPhalguni => "Purva Phalguni",
            Self::UttaraPhalguni => "Uttara Phalguni",
            Self::Hasta => "Hasta",
            Self::Chitra => "Chitra",
            Self::Swati => "Swati",
            Self::Vishakha => "Vishakha",
            Self::Anuradha => "Anuradha",
            Self::Jyeshtha => "Jyeshtha",
            Self::Mula => "Mula",
            Self::PurvaAshadha => "Purva Ashadha",
            Self::UttaraAshadha => "Uttara Ashadha",
            Self::Shravana => "Shravana",
            Self::Dhanishta => "Dhanishta",
            Self::Shatabhisha => "Shatabhisha",
            Self::PurvaBhadrapada => "Purva Bhadrapada",
            Self::UttaraBhadrapada => "Uttara Bhadrapada",
            Self::Revati => "Revati",
        }
    }

    /// 0-based index (0 = Ashwini).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// 1-based nakshatra number (1 = Ashwini, 27 = Revati).
    pub const fn number(self) -> u8 {
        self.index() + 1
    }

    /// Vimshottari lord.
    pub const fn lord(self) -> Graha {
        NAKSHATRA_LORD_SEQUENCE[(self.index() % 9) as usize]
    }

    pub const fn all() -> &'static [Nakshatra; 27] {
        &ALL_NAKSHATRAS_27
    }
}

impl Display for Nakshatra {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Nakshatra position of a sidereal longitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NakshatraInfo {
    pub nakshatra: Nakshatra,
    /// Lord of the nakshatra.
    pub lord: Graha,
    /// Pada (quarter) within the nakshatra, 1-4.
    pub pada: u8,
    /// Decimal degrees within the nakshatra [0.0, 13.333...).
    pub degrees_in_nakshatra: f64,
}

/// Determine nakshatra and pada from sidereal ecliptic longitude.
pub fn nakshatra_from_longitude(sidereal_lon_deg: f64) -> NakshatraInfo {
    let lon = normalize_360(sidereal_lon_deg);
    let nak_idx = ((lon / NAKSHATRA_SPAN_27).floor() as u8).min(26);
    let degrees_in_nakshatra = lon - (nak_idx as f64) * NAKSHATRA_SPAN_27;
    let pada_idx = (degrees_in_nakshatra / PADA_SPAN).floor() as u8;
    let nakshatra = ALL_NAKSHATRAS_27[nak_idx as usize];

    NakshatraInfo {
        nakshatra,
        lord: nakshatra.lord(),
        pada: pada_idx.min(3) + 1,
        degrees_in_nakshatra,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lords_repeat_every_nine() {
        assert_eq!(Nakshatra::Ashwini.lord(), Graha::Ketu);
        assert_eq!(Nakshatra::Magha.lord(), Graha::Ketu);
        assert_eq!(Nakshatra::Mula.lord(), Graha::Ketu);
        assert_eq!(Nakshatra::Ardra.lord(), Graha::Rahu);
        assert_eq!(Nakshatra::Dhanishta.lord(), Graha::Mangal);
        assert_eq!(Nakshatra::Revati.lord(), Graha::Buddh);
        assert_eq!(Nakshatra::UttaraAshadha.lord(), Graha::Surya);
    }

    #[test]
    fn ashwini_first_pada() {
        let n = nakshatra_from_longitude(0.0);
        assert_eq!(n.nakshatra, Nakshatra::Ashwini);
        assert_eq!(n.pada, 1);
    }

    #[test]
    fn revati_last_pada() {
        let n = nakshatra_from_longitude(359.9999);
        assert_eq!(n.nakshatra, Nakshatra::Revati);
        assert_eq!(n.pada, 4);
    }

    #[test]
    fn boundary_between_nakshatras() {
        let n = nakshatra_from_longitude(NAKSHATRA_SPAN_27);
        assert_eq!(n.nakshatra, Nakshatra::Bharani);
        assert_eq!(n.pada, 1);
        let n = nakshatra_from_longitude(NAKSHATRA_SPAN_27 - 1e-9);
        assert_eq!(n.nakshatra, Nakshatra::Ashwini);
        assert_eq!(n.pada, 4);
    }

    #[test]
    fn uttara_ashadha_in_capricorn() {
        // 271.3° = 1°18' Capricorn
        let n = nakshatra_from_longitude(271.3);
        assert_eq!(n.nakshatra, Nakshatra::UttaraAshadha);
        assert_eq!(n.nakshatra.number(), 21);
        assert_eq!(n.pada, 2);
    }

    #[test]
    fn numbers_are_one_based() {
        for (i, n) in ALL_NAKSHATRAS_27.iter().enumerate() {
            assert_eq!(n.number() as usize, i + 1);
        }
    }
}

//! Integration tests for sign, nakshatra and navamsha lookups.

use kundli_vedic::{
    ALL_RASHIS, Graha, Nakshatra, Rashi, deg_to_dms, house_cusps, nakshatra_from_longitude,
    navamsha_rashi, rashi_from_longitude,
};

#[test]
fn rashi_sweep_all_12() {
    for (i, r) in ALL_RASHIS.iter().enumerate() {
        let lon = i as f64 * 30.0 + 15.0;
        let info = rashi_from_longitude(lon);
        assert_eq!(info.rashi, *r, "rashi at {lon} deg");
        assert_eq!(info.rashi.number(), i as u8 + 1);
    }
}

#[test]
fn western_labels_in_canonical_order() {
    let names: Vec<&str> = ALL_RASHIS.iter().map(|r| r.western_name()).collect();
    assert_eq!(
        names,
        [
            "Aries",
            "Taurus",
            "Gemini",
            "Cancer",
            "Leo",
            "Virgo",
            "Libra",
            "Scorpio",
            "Sagittarius",
            "Capricorn",
            "Aquarius",
            "Pisces"
        ]
    );
}

#[test]
fn capricorn_sun_in_uttara_ashadha() {
    // 271.31° sidereal: 1°18' Capricorn, second pada of Uttara Ashadha.
    let info = rashi_from_longitude(271.31);
    assert_eq!(info.rashi, Rashi::Makara);
    assert_eq!(info.dms.degrees, 1);
    assert_eq!(info.dms.minutes, 18);
    let nak = nakshatra_from_longitude(271.31);
    assert_eq!(nak.nakshatra, Nakshatra::UttaraAshadha);
    assert_eq!(nak.nakshatra.name(), "Uttara Ashadha");
    assert_eq!(nak.lord, Graha::Surya);
    assert_eq!(nak.pada, 2);
}

#[test]
fn nakshatra_boundaries() {
    let span = 360.0 / 27.0;
    assert_eq!(nakshatra_from_longitude(span - 1e-9).nakshatra, Nakshatra::Ashwini);
    assert_eq!(nakshatra_from_longitude(span + 1e-9).nakshatra, Nakshatra::Bharani);
    assert_eq!(nakshatra_from_longitude(359.999_999).nakshatra, Nakshatra::Revati);
    assert_eq!(nakshatra_from_longitude(359.999_999).pada, 4);
}

#[test]
fn navamsha_cycles_by_element() {
    // First piece of Aries, Leo, Sagittarius is Aries; of Taurus is Capricorn.
    assert_eq!(navamsha_rashi(1.0), Rashi::Mesha);
    assert_eq!(navamsha_rashi(121.0), Rashi::Mesha);
    assert_eq!(navamsha_rashi(241.0), Rashi::Mesha);
    assert_eq!(navamsha_rashi(31.0), Rashi::Makara);
    // Last piece of Pisces: (11*9 + 8) mod 12 = 11.
    assert_eq!(navamsha_rashi(359.9), Rashi::Meena);
}

#[test]
fn dms_display() {
    assert_eq!(deg_to_dms(15.5).to_string(), "15°30'00\"");
}

#[test]
fn cusps_wrap_past_pisces() {
    let cusps = house_cusps(326.474);
    assert!((cusps[0] - 326.474).abs() < 1e-9);
    assert!((cusps[1] - 356.474).abs() < 1e-9);
    assert!((cusps[2] - 26.474).abs() < 1e-9);
}

//! Keplerian orbital elements and heliocentric positions.
//!
//! Elements and their per-century rates are the JPL "Approximate Positions
//! of the Planets" table (Standish, valid 1800 AD - 2050 AD), referred to the
//! J2000 ecliptic and equinox. Distances are in AU.

use crate::error::EphemError;

/// One element and its rate per Julian century.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementRate {
    pub at_epoch: f64,
    pub per_century: f64,
}

impl ElementRate {
    const fn new(at_epoch: f64, per_century: f64) -> Self {
        Self {
            at_epoch,
            per_century,
        }
    }

    /// Value `t` Julian centuries after J2000.0.
    #[inline]
    pub fn at(self, t: f64) -> f64 {
        self.at_epoch + self.per_century * t
    }
}

/// Mean orbital elements of one orbit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalElements {
    pub name: &'static str,
    /// Semi-major axis (AU).
    pub a: ElementRate,
    /// Eccentricity.
    pub e: ElementRate,
    /// Inclination (deg).
    pub i: ElementRate,
    /// Mean longitude (deg).
    pub mean_longitude: ElementRate,
    /// Longitude of perihelion (deg).
    pub perihelion: ElementRate,
    /// Longitude of the ascending node (deg).
    pub node: ElementRate,
}

pub const MERCURY: OrbitalElements = OrbitalElements {
    name: "Mercury",
    a: ElementRate::new(0.387_099_27, 0.000_000_37),
    e: ElementRate::new(0.205_635_93, 0.000_019_06),
    i: ElementRate::new(7.004_979_02, -0.005_947_49),
    mean_longitude: ElementRate::new(252.250_323_50, 149_472.674_111_75),
    perihelion: ElementRate::new(77.457_796_28, 0.160_476_89),
    node: ElementRate::new(48.330_765_93, -0.125_340_81),
};

pub const VENUS: OrbitalElements = OrbitalElements {
    name: "Venus",
    a: ElementRate::new(0.723_335_66, 0.000_003_90),
    e: ElementRate::new(0.006_776_72, -0.000_041_07),
    i: ElementRate::new(3.394_676_05, -0.000_788_90),
    mean_longitude: ElementRate::new(181.979_099_50, 58_517.815_387_29),
    perihelion: ElementRate::new(131.602_467_18, 0.002_683_29),
    node: ElementRate::new(76.679_842_55, -0.277_694_18),
};

/// Earth-Moon barycenter, used as the Earth.
pub const EARTH_MOON_BARYCENTER: OrbitalElements = OrbitalElements {
    name: "EMB",
    a: ElementRate::new(1.000_002_61, 0.000_005_62),
    e: ElementRate::new(0.016_711_23, -0.000_043_92),
    i: ElementRate::new(-0.000_015_31, -0.012_946_68),
    mean_longitude: ElementRate::new(100.464_571_66, 35_999.372_449_81),
    perihelion: ElementRate::new(102.937_681_93, 0.323_273_64),
    node: ElementRate::new(0.0, 0.0),
};

pub const MARS: OrbitalElements = OrbitalElements {
    name: "Mars",
    a: ElementRate::new(1.523_710_34, 0.000_018_47),
    e: ElementRate::new(0.093_394_10, 0.000_078_82),
    i: ElementRate::new(1.849_691_42, -0.008_131_31),
    mean_longitude: ElementRate::new(-4.553_432_05, 19_140.302_684_99),
    perihelion: ElementRate::new(-23.943_629_59, 0.444_410_88),
    node: ElementRate::new(49.559_538_91, -0.292_573_43),
};

pub const JUPITER: OrbitalElements = OrbitalElements {
    name: "Jupiter",
    a: ElementRate::new(5.202_887_00, -0.000_116_07),
    e: ElementRate::new(0.048_386_24, -0.000_132_53),
    i: ElementRate::new(1.304_396_95, -0.001_837_14),
    mean_longitude: ElementRate::new(34.396_440_51, 3_034.746_127_75),
    perihelion: ElementRate::new(14.728_479_83, 0.212_526_68),
    node: ElementRate::new(100.473_909_09, 0.204_691_06),
};

pub const SATURN: OrbitalElements = OrbitalElements {
    name: "Saturn",
    a: ElementRate::new(9.536_675_94, -0.001_250_60),
    e: ElementRate::new(0.053_861_79, -0.000_509_91),
    i: ElementRate::new(2.485_991_87, 0.001_936_09),
    mean_longitude: ElementRate::new(49.954_244_23, 1_222.493_622_01),
    perihelion: ElementRate::new(92.598_878_31, -0.418_972_16),
    node: ElementRate::new(113.662_424_48, -0.288_677_94),
};

const KEPLER_TOLERANCE: f64 = 1e-12;
const KEPLER_MAX_ITER: usize = 30;

/// Solve Kepler's equation `E − e·sin E = M` by Newton iteration.
///
/// `mean_anomaly` in radians. Returns the eccentric anomaly in radians.
pub fn solve_kepler(mean_anomaly: f64, e: f64) -> Option<f64> {
    let mut ecc = mean_anomaly + e * mean_anomaly.sin();
    for _ in 0..KEPLER_MAX_ITER {
        let delta = (ecc - e * ecc.sin() - mean_anomaly) / (1.0 - e * ecc.cos());
        ecc -= delta;
        if delta.abs() < KEPLER_TOLERANCE {
            return Some(ecc);
        }
    }
    None
}

/// Heliocentric position in the J2000 ecliptic frame (AU).
///
/// `t` = Julian centuries since J2000.0.
pub fn heliocentric_position(elements: &OrbitalElements, t: f64) -> Result<[f64; 3], EphemError> {
    let a = elements.a.at(t);
    let e = elements.e.at(t);
    let i = elements.i.at(t).to_radians();
    let l = elements.mean_longitude.at(t);
    let varpi = elements.perihelion.at(t);
    let node = elements.node.at(t);

    // Mean anomaly reduced to (-180, 180]
    let mut m = (l - varpi).rem_euclid(360.0);
    if m > 180.0 {
        m -= 360.0;
    }
    let ecc = solve_kepler(m.to_radians(), e).ok_or(EphemError::KeplerDivergence {
        body: elements.name,
        eccentricity: e,
    })?;

    // Orbital plane, x toward perihelion
    let xp = a * (ecc.cos() - e);
    let yp = a * (1.0 - e * e).sqrt() * ecc.sin();

    let omega = (varpi - node).to_radians();
    let node = node.to_radians();
    let (so, co) = omega.sin_cos();
    let (sn, cn) = node.sin_cos();
    let (si, ci) = i.sin_cos();

    Ok([
        (co * cn - so * sn * ci) * xp + (-so * cn - co * sn * ci) * yp,
        (co * sn + so * cn * ci) * xp + (-so * sn + co * cn * ci) * yp,
        (so * si) * xp + (co * si) * yp,
    ])
}

use thiserror::Error;

/// Ephemeris evaluation errors.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum EphemError {
    #[error("epoch is not finite: {jd}")]
    NonFiniteEpoch { jd: f64 },
    #[error("kepler solver did not converge for {body} (e = {eccentricity})")]
    KeplerDivergence { body: &'static str, eccentricity: f64 },
}

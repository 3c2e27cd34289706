use thiserror::Error;

#[derive(Error, Debug)]
pub enum SkyMapError {
    #[error("Kepler solver did not converge after {iterations} iterations (e = {eccentricity})")]
    KeplerNonConvergence { eccentricity: f64, iterations: usize },

    #[error("Unbound or invalid orbit: eccentricity {0} is outside (-1, 1)")]
    UnboundOrbit(f64),

    #[error("Invalid calendar date: {0}")]
    InvalidDate(String),

    #[error("Unable to read the system clock: {0}")]
    Clock(String),

    #[error("Invalid observer: {0}")]
    InvalidObserver(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl From<toml::de::Error> for SkyMapError {
    fn from(err: toml::de::Error) -> Self {
        SkyMapError::Config(err.to_string())
    }
}

impl PartialEq for SkyMapError {
    fn eq(&self, other: &Self) -> bool {
        use SkyMapError::*;
        match (self, other) {
            (
                KeplerNonConvergence {
                    eccentricity: e1,
                    iterations: i1,
                },
                KeplerNonConvergence {
                    eccentricity: e2,
                    iterations: i2,
                },
            ) => e1 == e2 && i1 == i2,
            (UnboundOrbit(a), UnboundOrbit(b)) => a == b,
            (InvalidDate(a), InvalidDate(b)) => a == b,
            (Clock(a), Clock(b)) => a == b,
            (InvalidObserver(a), InvalidObserver(b)) => a == b,
            (Config(a), Config(b)) => a == b,

            _ => false,
        }
    }
}

use thiserror::Error;

/// Errors raised while validating a building configuration.
///
/// All variants are construction-time failures. Once an environment has
/// been built, the simulation itself never produces errors: invalid
/// actions are no-ops and passenger losses are reward components.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("a building needs at least 2 floors, got {0}")]
    TooFewFloors(usize),

    #[error("a building needs at least one elevator")]
    NoElevators,

    #[error("elevator {index}: floor range {min}..={max} is not a valid sub-range of 0..={top}")]
    ElevatorRange {
        index: usize,
        min: usize,
        max: usize,
        top: usize,
    },

    #[error("elevator {index}: capacity must be positive")]
    ZeroCapacity { index: usize },

    #[error("elevator {index}: start floor {start} is outside its range {min}..={max}")]
    StartFloorOutOfRange {
        index: usize,
        start: usize,
        min: usize,
        max: usize,
    },

    #[error("expected {expected} per-floor queue capacities, got {got}")]
    QueueCapacityCount { expected: usize, got: usize },

    #[error("expected {expected} per-floor arrival rates, got {got}")]
    ArrivalRateCount { expected: usize, got: usize },

    #[error("floor {floor}: arrival rate {rate} must be finite and non-negative")]
    InvalidArrivalRate { floor: usize, rate: f64 },

    #[error("expected {expected} destination distributions, got {got}")]
    DestinationRowCount { expected: usize, got: usize },

    #[error("floor {floor}: destination distribution has {got} entries, expected {expected}")]
    DestinationRowLength {
        floor: usize,
        expected: usize,
        got: usize,
    },

    #[error("floor {floor}: destination probability for floor {dest} must be finite and non-negative")]
    InvalidDestinationProbability { floor: usize, dest: usize },

    #[error("floor {floor}: probability of travelling to the same floor must be zero")]
    SelfDestination { floor: usize },

    #[error("floor {floor}: destination probabilities sum to {sum}, expected 1")]
    DestinationSum { floor: usize, sum: f64 },
}

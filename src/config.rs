//! Building and episode configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::arrivals::ArrivalProcess;
use crate::error::ConfigError;
use crate::reward::RewardWeights;

/// Which encoding [`crate::environment::Environment`] hands back to the
/// agent each step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ObservationMode {
    /// Named button matrices and floor positions.
    #[default]
    Structured,
    /// A single flat 0/1 vector in a fixed field order.
    Flattened,
}

/// Static parameters of a single elevator.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ElevatorConfig {
    /// Lowest floor this car can reach.
    pub min_floor: usize,
    /// Highest floor this car can reach.
    pub max_floor: usize,
    /// Maximum passengers aboard at once. Must be positive.
    pub capacity: usize,
    /// Floor the car occupies at episode start.
    pub start_floor: usize,
}

impl ElevatorConfig {
    /// A car serving every floor of a `num_floors` building, starting at
    /// the ground floor.
    pub fn full_range(num_floors: usize, capacity: usize) -> Self {
        Self {
            min_floor: 0,
            max_floor: num_floors.saturating_sub(1),
            capacity,
            start_floor: 0,
        }
    }
}

/// Complete configuration of the simulated building and its episode
/// policy.
///
/// `validate` is the single gate for every construction-time rule; a
/// config that passes it builds a working environment, and one that
/// fails is reported as a [`ConfigError`] rather than silently patched.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EnvConfig {
    /// Number of floors, ground floor is 0.
    pub num_floors: usize,
    /// The elevator fleet. Vector order is also action-execution order.
    pub elevators: Vec<ElevatorConfig>,
    /// Queue capacity per floor, shared by the up and down queues.
    pub queue_capacity: Vec<usize>,
    /// Poisson arrival rate per floor.
    pub arrival_rates: Vec<f64>,
    /// Per-floor destination distribution over all floors.
    pub destination_probs: Vec<Vec<f64>>,
    /// Steps a passenger waits in a queue before giving up.
    pub max_wait: u32,
    /// Reward component weights.
    pub weights: RewardWeights,
    /// Observation encoding handed to the agent.
    pub observation_mode: ObservationMode,
    /// Step count after which episodes report done. `None` runs forever.
    pub episode_horizon: Option<u32>,
}

impl EnvConfig {
    /// A ready-to-run configuration: full-range elevators of capacity 10
    /// starting at the ground floor, per-floor queues of 20, a 50-step
    /// wait limit, and the default arrival pattern.
    pub fn new(num_floors: usize, num_elevators: usize) -> Self {
        let (arrival_rates, destination_probs) =
            ArrivalProcess::default_params(num_elevators, num_floors);
        Self {
            num_floors,
            elevators: vec![ElevatorConfig::full_range(num_floors, 10); num_elevators],
            queue_capacity: vec![20; num_floors],
            arrival_rates,
            destination_probs,
            max_wait: 50,
            weights: RewardWeights::default(),
            observation_mode: ObservationMode::default(),
            episode_horizon: None,
        }
    }

    pub fn num_elevators(&self) -> usize {
        self.elevators.len()
    }

    /// Checks every construction-time rule.
    ///
    /// Failures are fatal configuration errors; nothing here is ever
    /// corrected silently.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_floors < 2 {
            return Err(ConfigError::TooFewFloors(self.num_floors));
        }
        if self.elevators.is_empty() {
            return Err(ConfigError::NoElevators);
        }

        let top = self.num_floors - 1;
        for (index, car) in self.elevators.iter().enumerate() {
            if car.min_floor > car.max_floor || car.max_floor > top {
                return Err(ConfigError::ElevatorRange {
                    index,
                    min: car.min_floor,
                    max: car.max_floor,
                    top,
                });
            }
            if car.capacity == 0 {
                return Err(ConfigError::ZeroCapacity { index });
            }
            if car.start_floor < car.min_floor || car.start_floor > car.max_floor {
                return Err(ConfigError::StartFloorOutOfRange {
                    index,
                    start: car.start_floor,
                    min: car.min_floor,
                    max: car.max_floor,
                });
            }
        }

        if self.queue_capacity.len() != self.num_floors {
            return Err(ConfigError::QueueCapacityCount {
                expected: self.num_floors,
                got: self.queue_capacity.len(),
            });
        }

        ArrivalProcess::validate(self.num_floors, &self.arrival_rates, &self.destination_probs)
    }
}

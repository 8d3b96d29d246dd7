//! liftgym - a turn-based multi-elevator control simulation for
//! reinforcement-learning agents.
//!
//! One agent action per elevator per timestep drives a small
//! discrete-event core: a seeded Poisson process delivers passengers to
//! bounded per-floor queues, elevators move, load, and unload under an
//! agent's control, and every step reports a weighted scalar reward plus
//! the raw component counts behind it.
//!
//! The crate exposes the standard step/reset contract through
//! [`Environment`]; everything an agent observes is button-granular, and
//! the same seed, configuration, and action sequence always reproduce
//! the identical trajectory.

pub mod arrivals;
pub mod building;
pub mod config;
pub mod elevator;
pub mod environment;
pub mod error;
pub mod metrics;
pub mod observation;
pub mod passenger;
pub mod queue;
pub mod reward;
pub mod types;

pub use arrivals::ArrivalProcess;
pub use building::Building;
pub use config::{ElevatorConfig, EnvConfig, ObservationMode};
pub use elevator::Elevator;
pub use environment::{Environment, StepResult};
pub use error::ConfigError;
pub use metrics::EpisodeMetrics;
pub use observation::{Observation, StructuredObservation};
pub use passenger::Passenger;
pub use queue::FloorQueue;
pub use reward::{RewardBreakdown, RewardWeights};
pub use types::{Action, Direction};

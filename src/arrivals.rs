//! Stochastic passenger arrivals.
//!
//! Each timestep, every floor draws an arrival count from a Poisson
//! distribution parameterised by that floor's rate, and every arrival
//! draws a destination from the floor's categorical destination
//! distribution. All randomness flows through a single seeded generator
//! owned by the process, so a trajectory is fully reproducible from its
//! seed.

use rand::distributions::{Distribution, WeightedIndex};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::Poisson;

use crate::error::ConfigError;
use crate::passenger::Passenger;

/// Tolerance when checking that a destination distribution sums to one.
const SUM_TOLERANCE: f64 = 1e-9;

/// Destination probability mass placed on the ground floor by the
/// default parameters for every non-ground floor.
const GROUND_DEST_PROB: f64 = 0.8;

/// Generates new passengers each timestep from per-floor arrival rates
/// and destination distributions.
///
/// The parameters are validated once, at construction. `generate` never
/// fails; a floor with rate zero simply produces no arrivals.
#[derive(Debug, Clone)]
pub struct ArrivalProcess {
    num_floors: usize,
    arrival_rates: Vec<f64>,
    max_wait: u32,
    /// Poisson sampler per floor; `None` for rate-zero floors.
    count_samplers: Vec<Option<Poisson<f64>>>,
    /// Categorical destination sampler per floor.
    dest_samplers: Vec<WeightedIndex<f64>>,
    rng: StdRng,
    next_id: u64,
}

impl ArrivalProcess {
    /// Builds an arrival process from validated parameters and a seed.
    ///
    /// # Arguments
    ///
    /// * `num_floors` - Number of floors in the building
    /// * `arrival_rates` - Poisson rate per floor, one entry per floor
    /// * `destination_probs` - Per-floor destination distribution; each
    ///   row must sum to one and put zero mass on its own floor
    /// * `max_wait` - Queue-wait limit stamped onto every new passenger
    /// * `seed` - Seed for the process-owned random generator
    pub fn new(
        num_floors: usize,
        arrival_rates: Vec<f64>,
        destination_probs: Vec<Vec<f64>>,
        max_wait: u32,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        Self::validate(num_floors, &arrival_rates, &destination_probs)?;

        let mut count_samplers = Vec::with_capacity(num_floors);
        for (floor, &rate) in arrival_rates.iter().enumerate() {
            if rate > 0.0 {
                let sampler = Poisson::new(rate)
                    .map_err(|_| ConfigError::InvalidArrivalRate { floor, rate })?;
                count_samplers.push(Some(sampler));
            } else {
                count_samplers.push(None);
            }
        }

        let mut dest_samplers = Vec::with_capacity(num_floors);
        for (floor, row) in destination_probs.iter().enumerate() {
            let sampler = WeightedIndex::new(row.iter().cloned()).map_err(|_| {
                ConfigError::DestinationSum {
                    floor,
                    sum: row.iter().sum(),
                }
            })?;
            dest_samplers.push(sampler);
        }

        Ok(Self {
            num_floors,
            arrival_rates,
            max_wait,
            count_samplers,
            dest_samplers,
            rng: StdRng::seed_from_u64(seed),
            next_id: 0,
        })
    }

    /// Checks arrival parameters without building anything.
    ///
    /// Shared by [`ArrivalProcess::new`] and configuration validation so
    /// that a malformed distribution surfaces at construction or reset
    /// time, never during a step.
    pub fn validate(
        num_floors: usize,
        arrival_rates: &[f64],
        destination_probs: &[Vec<f64>],
    ) -> Result<(), ConfigError> {
        if arrival_rates.len() != num_floors {
            return Err(ConfigError::ArrivalRateCount {
                expected: num_floors,
                got: arrival_rates.len(),
            });
        }
        for (floor, &rate) in arrival_rates.iter().enumerate() {
            if !rate.is_finite() || rate < 0.0 {
                return Err(ConfigError::InvalidArrivalRate { floor, rate });
            }
        }

        if destination_probs.len() != num_floors {
            return Err(ConfigError::DestinationRowCount {
                expected: num_floors,
                got: destination_probs.len(),
            });
        }
        for (floor, row) in destination_probs.iter().enumerate() {
            if row.len() != num_floors {
                return Err(ConfigError::DestinationRowLength {
                    floor,
                    expected: num_floors,
                    got: row.len(),
                });
            }
            for (dest, &p) in row.iter().enumerate() {
                if !p.is_finite() || p < 0.0 {
                    return Err(ConfigError::InvalidDestinationProbability { floor, dest });
                }
            }
            if row[floor] != 0.0 {
                return Err(ConfigError::SelfDestination { floor });
            }
            let sum: f64 = row.iter().sum();
            if (sum - 1.0).abs() > SUM_TOLERANCE {
                return Err(ConfigError::DestinationSum { floor, sum });
            }
        }

        Ok(())
    }

    /// Default arrival parameters for a building.
    ///
    /// Most traffic enters at the ground floor and spreads evenly over
    /// the upper floors; each upper floor produces a trickle of arrivals
    /// heading mostly back to the ground floor, with the residual mass
    /// spread evenly over the other upper floors. Rates scale with the
    /// number of elevators so the default load tracks fleet size.
    ///
    /// Returns `(arrival_rates, destination_probs)` sized `num_floors`
    /// and `num_floors x num_floors`.
    pub fn default_params(num_elevators: usize, num_floors: usize) -> (Vec<f64>, Vec<Vec<f64>>) {
        if num_floors == 0 {
            return (Vec::new(), Vec::new());
        }
        let ground_rate = 0.5 * num_elevators as f64;
        let other_rate = ground_rate / num_floors as f64;

        let mut arrival_rates = vec![ground_rate];
        arrival_rates.resize(num_floors, other_rate);

        let mut destination_probs = Vec::with_capacity(num_floors);

        // Degenerate floor counts still produce a vector here; they are
        // rejected later by `validate`.
        let uniform_up = 1.0 / num_floors.saturating_sub(1).max(1) as f64;
        let mut ground_row = vec![uniform_up; num_floors];
        ground_row[0] = 0.0;
        destination_probs.push(ground_row);

        for floor in 1..num_floors {
            let mut row = vec![0.0; num_floors];
            if num_floors == 2 {
                // Only one possible destination from the upper floor.
                row[0] = 1.0;
            } else {
                let residual = (1.0 - GROUND_DEST_PROB) / (num_floors - 2) as f64;
                for (dest, slot) in row.iter_mut().enumerate() {
                    *slot = if dest == 0 {
                        GROUND_DEST_PROB
                    } else if dest == floor {
                        0.0
                    } else {
                        residual
                    };
                }
            }
            destination_probs.push(row);
        }

        (arrival_rates, destination_probs)
    }

    /// Produces this step's new passengers across all floors.
    ///
    /// Zero arrivals on every floor is a perfectly normal outcome;
    /// higher rates can yield several simultaneous arrivals on a floor.
    pub fn generate(&mut self, step: u32) -> Vec<Passenger> {
        let mut passengers = Vec::new();

        for floor in 0..self.num_floors {
            let Some(sampler) = &self.count_samplers[floor] else {
                continue;
            };
            let count = sampler.sample(&mut self.rng) as u64;

            for _ in 0..count {
                let destination = self.dest_samplers[floor].sample(&mut self.rng);
                let id = self.next_id;
                self.next_id += 1;
                passengers.push(Passenger::new(id, step, floor, destination, self.max_wait));
            }
        }

        passengers
    }

    /// Restores the generator to its episode-start state under `seed`.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
        self.next_id = 0;
    }

    pub fn num_floors(&self) -> usize {
        self.num_floors
    }

    pub fn arrival_rates(&self) -> &[f64] {
        &self.arrival_rates
    }
}

//! The step/reset adapter consumed by an external learning agent.

use tracing::debug;

use crate::building::Building;
use crate::config::{EnvConfig, ObservationMode};
use crate::error::ConfigError;
use crate::observation::{Observation, StructuredObservation};
use crate::reward::RewardBreakdown;
use crate::types::Action;

/// Result of a single environment step.
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    /// The post-step observation, in the configured encoding.
    pub observation: Observation,
    /// Weighted scalar reward for this step.
    pub reward: f64,
    /// True once the configured episode horizon has been reached.
    pub done: bool,
    /// Completed timesteps this episode.
    pub time_step: u32,
    /// Raw component counts behind `reward`, for diagnostics.
    pub components: RewardBreakdown,
}

/// The turn-based elevator control environment.
///
/// Wraps a [`Building`] behind the standard step/reset contract: one
/// action per elevator per step, an encoded observation back, a scalar
/// reward, and a `done` flag driven purely by the configured episode
/// horizon. The same seed, configuration, and action sequence always
/// reproduce the identical trajectory.
///
/// # Lifecycle
///
/// 1. Build with [`Environment::new`]; configuration errors surface here.
/// 2. Call [`Environment::reset`] to begin an episode.
/// 3. Call [`Environment::step`] with one [`Action`] per elevator until
///    `done` (or forever when no horizon is configured).
#[derive(Debug, Clone)]
pub struct Environment {
    building: Building,
    seed: u64,
}

impl Environment {
    /// Validates `config` and builds the environment.
    pub fn new(config: EnvConfig, seed: u64) -> Result<Self, ConfigError> {
        let building = Building::new(config, seed)?;
        Ok(Self { building, seed })
    }

    /// Starts a fresh episode from the stored seed and returns the
    /// initial observation. Calling reset twice without changing the
    /// seed replays the exact same episode.
    pub fn reset(&mut self) -> Observation {
        self.building.reset(self.seed);
        debug!(
            seed = self.seed,
            floors = self.building.config.num_floors,
            elevators = self.building.config.num_elevators(),
            "environment reset"
        );
        self.observe()
    }

    /// Starts a fresh episode under a new seed.
    pub fn reset_with_seed(&mut self, seed: u64) -> Observation {
        self.seed = seed;
        self.reset()
    }

    /// Advances the simulation one timestep.
    ///
    /// `actions` carries one action per elevator in fleet order; a
    /// mismatched length is a caller bug and panics.
    pub fn step(&mut self, actions: &[Action]) -> StepResult {
        let components = self.building.step(actions);
        let reward = self.building.config.weights.score(&components);
        let time_step = self.building.step_count();
        let done = match self.building.config.episode_horizon {
            Some(horizon) => time_step >= horizon,
            None => false,
        };

        debug!(
            step = time_step,
            reward,
            delivered = components.delivered,
            rejected = components.rejected,
            abandoned = components.abandoned,
            "environment step"
        );

        StepResult {
            observation: self.observe(),
            reward,
            done,
            time_step,
            components,
        }
    }

    fn observe(&self) -> Observation {
        let structured = StructuredObservation::capture(&self.building);
        match self.building.config.observation_mode {
            ObservationMode::Structured => Observation::Structured(structured),
            ObservationMode::Flattened => Observation::Flattened(structured.flatten()),
        }
    }

    /// Number of elevators, which is also the length of a valid action
    /// slice. The action space is `Action::COUNT` choices per elevator.
    pub fn num_elevators(&self) -> usize {
        self.building.config.num_elevators()
    }

    pub fn num_floors(&self) -> usize {
        self.building.config.num_floors
    }

    /// Length of the flattened observation for this configuration.
    pub fn observation_len(&self) -> usize {
        StructuredObservation::flat_len(self.num_floors(), self.num_elevators())
    }

    /// Read access to the underlying simulation, for diagnostics.
    pub fn building(&self) -> &Building {
        &self.building
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_env(seed: u64) -> Environment {
        let mut config = EnvConfig::new(5, 2);
        config.observation_mode = ObservationMode::Flattened;
        Environment::new(config, seed).unwrap()
    }

    fn scripted_actions(step: usize) -> Vec<Action> {
        let script = Action::all();
        vec![
            script[step % script.len()],
            script[(step * 5 + 1) % script.len()],
        ]
    }

    #[test]
    fn invalid_config_fails_construction() {
        let mut config = EnvConfig::new(4, 1);
        config.destination_probs[2][2] = 0.4;
        assert!(Environment::new(config, 0).is_err());
    }

    #[test]
    fn reset_returns_initial_observation() {
        let mut env = make_env(3);
        let obs = env.reset();
        let flat = obs.as_flattened().unwrap();
        assert_eq!(flat.len(), env.observation_len());
        // Fresh building: all buttons dark, both cars one-hot at floor 0.
        assert_eq!(flat.iter().filter(|&&b| b == 1).count(), 2);
    }

    #[test]
    fn trajectories_are_deterministic() {
        let mut a = make_env(99);
        let mut b = make_env(99);
        a.reset();
        b.reset();
        for step in 0..40 {
            let actions = scripted_actions(step);
            let ra = a.step(&actions);
            let rb = b.step(&actions);
            assert_eq!(ra, rb, "diverged at step {step}");
        }
    }

    #[test]
    fn reset_replays_the_same_episode() {
        let mut env = make_env(7);
        env.reset();
        let first: Vec<StepResult> = (0..25).map(|s| env.step(&scripted_actions(s))).collect();
        env.reset();
        for (step, expected) in first.iter().enumerate() {
            assert_eq!(&env.step(&scripted_actions(step)), expected);
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = make_env(1);
        let mut b = make_env(2);
        a.reset();
        b.reset();
        let mut any_difference = false;
        for step in 0..50 {
            let actions = scripted_actions(step);
            if a.step(&actions) != b.step(&actions) {
                any_difference = true;
                break;
            }
        }
        assert!(any_difference);
    }

    #[test]
    fn horizon_drives_done() {
        let mut config = EnvConfig::new(3, 1);
        config.episode_horizon = Some(5);
        let mut env = Environment::new(config, 0).unwrap();
        env.reset();
        for step in 0..5 {
            let result = env.step(&[Action::Idle]);
            assert_eq!(result.done, step == 4);
        }
    }

    #[test]
    fn no_horizon_never_done() {
        let mut env = make_env(0);
        env.reset();
        for _ in 0..100 {
            assert!(!env.step(&[Action::Idle, Action::Idle]).done);
        }
    }

    #[test]
    fn structured_and_flattened_agree() {
        let mut structured_env = {
            let config = EnvConfig::new(4, 2);
            Environment::new(config, 5).unwrap()
        };
        let mut flattened_env = {
            let mut config = EnvConfig::new(4, 2);
            config.observation_mode = ObservationMode::Flattened;
            Environment::new(config, 5).unwrap()
        };
        structured_env.reset();
        flattened_env.reset();

        for step in 0..20 {
            let actions = scripted_actions(step);
            let s = structured_env.step(&actions);
            let f = flattened_env.step(&actions);
            let flattened_from_structured = s.observation.as_structured().unwrap().flatten();
            assert_eq!(
                flattened_from_structured,
                f.observation.as_flattened().unwrap()
            );
            assert_eq!(s.reward, f.reward);
        }
    }

    #[test]
    fn reward_uses_configured_weights() {
        let mut config = EnvConfig::new(2, 1);
        config.arrival_rates = vec![0.0, 0.0];
        config.weights.in_queue = -2.0;
        let mut env = Environment::new(config, 0).unwrap();
        env.reset();
        // No traffic: every component is zero, so the reward is zero.
        let result = env.step(&[Action::Idle]);
        assert_eq!(result.reward, 0.0);
        assert_eq!(result.components, RewardBreakdown::default());
    }
}

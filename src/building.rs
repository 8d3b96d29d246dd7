//! The building: queues, elevators, and the per-step pipeline.

use tracing::trace;

use crate::arrivals::ArrivalProcess;
use crate::config::EnvConfig;
use crate::elevator::Elevator;
use crate::error::ConfigError;
use crate::passenger::Passenger;
use crate::queue::FloorQueue;
use crate::reward::RewardBreakdown;
use crate::types::{Action, Direction};

/// The full simulation state for one episode.
///
/// A building owns the floor queues, the elevator fleet, and the
/// arrival process, and advances them one timestep at a time:
///
/// 1. generate arrivals and admit them to queues (full queue rejects),
/// 2. expire passengers whose wait reached its limit,
/// 3. execute one action per elevator, in fleet order,
/// 4. age every passenger still in the simulation,
/// 5. count end-of-step occupancy and advance the step counter.
///
/// Elevator actions are applied strictly in the order of
/// `config.elevators`; two cars loading from the same queue in the same
/// step never board the same passenger, and the earlier car boards
/// first. The building itself never ends an episode; horizons are the
/// caller's policy.
#[derive(Debug, Clone)]
pub struct Building {
    /// The validated configuration this building was built from.
    pub config: EnvConfig,
    up_queues: Vec<FloorQueue>,
    down_queues: Vec<FloorQueue>,
    elevators: Vec<Elevator>,
    arrivals: ArrivalProcess,
    step_count: u32,
    generated_total: u64,
    delivered_total: u64,
    rejected_total: u64,
    abandoned_total: u64,
}

impl Building {
    /// Validates `config` and builds the episode-start state.
    pub fn new(config: EnvConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;

        let arrivals = ArrivalProcess::new(
            config.num_floors,
            config.arrival_rates.clone(),
            config.destination_probs.clone(),
            config.max_wait,
            seed,
        )?;

        let elevators = config
            .elevators
            .iter()
            .map(|c| Elevator::new(c.start_floor, c.capacity, c.min_floor, c.max_floor))
            .collect();

        // Queue slots exist for every (floor, direction) pair; the two
        // unreachable slots (down at ground, up at top) stay empty
        // because no arrival can ever route to them.
        let up_queues = config.queue_capacity.iter().map(|&c| FloorQueue::new(c)).collect();
        let down_queues = config.queue_capacity.iter().map(|&c| FloorQueue::new(c)).collect();

        Ok(Self {
            config,
            up_queues,
            down_queues,
            elevators,
            arrivals,
            step_count: 0,
            generated_total: 0,
            delivered_total: 0,
            rejected_total: 0,
            abandoned_total: 0,
        })
    }

    /// Clears all episode state and reseeds the arrival process, so the
    /// same seed replays the same arrival sequence.
    pub fn reset(&mut self, seed: u64) {
        self.up_queues = self
            .config
            .queue_capacity
            .iter()
            .map(|&c| FloorQueue::new(c))
            .collect();
        self.down_queues = self
            .config
            .queue_capacity
            .iter()
            .map(|&c| FloorQueue::new(c))
            .collect();
        self.elevators = self
            .config
            .elevators
            .iter()
            .map(|c| Elevator::new(c.start_floor, c.capacity, c.min_floor, c.max_floor))
            .collect();
        self.arrivals.reseed(seed);
        self.step_count = 0;
        self.generated_total = 0;
        self.delivered_total = 0;
        self.rejected_total = 0;
        self.abandoned_total = 0;
    }

    /// Advances the building by one timestep, applying one action per
    /// elevator, and returns the raw reward component counts.
    ///
    /// The action slice must carry exactly one entry per elevator in
    /// fleet order; anything else is a caller bug.
    pub fn step(&mut self, actions: &[Action]) -> RewardBreakdown {
        assert_eq!(
            actions.len(),
            self.elevators.len(),
            "number of actions must match number of elevators"
        );

        let mut breakdown = RewardBreakdown::default();

        // 1. Arrivals and queue admission.
        let newcomers = self.arrivals.generate(self.step_count);
        self.generated_total += newcomers.len() as u64;
        for passenger in newcomers {
            self.admit(passenger, &mut breakdown);
        }

        // 2. Expiry. Runs after admission, so a wait limit of zero
        // removes a passenger in the very step they arrived.
        for queue in self.up_queues.iter_mut().chain(self.down_queues.iter_mut()) {
            let expired = queue.expire_overdue();
            if !expired.is_empty() {
                trace!(count = expired.len(), "passengers abandoned a queue");
                breakdown.abandoned += expired.len() as u32;
                self.abandoned_total += expired.len() as u64;
            }
        }

        // 3. Actions, strictly in fleet order.
        for (index, &action) in actions.iter().enumerate() {
            self.execute_action(index, action, &mut breakdown);
        }

        // 4. Aging: queued passengers wait and age, riders only age.
        for queue in self.up_queues.iter_mut().chain(self.down_queues.iter_mut()) {
            queue.tick();
        }
        for elevator in &mut self.elevators {
            elevator.tick_passengers();
        }

        // 5. End-of-step occupancy and bookkeeping.
        breakdown.in_queue = self.total_queued() as u32;
        breakdown.in_elevator = self.total_aboard() as u32;
        self.step_count += 1;

        breakdown
    }

    /// Routes a fresh arrival into the queue its destination implies.
    fn admit(&mut self, passenger: Passenger, breakdown: &mut RewardBreakdown) {
        let floor = passenger.start_floor;
        let queue = match Direction::between(floor, passenger.destination_floor) {
            Direction::Up => &mut self.up_queues[floor],
            Direction::Down => &mut self.down_queues[floor],
        };
        if let Err(bounced) = queue.try_push(passenger) {
            trace!(floor, id = bounced.id, "queue full, passenger rejected");
            breakdown.rejected += 1;
            self.rejected_total += 1;
        }
    }

    fn execute_action(&mut self, index: usize, action: Action, breakdown: &mut RewardBreakdown) {
        match action {
            Action::Idle => {}
            Action::MoveUp => self.move_elevator(index, 1, breakdown),
            Action::MoveDown => self.move_elevator(index, -1, breakdown),
            Action::LoadUp => self.load(index, Direction::Up),
            Action::LoadDown => self.load(index, Direction::Down),
            Action::Unload => {
                let delivered = self.elevators[index].unload();
                breakdown.delivered += delivered.len() as u32;
                self.delivered_total += delivered.len() as u64;
            }
        }
    }

    /// Moves one car and, if it actually changed floors, classifies
    /// every rider as carried toward or away from their destination.
    fn move_elevator(&mut self, index: usize, delta: i64, breakdown: &mut RewardBreakdown) {
        let elevator = &mut self.elevators[index];
        let from = elevator.floor();
        let to = elevator.move_by(delta);
        if to != from {
            let (toward, away) = elevator.count_direction_progress(from);
            breakdown.moved_toward += toward;
            breakdown.moved_away += away;
        }
    }

    /// Boards passengers from the queue at the car's floor, earliest
    /// first, until the queue empties or the car fills. A floor without
    /// a queue in that direction makes the whole action a no-op.
    fn load(&mut self, index: usize, direction: Direction) {
        let floor = self.elevators[index].floor();
        let queue = match direction {
            Direction::Up if self.has_up_queue(floor) => &mut self.up_queues[floor],
            Direction::Down if self.has_down_queue(floor) => &mut self.down_queues[floor],
            _ => return,
        };

        let elevator = &mut self.elevators[index];
        while elevator.available_capacity() > 0 {
            match queue.pop_front() {
                Some(passenger) => elevator.board(passenger),
                None => break,
            }
        }
    }

    /// True when `floor` can request upward travel.
    pub fn has_up_queue(&self, floor: usize) -> bool {
        floor + 1 < self.config.num_floors
    }

    /// True when `floor` can request downward travel.
    pub fn has_down_queue(&self, floor: usize) -> bool {
        floor > 0
    }

    /// Completed timesteps this episode.
    pub fn step_count(&self) -> u32 {
        self.step_count
    }

    pub fn elevators(&self) -> &[Elevator] {
        &self.elevators
    }

    /// Passengers waiting in any queue right now.
    pub fn total_queued(&self) -> usize {
        self.up_queues
            .iter()
            .chain(self.down_queues.iter())
            .map(|q| q.len())
            .sum()
    }

    /// Passengers riding any elevator right now.
    pub fn total_aboard(&self) -> usize {
        self.elevators.iter().map(|e| e.passenger_count()).sum()
    }

    /// Call buttons per floor: `(up, down)`, true when the matching
    /// queue is non-empty. Reveals nothing beyond button granularity.
    pub fn call_buttons(&self) -> (Vec<bool>, Vec<bool>) {
        let up = self.up_queues.iter().map(|q| !q.is_empty()).collect();
        let down = self.down_queues.iter().map(|q| !q.is_empty()).collect();
        (up, down)
    }

    /// Destination button rows, one per elevator, building-wide width.
    pub fn destination_buttons(&self) -> Vec<Vec<bool>> {
        self.elevators
            .iter()
            .map(|e| e.destination_buttons(self.config.num_floors))
            .collect()
    }

    /// Current floor of every elevator, in fleet order.
    pub fn elevator_floors(&self) -> Vec<usize> {
        self.elevators.iter().map(|e| e.floor()).collect()
    }

    /// Every passenger ever produced by the arrival process, including
    /// rejected ones.
    pub fn generated_total(&self) -> u64 {
        self.generated_total
    }

    pub fn delivered_total(&self) -> u64 {
        self.delivered_total
    }

    pub fn rejected_total(&self) -> u64 {
        self.rejected_total
    }

    pub fn abandoned_total(&self) -> u64 {
        self.abandoned_total
    }

    /// Conservation check: everyone generated is queued, aboard, or
    /// accounted for as removed. Holds after every step.
    pub fn accounting_balances(&self) -> bool {
        let present = (self.total_queued() + self.total_aboard()) as u64;
        let removed = self.delivered_total + self.rejected_total + self.abandoned_total;
        present + removed == self.generated_total
    }
}

//! A single elevator car.

use crate::passenger::Passenger;

/// One elevator: a floor range it may occupy, a passenger capacity, a
/// current floor, and the passengers riding it.
///
/// The car never leaves `[min_floor, max_floor]` and never holds more
/// than `capacity` passengers. Movement past a range boundary clamps
/// rather than failing, so callers may issue any move they like.
#[derive(Debug, Clone)]
pub struct Elevator {
    /// Lowest floor the car can reach.
    pub min_floor: usize,
    /// Highest floor the car can reach.
    pub max_floor: usize,
    /// Maximum number of passengers aboard at once.
    pub capacity: usize,
    floor: usize,
    passengers: Vec<Passenger>,
}

impl Elevator {
    /// Creates a car at `start_floor`. The caller guarantees the start
    /// floor lies inside the range; configuration validation enforces it.
    pub fn new(start_floor: usize, capacity: usize, min_floor: usize, max_floor: usize) -> Self {
        debug_assert!(min_floor <= start_floor && start_floor <= max_floor);
        Self {
            min_floor,
            max_floor,
            capacity,
            floor: start_floor,
            passengers: Vec::new(),
        }
    }

    /// Current floor.
    pub fn floor(&self) -> usize {
        self.floor
    }

    /// Moves the car by `delta` floors, clamped to its range, and
    /// returns the floor actually reached. A clamped move that goes
    /// nowhere is a no-op, not an error.
    pub fn move_by(&mut self, delta: i64) -> usize {
        let target = self.floor as i64 + delta;
        let clamped = target.clamp(self.min_floor as i64, self.max_floor as i64);
        self.floor = clamped as usize;
        self.floor
    }

    pub fn passenger_count(&self) -> usize {
        self.passengers.len()
    }

    /// Remaining room aboard.
    pub fn available_capacity(&self) -> usize {
        self.capacity - self.passengers.len()
    }

    pub fn is_full(&self) -> bool {
        self.passengers.len() >= self.capacity
    }

    /// Takes one passenger aboard. Callers check capacity first; going
    /// over it is a bug in the caller, not a simulation outcome.
    pub fn board(&mut self, passenger: Passenger) {
        debug_assert!(
            self.passengers.len() < self.capacity,
            "boarding past capacity"
        );
        self.passengers.push(passenger);
    }

    /// Removes and returns exactly the passengers whose destination is
    /// the current floor. Everyone else stays aboard in order.
    pub fn unload(&mut self) -> Vec<Passenger> {
        let mut delivered = Vec::new();
        for passenger in std::mem::take(&mut self.passengers) {
            if passenger.reached_destination(self.floor) {
                delivered.push(passenger);
            } else {
                self.passengers.push(passenger);
            }
        }
        delivered
    }

    /// Destination button row for this car: entry `f` is true when at
    /// least one onboard passenger wants floor `f`. Width is the whole
    /// building so every car reports the same shape, and a floor outside
    /// the car's range simply stays false.
    pub fn destination_buttons(&self, num_floors: usize) -> Vec<bool> {
        let mut buttons = vec![false; num_floors];
        for passenger in &self.passengers {
            buttons[passenger.destination_floor] = true;
        }
        buttons
    }

    /// After a move from `from` to the current floor, counts how many
    /// onboard passengers got strictly closer to their destination and
    /// how many did not. Meaningful only when the car actually moved.
    pub fn count_direction_progress(&self, from: usize) -> (u32, u32) {
        let mut toward = 0;
        let mut away = 0;
        for passenger in &self.passengers {
            if passenger.moved_toward(from, self.floor) {
                toward += 1;
            } else {
                away += 1;
            }
        }
        (toward, away)
    }

    /// Ages every rider by one step without touching their wait time.
    pub fn tick_passengers(&mut self) {
        for passenger in &mut self.passengers {
            passenger.tick(true);
        }
    }

    pub fn passengers(&self) -> &[Passenger] {
        &self.passengers
    }
}

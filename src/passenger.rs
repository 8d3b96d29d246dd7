//! A single rider in the building.

/// One passenger travelling between two floors.
///
/// A passenger is always in exactly one of three places: waiting in a
/// floor queue, riding an elevator, or removed from the simulation
/// (delivered, abandoned, or rejected). The struct itself does not track
/// which; ownership does. Whoever holds the value holds the passenger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Passenger {
    /// Unique identifier, assigned in arrival order within an episode.
    pub id: u64,
    /// Timestep at which the passenger appeared.
    pub start_step: u32,
    /// Floor the passenger arrived on.
    pub start_floor: usize,
    /// Floor the passenger wants to reach. Never equals `start_floor`.
    pub destination_floor: usize,
    /// Steps the passenger will wait in a queue before giving up.
    pub max_wait: u32,
    wait: u32,
    age: u32,
}

impl Passenger {
    /// Creates a new passenger with zero age and wait.
    pub fn new(
        id: u64,
        start_step: u32,
        start_floor: usize,
        destination_floor: usize,
        max_wait: u32,
    ) -> Self {
        debug_assert_ne!(
            start_floor, destination_floor,
            "destination must differ from the arrival floor"
        );
        Self {
            id,
            start_step,
            start_floor,
            destination_floor,
            max_wait,
            wait: 0,
            age: 0,
        }
    }

    /// Steps spent waiting in a queue. Frozen once the passenger boards.
    pub fn wait(&self) -> u32 {
        self.wait
    }

    /// Steps since arrival, queued or aboard.
    pub fn age(&self) -> u32 {
        self.age
    }

    /// Advances the passenger by one timestep.
    ///
    /// Age always increments; wait increments only while the passenger
    /// is still queued, so `wait <= age` holds at all times.
    pub fn tick(&mut self, in_elevator: bool) {
        if !in_elevator {
            self.wait += 1;
        }
        self.age += 1;
    }

    /// True once the queued wait has reached the passenger's limit.
    /// Reaching the limit is enough; a limit of zero expires immediately.
    pub fn reached_max_wait(&self) -> bool {
        self.wait >= self.max_wait
    }

    /// True if `floor` is where this passenger wants to get off.
    pub fn reached_destination(&self, floor: usize) -> bool {
        floor == self.destination_floor
    }

    /// True if a car move from `from` to `to` brought this passenger
    /// strictly closer to their destination. Standing still, or leaving
    /// the destination floor itself, counts as not-toward.
    pub fn moved_toward(&self, from: usize, to: usize) -> bool {
        let dest = self.destination_floor as i64;
        let before = (from as i64 - dest).abs();
        let after = (to as i64 - dest).abs();
        after < before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wait_never_exceeds_age() {
        let mut p = Passenger::new(0, 0, 1, 4, 50);
        p.tick(false);
        p.tick(false);
        p.tick(true);
        p.tick(true);
        assert_eq!(p.age(), 4);
        assert_eq!(p.wait(), 2);
        assert!(p.wait() <= p.age());
    }

    #[test]
    fn wait_freezes_aboard() {
        let mut p = Passenger::new(0, 0, 0, 3, 50);
        p.tick(false);
        let waited = p.wait();
        p.tick(true);
        p.tick(true);
        assert_eq!(p.wait(), waited);
        assert_eq!(p.age(), 3);
    }

    #[test]
    fn max_wait_is_reached_not_exceeded() {
        let mut p = Passenger::new(0, 0, 0, 2, 2);
        assert!(!p.reached_max_wait());
        p.tick(false);
        assert!(!p.reached_max_wait());
        p.tick(false);
        assert!(p.reached_max_wait());
    }

    #[test]
    fn zero_max_wait_expires_immediately() {
        let p = Passenger::new(0, 0, 0, 1, 0);
        assert!(p.reached_max_wait());
    }

    #[test]
    fn toward_and_away() {
        let p = Passenger::new(0, 0, 0, 5, 50);
        assert!(p.moved_toward(2, 3));
        assert!(!p.moved_toward(3, 2));
    }

    #[test]
    fn leaving_destination_floor_is_away() {
        // Still aboard at their destination floor; any move is away.
        let p = Passenger::new(0, 0, 0, 3, 50);
        assert!(!p.moved_toward(3, 4));
        assert!(!p.moved_toward(3, 2));
    }
}

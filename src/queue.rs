//! Bounded FIFO waiting lines, one per floor and direction.

use std::collections::VecDeque;

use crate::passenger::Passenger;

/// A bounded, ordered queue of passengers waiting at one floor for one
/// travel direction. Insertion order is arrival order, and boarding
/// always serves the front, so the earliest-arrived passenger leaves
/// first.
#[derive(Debug, Clone)]
pub struct FloorQueue {
    capacity: usize,
    passengers: VecDeque<Passenger>,
}

impl FloorQueue {
    /// Creates an empty queue holding at most `capacity` passengers.
    /// A capacity of zero rejects every would-be joiner.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            passengers: VecDeque::new(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.passengers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.passengers.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.passengers.len() >= self.capacity
    }

    /// Appends a passenger if there is room, otherwise hands the
    /// passenger back to the caller for rejection accounting.
    pub fn try_push(&mut self, passenger: Passenger) -> Result<(), Passenger> {
        if self.is_full() {
            Err(passenger)
        } else {
            self.passengers.push_back(passenger);
            Ok(())
        }
    }

    /// Removes and returns the earliest-arrived passenger.
    pub fn pop_front(&mut self) -> Option<Passenger> {
        self.passengers.pop_front()
    }

    /// Removes and returns every passenger whose wait has reached their
    /// limit. The relative order of the remaining passengers is kept.
    pub fn expire_overdue(&mut self) -> Vec<Passenger> {
        let mut expired = Vec::new();
        for passenger in std::mem::take(&mut self.passengers) {
            if passenger.reached_max_wait() {
                expired.push(passenger);
            } else {
                self.passengers.push_back(passenger);
            }
        }
        expired
    }

    /// Advances every queued passenger by one timestep.
    pub fn tick(&mut self) {
        for passenger in &mut self.passengers {
            passenger.tick(false);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Passenger> {
        self.passengers.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rider(id: u64, max_wait: u32) -> Passenger {
        Passenger::new(id, 0, 0, 1, max_wait)
    }

    #[test]
    fn serves_in_arrival_order() {
        let mut queue = FloorQueue::new(5);
        for id in 0..3 {
            queue.try_push(rider(id, 50)).unwrap();
        }
        assert_eq!(queue.pop_front().unwrap().id, 0);
        assert_eq!(queue.pop_front().unwrap().id, 1);
        assert_eq!(queue.pop_front().unwrap().id, 2);
    }

    #[test]
    fn rejects_when_full() {
        let mut queue = FloorQueue::new(2);
        queue.try_push(rider(0, 50)).unwrap();
        queue.try_push(rider(1, 50)).unwrap();
        let bounced = queue.try_push(rider(2, 50));
        assert_eq!(bounced.unwrap_err().id, 2);
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn zero_capacity_rejects_everything() {
        let mut queue = FloorQueue::new(0);
        assert!(queue.try_push(rider(0, 50)).is_err());
        assert!(queue.is_empty());
    }

    #[test]
    fn expiry_removes_only_overdue() {
        let mut queue = FloorQueue::new(5);
        queue.try_push(rider(0, 1)).unwrap();
        queue.try_push(rider(1, 10)).unwrap();
        queue.try_push(rider(2, 1)).unwrap();
        queue.tick();

        let expired = queue.expire_overdue();
        let ids: Vec<u64> = expired.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![0, 2]);
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.pop_front().unwrap().id, 1);
    }

    #[test]
    fn tick_increments_wait() {
        let mut queue = FloorQueue::new(5);
        queue.try_push(rider(0, 50)).unwrap();
        queue.tick();
        queue.tick();
        let p = queue.pop_front().unwrap();
        assert_eq!(p.wait(), 2);
        assert_eq!(p.age(), 2);
    }
}

//! Observation encodings handed to the agent.
//!
//! Everything here is derived from button state alone: which destination
//! buttons are lit inside each car, which call buttons are lit on each
//! floor, and where each car is. Queue lengths and exact passenger
//! destinations are deliberately not observable.

use crate::building::Building;

/// The named-field observation surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuredObservation {
    /// One row per elevator, one entry per floor: true when an onboard
    /// passenger has requested that floor.
    pub destination_buttons: Vec<Vec<bool>>,
    /// Per floor: true when the up queue is non-empty.
    pub up_buttons: Vec<bool>,
    /// Per floor: true when the down queue is non-empty.
    pub down_buttons: Vec<bool>,
    /// Current floor of each elevator, in fleet order.
    pub elevator_floors: Vec<usize>,
}

impl StructuredObservation {
    /// Reads the observable surfaces out of the building.
    pub fn capture(building: &Building) -> Self {
        let (up_buttons, down_buttons) = building.call_buttons();
        Self {
            destination_buttons: building.destination_buttons(),
            up_buttons,
            down_buttons,
            elevator_floors: building.elevator_floors(),
        }
    }

    /// Number of floors this observation describes.
    pub fn num_floors(&self) -> usize {
        self.up_buttons.len()
    }

    /// Flattens into a single 0/1 vector with a fixed field order:
    /// destination matrix row-major, then up buttons, then down buttons,
    /// then a one-hot floor encoding per elevator. The total length is
    /// [`StructuredObservation::flat_len`].
    pub fn flatten(&self) -> Vec<u8> {
        let floors = self.num_floors();
        let mut flat = Vec::with_capacity(Self::flat_len(floors, self.elevator_floors.len()));

        for row in &self.destination_buttons {
            flat.extend(row.iter().map(|&b| b as u8));
        }
        flat.extend(self.up_buttons.iter().map(|&b| b as u8));
        flat.extend(self.down_buttons.iter().map(|&b| b as u8));
        for &floor in &self.elevator_floors {
            for f in 0..floors {
                flat.push(u8::from(f == floor));
            }
        }

        flat
    }

    /// Length of the flattened encoding:
    /// `floors*elevators + 2*floors + floors*elevators`.
    pub fn flat_len(num_floors: usize, num_elevators: usize) -> usize {
        2 * num_floors * num_elevators + 2 * num_floors
    }
}

/// One observation in whichever encoding the configuration selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Observation {
    Structured(StructuredObservation),
    Flattened(Vec<u8>),
}

impl Observation {
    pub fn as_structured(&self) -> Option<&StructuredObservation> {
        match self {
            Observation::Structured(obs) => Some(obs),
            Observation::Flattened(_) => None,
        }
    }

    pub fn as_flattened(&self) -> Option<&[u8]> {
        match self {
            Observation::Structured(_) => None,
            Observation::Flattened(bits) => Some(bits),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EnvConfig;
    use crate::passenger::Passenger;
    use crate::types::Action;

    fn tiny_observation() -> StructuredObservation {
        StructuredObservation {
            destination_buttons: vec![vec![true, false]],
            up_buttons: vec![true, false],
            down_buttons: vec![false, false],
            elevator_floors: vec![1],
        }
    }

    #[test]
    fn flatten_layout_is_fixed() {
        let obs = tiny_observation();
        assert_eq!(obs.flatten(), vec![1, 0, 1, 0, 0, 0, 0, 1]);
    }

    #[test]
    fn flat_len_matches_flatten() {
        let obs = tiny_observation();
        assert_eq!(obs.flatten().len(), StructuredObservation::flat_len(2, 1));

        for (floors, elevators) in [(2, 1), (5, 2), (10, 4)] {
            assert_eq!(
                StructuredObservation::flat_len(floors, elevators),
                floors * elevators + 2 * floors + floors * elevators
            );
        }
    }

    #[test]
    fn capture_reflects_building_state() {
        let mut config = EnvConfig::new(3, 2);
        config.arrival_rates = vec![0.0; 3];
        let mut building = crate::building::Building::new(config, 0).unwrap();
        building.step(&[Action::MoveUp, Action::Idle]);

        let obs = StructuredObservation::capture(&building);
        assert_eq!(obs.elevator_floors, vec![1, 0]);
        assert_eq!(obs.destination_buttons.len(), 2);
        assert!(obs.up_buttons.iter().all(|&b| !b));
    }

    #[test]
    fn buttons_do_not_reveal_counts() {
        // Two riders requesting the same floor light the same single
        // button one rider would.
        let mut car_two = crate::elevator::Elevator::new(0, 10, 0, 3);
        car_two.board(Passenger::new(0, 0, 0, 2, 50));
        car_two.board(Passenger::new(1, 0, 0, 2, 50));
        let mut car_one = crate::elevator::Elevator::new(0, 10, 0, 3);
        car_one.board(Passenger::new(2, 0, 0, 2, 50));
        assert_eq!(
            car_two.destination_buttons(4),
            car_one.destination_buttons(4)
        );
    }
}

//! Reward configuration and per-step component accounting.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Weights applied to the per-step reward components.
///
/// One named field per component, no dynamic keys. The scalar reward of
/// a step is the dot product of these weights with the matching counts
/// in [`RewardBreakdown`]. Delivery and progress carry positive weights;
/// everything else is a penalty and carries a negative weight. Every
/// field can be overridden to reshape the objective.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RewardWeights {
    /// Per passenger dropped off at their destination.
    pub delivered: f64,
    /// Per onboard passenger a car move carried closer to their destination.
    pub moved_toward: f64,
    /// Per onboard passenger a car move carried farther from their destination.
    pub moved_away: f64,
    /// Per passenger turned away from a full queue.
    pub rejected: f64,
    /// Per passenger who gave up waiting and left a queue.
    pub abandoned: f64,
    /// Per passenger riding an elevator at the end of the step.
    pub in_elevator: f64,
    /// Per passenger waiting in a queue at the end of the step.
    pub in_queue: f64,
}

impl Default for RewardWeights {
    fn default() -> Self {
        Self {
            delivered: 10.0,
            moved_toward: 0.5,
            moved_away: -0.5,
            rejected: -5.0,
            abandoned: -10.0,
            in_elevator: -0.05,
            in_queue: -0.1,
        }
    }
}

impl RewardWeights {
    /// Scalar reward for one step: the weighted sum of the raw counts.
    pub fn score(&self, breakdown: &RewardBreakdown) -> f64 {
        self.delivered * breakdown.delivered as f64
            + self.moved_toward * breakdown.moved_toward as f64
            + self.moved_away * breakdown.moved_away as f64
            + self.rejected * breakdown.rejected as f64
            + self.abandoned * breakdown.abandoned as f64
            + self.in_elevator * breakdown.in_elevator as f64
            + self.in_queue * breakdown.in_queue as f64
    }
}

/// Raw outcome counts accumulated over a single step.
///
/// Returned alongside the scalar reward so callers can diagnose which
/// components drove it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RewardBreakdown {
    /// Passengers dropped off at their destination this step.
    pub delivered: u32,
    /// Onboard passengers moved closer to their destination by a car
    /// move. Counted only on actual floor changes; idle cars, loads,
    /// unloads, and clamped moves at a range boundary contribute nothing.
    pub moved_toward: u32,
    /// Onboard passengers moved farther from their destination by a car
    /// move. Same scope as `moved_toward`.
    pub moved_away: u32,
    /// Passengers rejected at queue-join time because the queue was full.
    pub rejected: u32,
    /// Passengers removed from a queue after waiting their limit.
    pub abandoned: u32,
    /// Passengers aboard any elevator at the end of the step.
    pub in_elevator: u32,
    /// Passengers waiting in any queue at the end of the step.
    pub in_queue: u32,
}

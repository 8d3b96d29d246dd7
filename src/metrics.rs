//! Episode-level diagnostics.

use std::fmt;

use crate::environment::StepResult;

/// Running totals over one episode, fed from [`StepResult`]s.
///
/// Purely observational: recording a step never feeds anything back
/// into the simulation.
#[derive(Debug, Clone, Default)]
pub struct EpisodeMetrics {
    /// Steps recorded so far.
    pub steps: u32,
    /// Sum of scalar rewards.
    pub total_reward: f64,
    /// Passengers delivered to their destination.
    pub delivered: u64,
    /// Passengers rejected at full queues.
    pub rejected: u64,
    /// Passengers who gave up waiting.
    pub abandoned: u64,
    /// Rider-moves toward a destination.
    pub moved_toward: u64,
    /// Rider-moves away from a destination.
    pub moved_away: u64,
}

impl EpisodeMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one step's outcome into the totals.
    pub fn record(&mut self, result: &StepResult) {
        self.steps += 1;
        self.total_reward += result.reward;
        self.delivered += u64::from(result.components.delivered);
        self.rejected += u64::from(result.components.rejected);
        self.abandoned += u64::from(result.components.abandoned);
        self.moved_toward += u64::from(result.components.moved_toward);
        self.moved_away += u64::from(result.components.moved_away);
    }

    /// Share of concluded passengers who were actually delivered, in
    /// percent. Zero when nobody has concluded yet.
    pub fn delivery_rate(&self) -> f64 {
        let concluded = self.delivered + self.rejected + self.abandoned;
        if concluded == 0 {
            0.0
        } else {
            self.delivered as f64 / concluded as f64 * 100.0
        }
    }
}

impl fmt::Display for EpisodeMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Episode Metrics ({} steps) ===", self.steps)?;
        writeln!(f, "  Total reward:    {:.2}", self.total_reward)?;
        writeln!(f, "  Delivered:       {}", self.delivered)?;
        writeln!(f, "  Rejected:        {}", self.rejected)?;
        writeln!(f, "  Abandoned:       {}", self.abandoned)?;
        writeln!(f, "  Moves toward:    {}", self.moved_toward)?;
        writeln!(f, "  Moves away:      {}", self.moved_away)?;
        write!(f, "  Delivery rate:   {:.1}%", self.delivery_rate())
    }
}

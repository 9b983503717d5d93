//! Simulated movement: periodic drift and one-shot relocation scans
//!
//! Both tasks are deadline-based against the logical millisecond clock the
//! engine advances; there are no OS timers. The owner polls them from its
//! update loop and applies whatever mutations fall due. Cancellation drops
//! the deadline, so a cancelled task can never deliver a late mutation; a
//! deadline still present on a cancelled task is a logic fault.

use crate::core::{Position3, DRIFT_MAGNITUDE, DRIFT_PERIOD_MS, SCAN_DELAY_MS, SCAN_RANGE};

/// Horizontal displacement produced by one drift tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DriftStep {
    pub dx: f64,
    pub dz: f64,
}

/// Periodic bounded perturbation of the user's horizontal position,
/// modelling organic sway while walking. Active only while armed.
#[derive(Debug)]
pub struct DriftSimulator {
    rng: fastrand::Rng,
    deadline_ms: Option<u64>,
    cancelled: bool,
    ticks_delivered: u64,
}

impl DriftSimulator {
    pub fn new() -> Self {
        Self::with_rng(fastrand::Rng::new())
    }

    /// Deterministic simulator for tests and session replay.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(fastrand::Rng::with_seed(seed))
    }

    fn with_rng(rng: fastrand::Rng) -> Self {
        Self {
            rng,
            deadline_ms: None,
            cancelled: false,
            ticks_delivered: 0,
        }
    }

    /// Schedule the first tick one period from `now_ms`. Re-arming resets
    /// the cadence from the current clock.
    pub fn arm(&mut self, now_ms: u64) {
        self.cancelled = false;
        self.deadline_ms = Some(now_ms + DRIFT_PERIOD_MS);
    }

    /// Stop the recurring tick. No mutation is delivered after this.
    pub fn cancel(&mut self) {
        self.cancelled = true;
        self.deadline_ms = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline_ms.is_some()
    }

    /// Total ticks delivered over the simulator's lifetime.
    pub fn ticks_delivered(&self) -> u64 {
        self.ticks_delivered
    }

    /// Collect every tick that has fallen due by `now_ms`, one per elapsed
    /// period. Returns nothing when unarmed or cancelled.
    pub fn poll(&mut self, now_ms: u64) -> Vec<DriftStep> {
        if self.cancelled {
            debug_assert!(
                self.deadline_ms.is_none(),
                "cancelled drift simulator still holds a deadline"
            );
            return Vec::new();
        }

        let mut steps = Vec::new();
        while let Some(deadline) = self.deadline_ms {
            if deadline > now_ms {
                break;
            }
            steps.push(DriftStep {
                dx: (self.rng.f64() - 0.5) * DRIFT_MAGNITUDE,
                dz: (self.rng.f64() - 0.5) * DRIFT_MAGNITUDE,
            });
            self.ticks_delivered += 1;
            self.deadline_ms = Some(deadline + DRIFT_PERIOD_MS);
        }
        steps
    }
}

impl Default for DriftSimulator {
    fn default() -> Self {
        Self::new()
    }
}

/// One-shot relocation scan. After a fixed acquisition latency it yields a
/// fresh position sampled uniformly from the scan box, replacing the user
/// position outright. Independent of the periodic drift.
#[derive(Debug)]
pub struct ScanTask {
    rng: fastrand::Rng,
    deadline_ms: Option<u64>,
    cancelled: bool,
}

impl ScanTask {
    pub fn new(now_ms: u64) -> Self {
        Self::with_rng(now_ms, fastrand::Rng::new())
    }

    pub fn with_seed(now_ms: u64, seed: u64) -> Self {
        Self::with_rng(now_ms, fastrand::Rng::with_seed(seed))
    }

    fn with_rng(now_ms: u64, rng: fastrand::Rng) -> Self {
        Self {
            rng,
            deadline_ms: Some(now_ms + SCAN_DELAY_MS),
            cancelled: false,
        }
    }

    /// Abort the scan; it will never commit a position.
    pub fn cancel(&mut self) {
        self.cancelled = true;
        self.deadline_ms = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline_ms.is_some()
    }

    /// Yield the sampled position once the acquisition latency has elapsed.
    /// Fires at most once; returns `None` before the deadline or after
    /// cancellation.
    pub fn poll(&mut self, now_ms: u64) -> Option<Position3> {
        if self.cancelled {
            debug_assert!(
                self.deadline_ms.is_none(),
                "cancelled scan task still holds a deadline"
            );
            return None;
        }
        match self.deadline_ms {
            Some(deadline) if deadline <= now_ms => {
                self.deadline_ms = None;
                let x = (self.rng.f64() - 0.5) * (2.0 * SCAN_RANGE);
                let z = (self.rng.f64() - 0.5) * (2.0 * SCAN_RANGE);
                Some(Position3::new(x, 0.0, z))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drift_fires_once_per_period() {
        let mut sim = DriftSimulator::with_seed(7);
        sim.arm(0);

        assert!(sim.poll(999).is_empty());
        assert_eq!(sim.poll(1000).len(), 1);
        assert_eq!(sim.poll(1000).len(), 0);
        assert_eq!(sim.poll(2500).len(), 1);
    }

    #[test]
    fn test_drift_catches_up_after_clock_jump() {
        let mut sim = DriftSimulator::with_seed(7);
        sim.arm(0);
        // Three full periods elapsed at once
        assert_eq!(sim.poll(3000).len(), 3);
        assert_eq!(sim.ticks_delivered(), 3);
    }

    #[test]
    fn test_drift_steps_are_bounded() {
        let mut sim = DriftSimulator::with_seed(42);
        sim.arm(0);
        for step in sim.poll(100_000) {
            assert!(step.dx.abs() <= DRIFT_MAGNITUDE / 2.0);
            assert!(step.dz.abs() <= DRIFT_MAGNITUDE / 2.0);
        }
    }

    #[test]
    fn test_drift_never_fires_after_cancel() {
        let mut sim = DriftSimulator::with_seed(7);
        sim.arm(0);
        assert_eq!(sim.poll(2000).len(), 2);
        sim.cancel();
        // Arbitrarily many further clock advances deliver nothing
        assert!(sim.poll(10_000).is_empty());
        assert!(sim.poll(1_000_000).is_empty());
        assert_eq!(sim.ticks_delivered(), 2);
    }

    #[test]
    fn test_drift_rearm_resets_cadence() {
        let mut sim = DriftSimulator::with_seed(7);
        sim.arm(0);
        sim.cancel();
        sim.arm(5000);
        assert!(sim.poll(5999).is_empty());
        assert_eq!(sim.poll(6000).len(), 1);
    }

    #[test]
    fn test_scan_commits_once_after_delay() {
        let mut scan = ScanTask::with_seed(0, 3);
        assert!(scan.poll(1499).is_none());

        let pos = scan.poll(1500).expect("scan should commit at its deadline");
        assert!(pos.x >= -SCAN_RANGE && pos.x < SCAN_RANGE);
        assert!(pos.z >= -SCAN_RANGE && pos.z < SCAN_RANGE);
        assert_eq!(pos.y, 0.0);

        // One-shot: never fires again
        assert!(scan.poll(10_000).is_none());
        assert!(!scan.is_pending());
    }

    #[test]
    fn test_scan_never_commits_after_cancel() {
        let mut scan = ScanTask::with_seed(0, 3);
        scan.cancel();
        assert!(scan.poll(1500).is_none());
        assert!(scan.poll(1_000_000).is_none());
    }
}

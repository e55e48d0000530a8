//! Fixed-rate frame pacing
//!
//! One simulation step per frame. A late frame pushes the schedule back
//! instead of running extra steps to catch up.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct FramePacer {
    /// `None` runs unthrottled
    period: Option<Duration>,
    next: Option<Instant>,
}

impl FramePacer {
    pub fn new(frames_per_second: u32) -> Self {
        Self {
            period: Some(Duration::from_secs(1) / frames_per_second.max(1)),
            next: None,
        }
    }

    /// No sleeping at all (benchmarks, fast demos)
    pub fn unlimited() -> Self {
        Self {
            period: None,
            next: None,
        }
    }

    pub fn period(&self) -> Option<Duration> {
        self.period
    }

    /// How long to sleep at `now` before the current frame's deadline
    pub fn schedule(&mut self, now: Instant) -> Duration {
        let Some(period) = self.period else {
            return Duration::ZERO;
        };
        let deadline = self.next.unwrap_or(now);
        if now >= deadline {
            // Behind (or first frame): drop the missed time
            self.next = Some(now + period);
            Duration::ZERO
        } else {
            self.next = Some(deadline + period);
            deadline - now
        }
    }

    /// Block until the next frame is due
    pub fn wait(&mut self) {
        let delay = self.schedule(Instant::now());
        if !delay.is_zero() {
            std::thread::sleep(delay);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steady_pacing() {
        let mut pacer = FramePacer::new(50);
        let t0 = Instant::now();
        assert_eq!(pacer.schedule(t0), Duration::ZERO);
        assert_eq!(pacer.schedule(t0 + Duration::from_millis(5)), Duration::from_millis(15));
        assert_eq!(pacer.schedule(t0 + Duration::from_millis(21)), Duration::from_millis(19));
    }

    #[test]
    fn test_late_frame_does_not_catch_up() {
        let mut pacer = FramePacer::new(50);
        let t0 = Instant::now();
        pacer.schedule(t0);
        let late = t0 + Duration::from_millis(100);
        assert_eq!(pacer.schedule(late), Duration::ZERO);
        // The next frame is a full period after the late one, not back on the old grid
        assert_eq!(pacer.schedule(late), Duration::from_millis(20));
    }

    #[test]
    fn test_unlimited_never_sleeps() {
        let mut pacer = FramePacer::unlimited();
        assert!(pacer.period().is_none());
        assert_eq!(pacer.schedule(Instant::now()), Duration::ZERO);
    }
}

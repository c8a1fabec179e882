//! # One-Shot Timer
//!
//! The loading screen's 2-second deadline, modeled as an explicit
//! cancelable scheduled task instead of a detached callback. The event
//! loop schedules it when the loading screen mounts, polls it every
//! iteration, and cancels it on teardown.
//!
//! Invariant: at most one firing. Once `poll` has returned `true`, or
//! `cancel` has been called, the timer is disarmed and `poll` returns
//! `false` forever. This is what guarantees no stale transition can fire
//! after the screen that owns the timer is gone.

use std::time::{Duration, Instant};

#[derive(Debug, Default)]
pub struct OneShotTimer {
    deadline: Option<Instant>,
}

impl OneShotTimer {
    pub fn new() -> Self {
        Self { deadline: None }
    }

    /// Arm the timer to fire `duration` from `now`. Re-scheduling an armed
    /// timer replaces the previous deadline.
    pub fn schedule(&mut self, now: Instant, duration: Duration) {
        self.deadline = Some(now + duration);
    }

    /// Disarm without firing.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Returns `true` exactly once, the first time it is called with a
    /// `now` at or past the deadline. Disarms on firing.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Time remaining until the deadline, if armed. Used to pick the event
    /// poll timeout so the deadline is observed promptly.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unarmed_timer_never_fires() {
        let mut timer = OneShotTimer::new();
        assert!(!timer.is_armed());
        assert!(!timer.poll(Instant::now()));
    }

    #[test]
    fn test_fires_once_at_deadline() {
        let start = Instant::now();
        let mut timer = OneShotTimer::new();
        timer.schedule(start, Duration::from_millis(2000));

        assert!(!timer.poll(start + Duration::from_millis(1999)));
        assert!(timer.poll(start + Duration::from_millis(2000)));

        // Disarmed after firing; later polls stay quiet.
        assert!(!timer.is_armed());
        assert!(!timer.poll(start + Duration::from_millis(5000)));
    }

    #[test]
    fn test_cancel_before_deadline_suppresses_firing() {
        // The unmount-at-500ms scenario: no transition may fire afterwards.
        let start = Instant::now();
        let mut timer = OneShotTimer::new();
        timer.schedule(start, Duration::from_millis(2000));

        assert!(!timer.poll(start + Duration::from_millis(500)));
        timer.cancel();

        assert!(!timer.is_armed());
        assert!(!timer.poll(start + Duration::from_millis(3000)));
    }

    #[test]
    fn test_reschedule_replaces_deadline() {
        let start = Instant::now();
        let mut timer = OneShotTimer::new();
        timer.schedule(start, Duration::from_millis(100));
        timer.schedule(start, Duration::from_millis(2000));

        assert!(!timer.poll(start + Duration::from_millis(200)));
        assert!(timer.poll(start + Duration::from_millis(2000)));
    }

    #[test]
    fn test_remaining_counts_down() {
        let start = Instant::now();
        let mut timer = OneShotTimer::new();
        timer.schedule(start, Duration::from_millis(2000));

        assert_eq!(
            timer.remaining(start + Duration::from_millis(1500)),
            Some(Duration::from_millis(500))
        );
        // Past the deadline the remaining time saturates at zero.
        assert_eq!(
            timer.remaining(start + Duration::from_millis(2500)),
            Some(Duration::ZERO)
        );

        timer.cancel();
        assert_eq!(timer.remaining(start), None);
    }
}

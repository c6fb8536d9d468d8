use chrono::{DateTime, Duration, Utc};
use tracing::trace;

use trivia_core::time::seconds_until;

/// What a countdown is timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    /// Time left to answer; remaining seconds are shown to the player.
    Question,
    /// Pause on the outcome screen; nothing is shown.
    Feedback,
}

/// Result of polling the timer slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownTick {
    /// No timer is running.
    Idle,
    /// Running, nothing new to show.
    Pending,
    /// Running, and the visible seconds changed.
    Display(u32),
    /// The deadline passed. The timer has already been released.
    Expired(TimerKind),
}

/// A single countdown towards a fixed deadline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Countdown {
    kind: TimerKind,
    deadline: DateTime<Utc>,
    last_reported: Option<u32>,
}

impl Countdown {
    #[must_use]
    pub fn new(kind: TimerKind, now: DateTime<Utc>, duration: Duration) -> Self {
        Self {
            kind,
            deadline: now + duration,
            last_reported: None,
        }
    }

    #[must_use]
    pub fn kind(&self) -> TimerKind {
        self.kind
    }

    #[must_use]
    pub fn deadline(&self) -> DateTime<Utc> {
        self.deadline
    }

    /// Rounded whole seconds left; zero or negative once due.
    #[must_use]
    pub fn seconds_left(&self, now: DateTime<Utc>) -> i64 {
        seconds_until(self.deadline, now)
    }

    fn poll(&mut self, now: DateTime<Utc>) -> CountdownTick {
        let left = self.seconds_left(now);
        if left <= 0 {
            return CountdownTick::Expired(self.kind);
        }
        if self.kind == TimerKind::Feedback {
            return CountdownTick::Pending;
        }

        let left = u32::try_from(left).unwrap_or(u32::MAX);
        if self.last_reported == Some(left) {
            return CountdownTick::Pending;
        }
        self.last_reported = Some(left);
        CountdownTick::Display(left)
    }
}

/// Owner of the one live countdown.
///
/// Installing a countdown always releases the previous one first, and an
/// expired countdown is removed before its expiry is reported, so a given
/// countdown can expire at most once and never after it was cancelled.
#[derive(Debug, Default)]
pub struct TimerSlot {
    active: Option<Countdown>,
}

impl TimerSlot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel whatever is running and install `countdown`.
    ///
    /// Returns the countdown that was cancelled, if any.
    pub fn replace(&mut self, countdown: Countdown) -> Option<Countdown> {
        let previous = self.cancel();
        trace!(kind = ?countdown.kind, deadline = %countdown.deadline, "timer started");
        self.active = Some(countdown);
        previous
    }

    /// Cancel the running countdown. Safe to call when nothing is running.
    pub fn cancel(&mut self) -> Option<Countdown> {
        let previous = self.active.take();
        if let Some(previous) = previous.as_ref() {
            trace!(kind = ?previous.kind, "timer cancelled");
        }
        previous
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    #[must_use]
    pub fn kind(&self) -> Option<TimerKind> {
        self.active.as_ref().map(Countdown::kind)
    }

    #[must_use]
    pub fn seconds_left(&self, now: DateTime<Utc>) -> Option<i64> {
        self.active.as_ref().map(|c| c.seconds_left(now))
    }

    pub fn poll(&mut self, now: DateTime<Utc>) -> CountdownTick {
        let Some(countdown) = self.active.as_mut() else {
            return CountdownTick::Idle;
        };
        let tick = countdown.poll(now);
        if matches!(tick, CountdownTick::Expired(_)) {
            self.active = None;
        }
        tick
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trivia_core::time::fixed_now;

    fn at(secs: i64) -> DateTime<Utc> {
        fixed_now() + Duration::seconds(secs)
    }

    #[test]
    fn question_countdown_reports_each_second_then_expires() {
        let mut slot = TimerSlot::new();
        slot.replace(Countdown::new(TimerKind::Question, at(0), Duration::seconds(15)));

        let mut shown = Vec::new();
        for second in 0..15 {
            match slot.poll(at(second)) {
                CountdownTick::Display(value) => shown.push(value),
                other => panic!("unexpected {other:?} at {second}s"),
            }
        }
        assert_eq!(shown, (1..=15).rev().collect::<Vec<_>>());
        assert_eq!(slot.poll(at(15)), CountdownTick::Expired(TimerKind::Question));
        assert!(!slot.is_active());
        assert_eq!(slot.poll(at(16)), CountdownTick::Idle);
    }

    #[test]
    fn repeated_polls_within_a_second_do_not_repeat_values() {
        let mut slot = TimerSlot::new();
        slot.replace(Countdown::new(TimerKind::Question, at(0), Duration::seconds(5)));

        assert_eq!(slot.poll(at(0)), CountdownTick::Display(5));
        assert_eq!(slot.poll(at(0)), CountdownTick::Pending);
        assert_eq!(
            slot.poll(at(0) + Duration::milliseconds(300)),
            CountdownTick::Pending
        );
        assert_eq!(slot.poll(at(1)), CountdownTick::Display(4));
    }

    #[test]
    fn late_ticks_do_not_drift() {
        let mut slot = TimerSlot::new();
        slot.replace(Countdown::new(TimerKind::Question, at(0), Duration::seconds(15)));
        let _ = slot.poll(at(0));

        // A tick that arrives 3.2s late jumps straight to the true value.
        let late = at(4) + Duration::milliseconds(200);
        assert_eq!(slot.poll(late), CountdownTick::Display(11));
    }

    #[test]
    fn feedback_countdown_never_displays() {
        let mut slot = TimerSlot::new();
        slot.replace(Countdown::new(TimerKind::Feedback, at(0), Duration::seconds(10)));

        for second in 0..10 {
            assert_eq!(slot.poll(at(second)), CountdownTick::Pending);
        }
        assert_eq!(slot.poll(at(10)), CountdownTick::Expired(TimerKind::Feedback));
    }

    #[test]
    fn replace_releases_previous_and_cancel_is_idempotent() {
        let mut slot = TimerSlot::new();
        assert!(slot.cancel().is_none());

        slot.replace(Countdown::new(TimerKind::Question, at(0), Duration::seconds(15)));
        let previous =
            slot.replace(Countdown::new(TimerKind::Feedback, at(1), Duration::seconds(10)));
        assert_eq!(previous.map(|c| c.kind()), Some(TimerKind::Question));
        assert_eq!(slot.kind(), Some(TimerKind::Feedback));

        assert!(slot.cancel().is_some());
        assert!(slot.cancel().is_none());
        assert_eq!(slot.poll(at(60)), CountdownTick::Idle);
    }

    #[test]
    fn cancelled_timer_never_expires() {
        let mut slot = TimerSlot::new();
        slot.replace(Countdown::new(TimerKind::Question, at(0), Duration::seconds(1)));
        slot.cancel();
        assert_eq!(slot.poll(at(5)), CountdownTick::Idle);
    }
}

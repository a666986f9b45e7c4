//! Cancellable session timers.
//!
//! The ticker and the rollover timer are owned futures rather than queued
//! callbacks. Disarming drops them, so a timer that was cancelled can never
//! be observed firing afterwards.

use std::{pin::Pin, time::Duration};

use tokio::time::{Instant, Interval, MissedTickBehavior, Sleep, interval_at, sleep_until};

/// A timer that fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// Refresh the elapsed-time display.
    Tick,
    /// Close the current segment and start the next one.
    Rollover,
}

/// The ticker and rollover timer of one recording session.
#[derive(Debug, Default)]
pub struct SessionTimers {
    ticker: Option<Interval>,
    rollover: Option<Pin<Box<Sleep>>>,
    rollover_deadline: Option<Instant>,
    rollover_period: Duration,
}

impl SessionTimers {
    /// Arm both timers, counting from now.
    pub fn arm(&mut self, tick_period: Duration, rollover_period: Duration) {
        let now = Instant::now();

        let mut ticker = interval_at(now + tick_period, tick_period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        self.ticker = Some(ticker);
        self.rollover_period = rollover_period;
        self.schedule_rollover(now + rollover_period);
    }

    /// Schedule the next rollover one period after the previous deadline.
    ///
    /// Time spent switching segments does not shift the cadence. A deadline
    /// already in the past fires right away. Has no effect while disarmed.
    pub fn rearm_rollover(&mut self) {
        if self.ticker.is_none() {
            return;
        }

        let now = Instant::now();
        let next = self.rollover_deadline.unwrap_or(now) + self.rollover_period;
        self.schedule_rollover(next.max(now));
    }

    /// Drop both timers.
    pub fn disarm(&mut self) {
        self.ticker = None;
        self.rollover = None;
        self.rollover_deadline = None;
    }

    /// When the pending rollover fires, if one is scheduled.
    pub fn rollover_deadline(&self) -> Option<Instant> {
        self.rollover.as_ref().and(self.rollover_deadline)
    }

    /// Whether the ticker is running.
    pub fn is_armed(&self) -> bool {
        self.ticker.is_some()
    }

    /// Whether a rollover is scheduled.
    pub fn rollover_pending(&self) -> bool {
        self.rollover.is_some()
    }

    /// Wait for the next timer to fire.
    ///
    /// Never completes while disarmed. The rollover timer is one-shot: once
    /// it fires it stays unscheduled until [`rearm_rollover`](Self::rearm_rollover).
    /// Cancel safe.
    pub async fn fired(&mut self) -> TimerEvent {
        let event = match (self.ticker.as_mut(), self.rollover.as_mut()) {
            (Some(ticker), Some(rollover)) => {
                tokio::select! {
                    biased;
                    _ = rollover.as_mut() => TimerEvent::Rollover,
                    _ = ticker.tick() => TimerEvent::Tick,
                }
            }
            (Some(ticker), None) => {
                ticker.tick().await;
                TimerEvent::Tick
            }
            (None, Some(rollover)) => {
                rollover.as_mut().await;
                TimerEvent::Rollover
            }
            (None, None) => std::future::pending().await,
        };

        if event == TimerEvent::Rollover {
            self.rollover = None;
        }

        event
    }

    fn schedule_rollover(&mut self, deadline: Instant) {
        self.rollover_deadline = Some(deadline);
        self.rollover = Some(Box::pin(sleep_until(deadline)));
    }
}

use crate::{SessionTimers, TimerEvent};

use std::time::Duration;

use tokio::time::{Instant, timeout};

const TICK: Duration = Duration::from_secs(1);
const ROLLOVER: Duration = Duration::from_secs(5);

/// WHAT: Disarmed timers never fire
/// WHY: A cancelled timer must be unreachable, not merely ignored
#[tokio::test(start_paused = true)]
async fn given_disarmed_timers_when_waiting_then_nothing_fires() {
    // Given: Timers that were never armed
    let mut timers = SessionTimers::default();

    // When: Waiting far longer than any period
    let result = timeout(Duration::from_secs(3600), timers.fired()).await;

    // Then: Nothing fired
    assert!(result.is_err());
}

/// WHAT: Armed ticker fires once per period starting one period after arming
/// WHY: The first display refresh happens at 00:00:01, not immediately
#[tokio::test(start_paused = true)]
async fn given_armed_timers_when_waiting_then_ticks_fire_each_period() {
    // Given: Freshly armed timers
    let mut timers = SessionTimers::default();
    let armed_at = Instant::now();
    timers.arm(TICK, ROLLOVER);

    // When: Waiting for two events
    let first = timers.fired().await;
    let first_at = armed_at.elapsed();
    let second = timers.fired().await;
    let second_at = armed_at.elapsed();

    // Then: Both are ticks, one period apart
    assert_eq!((first, first_at), (TimerEvent::Tick, TICK));
    assert_eq!((second, second_at), (TimerEvent::Tick, TICK * 2));
}

/// WHAT: Rollover is one-shot until re-armed
/// WHY: Each rollover reschedules itself only after the segment switch succeeds
#[tokio::test(start_paused = true)]
async fn given_fired_rollover_when_not_rearmed_then_only_ticks_follow() {
    // Given: Armed timers
    let mut timers = SessionTimers::default();
    timers.arm(TICK, ROLLOVER);

    // When: Draining events until the rollover fires
    let mut events = Vec::new();
    loop {
        let event = timers.fired().await;
        events.push(event);
        if event == TimerEvent::Rollover {
            break;
        }
    }

    // Then: Rollover came after four ticks and is no longer pending
    assert_eq!(events.len(), 5);
    assert!(!timers.rollover_pending());

    // Then: The next ten seconds only produce ticks
    for _ in 0..10 {
        assert_eq!(timers.fired().await, TimerEvent::Tick);
    }
}

/// WHAT: Re-armed rollover fires one full period after the previous one
/// WHY: Segments follow a fixed cadence from the start of the session
#[tokio::test(start_paused = true)]
async fn given_rearmed_rollover_when_waiting_then_fires_one_period_later() {
    // Given: Armed timers with the first rollover consumed at t=5s
    let mut timers = SessionTimers::default();
    let armed_at = Instant::now();
    timers.arm(TICK, ROLLOVER);
    while timers.fired().await != TimerEvent::Rollover {}

    // When: Re-arming and waiting for the next rollover
    timers.rearm_rollover();
    while timers.fired().await != TimerEvent::Rollover {}

    // Then: It landed at t=10s
    assert_eq!(armed_at.elapsed(), ROLLOVER * 2);
}

/// WHAT: A slow segment switch does not push later rollovers back
/// WHY: Finalizing a segment takes real time and must not accumulate as drift
#[tokio::test(start_paused = true)]
async fn given_slow_switch_when_rearming_then_deadline_keeps_cadence() {
    // Given: The first rollover consumed at t=5s
    let mut timers = SessionTimers::default();
    let armed_at = Instant::now();
    timers.arm(TICK, ROLLOVER);
    assert_eq!(timers.rollover_deadline(), Some(armed_at + ROLLOVER));
    while timers.fired().await != TimerEvent::Rollover {}
    assert_eq!(timers.rollover_deadline(), None);

    // When: The switch takes two seconds before re-arming
    tokio::time::advance(Duration::from_secs(2)).await;
    timers.rearm_rollover();

    // Then: The next rollover is still due at t=10s and fires there
    assert_eq!(timers.rollover_deadline(), Some(armed_at + ROLLOVER * 2));
    while timers.fired().await != TimerEvent::Rollover {}
    assert_eq!(armed_at.elapsed(), ROLLOVER * 2);
}

/// WHAT: Disarming mid-session cancels both timers
/// WHY: Stopping must leave no scheduled work behind
#[tokio::test(start_paused = true)]
async fn given_armed_timers_when_disarmed_then_nothing_fires() {
    // Given: Armed timers with one tick consumed
    let mut timers = SessionTimers::default();
    timers.arm(TICK, ROLLOVER);
    assert_eq!(timers.fired().await, TimerEvent::Tick);

    // When: Disarming
    timers.disarm();
    timers.rearm_rollover();

    // Then: Nothing is armed and nothing fires
    assert!(!timers.is_armed());
    assert!(!timers.rollover_pending());
    let result = timeout(Duration::from_secs(60), timers.fired()).await;
    assert!(result.is_err());
}

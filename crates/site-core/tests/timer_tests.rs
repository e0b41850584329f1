// Host-side tests for the frame-driven idle timer.

use site_core::{IdleTimer, IDLE_TICK_MS};
use std::time::Duration;

#[test]
fn fires_once_per_period() {
    let mut timer = IdleTimer::from_millis(IDLE_TICK_MS);
    assert_eq!(timer.period(), Duration::from_millis(2000));
    assert_eq!(timer.advance(Duration::from_millis(1999)), 0);
    assert_eq!(timer.advance(Duration::from_millis(1)), 1);
    assert_eq!(timer.advance(Duration::from_millis(4500)), 2);
    assert_eq!(timer.advance(Duration::from_millis(1500)), 1);
}

#[test]
fn reset_discards_partial_period() {
    let mut timer = IdleTimer::from_millis(2000);
    timer.advance(Duration::from_millis(1900));
    timer.reset();
    assert_eq!(timer.advance(Duration::from_millis(1900)), 0);
}

#[test]
fn zero_period_never_fires() {
    let mut timer = IdleTimer::new(Duration::ZERO);
    assert_eq!(timer.advance(Duration::from_secs(10)), 0);
}

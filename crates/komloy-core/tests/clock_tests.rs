// Host-side tests for fixed-step scheduling.

use komloy_core::*;
use std::time::Duration;

#[test]
fn whole_steps_are_emitted_and_remainder_carried() {
    let mut clock = TickClock::new(Duration::from_millis(16), 5);
    assert_eq!(clock.advance(Duration::from_millis(10)), 0);
    assert_eq!(clock.advance(Duration::from_millis(10)), 1);
    assert_eq!(clock.advance(Duration::from_millis(28)), 2);
}

#[test]
fn backlog_is_capped_after_a_stall() {
    let mut clock = TickClock::default();
    assert_eq!(clock.advance(Duration::from_secs(3)), MAX_CATCH_UP_TICKS);
    // The dropped backlog does not leak into later frames.
    assert_eq!(clock.advance(Duration::from_millis(1)), 0);
}

#[test]
fn default_step_matches_sixty_hertz_timer() {
    let clock = TickClock::default();
    assert_eq!(clock.step(), Duration::from_millis(TICK_INTERVAL_MS));
}

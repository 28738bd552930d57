//! Full gesture workflows: enter, move, exit, and teardown.

use parallax::{MoveTargetOverrides, ParallaxConfig};

use crate::helpers::{move_event, rig, rig_settling, rig_with};

#[test]
fn test_starts_latched_by_default() {
    let rig = rig();
    assert!(rig.parallax.latched());
}

#[test]
fn test_starts_unlatched_when_move_on_latch_only() {
    let rig = rig_with(ParallaxConfig {
        move_on_latch_only: true,
        ..Default::default()
    });
    assert!(!rig.parallax.latched());
}

#[test]
fn test_enter_is_a_noop_while_already_latched() {
    let rig = rig();
    let props = rig.parallax.move_target_props(MoveTargetOverrides::default());

    (props.on_enter)();

    assert!(rig.parallax.latched());
    assert_eq!(rig.scheduler.pending(), 0);
}

#[test]
fn test_delayed_latch_engages_after_enter() {
    let rig = rig_with(ParallaxConfig {
        move_on_latch_only: true,
        ..Default::default()
    });
    let props = rig.parallax.move_target_props(MoveTargetOverrides::default());

    (props.on_enter)();
    assert_eq!(rig.scheduler.pending(), 1);

    // A move before the delay elapses is dropped.
    (props.on_move)(&move_event(0.3, 0.7));
    assert!(!rig.parallax.latched());
    assert_eq!(rig.parallax.x().get(), 0.5);

    // After the delay the latch engages and moves are applied.
    rig.scheduler.run_pending();
    assert!(rig.parallax.latched());
    (props.on_move)(&move_event(0.3, 0.7));
    assert_eq!(rig.parallax.x().get(), 0.7);
    assert_eq!(rig.parallax.y().get(), 0.3);
}

#[test]
fn test_exit_unlatches_synchronously_and_springs_toward_rest() {
    let rig = rig();
    let props = rig.parallax.move_target_props(MoveTargetOverrides::default());

    (props.on_move)(&move_event(0.1, 0.9));
    assert_eq!(rig.parallax.x().get(), 0.9);

    (props.on_exit)();

    // The latch drops immediately; the channels are still mid-flight
    // because the springs run on the driver's own schedule.
    assert!(!rig.parallax.latched());
    assert_eq!(rig.parallax.x().get(), 0.9);

    let springs = rig.driver.started();
    assert_eq!(springs.len(), 2);
    for spring in &springs {
        assert_eq!(spring.target, 0.5);
        assert_eq!(spring.friction, 4.0);
        assert_eq!(spring.tension, 40.0);
    }
}

#[test]
fn test_settled_exit_returns_both_channels_to_rest() {
    let rig = rig_settling(ParallaxConfig {
        initial_x: 0.25,
        initial_y: 0.75,
        ..Default::default()
    });
    let props = rig.parallax.move_target_props(MoveTargetOverrides::default());

    (props.on_move)(&move_event(0.9, 0.1));
    (props.on_exit)();

    assert_eq!(rig.parallax.x().get(), 0.25);
    assert_eq!(rig.parallax.y().get(), 0.75);
    assert!(!rig.parallax.latched());
}

#[test]
fn test_reentrant_exit_restarts_the_springs() {
    let rig = rig();
    let props = rig.parallax.move_target_props(MoveTargetOverrides::default());

    (props.on_exit)();
    (props.on_exit)();

    assert_eq!(rig.driver.started_count(), 4);
    assert!(!rig.parallax.latched());
}

#[test]
fn test_exit_unlatches_regardless_of_prior_state() {
    let rig = rig_with(ParallaxConfig {
        move_on_latch_only: true,
        ..Default::default()
    });
    let props = rig.parallax.move_target_props(MoveTargetOverrides::default());

    // Already unlatched; exit must not toggle it back on.
    assert!(!rig.parallax.latched());
    (props.on_exit)();
    assert!(!rig.parallax.latched());
}

#[test]
fn test_toggle_latch_flips_and_restores() {
    let rig = rig();

    assert!(rig.parallax.latched());
    rig.parallax.toggle_latch();
    assert!(!rig.parallax.latched());
    rig.parallax.toggle_latch();
    assert!(rig.parallax.latched());
}

#[test]
fn test_manual_unlatch_drops_subsequent_moves() {
    let rig = rig();
    let props = rig.parallax.move_target_props(MoveTargetOverrides::default());

    rig.parallax.toggle_latch();
    (props.on_move)(&move_event(0.9, 0.9));

    assert_eq!(rig.parallax.x().get(), 0.5);
    assert_eq!(rig.parallax.y().get(), 0.5);
}

#[test]
fn test_drop_cancels_pending_latch() {
    let rig = rig_with(ParallaxConfig {
        move_on_latch_only: true,
        ..Default::default()
    });
    let props = rig.parallax.move_target_props(MoveTargetOverrides::default());
    let x = rig.parallax.x().clone();

    (props.on_enter)();
    drop(rig.parallax);

    // The queued timer fires into released state as a no-op.
    rig.scheduler.run_pending();
    (props.on_move)(&move_event(0.9, 0.9));
    assert_eq!(x.get(), 0.5);
}

#[test]
fn test_drop_stops_in_flight_springs() {
    let rig = rig();
    let props = rig.parallax.move_target_props(MoveTargetOverrides::default());

    (props.on_exit)();
    drop(rig.parallax);

    assert_eq!(rig.driver.stopped_count(), 2);
}

#[test]
fn test_late_timer_without_teardown_is_last_writer_wins() {
    let rig = rig_with(ParallaxConfig {
        move_on_latch_only: true,
        ..Default::default()
    });
    let props = rig.parallax.move_target_props(MoveTargetOverrides::default());

    // Two enters queue two transitions; both fire, both set Latched.
    (props.on_enter)();
    (props.on_enter)();
    assert_eq!(rig.scheduler.pending(), 2);
    rig.scheduler.run_pending();
    assert!(rig.parallax.latched());
}

//! Unit tests for the transform-style output assembly.

use parallax::{Extrapolation, MoveTargetOverrides, ParallaxConfig, RotationAxis, Sample};

use crate::helpers::{move_event, rig, rig_with};

#[test]
fn test_entries_come_in_fixed_order() {
    let rig = rig();
    let [first, second] = rig.parallax.transform_style();
    assert_eq!(first.axis, RotationAxis::RotateX);
    assert_eq!(second.axis, RotationAxis::RotateY);
}

#[test]
fn test_rest_position_maps_to_mid_range() {
    let rig = rig();
    let [x_entry, y_entry] = rig.parallax.transform_style();
    assert_eq!(x_entry.rotation.sample(), 0.0);
    assert_eq!(y_entry.rotation.sample(), 0.0);
}

#[test]
fn test_default_bounds_scenario() {
    let rig = rig();
    let props = rig.parallax.move_target_props(MoveTargetOverrides::default());

    (props.on_move)(&move_event(0.2, 0.8));

    let [x_entry, y_entry] = rig.parallax.transform_style();
    assert!((x_entry.rotation.sample() - 9.0).abs() < 1e-9);
    assert!((y_entry.rotation.sample() - -9.0).abs() < 1e-9);
}

#[test]
fn test_flip_negates_without_changing_magnitude() {
    let plain = rig();
    let flipped = rig_with(ParallaxConfig {
        flip_x: true,
        flip_y: true,
        ..Default::default()
    });

    for rig in [&plain, &flipped] {
        let props = rig.parallax.move_target_props(MoveTargetOverrides::default());
        (props.on_move)(&move_event(0.2, 0.8));
    }

    let [px, py] = plain.parallax.transform_style();
    let [fx, fy] = flipped.parallax.transform_style();
    assert_eq!(fx.rotation.sample(), -px.rotation.sample());
    assert_eq!(fy.rotation.sample(), -py.rotation.sample());
}

#[test]
fn test_extend_lets_fast_motion_overshoot() {
    let rig = rig();
    let props = rig.parallax.move_target_props(MoveTargetOverrides::default());

    (props.on_move)(&move_event(0.5, 1.4));

    let [x_entry, _] = rig.parallax.transform_style();
    assert!((x_entry.rotation.sample() - 27.0).abs() < 1e-9);
}

#[test]
fn test_clamp_pins_fast_motion_to_bounds() {
    let rig = rig_with(ParallaxConfig {
        extrapolation: Extrapolation::Clamp,
        ..Default::default()
    });
    let props = rig.parallax.move_target_props(MoveTargetOverrides::default());

    (props.on_move)(&move_event(0.5, 1.4));

    let [x_entry, _] = rig.parallax.transform_style();
    assert_eq!(x_entry.rotation.sample(), 15.0);
}

#[test]
fn test_render_passes_state_through() {
    let rig = rig();
    let latched = rig.parallax.render(|state| Some(state.latched()));
    assert_eq!(latched, Some(true));
}

#[test]
fn test_render_tolerates_empty_output() {
    let rig = rig();
    let rendered = rig.parallax.render(|_| None::<()>);
    assert_eq!(rendered, None);
}

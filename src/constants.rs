//! Crate-wide constants.
//!
//! Centralizes the default configuration values and timing constants so they
//! are defined in exactly one place.

use std::time::Duration;

// ============================================================================
// Rotation Defaults
// ============================================================================

/// Default lower rotation bound in degrees
pub const DEFAULT_DEGREE_LOWER_BOUND: f64 = -15.0;

/// Default upper rotation bound in degrees
pub const DEFAULT_DEGREE_UPPER_BOUND: f64 = 15.0;

/// Normalized input range for the move-offset interpolation
pub const MOVE_INPUT_RANGE: [f64; 2] = [0.0, 1.0];

// ============================================================================
// Rest Position Defaults
// ============================================================================

/// Default rest position of the x rotation channel, in [0, 1]
pub const DEFAULT_REST_X: f64 = 0.5;

/// Default rest position of the y rotation channel, in [0, 1]
pub const DEFAULT_REST_Y: f64 = 0.5;

// ============================================================================
// Interaction Defaults
// ============================================================================

/// Default hit-region padding applied to all four edges
pub const DEFAULT_SLOP: f64 = 0.1;

/// Default friction of the exit spring (controls overshoot)
pub const DEFAULT_SPRING_FRICTION: f64 = 4.0;

/// Default tension of the exit spring (controls speed)
pub const DEFAULT_SPRING_TENSION: f64 = 40.0;

/// Delay between a pointer-enter event and the scheduled latch transition.
/// Quick passes over the surface shorter than this never latch.
pub const LATCH_DELAY: Duration = Duration::from_millis(30);

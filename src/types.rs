//! Core types for the parallax interaction system.
//!
//! This module defines the construction-time configuration record, the
//! pointer event payload handed in by the rendering layer, and the hit-region
//! padding handed back to it.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{
    DEFAULT_DEGREE_LOWER_BOUND, DEFAULT_DEGREE_UPPER_BOUND, DEFAULT_REST_X, DEFAULT_REST_Y,
    DEFAULT_SLOP, DEFAULT_SPRING_FRICTION, DEFAULT_SPRING_TENSION,
};

// ============================================================================
// Configuration
// ============================================================================

/// How the move-offset interpolation treats inputs outside [0, 1].
///
/// Fast pointer motion can report offsets past the edges of the surface, so
/// with `Extend` the rotation may overshoot the configured degree bounds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Extrapolation {
    /// Extend the linear mapping past the bounds (overshoot allowed)
    #[default]
    Extend,
    /// Pin out-of-range inputs to the configured bounds
    Clamp,
}

/// Per-instance configuration, immutable after construction.
///
/// All fields have defaults, so hosts can deserialize a partial record from
/// their settings layer and get the missing fields filled in.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParallaxConfig {
    /// Lower rotation bound in degrees
    pub degree_lower_bound: f64,
    /// Upper rotation bound in degrees
    pub degree_upper_bound: f64,
    /// Hit-region padding applied uniformly to all four edges
    pub slop: f64,
    /// Rest position of the x rotation channel, in [0, 1]
    pub initial_x: f64,
    /// Rest position of the y rotation channel, in [0, 1]
    pub initial_y: f64,
    /// Friction of the exit spring (controls overshoot of the return)
    pub exit_spring_friction: f64,
    /// Tension of the exit spring (controls speed of the return)
    pub exit_spring_tension: f64,
    /// Invert the sign of the x rotation output
    pub flip_x: bool,
    /// Invert the sign of the y rotation output
    pub flip_y: bool,
    /// Ignore move events until an explicit latch
    pub move_on_latch_only: bool,
    /// How interpolation treats move offsets outside [0, 1]
    pub extrapolation: Extrapolation,
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self {
            degree_lower_bound: DEFAULT_DEGREE_LOWER_BOUND,
            degree_upper_bound: DEFAULT_DEGREE_UPPER_BOUND,
            slop: DEFAULT_SLOP,
            initial_x: DEFAULT_REST_X,
            initial_y: DEFAULT_REST_Y,
            exit_spring_friction: DEFAULT_SPRING_FRICTION,
            exit_spring_tension: DEFAULT_SPRING_TENSION,
            flip_x: false,
            flip_y: false,
            move_on_latch_only: false,
            extrapolation: Extrapolation::Extend,
        }
    }
}

impl ParallaxConfig {
    /// Validate the record, returning the first violated constraint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.degree_lower_bound > self.degree_upper_bound {
            return Err(ConfigError::ReversedBounds {
                lower: self.degree_lower_bound,
                upper: self.degree_upper_bound,
            });
        }
        if self.slop < 0.0 {
            return Err(ConfigError::NegativeSlop(self.slop));
        }
        for (axis, value) in [("x", self.initial_x), ("y", self.initial_y)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::RestOutOfRange { axis, value });
            }
        }
        for (param, value) in [
            ("friction", self.exit_spring_friction),
            ("tension", self.exit_spring_tension),
        ] {
            if value <= 0.0 {
                return Err(ConfigError::NonPositiveSpring { param, value });
            }
        }
        Ok(())
    }
}

/// Constraint violations in a [`ParallaxConfig`], reported at construction.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConfigError {
    #[error("degree bounds reversed: lower {lower} > upper {upper}")]
    ReversedBounds { lower: f64, upper: f64 },

    #[error("slop must be non-negative, got {0}")]
    NegativeSlop(f64),

    #[error("initial_{axis} must be within [0, 1], got {value}")]
    RestOutOfRange { axis: &'static str, value: f64 },

    #[error("exit spring {param} must be positive, got {value}")]
    NonPositiveSpring { param: &'static str, value: f64 },
}

// ============================================================================
// Pointer Events
// ============================================================================

/// A pointer-move sample forwarded by the rendering layer.
///
/// The offset is the pointer position normalized to the interactive surface,
/// each axis nominally in [0, 1]. Values outside that range are legal and
/// handled per the configured [`Extrapolation`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MoveEvent {
    pub offset: (f64, f64),
}

impl MoveEvent {
    pub fn new(offset: (f64, f64)) -> Self {
        Self { offset }
    }
}

// ============================================================================
// Hit Region
// ============================================================================

/// Padding extending the interactive hit region on all four edges.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EdgeInsets {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

impl EdgeInsets {
    /// Same padding on every edge.
    pub fn uniform(value: f64) -> Self {
        Self {
            top: value,
            bottom: value,
            left: value,
            right: value,
        }
    }
}

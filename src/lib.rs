//! Render-agnostic parallax tilt interaction state.
//!
//! This crate manages the state needed to compute x, y rotations for a
//! parallax effect, leaving the host free to decide how and where the effect
//! is drawn. It owns no pixels: the host attaches the composed handlers to
//! its interactive surface, forwards pointer move/enter/exit events into
//! them, and samples the derived rotation values when drawing.
//!
//! ## Architecture
//!
//! - [`Parallax`] holds the two rotation channels and the latch state and
//!   exposes the state-and-helpers surface.
//! - The `input` module gates move events behind the latch machine and
//!   merges caller-supplied handlers with the internal tracking logic.
//! - The `animation` module provides the shared value cells and derived
//!   interpolation nodes, plus the capability traits ([`SpringDriver`],
//!   [`Scheduler`]) the host's animation engine satisfies. The crate never
//!   integrates spring physics or runs timers itself.
//!
//! ## Usage
//!
//! ```ignore
//! let tilt = Parallax::new(ParallaxConfig::default(), driver, scheduler)?;
//! let props = tilt.move_target_props(MoveTargetOverrides::default());
//! // attach props.on_move / on_enter / on_exit to the surface, pad its hit
//! // region by props.hit_slop, and sample tilt.transform_style() per frame.
//! ```

pub mod animation;
pub mod constants;
mod input;
mod parallax;
pub mod perf;
pub mod types;

pub use animation::{
    AnimatedValue, Interpolation, OffsetBinding, Product, Sample, Scheduler, SpringDriver,
    SpringHandle, SpringParams, TimerGuard,
};
pub use input::{LatchState, MoveCallback, MoveTargetOverrides, MoveTargetProps, PointerCallback};
pub use parallax::{Parallax, RotationAxis, TransformEntry};
pub use types::{ConfigError, EdgeInsets, Extrapolation, MoveEvent, ParallaxConfig};

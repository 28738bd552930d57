//! Pointer input handling for the parallax surface.
//!
//! ## Architecture
//!
//! Move events only reach the rotation channels while the latch state
//! machine is engaged. The composer wraps caller-supplied handlers so the
//! rendering layer attaches one bundle and both sides run on every event.
//!
//! ## Modules
//!
//! - `latch` - Latch state machine gating move tracking
//! - `compose` - Handler composition and the move-target prop bundle

mod compose;
mod latch;

pub use compose::{MoveCallback, MoveTargetOverrides, MoveTargetProps, PointerCallback};
pub use latch::LatchState;

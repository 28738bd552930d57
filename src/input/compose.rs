//! Event composition - merges caller handlers with internal tracking logic.
//!
//! ## Performance Notes
//!
//! The composed move handler runs at pointer-sample rate (potentially 60+
//! times per second while the pointer is over the surface). Key constraints:
//! - The channel binding is built once at composition time
//! - Applying an event is two cell writes, no allocation
//! - Early exit while unlatched
//!
//! Enable profiling with `cargo build --features profiling` to see timing.

use std::sync::Arc;

use crate::animation::OffsetBinding;
use crate::parallax::Parallax;
use crate::profile_scope;
use crate::types::{EdgeInsets, MoveEvent};

/// Caller-supplied move handler, invoked before the internal one.
pub type MoveCallback = Box<dyn Fn(&MoveEvent) + Send + Sync>;

/// Caller-supplied enter/exit handler, invoked before the internal one.
pub type PointerCallback = Box<dyn Fn() + Send + Sync>;

/// Optional caller handlers to merge into the composed bundle.
#[derive(Default)]
pub struct MoveTargetOverrides {
    pub on_move: Option<MoveCallback>,
    pub on_enter: Option<PointerCallback>,
    pub on_exit: Option<PointerCallback>,
}

/// The handler bundle the rendering layer attaches to its interactive
/// surface. Each handler runs the caller's callback (when given) and then
/// the internal tracking logic, once each per event.
pub struct MoveTargetProps {
    pub on_move: MoveCallback,
    pub on_enter: PointerCallback,
    pub on_exit: PointerCallback,
    /// Padding extending the surface's hit region on all four edges
    pub hit_slop: EdgeInsets,
}

impl Parallax {
    /// Compose the props for the element that controls the parallax effect
    /// by being moved over.
    pub fn move_target_props(&self, overrides: MoveTargetOverrides) -> MoveTargetProps {
        // First offset component feeds y, second feeds x.
        let binding = OffsetBinding::new(self.shared.y.clone(), self.shared.x.clone());
        let move_shared = Arc::clone(&self.shared);
        let internal_move = move |event: &MoveEvent| {
            profile_scope!("parallax_on_move");
            if !move_shared.latch.lock().is_latched() {
                return;
            }
            binding.apply(event.offset);
        };

        let enter_shared = Arc::clone(&self.shared);
        let internal_enter = move || enter_shared.handle_enter();

        let exit_shared = Arc::clone(&self.shared);
        let internal_exit = move || exit_shared.handle_exit();

        MoveTargetProps {
            on_move: chain_move(overrides.on_move, internal_move),
            on_enter: chain_pointer(overrides.on_enter, internal_enter),
            on_exit: chain_pointer(overrides.on_exit, internal_exit),
            hit_slop: EdgeInsets::uniform(self.shared.config.slop),
        }
    }
}

/// Run the caller's move handler (if any), then the internal one.
fn chain_move(
    caller: Option<MoveCallback>,
    internal: impl Fn(&MoveEvent) + Send + Sync + 'static,
) -> MoveCallback {
    match caller {
        Some(caller) => Box::new(move |event| {
            caller(event);
            internal(event);
        }),
        None => Box::new(internal),
    }
}

/// Run the caller's enter/exit handler (if any), then the internal one.
fn chain_pointer(
    caller: Option<PointerCallback>,
    internal: impl Fn() + Send + Sync + 'static,
) -> PointerCallback {
    match caller {
        Some(caller) => Box::new(move || {
            caller();
            internal();
        }),
        None => Box::new(internal),
    }
}

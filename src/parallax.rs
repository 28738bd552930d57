//! The parallax instance - construction, pointer-driven transitions, and the
//! state-and-helpers surface read by the rendering layer.
//!
//! The instance owns the two rotation channels and the latch state. Handler
//! closures built by the event composer, the delayed latch timer, and the
//! instance itself all hold the same shared state, so everything mutable
//! lives behind one `Arc`.

use std::sync::{Arc, Weak};

use parking_lot::Mutex;
use tracing::debug;

use crate::animation::{
    AnimatedValue, Interpolation, Product, Scheduler, SpringDriver, SpringHandle, SpringParams,
    TimerGuard, sign_for,
};
use crate::constants::{LATCH_DELAY, MOVE_INPUT_RANGE};
use crate::input::LatchState;
use crate::types::{ConfigError, ParallaxConfig};

// ============================================================================
// Transform Output
// ============================================================================

/// Axis of one rotation entry in the transform style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationAxis {
    RotateX,
    RotateY,
}

/// One flipped, interpolated rotation the render layer samples per frame.
#[derive(Debug, Clone)]
pub struct TransformEntry {
    pub axis: RotationAxis,
    pub rotation: Product,
}

// ============================================================================
// Instance
// ============================================================================

/// State shared between the instance, its composed handlers, and the
/// delayed latch timer.
pub(crate) struct ParallaxShared {
    pub(crate) config: ParallaxConfig,
    pub(crate) x: AnimatedValue,
    pub(crate) y: AnimatedValue,
    pub(crate) latch: Mutex<LatchState>,
    driver: Arc<dyn SpringDriver>,
    scheduler: Arc<dyn Scheduler>,
    /// Back-reference handed to deferred callbacks; a firing that outlives
    /// every strong holder upgrades to `None`
    self_weak: Weak<ParallaxShared>,
    /// Guard of the most recently scheduled latch transition
    pending_latch: Mutex<Option<TimerGuard>>,
    /// In-flight exit springs, x then y
    springs: Mutex<[Option<Box<dyn SpringHandle>>; 2]>,
}

impl ParallaxShared {
    pub(crate) fn set_latch(&self, next: LatchState) {
        let mut latch = self.latch.lock();
        let current = *latch;
        if current != next {
            debug!(from = ?current, to = ?next, "latch transition");
            *latch = next;
        }
    }

    pub(crate) fn toggle_latch(&self) {
        let mut latch = self.latch.lock();
        let current = *latch;
        let next = current.toggled();
        debug!(from = ?current, to = ?next, "latch toggled");
        *latch = next;
    }

    /// Pointer entered the surface. With `move_on_latch_only` the latch
    /// engages only after [`LATCH_DELAY`], so quick passes never latch;
    /// otherwise tracking is already engaged and enter is a no-op.
    pub(crate) fn handle_enter(&self) {
        if !self.config.move_on_latch_only {
            return;
        }
        let guard = TimerGuard::new();
        let cancelled = guard.clone();
        let weak = self.self_weak.clone();
        self.scheduler.schedule_once(
            LATCH_DELAY,
            Box::new(move || {
                if cancelled.is_cancelled() {
                    return;
                }
                if let Some(shared) = weak.upgrade() {
                    shared.set_latch(LatchState::Latched);
                }
            }),
        );
        *self.pending_latch.lock() = Some(guard);
    }

    /// Pointer left the surface. Both channels spring back to their rest
    /// position concurrently, and the latch disengages immediately rather
    /// than waiting for the springs to settle.
    pub(crate) fn handle_exit(&self) {
        let params_x = SpringParams {
            to_value: self.config.initial_x,
            friction: self.config.exit_spring_friction,
            tension: self.config.exit_spring_tension,
        };
        let params_y = SpringParams {
            to_value: self.config.initial_y,
            ..params_x
        };
        debug!(
            to_x = params_x.to_value,
            to_y = params_y.to_value,
            "starting exit springs"
        );

        // A re-entrant exit replaces the stored handles; superseding an
        // in-flight spring is the driver's documented restart behavior.
        let mut springs = self.springs.lock();
        let mut x_handle = self.driver.spring(&self.x, params_x);
        x_handle.start();
        springs[0] = Some(x_handle);
        let mut y_handle = self.driver.spring(&self.y, params_y);
        y_handle.start();
        springs[1] = Some(y_handle);
        drop(springs);

        self.set_latch(LatchState::Unlatched);
    }
}

/// Tracks the state needed to compute x, y rotations for a parallax effect.
///
/// The instance owns no pixels. The rendering layer attaches the handlers
/// from [`move_target_props`](Parallax::move_target_props) to its
/// interactive surface and samples [`transform_style`](Parallax::transform_style)
/// when drawing.
pub struct Parallax {
    pub(crate) shared: Arc<ParallaxShared>,
}

impl Parallax {
    /// Build an instance from a validated configuration and the host's
    /// animation capabilities.
    pub fn new(
        config: ParallaxConfig,
        driver: Arc<dyn SpringDriver>,
        scheduler: Arc<dyn Scheduler>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let shared = Arc::new_cyclic(|self_weak| ParallaxShared {
            x: AnimatedValue::new(config.initial_x),
            y: AnimatedValue::new(config.initial_y),
            latch: Mutex::new(LatchState::initial(config.move_on_latch_only)),
            driver,
            scheduler,
            self_weak: self_weak.clone(),
            pending_latch: Mutex::new(None),
            springs: Mutex::new([None, None]),
            config,
        });
        Ok(Self { shared })
    }

    pub fn config(&self) -> &ParallaxConfig {
        &self.shared.config
    }

    /// Raw x rotation channel, normalized pointer offset.
    pub fn x(&self) -> &AnimatedValue {
        &self.shared.x
    }

    /// Raw y rotation channel, normalized pointer offset.
    pub fn y(&self) -> &AnimatedValue {
        &self.shared.y
    }

    /// Whether move events currently reach the rotation channels.
    pub fn latched(&self) -> bool {
        self.shared.latch.lock().is_latched()
    }

    /// Manually flip the latch, independent of pointer events.
    pub fn toggle_latch(&self) {
        self.shared.toggle_latch();
    }

    /// The two rotation entries for the render layer's transform, x axis
    /// first. Rebuilt on every call; sampling is side-effect-free.
    pub fn transform_style(&self) -> [TransformEntry; 2] {
        let config = &self.shared.config;
        [
            TransformEntry {
                axis: RotationAxis::RotateX,
                rotation: Product::new(
                    sign_for(config.flip_x),
                    self.interpolate_move_offset(&self.shared.x),
                ),
            },
            TransformEntry {
                axis: RotationAxis::RotateY,
                rotation: Product::new(
                    sign_for(config.flip_y),
                    self.interpolate_move_offset(&self.shared.y),
                ),
            },
        ]
    }

    /// Hand the current state and helpers to a caller-supplied render
    /// callback. A callback yielding `None` renders nothing.
    pub fn render<T>(&self, render: impl FnOnce(&Self) -> Option<T>) -> Option<T> {
        render(self)
    }

    fn interpolate_move_offset(&self, channel: &AnimatedValue) -> Interpolation {
        let config = &self.shared.config;
        channel.interpolate(
            MOVE_INPUT_RANGE,
            [config.degree_lower_bound, config.degree_upper_bound],
            config.extrapolation,
        )
    }
}

impl Drop for Parallax {
    // Composed handlers may keep the shared state alive past the instance;
    // pending work is cancelled here, not only via the weak upgrade.
    fn drop(&mut self) {
        if let Some(guard) = self.shared.pending_latch.lock().take() {
            guard.cancel();
        }
        for slot in self.shared.springs.lock().iter_mut() {
            if let Some(mut handle) = slot.take() {
                handle.stop();
            }
        }
    }
}

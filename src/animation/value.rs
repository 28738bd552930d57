//! Animatable scalar values and the derived nodes read by the render layer.
//!
//! An [`AnimatedValue`] is a shared mutable cell: the event-binding path and
//! the spring driver both write it, the render layer samples it every frame.
//! Derived nodes ([`Interpolation`], [`Product`]) are cheap value types that
//! hold a handle to their source and compute on every sample, so they can be
//! rebuilt on each read without side effects.

use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::Mutex;

use crate::types::Extrapolation;

/// Anything the render layer can sample for a current scalar value.
pub trait Sample {
    fn sample(&self) -> f64;
}

// ============================================================================
// Shared Value Cell
// ============================================================================

/// A shared, mutable animatable scalar.
///
/// Clones share the same underlying cell, so a clone handed to an event
/// binding or a spring driver writes through to every reader.
#[derive(Clone, Debug)]
pub struct AnimatedValue {
    cell: Arc<Mutex<f64>>,
}

impl AnimatedValue {
    pub fn new(value: f64) -> Self {
        Self {
            cell: Arc::new(Mutex::new(value)),
        }
    }

    pub fn get(&self) -> f64 {
        *self.cell.lock()
    }

    pub fn set(&self, value: f64) {
        *self.cell.lock() = value;
    }

    /// Derive a node that linearly remaps this value from `input` to
    /// `output`. The input range must be non-degenerate.
    pub fn interpolate(
        &self,
        input: [f64; 2],
        output: [f64; 2],
        extrapolation: Extrapolation,
    ) -> Interpolation {
        Interpolation {
            source: self.clone(),
            input,
            output,
            extrapolation,
        }
    }
}

impl Sample for AnimatedValue {
    fn sample(&self) -> f64 {
        self.get()
    }
}

// ============================================================================
// Shared Sign Constants
// ============================================================================

// One immutable -1/+1 pair for the whole process; every instance's flipped
// transform entries multiply by the same cells.
static NEGATIVE: Lazy<AnimatedValue> = Lazy::new(|| AnimatedValue::new(-1.0));
static POSITIVE: Lazy<AnimatedValue> = Lazy::new(|| AnimatedValue::new(1.0));

/// The shared sign constant for a flip flag.
pub(crate) fn sign_for(flip: bool) -> &'static AnimatedValue {
    if flip { &NEGATIVE } else { &POSITIVE }
}

// ============================================================================
// Derived Nodes
// ============================================================================

/// Linear remapping of a source value from an input range to an output range.
#[derive(Clone, Debug)]
pub struct Interpolation {
    source: AnimatedValue,
    input: [f64; 2],
    output: [f64; 2],
    extrapolation: Extrapolation,
}

impl Sample for Interpolation {
    fn sample(&self) -> f64 {
        let [in_lo, in_hi] = self.input;
        let [out_lo, out_hi] = self.output;
        let raw = self.source.get();
        let value = match self.extrapolation {
            Extrapolation::Extend => raw,
            Extrapolation::Clamp => raw.clamp(in_lo.min(in_hi), in_lo.max(in_hi)),
        };
        let t = (value - in_lo) / (in_hi - in_lo);
        out_lo + t * (out_hi - out_lo)
    }
}

/// Product of a shared factor and a derived node. Used to apply the flip
/// sign to an interpolated rotation.
#[derive(Clone, Debug)]
pub struct Product {
    factor: AnimatedValue,
    value: Interpolation,
}

impl Product {
    pub fn new(factor: &AnimatedValue, value: Interpolation) -> Self {
        Self {
            factor: factor.clone(),
            value,
        }
    }
}

impl Sample for Product {
    fn sample(&self) -> f64 {
        self.factor.get() * self.value.sample()
    }
}

// ============================================================================
// Event Binding
// ============================================================================

/// A pre-built binding from a two-axis pointer offset into two value cells.
///
/// Built once when the handler bundle is composed; applying an event is two
/// cell writes with no allocation.
pub struct OffsetBinding {
    channels: [AnimatedValue; 2],
}

impl OffsetBinding {
    /// Bind the first offset component to `first` and the second to `second`.
    pub fn new(first: AnimatedValue, second: AnimatedValue) -> Self {
        Self {
            channels: [first, second],
        }
    }

    pub fn apply(&self, offset: (f64, f64)) {
        self.channels[0].set(offset.0);
        self.channels[1].set(offset.1);
    }
}

//! Spring-driver capability interface.
//!
//! The core never integrates spring physics itself. The host's animation
//! engine implements [`SpringDriver`]; the core hands it a value channel and
//! the target parameters, starts the returned handle, and keeps the handle
//! only so it can be stopped at teardown.

use super::AnimatedValue;

/// Parameters of one spring animation toward a fixed target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringParams {
    /// Value the channel settles at
    pub to_value: f64,
    /// Damping; higher settles with less overshoot
    pub friction: f64,
    /// Stiffness; higher settles faster
    pub tension: f64,
}

/// A startable, stoppable in-flight spring animation.
pub trait SpringHandle: Send {
    /// Begin driving the channel. Starting a spring on a channel that is
    /// already being driven supersedes the older spring without corrupting
    /// the channel.
    fn start(&mut self);

    /// Stop driving the channel, leaving it at its current value. Must be
    /// safe to call on a spring that already settled.
    fn stop(&mut self);
}

/// Supplier of spring animations over [`AnimatedValue`] channels.
pub trait SpringDriver: Send + Sync {
    fn spring(&self, channel: &AnimatedValue, params: SpringParams) -> Box<dyn SpringHandle>;
}

//! Tunable constants.
//!
//! These are compile-time configuration, not runtime flags: the toy's only
//! runtime-adjustable parameter is per-gesture thickness (via the keyboard).

/// Number of gesture slots. Starting a stroke beyond this count reclaims the
/// oldest slot round-robin; the pool never grows.
pub const POOL_SIZE: usize = 4;

/// Maximum samples per recorded stroke. Appending past this evicts the
/// oldest sample.
pub const PATH_CAPACITY: usize = 256;

/// Minimum pointer travel (logical px) before a new sample is recorded.
pub const MIN_MOVE: f32 = 3.0;

/// Ribbon thickness for a freshly drawn gesture.
pub const INITIAL_THICKNESS: f32 = 30.0;

/// Thickness bounds enforced by `Gesture::set_thickness`.
pub const MIN_THICKNESS: f32 = 2.0;
pub const MAX_THICKNESS: f32 = 96.0;

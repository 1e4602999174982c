use wriggle_engine::coords::{Vec2, Viewport};

use crate::config;
use crate::path::PointSequence;
use crate::strip::{self, Quad};

/// One recorded stroke plus its animation state.
///
/// Lifecycle: created empty, comes into existence on the first recorded
/// point, is mutated by appends while drawing and by `advance` once looping,
/// and returns to empty on `clear`. Thickness survives `clear` so a reused
/// slot keeps its last adjustment.
#[derive(Debug)]
pub struct Gesture {
    path: PointSequence,
    quads: Vec<Quad>,
    thickness: f32,
    /// First→last stroke vector: how far the wrapped point travels when it
    /// re-enters at the far end of the loop.
    jump: Vec2,
    exists: bool,
}

impl Gesture {
    pub fn new() -> Self {
        Self {
            path: PointSequence::new(config::PATH_CAPACITY, config::MIN_MOVE),
            quads: Vec::new(),
            thickness: config::INITIAL_THICKNESS,
            jump: Vec2::zero(),
            exists: false,
        }
    }

    #[inline]
    pub fn exists(&self) -> bool {
        self.exists
    }

    #[inline]
    pub fn thickness(&self) -> f32 {
        self.thickness
    }

    #[inline]
    pub fn jump(&self) -> Vec2 {
        self.jump
    }

    #[inline]
    pub fn points(&self) -> &[Vec2] {
        self.path.points()
    }

    #[inline]
    pub fn quads(&self) -> &[Quad] {
        &self.quads
    }

    /// Records a pointer sample. The gesture starts existing on the first
    /// stored point; the loop jump is re-derived on every stored point so it
    /// always spans the current endpoints. Returns whether the point was
    /// stored (the sequence's move threshold applies).
    pub fn add_point(&mut self, p: Vec2) -> bool {
        if !self.path.append(p) {
            return false;
        }

        self.exists = true;
        self.record_displacement();
        true
    }

    fn record_displacement(&mut self) {
        if self.path.len() < 2 {
            return;
        }
        if let (Some(first), Some(last)) = (self.path.first(), self.path.last()) {
            self.jump = last - first;
        }
    }

    /// One smoothing pass over the recorded path.
    pub fn smooth(&mut self) {
        self.path.smooth_in_place();
    }

    /// Rebuilds the ribbon quads from the current path and thickness.
    pub fn compile(&mut self, canvas: Viewport) {
        self.quads = strip::compile(self.path.points(), self.thickness, canvas);
    }

    /// One animation step: shift the loop and recompile.
    pub fn advance(&mut self, canvas: Viewport) {
        if !self.exists || self.path.is_empty() {
            return;
        }

        let jump = self.jump;
        self.path.loop_step(jump);
        self.compile(canvas);
    }

    /// Sets the ribbon thickness, clamped to the configured bounds, and
    /// recompiles.
    pub fn set_thickness(&mut self, value: f32, canvas: Viewport) {
        self.thickness = value.clamp(config::MIN_THICKNESS, config::MAX_THICKNESS);
        self.compile(canvas);
    }

    /// Returns the gesture to the empty state. The slot can be redrawn
    /// immediately; thickness is retained.
    pub fn clear(&mut self) {
        self.path.clear();
        self.quads.clear();
        self.jump = Vec2::zero();
        self.exists = false;
    }
}

impl Default for Gesture {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CANVAS: Viewport = Viewport::new(640.0, 480.0);

    fn p(x: f32, y: f32) -> Vec2 {
        Vec2::new(x, y)
    }

    /// A gesture with the given integer-valued points recorded (all spaced
    /// beyond the move threshold).
    fn drawn(points: &[Vec2]) -> Gesture {
        let mut g = Gesture::new();
        for &pt in points {
            assert!(g.add_point(pt));
        }
        g.compile(CANVAS);
        g
    }

    // ── existence ─────────────────────────────────────────────────────────

    #[test]
    fn new_gesture_does_not_exist() {
        assert!(!Gesture::new().exists());
    }

    #[test]
    fn first_point_brings_gesture_into_existence() {
        let mut g = Gesture::new();
        g.add_point(p(5.0, 5.0));
        assert!(g.exists());
    }

    #[test]
    fn clear_returns_to_empty() {
        let mut g = drawn(&[p(0.0, 0.0), p(10.0, 0.0), p(20.0, 0.0), p(30.0, 0.0)]);
        g.clear();

        assert!(!g.exists());
        assert!(g.points().is_empty());
        assert!(g.quads().is_empty());
        assert_eq!(g.jump(), Vec2::zero());
    }

    #[test]
    fn clear_retains_thickness() {
        let mut g = Gesture::new();
        g.set_thickness(40.0, CANVAS);
        g.clear();
        assert_eq!(g.thickness(), 40.0);
    }

    // ── jump recording ────────────────────────────────────────────────────

    #[test]
    fn jump_spans_first_to_last() {
        let g = drawn(&[p(10.0, 20.0), p(30.0, 20.0), p(50.0, 60.0)]);
        assert_eq!(g.jump(), p(40.0, 40.0));
    }

    #[test]
    fn jump_tracks_the_growing_stroke() {
        let mut g = Gesture::new();
        g.add_point(p(0.0, 0.0));
        assert_eq!(g.jump(), Vec2::zero());

        g.add_point(p(10.0, 0.0));
        assert_eq!(g.jump(), p(10.0, 0.0));

        g.add_point(p(10.0, 30.0));
        assert_eq!(g.jump(), p(10.0, 30.0));
    }

    // ── thickness ─────────────────────────────────────────────────────────

    #[test]
    fn thickness_clamps_both_ends() {
        let mut g = Gesture::new();

        g.set_thickness(1000.0, CANVAS);
        assert_eq!(g.thickness(), 96.0);

        g.set_thickness(-3.0, CANVAS);
        assert_eq!(g.thickness(), 2.0);

        g.set_thickness(30.0, CANVAS);
        assert_eq!(g.thickness(), 30.0);
    }

    // ── advance ───────────────────────────────────────────────────────────

    #[test]
    fn advance_recompiles_the_strip() {
        let mut g = drawn(&[p(0.0, 0.0), p(10.0, 0.0), p(20.0, 0.0), p(30.0, 0.0)]);
        assert_eq!(g.quads().len(), 1);

        g.advance(CANVAS);
        assert_eq!(g.quads().len(), 1);
        // The strip moved: quad now spans the shifted samples.
        assert_eq!(g.points()[0], p(-10.0, 0.0));
    }

    #[test]
    fn advance_on_empty_gesture_is_noop() {
        let mut g = Gesture::new();
        g.advance(CANVAS);
        assert!(!g.exists());
        assert!(g.points().is_empty());
    }

    #[test]
    fn loop_repeats_with_the_path_period() {
        // With M recorded points, M−1 advances walk every sample through the
        // wrap exactly once, reproducing the original path translated by
        // −jump. Integer coordinates keep the comparison exact.
        let original = [
            p(0.0, 0.0),
            p(10.0, 0.0),
            p(20.0, 10.0),
            p(30.0, 0.0),
            p(40.0, 5.0),
        ];
        let mut g = drawn(&original);
        let jump = g.jump();
        assert_eq!(jump, p(40.0, 5.0));

        for _ in 0..original.len() - 1 {
            g.advance(CANVAS);
        }

        let expected: Vec<Vec2> = original.iter().map(|&pt| pt - jump).collect();
        assert_eq!(g.points(), expected.as_slice());
    }
}

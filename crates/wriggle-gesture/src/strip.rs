use core::ops::{BitOr, BitOrAssign};

use wriggle_engine::coords::{Vec2, Viewport};

/// Canvas-edge crossing flags for one quad, from its corner bounding box.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Cross(u8);

impl Cross {
    pub const NONE: Cross = Cross(0);
    pub const LEFT: Cross = Cross(1);
    pub const RIGHT: Cross = Cross(1 << 1);
    pub const TOP: Cross = Cross(1 << 2);
    pub const BOTTOM: Cross = Cross(1 << 3);

    #[inline]
    pub fn bits(self) -> u8 {
        self.0
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub fn contains(self, other: Cross) -> bool {
        self.0 & other.0 == other.0
    }

    /// Crosses the left or right canvas edge.
    #[inline]
    pub fn horizontal(self) -> bool {
        self.0 & (Self::LEFT.0 | Self::RIGHT.0) != 0
    }

    /// Crosses the top or bottom canvas edge.
    #[inline]
    pub fn vertical(self) -> bool {
        self.0 & (Self::TOP.0 | Self::BOTTOM.0) != 0
    }
}

impl BitOr for Cross {
    type Output = Cross;
    #[inline]
    fn bitor(self, rhs: Cross) -> Cross {
        Cross(self.0 | rhs.0)
    }
}

impl BitOrAssign for Cross {
    #[inline]
    fn bitor_assign(&mut self, rhs: Cross) {
        self.0 |= rhs.0;
    }
}

/// One ribbon segment.
///
/// Corner order is (p1 + n, p1 − n, p2 − n', p2 + n'): both offsets of the
/// leading sample, then the trailing sample's offsets reversed. Emitted in
/// that order the corners triangulate as a strip segment, and consecutive
/// quads share their boundary pair so the strip stays continuous.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Quad {
    pub corners: [Vec2; 4],
    pub cross: Cross,
}

/// Compiles a stroke path into overlapping ribbon quads.
///
/// Every window of 4 consecutive samples yields one quad spanning the two
/// interior samples, each pushed ±`thickness`/2 along the perpendicular of
/// its central-difference direction. Fewer than 4 samples compile to no
/// quads — nothing to render yet, not an error. A degenerate direction
/// (the path doubling back onto itself exactly) collapses that end of the
/// quad onto the centerline.
pub fn compile(points: &[Vec2], thickness: f32, canvas: Viewport) -> Vec<Quad> {
    debug_assert!(thickness >= 0.0);

    if points.len() < 4 {
        return Vec::new();
    }

    let half = thickness * 0.5;
    let mut quads = Vec::with_capacity(points.len() - 3);

    for w in points.windows(4) {
        let (p0, p1, p2, p3) = (w[0], w[1], w[2], w[3]);

        let n_a = (p2 - p0).perp().normalized_or_zero() * half;
        let n_b = (p3 - p1).perp().normalized_or_zero() * half;

        let corners = [p1 + n_a, p1 - n_a, p2 - n_b, p2 + n_b];
        let cross = cross_flags(&corners, canvas);

        quads.push(Quad { corners, cross });
    }

    quads
}

fn cross_flags(corners: &[Vec2; 4], canvas: Viewport) -> Cross {
    let mut min = corners[0];
    let mut max = corners[0];
    for &c in &corners[1..] {
        min.x = min.x.min(c.x);
        min.y = min.y.min(c.y);
        max.x = max.x.max(c.x);
        max.y = max.y.max(c.y);
    }

    let mut cross = Cross::NONE;
    if min.x < 0.0 {
        cross |= Cross::LEFT;
    }
    if max.x > canvas.width {
        cross |= Cross::RIGHT;
    }
    if min.y < 0.0 {
        cross |= Cross::TOP;
    }
    if max.y > canvas.height {
        cross |= Cross::BOTTOM;
    }
    cross
}

#[cfg(test)]
mod tests {
    use super::*;

    const CANVAS: Viewport = Viewport::new(100.0, 100.0);

    fn p(x: f32, y: f32) -> Vec2 {
        Vec2::new(x, y)
    }

    // ── quad counts ───────────────────────────────────────────────────────

    #[test]
    fn short_paths_compile_to_nothing() {
        for n in 0..4 {
            let pts: Vec<Vec2> = (0..n).map(|i| p(i as f32 * 10.0, 50.0)).collect();
            assert!(compile(&pts, 4.0, CANVAS).is_empty(), "n = {n}");
        }
    }

    #[test]
    fn quad_count_is_len_minus_three() {
        let pts: Vec<Vec2> = (0..10).map(|i| p(i as f32 * 10.0, 50.0)).collect();
        assert_eq!(compile(&pts, 4.0, CANVAS).len(), 7);
    }

    // ── geometry ──────────────────────────────────────────────────────────

    #[test]
    fn straight_segment_offsets_half_thickness() {
        let pts = [p(0.0, 50.0), p(10.0, 50.0), p(20.0, 50.0), p(30.0, 50.0)];
        let quads = compile(&pts, 4.0, CANVAS);

        assert_eq!(quads.len(), 1);
        let q = quads[0];
        assert_eq!(q.corners[0], p(10.0, 52.0));
        assert_eq!(q.corners[1], p(10.0, 48.0));
        assert_eq!(q.corners[2], p(20.0, 48.0));
        assert_eq!(q.corners[3], p(20.0, 52.0));
        assert_eq!(q.cross, Cross::NONE);
    }

    #[test]
    fn consecutive_quads_share_their_boundary_pair() {
        let pts: Vec<Vec2> = (0..5).map(|i| p(i as f32 * 10.0, 50.0)).collect();
        let quads = compile(&pts, 6.0, CANVAS);

        assert_eq!(quads.len(), 2);
        assert_eq!(quads[0].corners[3], quads[1].corners[0]);
        assert_eq!(quads[0].corners[2], quads[1].corners[1]);
    }

    #[test]
    fn degenerate_direction_collapses_to_centerline() {
        // p3 doubles back onto p1, so the trailing direction is zero.
        let pts = [p(0.0, 50.0), p(10.0, 50.0), p(20.0, 50.0), p(10.0, 50.0)];
        let quads = compile(&pts, 4.0, CANVAS);

        assert_eq!(quads.len(), 1);
        assert_eq!(quads[0].corners[2], p(20.0, 50.0));
        assert_eq!(quads[0].corners[3], p(20.0, 50.0));
    }

    // ── cross flags ───────────────────────────────────────────────────────

    #[test]
    fn interior_quad_has_no_flags() {
        let pts = [p(20.0, 50.0), p(30.0, 50.0), p(40.0, 50.0), p(50.0, 50.0)];
        let quads = compile(&pts, 4.0, CANVAS);
        assert!(quads[0].cross.is_empty());
    }

    #[test]
    fn left_straddle_sets_left_bit() {
        let pts = [p(-20.0, 50.0), p(-10.0, 50.0), p(0.0, 50.0), p(10.0, 50.0)];
        let quads = compile(&pts, 4.0, CANVAS);

        assert!(quads[0].cross.contains(Cross::LEFT));
        assert!(quads[0].cross.horizontal());
        assert!(!quads[0].cross.vertical());
    }

    #[test]
    fn right_straddle_sets_right_bit() {
        // The quad spans x = 95..105, poking past the right edge at 100.
        let pts = [p(85.0, 50.0), p(95.0, 50.0), p(105.0, 50.0), p(115.0, 50.0)];
        let quads = compile(&pts, 4.0, CANVAS);

        assert!(quads[0].cross.contains(Cross::RIGHT));
        assert!(!quads[0].cross.contains(Cross::LEFT));
    }

    #[test]
    fn top_and_bottom_straddles_set_vertical_bits() {
        let top = [p(50.0, -20.0), p(50.0, -10.0), p(50.0, 0.0), p(50.0, 10.0)];
        let bottom = [p(50.0, 85.0), p(50.0, 95.0), p(50.0, 105.0), p(50.0, 115.0)];

        assert!(compile(&top, 4.0, CANVAS)[0].cross.contains(Cross::TOP));
        assert!(compile(&bottom, 4.0, CANVAS)[0].cross.contains(Cross::BOTTOM));
    }

    #[test]
    fn corner_straddle_sets_both_axes() {
        let pts = [p(-15.0, -15.0), p(-5.0, -5.0), p(5.0, 5.0), p(15.0, 15.0)];
        let quads = compile(&pts, 4.0, CANVAS);

        let cross = quads[0].cross;
        assert!(cross.horizontal());
        assert!(cross.vertical());
        assert!(cross.contains(Cross::LEFT | Cross::TOP));
    }
}

use wriggle_engine::coords::Vec2;

/// Neighbor-averaging weight for `smooth_in_place`: each interior point is
/// blended 1 : 18 : 1 with its two neighbors.
const SMOOTH_WEIGHT: f32 = 18.0;

/// The recorded samples of one stroke, in draw order.
///
/// Capacity is fixed at construction. Appending at capacity evicts the
/// oldest sample; appending closer than the minimum-move threshold to the
/// last sample is rejected so fast event streams do not oversample.
#[derive(Debug, Clone)]
pub struct PointSequence {
    points: Vec<Vec2>,
    capacity: usize,
    min_move: f32,
}

impl PointSequence {
    pub fn new(capacity: usize, min_move: f32) -> Self {
        assert!(capacity > 0, "point sequence needs at least one slot");
        Self {
            points: Vec::with_capacity(capacity),
            capacity,
            min_move,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    #[inline]
    pub fn first(&self) -> Option<Vec2> {
        self.points.first().copied()
    }

    #[inline]
    pub fn last(&self) -> Option<Vec2> {
        self.points.last().copied()
    }

    /// Distance from the last stored sample to `p`, or infinity when empty
    /// (so the first sample always passes the threshold).
    pub fn dist_to_last(&self, p: Vec2) -> f32 {
        match self.points.last() {
            Some(&last) => last.distance(p),
            None => f32::INFINITY,
        }
    }

    /// Stores `p` if it moved far enough from the last sample. Returns
    /// whether the point was stored. At capacity, the oldest sample is
    /// evicted to make room.
    pub fn append(&mut self, p: Vec2) -> bool {
        if self.dist_to_last(p) <= self.min_move {
            return false;
        }

        if self.points.len() == self.capacity {
            self.points.remove(0);
        }
        self.points.push(p);
        true
    }

    /// One pass of jitter smoothing: every interior point is replaced by the
    /// 1 : 18 : 1 weighted average of its neighbors and itself. Endpoints
    /// are left untouched so the loop jump stays anchored.
    pub fn smooth_in_place(&mut self) {
        let n = self.points.len();
        if n < 3 {
            return;
        }

        let scale = 1.0 / (SMOOTH_WEIGHT + 2.0);
        for i in 1..n - 1 {
            let lower = self.points[i - 1];
            let center = self.points[i];
            let upper = self.points[i + 1];
            self.points[i] = (lower + center * SMOOTH_WEIGHT + upper) * scale;
        }
    }

    /// The loop-advance primitive: every sample shifts one slot toward the
    /// tail, the oldest tail sample is dropped, and the freed head slot is
    /// filled one `jump` back along the path. Applied once per frame this
    /// replays the stroke end-over-end.
    pub fn loop_step(&mut self, jump: Vec2) {
        let n = self.points.len();
        if n == 0 {
            return;
        }

        self.points.rotate_right(1);
        self.points[0] = self.points[n - 1] - jump;
    }

    /// Empties the sequence. Capacity and threshold are retained.
    pub fn clear(&mut self) {
        self.points.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(capacity: usize) -> PointSequence {
        PointSequence::new(capacity, 3.0)
    }

    fn p(x: f32, y: f32) -> Vec2 {
        Vec2::new(x, y)
    }

    // ── append / threshold ────────────────────────────────────────────────

    #[test]
    fn first_point_always_appends() {
        let mut s = seq(8);
        assert!(s.append(p(0.0, 0.0)));
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn nearby_point_is_rejected() {
        let mut s = seq(8);
        s.append(p(0.0, 0.0));
        assert!(!s.append(p(2.0, 0.0)));
        assert!(!s.append(p(0.0, 3.0))); // exactly at threshold: still rejected
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn distant_point_is_stored() {
        let mut s = seq(8);
        s.append(p(0.0, 0.0));
        assert!(s.append(p(4.0, 0.0)));
        assert_eq!(s.points(), &[p(0.0, 0.0), p(4.0, 0.0)]);
    }

    #[test]
    fn rejection_measures_from_last_stored() {
        let mut s = seq(8);
        s.append(p(0.0, 0.0));
        s.append(p(2.0, 0.0)); // rejected, so (0,0) stays the reference
        assert!(!s.append(p(2.5, 0.0)));
        // 3.5 clears the threshold measured from (0,0).
        assert!(s.append(p(3.5, 0.0)));
    }

    // ── capacity ──────────────────────────────────────────────────────────

    #[test]
    fn capacity_evicts_oldest() {
        let mut s = seq(3);
        s.append(p(0.0, 0.0));
        s.append(p(10.0, 0.0));
        s.append(p(20.0, 0.0));
        s.append(p(30.0, 0.0));

        assert_eq!(s.len(), 3);
        assert_eq!(s.points(), &[p(10.0, 0.0), p(20.0, 0.0), p(30.0, 0.0)]);
    }

    // ── smoothing ─────────────────────────────────────────────────────────

    #[test]
    fn smooth_blends_interior_points() {
        let mut s = seq(8);
        s.append(p(0.0, 0.0));
        s.append(p(10.0, 20.0));
        s.append(p(20.0, 0.0));
        s.smooth_in_place();

        // (0 + 18*10 + 20) / 20, (0 + 18*20 + 0) / 20
        assert_eq!(s.points()[1], p(10.0, 18.0));
        // Endpoints untouched.
        assert_eq!(s.points()[0], p(0.0, 0.0));
        assert_eq!(s.points()[2], p(20.0, 0.0));
    }

    #[test]
    fn smooth_on_short_sequences_is_noop() {
        let mut s = seq(8);
        s.append(p(0.0, 0.0));
        s.append(p(10.0, 0.0));
        s.smooth_in_place();
        assert_eq!(s.points(), &[p(0.0, 0.0), p(10.0, 0.0)]);
    }

    // ── loop_step ─────────────────────────────────────────────────────────

    #[test]
    fn loop_step_shifts_and_reenters() {
        let mut s = seq(8);
        for x in [0.0, 10.0, 20.0, 30.0] {
            s.append(p(x, 0.0));
        }

        s.loop_step(Vec2::new(30.0, 0.0));

        // Tail sample (30,0) dropped; head re-enters one jump behind the new
        // tail: (20,0) - (30,0) = (-10,0).
        assert_eq!(
            s.points(),
            &[p(-10.0, 0.0), p(0.0, 0.0), p(10.0, 0.0), p(20.0, 0.0)]
        );
    }

    #[test]
    fn loop_step_on_empty_is_noop() {
        let mut s = seq(8);
        s.loop_step(Vec2::new(5.0, 5.0));
        assert!(s.is_empty());
    }

    // ── clear ─────────────────────────────────────────────────────────────

    #[test]
    fn clear_empties_and_allows_reuse() {
        let mut s = seq(8);
        s.append(p(0.0, 0.0));
        s.append(p(10.0, 0.0));
        s.clear();

        assert!(s.is_empty());
        assert!(s.append(p(1.0, 1.0)));
    }
}

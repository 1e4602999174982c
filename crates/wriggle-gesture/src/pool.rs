use wriggle_engine::coords::Viewport;

use crate::config;
use crate::gesture::Gesture;

/// Fixed collection of gesture slots with round-robin reuse.
///
/// The pool never grows: starting a stroke past the slot count reclaims the
/// oldest slot in rotation. At most one slot is the active (editing) gesture
/// at a time; the single index representation makes that structural.
pub struct GesturePool {
    slots: Vec<Gesture>,
    active: Option<usize>,
}

impl GesturePool {
    pub fn new() -> Self {
        Self::with_size(config::POOL_SIZE)
    }

    pub fn with_size(size: usize) -> Self {
        assert!(size > 0, "gesture pool needs at least one slot");
        Self {
            slots: (0..size).map(|_| Gesture::new()).collect(),
            active: None,
        }
    }

    /// Number of slots (not the number of existing gestures).
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    #[inline]
    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    /// Claims the next slot round-robin, clears whatever it held, and makes
    /// it the active gesture. Returns the slot for the caller to feed points
    /// into.
    pub fn begin_gesture(&mut self) -> &mut Gesture {
        let next = match self.active {
            Some(i) => (i + 1) % self.slots.len(),
            None => 0,
        };

        if self.slots[next].exists() {
            log::debug!("reclaiming gesture slot {next}");
        }

        self.active = Some(next);
        self.slots[next].clear();
        &mut self.slots[next]
    }

    /// The gesture currently being edited, if a stroke has ever started.
    pub fn active_mut(&mut self) -> Option<&mut Gesture> {
        self.active.map(|i| &mut self.slots[i])
    }

    /// Advances every existing gesture one loop step — except the active one
    /// while the pointer is held, so the stroke being drawn stays frozen
    /// under the cursor until release.
    pub fn advance_all(&mut self, pointer_held: bool, canvas: Viewport) {
        for (i, gesture) in self.slots.iter_mut().enumerate() {
            if !gesture.exists() {
                continue;
            }
            if pointer_held && Some(i) == self.active {
                continue;
            }
            gesture.advance(canvas);
        }
    }

    /// Number of existing gestures. Pure query.
    pub fn count_active(&self) -> usize {
        self.slots.iter().filter(|g| g.exists()).count()
    }

    /// Clears every slot. The active index is retained; editing keys after a
    /// wipe recompile an empty path, which is a harmless no-op.
    pub fn clear_all(&mut self) {
        for gesture in &mut self.slots {
            gesture.clear();
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Gesture> {
        self.slots.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Gesture> {
        self.slots.get(index)
    }
}

impl Default for GesturePool {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wriggle_engine::coords::Vec2;

    const CANVAS: Viewport = Viewport::new(640.0, 480.0);

    fn p(x: f32, y: f32) -> Vec2 {
        Vec2::new(x, y)
    }

    /// Records a short horizontal stroke starting at `origin` into a fresh
    /// slot.
    fn draw_stroke(pool: &mut GesturePool, origin: Vec2) {
        let g = pool.begin_gesture();
        for i in 0..4 {
            g.add_point(origin + p(i as f32 * 10.0, 0.0));
        }
        g.compile(CANVAS);
    }

    // ── round-robin reuse ─────────────────────────────────────────────────

    #[test]
    fn strokes_fill_slots_in_order() {
        let mut pool = GesturePool::with_size(4);

        draw_stroke(&mut pool, p(0.0, 10.0));
        assert_eq!(pool.active_index(), Some(0));
        assert_eq!(pool.count_active(), 1);

        draw_stroke(&mut pool, p(0.0, 20.0));
        assert_eq!(pool.active_index(), Some(1));
        assert_eq!(pool.count_active(), 2);
    }

    #[test]
    fn fifth_stroke_reclaims_slot_zero() {
        let mut pool = GesturePool::with_size(4);

        for i in 0..5 {
            draw_stroke(&mut pool, p(0.0, 10.0 * (i + 1) as f32));
        }

        // Still exactly 4 gestures; slot 0 now holds stroke 5 and stroke 1
        // is gone.
        assert_eq!(pool.count_active(), 4);
        assert_eq!(pool.active_index(), Some(0));
        assert_eq!(pool.get(0).unwrap().points()[0], p(0.0, 50.0));
    }

    #[test]
    fn count_never_exceeds_pool_size() {
        let mut pool = GesturePool::with_size(2);
        for i in 0..7 {
            draw_stroke(&mut pool, p(0.0, 10.0 * (i + 1) as f32));
            assert!(pool.count_active() <= 2);
        }
    }

    #[test]
    fn begin_gesture_yields_an_empty_slot() {
        let mut pool = GesturePool::with_size(1);
        draw_stroke(&mut pool, p(0.0, 10.0));

        let g = pool.begin_gesture();
        assert!(!g.exists());
        assert!(g.points().is_empty());
    }

    // ── animator policy ───────────────────────────────────────────────────

    #[test]
    fn held_pointer_freezes_only_the_active_gesture() {
        let mut pool = GesturePool::with_size(4);
        draw_stroke(&mut pool, p(0.0, 10.0));
        draw_stroke(&mut pool, p(0.0, 20.0));

        let background_before = pool.get(0).unwrap().points()[0];
        let active_before = pool.get(1).unwrap().points()[0];

        pool.advance_all(true, CANVAS);

        assert_ne!(pool.get(0).unwrap().points()[0], background_before);
        assert_eq!(pool.get(1).unwrap().points()[0], active_before);
    }

    #[test]
    fn released_pointer_advances_everything() {
        let mut pool = GesturePool::with_size(4);
        draw_stroke(&mut pool, p(0.0, 10.0));
        draw_stroke(&mut pool, p(0.0, 20.0));

        let first_before = pool.get(0).unwrap().points()[0];
        let second_before = pool.get(1).unwrap().points()[0];

        pool.advance_all(false, CANVAS);

        assert_ne!(pool.get(0).unwrap().points()[0], first_before);
        assert_ne!(pool.get(1).unwrap().points()[0], second_before);
    }

    #[test]
    fn advance_all_skips_empty_slots() {
        let mut pool = GesturePool::with_size(4);
        draw_stroke(&mut pool, p(0.0, 10.0));

        // No panic, and the empty slots stay empty.
        pool.advance_all(false, CANVAS);
        assert_eq!(pool.count_active(), 1);
    }

    // ── clear_all ─────────────────────────────────────────────────────────

    #[test]
    fn clear_all_empties_every_slot() {
        let mut pool = GesturePool::with_size(4);
        draw_stroke(&mut pool, p(0.0, 10.0));
        draw_stroke(&mut pool, p(0.0, 20.0));
        assert_eq!(pool.count_active(), 2);

        pool.clear_all();
        assert_eq!(pool.count_active(), 0);
    }
}

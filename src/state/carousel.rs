#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

/// Index of an auto-advancing slideshow.
///
/// `index` always stays in `[0, len)` for a non-empty carousel. Autoplay is a
/// flag the view flips while the pointer rests on the controls or a drag is in
/// progress; `advance` is the timer tick and does nothing while it is off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    index: usize,
    autoplay: bool,
    direction: Direction,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            index: 0,
            autoplay: true,
            direction: Direction::Forward,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn autoplay(&self) -> bool {
        self.autoplay
    }

    /// Timer tick.
    pub fn advance(&mut self) {
        if self.autoplay {
            self.next();
        }
    }

    pub fn next(&mut self) {
        if self.is_empty() {
            return;
        }
        self.direction = Direction::Forward;
        self.index = (self.index + 1) % self.len;
    }

    pub fn prev(&mut self) {
        if self.is_empty() {
            return;
        }
        self.direction = Direction::Backward;
        self.index = (self.index + self.len - 1) % self.len;
    }

    /// Jump straight to slide `target`. Out-of-range targets are refused.
    pub fn go_to(&mut self, target: usize) -> bool {
        if target >= self.len {
            return false;
        }
        self.direction = if target >= self.index {
            Direction::Forward
        } else {
            Direction::Backward
        };
        self.index = target;
        true
    }

    /// Follow an index derived from scroll position; writes nothing when the
    /// index is unchanged.
    pub fn sync_to(&mut self, target: usize) -> bool {
        if target == self.index || target >= self.len {
            return false;
        }
        self.go_to(target)
    }

    pub fn pause(&mut self) {
        self.autoplay = false;
    }

    pub fn resume(&mut self) {
        self.autoplay = true;
    }
}

/// Pointer drag over a horizontally scrolling track.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragTrack {
    dragging: bool,
    start_x: f64,
    start_offset: f64,
}

/// Pixels of scroll per pixel of pointer travel.
pub const DRAG_SPEED: f64 = 2.0;

impl DragTrack {
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn press(&mut self, pointer_x: f64, offset: f64) {
        self.dragging = true;
        self.start_x = pointer_x;
        self.start_offset = offset;
    }

    /// The scroll offset the track should move to, while a drag is live.
    pub fn drag_to(&self, pointer_x: f64) -> Option<f64> {
        self.dragging
            .then(|| self.start_offset - (pointer_x - self.start_x) * DRAG_SPEED)
    }

    pub fn release(&mut self) {
        self.dragging = false;
    }
}

/// Slide closest to a scroll offset on a track of `count` equal cards.
pub fn nearest_slide(offset: f64, scroll_width: f64, count: usize) -> usize {
    if count == 0 || scroll_width <= 0.0 {
        return 0;
    }
    let card = scroll_width / count as f64;
    let slide = (offset.max(0.0) / card).round() as usize;
    slide.min(count - 1)
}

pub fn slide_offset(index: usize, scroll_width: f64, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    index as f64 * scroll_width / count as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn autoplay_wraps_after_last_slide() {
        let mut carousel = Carousel::new(3);
        let seen: Vec<usize> = (0..7)
            .map(|_| {
                carousel.advance();
                carousel.index()
            })
            .collect();
        assert_eq!(seen, vec![1, 2, 0, 1, 2, 0, 1]);
    }

    #[test]
    fn paused_carousel_does_not_advance() {
        let mut carousel = Carousel::new(3);
        carousel.pause();
        carousel.advance();
        assert_eq!(carousel.index(), 0);

        carousel.next();
        assert_eq!(carousel.index(), 1);

        carousel.resume();
        carousel.advance();
        assert_eq!(carousel.index(), 2);
    }

    #[test]
    fn go_to_sets_exact_index_from_any_state() {
        for start in 0..5 {
            for target in 0..5 {
                let mut carousel = Carousel::new(5);
                carousel.go_to(start);
                assert!(carousel.go_to(target));
                assert_eq!(carousel.index(), target);
            }
        }

        let mut carousel = Carousel::new(5);
        carousel.go_to(3);
        assert!(!carousel.go_to(5));
        assert_eq!(carousel.index(), 3);
    }

    #[test]
    fn prev_wraps_backwards() {
        let mut carousel = Carousel::new(4);
        carousel.prev();
        assert_eq!(carousel.index(), 3);
        assert_eq!(carousel.direction(), Direction::Backward);
        carousel.next();
        assert_eq!(carousel.index(), 0);
        assert_eq!(carousel.direction(), Direction::Forward);
    }

    #[test]
    fn index_stays_in_range() {
        let mut carousel = Carousel::new(6);
        for step in 0..100 {
            match step % 4 {
                0 => carousel.advance(),
                1 => carousel.prev(),
                2 => {
                    carousel.go_to(step % 9);
                }
                _ => carousel.next(),
            }
            assert!(carousel.index() < carousel.len());
        }
    }

    #[test]
    fn empty_carousel_is_inert() {
        let mut carousel = Carousel::new(0);
        carousel.advance();
        carousel.prev();
        assert!(!carousel.go_to(0));
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn sync_only_reports_real_changes() {
        let mut carousel = Carousel::new(6);
        assert!(!carousel.sync_to(0));
        assert!(carousel.sync_to(4));
        assert!(!carousel.sync_to(4));
        assert!(!carousel.sync_to(6));
    }

    #[test]
    fn drag_maps_pointer_delta_to_offset() {
        let mut track = DragTrack::default();
        assert_eq!(track.drag_to(50.0), None);

        track.press(100.0, 300.0);
        assert_eq!(track.drag_to(100.0), Some(300.0));
        assert_eq!(track.drag_to(60.0), Some(380.0));
        assert_eq!(track.drag_to(130.0), Some(240.0));

        track.release();
        assert!(!track.is_dragging());
        assert_eq!(track.drag_to(0.0), None);
    }

    #[test]
    fn nearest_slide_snaps_and_clamps() {
        // six 200px cards
        assert_eq!(nearest_slide(0.0, 1200.0, 6), 0);
        assert_eq!(nearest_slide(99.0, 1200.0, 6), 0);
        assert_eq!(nearest_slide(101.0, 1200.0, 6), 1);
        assert_eq!(nearest_slide(5000.0, 1200.0, 6), 5);
        assert_eq!(nearest_slide(-40.0, 1200.0, 6), 0);
        assert_eq!(nearest_slide(10.0, 0.0, 6), 0);
        assert_eq!(slide_offset(3, 1200.0, 6), 600.0);
    }
}

//! Horizontal gallery traversal.
//!
//! The full home page pins the page while the gallery fills the viewport and
//! feeds wheel deltas into a horizontal progress value instead. Once the
//! track has been walked to the end the page is released and scrolling
//! continues normally. The `completed` flag only clears after the visitor
//! scrolls back above the gallery, so coming back up from the about section
//! does not trap them again.

use super::fade::{clamp_unit, ease_in_out_quad};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LockState {
    Unlocked,
    Locked,
}

/// Vertical extent of the gallery section in page coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GallerySpan {
    pub top: f64,
    pub height: f64,
}

impl GallerySpan {
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn contains(&self, scroll_y: f64) -> bool {
        scroll_y >= self.top && scroll_y <= self.bottom()
    }
}

/// Horizontal travel available to the track.
pub fn max_scroll(content_width: f64, viewport_width: f64, end_buffer: f64) -> f64 {
    let overflow = content_width - viewport_width;
    if overflow > 0.0 {
        overflow + end_buffer.max(0.0)
    } else {
        0.0
    }
}

/// Distance above the pinned top still treated as sitting on it.
const PIN_TOLERANCE: f64 = 1.0;

const LINE_STEP_PX: f64 = 100.0;
const PAGE_STEP_FRACTION: f64 = 0.9;

/// Scroll distance a navigation key stands for, fed to the lock like a
/// wheel delta. `None` for keys that do not scroll.
pub fn scroll_key_delta(key: &str, shift: bool, viewport_height: f64) -> Option<f64> {
    let page = viewport_height.max(LINE_STEP_PX) * PAGE_STEP_FRACTION;
    match key {
        "ArrowDown" => Some(LINE_STEP_PX),
        "ArrowUp" => Some(-LINE_STEP_PX),
        "PageDown" => Some(page),
        "PageUp" => Some(-page),
        " " | "Spacebar" => Some(if shift { -page } else { page }),
        "End" => Some(f64::INFINITY),
        "Home" => Some(f64::NEG_INFINITY),
        _ => None,
    }
}

/// Turns successive touch positions into wheel-like deltas. Dragging the
/// finger up scrolls forward, like a positive `deltaY`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TouchDrag {
    last_y: Option<f64>,
}

impl TouchDrag {
    pub fn start(&mut self, client_y: f64) {
        self.last_y = Some(client_y);
    }

    pub fn move_to(&mut self, client_y: f64) -> Option<f64> {
        let last = self.last_y.replace(client_y)?;
        Some(last - client_y)
    }

    pub fn end(&mut self) {
        self.last_y = None;
    }
}

/// What a wheel event should do to the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WheelOutcome {
    /// Let the browser scroll the page.
    PassThrough,
    /// The delta was consumed by the gallery; suppress the default action.
    Consumed,
}

#[derive(Clone, Debug)]
pub struct GalleryLock {
    state: LockState,
    progress: f64,
    completed: bool,
    sensitivity: f64,
    max_scroll: f64,
    last_scroll_y: Option<f64>,
}

impl GalleryLock {
    pub fn new(sensitivity: f64) -> Self {
        Self {
            state: LockState::Unlocked,
            progress: 0.0,
            completed: false,
            sensitivity,
            max_scroll: 0.0,
            last_scroll_y: None,
        }
    }

    pub fn state(&self) -> LockState {
        self.state
    }

    pub fn is_locked(&self) -> bool {
        self.state == LockState::Locked
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn completed(&self) -> bool {
        self.completed
    }

    pub fn set_max_scroll(&mut self, max_scroll: f64) {
        self.max_scroll = max_scroll.max(0.0);
    }

    pub fn track_offset(&self) -> f64 {
        -self.progress * self.max_scroll
    }

    /// Feed the current scroll offset. Returns the offset the page must be
    /// pinned to while locked.
    pub fn on_scroll(&mut self, scroll_y: f64, span: GallerySpan) -> Option<f64> {
        let previous = self.last_scroll_y.replace(scroll_y);

        if self.is_locked() {
            if scroll_y > span.bottom() {
                log::debug!("gallery left past its bottom, releasing lock");
                self.state = LockState::Unlocked;
                return None;
            }
            // Wheel, touch and key input never move the page while locked, so
            // landing above the top means a scrollbar drag or a jump.
            if scroll_y < span.top - PIN_TOLERANCE {
                log::debug!("gallery left above its top, releasing lock");
                self.state = LockState::Unlocked;
                self.completed = false;
                return None;
            }
            return Some(span.top);
        }

        if scroll_y < span.top {
            self.completed = false;
            return None;
        }

        let from_above = previous.map_or(false, |y| y <= span.top);
        if from_above && !self.completed && span.contains(scroll_y) {
            log::debug!("gallery entered from above, locking at {}", span.top);
            self.state = LockState::Locked;
            self.progress = 0.0;
            return Some(span.top);
        }
        None
    }

    pub fn on_wheel(&mut self, delta_y: f64) -> WheelOutcome {
        if !self.is_locked() || delta_y == 0.0 || delta_y.is_nan() {
            return WheelOutcome::PassThrough;
        }

        // Home/End arrive as infinite deltas and saturate at either end.
        self.progress = clamp_unit(self.progress + delta_y * self.sensitivity);

        if delta_y > 0.0 && self.progress >= 1.0 {
            log::debug!("gallery fully traversed, releasing lock");
            self.progress = 1.0;
            self.completed = true;
            self.state = LockState::Unlocked;
            return WheelOutcome::PassThrough;
        }
        if delta_y < 0.0 && self.progress <= 0.0 {
            self.progress = 0.0;
            self.state = LockState::Unlocked;
            return WheelOutcome::PassThrough;
        }
        WheelOutcome::Consumed
    }
}

/// Traversal driven directly by page scroll, without any lock.
#[derive(Clone, Debug, Default)]
pub struct ScrollMappedGallery {
    progress: f64,
    max_scroll: f64,
}

impl ScrollMappedGallery {
    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn set_max_scroll(&mut self, max_scroll: f64) {
        self.max_scroll = max_scroll.max(0.0);
    }

    pub fn track_offset(&self) -> f64 {
        -self.progress * self.max_scroll
    }

    pub fn on_scroll(&mut self, scroll_y: f64, span: GallerySpan, viewport_height: f64) {
        let window_start = span.top - viewport_height;
        if scroll_y < window_start || scroll_y > span.bottom() {
            return;
        }
        let travel = viewport_height + span.height;
        let raw = if travel > 0.0 {
            clamp_unit((scroll_y - window_start) / travel)
        } else {
            1.0
        };
        self.progress = ease_in_out_quad(raw);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPAN: GallerySpan = GallerySpan { top: 1000.0, height: 1500.0 };

    fn locked() -> GalleryLock {
        let mut lock = GalleryLock::new(0.002);
        lock.set_max_scroll(800.0);
        assert_eq!(lock.on_scroll(0.0, SPAN), None);
        assert_eq!(lock.on_scroll(1000.0, SPAN), Some(1000.0));
        assert!(lock.is_locked());
        lock
    }

    #[test]
    fn single_large_wheel_traverses_and_releases() {
        let mut lock = locked();
        assert_eq!(lock.on_wheel(500.0), WheelOutcome::PassThrough);
        assert_eq!(lock.progress(), 1.0);
        assert_eq!(lock.track_offset(), -800.0);
        assert_eq!(lock.state(), LockState::Unlocked);
        assert!(lock.completed());
    }

    #[test]
    fn progress_stays_in_unit_interval() {
        let mut lock = locked();
        assert_eq!(lock.on_wheel(100.0), WheelOutcome::Consumed);
        assert!((lock.progress() - 0.2).abs() < 1e-9);
        assert_eq!(lock.on_wheel(-1e9), WheelOutcome::PassThrough);
        assert_eq!(lock.progress(), 0.0);

        let mut lock = locked();
        lock.on_wheel(1e12);
        assert_eq!(lock.progress(), 1.0);
    }

    #[test]
    fn partial_wheel_is_consumed_and_pins() {
        let mut lock = locked();
        assert_eq!(lock.on_wheel(120.0), WheelOutcome::Consumed);
        assert_eq!(lock.on_scroll(1040.0, SPAN), Some(1000.0));
        assert!(lock.track_offset() < 0.0);
    }

    #[test]
    fn backing_out_to_zero_unlocks_without_completion() {
        let mut lock = locked();
        lock.on_wheel(100.0);
        assert_eq!(lock.on_wheel(-100.0), WheelOutcome::PassThrough);
        assert_eq!(lock.state(), LockState::Unlocked);
        assert!(!lock.completed());
        assert_eq!(lock.on_scroll(990.0, SPAN), None);
    }

    #[test]
    fn no_relock_until_back_above_top() {
        let mut lock = locked();
        lock.on_wheel(600.0);
        assert!(lock.completed());

        for y in [1000.0, 1300.0, 2400.0, 2600.0, 2000.0, 1000.0] {
            assert_eq!(lock.on_scroll(y, SPAN), None, "relocked at {y}");
        }
        assert!(lock.completed());

        assert_eq!(lock.on_scroll(950.0, SPAN), None);
        assert!(!lock.completed());
        assert_eq!(lock.on_scroll(1010.0, SPAN), Some(1000.0));
        assert!(lock.is_locked());
        assert_eq!(lock.progress(), 0.0);
    }

    #[test]
    fn entering_from_below_does_not_lock() {
        let mut lock = GalleryLock::new(0.002);
        assert_eq!(lock.on_scroll(3000.0, SPAN), None);
        assert_eq!(lock.on_scroll(2000.0, SPAN), None);
        assert!(!lock.is_locked());
    }

    #[test]
    fn leaving_past_bottom_forces_unlock() {
        let mut lock = locked();
        lock.on_wheel(50.0);
        assert_eq!(lock.on_scroll(2600.0, SPAN), None);
        assert_eq!(lock.state(), LockState::Unlocked);
    }

    #[test]
    fn leaving_above_top_releases_and_resets_completion() {
        let mut lock = locked();
        lock.on_wheel(100.0);
        assert_eq!(lock.on_scroll(1060.0, SPAN), Some(1000.0));
        assert_eq!(lock.on_scroll(999.5, SPAN), Some(1000.0));
        assert_eq!(lock.on_scroll(940.0, SPAN), None);
        assert!(!lock.is_locked());
        assert!(!lock.completed());
        for y in [700.0, 0.0] {
            assert_eq!(lock.on_scroll(y, SPAN), None);
        }
        assert_eq!(lock.on_scroll(1000.0, SPAN), Some(1000.0));
        assert_eq!(lock.progress(), 0.0);
    }

    #[test]
    fn touch_swipe_traverses_and_releases() {
        let mut lock = locked();
        let mut drag = TouchDrag::default();
        assert_eq!(drag.move_to(500.0), None);

        drag.start(800.0);
        let mut outcomes = Vec::new();
        for y in [700.0, 600.0, 500.0, 400.0, 300.0, 200.0] {
            let delta = drag.move_to(y).expect("drag in progress");
            assert_eq!(delta, 100.0);
            outcomes.push(lock.on_wheel(delta));
        }
        assert_eq!(outcomes[..4], [WheelOutcome::Consumed; 4]);
        assert_eq!(outcomes[4], WheelOutcome::PassThrough);
        assert!(lock.completed());
        assert!(!lock.is_locked());
        drag.end();
        assert_eq!(drag.move_to(100.0), None);
    }

    #[test]
    fn keys_traverse_and_back_out() {
        let mut lock = locked();
        let down = scroll_key_delta("ArrowDown", false, 1000.0).expect("scroll key");
        assert_eq!(lock.on_wheel(down), WheelOutcome::Consumed);
        let home = scroll_key_delta("Home", false, 1000.0).expect("scroll key");
        assert_eq!(lock.on_wheel(home), WheelOutcome::PassThrough);
        assert_eq!(lock.progress(), 0.0);
        assert!(!lock.is_locked());

        let mut lock = locked();
        let page = scroll_key_delta(" ", false, 1000.0).expect("scroll key");
        assert_eq!(page, 900.0);
        assert_eq!(lock.on_wheel(page), WheelOutcome::PassThrough);
        assert!(lock.completed());

        let mut lock = locked();
        let end = scroll_key_delta("End", false, 1000.0).expect("scroll key");
        assert_eq!(lock.on_wheel(end), WheelOutcome::PassThrough);
        assert_eq!(lock.track_offset(), -800.0);
    }

    #[test]
    fn scroll_keys_map_to_deltas() {
        assert_eq!(scroll_key_delta("ArrowUp", false, 800.0), Some(-100.0));
        assert_eq!(scroll_key_delta("PageDown", false, 800.0), Some(720.0));
        assert_eq!(scroll_key_delta("PageUp", false, 800.0), Some(-720.0));
        assert_eq!(scroll_key_delta(" ", true, 800.0), Some(-720.0));
        assert_eq!(scroll_key_delta("Enter", false, 800.0), None);
        assert_eq!(scroll_key_delta("a", false, 800.0), None);
    }

    #[test]
    fn wheel_is_ignored_when_unlocked() {
        let mut lock = GalleryLock::new(0.002);
        assert_eq!(lock.on_wheel(300.0), WheelOutcome::PassThrough);
        assert_eq!(lock.progress(), 0.0);
    }

    #[test]
    fn zero_overflow_tracks_without_displacement() {
        let mut lock = locked();
        lock.set_max_scroll(max_scroll(900.0, 1200.0, 48.0));
        lock.on_wheel(100.0);
        assert!(lock.progress() > 0.0);
        assert_eq!(lock.track_offset(), 0.0);
    }

    #[test]
    fn max_scroll_adds_buffer_only_on_overflow() {
        assert_eq!(max_scroll(2000.0, 1200.0, 48.0), 848.0);
        assert_eq!(max_scroll(1200.0, 1200.0, 48.0), 0.0);
    }

    #[test]
    fn scroll_mapped_follows_window() {
        let mut gallery = ScrollMappedGallery::default();
        gallery.set_max_scroll(800.0);
        gallery.on_scroll(0.0, SPAN, 1000.0);
        assert_eq!(gallery.progress(), 0.0);
        gallery.on_scroll(1250.0, SPAN, 1000.0);
        assert_eq!(gallery.progress(), 0.5);
        assert_eq!(gallery.track_offset(), -400.0);
        gallery.on_scroll(2500.0, SPAN, 1000.0);
        assert_eq!(gallery.progress(), 1.0);
        gallery.on_scroll(9000.0, SPAN, 1000.0);
        assert_eq!(gallery.progress(), 1.0);
    }
}

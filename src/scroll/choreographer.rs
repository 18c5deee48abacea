//! Scroll choreography for the home page: section fades plus the horizontal
//! gallery traversal, recomputed at most once per animation frame.

use super::fade::{visibility, PageGeometry, VisibilityFrame};
use super::gallery::{max_scroll, GalleryLock, GallerySpan, ScrollMappedGallery, WheelOutcome};
use crate::config::{HomeVariant, WHEEL_SENSITIVITY};

enum Traversal {
    Mapped(ScrollMappedGallery),
    Locked(GalleryLock),
}

/// Everything the page needs to paint for one animation frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChoreographyFrame {
    pub visibility: VisibilityFrame,
    pub track_offset: f64,
    /// Scroll offset the window has to be moved back to, if any.
    pub pin_to: Option<f64>,
}

/// Owns the section fades and the gallery traversal for the home page.
pub struct ScrollChoreographer {
    geometry: PageGeometry,
    end_buffer: f64,
    traversal: Traversal,
}

impl ScrollChoreographer {
    pub fn new(variant: HomeVariant) -> Self {
        let traversal = if variant.locks_gallery() {
            Traversal::Locked(GalleryLock::new(WHEEL_SENSITIVITY))
        } else {
            Traversal::Mapped(ScrollMappedGallery::default())
        };
        Self {
            geometry: PageGeometry::default(),
            end_buffer: variant.gallery_end_buffer(),
            traversal,
        }
    }

    pub fn locks_gallery(&self) -> bool {
        matches!(self.traversal, Traversal::Locked(_))
    }

    pub fn measure(&mut self, geometry: PageGeometry) {
        self.geometry = geometry;
        let travel = max_scroll(geometry.track_width, geometry.track_viewport_width, self.end_buffer);
        match &mut self.traversal {
            Traversal::Mapped(gallery) => gallery.set_max_scroll(travel),
            Traversal::Locked(lock) => lock.set_max_scroll(travel),
        }
    }

    pub fn viewport_height(&self) -> f64 {
        self.geometry.viewport_height
    }

    fn span(&self) -> GallerySpan {
        GallerySpan {
            top: self.geometry.gallery_top,
            height: self.geometry.gallery_height,
        }
    }

    pub fn on_scroll(&mut self, scroll_y: f64) -> ChoreographyFrame {
        let span = self.span();
        let viewport_height = self.geometry.viewport_height;
        let pin_to = match &mut self.traversal {
            Traversal::Mapped(gallery) => {
                gallery.on_scroll(scroll_y, span, viewport_height);
                None
            }
            Traversal::Locked(lock) => lock.on_scroll(scroll_y, span),
        };
        // Fades are computed for the position the page is pinned to.
        let effective_y = pin_to.unwrap_or(scroll_y);

        ChoreographyFrame {
            visibility: visibility(&self.geometry, effective_y),
            track_offset: self.track_offset(),
            pin_to,
        }
    }

    pub fn on_wheel(&mut self, delta_y: f64) -> WheelOutcome {
        match &mut self.traversal {
            Traversal::Mapped(_) => WheelOutcome::PassThrough,
            Traversal::Locked(lock) => lock.on_wheel(delta_y),
        }
    }

    pub fn track_offset(&self) -> f64 {
        match &self.traversal {
            Traversal::Mapped(gallery) => gallery.track_offset(),
            Traversal::Locked(lock) => lock.track_offset(),
        }
    }

    pub fn gallery_progress(&self) -> f64 {
        match &self.traversal {
            Traversal::Mapped(gallery) => gallery.progress(),
            Traversal::Locked(lock) => lock.progress(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry() -> PageGeometry {
        PageGeometry {
            viewport_height: 1000.0,
            gallery_top: 1000.0,
            gallery_height: 1500.0,
            about_top: 2500.0,
            track_width: 2000.0,
            track_viewport_width: 1248.0,
        }
    }

    #[test]
    fn full_variant_locks_then_releases() {
        let mut engine = ScrollChoreographer::new(HomeVariant::Full);
        engine.measure(geometry());

        let frame = engine.on_scroll(0.0);
        assert_eq!(frame.pin_to, None);
        assert_eq!(frame.visibility.landing.opacity, 1.0);
        assert_eq!(frame.visibility.gallery.opacity, 0.0);

        let frame = engine.on_scroll(1000.0);
        assert_eq!(frame.pin_to, Some(1000.0));
        assert_eq!(frame.visibility.landing.opacity, 0.0);
        assert_eq!(frame.visibility.gallery.opacity, 1.0);

        assert_eq!(engine.on_wheel(500.0), WheelOutcome::PassThrough);
        assert_eq!(engine.gallery_progress(), 1.0);
        assert_eq!(engine.track_offset(), -800.0);

        let frame = engine.on_scroll(1100.0);
        assert_eq!(frame.pin_to, None);
        assert_eq!(frame.track_offset, -800.0);
    }

    #[test]
    fn pinned_frame_uses_gallery_top() {
        let mut engine = ScrollChoreographer::new(HomeVariant::Full);
        engine.measure(geometry());
        engine.on_scroll(900.0);
        let frame = engine.on_scroll(1200.0);
        assert_eq!(frame.pin_to, Some(1000.0));
        assert_eq!(frame.visibility, visibility(&geometry(), 1000.0));
    }

    #[test]
    fn remeasure_rescales_locked_track() {
        let mut engine = ScrollChoreographer::new(HomeVariant::Full);
        engine.measure(geometry());
        engine.on_scroll(0.0);
        assert_eq!(engine.on_scroll(1000.0).pin_to, Some(1000.0));
        assert_eq!(engine.on_wheel(250.0), WheelOutcome::Consumed);
        assert_eq!(engine.gallery_progress(), 0.5);
        assert_eq!(engine.track_offset(), -400.0);

        engine.measure(PageGeometry {
            track_width: 1648.0,
            ..geometry()
        });
        assert_eq!(engine.gallery_progress(), 0.5);
        assert_eq!(engine.track_offset(), -224.0);
        let frame = engine.on_scroll(1000.0);
        assert_eq!(frame.pin_to, Some(1000.0));
        assert_eq!(frame.track_offset, -224.0);

        engine.measure(PageGeometry {
            track_width: 1000.0,
            ..geometry()
        });
        assert_eq!(engine.on_scroll(1000.0).track_offset, 0.0);
    }

    #[test]
    fn remeasure_rescales_mapped_track() {
        let mut engine = ScrollChoreographer::new(HomeVariant::Simple);
        engine.measure(geometry());
        assert_eq!(engine.on_scroll(1250.0).track_offset, -376.0);

        engine.measure(PageGeometry {
            track_width: 1648.0,
            ..geometry()
        });
        assert_eq!(engine.track_offset(), -200.0);
        assert_eq!(engine.on_scroll(1250.0).track_offset, -200.0);
    }

    #[test]
    fn simple_variant_never_pins_or_consumes() {
        let mut engine = ScrollChoreographer::new(HomeVariant::Simple);
        engine.measure(geometry());
        assert!(!engine.locks_gallery());
        for y in [0.0, 500.0, 1000.0, 1750.0, 2500.0] {
            assert_eq!(engine.on_scroll(y).pin_to, None);
        }
        assert_eq!(engine.on_wheel(400.0), WheelOutcome::PassThrough);
        assert_eq!(engine.gallery_progress(), 1.0);
        assert_eq!(engine.track_offset(), -752.0);
    }
}

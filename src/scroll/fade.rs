//! Scroll offset to section opacity mapping.

/// Quadratic ease-in-out on `[0, 1]`.
pub fn ease_in_out_quad(t: f64) -> f64 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        let u = 1.0 - t;
        1.0 - 2.0 * u * u
    }
}

pub fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 1.0)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FadeDirection {
    In,
    Out,
}

/// Scroll interval over which a section interpolates between hidden and shown.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FadeZone {
    pub start: f64,
    pub end: f64,
    pub direction: FadeDirection,
}

impl FadeZone {
    pub fn fade_in(start: f64, end: f64) -> Self {
        Self { start, end, direction: FadeDirection::In }
    }

    pub fn fade_out(start: f64, end: f64) -> Self {
        Self { start, end, direction: FadeDirection::Out }
    }

    /// Fade-in zone ending `0.2` viewports before `top`, starting `0.8` before.
    pub fn approaching(top: f64, viewport_height: f64) -> Self {
        Self::fade_in(top - viewport_height * 0.8, top - viewport_height * 0.2)
    }

    /// Eased progress through the zone.
    pub fn progress(&self, scroll_y: f64) -> f64 {
        if scroll_y <= self.start {
            0.0
        } else if scroll_y >= self.end {
            1.0
        } else {
            // end > start here, the span cannot be zero
            ease_in_out_quad(clamp_unit((scroll_y - self.start) / (self.end - self.start)))
        }
    }

    pub fn opacity(&self, scroll_y: f64) -> f64 {
        let progress = self.progress(scroll_y);
        match self.direction {
            FadeDirection::In => progress,
            FadeDirection::Out => clamp_unit(1.0 - progress),
        }
    }
}

/// Opacity and entrance shift of one section for a single frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionFrame {
    pub opacity: f64,
    pub shift_px: f64,
}

impl SectionFrame {
    pub fn new(opacity: f64, max_shift: f64) -> Self {
        let opacity = clamp_unit(opacity);
        Self {
            opacity,
            shift_px: (1.0 - opacity) * max_shift,
        }
    }

    pub fn style(&self) -> String {
        format!(
            "opacity: {:.4}; transform: translateY({:.2}px); transition: opacity 0.1s linear, transform 0.1s linear;",
            self.opacity, self.shift_px
        )
    }

    pub fn opacity_style(&self) -> String {
        format!("opacity: {:.4}; transition: opacity 0.1s linear;", self.opacity)
    }
}

pub const LANDING_SHIFT_PX: f64 = 20.0;
pub const SECTION_SHIFT_PX: f64 = 30.0;

/// Element metrics read from the rendered page. Missing elements measure zero.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PageGeometry {
    pub viewport_height: f64,
    pub gallery_top: f64,
    pub gallery_height: f64,
    pub about_top: f64,
    pub track_width: f64,
    pub track_viewport_width: f64,
}

/// Visibility of every tracked section for one scroll offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibilityFrame {
    pub landing: SectionFrame,
    pub gallery: SectionFrame,
    pub about: SectionFrame,
}

pub fn landing_zone(viewport_height: f64) -> FadeZone {
    FadeZone::fade_out(viewport_height * 0.2, viewport_height * 0.8)
}

pub fn visibility(geometry: &PageGeometry, scroll_y: f64) -> VisibilityFrame {
    let vh = geometry.viewport_height;
    let landing = landing_zone(vh).opacity(scroll_y);
    let gallery = FadeZone::approaching(geometry.gallery_top, vh).opacity(scroll_y);
    let about = FadeZone::approaching(geometry.about_top, vh).opacity(scroll_y);

    VisibilityFrame {
        landing: SectionFrame::new(landing, LANDING_SHIFT_PX),
        gallery: SectionFrame::new(gallery, SECTION_SHIFT_PX),
        about: SectionFrame::new(about, SECTION_SHIFT_PX),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_hits_fixed_points() {
        assert_eq!(ease_in_out_quad(0.0), 0.0);
        assert_eq!(ease_in_out_quad(0.5), 0.5);
        assert_eq!(ease_in_out_quad(1.0), 1.0);
        assert!((ease_in_out_quad(0.25) - 0.125).abs() < 1e-12);
        assert!((ease_in_out_quad(0.75) - 0.875).abs() < 1e-12);
    }

    #[test]
    fn landing_is_opaque_before_fade_start() {
        let zone = landing_zone(1000.0);
        for y in [-50.0, 0.0, 100.0, 199.9, 200.0] {
            assert_eq!(zone.opacity(y), 1.0);
        }
        assert_eq!(zone.opacity(800.0), 0.0);
        assert_eq!(zone.opacity(5000.0), 0.0);
    }

    #[test]
    fn fade_in_is_monotonic_inside_zone() {
        let zone = FadeZone::approaching(2000.0, 1000.0);
        assert_eq!(zone.opacity(1200.0), 0.0);
        let mut last = 0.0;
        let mut y = 1201.0;
        while y < 1800.0 {
            let o = zone.opacity(y);
            assert!(o > 0.0 && o < 1.0, "opacity {o} at {y}");
            assert!(o >= last);
            last = o;
            y += 7.0;
        }
        assert_eq!(zone.opacity(1800.0), 1.0);
    }

    #[test]
    fn fade_out_is_monotonic_decreasing() {
        let zone = landing_zone(900.0);
        let mut last = 1.0;
        for step in 1..60 {
            let y = 180.0 + step as f64 * 9.0;
            let o = zone.opacity(y);
            assert!(o > 0.0 && o < 1.0);
            assert!(o <= last);
            last = o;
        }
    }

    #[test]
    fn degenerate_zone_is_a_step() {
        let zone = FadeZone::fade_in(100.0, 100.0);
        assert_eq!(zone.opacity(99.0), 0.0);
        assert_eq!(zone.opacity(100.0), 0.0);
        assert_eq!(zone.opacity(100.5), 1.0);
    }

    #[test]
    fn section_shift_follows_opacity() {
        let frame = SectionFrame::new(0.25, SECTION_SHIFT_PX);
        assert_eq!(frame.shift_px, 22.5);
        let frame = SectionFrame::new(3.0, SECTION_SHIFT_PX);
        assert_eq!(frame.opacity, 1.0);
        assert_eq!(frame.shift_px, 0.0);
    }

    #[test]
    fn zero_geometry_still_yields_unit_values() {
        let frame = visibility(&PageGeometry::default(), 0.0);
        assert_eq!(frame.landing.opacity, 1.0);
        for section in [frame.gallery, frame.about] {
            assert!((0.0..=1.0).contains(&section.opacity));
        }
    }
}

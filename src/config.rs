use log::Level;

/// Which home page layout to render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HomeVariant {
    /// Header without menu, scroll-mapped gallery, about section only.
    Simple,
    /// Dropdown menu with the events link, wheel-locked gallery, footer.
    Full,
}

impl HomeVariant {
    pub fn locks_gallery(self) -> bool {
        matches!(self, HomeVariant::Full)
    }

    pub fn has_menu(self) -> bool {
        matches!(self, HomeVariant::Full)
    }

    pub fn gallery_end_buffer(self) -> f64 {
        match self {
            HomeVariant::Simple => 0.0,
            HomeVariant::Full => GALLERY_END_BUFFER,
        }
    }
}

#[cfg(feature = "simple-home")]
pub fn home_variant() -> HomeVariant {
    HomeVariant::Simple
}

#[cfg(not(feature = "simple-home"))]
pub fn home_variant() -> HomeVariant {
    HomeVariant::Full
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VideoSource {
    pub src: &'static str,
    pub mime: &'static str,
    pub name: &'static str,
}

pub static VIDEO_SOURCES: [VideoSource; 3] = [
    VideoSource {
        src: "/mov/landing.mov",
        mime: "video/quicktime",
        name: "Landing",
    },
    VideoSource {
        src: "/mov/WhatsApp Video 2025-11-21 at 07.30.40.mp4",
        mime: "video/mp4",
        name: "Video 1",
    },
    VideoSource {
        src: "/mov/WhatsApp Video 2025-11-21 at 07.30.43.mp4",
        mime: "video/mp4",
        name: "Video 2",
    },
];

/// Gallery progress gained per pixel of wheel delta while locked.
pub const WHEEL_SENSITIVITY: f64 = 0.002;
/// Extra travel so the last gallery item clears the right edge.
pub const GALLERY_END_BUFFER: f64 = 48.0;

pub const BRAND_NAME: &str = "Western Vintage Organisation";
pub const BRAND_TYPE_SPEED_MS: u32 = 80;

pub const TIKTOK_EMBED_ORIGIN: &str = "https://www.tiktok.com";
// Replace with the ids from tiktok.com/@the_western.vintage/video/<id>
pub const TIKTOK_VIDEO_IDS: [&str; 3] = [
    "7321234567890123456",
    "7321234567890123457",
    "7321234567890123458",
];

pub const INSTAGRAM_URL: &str = "https://instagram.com";
pub const TIKTOK_PROFILE_URL: &str = "https://www.tiktok.com/@the_western.vintage";

use yew::prelude::*;

use crate::components::background_video::BackgroundVideo;
use crate::components::site_footer::SiteFooter;
use crate::components::site_header::SiteHeader;
use crate::components::typewriter::Typewriter;
use crate::config::{self, BRAND_NAME, BRAND_TYPE_SPEED_MS};
use crate::scroll::{use_scroll_choreography, ChoreographyRefs};

#[derive(Clone, Copy, PartialEq)]
enum ItemShape {
    Portrait,
    LargePortrait,
    SmallSquare,
}

impl ItemShape {
    fn class(self) -> &'static str {
        match self {
            ItemShape::Portrait => "image-portrait",
            ItemShape::LargePortrait => "image-large-portrait",
            ItemShape::SmallSquare => "image-small-square",
        }
    }
}

struct GalleryImage {
    label: &'static str,
    src: &'static str,
    alt: &'static str,
    shape: ItemShape,
    grayscale: bool,
}

const GALLERY_IMAGES: [GalleryImage; 5] = [
    GalleryImage {
        label: "VINTAGE FORMAL",
        src: "/scrolling gallery/IMG_3766.jpg",
        alt: "Vintage Gala Event",
        shape: ItemShape::Portrait,
        grayscale: true,
    },
    GalleryImage {
        label: "STREETWEAR",
        src: "/scrolling gallery/IMG_3639.jpg",
        alt: "Western Heritage",
        shape: ItemShape::LargePortrait,
        grayscale: false,
    },
    GalleryImage {
        label: "URBAN CLASSIC",
        src: "/scrolling gallery/IMG_3897.jpg",
        alt: "Gala Celebration",
        shape: ItemShape::SmallSquare,
        grayscale: false,
    },
    GalleryImage {
        label: "RETRO MODERN",
        src: "/scrolling gallery/IMG_3909.jpg",
        alt: "Vintage Collection",
        shape: ItemShape::Portrait,
        grayscale: false,
    },
    GalleryImage {
        label: "CASUAL ELEGANCE",
        src: "/scrolling gallery/IMG_3766.jpg",
        alt: "Vintage Collection",
        shape: ItemShape::SmallSquare,
        grayscale: true,
    },
];

fn gallery_item(image: &GalleryImage) -> Html {
    html! {
        <div class={classes!("gallery-item", "image-item", image.shape.class())}>
            <div class="image-label-top">{image.label}</div>
            <div class={classes!("image-wrapper", image.grayscale.then(|| "image-grayscale"))}>
                <img src={image.src} alt={image.alt} loading="lazy" />
            </div>
        </div>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    let variant = config::home_variant();

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    let refs = ChoreographyRefs {
        landing: use_node_ref(),
        header: use_node_ref(),
        gallery: use_node_ref(),
        track_viewport: use_node_ref(),
        track: use_node_ref(),
        about: use_node_ref(),
    };
    use_scroll_choreography(variant, refs.clone());

    let gallery_class = if variant.locks_gallery() {
        "gallery-section--locked"
    } else {
        "gallery-section--mapped"
    };

    html! {
        <div class="home-page">
            <div class="landing-page fade-section" ref={refs.landing.clone()}>
                <SiteHeader class={classes!("landing-header")} menu={variant.has_menu()} header_ref={refs.header.clone()}>
                    <Typewriter text={BRAND_NAME} speed={BRAND_TYPE_SPEED_MS} />
                </SiteHeader>
                <BackgroundVideo />
            </div>

            <section class={classes!("gallery-section", "fade-section", gallery_class)} ref={refs.gallery.clone()}>
                <div class="gallery-container" ref={refs.track_viewport.clone()}>
                    <div class="gallery-content" ref={refs.track.clone()}>
                        { for GALLERY_IMAGES.iter().map(gallery_item) }
                        <div class="gallery-item quote-item">
                            <blockquote class="gallery-quote">
                                {"\"From a young age, Western Vintage was created to shine a light on hidden talents giving young people the confidence, platform, and opportunity to turn their creativity into something meaningful.\""}
                            </blockquote>
                            <div class="quote-signature">{"Western Vintage"}</div>
                        </div>
                    </div>
                </div>
            </section>

            <section class="about-section fade-section" ref={refs.about.clone()}>
                <div class="about-wrapper">
                    <div class="about-header">
                        <div class="decorative-line"></div>
                        <h2 class="about-title">{"ABOUT US"}</h2>
                        <div class="decorative-line"></div>
                    </div>

                    <div class="about-content-wrapper">
                        <p class="about-description">
                            {"Western Vintage Organization is a youth-driven creative platform in the Western Region of Ghana, focused on empowering young people through fashion, art, and street culture."}
                        </p>
                        <div class="about-mission">
                            <h3 class="mission-title">{"OUR MISSION"}</h3>
                            <p class="mission-text">
                                {"We provide a space where creativity is celebrated, talents are showcased, and young people are inspired to express themselves confidently through authentic self-expression."}
                            </p>
                        </div>
                        <div class="about-vision">
                            <h3 class="vision-title">{"OUR VISION"}</h3>
                            <p class="vision-text">
                                {"Through events like the Western Vintage Gala, we aim to build a positive culture that supports youth creativity and shapes a brighter future for the next generation."}
                            </p>
                        </div>
                    </div>

                    <div class="about-footer">
                        <div class="footer-divider"></div>
                        <p class="about-tagline">{"Creativity. Expression. Community."}</p>
                    </div>
                </div>
            </section>

            {
                if variant.has_menu() {
                    html! { <SiteFooter /> }
                } else {
                    html! {}
                }
            }

            <style>
                {r#"
                    .home-page {
                        background: #0d0b09;
                        color: #f5f0e6;
                        overflow-x: clip;
                    }
                    .fade-section {
                        will-change: opacity, transform;
                    }
                    .landing-page {
                        position: relative;
                        height: 100vh;
                        width: 100%;
                        overflow: hidden;
                    }
                    .gallery-section {
                        position: relative;
                        width: 100%;
                        opacity: 0;
                    }
                    .gallery-section--locked {
                        height: 100vh;
                        overflow: hidden;
                    }
                    .gallery-section--mapped {
                        height: 200vh;
                    }
                    .gallery-section--mapped .gallery-container {
                        position: sticky;
                        top: 0;
                    }
                    .gallery-container {
                        height: 100vh;
                        width: 100%;
                        overflow: hidden;
                        display: flex;
                        align-items: center;
                    }
                    .gallery-content {
                        display: flex;
                        align-items: center;
                        gap: 4rem;
                        padding: 0 6vw;
                        width: max-content;
                        will-change: transform;
                    }
                    .image-item {
                        flex: 0 0 auto;
                    }
                    .image-label-top {
                        font-size: 0.75rem;
                        letter-spacing: 0.3em;
                        margin-bottom: 0.75rem;
                        color: #c9a86a;
                    }
                    .image-wrapper img {
                        display: block;
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                    }
                    .image-grayscale img {
                        filter: grayscale(100%);
                    }
                    .image-portrait .image-wrapper {
                        width: 28vh;
                        height: 42vh;
                    }
                    .image-large-portrait .image-wrapper {
                        width: 38vh;
                        height: 60vh;
                    }
                    .image-small-square .image-wrapper {
                        width: 26vh;
                        height: 26vh;
                    }
                    .quote-item {
                        flex: 0 0 auto;
                        width: 32rem;
                        max-width: 80vw;
                    }
                    .gallery-quote {
                        font-family: Georgia, serif;
                        font-size: 1.6rem;
                        line-height: 1.5;
                        font-style: italic;
                        margin: 0 0 1.5rem;
                    }
                    .quote-signature {
                        font-family: 'Brush Script MT', cursive;
                        font-size: 2rem;
                        color: #c9a86a;
                    }
                    .about-section {
                        min-height: 100vh;
                        padding: 8rem 2rem;
                        opacity: 0;
                    }
                    .about-wrapper {
                        max-width: 820px;
                        margin: 0 auto;
                    }
                    .about-header {
                        display: flex;
                        align-items: center;
                        gap: 1.5rem;
                        margin-bottom: 3rem;
                    }
                    .decorative-line {
                        flex: 1;
                        height: 1px;
                        background: rgba(201, 168, 106, 0.5);
                    }
                    .about-title {
                        letter-spacing: 0.4em;
                        font-weight: 400;
                    }
                    .about-description {
                        font-size: 1.25rem;
                        line-height: 1.8;
                    }
                    .mission-title, .vision-title {
                        color: #c9a86a;
                        letter-spacing: 0.25em;
                        font-size: 0.9rem;
                        margin-top: 2.5rem;
                    }
                    .mission-text, .vision-text {
                        line-height: 1.7;
                        color: rgba(245, 240, 230, 0.85);
                    }
                    .about-footer {
                        margin-top: 4rem;
                        text-align: center;
                    }
                    .footer-divider {
                        width: 60px;
                        height: 1px;
                        margin: 0 auto 1.5rem;
                        background: #c9a86a;
                    }
                    .about-tagline {
                        letter-spacing: 0.3em;
                        text-transform: uppercase;
                        font-size: 0.85rem;
                    }
                    @media (max-width: 768px) {
                        .gallery-content {
                            gap: 2rem;
                        }
                        .gallery-quote {
                            font-size: 1.2rem;
                        }
                    }
                "#}
            </style>
        </div>
    }
}

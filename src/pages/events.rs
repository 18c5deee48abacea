use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::carousel::VideoCarousel;
use crate::components::site_footer::SiteFooter;
use crate::components::site_header::SiteHeader;
use crate::config::TIKTOK_VIDEO_IDS;
use crate::Route;

#[function_component(Events)]
pub fn events() -> Html {
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

    let video_ids: Vec<AttrValue> = TIKTOK_VIDEO_IDS
        .iter()
        .copied()
        .map(AttrValue::Static)
        .collect();

    html! {
        <div class="events-page">
            <SiteHeader class={classes!("events-header")}>
                <Link<Route> to={Route::Home} classes="events-brand">
                    {"Western Vintage"}
                    <span class="brand-dot"></span>
                </Link<Route>>
            </SiteHeader>

            <main class="events-main">
                <section class="events-hero">
                    <h1 class="events-title">{"Events"}</h1>
                    <p class="events-subtitle">{"Western Vintage Gala & more"}</p>
                </section>

                <section class="events-videos-section">
                    <VideoCarousel video_ids={video_ids} />
                </section>
            </main>

            <SiteFooter />
            <style>
                {r#"
                    .events-page {
                        min-height: 100vh;
                        background: #0d0b09;
                        color: #f5f0e6;
                        display: flex;
                        flex-direction: column;
                    }
                    .events-header {
                        background: rgba(13, 11, 9, 0.9);
                        backdrop-filter: blur(8px);
                    }
                    .events-main {
                        flex: 1;
                        padding: 8rem 1.5rem 4rem;
                    }
                    .events-hero {
                        text-align: center;
                        margin-bottom: 3rem;
                    }
                    .events-title {
                        font-size: 3.5rem;
                        letter-spacing: 0.2em;
                        text-transform: uppercase;
                        font-weight: 400;
                        margin: 0;
                    }
                    .events-subtitle {
                        color: #c9a86a;
                        letter-spacing: 0.15em;
                    }
                    @media (max-width: 768px) {
                        .events-title {
                            font-size: 2.2rem;
                        }
                    }
                "#}
            </style>
        </div>
    }
}

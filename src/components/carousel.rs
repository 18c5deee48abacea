use yew::prelude::*;

use crate::config::TIKTOK_EMBED_ORIGIN;

/// Cyclic slide position over a fixed number of slides.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarouselState {
    index: usize,
    len: usize,
}

impl CarouselState {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    /// Rebuild over `len` slides, falling back to the first slide when
    /// `index` no longer exists.
    pub fn at(index: usize, len: usize) -> Self {
        Self::new(len).go_to(index)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn next(self) -> Self {
        if self.len == 0 {
            return self;
        }
        Self {
            index: (self.index + 1) % self.len,
            ..self
        }
    }

    pub fn previous(self) -> Self {
        if self.len == 0 {
            return self;
        }
        Self {
            index: (self.index + self.len - 1) % self.len,
            ..self
        }
    }

    pub fn go_to(self, index: usize) -> Self {
        if index >= self.len {
            return self;
        }
        Self { index, ..self }
    }

    pub fn track_style(&self) -> String {
        format!("transform: translateX(-{}%);", self.index * 100)
    }
}

pub fn embed_url(video_id: &str) -> String {
    format!(
        "{}/embed/v2/{}",
        TIKTOK_EMBED_ORIGIN,
        urlencoding::encode(video_id)
    )
}

#[derive(Properties, PartialEq)]
pub struct VideoCarouselProps {
    pub video_ids: Vec<AttrValue>,
}

#[function_component(VideoCarousel)]
pub fn video_carousel(props: &VideoCarouselProps) -> Html {
    let selected = use_state(|| 0usize);
    let carousel = CarouselState::at(*selected, props.video_ids.len());

    let on_previous = {
        let selected = selected.clone();
        Callback::from(move |_: MouseEvent| selected.set(carousel.previous().index()))
    };
    let on_next = {
        let selected = selected.clone();
        Callback::from(move |_: MouseEvent| selected.set(carousel.next().index()))
    };

    html! {
        <div class="events-videos-inner">
            <div class="events-carousel">
                <button type="button" class="events-carousel-btn events-carousel-prev" aria-label="Previous" onclick={on_previous}>
                    <svg width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2"><path d="M15 18l-6-6 6-6"/></svg>
                </button>

                <div class="events-carousel-viewport">
                    <div class="events-carousel-track" style={carousel.track_style()}>
                        {
                            props.video_ids.iter().enumerate().map(|(i, id)| html! {
                                <div key={id.to_string()} class="events-carousel-slide">
                                    <div class="events-tiktok-embed">
                                        <iframe
                                            src={embed_url(id)}
                                            width="325"
                                            height="575"
                                            frameborder="0"
                                            allowfullscreen=true
                                            title={format!("TikTok video {}", i + 1)}
                                        />
                                    </div>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                </div>

                <button type="button" class="events-carousel-btn events-carousel-next" aria-label="Next" onclick={on_next}>
                    <svg width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2"><path d="M9 18l6-6-6-6"/></svg>
                </button>
            </div>

            <div class="events-carousel-dots">
                {
                    (0..props.video_ids.len()).map(|i| {
                        let onclick = {
                            let selected = selected.clone();
                            Callback::from(move |_: MouseEvent| selected.set(carousel.go_to(i).index()))
                        };
                        html! {
                            <button
                                key={i.to_string()}
                                type="button"
                                class={classes!("events-dot", (i == carousel.index()).then(|| "active"))}
                                aria-label={format!("Go to slide {}", i + 1)}
                                onclick={onclick}
                            />
                        }
                    }).collect::<Html>()
                }
            </div>
            <style>
                {r#"
                    .events-carousel {
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                        justify-content: center;
                    }
                    .events-carousel-viewport {
                        overflow: hidden;
                        width: 345px;
                        max-width: 80vw;
                    }
                    .events-carousel-track {
                        display: flex;
                        transition: transform 0.5s cubic-bezier(0.4, 0, 0.2, 1);
                    }
                    .events-carousel-slide {
                        flex: 0 0 100%;
                        display: flex;
                        justify-content: center;
                    }
                    .events-tiktok-embed iframe {
                        border: none;
                        border-radius: 12px;
                        background: #111;
                    }
                    .events-carousel-btn {
                        background: transparent;
                        color: #f5f0e6;
                        border: 1px solid rgba(245, 240, 230, 0.4);
                        border-radius: 50%;
                        width: 44px;
                        height: 44px;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        cursor: pointer;
                    }
                    .events-carousel-dots {
                        display: flex;
                        justify-content: center;
                        gap: 0.75rem;
                        margin-top: 1.5rem;
                    }
                    .events-dot {
                        width: 10px;
                        height: 10px;
                        border-radius: 50%;
                        border: none;
                        padding: 0;
                        background: rgba(245, 240, 230, 0.35);
                        cursor: pointer;
                    }
                    .events-dot.active {
                        background: #c9a86a;
                    }
                "#}
            </style>
        </div>
    }
}

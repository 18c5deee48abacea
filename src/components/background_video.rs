use gloo_events::EventListener;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::HtmlVideoElement;
use yew::prelude::*;

use crate::config::VIDEO_SOURCES;
use crate::media::playback::{PlaybackAction, PlaybackError, PlaybackState};

/// Call `play()` and swallow a rejected promise. Browsers refuse autoplay
/// with sound, which is expected and not shown to the visitor.
fn try_play(video: &HtmlVideoElement) {
    match video.play() {
        Ok(promise) => spawn_local(async move {
            if let Err(err) = JsFuture::from(promise).await {
                log::debug!("Play prevented (this is normal): {:?}", err);
            }
        }),
        Err(err) => log::debug!("Play call failed: {:?}", err),
    }
}

fn media_error(video: &HtmlVideoElement) -> PlaybackError {
    match video.error() {
        Some(err) => PlaybackError::from_media(err.code(), &err.message()),
        None => PlaybackError::Unavailable,
    }
}

#[function_component(BackgroundVideo)]
pub fn background_video() -> Html {
    let playback = use_reducer(PlaybackState::default);
    let video_ref = use_node_ref();

    // Attach lifecycle listeners and load the selected source.
    {
        let video_ref = video_ref.clone();
        let dispatcher = playback.dispatcher();
        let index = playback.index;
        let request = playback.load_request();
        use_effect_with_deps(
            move |_| {
                let mut listeners = Vec::new();
                if let Some(video) = video_ref.cast::<HtmlVideoElement>() {
                    log::info!("Loading video: {} ({})", request.src, request.mime);

                    {
                        let dispatcher = dispatcher.clone();
                        listeners.push(EventListener::new(&video, "loadstart", move |_| {
                            log::debug!("Video load started");
                            dispatcher.dispatch(PlaybackAction::LoadStarted);
                        }));
                    }
                    {
                        let dispatcher = dispatcher.clone();
                        let target = video.clone();
                        listeners.push(EventListener::new(&video, "loadeddata", move |_| {
                            log::info!("Video loaded successfully");
                            dispatcher.dispatch(PlaybackAction::Loaded);
                            try_play(&target);
                        }));
                    }
                    {
                        let dispatcher = dispatcher.clone();
                        listeners.push(EventListener::new(&video, "canplay", move |_| {
                            dispatcher.dispatch(PlaybackAction::CanPlay);
                        }));
                    }
                    {
                        let dispatcher = dispatcher.clone();
                        let target = video.clone();
                        listeners.push(EventListener::new(&video, "error", move |_| {
                            let err = media_error(&target);
                            log::error!("{} ({})", err, request.src);
                            dispatcher.dispatch(PlaybackAction::Failed(err));
                        }));
                    }
                    {
                        // Looping by hand: the loop attribute is unreliable
                        // across explicit source swaps.
                        let target = video.clone();
                        listeners.push(EventListener::new(&video, "ended", move |_| {
                            target.set_current_time(0.0);
                            try_play(&target);
                        }));
                    }

                    dispatcher.dispatch(PlaybackAction::LoadStarted);
                    video.set_muted(request.muted);
                    video.set_src(request.src);
                    video.load();
                    try_play(&video);
                } else {
                    log::error!("Video element is not mounted");
                }
                move || drop(listeners)
            },
            index,
        );
    }

    let on_toggle_mute = {
        let playback = playback.clone();
        let video_ref = video_ref.clone();
        Callback::from(move |_: MouseEvent| {
            let muted = !playback.muted;
            playback.dispatch(PlaybackAction::ToggleMute);
            if let Some(video) = video_ref.cast::<HtmlVideoElement>() {
                video.set_muted(muted);
            }
        })
    };

    let current = playback.source();

    html! {
        <>
            {
                if playback.is_loading() {
                    html! { <div class="loading">{"Loading video..."}</div> }
                } else {
                    html! {}
                }
            }
            {
                if let Some(err) = playback.error() {
                    html! {
                        <div class="error">
                            <p>{err.to_string()}</p>
                            <p>{format!("Video path: {}", current.src)}</p>
                            <p>{"Check browser console for details"}</p>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
            <video
                ref={video_ref}
                class="landing-video"
                autoplay=true
                muted={playback.muted}
                playsinline=true
                preload="auto"
            >
                {"Your browser does not support the video tag."}
            </video>

            <div class="video-navigation landing-control">
                {
                    VIDEO_SOURCES.iter().enumerate().map(|(index, source)| {
                        let onclick = {
                            let playback = playback.clone();
                            Callback::from(move |_: MouseEvent| {
                                playback.dispatch(PlaybackAction::Switch(index));
                            })
                        };
                        html! {
                            <button
                                key={index.to_string()}
                                class={classes!("video-nav-item", (index == playback.index).then(|| "active"))}
                                onclick={onclick}
                                aria-label={format!("Switch to {}", source.name)}
                            >
                                <span class="video-nav-dot"></span>
                            </button>
                        }
                    }).collect::<Html>()
                }
            </div>

            <button
                class="audio-toggle landing-control"
                onclick={on_toggle_mute}
                aria-label={if playback.muted { "Enable audio" } else { "Disable audio" }}
            >
                {
                    if playback.muted {
                        html! {
                            <svg width="24" height="24" viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg">
                                <path d="M16.5 12c0-1.77-1.02-3.29-2.5-4.03v2.21l2.45 2.45c.03-.2.05-.41.05-.63zm2.5 0c0 .94-.2 1.82-.54 2.64l1.51 1.51C20.63 14.91 21 13.5 21 12c0-4.28-2.99-7.86-7-8.77v2.06c2.89.86 5 3.54 5 6.71zM4.27 3L3 4.27 7.73 9H3v6h4l5 5v-6.73l4.25 4.25c-.67.52-1.42.93-2.25 1.18v2.06c1.38-.31 2.63-.95 3.69-1.81L19.73 21 21 19.73l-9-9L4.27 3zM12 4L9.91 6.09 12 8.18V4z" fill="currentColor"/>
                            </svg>
                        }
                    } else {
                        html! {
                            <svg width="24" height="24" viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg">
                                <path d="M3 9v6h4l5 5V4L7 9H3zm13.5 3c0-1.77-1.02-3.29-2.5-4.03v8.05c1.48-.73 2.5-2.25 2.5-4.02zM14 3.23v2.06c2.89.86 5 3.54 5 6.71s-2.11 5.85-5 6.71v2.06c4.01-.91 7-4.49 7-8.77s-2.99-7.86-7-8.77z" fill="currentColor"/>
                            </svg>
                        }
                    }
                }
            </button>
            <style>
                {r#"
                    .landing-video {
                        position: absolute;
                        inset: 0;
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        z-index: 0;
                    }
                    .loading, .error {
                        position: absolute;
                        top: 50%;
                        left: 50%;
                        transform: translate(-50%, -50%);
                        z-index: 3;
                        color: #f5f0e6;
                        text-align: center;
                        letter-spacing: 0.05em;
                    }
                    .error {
                        background: rgba(120, 20, 20, 0.85);
                        padding: 1.5rem 2rem;
                        border-radius: 8px;
                        max-width: 90vw;
                    }
                    .video-navigation {
                        position: absolute;
                        bottom: 3rem;
                        left: 50%;
                        transform: translateX(-50%);
                        display: flex;
                        gap: 1rem;
                        z-index: 2;
                    }
                    .video-nav-item {
                        background: none;
                        border: none;
                        padding: 0.5rem;
                        cursor: pointer;
                    }
                    .video-nav-dot {
                        display: block;
                        width: 10px;
                        height: 10px;
                        border-radius: 50%;
                        background: rgba(245, 240, 230, 0.4);
                        transition: background 0.3s ease, transform 0.3s ease;
                    }
                    .video-nav-item.active .video-nav-dot {
                        background: #f5f0e6;
                        transform: scale(1.4);
                    }
                    .audio-toggle {
                        position: absolute;
                        right: 2rem;
                        bottom: 2.5rem;
                        z-index: 2;
                        background: rgba(0, 0, 0, 0.35);
                        color: #f5f0e6;
                        border: 1px solid rgba(245, 240, 230, 0.3);
                        border-radius: 50%;
                        width: 48px;
                        height: 48px;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        cursor: pointer;
                    }
                "#}
            </style>
        </>
    }
}

use std::rc::Rc;

use thiserror::Error;
use yew::Reducible;

use crate::config::{VideoSource, VIDEO_SOURCES};

/// Why the background video could not be shown.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PlaybackError {
    #[error("Video error (code {code}): {message}")]
    Media { code: u16, message: String },
    #[error("Video failed to load. Please try another video.")]
    Unavailable,
}

impl PlaybackError {
    /// Build from the `MediaError` code and message the browser reported.
    pub fn from_media(code: u16, message: &str) -> Self {
        let message = if message.trim().is_empty() {
            describe_media_code(code).to_string()
        } else {
            message.to_string()
        };
        PlaybackError::Media { code, message }
    }
}

fn describe_media_code(code: u16) -> &'static str {
    match code {
        1 => "Playback was aborted",
        2 => "A network error interrupted the download",
        3 => "The video could not be decoded",
        4 => "The video format is not supported",
        _ => "Unknown error",
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlaybackPhase {
    Idle,
    Loading,
    Ready,
    Error(PlaybackError),
}

#[derive(Clone, Debug, PartialEq)]
pub enum PlaybackAction {
    Switch(usize),
    LoadStarted,
    Loaded,
    CanPlay,
    Failed(PlaybackError),
    ToggleMute,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlaybackState {
    pub index: usize,
    pub phase: PlaybackPhase,
    pub muted: bool,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self {
            index: 0,
            phase: PlaybackPhase::Idle,
            muted: true,
        }
    }
}

/// Element properties to apply before loading a source. The `muted`
/// attribute only seeds `defaultMuted`, so the property has to be set here.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadRequest {
    pub src: &'static str,
    pub mime: &'static str,
    pub muted: bool,
}

impl PlaybackState {
    pub fn load_request(&self) -> LoadRequest {
        let source = self.source();
        LoadRequest {
            src: source.src,
            mime: source.mime,
            muted: self.muted,
        }
    }

    pub fn source(&self) -> &'static VideoSource {
        &VIDEO_SOURCES[self.index.min(VIDEO_SOURCES.len() - 1)]
    }

    pub fn is_loading(&self) -> bool {
        self.phase == PlaybackPhase::Loading
    }

    pub fn error(&self) -> Option<&PlaybackError> {
        match &self.phase {
            PlaybackPhase::Error(err) => Some(err),
            _ => None,
        }
    }

    /// Apply one action; `None` when it leaves the state untouched.
    pub fn apply(&self, action: PlaybackAction) -> Option<Self> {
        let mut next = self.clone();
        match action {
            PlaybackAction::Switch(index) => {
                if index == self.index || index >= VIDEO_SOURCES.len() {
                    return None;
                }
                next.index = index;
                next.phase = PlaybackPhase::Loading;
            }
            PlaybackAction::LoadStarted => next.phase = PlaybackPhase::Loading,
            PlaybackAction::Loaded | PlaybackAction::CanPlay => {
                // a late canplay must not hide an error from the same source
                if matches!(self.phase, PlaybackPhase::Error(_)) {
                    return None;
                }
                next.phase = PlaybackPhase::Ready;
            }
            PlaybackAction::Failed(err) => next.phase = PlaybackPhase::Error(err),
            PlaybackAction::ToggleMute => next.muted = !self.muted,
        }
        (next != *self).then_some(next)
    }
}

impl Reducible for PlaybackState {
    type Action = PlaybackAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match self.apply(action) {
            Some(next) => Rc::new(next),
            None => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn switching_to_active_index_is_noop() {
        let state = Rc::new(PlaybackState::default());
        let after = state.clone().reduce(PlaybackAction::Switch(0));
        assert!(Rc::ptr_eq(&state, &after));
    }

    #[test]
    fn switching_sets_loading_and_clears_error() {
        let state = PlaybackState {
            phase: PlaybackPhase::Error(PlaybackError::Unavailable),
            ..PlaybackState::default()
        };
        let next = state.apply(PlaybackAction::Switch(2)).expect("state change");
        assert_eq!(next.index, 2);
        assert_eq!(next.phase, PlaybackPhase::Loading);
        assert_eq!(next.source().name, "Video 2");
    }

    #[test]
    fn out_of_range_switch_is_ignored() {
        assert_eq!(PlaybackState::default().apply(PlaybackAction::Switch(7)), None);
    }

    #[test]
    fn load_lifecycle() {
        let state = PlaybackState::default();
        let state = state.apply(PlaybackAction::LoadStarted).expect("loading");
        assert!(state.is_loading());
        let state = state.apply(PlaybackAction::Loaded).expect("ready");
        assert_eq!(state.phase, PlaybackPhase::Ready);
        assert_eq!(state.apply(PlaybackAction::CanPlay), None);
    }

    #[test]
    fn error_sticks_until_next_load() {
        let state = PlaybackState::default()
            .apply(PlaybackAction::Failed(PlaybackError::from_media(4, "")))
            .expect("error");
        assert!(!state.is_loading());
        assert_eq!(state.apply(PlaybackAction::CanPlay), None);
        let state = state.apply(PlaybackAction::LoadStarted).expect("retry");
        assert_eq!(state.error(), None);
    }

    #[test]
    fn mute_toggles() {
        let state = PlaybackState::default();
        assert!(state.muted);
        let state = state.apply(PlaybackAction::ToggleMute).expect("unmuted");
        assert!(!state.muted);
        let state = state.apply(PlaybackAction::ToggleMute).expect("muted");
        assert!(state.muted);
    }

    #[test]
    fn load_request_carries_mute_flag() {
        let request = PlaybackState::default().load_request();
        assert!(request.muted);
        assert_eq!(request.src, VIDEO_SOURCES[0].src);

        let state = PlaybackState::default()
            .apply(PlaybackAction::ToggleMute)
            .and_then(|state| state.apply(PlaybackAction::Switch(1)))
            .expect("unmuted on second video");
        let request = state.load_request();
        assert!(!request.muted);
        assert_eq!(request.src, VIDEO_SOURCES[1].src);
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            PlaybackError::from_media(2, "MEDIA_ELEMENT_ERROR: Format error").to_string(),
            "Video error (code 2): MEDIA_ELEMENT_ERROR: Format error"
        );
        assert_eq!(
            PlaybackError::from_media(4, " ").to_string(),
            "Video error (code 4): The video format is not supported"
        );
        assert_eq!(
            PlaybackError::from_media(9, "").to_string(),
            "Video error (code 9): Unknown error"
        );
        assert_eq!(
            PlaybackError::Unavailable.to_string(),
            "Video failed to load. Please try another video."
        );
    }
}

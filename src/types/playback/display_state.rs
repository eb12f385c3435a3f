use crate::types::playback::PlaybackStatus;
use derivative::Derivative;
use serde::Serialize;

#[derive(Derivative, Clone, Copy, PartialEq, Eq, Serialize, Debug)]
#[derivative(Default)]
pub enum DisplayState {
    #[derivative(Default)]
    Off,
    Loading,
    On,
    Error,
}

impl DisplayState {
    /// Rules in priority order: error, off, loading, on. Anything else while
    /// desired (e.g. paused with a start attempt pending) is transient loading.
    pub fn project(status: PlaybackStatus, desired: bool, has_error: bool) -> Self {
        match (status, desired) {
            _ if has_error => DisplayState::Error,
            (_, false) => DisplayState::Off,
            (PlaybackStatus::Loading, true) => DisplayState::Loading,
            (PlaybackStatus::Playing, true) => DisplayState::On,
            _ => DisplayState::Loading,
        }
    }
}

use serde::Deserialize;

use crate::{
    models::playback_session::Selected as PlaybackSessionSelected,
    types::playback::{Generation, ResourceSignal},
};

#[derive(Clone, Deserialize, Debug)]
#[serde(tag = "action", content = "args")]
pub enum ActionPlayback {
    /// The caller's desired state changed. The core never flips it on its own.
    SetDesired(bool),
    /// Lifecycle signal reported by the media element mounted for `generation`.
    Signal {
        generation: Generation,
        signal: ResourceSignal,
    },
    /// The user clicked the control surface.
    ControlClicked,
}

#[derive(Clone, Deserialize, Debug)]
#[serde(tag = "action", content = "args")]
pub enum ActionSaved {
    /// Toggles the membership of the currently loaded saved item.
    Toggle,
    Remove(String),
}

#[derive(Clone, Deserialize, Debug)]
#[serde(tag = "model", content = "args")]
pub enum ActionLoad {
    PlaybackSession(PlaybackSessionSelected),
    SavedItem(String),
    MemoryGarden,
}

/// Action messages
///
/// Those messages are meant to be dispatched only by the users of the
/// `wandersphere-core` crate and handled by the `wandersphere-core` crate.
#[derive(Clone, Deserialize, Debug)]
#[serde(tag = "action", content = "args")]
pub enum Action {
    Playback(ActionPlayback),
    Saved(ActionSaved),
    Load(ActionLoad),
    Unload,
}

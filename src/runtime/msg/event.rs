use serde::Serialize;

use crate::{runtime::EnvError, types::playback::Generation};

/// Event messages
///
/// Those messages are meant to be dispatched by the `wandersphere-core` crate and
/// handled by the users of the `wandersphere-core` crate. They are fire-and-forget
/// notifications, e.g. the host shows a toast for `ItemSaved`.
#[derive(Clone, Serialize, Debug, PartialEq)]
#[serde(tag = "event", content = "args")]
pub enum Event {
    #[serde(rename_all = "camelCase")]
    PlaybackStarted {
        generation: Generation,
        /// Milliseconds between requesting playback and the element starting it
        load_time: i64,
    },
    /// The control surface was clicked, the caller should flip its desired state.
    PlaybackToggleRequested,
    ItemSaved {
        id: String,
    },
    ItemRemoved {
        id: String,
    },
    Error {
        error: EnvError,
        source: Box<Event>,
    },
}

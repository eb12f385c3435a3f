use serde::Deserialize;

/// Lifecycle signal reported by a media element.
#[derive(Clone, PartialEq, Eq, Deserialize, Debug)]
#[serde(tag = "type", content = "content")]
pub enum ResourceSignal {
    LoadStart,
    CanPlay,
    Playing,
    Paused,
    Error(String),
}

use derivative::Derivative;
use serde::Serialize;

/// What the mounted media element is doing.
///
/// Only lifecycle signals and start results move a session between statuses.
#[derive(Derivative, Clone, Copy, PartialEq, Eq, Serialize, Debug)]
#[derivative(Default)]
pub enum PlaybackStatus {
    #[derivative(Default)]
    Idle,
    Loading,
    Playing,
    Paused,
    Errored,
}

/// Host media operation issued by a playback session as an effect.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MediaCommand {
    Mount,
    Pause,
    Unmount,
}

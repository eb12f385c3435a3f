pub const SAVED_STORAGE_KEY: &str = "wandersphere_saved";
pub const DEFAULT_MEDIA_LOOP: bool = true;
pub const DEFAULT_MEDIA_VOLUME: f64 = 0.7;
pub const CONTROL_LABEL_OFF: &str = "Audio Off";
pub const CONTROL_LABEL_LOADING: &str = "Loading...";
pub const CONTROL_LABEL_ON: &str = "Audio On";
pub const CONTROL_LABEL_ERROR: &str = "Error";
pub const CONTROL_TITLE_PLAY: &str = "Play ambient sound";
pub const CONTROL_TITLE_MUTE: &str = "Mute ambient sound";

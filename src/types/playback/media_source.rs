use crate::constants::{DEFAULT_MEDIA_LOOP, DEFAULT_MEDIA_VOLUME};
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct MediaSource {
    /// Not validated, a bad url surfaces as a failed start.
    pub url: String,
    #[serde(default = "default_loop")]
    pub r#loop: bool,
    #[serde(
        default = "default_volume",
        deserialize_with = "deserialize_volume"
    )]
    pub volume: f64,
}

impl MediaSource {
    pub fn new(url: impl Into<String>) -> Self {
        MediaSource {
            url: url.into(),
            r#loop: DEFAULT_MEDIA_LOOP,
            volume: DEFAULT_MEDIA_VOLUME,
        }
    }
    pub fn with_loop(mut self, r#loop: bool) -> Self {
        self.r#loop = r#loop;
        self
    }
    pub fn with_volume(mut self, volume: f64) -> Self {
        self.volume = MediaSource::clamp_volume(volume);
        self
    }
    /// Keeps `volume` within `[0, 1]`, NaN falls back to the default volume.
    pub fn clamp_volume(volume: f64) -> f64 {
        if volume.is_nan() {
            DEFAULT_MEDIA_VOLUME
        } else {
            volume.clamp(0.0, 1.0)
        }
    }
}

fn default_loop() -> bool {
    DEFAULT_MEDIA_LOOP
}

fn default_volume() -> f64 {
    DEFAULT_MEDIA_VOLUME
}

fn deserialize_volume<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    f64::deserialize(deserializer).map(MediaSource::clamp_volume)
}

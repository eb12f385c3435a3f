use crate::types::playback::{Generation, MediaSource};
use chrono::{DateTime, Utc};
use futures::Future;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

pub use conditional_types::{ConditionalSend, EnvFuture, EnvFutureExt};

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum EnvError {
    /// Serde error when (de)serializing a storage slot
    Serde(String),
    StorageUnavailable,
    StorageReadError(String),
    StorageWriteError(String),
    /// No media element is mounted for the requested generation
    MediaUnavailable,
    /// The media element refused to begin playback (autoplay policy, decode or network failure)
    PlaybackStart(String),
    /// The media element reported an error while loading or playing
    Media(String),
    Other(String),
}

impl EnvError {
    pub fn message(&self) -> String {
        match &self {
            EnvError::Serde(message) => format!("Serialization error: {message}"),
            EnvError::StorageUnavailable => "Storage is not available".to_owned(),
            EnvError::StorageReadError(message) => format!("Storage read error: {message}"),
            EnvError::StorageWriteError(message) => format!("Storage write error: {message}"),
            EnvError::MediaUnavailable => "Media element is not mounted".to_owned(),
            EnvError::PlaybackStart(message) => format!("Failed to start playback: {message}"),
            EnvError::Media(message) => format!("Media error: {message}"),
            EnvError::Other(message) => format!("Other error: {message}"),
        }
    }
    pub fn code(&self) -> u32 {
        match &self {
            EnvError::Serde(_) => 1,
            EnvError::StorageUnavailable => 2,
            EnvError::StorageReadError(_) => 3,
            EnvError::StorageWriteError(_) => 4,
            EnvError::MediaUnavailable => 5,
            EnvError::PlaybackStart(_) => 6,
            EnvError::Media(_) => 7,
            EnvError::Other(_) => 1001,
        }
    }
}

impl fmt::Display for EnvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl Serialize for EnvError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("EnvError", 2)?;
        state.serialize_field("code", &self.code())?;
        state.serialize_field("message", &self.message())?;
        state.end()
    }
}

impl From<serde_json::Error> for EnvError {
    fn from(error: serde_json::Error) -> Self {
        EnvError::Serde(error.to_string())
    }
}

#[cfg(not(feature = "env-future-send"))]
/// Only for wasm or when `env-future-send` is not enabled
mod conditional_types {
    use futures::{future::LocalBoxFuture, Future, FutureExt};

    pub type EnvFuture<'a, T> = LocalBoxFuture<'a, T>;

    pub trait ConditionalSend {}

    impl<T> ConditionalSend for T {}

    pub trait EnvFutureExt: Future {
        fn boxed_env<'a>(self) -> EnvFuture<'a, Self::Output>
        where
            Self: Sized + 'a,
        {
            self.boxed_local()
        }
    }
}

#[cfg(feature = "env-future-send")]
/// Enabled with the feature `env-future-send` but it requires a non-wasm target!
mod conditional_types {
    use futures::{future::BoxFuture, Future, FutureExt};

    pub type EnvFuture<'a, T> = BoxFuture<'a, T>;

    pub trait ConditionalSend: Send {}

    impl<T> ConditionalSend for T where T: Send {}

    pub trait EnvFutureExt: Future {
        fn boxed_env<'a>(self) -> EnvFuture<'a, Self::Output>
        where
            Self: Sized + Send + 'a,
        {
            self.boxed()
        }
    }
}

impl<T: ?Sized> EnvFutureExt for T where T: Future {}

pub type TryEnvFuture<T> = EnvFuture<'static, Result<T, EnvError>>;

/// Capabilities the host provides to the core.
///
/// Storage is a key-value slot holding JSON values. Media is addressed by
/// [`Generation`]: the host keeps at most one live element per generation and
/// reports the element's lifecycle back with `ActionPlayback::Signal`.
pub trait Env {
    fn get_storage<T: for<'de> Deserialize<'de> + ConditionalSend + 'static>(
        key: &str,
    ) -> TryEnvFuture<Option<T>>;
    fn set_storage<T: Serialize>(key: &str, value: Option<&T>) -> TryEnvFuture<()>;
    fn exec_concurrent<F: Future<Output = ()> + ConditionalSend + 'static>(future: F);
    fn exec_sequential<F: Future<Output = ()> + ConditionalSend + 'static>(future: F);
    fn now() -> DateTime<Utc>;
    /// Creates the media element for `generation`.
    ///
    /// Lifecycle listeners must be attached before the source is bound, see [`MediaHost::mount`].
    /// Media effects of one update are spawned in order and must be polled in spawn order,
    /// so that a teardown reaches the host before the mount that replaces it.
    ///
    /// [`MediaHost::mount`]: crate::runtime::MediaHost::mount
    fn mount_media(generation: Generation, source: &MediaSource) -> TryEnvFuture<()>;
    /// Resolves once the element started playing, or with the reason it refused to.
    fn play_media(generation: Generation) -> TryEnvFuture<()>;
    fn pause_media(generation: Generation) -> TryEnvFuture<()>;
    /// Pauses the element, detaches its listeners and clears its source.
    /// Unmounting an unknown generation is a no-op.
    fn unmount_media(generation: Generation) -> TryEnvFuture<()>;
}

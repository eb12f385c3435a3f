use crate::runtime::{EnvError, EnvFutureExt, TryEnvFuture};
use crate::types::playback::{Generation, MediaSource};
use derivative::Derivative;
use futures::future;
use std::collections::HashMap;
use tracing::{debug, warn};

/// A single playable element on the host side, e.g. an audio element.
///
/// Once `attach_listeners` is called the element is expected to report its
/// lifecycle tagged with the given generation.
pub trait MediaElement {
    fn attach_listeners(&mut self, generation: Generation);
    fn bind_source(&mut self, source: &MediaSource);
    /// Rewinds to the start of the source and begins playback.
    ///
    /// Every start restarts the source, a paused element never resumes mid-track.
    /// The future resolves once playback started or was refused.
    fn begin_playback(&mut self) -> TryEnvFuture<()>;
    fn pause(&mut self);
    fn detach_listeners(&mut self);
    fn clear_source(&mut self);
}

/// Registry of live media elements, keyed by generation.
///
/// Host envs embed one of these to implement the media part of [`Env`](crate::runtime::Env).
#[derive(Derivative)]
#[derivative(Default(bound = ""))]
pub struct MediaHost<M> {
    elements: HashMap<Generation, M>,
}

impl<M: MediaElement> MediaHost<M> {
    pub fn mount(&mut self, generation: Generation, source: &MediaSource, mut element: M) {
        if self.elements.contains_key(&generation) {
            warn!(%generation, "media generation mounted twice, tearing down the previous element");
            self.unmount(generation);
        };
        // listeners go first so that no signal emitted while loading the source is lost
        element.attach_listeners(generation);
        element.bind_source(source);
        self.elements.insert(generation, element);
        debug!(%generation, url = %source.url, "media mounted");
    }
    pub fn play(&mut self, generation: Generation) -> TryEnvFuture<()> {
        match self.elements.get_mut(&generation) {
            Some(element) => element.begin_playback(),
            _ => future::err(EnvError::MediaUnavailable).boxed_env(),
        }
    }
    pub fn pause(&mut self, generation: Generation) {
        if let Some(element) = self.elements.get_mut(&generation) {
            element.pause();
        };
    }
    /// Returns `false` when nothing was mounted for `generation`.
    pub fn unmount(&mut self, generation: Generation) -> bool {
        match self.elements.remove(&generation) {
            Some(mut element) => {
                element.pause();
                element.detach_listeners();
                element.clear_source();
                debug!(%generation, "media unmounted");
                true
            }
            _ => false,
        }
    }
    pub fn is_live(&self, generation: Generation) -> bool {
        self.elements.contains_key(&generation)
    }
    pub fn live_count(&self) -> usize {
        self.elements.len()
    }
}

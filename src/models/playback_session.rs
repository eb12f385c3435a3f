use crate::models::common::eq_update;
use crate::runtime::msg::{Action, ActionLoad, ActionPlayback, Event, Internal, Msg};
use crate::runtime::{
    ConditionalSend, Effect, EffectFuture, Effects, Env, EnvError, EnvFutureExt, TryEnvFuture,
    Update,
};
use crate::types::playback::{
    ControlView, DisplayState, Generation, MediaCommand, MediaSource, PlaybackStatus,
    ResourceSignal,
};
use chrono::{DateTime, Utc};
use futures::{future, FutureExt};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Selected {
    pub source: MediaSource,
    /// A hidden session plays in the background without a control surface.
    #[serde(default = "default_visible")]
    pub visible: bool,
}

fn default_visible() -> bool {
    true
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct StartAttempt {
    pub generation: Generation,
    pub requested_at: DateTime<Utc>,
}

/// Owns at most one media element at a time and projects its status for the control surface.
///
/// The desired state belongs to the caller. The session only mirrors it through
/// `ActionPlayback::SetDesired` and asks for a flip with `Event::PlaybackToggleRequested`.
/// The mirror survives `Action::Unload`, so the next load starts right away when desired.
///
/// Host media is only ever touched through effects, see [`MediaCommand`].
#[derive(Default, Clone, PartialEq, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackSession {
    pub selected: Option<Selected>,
    /// Generation of the live media element, `None` when nothing is mounted.
    pub generation: Option<Generation>,
    pub status: PlaybackStatus,
    pub desired: bool,
    pub error: Option<EnvError>,
    pub display: DisplayState,
    pub control: Option<ControlView>,
    /// At most one start attempt is in flight, always for the live generation.
    #[serde(skip_serializing)]
    pub start_attempt: Option<StartAttempt>,
}

impl<E: Env + 'static> Update<E> for PlaybackSession {
    fn update(&mut self, msg: &Msg) -> Effects {
        match msg {
            Msg::Action(Action::Load(ActionLoad::PlaybackSession(selected))) => {
                let remount = match (&self.selected, self.generation) {
                    (Some(current), Some(_)) => current.source != selected.source,
                    _ => true,
                };
                let media_effects = if remount {
                    self.teardown::<E>().join(self.mount::<E>(&selected.source))
                } else {
                    Effects::none().unchanged()
                };
                let selected_effects = eq_update(&mut self.selected, Some(selected.to_owned()));
                media_effects
                    .join(selected_effects)
                    .join(self.display_update())
            }
            Msg::Action(Action::Unload) => {
                let teardown_effects = self.teardown::<E>();
                let next_session = PlaybackSession {
                    desired: self.desired,
                    ..PlaybackSession::default()
                };
                let session_effects = eq_update(self, next_session);
                teardown_effects.join(session_effects)
            }
            Msg::Action(Action::Playback(ActionPlayback::SetDesired(desired))) => {
                // re-enabling after a failed start is an explicit retry
                let retry = *desired
                    && self.desired
                    && self.status == PlaybackStatus::Errored
                    && self.start_attempt.is_none();
                if *desired == self.desired && !retry {
                    return Effects::none().unchanged();
                };
                self.desired = *desired;
                let playback_effects = match (self.generation, desired) {
                    (Some(generation), true) => {
                        if self.status == PlaybackStatus::Errored {
                            debug!(%generation, "retrying after a failed start");
                            self.status = PlaybackStatus::Loading;
                            self.error = None;
                        };
                        self.begin_playback::<E>(generation)
                    }
                    (Some(generation), false) => {
                        if self.status != PlaybackStatus::Errored {
                            self.status = PlaybackStatus::Paused;
                        };
                        Effects::one(pause_media::<E>(generation))
                    }
                    _ => Effects::none(),
                };
                Effects::none()
                    .join(playback_effects)
                    .join(self.display_update())
            }
            Msg::Action(Action::Playback(ActionPlayback::Signal { generation, signal })) => {
                if self.generation != Some(*generation) {
                    debug!(%generation, ?signal, "signal from a stale media generation discarded");
                    return Effects::none().unchanged();
                };
                let (next_status, next_error) = match (self.status, signal) {
                    (PlaybackStatus::Errored, _) => (PlaybackStatus::Errored, self.error.to_owned()),
                    (_, ResourceSignal::Error(message)) => (
                        PlaybackStatus::Errored,
                        Some(EnvError::Media(message.to_owned())),
                    ),
                    (_, ResourceSignal::LoadStart) => (PlaybackStatus::Loading, None),
                    (status, ResourceSignal::CanPlay) => (status, None),
                    (_, ResourceSignal::Playing) if !self.desired => (PlaybackStatus::Paused, None),
                    (_, ResourceSignal::Playing) => (PlaybackStatus::Playing, None),
                    (_, ResourceSignal::Paused) => (PlaybackStatus::Paused, None),
                };
                // started after the caller turned it off
                let pause_effects = match (self.status, signal) {
                    (status, ResourceSignal::Playing)
                        if !self.desired && status != PlaybackStatus::Errored =>
                    {
                        Effects::one(pause_media::<E>(*generation)).unchanged()
                    }
                    _ => Effects::none().unchanged(),
                };
                debug!(%generation, ?signal, status = ?next_status, "media signal");
                pause_effects
                    .join(eq_update(&mut self.status, next_status))
                    .join(eq_update(&mut self.error, next_error))
                    .join(self.display_update())
            }
            Msg::Action(Action::Playback(ActionPlayback::ControlClicked)) => {
                match &self.selected {
                    Some(Selected { visible: true, .. }) => {
                        Effects::msg(Msg::Event(Event::PlaybackToggleRequested)).unchanged()
                    }
                    _ => Effects::none().unchanged(),
                }
            }
            Msg::Internal(Internal::PlaybackStartResult(generation, result)) => {
                let start_attempt = match self.start_attempt {
                    Some(start_attempt) if start_attempt.generation == *generation => start_attempt,
                    _ => {
                        debug!(%generation, "stale start completion discarded");
                        return Effects::none().unchanged();
                    }
                };
                self.start_attempt = None;
                let load_time = (E::now() - start_attempt.requested_at).num_milliseconds();
                let result_effects = match (self.desired, result) {
                    (true, Ok(())) if self.status == PlaybackStatus::Errored => {
                        Effects::none().unchanged()
                    }
                    (true, Ok(())) => {
                        self.status = PlaybackStatus::Playing;
                        self.error = None;
                        Effects::msg(Msg::Event(Event::PlaybackStarted {
                            generation: *generation,
                            load_time,
                        }))
                    }
                    (true, Err(error)) => {
                        debug!(%generation, %error, "start attempt failed");
                        self.status = PlaybackStatus::Errored;
                        self.error = Some(error.to_owned());
                        Effects::msg(Msg::Event(Event::Error {
                            error: error.to_owned(),
                            source: Box::new(Event::PlaybackStarted {
                                generation: *generation,
                                load_time,
                            }),
                        }))
                    }
                    (false, Ok(())) => {
                        // the caller turned it off while the attempt was pending
                        Effects::one(pause_media::<E>(*generation)).unchanged()
                    }
                    (false, Err(error)) => {
                        debug!(%generation, %error, "start attempt aborted after disable");
                        Effects::none().unchanged()
                    }
                };
                result_effects.join(self.display_update())
            }
            Msg::Internal(Internal::MediaCommandResult(generation, command, result)) => {
                match result {
                    Err(error)
                        if *command == MediaCommand::Mount
                            && self.generation == Some(*generation)
                            && self.status != PlaybackStatus::Errored =>
                    {
                        warn!(%generation, %error, "media mount failed");
                        self.status = PlaybackStatus::Errored;
                        self.error = Some(error.to_owned());
                        Effects::none().join(self.display_update())
                    }
                    Err(error) => {
                        warn!(%generation, ?command, %error, "media command failed");
                        Effects::none().unchanged()
                    }
                    Ok(()) => Effects::none().unchanged(),
                }
            }
            _ => Effects::none().unchanged(),
        }
    }
}

impl PlaybackSession {
    pub fn is_mounted(&self) -> bool {
        self.generation.is_some()
    }
    fn mount<E: Env + 'static>(&mut self, source: &MediaSource) -> Effects {
        let generation = Generation::next();
        debug!(%generation, url = %source.url, "playback session mounted");
        self.generation = Some(generation);
        self.status = PlaybackStatus::Loading;
        self.error = None;
        let start_effects = if self.desired {
            self.begin_playback::<E>(generation)
        } else {
            Effects::none().unchanged()
        };
        Effects::one(mount_media::<E>(generation, source)).join(start_effects)
    }
    /// Safe to call on every exit path, the live generation is torn down exactly once.
    fn teardown<E: Env + 'static>(&mut self) -> Effects {
        match self.generation.take() {
            Some(generation) => {
                if self.start_attempt.take().is_some() {
                    debug!(%generation, "pending start attempt abandoned");
                };
                debug!(%generation, "playback session torn down");
                Effects::one(unmount_media::<E>(generation))
            }
            _ => Effects::none().unchanged(),
        }
    }
    fn begin_playback<E: Env + 'static>(&mut self, generation: Generation) -> Effects {
        if self.start_attempt.is_some() {
            debug!(%generation, "start attempt already in flight");
            return Effects::none().unchanged();
        };
        self.start_attempt = Some(StartAttempt {
            generation,
            requested_at: E::now(),
        });
        Effects::future(EffectFuture::Concurrent(
            future::lazy(move |_| E::play_media(generation))
                .flatten()
                .map(move |result| {
                    Msg::Internal(Internal::PlaybackStartResult(generation, result))
                })
                .boxed_env(),
        ))
        .unchanged()
    }
    fn display_update(&mut self) -> Effects {
        let display = DisplayState::project(
            self.status,
            self.desired,
            self.status == PlaybackStatus::Errored,
        );
        let control = self
            .selected
            .as_ref()
            .and_then(|selected| ControlView::render(display, selected.visible));
        eq_update(&mut self.display, display).join(eq_update(&mut self.control, control))
    }
}

fn mount_media<E: Env + 'static>(generation: Generation, source: &MediaSource) -> Effect {
    let source = source.to_owned();
    media_effect(generation, MediaCommand::Mount, move || {
        E::mount_media(generation, &source)
    })
}

fn pause_media<E: Env + 'static>(generation: Generation) -> Effect {
    media_effect(generation, MediaCommand::Pause, move || {
        E::pause_media(generation)
    })
}

fn unmount_media<E: Env + 'static>(generation: Generation) -> Effect {
    media_effect(generation, MediaCommand::Unmount, move || {
        E::unmount_media(generation)
    })
}

/// The host is reached only once the effect is polled.
fn media_effect<F>(generation: Generation, command: MediaCommand, run: F) -> Effect
where
    F: FnOnce() -> TryEnvFuture<()> + ConditionalSend + 'static,
{
    EffectFuture::Sequential(
        future::lazy(move |_| run())
            .flatten()
            .map(move |result| {
                Msg::Internal(Internal::MediaCommandResult(generation, command, result))
            })
            .boxed_env(),
    )
    .into()
}

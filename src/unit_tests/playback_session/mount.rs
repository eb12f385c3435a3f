use super::{
    dispatch, generation, load, load_source, mounted, mounted_session, new_runtime, session,
    set_desired, update, update_internal,
};
use crate::models::playback_session::PlaybackSession;
use crate::runtime::msg::{Action, Internal};
use crate::runtime::EnvError;
use crate::types::playback::{
    DisplayState, Generation, MediaCommand, MediaSource, PlaybackStatus,
};
use crate::unit_tests::{MediaCall, TestEnv};

#[test]
fn mount_starts_loading_with_listeners_before_source() {
    let _env_mutex = TestEnv::reset();
    let (runtime, _rx, generation) = mounted("track.mp3");
    let session = session(&runtime);
    assert!(session.is_mounted());
    assert_eq!(session.status, PlaybackStatus::Loading);
    assert_eq!(session.display, DisplayState::Off, "Desired is off by default");
    assert_eq!(
        session.control.as_ref().map(|control| control.label),
        Some("Audio Off")
    );
    assert_eq!(
        TestEnv::media_calls(),
        vec![
            MediaCall::AttachListeners(generation),
            MediaCall::BindSource(generation, "track.mp3".to_owned()),
        ],
        "Listeners are attached before the source is bound and playback is not requested"
    );
    assert_eq!(TestEnv::live_media(), 1);
}

#[test]
fn update_leaves_host_media_to_effects() {
    let _env_mutex = TestEnv::reset();
    let mut session = PlaybackSession::default();
    let effects = update(&mut session, load("track.mp3", true));
    assert_eq!(effects.len(), 1, "Mount is returned as an effect");
    assert!(session.is_mounted());

    let mut copy = session.to_owned();
    let effects = update(&mut copy, Action::Unload);
    assert_eq!(effects.len(), 1, "Unmount is returned as an effect");
    update(&mut session, set_desired(true));
    update(&mut session, Action::Unload);
    assert!(
        TestEnv::media_calls().is_empty(),
        "Updating a model never reaches the host"
    );
    assert_eq!(TestEnv::live_media(), 0);
}

#[test]
fn reload_with_same_source_keeps_generation() {
    let _env_mutex = TestEnv::reset();
    let (runtime, _rx, generation) = mounted("track.mp3");
    dispatch(&runtime, load("track.mp3", true));
    assert_eq!(super::generation(&runtime), generation);
    assert_eq!(TestEnv::live_media(), 1);
    assert_eq!(TestEnv::media_calls().len(), 2, "Nothing was remounted");
}

#[test]
fn visibility_change_does_not_remount() {
    let _env_mutex = TestEnv::reset();
    let (runtime, _rx, generation) = mounted("track.mp3");
    dispatch(&runtime, load("track.mp3", false));
    assert_eq!(super::generation(&runtime), generation);
    assert_eq!(session(&runtime).control, None, "Hidden session renders no control");
}

#[test]
fn source_change_tears_down_before_mounting() {
    let _env_mutex = TestEnv::reset();
    let (runtime, _rx, first) = mounted("a.mp3");
    dispatch(&runtime, load("b.mp3", true));
    let second = generation(&runtime);
    assert_ne!(first, second);
    assert_eq!(
        TestEnv::media_calls(),
        vec![
            MediaCall::AttachListeners(first),
            MediaCall::BindSource(first, "a.mp3".to_owned()),
            MediaCall::Pause(first),
            MediaCall::DetachListeners(first),
            MediaCall::ClearSource(first),
            MediaCall::AttachListeners(second),
            MediaCall::BindSource(second, "b.mp3".to_owned()),
        ]
    );
    assert_eq!(TestEnv::live_media(), 1, "Only one live element per session");
    assert_eq!(session(&runtime).status, PlaybackStatus::Loading);
}

#[test]
fn volume_change_remounts() {
    let _env_mutex = TestEnv::reset();
    let (runtime, _rx, first) = mounted("track.mp3");
    dispatch(
        &runtime,
        load_source(MediaSource::new("track.mp3").with_volume(0.3), true),
    );
    let second = generation(&runtime);
    assert_ne!(first, second);
    assert_eq!(TestEnv::live_media(), 1);
    assert_eq!(
        session(&runtime).selected.map(|selected| selected.source.volume),
        Some(0.3)
    );
}

#[test]
fn loop_change_remounts() {
    let _env_mutex = TestEnv::reset();
    let (runtime, _rx, first) = mounted("track.mp3");
    dispatch(
        &runtime,
        load_source(MediaSource::new("track.mp3").with_loop(false), true),
    );
    assert_ne!(generation(&runtime), first);
    assert_eq!(TestEnv::live_media(), 1);
    assert!(!TestEnv::media_calls().is_empty());
    assert_eq!(
        session(&runtime).selected.map(|selected| selected.source.r#loop),
        Some(false)
    );
}

#[test]
fn mount_with_desired_on_requests_playback() {
    let _env_mutex = TestEnv::reset();
    let (runtime, _rx) = new_runtime();
    dispatch(&runtime, set_desired(true));
    assert!(session(&runtime).desired);
    assert!(TestEnv::media_calls().is_empty(), "Nothing to play yet");
    dispatch(&runtime, load("live.mp3", false));
    let generation = generation(&runtime);
    assert_eq!(
        TestEnv::media_calls(),
        vec![
            MediaCall::AttachListeners(generation),
            MediaCall::BindSource(generation, "live.mp3".to_owned()),
            MediaCall::BeginPlayback(generation),
        ],
        "Playback begins once the element is mounted"
    );
    assert_eq!(session(&runtime).display, DisplayState::On);
}

#[test]
fn failed_mount_errors_session() {
    let _env_mutex = TestEnv::reset();
    let (mut session, generation) = mounted_session("track.mp3");
    let stale = update_internal(
        &mut session,
        Internal::MediaCommandResult(
            Generation(generation.0 + 1_000_000),
            MediaCommand::Mount,
            Err(EnvError::MediaUnavailable),
        ),
    );
    assert!(!stale.has_changed);
    let effects = update_internal(
        &mut session,
        Internal::MediaCommandResult(
            generation,
            MediaCommand::Mount,
            Err(EnvError::MediaUnavailable),
        ),
    );
    assert!(effects.has_changed);
    assert_eq!(session.status, PlaybackStatus::Errored);
    assert_eq!(session.error, Some(EnvError::MediaUnavailable));
    assert_eq!(session.display, DisplayState::Error);

    let effects = update_internal(
        &mut session,
        Internal::MediaCommandResult(
            generation,
            MediaCommand::Pause,
            Err(EnvError::MediaUnavailable),
        ),
    );
    assert!(!effects.has_changed, "Only a failed mount changes the session");
}

use super::{dispatch, generation, load, mounted, new_runtime, session, set_desired, signal};
use crate::models::playback_session::PlaybackSession;
use crate::runtime::msg::Action;
use crate::types::playback::{DisplayState, PlaybackStatus, ResourceSignal};
use crate::unit_tests::{MediaCall, TestEnv};

#[test]
fn unload_releases_media_once() {
    let _env_mutex = TestEnv::reset();
    let (runtime, _rx, generation) = mounted("track.mp3");

    dispatch(&runtime, Action::Unload);
    assert_eq!(session(&runtime), PlaybackSession::default());
    assert_eq!(TestEnv::live_media(), 0);
    let release = [
        MediaCall::Pause(generation),
        MediaCall::DetachListeners(generation),
        MediaCall::ClearSource(generation),
    ];
    assert!(TestEnv::media_calls().ends_with(&release));

    let calls = TestEnv::media_calls().len();
    dispatch(&runtime, Action::Unload);
    assert_eq!(TestEnv::media_calls().len(), calls, "Second unload is a no-op");
}

#[test]
fn unload_keeps_desired_state() {
    let _env_mutex = TestEnv::reset();
    let (runtime, _rx, first) = mounted("track.mp3");
    dispatch(&runtime, set_desired(true));
    dispatch(&runtime, Action::Unload);
    assert_eq!(
        session(&runtime),
        PlaybackSession {
            desired: true,
            ..PlaybackSession::default()
        }
    );

    dispatch(&runtime, load("track.mp3", true));
    let second = generation(&runtime);
    assert_ne!(first, second);
    assert_eq!(TestEnv::begin_playback_count(second), 1);
    assert_eq!(session(&runtime).display, DisplayState::On);
}

#[test]
fn signals_after_unload_are_ignored() {
    let _env_mutex = TestEnv::reset();
    let (runtime, _rx, generation) = mounted("track.mp3");
    dispatch(&runtime, Action::Unload);
    dispatch(&runtime, signal(generation, ResourceSignal::Playing));
    assert_eq!(session(&runtime).status, PlaybackStatus::Idle);
    assert_eq!(TestEnv::live_media(), 0);
}

#[test]
fn remount_after_unload_uses_fresh_generation() {
    let _env_mutex = TestEnv::reset();
    let (runtime, _rx, first) = mounted("track.mp3");
    dispatch(&runtime, Action::Unload);
    dispatch(&runtime, load("track.mp3", true));
    assert!(generation(&runtime) > first);
    assert_eq!(TestEnv::live_media(), 1);
    assert_eq!(session(&runtime).status, PlaybackStatus::Loading);
}

#[test]
fn unload_of_never_mounted_session_does_nothing() {
    let _env_mutex = TestEnv::reset();
    let (runtime, _rx) = new_runtime();
    dispatch(&runtime, Action::Unload);
    assert!(TestEnv::media_calls().is_empty());
    assert_eq!(session(&runtime), PlaybackSession::default());
}

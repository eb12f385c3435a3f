use crate::constants::{CONTROL_LABEL_ERROR, CONTROL_TITLE_MUTE, CONTROL_TITLE_PLAY};
use crate::types::playback::{ControlIcon, ControlView, DisplayState, PlaybackStatus};
use itertools::{iproduct, Itertools};

const STATUSES: [PlaybackStatus; 5] = [
    PlaybackStatus::Idle,
    PlaybackStatus::Loading,
    PlaybackStatus::Playing,
    PlaybackStatus::Paused,
    PlaybackStatus::Errored,
];

#[test]
fn project_respects_rule_priority() {
    for (status, desired, has_error) in iproduct!(STATUSES, [false, true], [false, true]) {
        let expected = if has_error {
            DisplayState::Error
        } else if !desired {
            DisplayState::Off
        } else if status == PlaybackStatus::Playing {
            DisplayState::On
        } else {
            DisplayState::Loading
        };
        assert_eq!(
            DisplayState::project(status, desired, has_error),
            expected,
            "project({status:?}, {desired}, {has_error})"
        );
    }
}

#[test]
fn project_off_wins_over_playing() {
    assert_eq!(
        DisplayState::project(PlaybackStatus::Playing, false, false),
        DisplayState::Off
    );
}

#[test]
fn project_error_ignores_desired() {
    assert_eq!(
        DisplayState::project(PlaybackStatus::Errored, false, true),
        DisplayState::Error
    );
    assert_eq!(
        DisplayState::project(PlaybackStatus::Errored, true, true),
        DisplayState::Error
    );
}

#[test]
fn project_pending_start_is_loading() {
    assert_eq!(
        DisplayState::project(PlaybackStatus::Paused, true, false),
        DisplayState::Loading
    );
    assert_eq!(
        DisplayState::project(PlaybackStatus::Idle, true, false),
        DisplayState::Loading
    );
}

#[test]
fn control_view_hidden_renders_nothing() {
    for display in [
        DisplayState::Off,
        DisplayState::Loading,
        DisplayState::On,
        DisplayState::Error,
    ] {
        assert_eq!(ControlView::render(display, false), None);
    }
}

#[test]
fn control_view_partitions_display_states() {
    let views = [
        DisplayState::Off,
        DisplayState::Loading,
        DisplayState::On,
        DisplayState::Error,
    ]
    .into_iter()
    .map(|display| ControlView::render(display, true).expect("visible control"))
    .collect::<Vec<_>>();
    let labels = views.iter().map(|view| view.label).collect::<Vec<_>>();
    assert_eq!(labels, vec!["Audio Off", "Loading...", "Audio On", "Error"]);
    assert_eq!(
        views.iter().map(|view| view.tone).unique().count(),
        4,
        "Every display state has its own tone"
    );
}

#[test]
fn control_view_error_is_distinct() {
    let error = ControlView::render(DisplayState::Error, true).unwrap();
    assert_eq!(error.label, CONTROL_LABEL_ERROR);
    assert_eq!(error.icon, ControlIcon::VolumeOff);
    assert_eq!(error.title, CONTROL_TITLE_PLAY);
    let on = ControlView::render(DisplayState::On, true).unwrap();
    assert_eq!(on.icon, ControlIcon::VolumeOn);
    assert_eq!(on.title, CONTROL_TITLE_MUTE);
}

use crate::constants::{
    CONTROL_LABEL_ERROR, CONTROL_LABEL_LOADING, CONTROL_LABEL_OFF, CONTROL_LABEL_ON,
    CONTROL_TITLE_MUTE, CONTROL_TITLE_PLAY,
};
use crate::types::playback::DisplayState;
use serde::Serialize;

#[derive(Clone, Copy, PartialEq, Eq, Serialize, Debug)]
pub enum ControlIcon {
    VolumeOn,
    VolumeOff,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Debug)]
pub enum ControlTone {
    Muted,
    Pending,
    Active,
    Failure,
}

/// What the control surface paints for a display state.
#[derive(Clone, PartialEq, Eq, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ControlView {
    pub display: DisplayState,
    pub icon: ControlIcon,
    pub tone: ControlTone,
    pub label: &'static str,
    pub title: &'static str,
}

impl ControlView {
    /// `None` when the control is hidden, e.g. for a background player.
    pub fn render(display: DisplayState, visible: bool) -> Option<Self> {
        if !visible {
            return None;
        }
        let (icon, tone, label, title) = match display {
            DisplayState::Off => (
                ControlIcon::VolumeOff,
                ControlTone::Muted,
                CONTROL_LABEL_OFF,
                CONTROL_TITLE_PLAY,
            ),
            DisplayState::Loading => (
                ControlIcon::VolumeOn,
                ControlTone::Pending,
                CONTROL_LABEL_LOADING,
                CONTROL_TITLE_MUTE,
            ),
            DisplayState::On => (
                ControlIcon::VolumeOn,
                ControlTone::Active,
                CONTROL_LABEL_ON,
                CONTROL_TITLE_MUTE,
            ),
            DisplayState::Error => (
                ControlIcon::VolumeOff,
                ControlTone::Failure,
                CONTROL_LABEL_ERROR,
                CONTROL_TITLE_PLAY,
            ),
        };
        Some(ControlView {
            display,
            icon,
            tone,
            label,
            title,
        })
    }
}

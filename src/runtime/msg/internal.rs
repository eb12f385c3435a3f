use crate::runtime::EnvError;
use crate::types::playback::{Generation, MediaCommand};
use crate::types::saved::SavedCollection;

//
// Those messages are meant to be dispatched and handled only inside wandersphere-core crate
//
#[derive(Debug)]
pub enum Internal {
    /// Result of the start attempt issued for the given generation.
    PlaybackStartResult(Generation, Result<(), EnvError>),
    /// Result of a mount, pause or unmount issued for the given generation.
    MediaCommandResult(Generation, MediaCommand, Result<(), EnvError>),
    /// Result for reading the membership of a saved item.
    SavedItemResult(String, Result<bool, EnvError>),
    /// Result for toggling a saved item, with the new membership.
    SavedToggleResult(String, Result<bool, EnvError>),
    /// Result for removing a saved item, `true` when something was removed.
    SavedRemoveResult(String, Result<bool, EnvError>),
    /// Result for reading the whole saved collection.
    SavedCollectionResult(Result<SavedCollection, EnvError>),
    /// Dispatched when the persisted saved collection was written.
    SavedCollectionChanged,
}

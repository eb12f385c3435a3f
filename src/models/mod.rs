pub mod common;

pub mod memory_garden;
pub mod playback_session;
pub mod saved_item;

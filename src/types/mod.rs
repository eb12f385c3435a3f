pub mod playback;
pub mod saved;

mod control_view;
pub use control_view::*;

mod display_state;
pub use display_state::*;

mod generation;
pub use generation::*;

mod media_command;
pub use media_command::*;

mod media_source;
pub use media_source::*;

mod playback_status;
pub use playback_status::*;

mod resource_signal;
pub use resource_signal::*;

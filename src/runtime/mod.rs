pub mod msg;

mod effects;
pub use effects::*;

mod env;
pub use env::*;

mod media;
pub use media::*;

mod runtime;
pub use runtime::*;

mod update;
pub use update::*;

mod eq_update;
pub use eq_update::*;

mod loadable;
pub use loadable::*;

mod saved_storage;
pub use saved_storage::*;

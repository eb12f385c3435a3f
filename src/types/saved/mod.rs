mod saved_collection;
pub use saved_collection::*;

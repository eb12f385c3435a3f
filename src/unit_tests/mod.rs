pub use env::*;

mod display_state;

//! Keyboard and mouse input
//!
//! `Key` names the keys and answers "is it down right now" straight from
//! macroquad. `InputState` is the snapshot the loop takes each tick.

mod fuzzy;
mod key;
mod state;

pub use fuzzy::{closest, edit_distance};
pub use key::Key;
pub use state::*;

//! Platform abstraction layer
//!
//! Translates whatever the host delivers (key names from a browser or a
//! windowing library) into the simulation's input snapshot.

pub mod keyboard;

pub use keyboard::{Binding, Key, KeyboardState};

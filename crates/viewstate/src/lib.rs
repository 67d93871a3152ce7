//! Viewing-session state machine: reacts to category choices, selector
//! changes and "generate", and drives the display surface.

pub mod controller;
pub mod controls;
pub mod home;

pub use controller::*;
pub use controls::*;
pub use home::*;

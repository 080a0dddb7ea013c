//! Ports (trait boundaries) for external dependencies.
//!
//! This module defines the interfaces between the game loop and the players
//! and observers plugged into it.

pub mod learner;
pub mod observer;

pub use learner::{Decision, Learner};
pub use observer::Observer;

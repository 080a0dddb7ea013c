//! Rote learning: memorize losing moves and avoid them next time
//!
//! This module provides the decision history, the mistake memory, the
//! selection and review rules, and an agent tying them together.

pub mod agent;
pub mod history;
pub mod knowledge;
pub mod policy;

pub use agent::RoteAgent;
pub use history::{DecisionNode, History, Walk};
pub use knowledge::{Knowledge, Mistake};
pub use policy::{Review, Selection, review, select_move};

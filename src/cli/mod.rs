//! CLI infrastructure for the Hexapawn toolkit
//!
//! This module provides the command-line interface for playing against the
//! rote learner and for training it in batch against scripted opponents.

pub mod commands;
pub mod config;
pub mod human;
pub mod output;

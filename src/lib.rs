//! Mealdesk admin client library.
//!
//! This module re-exports the core components for testing and extension.

pub mod action;
pub mod app;
pub mod backend;
pub mod config;
pub mod entities;
pub mod executor;
pub mod grid;
pub mod logging;
pub mod notify;
pub mod outcome;
pub mod pending;
pub mod protocol;
pub mod state;
pub mod ui;

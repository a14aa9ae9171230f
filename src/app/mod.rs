//! Application module structure for MealdeskApp
//!
//! This module organizes the main application into focused submodules:
//! - `core`: MealdeskApp struct and initialization
//! - `events`: Event processing from the network thread
//! - `update`: Main update loop
//! - `dialogs`: Dialog and overlay rendering orchestration

pub mod core;
pub mod dialogs;
pub mod events;
pub mod update;

pub use core::MealdeskApp;

//! Model module - Application state and data types
//!
//! This module contains all the data structures and state management for the
//! application. It is organized into submodules by responsibility:
//!
//! - `catalog`: The fixed set of songs and albums shown on the screen
//! - `player`: Now-playing state and the mini/full player presentation machine
//! - `types`: Browse UI types (tabs, cursors, popup flags)
//! - `app_model`: Main application model with state management methods

mod app_model;
mod catalog;
mod player;
mod types;

// Re-export all public types for convenient access
pub use catalog::{Album, Catalog, Song};

pub use player::{DRAG_DISMISS_THRESHOLD, PlayerMode, PlayerState};

pub use types::{BrowseTab, UiState};

pub use app_model::AppModel;

//! View module - UI rendering
//!
//! This module handles all UI rendering for the application using ratatui.
//! It is organized into submodules by component type:
//!
//! - `utils`: Shared utility functions (formatting, scrollable lists)
//! - `layout`: Artist header and tab bar
//! - `content`: Browse area (album grid, song list)
//! - `player`: Mini player bar and the expanded full-screen player
//! - `overlays`: Modal overlays (help popup)
//!
//! Rendering is read-only: every function takes state snapshots and never
//! touches the model.

mod content;
mod layout;
mod overlays;
mod player;
mod utils;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::model::{Catalog, PlayerMode, PlayerState, UiState};

pub use player::{MINI_PLAYER_HEIGHT, POINTS_PER_ROW, mini_player_area};

pub struct AppView;

impl AppView {
    pub fn render(frame: &mut Frame, player: &PlayerState, ui_state: &UiState, catalog: &Catalog) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),                  // Artist header
                Constraint::Length(3),                  // Tab bar
                Constraint::Min(0),                     // Browse area
                Constraint::Length(MINI_PLAYER_HEIGHT), // Mini player
            ])
            .split(frame.area());

        layout::render_header(frame, chunks[0], catalog);
        layout::render_tab_bar(frame, chunks[1], ui_state);
        content::render_browse(frame, chunks[2], ui_state, catalog, player);
        player::render_mini_player(frame, chunks[3], player);

        // The full player rides on top of the browse screen; while a drag
        // is in flight it is offset downward and the screen shows through.
        if player.mode() == PlayerMode::Expanded {
            player::render_expanded_player(frame, player);
        }

        if ui_state.show_help_popup {
            overlays::render_help_popup(frame);
        }
    }
}

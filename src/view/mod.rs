//! View module - UI rendering
//!
//! This module handles all UI rendering for the application using ratatui.
//! It is organized into submodules by component type:
//!
//! - `utils`: Shared utility functions (truncation, scrollable lists)
//! - `layout`: Top bar and status bar
//! - `content`: Grouped channel list and favorites panes
//! - `overlays`: Transient notice popup

mod utils;
mod layout;
mod content;
mod overlays;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::model::{Channel, GroupBucket, UiState};

pub struct AppView;

impl AppView {
    pub fn render(
        frame: &mut Frame,
        ui_state: &UiState,
        grouped: &[GroupBucket],
        favorites: &[Option<Channel>],
        selected_id: Option<&str>,
        now_playing: Option<&Channel>,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Search bar + playlist id
                Constraint::Min(0),    // Channel panes
                Constraint::Length(3), // Now playing
            ])
            .split(frame.area());

        layout::render_top_bar(frame, chunks[0], ui_state);

        let main_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(60), // Grouped channels
                Constraint::Percentage(40), // Favorites
            ])
            .split(chunks[1]);

        content::render_groups_pane(frame, main_chunks[0], ui_state, grouped, selected_id);
        content::render_favorites_pane(frame, main_chunks[1], ui_state, favorites, selected_id);

        layout::render_status_bar(frame, chunks[2], now_playing);

        // Favorites notice overlay (if one is showing)
        if ui_state.notice_message.is_some() {
            overlays::render_notice(frame, ui_state);
        }
    }
}

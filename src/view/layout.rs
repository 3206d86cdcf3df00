//! Layout rendering (top bar, status bar)

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

use crate::model::{ActiveSection, Channel, UiState};

pub fn render_top_bar(frame: &mut Frame, area: Rect, ui_state: &UiState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),     // Search input
            Constraint::Length(30), // Playlist id
        ])
        .split(area);

    let search_focused = ui_state.active_section == ActiveSection::Search;
    let search_style = if search_focused {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::White)
    };

    let search_text = if ui_state.search_term.name.is_empty() {
        "Type to filter channels... (Ctrl+F)"
    } else {
        &ui_state.search_term.name
    };

    let search = Paragraph::new(search_text).style(search_style).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Search ")
            .padding(Padding::horizontal(1))
            .border_style(if search_focused {
                Style::default().fg(Color::Green)
            } else {
                Style::default()
            }),
    );
    frame.render_widget(search, chunks[0]);

    let playlist_text = match &ui_state.playlist_id {
        Some(playlist_id) => playlist_id.as_str(),
        None => "loading...",
    };
    let playlist = Paragraph::new(playlist_text)
        .style(Style::default().fg(Color::Cyan))
        .block(Block::default().borders(Borders::ALL).title(" Playlist "));
    frame.render_widget(playlist, chunks[1]);
}

pub fn render_status_bar(frame: &mut Frame, area: Rect, now_playing: Option<&Channel>) {
    let text = match now_playing {
        Some(channel) => format!("▶ {}", channel.name),
        None => "Nothing playing - Enter plays, x toggles favorite, q quits".to_owned(),
    };

    let status = Paragraph::new(text)
        .style(Style::default().fg(Color::Cyan))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Now Playing ")
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(status, area);
}

//! Channel list rendering (grouped pane, favorites pane)

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, ListItem, Padding},
    Frame,
};

use crate::model::{ActiveSection, Channel, GroupBucket, UiState};

use super::utils::{render_scrollable_list, truncate_string};

fn pane_border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    }
}

fn channel_row_style(highlighted: bool, focused: bool, is_active: bool) -> Style {
    if highlighted && focused {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else if highlighted {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::White)
    }
}

pub fn render_groups_pane(
    frame: &mut Frame,
    area: Rect,
    ui_state: &UiState,
    grouped: &[GroupBucket],
    selected_id: Option<&str>,
) {
    let focused = ui_state.active_section == ActiveSection::Groups;
    let name_width = area.width.saturating_sub(6) as usize;

    let mut items: Vec<ListItem> = Vec::new();
    let mut visual_cursor = 0;
    let mut channel_index = 0;

    for bucket in grouped {
        items.push(
            ListItem::new(format!("▾ {} ({})", bucket.title, bucket.channels.len())).style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
        );
        for channel in &bucket.channels {
            let highlighted = channel_index == ui_state.group_cursor;
            if highlighted {
                visual_cursor = items.len();
            }
            let is_active = selected_id == Some(channel.id.as_str());
            let marker = if is_active { "▶" } else { " " };
            items.push(
                ListItem::new(format!(
                    "  {} {}",
                    marker,
                    truncate_string(&channel.name, name_width)
                ))
                .style(channel_row_style(highlighted, focused, is_active)),
            );
            channel_index += 1;
        }
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Channels ")
        .padding(Padding::horizontal(1))
        .border_style(pane_border_style(focused));

    render_scrollable_list(frame, area, items, visual_cursor, block);
}

pub fn render_favorites_pane(
    frame: &mut Frame,
    area: Rect,
    ui_state: &UiState,
    favorites: &[Option<Channel>],
    selected_id: Option<&str>,
) {
    let focused = ui_state.active_section == ActiveSection::Favorites;
    let name_width = area.width.saturating_sub(8) as usize;

    let items: Vec<ListItem> = favorites
        .iter()
        .enumerate()
        .map(|(index, slot)| {
            let highlighted = index == ui_state.favorite_cursor;
            match slot {
                Some(channel) => {
                    let is_active = selected_id == Some(channel.id.as_str());
                    let marker = if is_active { "▶" } else { " " };
                    ListItem::new(format!(
                        "{:>2} {} {}",
                        index + 1,
                        marker,
                        truncate_string(&channel.name, name_width)
                    ))
                    .style(channel_row_style(highlighted, focused, is_active))
                }
                // An id that did not resolve keeps its row.
                None => ListItem::new(format!("{:>2}   (unavailable)", index + 1)).style(
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::DIM),
                ),
            }
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Favorites (Shift+↑↓ to reorder) ")
        .padding(Padding::horizontal(1))
        .border_style(pane_border_style(focused));

    render_scrollable_list(frame, area, items, ui_state.favorite_cursor, block);
}

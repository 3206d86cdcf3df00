//! Key event handling

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::model::{ActiveSection, Channel, InputCapture};

use super::channels::DragMove;
use super::ChannelListController;

impl ChannelListController {
    pub async fn handle_key_event(&self, key: KeyEvent) -> Result<()> {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        // Document-scope shortcut: Ctrl+F focuses the search field no matter
        // which section has focus. A terminal-level binding for the same
        // chord, where one exists, cannot be suppressed from here.
        if key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('f') | KeyCode::Char('F'))
        {
            let model = self.model.lock().await;
            model.set_active_section(ActiveSection::Search).await;
            return Ok(());
        }

        let model = self.model.lock().await;
        let ui_state = model.get_ui_state().await;

        // Search input
        if ui_state.active_section == ActiveSection::Search {
            match key.code {
                KeyCode::Esc => {
                    model.clear_search().await;
                    return Ok(());
                }
                KeyCode::Backspace => {
                    model.backspace_search().await;
                    return Ok(());
                }
                KeyCode::Enter => {
                    model.set_active_section(ActiveSection::Groups).await;
                    return Ok(());
                }
                KeyCode::Tab => {
                    model.cycle_section_forward().await;
                    return Ok(());
                }
                KeyCode::Char(c) => {
                    // Q still quits even in search mode when Ctrl is pressed
                    if (c == 'q' || c == 'Q') && key.modifiers.contains(KeyModifiers::CONTROL) {
                        model.set_should_quit(true).await;
                        return Ok(());
                    }
                    model.append_to_search(c).await;
                    return Ok(());
                }
                _ => {}
            }
        }

        // Grouped channel list
        if ui_state.active_section == ActiveSection::Groups {
            match key.code {
                KeyCode::Up => {
                    model.group_cursor_up().await;
                    return Ok(());
                }
                KeyCode::Down => {
                    drop(model);
                    let row_count: usize = self
                        .filtered_grouped()
                        .await
                        .iter()
                        .map(|bucket| bucket.channels.len())
                        .sum();
                    self.model.lock().await.group_cursor_down(row_count).await;
                    return Ok(());
                }
                KeyCode::Enter => {
                    drop(model);
                    if let Some(channel) = self.highlighted_channel().await {
                        self.select_channel(channel).await;
                    }
                    return Ok(());
                }
                KeyCode::Char('x') | KeyCode::Char('X') => {
                    drop(model);
                    if let Some(channel) = self.highlighted_channel().await {
                        let mut capture = InputCapture::default();
                        self.toggle_favorite_channel(channel.clone(), &mut capture)
                            .await;
                        // Only an unconsumed event falls through to row
                        // activation; the toggle stops it.
                        if !capture.is_stopped() {
                            self.select_channel(channel).await;
                        }
                    }
                    return Ok(());
                }
                _ => {}
            }
        }

        // Favorites list
        if ui_state.active_section == ActiveSection::Favorites {
            match key.code {
                KeyCode::Up | KeyCode::Down
                    if key.modifiers.contains(KeyModifiers::SHIFT) =>
                {
                    let moving_up = key.code == KeyCode::Up;
                    let cursor = ui_state.favorite_cursor;
                    drop(model);
                    self.reorder_highlighted_favorite(cursor, moving_up).await;
                    return Ok(());
                }
                KeyCode::Up => {
                    model.favorite_cursor_up().await;
                    return Ok(());
                }
                KeyCode::Down => {
                    let row_count = model.favorites_view().await.len();
                    model.favorite_cursor_down(row_count).await;
                    return Ok(());
                }
                KeyCode::Enter => {
                    let cursor = ui_state.favorite_cursor;
                    let row = model.favorites_view().await.into_iter().nth(cursor);
                    drop(model);
                    if let Some(Some(channel)) = row {
                        self.select_channel(channel).await;
                    }
                    return Ok(());
                }
                KeyCode::Char('x') | KeyCode::Char('X') => {
                    let cursor = ui_state.favorite_cursor;
                    let row = model.favorites_view().await.into_iter().nth(cursor);
                    drop(model);
                    if let Some(Some(channel)) = row {
                        let mut capture = InputCapture::default();
                        self.toggle_favorite_channel(channel.clone(), &mut capture)
                            .await;
                        if !capture.is_stopped() {
                            self.select_channel(channel).await;
                        }
                    }
                    return Ok(());
                }
                _ => {}
            }
        }

        // Global keybindings
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                model.set_should_quit(true).await;
            }
            KeyCode::Tab => {
                if key.modifiers.contains(KeyModifiers::SHIFT) {
                    model.cycle_section_backward().await;
                } else {
                    model.cycle_section_forward().await;
                }
            }
            KeyCode::BackTab => {
                model.cycle_section_backward().await;
            }
            _ => {}
        }
        Ok(())
    }

    /// Turns a Shift+Up/Down press in the favorites pane into a drag move
    /// and commits it. Reordering needs every slot resolved; the commit
    /// would silently drop ids this view cannot see.
    async fn reorder_highlighted_favorite(&self, cursor: usize, moving_up: bool) {
        let view = self.model.lock().await.favorites_view().await;
        let favorites: Option<Vec<Channel>> = view.into_iter().collect();
        let Some(mut favorites) = favorites else {
            tracing::debug!("favorites reorder skipped, unresolved entries present");
            return;
        };
        if favorites.is_empty() {
            return;
        }

        let target = if moving_up {
            cursor.saturating_sub(1)
        } else {
            (cursor + 1).min(favorites.len() - 1)
        };
        if target == cursor {
            return;
        }

        self.drop_favorite(
            DragMove {
                previous_index: cursor,
                current_index: target,
            },
            &mut favorites,
        )
        .await;

        // Keep the cursor on the row that moved.
        let model = self.model.lock().await;
        if moving_up {
            model.favorite_cursor_up().await;
        } else {
            model.favorite_cursor_down(favorites.len()).await;
        }
    }
}

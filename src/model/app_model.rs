//! Main application model with state management

use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::Mutex;

use super::grouping::{group_channels, GroupBucket};
use super::types::{ActiveSection, Channel, SearchTerm, UiState};

/// How long the transient favorites notice stays visible
const NOTICE_DURATION: Duration = Duration::from_secs(2);

/// Local copy of the displayed channel collection and what derives from it
#[derive(Default)]
struct ChannelListState {
    channels: Vec<Channel>,
    grouped: Vec<GroupBucket>,
    selected: Option<Channel>,
}

/// Main application model containing all state
pub struct AppModel {
    channel_state: Arc<Mutex<ChannelListState>>,
    favorites_view: Arc<Mutex<Vec<Option<Channel>>>>,
    pub ui_state: Arc<Mutex<UiState>>,
    pub should_quit: Arc<Mutex<bool>>,
}

impl AppModel {
    pub fn new() -> Self {
        Self {
            channel_state: Arc::new(Mutex::new(ChannelListState::default())),
            favorites_view: Arc::new(Mutex::new(Vec::new())),
            ui_state: Arc::new(Mutex::new(UiState::default())),
            should_quit: Arc::new(Mutex::new(false)),
        }
    }

    // ========================================================================
    // Channel collection & grouped view
    // ========================================================================

    /// Replaces the channel collection and regroups it in the same call.
    ///
    /// The grouped view is never stale: it is recomputed here, synchronously,
    /// and nowhere else.
    pub async fn set_channels(&self, channels: Vec<Channel>) {
        let mut state = self.channel_state.lock().await;
        state.grouped = group_channels(&channels);
        state.channels = channels;

        let mut ui_state = self.ui_state.lock().await;
        ui_state.group_cursor = 0;
    }

    /// Snapshot of the current channel collection
    pub async fn channels_snapshot(&self) -> Vec<Channel> {
        self.channel_state.lock().await.channels.clone()
    }

    pub async fn grouped_channels(&self) -> Vec<GroupBucket> {
        self.channel_state.lock().await.grouped.clone()
    }

    // ========================================================================
    // Selection
    // ========================================================================

    /// Unconditional overwrite; there is no merge with a previous selection.
    pub async fn set_selected(&self, channel: Channel) {
        let mut state = self.channel_state.lock().await;
        state.selected = Some(channel);
    }

    pub async fn selected(&self) -> Option<Channel> {
        self.channel_state.lock().await.selected.clone()
    }

    // ========================================================================
    // Search term
    // ========================================================================

    pub async fn search_term(&self) -> SearchTerm {
        self.ui_state.lock().await.search_term.clone()
    }

    pub async fn append_to_search(&self, c: char) {
        let mut state = self.ui_state.lock().await;
        state.search_term.name.push(c);
        state.group_cursor = 0;
    }

    pub async fn backspace_search(&self) {
        let mut state = self.ui_state.lock().await;
        state.search_term.name.pop();
        state.group_cursor = 0;
    }

    pub async fn clear_search(&self) {
        let mut state = self.ui_state.lock().await;
        state.search_term.name.clear();
        state.group_cursor = 0;
    }

    // ========================================================================
    // Favorites view (resolved from the shared id sequence)
    // ========================================================================

    /// Replaces the resolved favorites view. One entry per favorite id;
    /// ids that did not resolve stay in place as `None`.
    pub async fn set_favorites_view(&self, favorites: Vec<Option<Channel>>) {
        let len = favorites.len();
        *self.favorites_view.lock().await = favorites;

        let mut ui_state = self.ui_state.lock().await;
        ui_state.favorite_cursor = ui_state.favorite_cursor.min(len.saturating_sub(1));
    }

    pub async fn favorites_view(&self) -> Vec<Option<Channel>> {
        self.favorites_view.lock().await.clone()
    }

    // ========================================================================
    // Playlist id, notice, sections & cursors
    // ========================================================================

    pub async fn set_playlist_id(&self, playlist_id: Option<String>) {
        let mut state = self.ui_state.lock().await;
        state.playlist_id = playlist_id;
    }

    /// Shows a transient notice; it disappears on its own, there is no
    /// user action attached.
    pub async fn set_notice(&self, message: String) {
        let mut state = self.ui_state.lock().await;
        state.notice_message = Some(message);
        state.notice_timestamp = Some(Instant::now());
    }

    pub async fn auto_clear_expired_notice(&self) {
        let mut state = self.ui_state.lock().await;
        if let Some(timestamp) = state.notice_timestamp {
            if timestamp.elapsed() >= NOTICE_DURATION {
                state.notice_message = None;
                state.notice_timestamp = None;
            }
        }
    }

    pub async fn get_ui_state(&self) -> UiState {
        self.ui_state.lock().await.clone()
    }

    pub async fn set_active_section(&self, section: ActiveSection) {
        let mut state = self.ui_state.lock().await;
        state.active_section = section;
    }

    pub async fn cycle_section_forward(&self) {
        let mut state = self.ui_state.lock().await;
        state.active_section = state.active_section.next();
    }

    pub async fn cycle_section_backward(&self) {
        let mut state = self.ui_state.lock().await;
        state.active_section = state.active_section.prev();
    }

    pub async fn group_cursor_up(&self) {
        let mut state = self.ui_state.lock().await;
        if state.group_cursor > 0 {
            state.group_cursor -= 1;
        }
    }

    pub async fn group_cursor_down(&self, row_count: usize) {
        let mut state = self.ui_state.lock().await;
        if state.group_cursor < row_count.saturating_sub(1) {
            state.group_cursor += 1;
        }
    }

    pub async fn favorite_cursor_up(&self) {
        let mut state = self.ui_state.lock().await;
        if state.favorite_cursor > 0 {
            state.favorite_cursor -= 1;
        }
    }

    pub async fn favorite_cursor_down(&self, row_count: usize) {
        let mut state = self.ui_state.lock().await;
        if state.favorite_cursor < row_count.saturating_sub(1) {
            state.favorite_cursor += 1;
        }
    }

    // ========================================================================
    // Lifecycle
    // ========================================================================

    pub async fn should_quit(&self) -> bool {
        *self.should_quit.lock().await
    }

    pub async fn set_should_quit(&self, quit: bool) {
        *self.should_quit.lock().await = quit;
    }
}

impl Default for AppModel {
    fn default() -> Self {
        Self::new()
    }
}

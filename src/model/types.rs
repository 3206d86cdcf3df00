//! Core type definitions for the application

use std::time::Instant;

use serde::Deserialize;

/// Group reference as it appears in the channel lineup
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct ChannelGroup {
    pub title: String,
}

/// A single channel from the playlist lineup.
///
/// Only `id` and `group` matter to the core logic; the remaining fields are
/// display data. Unknown fields in the lineup are ignored on deserialization.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct Channel {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub group: Option<ChannelGroup>,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub logo: String,
}

/// Search term for the channel filter; an empty name means no filtering
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchTerm {
    pub name: String,
}

/// Which section of the UI is currently active/focused
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActiveSection {
    Search,
    Groups,
    Favorites,
}

impl ActiveSection {
    pub fn next(self) -> Self {
        match self {
            ActiveSection::Search => ActiveSection::Groups,
            ActiveSection::Groups => ActiveSection::Favorites,
            ActiveSection::Favorites => ActiveSection::Search,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            ActiveSection::Search => ActiveSection::Favorites,
            ActiveSection::Groups => ActiveSection::Search,
            ActiveSection::Favorites => ActiveSection::Groups,
        }
    }
}

/// Propagation guard for a single input event.
///
/// Handlers that fully consume an event call `stop_propagation` so that the
/// remaining handlers for the same keypress (row activation, reorder) do not
/// fire as well.
#[derive(Debug, Default)]
pub struct InputCapture {
    stopped: bool,
}

impl InputCapture {
    pub fn stop_propagation(&mut self) {
        self.stopped = true;
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }
}

/// UI state for the application
#[derive(Clone)]
pub struct UiState {
    pub active_section: ActiveSection,
    pub search_term: SearchTerm,
    pub playlist_id: Option<String>,
    pub notice_message: Option<String>,
    pub notice_timestamp: Option<Instant>,
    pub group_cursor: usize,
    pub favorite_cursor: usize,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            active_section: ActiveSection::Groups,
            search_term: SearchTerm::default(),
            playlist_id: None,
            notice_message: None,
            notice_timestamp: None,
            group_cursor: 0,
            favorite_cursor: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_cycle_is_a_ring() {
        let mut section = ActiveSection::Search;
        for _ in 0..3 {
            section = section.next();
        }
        assert_eq!(section, ActiveSection::Search);
        assert_eq!(ActiveSection::Groups.prev(), ActiveSection::Search);
    }

    #[test]
    fn input_capture_starts_open() {
        let mut capture = InputCapture::default();
        assert!(!capture.is_stopped());
        capture.stop_propagation();
        assert!(capture.is_stopped());
    }

    #[test]
    fn channel_ignores_unknown_lineup_fields() {
        let raw = r#"{
            "id": "ch-1",
            "name": "News 24",
            "group": { "title": "News" },
            "url": "http://example.org/1.ts",
            "tvg": { "shift": 0 }
        }"#;
        let channel: Channel = serde_json::from_str(raw).unwrap();
        assert_eq!(channel.id, "ch-1");
        assert_eq!(channel.group.unwrap().title, "News");
        assert!(channel.logo.is_empty());
    }
}

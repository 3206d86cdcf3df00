//! Channel-list operations: assignment, selection, favorites, reorder

use crate::model::{Channel, InputCapture};
use crate::store::StoreCommand;

use super::ChannelListController;

/// A completed reorder gesture within the favorites list
#[derive(Clone, Copy, Debug)]
pub struct DragMove {
    pub previous_index: usize,
    pub current_index: usize,
}

/// Moves one element to a new position, keeping the relative order of all
/// other elements. Out-of-range indices are clamped; an empty list is left
/// alone.
pub(crate) fn move_item_in_array<T>(items: &mut Vec<T>, from: usize, to: usize) {
    if items.is_empty() {
        return;
    }
    let last = items.len() - 1;
    let from = from.min(last);
    let to = to.min(last);
    if from == to {
        return;
    }
    let item = items.remove(from);
    items.insert(to, item);
}

impl ChannelListController {
    /// Replaces the displayed channel collection; the grouped view is
    /// recomputed in the same call, never lazily.
    pub async fn set_channel_list(&self, channels: Vec<Channel>) {
        tracing::debug!(count = channels.len(), "channel list assigned");
        let model = self.model.lock().await;
        model.set_channels(channels).await;
    }

    pub async fn channel_list(&self) -> Vec<Channel> {
        self.model.lock().await.channels_snapshot().await
    }

    /// Sets the channel as selected and emits it to the store.
    ///
    /// The dispatch carries the full channel value, not just its id, so
    /// downstream consumers do not need a re-lookup.
    pub async fn select_channel(&self, channel: Channel) {
        tracing::debug!(channel_id = %channel.id, "channel selected");
        let model = self.model.lock().await;
        model.set_selected(channel.clone()).await;
        drop(model);
        self.store.dispatch(StoreCommand::SetActiveChannel(channel));
    }

    /// Requests a favorite flip for the given channel.
    ///
    /// Consumes the originating event so the same keypress cannot also
    /// activate the row, shows the transient notice, and leaves the
    /// add-vs-remove decision to the store reducer.
    pub async fn toggle_favorite_channel(&self, channel: Channel, event: &mut InputCapture) {
        event.stop_propagation();
        tracing::debug!(channel_id = %channel.id, "favorite toggle requested");
        let model = self.model.lock().await;
        model.set_notice(self.messages.favorites_updated().to_owned()).await;
        drop(model);
        self.store.dispatch(StoreCommand::UpdateFavorites(channel));
    }

    /// Stable identity for list rows; two channels with the same id are the
    /// same entity. Tolerates a missing channel.
    pub fn identity(_index: usize, channel: Option<&Channel>) -> Option<&str> {
        channel.map(|channel| channel.id.as_str())
    }

    /// Applies a completed reorder move to the given favorites list, then
    /// commits the entire resulting id sequence as a full replacement.
    ///
    /// There is no delta update: whatever changed favorites in the store
    /// between grab and drop is overwritten by this commit.
    pub async fn drop_favorite(&self, drag: DragMove, favorites: &mut Vec<Channel>) {
        move_item_in_array(favorites, drag.previous_index, drag.current_index);
        let channel_ids: Vec<String> = favorites
            .iter()
            .map(|channel| channel.id.clone())
            .collect();
        tracing::debug!(
            from = drag.previous_index,
            to = drag.current_index,
            "favorites reordered"
        );
        self.store.dispatch(StoreCommand::SetFavorites(channel_ids));
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use tokio::sync::Mutex;

    use super::*;
    use crate::messages::Messages;
    use crate::model::{AppModel, NameFilter};
    use crate::store::spawn_store;

    fn channel(id: &str) -> Channel {
        Channel {
            id: id.to_owned(),
            name: id.to_owned(),
            ..Channel::default()
        }
    }

    fn make_controller() -> ChannelListController {
        ChannelListController::new(
            Arc::new(Mutex::new(AppModel::new())),
            spawn_store(),
            Arc::new(NameFilter),
            Messages::from_env(),
        )
    }

    #[test]
    fn move_item_keeps_relative_order_of_others() {
        let mut items = vec!["x", "y", "z"];
        move_item_in_array(&mut items, 0, 2);
        assert_eq!(items, ["y", "z", "x"]);

        let mut items = vec!["a", "b", "c", "d"];
        move_item_in_array(&mut items, 2, 0);
        assert_eq!(items, ["c", "a", "b", "d"]);
    }

    #[test]
    fn move_item_clamps_out_of_range_indices() {
        let mut items = vec!["a", "b"];
        move_item_in_array(&mut items, 10, 0);
        assert_eq!(items, ["b", "a"]);

        let mut empty: Vec<&str> = Vec::new();
        move_item_in_array(&mut empty, 0, 1);
        assert!(empty.is_empty());
    }

    #[test]
    fn identity_returns_the_id_and_tolerates_missing() {
        let c = channel("ch-7");
        assert_eq!(ChannelListController::identity(3, Some(&c)), Some("ch-7"));
        assert_eq!(ChannelListController::identity(0, None), None);
    }

    #[tokio::test]
    async fn selection_overwrites_and_emits_the_full_channel() {
        let controller = make_controller();
        let mut active = controller.store.subscribe_active_channel();

        controller.select_channel(channel("a")).await;
        controller.select_channel(channel("b")).await;

        let selected = controller.model.lock().await.selected().await.unwrap();
        assert_eq!(selected.id, "b");

        let emitted = loop {
            active.changed().await.unwrap();
            let value = active.borrow_and_update().clone().unwrap();
            if value.id == "b" {
                break value;
            }
        };
        assert_eq!(emitted.name, "b");
    }

    #[tokio::test]
    async fn toggle_stops_propagation_and_shows_the_notice() {
        let controller = make_controller();
        let mut favorites = controller.store.subscribe_favorites();
        let mut capture = InputCapture::default();

        controller
            .toggle_favorite_channel(channel("a"), &mut capture)
            .await;

        assert!(capture.is_stopped());
        let model = controller.model.lock().await;
        assert!(model.get_ui_state().await.notice_message.is_some());
        drop(model);

        favorites.changed().await.unwrap();
        assert_eq!(*favorites.borrow_and_update(), vec!["a".to_owned()]);
    }

    #[tokio::test]
    async fn drop_commits_the_new_order_as_a_whole() {
        let controller = make_controller();
        let mut favorites_rx = controller.store.subscribe_favorites();
        let mut favorites = vec![channel("x"), channel("y"), channel("z")];

        controller
            .drop_favorite(
                DragMove {
                    previous_index: 0,
                    current_index: 2,
                },
                &mut favorites,
            )
            .await;

        let ids: Vec<&str> = favorites.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["y", "z", "x"]);

        favorites_rx.changed().await.unwrap();
        assert_eq!(
            *favorites_rx.borrow_and_update(),
            vec!["y".to_owned(), "z".to_owned(), "x".to_owned()]
        );
    }

    #[tokio::test]
    async fn filtered_grouped_respects_the_search_term() {
        let controller = make_controller();
        let mut news = channel("a");
        news.name = "News 24".to_owned();
        let mut sports = channel("b");
        sports.name = "Sports One".to_owned();
        controller.set_channel_list(vec![news, sports]).await;

        let model = controller.model.lock().await;
        for c in "news".chars() {
            model.append_to_search(c).await;
        }
        drop(model);

        let grouped = controller.filtered_grouped().await;
        assert_eq!(grouped.len(), 1);
        assert_eq!(grouped[0].channels.len(), 1);
        assert_eq!(grouped[0].channels[0].id, "a");
    }
}

//! Store subscriptions and teardown
//!
//! The controller holds two read-only streams from the store: the active
//! playlist id and the favorites id sequence. Both run independently of the
//! local channel-collection assignment; a favorites emission that arrives
//! before a pending reassignment resolves against the older snapshot. That
//! window is accepted behavior, not something the listeners try to order.

use crate::model::Channel;
use crate::store::StoreCommand;

use super::ChannelListController;

/// Gate for the playlist-id stream: drop only the leading prefix of empty
/// emissions. Once one real value has passed, everything passes, including
/// later empties.
fn should_forward(seen_value: &mut bool, playlist_id: &str) -> bool {
    if *seen_value {
        return true;
    }
    if playlist_id.is_empty() {
        return false;
    }
    *seen_value = true;
    true
}

/// Resolves each favorite id against the given channel snapshot. Ids that do
/// not resolve keep their position as `None`; the output always has one entry
/// per id.
fn resolve_favorites(ids: &[String], snapshot: &[Channel]) -> Vec<Option<Channel>> {
    ids.iter()
        .map(|id| snapshot.iter().find(|channel| &channel.id == id).cloned())
        .collect()
}

impl ChannelListController {
    /// Starts the two store subscriptions. They live until [`Self::close`].
    pub async fn start_store_listeners(&self) {
        let mut subscriptions = self.subscriptions().lock().await;
        if !subscriptions.is_empty() {
            return;
        }

        // Active playlist id: wait for the first real value, then pass
        // everything through.
        let mut playlist_rx = self.store.subscribe_active_playlist();
        let model = self.model.clone();
        subscriptions.push(tokio::spawn(async move {
            let mut seen_value = false;
            loop {
                let playlist_id = playlist_rx.borrow_and_update().clone();
                if should_forward(&mut seen_value, &playlist_id) {
                    let model = model.lock().await;
                    let value = if playlist_id.is_empty() {
                        None
                    } else {
                        Some(playlist_id)
                    };
                    model.set_playlist_id(value).await;
                }
                if playlist_rx.changed().await.is_err() {
                    break;
                }
            }
        }));

        // Favorites: each emission resolves against the channel snapshot of
        // that moment.
        let mut favorites_rx = self.store.subscribe_favorites();
        let model = self.model.clone();
        subscriptions.push(tokio::spawn(async move {
            loop {
                let ids = favorites_rx.borrow_and_update().clone();
                let model_guard = model.lock().await;
                let snapshot = model_guard.channels_snapshot().await;
                let resolved = resolve_favorites(&ids, &snapshot);
                model_guard.set_favorites_view(resolved).await;
                drop(model_guard);
                if favorites_rx.changed().await.is_err() {
                    break;
                }
            }
        }));

        tracing::debug!("store listeners started");
    }

    /// Tears the view down: releases both subscriptions and clears the
    /// shared channel collection.
    ///
    /// Safe to call from any exit path; the clearing dispatch happens exactly
    /// once. Commands already in flight are not affected.
    pub async fn close(&self) {
        let mut closed = self.closed_flag().lock().await;
        if *closed {
            return;
        }
        *closed = true;

        let mut subscriptions = self.subscriptions().lock().await;
        for handle in subscriptions.drain(..) {
            handle.abort();
        }

        self.store.dispatch(StoreCommand::SetChannels(Vec::new()));
        tracing::debug!("channel list closed, shared channel collection cleared");
    }
}

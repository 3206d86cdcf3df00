//! Shared application store - command dispatch in, watch streams out
//!
//! The store is the single owner of state shared between views: the channel
//! collection, the active channel, the active playlist id and the favorites
//! id sequence. Views never mutate this state directly; they dispatch tagged
//! commands and read back through watch subscriptions.

use tokio::sync::{mpsc, watch};

use crate::model::Channel;

/// A tagged request for a state transition owned by the store
#[derive(Clone, Debug)]
pub enum StoreCommand {
    /// Sets the active channel, carrying the full channel value so consumers
    /// do not need a re-lookup for display fields.
    SetActiveChannel(Channel),
    /// Requests a favorite flip for the channel; whether this adds or
    /// removes is decided here, by the reducer, not by the caller.
    UpdateFavorites(Channel),
    /// Replaces the entire favorites id sequence.
    SetFavorites(Vec<String>),
    /// Replaces the shared channel collection.
    SetChannels(Vec<Channel>),
    /// Sets the active playlist id.
    SetActivePlaylist(String),
}

/// State owned by the reducer task
#[derive(Debug, Default)]
struct StoreState {
    channels: Vec<Channel>,
    active_channel: Option<Channel>,
    favorites: Vec<String>,
    active_playlist_id: String,
}

/// Clonable handle for dispatching commands and subscribing to reads
#[derive(Clone)]
pub struct StoreHandle {
    tx: mpsc::UnboundedSender<StoreCommand>,
    playlist_rx: watch::Receiver<String>,
    favorites_rx: watch::Receiver<Vec<String>>,
    channels_rx: watch::Receiver<Vec<Channel>>,
    active_channel_rx: watch::Receiver<Option<Channel>>,
}

impl StoreHandle {
    /// Fire-and-forget dispatch; the caller never awaits confirmation.
    pub fn dispatch(&self, command: StoreCommand) {
        if self.tx.send(command).is_err() {
            tracing::warn!("store task is gone, command dropped");
        }
    }

    pub fn subscribe_active_playlist(&self) -> watch::Receiver<String> {
        self.playlist_rx.clone()
    }

    pub fn subscribe_favorites(&self) -> watch::Receiver<Vec<String>> {
        self.favorites_rx.clone()
    }

    pub fn subscribe_channels(&self) -> watch::Receiver<Vec<Channel>> {
        self.channels_rx.clone()
    }

    pub fn subscribe_active_channel(&self) -> watch::Receiver<Option<Channel>> {
        self.active_channel_rx.clone()
    }
}

/// Spawns the store reducer task and returns a handle to it.
///
/// The task runs until every handle has been dropped.
pub fn spawn_store() -> StoreHandle {
    let (tx, mut rx) = mpsc::unbounded_channel::<StoreCommand>();
    let (playlist_tx, playlist_rx) = watch::channel(String::new());
    let (favorites_tx, favorites_rx) = watch::channel(Vec::new());
    let (channels_tx, channels_rx) = watch::channel(Vec::new());
    let (active_channel_tx, active_channel_rx) = watch::channel(None);

    tokio::spawn(async move {
        let mut state = StoreState::default();
        while let Some(command) = rx.recv().await {
            match command {
                StoreCommand::SetActiveChannel(channel) => {
                    tracing::debug!(channel_id = %channel.id, "store: active channel set");
                    state.active_channel = Some(channel);
                    active_channel_tx.send_replace(state.active_channel.clone());
                }
                StoreCommand::UpdateFavorites(channel) => {
                    match state.favorites.iter().position(|id| *id == channel.id) {
                        Some(index) => {
                            state.favorites.remove(index);
                            tracing::debug!(channel_id = %channel.id, "store: favorite removed");
                        }
                        None => {
                            state.favorites.push(channel.id.clone());
                            tracing::debug!(channel_id = %channel.id, "store: favorite added");
                        }
                    }
                    favorites_tx.send_replace(state.favorites.clone());
                }
                StoreCommand::SetFavorites(ids) => {
                    tracing::debug!(count = ids.len(), "store: favorites replaced");
                    state.favorites = ids;
                    favorites_tx.send_replace(state.favorites.clone());
                }
                StoreCommand::SetChannels(channels) => {
                    tracing::debug!(count = channels.len(), "store: channel collection replaced");
                    state.channels = channels;
                    channels_tx.send_replace(state.channels.clone());
                }
                StoreCommand::SetActivePlaylist(playlist_id) => {
                    tracing::debug!(playlist_id = %playlist_id, "store: active playlist set");
                    state.active_playlist_id = playlist_id;
                    playlist_tx.send_replace(state.active_playlist_id.clone());
                }
            }
        }
        tracing::debug!("store task finished");
    });

    StoreHandle {
        tx,
        playlist_rx,
        favorites_rx,
        channels_rx,
        active_channel_rx,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn channel(id: &str) -> Channel {
        Channel {
            id: id.to_owned(),
            name: id.to_owned(),
            ..Channel::default()
        }
    }

    #[tokio::test]
    async fn toggle_adds_then_removes() {
        let store = spawn_store();
        let mut favorites = store.subscribe_favorites();

        store.dispatch(StoreCommand::UpdateFavorites(channel("a")));
        favorites.changed().await.unwrap();
        assert_eq!(*favorites.borrow_and_update(), vec!["a".to_owned()]);

        store.dispatch(StoreCommand::UpdateFavorites(channel("a")));
        favorites.changed().await.unwrap();
        assert!(favorites.borrow_and_update().is_empty());
    }

    #[tokio::test]
    async fn toggle_appends_at_the_end() {
        let store = spawn_store();
        let mut favorites = store.subscribe_favorites();

        store.dispatch(StoreCommand::UpdateFavorites(channel("a")));
        store.dispatch(StoreCommand::UpdateFavorites(channel("b")));

        let ids = loop {
            favorites.changed().await.unwrap();
            let ids = favorites.borrow_and_update().clone();
            if ids.len() == 2 {
                break ids;
            }
        };
        assert_eq!(ids, vec!["a".to_owned(), "b".to_owned()]);
    }

    #[tokio::test]
    async fn set_favorites_is_a_full_replacement() {
        let store = spawn_store();
        let mut favorites = store.subscribe_favorites();

        store.dispatch(StoreCommand::UpdateFavorites(channel("a")));
        favorites.changed().await.unwrap();
        favorites.borrow_and_update();

        store.dispatch(StoreCommand::SetFavorites(vec![
            "y".to_owned(),
            "z".to_owned(),
            "x".to_owned(),
        ]));
        favorites.changed().await.unwrap();
        assert_eq!(
            *favorites.borrow_and_update(),
            vec!["y".to_owned(), "z".to_owned(), "x".to_owned()]
        );
    }

    #[tokio::test]
    async fn active_channel_carries_the_full_value() {
        let store = spawn_store();
        let mut active = store.subscribe_active_channel();

        let mut selected = channel("a");
        selected.name = "News 24".to_owned();
        store.dispatch(StoreCommand::SetActiveChannel(selected));

        active.changed().await.unwrap();
        let value = active.borrow_and_update().clone().unwrap();
        assert_eq!(value.id, "a");
        assert_eq!(value.name, "News 24");
    }

    #[tokio::test]
    async fn playlist_id_emits_on_set() {
        let store = spawn_store();
        let mut playlist = store.subscribe_active_playlist();

        store.dispatch(StoreCommand::SetActivePlaylist("pl-1".to_owned()));

        playlist.changed().await.unwrap();
        assert_eq!(*playlist.borrow_and_update(), "pl-1");
    }
}

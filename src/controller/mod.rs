//! Controller module - Channel-list logic and event handling
//!
//! This module contains the channel-list view controller: it owns the
//! displayed channel collection, derives the grouped/filtered views, and
//! turns user interaction into store commands. It is organized into
//! submodules by responsibility:
//!
//! - `channels`: Assignment, selection, favorite toggle, reorder
//! - `input`: Key event handling
//! - `store_events`: Store subscriptions and teardown

mod channels;
mod input;
mod store_events;

pub use channels::DragMove;

use std::sync::Arc;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;

use crate::messages::Messages;
use crate::model::{AppModel, Channel, ChannelFilter, GroupBucket};
use crate::store::StoreHandle;

#[derive(Clone)]
pub struct ChannelListController {
    pub(crate) model: Arc<Mutex<AppModel>>,
    pub(crate) store: StoreHandle,
    pub(crate) filter: Arc<dyn ChannelFilter + Send + Sync>,
    pub(crate) messages: Messages,
    subscriptions: Arc<Mutex<Vec<JoinHandle<()>>>>,
    closed: Arc<Mutex<bool>>,
}

impl ChannelListController {
    pub fn new(
        model: Arc<Mutex<AppModel>>,
        store: StoreHandle,
        filter: Arc<dyn ChannelFilter + Send + Sync>,
        messages: Messages,
    ) -> Self {
        Self {
            model,
            store,
            filter,
            messages,
            subscriptions: Arc::new(Mutex::new(Vec::new())),
            closed: Arc::new(Mutex::new(false)),
        }
    }

    pub(crate) fn subscriptions(&self) -> &Arc<Mutex<Vec<JoinHandle<()>>>> {
        &self.subscriptions
    }

    pub(crate) fn closed_flag(&self) -> &Arc<Mutex<bool>> {
        &self.closed
    }

    /// Grouped view narrowed by the live search term.
    ///
    /// Buckets whose channels were all filtered away are dropped; surviving
    /// buckets and channels keep their order.
    pub async fn filtered_grouped(&self) -> Vec<GroupBucket> {
        let model = self.model.lock().await;
        let grouped = model.grouped_channels().await;
        let term = model.search_term().await;
        drop(model);

        grouped
            .into_iter()
            .filter_map(|bucket| {
                let view: Vec<&Channel> = bucket.channels.iter().collect();
                let survivors = self.filter.filter(&term, &view);
                if survivors.is_empty() {
                    None
                } else {
                    let channels = survivors.into_iter().cloned().collect();
                    Some(GroupBucket {
                        title: bucket.title.clone(),
                        channels,
                    })
                }
            })
            .collect()
    }

    /// Channel under the cursor in the filtered grouped view
    pub(crate) async fn highlighted_channel(&self) -> Option<Channel> {
        let cursor = {
            let model = self.model.lock().await;
            model.get_ui_state().await.group_cursor
        };
        self.filtered_grouped()
            .await
            .into_iter()
            .flat_map(|bucket| bucket.channels)
            .nth(cursor)
    }
}

//! Model module - Application state and data types
//!
//! This module contains all the data structures and state management for the
//! application. It is organized into submodules by responsibility:
//!
//! - `types`: Core type definitions (channel, search term, UI state)
//! - `grouping`: Stable partition of the channel list into group buckets
//! - `filter`: Search filter seam and its default implementation
//! - `app_model`: Main application model with state management methods

mod types;
mod grouping;
mod filter;
mod app_model;

// Re-export all public types for convenient access
pub use types::{
    ActiveSection, Channel, ChannelGroup, InputCapture, SearchTerm, UiState,
};

pub use grouping::{group_channels, GroupBucket, UNGROUPED_TITLE};

pub use filter::{ChannelFilter, NameFilter};

pub use app_model::AppModel;

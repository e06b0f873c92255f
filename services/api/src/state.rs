//! Application state shared across handlers

use chrono::FixedOffset;
use std::sync::Arc;

use crate::repositories::UserStore;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub user_store: Arc<dyn UserStore>,
    /// Display timezone of creation timestamps
    pub utc_offset: FixedOffset,
}

impl AppState {
    pub fn new(user_store: Arc<dyn UserStore>, utc_offset: FixedOffset) -> Self {
        Self {
            user_store,
            utc_offset,
        }
    }
}

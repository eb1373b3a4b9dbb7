//! Shared state handed to every handler

use crate::domain::ports::ActivityStore;
use chrono::{DateTime, Utc};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    /// Activity directory backing all routes
    pub store: Arc<dyn ActivityStore>,

    /// Service version
    pub version: String,

    /// Service start time
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(store: Arc<dyn ActivityStore>) -> Self {
        Self {
            store,
            version: env!("CARGO_PKG_VERSION").to_string(),
            started_at: Utc::now(),
        }
    }

    /// Uptime as a short human-readable string
    pub fn uptime(&self) -> String {
        let secs = (Utc::now() - self.started_at).num_seconds();

        if secs < 60 {
            format!("{}s", secs)
        } else if secs < 3600 {
            format!("{}m {}s", secs / 60, secs % 60)
        } else if secs < 86400 {
            format!("{}h {}m", secs / 3600, (secs % 3600) / 60)
        } else {
            format!("{}d {}h", secs / 86400, (secs % 86400) / 3600)
        }
    }
}

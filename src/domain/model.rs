use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule: Option<String>,
    pub capacity: usize,
    pub participants: Vec<String>,
}

impl Activity {
    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    pub fn is_full(&self) -> bool {
        self.participants.len() >= self.capacity
    }
}

/// One `[[activities]]` entry of the seed list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivitySeed {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub schedule: Option<String>,
    #[serde(alias = "max_participants")]
    pub capacity: usize,
    #[serde(default)]
    pub participants: Vec<String>,
}

impl ActivitySeed {
    pub fn into_entry(self) -> (String, Activity) {
        (
            self.name,
            Activity {
                description: self.description,
                schedule: self.schedule,
                capacity: self.capacity,
                participants: self.participants,
            },
        )
    }
}

/// Snapshot returned by `GET /activities`, keyed by activity name.
pub type ActivityListing = BTreeMap<String, Activity>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

use crate::core::{Activity, ActivityListing, ActivitySeed, ActivityStore};
use crate::utils::error::{Result, SignupError};
use crate::utils::validation::validate_unique;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory activity directory.
///
/// The set of activity names is fixed at construction, so the map itself is
/// never mutated; each record carries its own lock. Signup and unregister hold
/// the record's write lock across the membership check and the mutation, which
/// keeps an email from being added twice under concurrent requests.
#[derive(Debug, Clone)]
pub struct ActivityDirectory {
    activities: Arc<BTreeMap<String, RwLock<Activity>>>,
    enforce_capacity: bool,
}

impl ActivityDirectory {
    pub fn from_seed(seed: Vec<ActivitySeed>, enforce_capacity: bool) -> Result<Self> {
        validate_unique("activities.name", seed.iter().map(|s| s.name.as_str()))?;

        let mut activities = BTreeMap::new();
        for entry in seed {
            validate_unique(
                &format!("activities.{}.participants", entry.name),
                entry.participants.iter().map(String::as_str),
            )?;
            let (name, activity) = entry.into_entry();
            activities.insert(name, RwLock::new(activity));
        }

        tracing::debug!(
            activities = activities.len(),
            enforce_capacity,
            "Activity directory created"
        );

        Ok(Self {
            activities: Arc::new(activities),
            enforce_capacity,
        })
    }

    pub fn enforces_capacity(&self) -> bool {
        self.enforce_capacity
    }

    fn record(&self, name: &str) -> Result<&RwLock<Activity>> {
        self.activities
            .get(name)
            .ok_or_else(|| SignupError::ActivityNotFound {
                name: name.to_string(),
            })
    }
}

#[async_trait]
impl ActivityStore for ActivityDirectory {
    async fn list(&self) -> ActivityListing {
        let mut listing = BTreeMap::new();
        for (name, record) in self.activities.iter() {
            listing.insert(name.clone(), record.read().await.clone());
        }
        listing
    }

    async fn signup(&self, activity: &str, email: &str) -> Result<String> {
        let mut record = self.record(activity)?.write().await;

        if record.has_participant(email) {
            return Err(SignupError::AlreadyRegistered {
                activity: activity.to_string(),
                email: email.to_string(),
            });
        }

        if self.enforce_capacity && record.is_full() {
            return Err(SignupError::ActivityFull {
                activity: activity.to_string(),
                capacity: record.capacity,
            });
        }

        record.participants.push(email.to_string());
        Ok(format!("Signed up {} for {}", email, activity))
    }

    async fn unregister(&self, activity: &str, email: &str) -> Result<String> {
        let mut record = self.record(activity)?.write().await;

        let position = record
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or_else(|| SignupError::NotRegistered {
                activity: activity.to_string(),
                email: email.to_string(),
            })?;

        record.participants.remove(position);
        Ok(format!("Unregistered {} from {}", email, activity))
    }

    fn len(&self) -> usize {
        self.activities.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::seed::default_activities;

    fn chess_only(capacity: usize, participants: &[&str]) -> Vec<ActivitySeed> {
        vec![ActivitySeed {
            name: "Chess Club".to_string(),
            description: "Learn strategies and compete in chess tournaments".to_string(),
            schedule: None,
            capacity,
            participants: participants.iter().map(|p| p.to_string()).collect(),
        }]
    }

    #[tokio::test]
    async fn test_list_contains_every_seeded_activity() {
        let directory = ActivityDirectory::from_seed(default_activities(), false).unwrap();
        let listing = directory.list().await;

        assert_eq!(listing.len(), 3);
        assert_eq!(directory.len(), 3);
        for name in ["Chess Club", "Programming Class", "Gym Class"] {
            assert!(listing.contains_key(name), "missing {}", name);
        }
    }

    #[tokio::test]
    async fn test_signup_appends_participant() {
        let directory = ActivityDirectory::from_seed(default_activities(), false).unwrap();

        let message = directory
            .signup("Chess Club", "testuser@example.com")
            .await
            .unwrap();
        assert_eq!(message, "Signed up testuser@example.com for Chess Club");

        let listing = directory.list().await;
        let chess = &listing["Chess Club"];
        assert_eq!(
            chess.participants.last().map(String::as_str),
            Some("testuser@example.com")
        );
    }

    #[tokio::test]
    async fn test_duplicate_signup_is_rejected() {
        let directory = ActivityDirectory::from_seed(default_activities(), false).unwrap();
        directory
            .signup("Chess Club", "testuser@example.com")
            .await
            .unwrap();

        let err = directory
            .signup("Chess Club", "testuser@example.com")
            .await
            .unwrap_err();
        assert!(matches!(err, SignupError::AlreadyRegistered { .. }));

        let listing = directory.list().await;
        let count = listing["Chess Club"]
            .participants
            .iter()
            .filter(|p| *p == "testuser@example.com")
            .count();
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn test_unknown_activity() {
        let directory = ActivityDirectory::from_seed(default_activities(), false).unwrap();
        let before = directory.list().await;

        let err = directory.signup("Knitting", "a@example.com").await.unwrap_err();
        assert!(matches!(err, SignupError::ActivityNotFound { ref name } if name == "Knitting"));

        let err = directory
            .unregister("Knitting", "a@example.com")
            .await
            .unwrap_err();
        assert!(matches!(err, SignupError::ActivityNotFound { .. }));

        assert_eq!(directory.list().await, before);
    }

    #[tokio::test]
    async fn test_unregister_keeps_remaining_order() {
        let directory = ActivityDirectory::from_seed(
            chess_only(12, &["a@x.edu", "b@x.edu", "c@x.edu"]),
            false,
        )
        .unwrap();

        let message = directory.unregister("Chess Club", "b@x.edu").await.unwrap();
        assert_eq!(message, "Unregistered b@x.edu from Chess Club");

        let listing = directory.list().await;
        assert_eq!(listing["Chess Club"].participants, vec!["a@x.edu", "c@x.edu"]);
    }

    #[tokio::test]
    async fn test_unregister_missing_participant_leaves_directory_unchanged() {
        let directory = ActivityDirectory::from_seed(default_activities(), false).unwrap();
        let before = directory.list().await;

        let err = directory
            .unregister("Chess Club", "noone@example.com")
            .await
            .unwrap_err();
        assert!(matches!(err, SignupError::NotRegistered { .. }));
        assert_eq!(directory.list().await, before);
    }

    #[tokio::test]
    async fn test_signup_then_unregister_restores_activity() {
        let directory = ActivityDirectory::from_seed(default_activities(), false).unwrap();
        let before = directory.list().await;

        directory
            .signup("Gym Class", "round@trip.edu")
            .await
            .unwrap();
        directory
            .unregister("Gym Class", "round@trip.edu")
            .await
            .unwrap();

        assert_eq!(directory.list().await, before);
    }

    #[tokio::test]
    async fn test_capacity_is_not_enforced_by_default() {
        let directory = ActivityDirectory::from_seed(chess_only(1, &["a@x.edu"]), false).unwrap();
        assert!(!directory.enforces_capacity());

        directory.signup("Chess Club", "b@x.edu").await.unwrap();
        assert_eq!(directory.list().await["Chess Club"].participants.len(), 2);
    }

    #[tokio::test]
    async fn test_capacity_enforced_when_enabled() {
        let directory = ActivityDirectory::from_seed(chess_only(1, &["a@x.edu"]), true).unwrap();

        let err = directory.signup("Chess Club", "b@x.edu").await.unwrap_err();
        assert!(matches!(err, SignupError::ActivityFull { capacity: 1, .. }));

        // A freed spot can be taken again.
        directory.unregister("Chess Club", "a@x.edu").await.unwrap();
        directory.signup("Chess Club", "b@x.edu").await.unwrap();
    }

    #[tokio::test]
    async fn test_concurrent_duplicate_signups_register_once() {
        let directory = ActivityDirectory::from_seed(default_activities(), false).unwrap();

        let handles: Vec<_> = (0..16)
            .map(|_| {
                let directory = directory.clone();
                tokio::spawn(async move {
                    directory.signup("Chess Club", "racer@example.com").await
                })
            })
            .collect();

        let mut successes = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                successes += 1;
            }
        }
        assert_eq!(successes, 1);

        let listing = directory.list().await;
        let count = listing["Chess Club"]
            .participants
            .iter()
            .filter(|p| *p == "racer@example.com")
            .count();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_seed_with_duplicate_names_is_rejected() {
        let mut seed = chess_only(12, &[]);
        seed.extend(chess_only(5, &[]));

        let err = ActivityDirectory::from_seed(seed, false).unwrap_err();
        assert!(matches!(err, SignupError::InvalidConfigValueError { ref field, .. } if field == "activities.name"));
    }

    #[test]
    fn test_seed_with_duplicate_participants_is_rejected() {
        let seed = chess_only(12, &["a@x.edu", "a@x.edu"]);
        assert!(ActivityDirectory::from_seed(seed, false).is_err());
    }
}

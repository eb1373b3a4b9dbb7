use crate::domain::model::ActivityListing;
use crate::utils::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait ActivityStore: Send + Sync {
    async fn list(&self) -> ActivityListing;
    async fn signup(&self, activity: &str, email: &str) -> Result<String>;
    async fn unregister(&self, activity: &str, email: &str) -> Result<String>;
    fn len(&self) -> usize;
}

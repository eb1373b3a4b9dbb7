pub mod directory;

pub use crate::domain::model::{Activity, ActivityListing, ActivitySeed};
pub use crate::domain::ports::ActivityStore;

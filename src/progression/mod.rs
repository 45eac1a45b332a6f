//! Persisted progression document: schema, migration and storage.

pub mod migration;
pub mod store;
pub mod types;

pub use migration::{migrate, ProgressionDataV1};
pub use store::{ProgressionStore, SaveQueue, StoreError};
pub use types::ProgressionData;

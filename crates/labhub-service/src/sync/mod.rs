//! Profile group synchronization.

pub mod naming;
pub mod service;

pub use naming::derive_group_name;
pub use service::{ProfileSyncReport, ProfileSyncService, SyncReport, SyncStatus, UnitSyncFailure};

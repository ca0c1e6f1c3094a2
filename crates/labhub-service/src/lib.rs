//! # labhub-service
//!
//! Orchestration services for the LabHub authorization layer: profile
//! group synchronization and per-user access reporting.

pub mod access;
pub mod sync;

pub use access::UserAccessService;
pub use sync::ProfileSyncService;

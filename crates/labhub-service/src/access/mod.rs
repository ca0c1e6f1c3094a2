//! Per-user access reporting.

pub mod report;

pub use report::{GrantRow, UserAccessService, UserAccessSummary};

//! Permission domain entities: capabilities, profile roles, permission
//! groups, and ranked group links.

pub mod capability;
pub mod model;
pub mod profile;

pub use capability::{Capability, ResourceKind, StandardAction};
pub use model::{PermissionGroup, RankedGroupLink};
pub use profile::ProfileRole;

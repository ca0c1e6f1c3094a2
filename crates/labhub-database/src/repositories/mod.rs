//! Repository implementations for all LabHub entities.

pub mod capability;
pub mod contract;
pub mod group;
pub mod order;
pub mod person;
pub mod ranked_link;
pub mod unit;
pub mod user;

pub use capability::CapabilityRepository;
pub use contract::ContractFileRepository;
pub use group::PermissionGroupRepository;
pub use order::OrderFileRepository;
pub use person::PersonRepository;
pub use ranked_link::RankedLinkRepository;
pub use unit::ResearchUnitRepository;
pub use user::UserRepository;

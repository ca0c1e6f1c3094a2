//! Human resources domain entities.

pub mod model;

pub use model::ContractFile;

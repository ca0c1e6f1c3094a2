//! # labhub-core
//!
//! Core crate for the LabHub platform. Contains configuration schemas
//! and the unified error system.
//!
//! This crate has **no** internal dependencies on other LabHub crates.

pub mod config;
pub mod error;
pub mod result;

pub use error::AppError;
pub use result::AppResult;

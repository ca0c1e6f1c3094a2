//! Purchase order domain entities.

pub mod model;

pub use model::OrderFile;

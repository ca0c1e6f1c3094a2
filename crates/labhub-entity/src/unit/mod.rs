//! Research unit domain entities.

pub mod model;

pub use model::{ResearchUnit, UnitKind};

//! Document access gating.

pub mod decision;
pub mod resolver;

pub use decision::{AccessDecision, DocumentSet};
pub use resolver::DocumentAccessGate;

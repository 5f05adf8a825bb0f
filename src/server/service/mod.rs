//! Service layer.
//!
//! `resolver` reads across the two systems and never fails; `link` writes to them to keep
//! links between rows and documents consistent.

pub mod link;
pub mod resolver;

//! Shared test harness for the crosslink workspace.
//!
//! Tests are written in two phases. [`TestBuilder`] declares the tables, rows and mock CMS
//! endpoints a test needs; `build()` turns that into a [`TestContext`] holding an in-memory
//! SQLite database and a Sanity client pointed at a local mockito server.

pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{fixtures::factory, TestBuilder, TestContext, TestError};
}

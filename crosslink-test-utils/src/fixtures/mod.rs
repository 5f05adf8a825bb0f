//! Fixtures used while a test runs.
//!
//! - `factory` - mock rows and CMS documents
//! - `records` - inserting rows into the test database
//! - `cms` - registering mock Sanity query & mutation endpoints

use crate::TestContext;

pub mod cms;
pub mod factory;
pub mod records;

impl TestContext {
    pub fn records<'a>(&'a mut self) -> RecordFixtures<'a> {
        RecordFixtures { setup: self }
    }

    pub fn cms<'a>(&'a mut self) -> CmsFixtures<'a> {
        CmsFixtures { setup: self }
    }
}

pub struct RecordFixtures<'a> {
    pub setup: &'a mut TestContext,
}

pub struct CmsFixtures<'a> {
    pub setup: &'a mut TestContext,
}

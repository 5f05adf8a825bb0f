//! Test context returned by `TestBuilder`.
//!
//! Holds an in-memory SQLite database and a Sanity client whose API url points at a local
//! mockito server, along with the mocks registered during the build phase.

use mockito::{Mock, Server, ServerGuard};
use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::{
    constant::{TEST_API_TOKEN, TEST_API_VERSION, TEST_DATASET},
    error::TestError,
};

/// Test environment produced by [`TestBuilder::build`](crate::TestBuilder::build)
///
/// ```ignore
/// let mut test = TestBuilder::new().with_link_tables().build().await?;
///
/// let person = test.records().insert_mock_person("p1", Some("profile-1")).await?;
/// let mock = test.cms().create_document_endpoint("playerProfile", "profile-1", doc, 1);
///
/// test.assert_mocks();
/// ```
pub struct TestContext {
    /// Connection to an in-memory SQLite database
    pub db: DatabaseConnection,
    /// Sanity client configured against the mock server, with a write token
    pub cms_client: sanity_client::Client,

    /// Mock HTTP server standing in for the Sanity API
    pub server: ServerGuard,
    /// Mocks created by the builder, kept alive for the duration of the test
    pub(crate) mocks: Vec<Mock>,
}

impl TestContext {
    pub(crate) async fn new() -> Result<Self, TestError> {
        let server = Server::new_async().await;

        let config = sanity_client::Config::builder()
            .api_url(&server.url())
            .dataset(TEST_DATASET)
            .api_version(TEST_API_VERSION)
            .build()?;

        let cms_client = sanity_client::Client::builder()
            .config(config)
            .token(TEST_API_TOKEN)
            .build()?;

        let db = Database::connect("sqlite::memory:").await?;

        Ok(Self {
            db,
            cms_client,
            server,
            mocks: Vec::new(),
        })
    }

    /// Converts the database connection & CMS client into application state
    ///
    /// Generic so this crate does not depend on the application crate.
    pub fn to_app_state<T>(&self) -> T
    where
        T: From<(DatabaseConnection, sanity_client::Client)>,
    {
        T::from((self.db.clone(), self.cms_client.clone()))
    }

    pub(crate) async fn with_tables(
        &self,
        stmts: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Keeps a mock created after the build phase alive and includes it in `assert_mocks`
    pub fn track(&mut self, mock: Mock) {
        self.mocks.push(mock);
    }

    /// Asserts every tracked mock was hit the expected number of times
    ///
    /// # Panics
    /// Panics on the first mock whose hit count does not match.
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}

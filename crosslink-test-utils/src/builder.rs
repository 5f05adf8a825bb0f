//! Declarative test builder.
//!
//! Tables, rows and mock CMS endpoints are queued on the builder and created in one go by
//! `build()`.

use mockito::Mock;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};
use serde_json::Value;

use crate::{error::TestError, TestContext};

enum Row {
    Person(String, Option<String>),
    Staff(String, Option<String>),
    Team(String, String, Option<String>),
    Match(String, Option<String>, Option<String>, Option<String>),
    Sponsor(String, bool, Option<String>),
}

enum Endpoint {
    Document(String, String, Value, usize),
    ExternalDocument(String, String, Value, usize),
    Documents(String, Vec<String>, Vec<Value>, usize),
    ExternalDocuments(String, Vec<String>, Vec<Value>, usize),
    AllDocuments(String, Vec<Value>, usize),
    FailingDocument(String, String, usize),
    FailingExternalDocument(String, String, usize),
    SetField(String, String, Value, usize),
    UnsetField(String, String, usize),
}

/// Builder for test environments
///
/// ```no_run
/// use crosslink_test_utils::{fixtures::factory, TestBuilder};
///
/// # async fn example() -> Result<(), crosslink_test_utils::TestError> {
/// let test = TestBuilder::new()
///     .with_link_tables()
///     .with_person("p1", Some("profile-1"))
///     .with_document_endpoint(
///         "playerProfile",
///         "profile-1",
///         factory::mock_player_profile("profile-1", Some("p1")),
///         1,
///     )
///     .build()
///     .await?;
/// # Ok(())
/// # }
/// ```
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_link_tables: bool,
    rows: Vec<Row>,
    endpoints: Vec<Endpoint>,
    mock_builders: Vec<Box<dyn FnOnce(&mut mockito::ServerGuard) -> Mock>>,
}

fn owned(value: Option<&str>) -> Option<String> {
    value.map(str::to_string)
}

impl TestBuilder {
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_link_tables: false,
            rows: Vec::new(),
            endpoints: Vec::new(),
            mock_builders: Vec::new(),
        }
    }

    /// Create the `teams`, `people`, `match` & `sponsors` tables
    pub fn with_link_tables(mut self) -> Self {
        self.include_link_tables = true;
        self
    }

    /// Create a single entity table
    ///
    /// Leaving a table out is the simplest way to make queries against it fail.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a mock player row
    pub fn with_person(mut self, id: &str, sanity_id: Option<&str>) -> Self {
        self.rows.push(Row::Person(id.to_string(), owned(sanity_id)));
        self
    }

    /// Insert a mock member of staff
    pub fn with_staff(mut self, id: &str, sanity_id: Option<&str>) -> Self {
        self.rows.push(Row::Staff(id.to_string(), owned(sanity_id)));
        self
    }

    pub fn with_team(mut self, id: &str, name: &str, sanity_id: Option<&str>) -> Self {
        self.rows
            .push(Row::Team(id.to_string(), name.to_string(), owned(sanity_id)));
        self
    }

    /// Insert a mock match, creating its teams if they were not declared
    pub fn with_match(
        mut self,
        id: &str,
        home_team_id: Option<&str>,
        away_team_id: Option<&str>,
        sanity_id: Option<&str>,
    ) -> Self {
        self.rows.push(Row::Match(
            id.to_string(),
            owned(home_team_id),
            owned(away_team_id),
            owned(sanity_id),
        ));
        self
    }

    pub fn with_sponsor(mut self, id: &str, featured: bool, sanity_id: Option<&str>) -> Self {
        self.rows
            .push(Row::Sponsor(id.to_string(), featured, owned(sanity_id)));
        self
    }

    /// Mock a document lookup by `_id`, see [`CmsFixtures::create_document_endpoint`](crate::fixtures::CmsFixtures::create_document_endpoint)
    pub fn with_document_endpoint(
        mut self,
        doc_type: &str,
        document_id: &str,
        document: Value,
        expected_requests: usize,
    ) -> Self {
        self.endpoints.push(Endpoint::Document(
            doc_type.to_string(),
            document_id.to_string(),
            document,
            expected_requests,
        ));
        self
    }

    /// Mock a reverse document lookup by external id
    pub fn with_external_document_endpoint(
        mut self,
        doc_type: &str,
        external_id: &str,
        document: Value,
        expected_requests: usize,
    ) -> Self {
        self.endpoints.push(Endpoint::ExternalDocument(
            doc_type.to_string(),
            external_id.to_string(),
            document,
            expected_requests,
        ));
        self
    }

    pub fn with_documents_endpoint(
        mut self,
        doc_type: &str,
        document_ids: &[&str],
        documents: Vec<Value>,
        expected_requests: usize,
    ) -> Self {
        self.endpoints.push(Endpoint::Documents(
            doc_type.to_string(),
            document_ids.iter().map(|id| id.to_string()).collect(),
            documents,
            expected_requests,
        ));
        self
    }

    pub fn with_external_documents_endpoint(
        mut self,
        doc_type: &str,
        external_ids: &[&str],
        documents: Vec<Value>,
        expected_requests: usize,
    ) -> Self {
        self.endpoints.push(Endpoint::ExternalDocuments(
            doc_type.to_string(),
            external_ids.iter().map(|id| id.to_string()).collect(),
            documents,
            expected_requests,
        ));
        self
    }

    /// Mock a listing of every published document of a type
    pub fn with_all_documents_endpoint(
        mut self,
        doc_type: &str,
        documents: Vec<Value>,
        expected_requests: usize,
    ) -> Self {
        self.endpoints.push(Endpoint::AllDocuments(
            doc_type.to_string(),
            documents,
            expected_requests,
        ));
        self
    }

    /// Mock a document lookup by `_id` that returns a 500
    pub fn with_failing_document_endpoint(
        mut self,
        doc_type: &str,
        document_id: &str,
        expected_requests: usize,
    ) -> Self {
        self.endpoints.push(Endpoint::FailingDocument(
            doc_type.to_string(),
            document_id.to_string(),
            expected_requests,
        ));
        self
    }

    /// Mock a reverse document lookup that returns a 500
    pub fn with_failing_external_document_endpoint(
        mut self,
        doc_type: &str,
        external_id: &str,
        expected_requests: usize,
    ) -> Self {
        self.endpoints.push(Endpoint::FailingExternalDocument(
            doc_type.to_string(),
            external_id.to_string(),
            expected_requests,
        ));
        self
    }

    /// Mock a patch setting `field` to `value` on a document
    pub fn with_set_field_endpoint(
        mut self,
        document_id: &str,
        field: &str,
        value: Value,
        expected_requests: usize,
    ) -> Self {
        self.endpoints.push(Endpoint::SetField(
            document_id.to_string(),
            field.to_string(),
            value,
            expected_requests,
        ));
        self
    }

    pub fn with_unset_field_endpoint(
        mut self,
        document_id: &str,
        field: &str,
        expected_requests: usize,
    ) -> Self {
        self.endpoints.push(Endpoint::UnsetField(
            document_id.to_string(),
            field.to_string(),
            expected_requests,
        ));
        self
    }

    /// Add a custom mock endpoint with full access to the mock server
    pub fn with_mock_endpoint<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut mockito::ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(setup));
        self
    }

    /// Creates tables, then rows, then mock endpoints
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Configured test environment
    /// - `Err(TestError::DbErr)` - Table creation or row insertion failed
    /// - `Err(TestError::CmsError)` - The mock Sanity client could not be built
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        // 1. Tables, teams first so match foreign keys resolve
        let mut all_tables = Vec::new();

        if self.include_link_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Teams),
                schema.create_table_from_entity(entity::prelude::People),
                schema.create_table_from_entity(entity::prelude::Match),
                schema.create_table_from_entity(entity::prelude::Sponsors),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Rows
        for row in self.rows {
            let records = setup.records();

            match row {
                Row::Person(id, sanity_id) => {
                    records.insert_mock_person(&id, sanity_id.as_deref()).await?;
                }
                Row::Staff(id, sanity_id) => {
                    records.insert_mock_staff(&id, sanity_id.as_deref()).await?;
                }
                Row::Team(id, name, sanity_id) => {
                    records
                        .insert_mock_team(&id, &name, sanity_id.as_deref())
                        .await?;
                }
                Row::Match(id, home, away, sanity_id) => {
                    records
                        .insert_mock_match(
                            &id,
                            home.as_deref(),
                            away.as_deref(),
                            sanity_id.as_deref(),
                        )
                        .await?;
                }
                Row::Sponsor(id, featured, sanity_id) => {
                    records
                        .insert_mock_sponsor(&id, featured, sanity_id.as_deref())
                        .await?;
                }
            }
        }

        // 3. Mock endpoints, custom ones first so sequential matching on one path works
        let mut mocks = Vec::new();

        for builder in self.mock_builders {
            mocks.push(builder(&mut setup.server));
        }

        for endpoint in self.endpoints {
            let mut cms = setup.cms();

            let mock = match endpoint {
                Endpoint::Document(doc_type, id, document, expected) => {
                    cms.create_document_endpoint(&doc_type, &id, document, expected)
                }
                Endpoint::ExternalDocument(doc_type, external_id, document, expected) => {
                    cms.create_external_document_endpoint(&doc_type, &external_id, document, expected)
                }
                Endpoint::Documents(doc_type, ids, documents, expected) => {
                    let ids: Vec<&str> = ids.iter().map(String::as_str).collect();
                    cms.create_documents_endpoint(&doc_type, &ids, documents, expected)
                }
                Endpoint::ExternalDocuments(doc_type, ids, documents, expected) => {
                    let ids: Vec<&str> = ids.iter().map(String::as_str).collect();
                    cms.create_external_documents_endpoint(&doc_type, &ids, documents, expected)
                }
                Endpoint::AllDocuments(doc_type, documents, expected) => {
                    cms.create_all_documents_endpoint(&doc_type, documents, expected)
                }
                Endpoint::FailingDocument(doc_type, id, expected) => {
                    cms.create_failing_document_endpoint(&doc_type, &id, expected)
                }
                Endpoint::FailingExternalDocument(doc_type, external_id, expected) => {
                    cms.create_failing_external_document_endpoint(&doc_type, &external_id, expected)
                }
                Endpoint::SetField(document_id, field, value, expected) => {
                    cms.create_set_field_endpoint(&document_id, &field, value, expected)
                }
                Endpoint::UnsetField(document_id, field, expected) => {
                    cms.create_unset_field_endpoint(&document_id, &field, expected)
                }
            };

            mocks.push(mock);
        }

        setup.mocks = mocks;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//! Mock Sanity endpoints.
//!
//! Every query hits the same path, so mocks are told apart by the JSON-encoded `$param`
//! query-string pairs the client sends. A mock registered with an expectation of `0`
//! asserts that a lookup never reached the CMS.

use mockito::{Matcher, Mock};
use serde_json::{json, Map, Value};

use crate::{
    constant::{ALL_DOCUMENTS_QUERY, TEST_MUTATE_PATH, TEST_QUERY_PATH},
    fixtures::CmsFixtures,
};

fn param(name: &str, value: impl Into<Value>) -> Matcher {
    Matcher::UrlEncoded(format!("${}", name), value.into().to_string())
}

impl<'a> CmsFixtures<'a> {
    fn query_endpoint(
        &mut self,
        matchers: Vec<Matcher>,
        status: usize,
        body: Value,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("GET", TEST_QUERY_PATH)
            .match_query(Matcher::AllOf(matchers))
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Mock a lookup of a document by `_id`
    ///
    /// Pass `Value::Null` as the document to simulate a document that does not exist.
    pub fn create_document_endpoint(
        &mut self,
        doc_type: &str,
        document_id: &str,
        document: Value,
        expected_requests: usize,
    ) -> Mock {
        self.query_endpoint(
            vec![param("docType", doc_type), param("id", document_id)],
            200,
            json!({ "result": document }),
            expected_requests,
        )
    }

    /// Mock a reverse lookup of a document by its external-id field
    pub fn create_external_document_endpoint(
        &mut self,
        doc_type: &str,
        external_id: &str,
        document: Value,
        expected_requests: usize,
    ) -> Mock {
        self.query_endpoint(
            vec![param("docType", doc_type), param("externalId", external_id)],
            200,
            json!({ "result": document }),
            expected_requests,
        )
    }

    /// Mock a batch lookup of documents by `_id`
    pub fn create_documents_endpoint(
        &mut self,
        doc_type: &str,
        document_ids: &[&str],
        documents: Vec<Value>,
        expected_requests: usize,
    ) -> Mock {
        self.query_endpoint(
            vec![param("docType", doc_type), param("ids", document_ids.to_vec())],
            200,
            json!({ "result": documents }),
            expected_requests,
        )
    }

    /// Mock a batch reverse lookup of documents by external id
    pub fn create_external_documents_endpoint(
        &mut self,
        doc_type: &str,
        external_ids: &[&str],
        documents: Vec<Value>,
        expected_requests: usize,
    ) -> Mock {
        self.query_endpoint(
            vec![
                param("docType", doc_type),
                param("externalIds", external_ids.to_vec()),
            ],
            200,
            json!({ "result": documents }),
            expected_requests,
        )
    }

    /// Mock a listing of every published document of a type
    pub fn create_all_documents_endpoint(
        &mut self,
        doc_type: &str,
        documents: Vec<Value>,
        expected_requests: usize,
    ) -> Mock {
        self.query_endpoint(
            vec![
                param("docType", doc_type),
                Matcher::UrlEncoded("query".to_string(), ALL_DOCUMENTS_QUERY.to_string()),
            ],
            200,
            json!({ "result": documents }),
            expected_requests,
        )
    }

    /// Mock a document lookup by `_id` that fails with a 500
    pub fn create_failing_document_endpoint(
        &mut self,
        doc_type: &str,
        document_id: &str,
        expected_requests: usize,
    ) -> Mock {
        self.query_endpoint(
            vec![param("docType", doc_type), param("id", document_id)],
            500,
            json!({ "error": { "description": "Internal error" } }),
            expected_requests,
        )
    }

    /// Mock a reverse document lookup that fails with a 500
    pub fn create_failing_external_document_endpoint(
        &mut self,
        doc_type: &str,
        external_id: &str,
        expected_requests: usize,
    ) -> Mock {
        self.query_endpoint(
            vec![param("docType", doc_type), param("externalId", external_id)],
            500,
            json!({ "error": { "description": "Internal error" } }),
            expected_requests,
        )
    }

    /// Mock a patch setting a single field on a document
    pub fn create_set_field_endpoint(
        &mut self,
        document_id: &str,
        field: &str,
        value: Value,
        expected_requests: usize,
    ) -> Mock {
        let mut set = Map::new();
        set.insert(field.to_string(), value);

        let body = json!({
            "mutations": [{ "patch": { "id": document_id, "set": set } }]
        });

        self.mutation_endpoint(document_id, body, expected_requests)
    }

    /// Mock a patch removing a single field from a document
    pub fn create_unset_field_endpoint(
        &mut self,
        document_id: &str,
        field: &str,
        expected_requests: usize,
    ) -> Mock {
        let body = json!({
            "mutations": [{ "patch": { "id": document_id, "unset": [field] } }]
        });

        self.mutation_endpoint(document_id, body, expected_requests)
    }

    fn mutation_endpoint(&mut self, document_id: &str, body: Value, expected_requests: usize) -> Mock {
        self.setup
            .server
            .mock("POST", TEST_MUTATE_PATH)
            .match_query(Matcher::Any)
            .match_body(Matcher::Json(body))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "transactionId": "test-transaction",
                    "results": [{ "id": document_id, "operation": "update" }]
                })
                .to_string(),
            )
            .expect(expected_requests)
            .create()
    }
}

//! Sanity client settings used by every test context.
//!
//! None of these are real credentials.

/// Dataset the mock CMS serves.
pub static TEST_DATASET: &str = "production";

/// API version the mock CMS endpoints are registered under.
pub static TEST_API_VERSION: &str = "2023-06-21";

/// Write token given to the test client so mutation paths can be exercised.
pub static TEST_API_TOKEN: &str = "test-write-token";

/// Path of the GROQ query endpoint on the mock server.
pub static TEST_QUERY_PATH: &str = "/v2023-06-21/data/query/production";

/// Path of the mutation endpoint on the mock server.
pub static TEST_MUTATE_PATH: &str = "/v2023-06-21/data/mutate/production";

/// GROQ query listing every published document of `$docType`.
pub static ALL_DOCUMENTS_QUERY: &str = "*[_type == $docType && !(_id in path(\"drafts.**\"))]";

//! Minimal client for the Sanity content lake HTTP API.
//!
//! Covers the two endpoints the club site needs: GROQ queries against a dataset and
//! document mutations. Queries are parameterised, each parameter is sent JSON-encoded as a
//! `$name` query-string pair the way the Sanity HTTP API expects.
//!
//! ```no_run
//! # async fn example() -> Result<(), sanity_client::Error> {
//! use sanity_client::{Client, Config, Params};
//!
//! let config = Config::builder()
//!     .project_id("abc123")
//!     .dataset("production")
//!     .build()?;
//! let client = Client::builder().config(config).build()?;
//!
//! let params = Params::new().with("id", "player-1");
//! let doc: Option<serde_json::Value> = client
//!     .fetch("*[_id == $id][0]", &params)
//!     .await?;
//! # Ok(())
//! # }
//! ```

mod client;
mod config;
mod error;
mod mutation;
mod params;

pub use client::{Client, ClientBuilder};
pub use config::{Config, ConfigBuilder, DEFAULT_API_VERSION, DEFAULT_DATASET};
pub use error::Error;
pub use mutation::{Mutation, MutationResponse, MutationResult};
pub use params::Params;

/// Strips the `drafts.` prefix Sanity puts on unpublished document ids.
pub fn published_id(document_id: &str) -> &str {
    document_id
        .strip_prefix("drafts.")
        .unwrap_or(document_id)
}

#[cfg(test)]
mod tests {
    use super::published_id;

    #[test]
    fn strips_draft_prefix() {
        assert_eq!(published_id("drafts.abc"), "abc");
        assert_eq!(published_id("abc"), "abc");
        assert_eq!(published_id("notdrafts.abc"), "notdrafts.abc");
    }
}

//! Cross-system reference resolution.
//!
//! Resolves database rows from CMS documents and CMS documents from database rows through a
//! shared [`ReferenceCache`]. The generic machinery lives in [`reference`]; the per-entity
//! modules bind it to concrete tables, document types and link fields.

pub mod cache;
pub mod key;
pub mod matches;
pub mod player;
pub mod reference;
pub mod resolution;
pub mod source;
pub mod sponsor;
pub mod team;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

pub use cache::ReferenceCache;
pub use reference::ReferenceResolver;
pub use resolution::Resolution;
pub use source::{DocumentSource, RecordSource};

/// Per-call resolver options
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ResolveOptions {
    /// Bypass cached results, the fresh result replaces the cached one
    #[serde(default)]
    pub skip_cache: bool,
}

impl ResolveOptions {
    /// Options that always query the backing stores
    pub fn fresh() -> Self {
        Self { skip_cache: true }
    }
}

/// A primary record with its counterpart from the other system, when one is linked
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Linked<P, C> {
    pub primary: P,
    pub counterpart: Option<C>,
}

/// One of the two systems a record can live in
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum System {
    /// The relational database
    Db,
    /// The Sanity content lake
    Cms,
}

/// Result of a lookup by an id that may belong to either system
#[derive(Clone, Debug, PartialEq)]
pub enum AnyRecord<R, D> {
    Record(R),
    Document(D),
}

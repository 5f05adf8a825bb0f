use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single entry of a mutation request
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Mutation {
    Create(Value),
    CreateIfNotExists(Value),
    Patch(Patch),
    Delete { id: String },
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Patch {
    id: String,
    #[serde(skip_serializing_if = "Map::is_empty")]
    set: Map<String, Value>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    unset: Vec<String>,
}

impl Mutation {
    /// Patch that sets a single field on an existing document
    pub fn set_field(document_id: &str, field: &str, value: impl Into<Value>) -> Self {
        let mut set = Map::new();
        set.insert(field.to_string(), value.into());

        Mutation::Patch(Patch {
            id: document_id.to_string(),
            set,
            unset: Vec::new(),
        })
    }

    /// Patch that removes a single field from an existing document
    pub fn unset_field(document_id: &str, field: &str) -> Self {
        Mutation::Patch(Patch {
            id: document_id.to_string(),
            set: Map::new(),
            unset: vec![field.to_string()],
        })
    }
}

#[derive(Serialize)]
pub(crate) struct MutationRequest<'a> {
    pub mutations: &'a [Mutation],
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MutationResponse {
    pub transaction_id: String,
    #[serde(default)]
    pub results: Vec<MutationResult>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct MutationResult {
    pub id: String,
    pub operation: Option<String>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn serializes_set_patch() {
        let mutation = Mutation::set_field("player-1", "supabaseId", "u1");

        assert_eq!(
            serde_json::to_value(&mutation).unwrap(),
            json!({ "patch": { "id": "player-1", "set": { "supabaseId": "u1" } } })
        );
    }

    #[test]
    fn serializes_unset_patch() {
        let mutation = Mutation::unset_field("player-1", "supabaseId");

        assert_eq!(
            serde_json::to_value(&mutation).unwrap(),
            json!({ "patch": { "id": "player-1", "unset": ["supabaseId"] } })
        );
    }
}

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use crate::Error;

/// Named parameters bound into a GROQ query as `$name`
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Params(BTreeMap<String, Value>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a parameter, replacing any previous value under the same name
    pub fn with(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.0.insert(name.to_string(), value.into());
        self
    }

    /// Adds any serializable value as a parameter
    pub fn with_serialized<T: Serialize>(mut self, name: &str, value: &T) -> Result<Self, Error> {
        self.0.insert(name.to_string(), serde_json::to_value(value)?);
        Ok(self)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Query-string pairs in the form the query endpoint expects: `$name=<json>`
    pub(crate) fn to_query_pairs(&self) -> Vec<(String, String)> {
        self.0
            .iter()
            .map(|(name, value)| (format!("${}", name), value.to_string()))
            .collect()
    }
}

//! What a resolver needs to know about the object it starts from.
//!
//! Empty strings are treated the same as missing ids, the CMS stores cleared fields as `""`
//! as often as it removes them.

/// Starting point for resolving a database row
pub trait RecordSource {
    /// Value of the external-id field pointing at the row
    fn external_id(&self) -> Option<&str>;

    /// The source's own id, used when there is no external-id field
    fn id(&self) -> Option<&str> {
        None
    }

    /// Row id to look up, external id first
    fn record_id(&self) -> Option<&str> {
        non_empty(self.external_id()).or_else(|| non_empty(self.id()))
    }
}

impl RecordSource for str {
    fn external_id(&self) -> Option<&str> {
        None
    }

    fn id(&self) -> Option<&str> {
        Some(self)
    }
}

impl RecordSource for String {
    fn external_id(&self) -> Option<&str> {
        None
    }

    fn id(&self) -> Option<&str> {
        Some(self)
    }
}

impl<T: RecordSource + ?Sized> RecordSource for &T {
    fn external_id(&self) -> Option<&str> {
        (**self).external_id()
    }

    fn id(&self) -> Option<&str> {
        (**self).id()
    }
}

/// Starting point for resolving a CMS document: a database row
pub trait DocumentSource {
    /// Primary key of the row
    fn record_id(&self) -> &str;

    /// Back-reference to the linked document's `_id`
    fn sanity_id(&self) -> Option<&str>;
}

impl<T: DocumentSource + ?Sized> DocumentSource for &T {
    fn record_id(&self) -> &str {
        (**self).record_id()
    }

    fn sanity_id(&self) -> Option<&str> {
        (**self).sanity_id()
    }
}

pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

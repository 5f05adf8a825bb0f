use std::fmt::Display;

/// Outcome of a single cross-system lookup
///
/// Resolvers never fail. Callers rendering a page collapse this with [`Resolution::into_option`];
/// diagnostics can still tell an unlinked source from a missing target or a broken query.
#[derive(Clone, Debug, PartialEq)]
pub enum Resolution<T> {
    /// The counterpart was found
    Resolved(T),
    /// The source carries no usable link, no query was issued
    NotLinked,
    /// A query was issued and matched nothing
    NotFound,
    /// The backing store returned an error, already logged
    QueryFailed(String),
}

impl<T> Resolution<T> {
    /// Turns a repository result into a resolution, logging errors
    pub fn from_lookup<E: Display>(result: Result<Option<T>, E>, context: &str) -> Self {
        match result {
            Ok(Some(value)) => Self::Resolved(value),
            Ok(None) => Self::NotFound,
            Err(err) => {
                tracing::error!("{}: {}", context, err);

                Self::QueryFailed(err.to_string())
            }
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Resolved(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_option(&self) -> Option<&T> {
        match self {
            Self::Resolved(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Resolution<U> {
        match self {
            Self::Resolved(value) => Resolution::Resolved(f(value)),
            Self::NotLinked => Resolution::NotLinked,
            Self::NotFound => Resolution::NotFound,
            Self::QueryFailed(message) => Resolution::QueryFailed(message),
        }
    }
}

impl<T> From<Resolution<T>> for Option<T> {
    fn from(resolution: Resolution<T>) -> Self {
        resolution.into_option()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_lookup_distinguishes_outcomes() {
        let found: Resolution<i32> = Resolution::from_lookup(Ok::<_, String>(Some(1)), "lookup");
        let missing: Resolution<i32> = Resolution::from_lookup(Ok::<_, String>(None), "lookup");
        let failed: Resolution<i32> =
            Resolution::from_lookup(Err("connection reset".to_string()), "lookup");

        assert_eq!(found, Resolution::Resolved(1));
        assert_eq!(missing, Resolution::NotFound);
        assert_eq!(failed, Resolution::QueryFailed("connection reset".to_string()));
    }

    #[test]
    fn collapses_to_option() {
        assert_eq!(Resolution::Resolved("a").into_option(), Some("a"));
        assert_eq!(Resolution::<&str>::NotLinked.into_option(), None);
        assert_eq!(Resolution::<&str>::NotFound.into_option(), None);
        assert_eq!(
            Resolution::<&str>::QueryFailed("boom".to_string()).into_option(),
            None
        );
    }

    #[test]
    fn map_keeps_failure_kind() {
        let failed = Resolution::<i32>::QueryFailed("boom".to_string()).map(|v| v + 1);

        assert!(matches!(failed, Resolution::QueryFailed(message) if message == "boom"));
        assert_eq!(Resolution::Resolved(1).map(|v| v + 1), Resolution::Resolved(2));
    }
}

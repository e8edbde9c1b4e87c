//! Error types for zmanim classification and data access.

/// Result type for zmanim operations.
pub type ZmanimResult<T> = Result<T, ZmanimError>;

/// Error taxonomy for the tracker.
///
/// Only [`ZmanimError::MissingCriticalTimes`] and
/// [`ZmanimError::SourceUnavailable`] are ever user-visible; enrichment
/// and override failures degrade a single field instead of surfacing.
#[derive(Debug, thiserror::Error)]
pub enum ZmanimError {
    /// The daily time set lacks `chatzot` or `sunset`. Nothing can be
    /// classified without them, so the whole query fails.
    #[error("Missing critical times")]
    MissingCriticalTimes,

    /// The daily time set file is missing or corrupt.
    #[error("No zmanim data available")]
    SourceUnavailable {
        #[source]
        source: Option<anyhow::Error>,
    },

    /// A remote calendar lookup failed (network, HTTP status, or shape).
    #[error("Remote calendar error: {0}")]
    Remote(String),

    /// Writing one of the cross-process JSON files failed.
    #[error("Storage error: {0}")]
    Storage(String),
}

impl ZmanimError {
    /// Create a source-unavailable error without an underlying cause.
    pub fn source_unavailable() -> Self {
        Self::SourceUnavailable { source: None }
    }

    /// Create a source-unavailable error wrapping an underlying cause.
    pub fn source_unavailable_from(err: impl Into<anyhow::Error>) -> Self {
        Self::SourceUnavailable {
            source: Some(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages_match_api_contract() {
        assert_eq!(
            ZmanimError::MissingCriticalTimes.to_string(),
            "Missing critical times"
        );
        assert_eq!(
            ZmanimError::source_unavailable().to_string(),
            "No zmanim data available"
        );
    }
}

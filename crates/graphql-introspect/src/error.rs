use thiserror::Error;

pub type Result<T> = std::result::Result<T, BootstrapError>;

/// Transport or decoding failure while talking to the endpoint.
///
/// These are worth retrying: the server may simply be unreachable.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP error {0}: {1}")]
    Http(u16, String),

    #[error("Failed to decode response as JSON: {0}")]
    Decode(String),
}

/// The endpoint answered with JSON that is not a usable introspection result.
///
/// Not retryable; usually a server or version mismatch.
#[derive(Debug, Error)]
pub enum SchemaShapeError {
    #[error("Introspection response has no `{field}` field{}", format_server_errors(.errors))]
    MissingField {
        field: &'static str,
        errors: Vec<String>,
    },

    #[error("Invalid introspection result: {0}")]
    Invalid(String),

    #[error("Failed to build schema from introspection result: {0}")]
    Build(String),
}

/// Everything that can go wrong while bootstrapping the schema
#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Shape(#[from] SchemaShapeError),
}

impl BootstrapError {
    /// Whether the caller may reasonably retry the fetch
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Fetch(_))
    }
}

fn format_server_errors(errors: &[String]) -> String {
    if errors.is_empty() {
        String::new()
    } else {
        format!(" (server errors: {})", errors.join("; "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_display() {
        let err = SchemaShapeError::MissingField {
            field: "data",
            errors: vec![],
        };
        assert_eq!(err.to_string(), "Introspection response has no `data` field");

        let err = SchemaShapeError::MissingField {
            field: "data",
            errors: vec!["Unauthorized".to_string(), "Try again".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "Introspection response has no `data` field (server errors: Unauthorized; Try again)"
        );
    }

    #[test]
    fn test_retryable() {
        assert!(BootstrapError::from(FetchError::Network("refused".into())).is_retryable());
        assert!(!BootstrapError::from(SchemaShapeError::Invalid("bad".into())).is_retryable());
    }
}

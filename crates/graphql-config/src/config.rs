use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

/// Default request timeout for the endpoint, in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default connection timeout for the endpoint, in seconds
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Top-level explorer configuration.
/// Either a single endpoint or multiple named projects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GraphQLConfig {
    /// Single endpoint configuration
    Single(EndpointConfig),
    /// Multi-project configuration
    Multi {
        projects: HashMap<String, EndpointConfig>,
    },
}

impl GraphQLConfig {
    /// Get all projects as an iterator.
    /// For single endpoint configs, yields a single item with name "default".
    #[must_use]
    pub fn projects(&self) -> Box<dyn Iterator<Item = (&str, &EndpointConfig)> + '_> {
        match self {
            Self::Single(config) => Box::new(std::iter::once(("default", config))),
            Self::Multi { projects } => Box::new(
                projects
                    .iter()
                    .map(|(name, config)| (name.as_str(), config)),
            ),
        }
    }

    /// Get a specific project by name.
    /// For single endpoint configs, returns the endpoint if name is "default".
    #[must_use]
    pub fn get_project(&self, name: &str) -> Option<&EndpointConfig> {
        match self {
            Self::Single(config) if name == "default" => Some(config),
            Self::Single(_) => None,
            Self::Multi { projects } => projects.get(name),
        }
    }

    /// Check if this is a multi-project configuration
    #[must_use]
    pub const fn is_multi_project(&self) -> bool {
        matches!(self, Self::Multi { .. })
    }

    /// Get the number of projects
    #[must_use]
    pub fn project_count(&self) -> usize {
        match self {
            Self::Single(_) => 1,
            Self::Multi { projects } => projects.len(),
        }
    }
}

/// Configuration for a single GraphQL endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointConfig {
    /// URL that introspection and operations are posted to
    pub endpoint: String,

    /// Extra HTTP headers sent with every request
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub headers: HashMap<String, String>,

    /// Request timeout in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,

    /// Connection timeout in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connect_timeout_secs: Option<u64>,

    /// Path of the document opened in the editor on startup
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document: Option<String>,

    /// Raw variables text for the variables pane
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<String>,
}

impl EndpointConfig {
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            headers: HashMap::new(),
            timeout_secs: None,
            connect_timeout_secs: None,
            document: None,
            variables: None,
        }
    }

    /// Request timeout, falling back to the default when unset
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }

    /// Connection timeout, falling back to the default when unset
    #[must_use]
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(
            self.connect_timeout_secs
                .unwrap_or(DEFAULT_CONNECT_TIMEOUT_SECS),
        )
    }

    /// Check if the endpoint is an HTTP(S) URL
    #[must_use]
    pub fn is_http(&self) -> bool {
        self.endpoint.starts_with("http://") || self.endpoint.starts_with("https://")
    }
}

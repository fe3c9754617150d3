use crate::{resolve_at_position, ExplorerIndex, Position, SelectionKey, SessionError};
use graphql_introspect::ClientSchema;
use once_cell::sync::OnceCell;
use std::sync::Arc;

/// Sample document shown before the user edits anything
pub const DEFAULT_DOCUMENT: &str = r#"# shift-option/alt-click on a query below to jump to it in the explorer
# option/alt-click on a field in the explorer to select all subfields

query npmPackage($name: String! = "graphql") {
  npm {
    package(name: $name) {
      name
      homepage
      downloads {
        lastMonth {
          count
        }
      }
    }
  }
}

fragment bundlephobiaInfo on BundlephobiaDependencyInfo {
  name
  size
  version
  history {
    dependencyCount
    size
    gzip
  }
}"#;

pub const DEFAULT_VARIABLES: &str = r#"{"name": "prisma"}"#;

/// What an inspect gesture found
#[derive(Debug, PartialEq, Eq)]
pub struct InspectOutcome<'a, H> {
    pub key: SelectionKey,
    /// `None` when the explorer has no node for the key
    pub handle: Option<&'a H>,
}

/// Host-side state: the document being edited, its variables, and the
/// schema once bootstrap has finished.
///
/// The schema is written once and shared read-only afterwards.
#[derive(Debug)]
pub struct Session {
    document: String,
    variables: String,
    schema: OnceCell<Arc<ClientSchema>>,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            document: DEFAULT_DOCUMENT.to_string(),
            variables: DEFAULT_VARIABLES.to_string(),
            schema: OnceCell::new(),
        }
    }
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_document(&mut self, document: impl Into<String>) {
        self.document = document.into();
    }

    #[must_use]
    pub fn document(&self) -> &str {
        &self.document
    }

    /// Raw variables text; not validated as JSON
    pub fn set_variables(&mut self, variables: impl Into<String>) {
        self.variables = variables.into();
    }

    #[must_use]
    pub fn variables(&self) -> &str {
        &self.variables
    }

    /// Install the bootstrapped schema. Only the first install takes effect.
    pub fn install_schema(&self, schema: Arc<ClientSchema>) -> Result<(), SessionError> {
        self.schema
            .set(schema)
            .map_err(|_| SessionError::SchemaAlreadyInstalled)?;
        tracing::info!("Schema installed, explorer enabled");
        Ok(())
    }

    #[must_use]
    pub fn schema(&self) -> Option<&Arc<ClientSchema>> {
        self.schema.get()
    }

    /// The explorer stays disabled until a schema is available
    #[must_use]
    pub fn explorer_enabled(&self) -> bool {
        self.schema.get().is_some()
    }

    /// Resolve the definition under `position` in the current document and
    /// look up its explorer node.
    pub fn inspect<'a, H>(
        &self,
        position: Position,
        index: &'a ExplorerIndex<H>,
    ) -> Result<InspectOutcome<'a, H>, SessionError> {
        let key = resolve_at_position(&self.document, position)?;
        let handle = index.locate(&key);
        if handle.is_none() {
            tracing::debug!(key = %key, "Explorer has no node for key");
        }
        Ok(InspectOutcome { key, handle })
    }
}

//! Maps a cursor in a GraphQL document to the explorer node for the
//! enclosing top-level definition.
//!
//! The core operation is [`resolve`]: given the document text and the range
//! of the token under the cursor, it returns a [`SelectionKey`] such as
//! `query-npmPackage` or `fragment-bundlephobiaInfo`. An [`ExplorerIndex`]
//! maps those keys to the host's node handles, and a [`Session`] ties the
//! document, its variables and the bootstrapped schema together.

mod document;
mod error;
mod explorer;
mod key;
mod line_index;
mod position;
mod resolver;
mod session;
mod token;

pub use document::{Definition, DefinitionKind, Document, OperationType};
pub use error::{ResolveError, Result, SessionError};
pub use explorer::ExplorerIndex;
pub use key::{SelectionKey, UNKNOWN};
pub use line_index::LineIndex;
pub use position::{OffsetRange, Position};
pub use resolver::{find_enclosing_definition, resolve, resolve_at_position, resolve_in_document};
pub use session::{InspectOutcome, Session, DEFAULT_DOCUMENT, DEFAULT_VARIABLES};
pub use token::token_range_at;

// Re-export the schema type the session holds
pub use graphql_introspect::ClientSchema;

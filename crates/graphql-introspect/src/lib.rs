//! Schema bootstrap: fetch an introspection result once and turn it into a
//! [`ClientSchema`] the rest of the explorer can read.
//!
//! # Example
//!
//! ```no_run
//! use graphql_introspect::{fetch_schema, HttpTransport};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let transport = HttpTransport::new("https://api.example.com/graphql")?;
//! let schema = fetch_schema(&transport).await?;
//! println!("{} types", schema.type_count());
//! # Ok(())
//! # }
//! ```

mod bootstrap;
mod error;
mod query;
mod schema;
mod sdl;
mod transport;
mod types;

pub use bootstrap::{execute, fetch_schema};
pub use error::{BootstrapError, FetchError, Result, SchemaShapeError};
pub use query::{INTROSPECTION_OPERATION_NAME, INTROSPECTION_QUERY};
pub use schema::ClientSchema;
pub use sdl::introspection_to_sdl;
pub use transport::{HttpTransport, Transport};
pub use types::*;

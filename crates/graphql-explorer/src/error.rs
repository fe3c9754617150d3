use thiserror::Error;

pub type Result<T> = std::result::Result<T, ResolveError>;

/// Why a cursor position could not be mapped to a definition
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The document has syntax errors; nothing is resolved against it
    #[error("Could not parse document: {message}")]
    Unparseable { message: String },

    /// The cursor is outside every top-level definition (whitespace, comments)
    #[error("No definition encloses the cursor position")]
    NoEnclosingDefinition,
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("A schema has already been installed for this session")]
    SchemaAlreadyInstalled,

    #[error(transparent)]
    Resolve(#[from] ResolveError),
}

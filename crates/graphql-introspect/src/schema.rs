use crate::sdl::introspection_to_sdl;
use crate::types::{GraphQLResponse, IntrospectionSchema};
use crate::SchemaShapeError;
use apollo_compiler::schema::ExtendedType;
use apollo_compiler::Schema;

/// Source name attached to SDL generated from introspection
const INTROSPECTION_SOURCE_NAME: &str = "introspection.graphql";

/// Schema built from an introspection result.
///
/// Created once when the bootstrap completes and only read afterwards.
#[derive(Debug, Clone)]
pub struct ClientSchema {
    schema: Schema,
    sdl: String,
    query_type: Option<String>,
    mutation_type: Option<String>,
    subscription_type: Option<String>,
}

impl ClientSchema {
    /// Build a schema from a decoded `{data, errors}` response.
    ///
    /// Fails with [`SchemaShapeError`] when `data` or `data.__schema` is
    /// missing, or when `__schema` does not have the introspection shape.
    pub fn from_response(response: &GraphQLResponse) -> Result<Self, SchemaShapeError> {
        let data = response
            .data
            .as_ref()
            .filter(|data| !data.is_null())
            .ok_or_else(|| SchemaShapeError::MissingField {
                field: "data",
                errors: response.error_messages(),
            })?;

        let raw_schema = data
            .get("__schema")
            .ok_or_else(|| SchemaShapeError::MissingField {
                field: "__schema",
                errors: response.error_messages(),
            })?;

        let introspection: IntrospectionSchema = serde_json::from_value(raw_schema.clone())
            .map_err(|e| SchemaShapeError::Invalid(e.to_string()))?;

        Self::from_introspection(&introspection)
    }

    /// Build a schema from an already decoded `__schema` payload
    pub fn from_introspection(introspection: &IntrospectionSchema) -> Result<Self, SchemaShapeError> {
        let sdl = introspection_to_sdl(introspection);

        let schema = Schema::builder()
            .parse(sdl.as_str(), INTROSPECTION_SOURCE_NAME)
            .build()
            .map_err(|e| SchemaShapeError::Build(e.errors.to_string()))?;

        tracing::debug!(types = schema.types.len(), "Schema built from introspection");

        Ok(Self {
            schema,
            sdl,
            query_type: introspection.query_type.as_ref().map(|t| t.name.clone()),
            mutation_type: introspection.mutation_type.as_ref().map(|t| t.name.clone()),
            subscription_type: introspection
                .subscription_type
                .as_ref()
                .map(|t| t.name.clone()),
        })
    }

    /// Look up a type by name, including built-in scalars and introspection types
    #[must_use]
    pub fn get_type(&self, name: &str) -> Option<&ExtendedType> {
        self.schema.types.get(name)
    }

    #[must_use]
    pub fn has_type(&self, name: &str) -> bool {
        self.schema.types.contains_key(name)
    }

    /// Names of every type in the schema
    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.schema.types.keys().map(|name| name.as_str())
    }

    #[must_use]
    pub fn type_count(&self) -> usize {
        self.schema.types.len()
    }

    #[must_use]
    pub fn query_type(&self) -> Option<&str> {
        self.query_type.as_deref()
    }

    #[must_use]
    pub fn mutation_type(&self) -> Option<&str> {
        self.mutation_type.as_deref()
    }

    #[must_use]
    pub fn subscription_type(&self) -> Option<&str> {
        self.subscription_type.as_deref()
    }

    /// The schema rendered as SDL
    #[must_use]
    pub fn sdl(&self) -> &str {
        &self.sdl
    }

    /// The underlying compiler schema, for consumers that need the full model
    #[must_use]
    pub const fn compiler_schema(&self) -> &Schema {
        &self.schema
    }
}

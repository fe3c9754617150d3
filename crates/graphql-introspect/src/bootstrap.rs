use crate::query::{INTROSPECTION_OPERATION_NAME, INTROSPECTION_QUERY};
use crate::schema::ClientSchema;
use crate::transport::Transport;
use crate::types::{GraphQLRequest, GraphQLResponse};
use crate::{FetchError, Result};

/// Fetches the schema with a single introspection request.
///
/// Returns the schema for the caller to install; nothing is cached or
/// retried here. A body that is not JSON is a [`FetchError`], JSON that is
/// not an introspection result is a [`crate::SchemaShapeError`].
#[tracing::instrument(skip(transport))]
pub async fn fetch_schema<T: Transport>(transport: &T) -> Result<ClientSchema> {
    tracing::info!("Starting introspection");

    let request =
        GraphQLRequest::new(INTROSPECTION_QUERY).with_operation_name(INTROSPECTION_OPERATION_NAME);
    let body = transport.post(&request).await?;
    let response = decode_response(&body)?;

    let schema = ClientSchema::from_response(&response)?;
    tracing::info!(types = schema.type_count(), "Introspection complete");
    Ok(schema)
}

/// Posts an arbitrary operation and decodes the `{data, errors}` response.
pub async fn execute<T: Transport>(
    transport: &T,
    request: &GraphQLRequest,
) -> std::result::Result<GraphQLResponse, FetchError> {
    let body = transport.post(request).await?;
    let value = parse_json(&body)?;
    serde_json::from_value(value).map_err(|e| FetchError::Decode(e.to_string()))
}

/// Decode a response body for the bootstrap.
///
/// Only a non-JSON body is a decoding failure; a JSON value that is not a
/// response object is reported by the schema builder as a shape error.
fn decode_response(body: &str) -> Result<GraphQLResponse> {
    let value = parse_json(body)?;
    if !value.is_object() {
        return Err(crate::SchemaShapeError::Invalid(format!(
            "expected a JSON object, got {}",
            json_kind(&value)
        ))
        .into());
    }

    serde_json::from_value(value)
        .map_err(|e| crate::SchemaShapeError::Invalid(e.to_string()).into())
}

fn parse_json(body: &str) -> std::result::Result<serde_json::Value, FetchError> {
    serde_json::from_str(body).map_err(|e| {
        tracing::error!(error = %e, "Response body is not JSON");
        FetchError::Decode(e.to_string())
    })
}

const fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

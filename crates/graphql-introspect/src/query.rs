//! The introspection query sent by the schema bootstrap.

/// Standard GraphQL introspection query.
///
/// Fetches the root operation types, every type with its fields, arguments,
/// input fields, enum values and possible types, plus directive definitions.
/// Type references are unwrapped up to 7 levels so wrappers such as
/// `[[[String!]!]!]` survive the round trip.
pub const INTROSPECTION_QUERY: &str = r"
query IntrospectionQuery {
  __schema {
    queryType { name }
    mutationType { name }
    subscriptionType { name }
    types {
      ...FullType
    }
    directives {
      name
      description
      locations
      args {
        ...InputValue
      }
    }
  }
}

fragment FullType on __Type {
  kind
  name
  description
  fields(includeDeprecated: true) {
    name
    description
    args {
      ...InputValue
    }
    type {
      ...TypeRef
    }
    isDeprecated
    deprecationReason
  }
  inputFields {
    ...InputValue
  }
  interfaces {
    ...TypeRef
  }
  enumValues(includeDeprecated: true) {
    name
    description
    isDeprecated
    deprecationReason
  }
  possibleTypes {
    ...TypeRef
  }
}

fragment InputValue on __InputValue {
  name
  description
  type {
    ...TypeRef
  }
  defaultValue
}

fragment TypeRef on __Type {
  kind
  name
  ofType {
    kind
    name
    ofType {
      kind
      name
      ofType {
        kind
        name
        ofType {
          kind
          name
          ofType {
            kind
            name
            ofType {
              kind
              name
              ofType {
                kind
                name
              }
            }
          }
        }
      }
    }
  }
}
";

/// Operation name of [`INTROSPECTION_QUERY`]
pub const INTROSPECTION_OPERATION_NAME: &str = "IntrospectionQuery";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_introspection_query_shape() {
        assert!(INTROSPECTION_QUERY.contains(INTROSPECTION_OPERATION_NAME));
        assert!(INTROSPECTION_QUERY.contains("__schema"));
        assert!(INTROSPECTION_QUERY.contains("queryType"));
        assert!(INTROSPECTION_QUERY.contains("directives"));
    }

    #[test]
    fn test_introspection_query_braces_balanced() {
        let opens = INTROSPECTION_QUERY.matches('{').count();
        let closes = INTROSPECTION_QUERY.matches('}').count();
        assert_eq!(opens, closes);
    }
}

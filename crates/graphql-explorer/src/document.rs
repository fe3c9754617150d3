use crate::{OffsetRange, ResolveError, Result, SelectionKey};
use apollo_parser::cst::{self, CstNode};
use apollo_parser::{Parser, SyntaxElement, SyntaxKind, SyntaxNode};
use serde::Serialize;

/// The kind of an executable operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationType {
    Query,
    Mutation,
    Subscription,
}

impl OperationType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Query => "query",
            Self::Mutation => "mutation",
            Self::Subscription => "subscription",
        }
    }
}

impl std::fmt::Display for OperationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a top-level definition declares
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DefinitionKind {
    Operation {
        operation_type: OperationType,
        name: Option<String>,
    },
    Fragment {
        name: Option<String>,
    },
    /// Anything that is not executable, e.g. a type definition
    Other,
}

impl DefinitionKind {
    /// Kind label used in selection keys
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Operation { operation_type, .. } => operation_type.as_str(),
            Self::Fragment { .. } => "fragment",
            Self::Other => "unknown",
        }
    }

    /// Declared name, if any
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Operation { name, .. } | Self::Fragment { name } => name.as_deref(),
            Self::Other => None,
        }
    }
}

/// A top-level definition and where it sits in the source
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Definition {
    #[serde(flatten)]
    pub kind: DefinitionKind,
    /// Range of the definition's significant tokens; `None` when the
    /// location could not be recovered
    pub range: Option<OffsetRange>,
}

impl Definition {
    #[must_use]
    pub const fn new(kind: DefinitionKind, range: Option<OffsetRange>) -> Self {
        Self { kind, range }
    }

    #[must_use]
    pub fn selection_key(&self) -> SelectionKey {
        SelectionKey::new(self.kind.label(), self.kind.name())
    }
}

/// Top-level definitions of a parsed document, in source order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Document {
    definitions: Vec<Definition>,
}

impl Document {
    #[must_use]
    pub const fn new(definitions: Vec<Definition>) -> Self {
        Self { definitions }
    }

    /// Parse document text.
    ///
    /// Any syntax error fails the whole parse with
    /// [`ResolveError::Unparseable`]; no partial document is returned.
    ///
    /// Nesting is bounded by `apollo-parser`'s default recursion limit
    /// (500). Deeper documents, such as a selection set nested 600 levels,
    /// are reported as `Unparseable`.
    pub fn parse(source: &str) -> Result<Self> {
        let tree = Parser::new(source).parse();

        if let Some(error) = tree.errors().next() {
            tracing::debug!(
                error_count = tree.errors().count(),
                "Document has syntax errors"
            );
            return Err(ResolveError::Unparseable {
                message: error.message().to_string(),
            });
        }

        let definitions = tree
            .document()
            .definitions()
            .map(|definition| {
                let range = significant_range(definition.syntax());
                Definition::new(definition_kind(&definition), range)
            })
            .collect();

        Ok(Self { definitions })
    }

    #[must_use]
    pub fn definitions(&self) -> &[Definition] {
        &self.definitions
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

fn definition_kind(definition: &cst::Definition) -> DefinitionKind {
    match definition {
        cst::Definition::OperationDefinition(op) => {
            let operation_type = match op.operation_type() {
                Some(op_type) if op_type.mutation_token().is_some() => OperationType::Mutation,
                Some(op_type) if op_type.subscription_token().is_some() => {
                    OperationType::Subscription
                }
                // The `{ ... }` shorthand is a query
                _ => OperationType::Query,
            };

            DefinitionKind::Operation {
                operation_type,
                name: op.name().map(|name| name.text().to_string()),
            }
        }
        cst::Definition::FragmentDefinition(frag) => DefinitionKind::Fragment {
            name: frag
                .fragment_name()
                .and_then(|fragment_name| fragment_name.name())
                .map(|name| name.text().to_string()),
        },
        _ => DefinitionKind::Other,
    }
}

/// Range from the first to the last token that is not whitespace, a comma or
/// a comment. `None` if the node has no such token.
fn significant_range(node: &SyntaxNode) -> Option<OffsetRange> {
    let mut tokens = node
        .descendants_with_tokens()
        .filter_map(|element| match element {
            SyntaxElement::Token(token) if !is_trivia(token.kind()) => Some(token.text_range()),
            _ => None,
        });

    let first = tokens.next()?;
    let last = tokens.last().unwrap_or(first);

    Some(OffsetRange::new(
        OffsetRange::from(first).start,
        OffsetRange::from(last).end,
    ))
}

pub(crate) fn is_trivia(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::WHITESPACE | SyntaxKind::COMMENT | SyntaxKind::COMMA
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_operations_and_fragments() {
        let source = r"
            query GetUser($id: ID!) { user(id: $id) { id } }
            mutation UpdateUser { updateUser { id } }
            subscription OnUser { userChanged { id } }
            fragment UserFields on User { name }
        ";

        let document = Document::parse(source).unwrap();
        let kinds: Vec<_> = document
            .definitions()
            .iter()
            .map(|d| (d.kind.label(), d.kind.name()))
            .collect();

        assert_eq!(
            kinds,
            vec![
                ("query", Some("GetUser")),
                ("mutation", Some("UpdateUser")),
                ("subscription", Some("OnUser")),
                ("fragment", Some("UserFields")),
            ]
        );
    }

    #[test]
    fn test_anonymous_shorthand_is_query() {
        let document = Document::parse("{ a }").unwrap();
        assert_eq!(
            document.definitions()[0].kind,
            DefinitionKind::Operation {
                operation_type: OperationType::Query,
                name: None,
            }
        );
    }

    #[test]
    fn test_ranges_exclude_surrounding_trivia() {
        let source = "  # leading comment\n  query A { a } ,\n\n  fragment B on T { b }  \n";
        let document = Document::parse(source).unwrap();

        let query = document.definitions()[0].range.unwrap();
        assert_eq!(&source[query.start..query.end], "query A { a }");

        let fragment = document.definitions()[1].range.unwrap();
        assert_eq!(&source[fragment.start..fragment.end], "fragment B on T { b }");
    }

    #[test]
    fn test_ranges_are_ordered_and_disjoint() {
        let source = "query A { a } query B { b } fragment C on T { c }";
        let document = Document::parse(source).unwrap();

        let ranges: Vec<_> = document
            .definitions()
            .iter()
            .map(|d| d.range.unwrap())
            .collect();
        for pair in ranges.windows(2) {
            assert!(pair[0].end <= pair[1].start);
        }
    }

    #[test]
    fn test_type_system_definition_is_other() {
        let document = Document::parse("type Query { a: String }").unwrap();
        assert_eq!(document.definitions()[0].kind, DefinitionKind::Other);
        assert_eq!(document.definitions()[0].kind.label(), "unknown");
    }

    #[test]
    fn test_nesting_past_recursion_limit_is_unparseable() {
        let depth = 600;
        let source = format!("query Deep {}{}", "{ a ".repeat(depth), "}".repeat(depth));

        let result = Document::parse(&source);
        assert!(matches!(result, Err(ResolveError::Unparseable { .. })));
    }

    #[test]
    fn test_moderate_nesting_parses() {
        let depth = 50;
        let source = format!("query Deep {}{}", "{ a ".repeat(depth), "}".repeat(depth));

        let document = Document::parse(&source).unwrap();
        assert_eq!(document.definitions()[0].selection_key().as_str(), "query-Deep");
    }

    #[test]
    fn test_syntax_error_is_unparseable() {
        let result = Document::parse("query A { a ");
        assert!(matches!(result, Err(ResolveError::Unparseable { .. })));
    }
}

use crate::{
    token_range_at, Definition, Document, LineIndex, OffsetRange, Position, ResolveError, Result,
    SelectionKey,
};

/// Resolve the definition under a token to its selection key.
///
/// The document is parsed from scratch on every call. The first top-level
/// definition whose range encloses `token_range` (both ends inclusive) wins.
///
/// # Example
///
/// ```
/// use graphql_explorer::{resolve, OffsetRange, ResolveError};
///
/// let source = "query Foo { a } fragment Bar on T { b }";
///
/// // `a`
/// assert_eq!(resolve(source, OffsetRange::new(12, 13)).unwrap().as_str(), "query-Foo");
/// // `b`
/// assert_eq!(resolve(source, OffsetRange::new(36, 37)).unwrap().as_str(), "fragment-Bar");
/// // the space between the two definitions
/// assert_eq!(
///     resolve(source, OffsetRange::new(15, 16)),
///     Err(ResolveError::NoEnclosingDefinition)
/// );
/// ```
pub fn resolve(document_text: &str, token_range: OffsetRange) -> Result<SelectionKey> {
    let document = Document::parse(document_text)?;
    resolve_in_document(&document, token_range)
}

/// Resolve against an already parsed document
pub fn resolve_in_document(document: &Document, token_range: OffsetRange) -> Result<SelectionKey> {
    let definition = find_enclosing_definition(document, token_range)
        .ok_or(ResolveError::NoEnclosingDefinition)?;

    let key = definition.selection_key();
    tracing::debug!(
        start = token_range.start,
        end = token_range.end,
        key = %key,
        "Resolved token to definition"
    );
    Ok(key)
}

/// Resolve a raw editor position.
///
/// The position is first narrowed to the token under it, as an editor
/// widget would. A position past the end of the document lies outside every
/// definition.
pub fn resolve_at_position(document_text: &str, position: Position) -> Result<SelectionKey> {
    let document = Document::parse(document_text)?;

    let Some(offset) = LineIndex::new(document_text).position_to_offset(position) else {
        tracing::debug!(
            line = position.line,
            character = position.character,
            "Position is past the end of the document"
        );
        return Err(ResolveError::NoEnclosingDefinition);
    };

    resolve_in_document(&document, token_range_at(document_text, offset))
}

/// First definition, in source order, whose range encloses `token_range`.
///
/// Sibling ranges never overlap in a well-formed document. If a lenient
/// parse ever produces overlapping ranges, scan order breaks the tie.
/// Definitions without location data never match.
#[must_use]
pub fn find_enclosing_definition(
    document: &Document,
    token_range: OffsetRange,
) -> Option<&Definition> {
    document.definitions().iter().find(|definition| {
        let Some(range) = definition.range else {
            tracing::warn!(
                key = %definition.selection_key(),
                "Missing location information for definition"
            );
            return false;
        };
        range.encloses(token_range)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DefinitionKind, OperationType};

    const SOURCE: &str = "query Foo { a } fragment Bar on T { b }";

    fn operation(name: Option<&str>, range: Option<OffsetRange>) -> Definition {
        Definition::new(
            DefinitionKind::Operation {
                operation_type: OperationType::Query,
                name: name.map(str::to_string),
            },
            range,
        )
    }

    #[test]
    fn test_token_inside_definitions() {
        assert_eq!(
            resolve(SOURCE, OffsetRange::new(12, 13)).unwrap().as_str(),
            "query-Foo"
        );
        assert_eq!(
            resolve(SOURCE, OffsetRange::new(36, 37)).unwrap().as_str(),
            "fragment-Bar"
        );
    }

    #[test]
    fn test_boundaries_are_inclusive() {
        // `query` keyword at offset 0, closing brace ending at 15
        assert_eq!(
            resolve(SOURCE, OffsetRange::new(0, 5)).unwrap().as_str(),
            "query-Foo"
        );
        assert_eq!(
            resolve(SOURCE, OffsetRange::new(14, 15)).unwrap().as_str(),
            "query-Foo"
        );
        // `fragment` keyword at 16, final brace ending at 39
        assert_eq!(
            resolve(SOURCE, OffsetRange::new(16, 24)).unwrap().as_str(),
            "fragment-Bar"
        );
        assert_eq!(
            resolve(SOURCE, OffsetRange::new(38, 39)).unwrap().as_str(),
            "fragment-Bar"
        );
    }

    #[test]
    fn test_whitespace_between_definitions() {
        assert_eq!(
            resolve(SOURCE, OffsetRange::new(15, 16)),
            Err(ResolveError::NoEnclosingDefinition)
        );
    }

    #[test]
    fn test_token_straddling_two_definitions() {
        assert_eq!(
            resolve(SOURCE, OffsetRange::new(14, 17)),
            Err(ResolveError::NoEnclosingDefinition)
        );
    }

    #[test]
    fn test_anonymous_operation() {
        assert_eq!(
            resolve("{ a }", OffsetRange::new(2, 3)).unwrap().as_str(),
            "query-unknown"
        );
    }

    #[test]
    fn test_unparseable_regardless_of_range() {
        let source = "query Foo { a ";
        for range in [
            OffsetRange::new(0, 5),
            OffsetRange::new(12, 13),
            OffsetRange::empty(1000),
        ] {
            assert!(matches!(
                resolve(source, range),
                Err(ResolveError::Unparseable { .. })
            ));
        }
    }

    #[test]
    fn test_type_definition_resolves_to_unknown_kind() {
        let source = "type Query { a: String }";
        assert_eq!(
            resolve(source, OffsetRange::new(5, 10)).unwrap().as_str(),
            "unknown-unknown"
        );
    }

    #[test]
    fn test_first_match_wins_on_overlap() {
        let document = Document::new(vec![
            operation(Some("First"), Some(OffsetRange::new(0, 20))),
            operation(Some("Second"), Some(OffsetRange::new(5, 30))),
        ]);

        let key = resolve_in_document(&document, OffsetRange::new(6, 8)).unwrap();
        assert_eq!(key.as_str(), "query-First");

        let key = resolve_in_document(&document, OffsetRange::new(21, 22)).unwrap();
        assert_eq!(key.as_str(), "query-Second");
    }

    #[test]
    fn test_definition_without_location_is_skipped() {
        let document = Document::new(vec![
            operation(Some("Unlocated"), None),
            operation(Some("Located"), Some(OffsetRange::new(0, 10))),
        ]);

        let key = resolve_in_document(&document, OffsetRange::new(2, 3)).unwrap();
        assert_eq!(key.as_str(), "query-Located");

        let document = Document::new(vec![operation(Some("Unlocated"), None)]);
        assert_eq!(
            resolve_in_document(&document, OffsetRange::new(2, 3)),
            Err(ResolveError::NoEnclosingDefinition)
        );
    }

    #[test]
    fn test_resolve_at_position() {
        let source = "query Foo {\n  a\n}\n\nmutation Bar {\n  b\n}\n";

        assert_eq!(
            resolve_at_position(source, Position::new(1, 3)).unwrap().as_str(),
            "query-Foo"
        );
        assert_eq!(
            resolve_at_position(source, Position::new(5, 2)).unwrap().as_str(),
            "mutation-Bar"
        );
        assert_eq!(
            resolve_at_position(source, Position::new(3, 0)),
            Err(ResolveError::NoEnclosingDefinition)
        );
        assert_eq!(
            resolve_at_position(source, Position::new(42, 0)),
            Err(ResolveError::NoEnclosingDefinition)
        );
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let first = resolve(SOURCE, OffsetRange::new(12, 13));
        for _ in 0..3 {
            assert_eq!(resolve(SOURCE, OffsetRange::new(12, 13)), first);
        }
    }
}

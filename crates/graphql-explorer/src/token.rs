use crate::OffsetRange;
use apollo_parser::cst::CstNode;
use apollo_parser::{Parser, SyntaxElement};

/// Range of the token under a cursor at byte `offset`.
///
/// The token ending at the cursor is preferred, so a cursor placed right
/// after a name still selects that name. Failing that, a token starting at
/// the cursor is used. At the very end of an empty document this is an empty
/// range at `offset`.
///
/// Trivia (whitespace, commas, comments) are tokens too: a cursor in the gap
/// between two definitions lands on the gap.
#[must_use]
pub fn token_range_at(text: &str, offset: usize) -> OffsetRange {
    let tree = Parser::new(text).parse();
    let root = tree.document();

    let mut starting_here = None;
    for element in root.syntax().descendants_with_tokens() {
        let SyntaxElement::Token(token) = element else {
            continue;
        };

        let range = OffsetRange::from(token.text_range());
        if range.start < offset && offset <= range.end {
            return range;
        }
        if range.start == offset && !range.is_empty() && starting_here.is_none() {
            starting_here = Some(range);
        }
    }

    starting_here.unwrap_or_else(|| OffsetRange::empty(offset))
}

use crate::Position;

/// Line/character to byte offset conversion over a borrowed document.
///
/// Line starts are computed once; lookups binary search them and then walk
/// at most one line to count characters.
///
/// # Example
///
/// ```
/// use graphql_explorer::{LineIndex, Position};
///
/// let source = "query A { a }\nquery B { b }";
/// let index = LineIndex::new(source);
///
/// let offset = index.position_to_offset(Position::new(1, 6)).unwrap();
/// assert_eq!(&source[offset..offset + 1], "B");
/// assert_eq!(index.offset_to_position(offset), Position::new(1, 6));
/// ```
#[derive(Debug, Clone)]
pub struct LineIndex<'a> {
    text: &'a str,
    /// Byte offset of the start of each line; index 0 is always 0
    line_starts: Vec<usize>,
}

impl<'a> LineIndex<'a> {
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        let line_starts = std::iter::once(0)
            .chain(text.match_indices('\n').map(|(i, _)| i + 1))
            .collect();

        Self { text, line_starts }
    }

    /// Convert a line/character position to a byte offset.
    ///
    /// Returns `None` if the line does not exist. A character past the end of
    /// the line is clamped to the line end.
    #[must_use]
    pub fn position_to_offset(&self, position: Position) -> Option<usize> {
        let line_start = *self.line_starts.get(position.line)?;
        let line = self.line_text(position.line)?;

        let column = line
            .char_indices()
            .nth(position.character)
            .map_or(line.len(), |(byte, _)| byte);

        Some(line_start + column)
    }

    /// Convert a byte offset to a line/character position.
    ///
    /// Offsets past the end of the text map to the end of the last line.
    #[must_use]
    pub fn offset_to_position(&self, offset: usize) -> Position {
        let offset = offset.min(self.text.len());
        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(line) => line.saturating_sub(1),
        };

        let line_start = self.line_starts[line];
        let character = self
            .text
            .get(line_start..offset)
            .map_or(offset - line_start, |prefix| prefix.chars().count());

        Position { line, character }
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Text of a line without its line terminator
    fn line_text(&self, line: usize) -> Option<&'a str> {
        let start = *self.line_starts.get(line)?;
        let end = self
            .line_starts
            .get(line + 1)
            .map_or(self.text.len(), |next| next - 1);

        let text = &self.text[start..end];
        Some(text.strip_suffix('\r').unwrap_or(text))
    }
}

//! Recursive descent parser for the bracketed diagram notation.
//!
//! ```text
//! document   := ws* spell ws*
//! component* := (ws | '/')* (rune | spell | unit | triangular)*
//! rune       := word-char+
//! spell      := '(' component* ')'
//! unit       := '[' component* ']'
//! triangular := '<' word-char+ ':' component* '>'
//! ```
//!
//! Each group parser consumes exactly one opening delimiter, its components,
//! and the matching closing delimiter, and returns the node together with the
//! number of bytes it consumed. There is no backtracking.

use super::cursor::{Cursor, is_separator, is_space, is_word_char};
use crate::consts::DEFAULT_MAX_DEPTH;
use crate::error::{ParseError, SyntaxError};
use crate::tree::{Node, Shape};

/// Parse notation text into a composition tree using the default depth limit.
///
/// # Errors
///
/// Returns [`ParseError::Syntax`] if the text does not match the grammar and
/// [`ParseError::Structure`] if a group has a child count outside `{1, 2}`.
pub fn parse(text: &str) -> Result<Node, ParseError> {
    Parser::new().parse(text)
}

/// Notation parser with a configurable nesting limit.
#[derive(Debug, Clone, Copy)]
pub struct Parser {
    max_depth: usize,
}

impl Default for Parser {
    fn default() -> Self {
        Self { max_depth: DEFAULT_MAX_DEPTH }
    }
}

impl Parser {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Limit how many groups may be nested. The outermost spell counts as one.
    #[must_use]
    pub fn with_max_depth(self, max_depth: usize) -> Self {
        Self { max_depth }
    }

    #[must_use]
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Parse a whole document: a single spell with optional surrounding whitespace.
    ///
    /// # Errors
    ///
    /// See [`parse`].
    pub fn parse(&self, text: &str) -> Result<Node, ParseError> {
        let cursor = Cursor::new(text);
        let start = cursor.skip_while(0, is_space);
        let node = match cursor.char_at(start) {
            None => return Err(SyntaxError::NoDescription.into()),
            Some('(') => {
                let (node, consumed) = self.group(cursor, start, 1)?;
                let end = cursor.skip_while(start + consumed, is_space);
                if end < cursor.len() {
                    return Err(SyntaxError::TrailingInput { offset: end }.into());
                }
                node
            }
            Some(found) => return Err(SyntaxError::Malformed { found, offset: start }.into()),
        };

        tracing::debug!(
            complexity = node.complexity(),
            runes = node.leaf_names().len(),
            "parsed notation"
        );
        Ok(node)
    }

    /// Parse one bracketed group starting at its opening delimiter.
    fn group(&self, cursor: Cursor<'_>, start: usize, depth: usize) -> Result<(Node, usize), ParseError> {
        let Some(open) = cursor.char_at(start) else {
            return Err(SyntaxError::Unterminated { open: '(', offset: start }.into());
        };
        if open == '{' {
            return Err(SyntaxError::DefinitionsUnsupported { offset: start }.into());
        }
        if depth > self.max_depth {
            return Err(SyntaxError::TooDeep { limit: self.max_depth, offset: start }.into());
        }

        let body_start = start + open.len_utf8();
        let (shape, close, body_start) = match open {
            '(' => (Shape::Spell, ')', body_start),
            '[' => (Shape::Unit, ']', body_start),
            '<' => {
                let (shape, consumed) = prefix(cursor, body_start)?;
                (shape, '>', body_start + consumed)
            }
            found => return Err(SyntaxError::UnexpectedChar { found, offset: start }.into()),
        };

        let (children, consumed) = self.components(cursor, body_start, depth)?;
        let end = body_start + consumed;
        match cursor.char_at(end) {
            Some(c) if c == close => {}
            Some(found) => {
                return Err(SyntaxError::MismatchedClose { expected: close, found, offset: end }.into());
            }
            None => return Err(SyntaxError::Unterminated { open, offset: start }.into()),
        }

        let node = Node::compound(shape, children)?;
        Ok((node, end + close.len_utf8() - start))
    }

    /// Parse components up to (not including) a closing delimiter or the end of input.
    fn components(&self, cursor: Cursor<'_>, start: usize, depth: usize) -> Result<(Vec<Node>, usize), ParseError> {
        let mut children = Vec::new();
        let mut pos = start;

        loop {
            pos = cursor.skip_while(pos, is_separator);
            match cursor.char_at(pos) {
                None | Some(')' | ']' | '>') => break,
                Some('(' | '[' | '<' | '{') => {
                    let (node, consumed) = self.group(cursor, pos, depth + 1)?;
                    children.push(node);
                    pos += consumed;
                }
                Some(c) if is_word_char(c) => {
                    let end = cursor.word_end(pos);
                    children.push(Node::rune(cursor.slice(pos, end)));
                    pos = end;
                }
                Some(found) => return Err(SyntaxError::UnexpectedChar { found, offset: pos }.into()),
            }
        }

        Ok((children, pos - start))
    }
}

/// Parse the `X:` prefix of a triangular group. `pos` is just past the `<`.
fn prefix(cursor: Cursor<'_>, pos: usize) -> Result<(Shape, usize), SyntaxError> {
    let end = cursor.word_end(pos);
    if end == pos || cursor.char_at(end) != Some(':') {
        return Err(SyntaxError::MissingPrefix { offset: pos });
    }
    let word = cursor.slice(pos, end);
    let shape = Shape::from_prefix(word).ok_or_else(|| SyntaxError::UnknownPrefix {
        prefix: word.to_owned(),
        offset: pos,
    })?;
    Ok((shape, end + 1 - pos))
}

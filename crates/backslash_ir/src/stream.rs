//! The token stream contract fixers are written against.

use crate::{Token, TokenKind};

/// Bracket pair recognised by [`TokenStream::find_block_end`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BlockKind {
    /// `(` ... `)`
    Parenthesis,
    /// `{` ... `}`
    Brace,
    /// `[` ... `]`
    Bracket,
}

impl BlockKind {
    /// Opening and closing token kinds of this pair.
    pub const fn delimiters(self) -> (TokenKind, TokenKind) {
        match self {
            BlockKind::Parenthesis => (TokenKind::OpenParen, TokenKind::CloseParen),
            BlockKind::Brace => (TokenKind::OpenBrace, TokenKind::CloseBrace),
            BlockKind::Bracket => (TokenKind::OpenBracket, TokenKind::CloseBracket),
        }
    }
}

/// Ordered, index-addressed token sequence that can only grow by insertion.
///
/// Implementors provide storage (`len`, `token`, `insert_at`). Navigation is
/// derived from those and may be overridden when the storage can answer
/// faster, as [`TokenList`](crate::TokenList) does for `has_any_kind`.
///
/// Lookaround methods return `None` at the stream boundaries, so callers can
/// compare results without risking an out-of-range index.
pub trait TokenStream {
    /// Number of tokens.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Token at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    fn token(&self, index: usize) -> &Token;

    /// Insert `token` at `index`, shifting every token at or after `index`
    /// one position up.
    ///
    /// # Panics
    ///
    /// Panics if `index > self.len()`.
    fn insert_at(&mut self, index: usize, token: Token);

    /// Whether any token of one of `kinds` is present.
    fn has_any_kind(&self, kinds: &[TokenKind]) -> bool {
        (0..self.len()).any(|i| kinds.contains(&self.token(i).kind()))
    }

    /// Index of the first meaningful token after `index`.
    fn next_meaningful(&self, index: usize) -> Option<usize> {
        (index.saturating_add(1)..self.len()).find(|&i| self.token(i).is_meaningful())
    }

    /// Index of the last meaningful token before `index`.
    fn prev_meaningful(&self, index: usize) -> Option<usize> {
        (0..index.min(self.len()))
            .rev()
            .find(|&i| self.token(i).is_meaningful())
    }

    /// Index of the token closing the block opened at `open`.
    ///
    /// Returns `None` when `open` is not the opening delimiter of `block` or
    /// the block is never closed. Nested pairs of the same kind are skipped.
    fn find_block_end(&self, block: BlockKind, open: usize) -> Option<usize> {
        let (opener, closer) = block.delimiters();
        if open >= self.len() || !self.token(open).is(opener) {
            return None;
        }

        let mut depth = 0usize;
        for i in open..self.len() {
            let kind = self.token(i).kind();
            if kind == opener {
                depth += 1;
            } else if kind == closer {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
        }
        None
    }
}

//! `Vec`-backed token stream.

use std::fmt;
use std::ops::Index;

use rustc_hash::FxHashMap;

use crate::{Token, TokenKind, TokenStream};

/// A list of tokens with per-kind occurrence counts.
///
/// The counts are kept in step with `tokens` on every push and insert, so
/// [`TokenStream::has_any_kind`] answers without walking the list. Fixers use
/// it as a pre-filter to skip files they cannot touch.
#[derive(Clone, Default)]
pub struct TokenList {
    tokens: Vec<Token>,
    /// `kind_counts[k]` is the number of tokens of kind `k` in `tokens`.
    kind_counts: FxHashMap<TokenKind, usize>,
}

// Counts are derived from `tokens`; comparing tokens is enough.
impl PartialEq for TokenList {
    fn eq(&self, other: &Self) -> bool {
        self.tokens == other.tokens
    }
}
impl Eq for TokenList {}

impl TokenList {
    #[inline]
    pub fn new() -> Self {
        TokenList::default()
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        TokenList {
            tokens: Vec::with_capacity(capacity),
            kind_counts: FxHashMap::default(),
        }
    }

    pub fn from_vec(tokens: Vec<Token>) -> Self {
        let mut kind_counts = FxHashMap::default();
        for token in &tokens {
            *kind_counts.entry(token.kind()).or_insert(0) += 1;
        }
        TokenList {
            tokens,
            kind_counts,
        }
    }

    #[inline]
    pub fn push(&mut self, token: Token) {
        self.record(token.kind());
        self.tokens.push(token);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    #[inline]
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Number of tokens of `kind`.
    pub fn count_of(&self, kind: TokenKind) -> usize {
        self.kind_counts.get(&kind).copied().unwrap_or(0)
    }

    /// Reassemble the source text by concatenating every token.
    pub fn to_source(&self) -> String {
        let capacity = self.tokens.iter().map(|t| t.text().len()).sum();
        let mut source = String::with_capacity(capacity);
        for token in &self.tokens {
            source.push_str(token.text());
        }
        source
    }

    #[inline]
    pub fn into_vec(self) -> Vec<Token> {
        self.tokens
    }

    fn record(&mut self, kind: TokenKind) {
        *self.kind_counts.entry(kind).or_insert(0) += 1;
    }
}

impl TokenStream for TokenList {
    #[inline]
    fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    fn token(&self, index: usize) -> &Token {
        &self.tokens[index]
    }

    fn insert_at(&mut self, index: usize, token: Token) {
        self.record(token.kind());
        self.tokens.insert(index, token);
    }

    fn has_any_kind(&self, kinds: &[TokenKind]) -> bool {
        kinds.iter().any(|&kind| self.count_of(kind) > 0)
    }
}

impl Index<usize> for TokenList {
    type Output = Token;

    #[inline]
    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}

impl FromIterator<Token> for TokenList {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        TokenList::from_vec(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl fmt::Debug for TokenList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.tokens).finish()
    }
}

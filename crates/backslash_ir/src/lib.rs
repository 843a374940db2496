//! Token stream representation for backslash fixers.
//!
//! Fixers never see source text. They receive an already tokenized file as a
//! [`TokenStream`] and rewrite it in place. This crate provides:
//!
//! - [`Token`] / [`TokenKind`]: an immutable `(kind, text)` pair
//! - [`TokenStream`]: the navigation and mutation contract fixers rely on
//!   (meaningful-token lookaround, block matching, insertion)
//! - [`TokenList`]: the `Vec`-backed stream used by hosts and tests
//!
//! # Index Validity
//!
//! Every index into a stream is valid only until a token is inserted at or
//! before it. Fixers that rewrite several positions must compute all indices
//! first and apply insertions from the highest index down.

mod list;
mod stream;
mod token;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use list::TokenList;
pub use stream::{BlockKind, TokenStream};
pub use token::{Token, TokenKind};

//! Batch insertion of root namespace separators.
//!
//! Inserting a token shifts every later index up by one. The indices handed
//! to [`apply`] were computed against the unmodified stream, so they are
//! applied from the highest down: when index `i` is processed, nothing has
//! been inserted below it yet and it still names the original token.
//! Applying them in ascending order would put every separator after the
//! first one position too early.

use backslash_ir::{Token, TokenStream};

/// Insert `\` immediately before each token in `call_sites`.
///
/// `call_sites` must be strictly ascending and computed against the current
/// state of `tokens`, as returned by [`scan`](crate::scanner::scan).
pub fn apply<S>(tokens: &mut S, call_sites: &[usize])
where
    S: TokenStream + ?Sized,
{
    debug_assert!(
        call_sites.windows(2).all(|pair| pair[0] < pair[1]),
        "call sites must be strictly ascending: {call_sites:?}"
    );

    for &index in call_sites.iter().rev() {
        tokens.insert_at(index, Token::ns_separator());
    }
}

//! Read-only pass finding unqualified native function calls.
//!
//! The scanner never mutates the stream. It returns the indices of every
//! identifier that should receive a leading `\`, in ascending order, all
//! computed against the same unmodified stream. See [`crate::rewriter`] for
//! how those indices are applied.
//!
//! # Guards
//!
//! An identifier at index `i` qualifies only if, in this order:
//!
//! 1. it is a bare identifier,
//! 2. the next meaningful token is `(`,
//! 3. the previous meaningful token is not `::`, `new`, `->`, `?->`,
//!    `function`, or the `&` of a by-reference `function &name(`,
//! 4. the previous meaningful token is not `\` (already qualified, or part
//!    of a namespaced name),
//! 5. its name is in the [`TargetCatalog`],
//! 6. in opcache-only mode, an `in_array` call passes the literal `true` as
//!    its last argument.
//!
//! Positional checks come first since they reject almost every identifier;
//! the block scan for guard 6 runs only for `in_array` candidates.

use backslash_ir::{BlockKind, TokenKind, TokenStream};

use crate::{FunctionInvocationConfig, TargetCatalog};

/// The only target whose opcache specialisation depends on an argument.
const STRICT_MEMBERSHIP_FN: &str = "in_array";

/// Tokens that, directly before a name, make it something other than a
/// plain function call.
const NON_CALL_PREFIXES: [TokenKind; 5] = [
    TokenKind::DoubleColon,
    TokenKind::New,
    TokenKind::ObjectOperator,
    TokenKind::NullsafeObjectOperator,
    TokenKind::Function,
];

/// Indices of all qualifying call sites, ascending.
pub fn scan<S>(tokens: &S, catalog: &TargetCatalog, config: &FunctionInvocationConfig) -> Vec<usize>
where
    S: TokenStream + ?Sized,
{
    let strict_in_array = config.opcache_only();
    let mut call_sites = Vec::new();

    for index in 0..tokens.len() {
        if qualifies(tokens, index, catalog, strict_in_array) {
            tracing::trace!(index, name = tokens.token(index).text(), "native call site");
            call_sites.push(index);
        }
    }

    call_sites
}

fn qualifies<S>(tokens: &S, index: usize, catalog: &TargetCatalog, strict_in_array: bool) -> bool
where
    S: TokenStream + ?Sized,
{
    let token = tokens.token(index);
    if !token.is(TokenKind::Identifier) {
        return false;
    }

    let Some(open) = tokens.next_meaningful(index) else {
        return false;
    };
    if !tokens.token(open).is(TokenKind::OpenParen) {
        return false;
    }

    if let Some(prev) = tokens.prev_meaningful(index) {
        let prev_kind = tokens.token(prev).kind();
        if NON_CALL_PREFIXES.contains(&prev_kind) || is_by_reference_declaration(tokens, prev) {
            return false;
        }
        // Fully qualified already, or a relative namespaced name such as
        // `Foo\strlen()`. Namespace resolution is not attempted either way.
        if prev_kind == TokenKind::NsSeparator {
            return false;
        }
    }

    let name = token.text();
    if !catalog.contains(name) {
        return false;
    }

    if strict_in_array && name.eq_ignore_ascii_case(STRICT_MEMBERSHIP_FN) {
        return last_argument_is_true(tokens, open);
    }

    true
}

/// `function &name(`: the `&` at `amp` belongs to a declaration.
fn is_by_reference_declaration<S>(tokens: &S, amp: usize) -> bool
where
    S: TokenStream + ?Sized,
{
    tokens.token(amp).is(TokenKind::Ampersand)
        && tokens
            .prev_meaningful(amp)
            .is_some_and(|before| tokens.token(before).is(TokenKind::Function))
}

/// Whether the call whose argument list opens at `open` ends with the
/// literal `true`, as in `in_array($needle, $haystack, true)`.
fn last_argument_is_true<S>(tokens: &S, open: usize) -> bool
where
    S: TokenStream + ?Sized,
{
    let Some(close) = tokens.find_block_end(BlockKind::Parenthesis, open) else {
        return false;
    };
    tokens
        .prev_meaningful(close)
        .is_some_and(|last| tokens.token(last).is_word(TokenKind::Identifier, "true"))
}

#[cfg(test)]
mod tests;

//! Tokens and token kinds.

use std::fmt;

/// Lexical category of a [`Token`].
///
/// Only the kinds fixers dispatch on get their own variant. Every other
/// reserved word is [`TokenKind::Keyword`] and every other operator is
/// [`TokenKind::Operator`]; the token text tells them apart.
///
/// `true`, `false` and `null` are plain [`TokenKind::Identifier`] tokens,
/// matching how PHP itself tokenizes them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // === Trivia ===
    Whitespace,
    /// `// ...`, `# ...` or `/* ... */`
    Comment,
    /// `/** ... */`
    DocComment,

    // === Document structure ===
    /// `<?php` or `<?=`
    OpenTag,
    /// `?>`
    CloseTag,
    /// Text outside of PHP tags.
    InlineHtml,

    // === Names and literals ===
    /// Bare word: function, class or constant name.
    Identifier,
    /// `$name`
    Variable,
    /// Quoted string literal.
    String,
    Number,

    // === Keywords ===
    New,
    Function,
    /// Any other reserved word (`echo`, `return`, `isset`, ...).
    Keyword,

    // === Name resolution and member access ===
    /// `\`
    NsSeparator,
    /// `::`
    DoubleColon,
    /// `->`
    ObjectOperator,
    /// `?->`
    NullsafeObjectOperator,

    // === Delimiters ===
    OpenParen,
    CloseParen,
    OpenBrace,
    CloseBrace,
    OpenBracket,
    CloseBracket,
    Comma,
    Semicolon,
    /// `&`, used for by-reference declarations and arguments.
    Ampersand,
    /// Any other operator or punctuation.
    Operator,
}

impl TokenKind {
    /// Whitespace and comments: tokens that never change what code means.
    #[inline]
    pub const fn is_trivia(self) -> bool {
        matches!(
            self,
            TokenKind::Whitespace | TokenKind::Comment | TokenKind::DocComment
        )
    }

    /// Inverse of [`TokenKind::is_trivia`].
    #[inline]
    pub const fn is_meaningful(self) -> bool {
        !self.is_trivia()
    }

    /// Human-readable name for diagnostics and debug output.
    pub const fn display_name(self) -> &'static str {
        match self {
            TokenKind::Whitespace => "whitespace",
            TokenKind::Comment => "comment",
            TokenKind::DocComment => "doc comment",
            TokenKind::OpenTag => "open tag",
            TokenKind::CloseTag => "close tag",
            TokenKind::InlineHtml => "inline html",
            TokenKind::Identifier => "identifier",
            TokenKind::Variable => "variable",
            TokenKind::String => "string",
            TokenKind::Number => "number",
            TokenKind::New => "`new`",
            TokenKind::Function => "`function`",
            TokenKind::Keyword => "keyword",
            TokenKind::NsSeparator => "`\\`",
            TokenKind::DoubleColon => "`::`",
            TokenKind::ObjectOperator => "`->`",
            TokenKind::NullsafeObjectOperator => "`?->`",
            TokenKind::OpenParen => "`(`",
            TokenKind::CloseParen => "`)`",
            TokenKind::OpenBrace => "`{`",
            TokenKind::CloseBrace => "`}`",
            TokenKind::OpenBracket => "`[`",
            TokenKind::CloseBracket => "`]`",
            TokenKind::Comma => "`,`",
            TokenKind::Semicolon => "`;`",
            TokenKind::Ampersand => "`&`",
            TokenKind::Operator => "operator",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A single lexical token: its kind and its exact source text.
///
/// Tokens are immutable. Concatenating the text of every token in a stream
/// reproduces the source.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Token {
    kind: TokenKind,
    text: Box<str>,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, text: impl Into<Box<str>>) -> Self {
        Token {
            kind,
            text: text.into(),
        }
    }

    /// The root namespace separator `\`.
    pub fn ns_separator() -> Self {
        Token::new(TokenKind::NsSeparator, "\\")
    }

    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    #[inline]
    pub fn is_meaningful(&self) -> bool {
        self.kind.is_meaningful()
    }

    /// Check kind and text, comparing text ASCII case-insensitively.
    ///
    /// PHP names and the `true`/`false`/`null` literals are case-insensitive.
    pub fn is_word(&self, kind: TokenKind, text: &str) -> bool {
        self.kind == kind && self.text.eq_ignore_ascii_case(text)
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({:?})", self.kind, self.text)
    }
}

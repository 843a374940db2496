//! Fixture tokenizer for PHP snippets.
//!
//! Turns short PHP fragments into a [`TokenList`] so fixer tests can be
//! written against source text instead of hand-built token vectors. It is
//! lossless (`tokenize(s).to_source() == s`) but deliberately shallow: no
//! heredocs, no string interpolation, no casts.
//!
//! Input containing `<?php` is split into inline HTML and code the way PHP
//! does it. Input without an open tag is treated as code throughout, which
//! keeps test fixtures short.

use crate::{Token, TokenKind, TokenList};

/// Reserved words that PHP never tokenizes as a bare identifier.
///
/// `new` and `function` have dedicated kinds and are handled separately.
const KEYWORDS: &[&str] = &[
    "abstract", "and", "array", "as", "break", "callable", "case", "catch", "class",
    "clone", "const", "continue", "declare", "default", "die", "do", "echo", "else",
    "elseif", "empty", "enddeclare", "endfor", "endforeach", "endif", "endswitch",
    "endwhile", "enum", "eval", "exit", "extends", "final", "finally", "fn", "for",
    "foreach", "global", "goto", "if", "implements", "include", "include_once",
    "instanceof", "insteadof", "interface", "isset", "list", "match", "namespace", "or",
    "print", "private", "protected", "public", "readonly", "require", "require_once",
    "return", "static", "switch", "throw", "trait", "try", "unset", "use", "var",
    "while", "xor", "yield",
];

/// Multi-character operators, longest first.
const OPERATORS: &[&str] = &[
    "<=>", "**=", "...", "??=", "<<=", ">>=", "===", "!==", "==", "!=", "<>", "<=", ">=",
    "&&", "||", "??", "++", "--", "+=", "-=", "*=", "/=", ".=", "%=", "&=", "|=", "^=",
    "<<", ">>", "=>", "**",
];

/// Tokenize a PHP snippet.
pub fn tokenize(source: &str) -> TokenList {
    let mut scanner = FixtureScanner {
        source,
        pos: 0,
        in_code: !source.contains("<?php") && !source.contains("<?="),
        tokens: TokenList::new(),
    };
    while scanner.pos < source.len() {
        scanner.next_token();
    }
    scanner.tokens
}

/// Keyword classification of a bare word, ignoring ASCII case.
pub fn word_kind(word: &str) -> TokenKind {
    let lower = word.to_ascii_lowercase();
    match lower.as_str() {
        "new" => TokenKind::New,
        "function" => TokenKind::Function,
        _ if KEYWORDS.contains(&lower.as_str()) => TokenKind::Keyword,
        _ => TokenKind::Identifier,
    }
}

struct FixtureScanner<'a> {
    source: &'a str,
    pos: usize,
    in_code: bool,
    tokens: TokenList,
}

impl<'a> FixtureScanner<'a> {
    fn rest(&self) -> &'a str {
        &self.source[self.pos..]
    }

    fn emit(&mut self, kind: TokenKind, len: usize) {
        let text = &self.source[self.pos..self.pos + len];
        self.tokens.push(Token::new(kind, text));
        self.pos += len;
    }

    fn next_token(&mut self) {
        if !self.in_code {
            self.inline_html();
            return;
        }

        let rest = self.rest();
        let Some(first) = rest.chars().next() else {
            return;
        };

        if rest.starts_with("?>") {
            self.in_code = false;
            self.emit(TokenKind::CloseTag, 2);
        } else if first.is_whitespace() {
            let len = prefix_len(rest, char::is_whitespace);
            self.emit(TokenKind::Whitespace, len);
        } else if rest.starts_with("/**") && !rest.starts_with("/**/") {
            self.block_comment(TokenKind::DocComment);
        } else if rest.starts_with("/*") {
            self.block_comment(TokenKind::Comment);
        } else if rest.starts_with("//") || (first == '#' && !rest.starts_with("#[")) {
            let len = rest.find('\n').unwrap_or(rest.len());
            self.emit(TokenKind::Comment, len);
        } else if first == '$' && rest[1..].starts_with(is_ident_start) {
            let len = 1 + prefix_len(&rest[1..], is_ident_continue);
            self.emit(TokenKind::Variable, len);
        } else if is_ident_start(first) {
            let len = prefix_len(rest, is_ident_continue);
            let kind = word_kind(&rest[..len]);
            self.emit(kind, len);
        } else if first.is_ascii_digit() {
            let len = prefix_len(rest, |c| c.is_ascii_alphanumeric() || c == '_' || c == '.');
            self.emit(TokenKind::Number, len);
        } else if first == '\'' || first == '"' {
            let len = quoted_len(rest, first);
            self.emit(TokenKind::String, len);
        } else {
            self.punctuation(rest, first);
        }
    }

    fn inline_html(&mut self) {
        let rest = self.rest();
        let open = [rest.find("<?php"), rest.find("<?=")]
            .into_iter()
            .flatten()
            .min();
        match open {
            Some(0) => {
                let len = if rest.starts_with("<?php") { 5 } else { 3 };
                self.in_code = true;
                self.emit(TokenKind::OpenTag, len);
            }
            Some(at) => self.emit(TokenKind::InlineHtml, at),
            None => self.emit(TokenKind::InlineHtml, rest.len()),
        }
    }

    fn block_comment(&mut self, kind: TokenKind) {
        let rest = self.rest();
        let len = rest[2..].find("*/").map_or(rest.len(), |end| end + 4);
        self.emit(kind, len);
    }

    fn punctuation(&mut self, rest: &'a str, first: char) {
        let (kind, len) = if rest.starts_with("?->") {
            (TokenKind::NullsafeObjectOperator, 3)
        } else if rest.starts_with("->") {
            (TokenKind::ObjectOperator, 2)
        } else if rest.starts_with("::") {
            (TokenKind::DoubleColon, 2)
        } else if let Some(op) = OPERATORS.iter().find(|op| rest.starts_with(**op)) {
            (TokenKind::Operator, op.len())
        } else {
            let kind = match first {
                '\\' => TokenKind::NsSeparator,
                '(' => TokenKind::OpenParen,
                ')' => TokenKind::CloseParen,
                '{' => TokenKind::OpenBrace,
                '}' => TokenKind::CloseBrace,
                '[' => TokenKind::OpenBracket,
                ']' => TokenKind::CloseBracket,
                ',' => TokenKind::Comma,
                ';' => TokenKind::Semicolon,
                '&' => TokenKind::Ampersand,
                _ => TokenKind::Operator,
            };
            (kind, first.len_utf8())
        };
        self.emit(kind, len);
    }
}

fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || !c.is_ascii()
}

fn is_ident_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || (!c.is_ascii() && !c.is_whitespace())
}

/// Byte length of the longest prefix of `s` whose chars satisfy `pred`.
fn prefix_len(s: &str, pred: impl Fn(char) -> bool) -> usize {
    s.find(|c: char| !pred(c)).unwrap_or(s.len())
}

/// Byte length of a quoted literal including both quotes, or the rest of
/// the input when the literal is unterminated.
fn quoted_len(s: &str, quote: char) -> usize {
    let mut escaped = false;
    for (i, c) in s.char_indices().skip(1) {
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == quote {
            return i + c.len_utf8();
        }
    }
    s.len()
}

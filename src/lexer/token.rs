use serde::Serialize;

/// Syntactic class of a lexical token.
///
/// Every atomic lexical unit of a PHP source file is retained in source
/// order, including whitespace and comments, so that fixed-offset scanning
/// over the token sequence has stable indexing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    /// The `function` declaration keyword.
    Function,

    /// A bare identifier (PHP's `T_STRING`): a name that could be a call,
    /// a reference, or a declaration target.
    Identifier,

    /// Any reserved word other than `function` (`if`, `return`, `class`, ...).
    Keyword,

    /// A `$name` variable. Never counts as a use of a function name.
    Variable,

    /// Single-quoted, double-quoted, heredoc or nowdoc string, as one token.
    StringLiteral,

    /// Integer or float literal.
    Number,

    /// A `//`, `#` or `/* */` comment, as one token.
    Comment,

    /// A run of consecutive whitespace, coalesced into one token.
    Whitespace,

    /// `<?php`, `<?=` or `<?`.
    OpenTag,

    /// `?>`.
    CloseTag,

    /// Raw text outside PHP tags.
    InlineHtml,

    /// Operators and punctuation, one character per token.
    Punct,
}

impl TokenKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            TokenKind::Function => "function keyword",
            TokenKind::Identifier => "identifier",
            TokenKind::Keyword => "keyword",
            TokenKind::Variable => "variable",
            TokenKind::StringLiteral => "string",
            TokenKind::Number => "number",
            TokenKind::Comment => "comment",
            TokenKind::Whitespace => "whitespace",
            TokenKind::OpenTag => "open tag",
            TokenKind::CloseTag => "close tag",
            TokenKind::InlineHtml => "inline html",
            TokenKind::Punct => "punctuation",
        }
    }
}

/// An atomic lexical unit of PHP source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    /// Syntactic class.
    pub kind: TokenKind,

    /// Literal source text of the token.
    pub text: String,

    /// Line number where the token starts (1-indexed).
    pub line: usize,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, line: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            line,
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {:?} (line {})", self.kind.display_name(), self.text, self.line)
    }
}

//! Hand-written PHP scanner.
//!
//! The scanner walks the source byte-by-byte and emits every atomic lexical
//! unit, including whitespace, comments and inline HTML. Consecutive
//! whitespace collapses into a single token, matching how PHP's own
//! tokenizer emits `T_WHITESPACE`. Keywords are matched case-insensitively.

use super::token::{Token, TokenKind};

/// Reserved words other than `function`. A keyword can never be a function
/// name in PHP, so none of these may be classified as identifiers.
const KEYWORDS: &[&str] = &[
    "abstract", "and", "array", "as", "break", "callable", "case", "catch",
    "class", "clone", "const", "continue", "declare", "default", "die", "do",
    "echo", "else", "elseif", "empty", "enddeclare", "endfor", "endforeach",
    "endif", "endswitch", "endwhile", "enum", "eval", "exit", "extends",
    "final", "finally", "fn", "for", "foreach", "global", "goto", "if",
    "implements", "include", "include_once", "instanceof", "insteadof",
    "interface", "isset", "list", "match", "namespace", "new", "or", "print",
    "private", "protected", "public", "readonly", "require", "require_once",
    "return", "static", "switch", "throw", "trait", "try", "unset", "use",
    "var", "while", "xor", "yield", "true", "false", "null",
];

fn is_ident_start(byte: u8) -> bool {
    byte.is_ascii_alphabetic() || byte == b'_' || byte >= 0x80
}

fn is_ident_continue(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_' || byte >= 0x80
}

pub struct Scanner<'a> {
    src: &'a str,
    bytes: &'a [u8],
    pos: usize,
    line: usize,
    tokens: Vec<Token>,
}

impl<'a> Scanner<'a> {
    pub fn new(src: &'a str) -> Self {
        Self {
            src,
            bytes: src.as_bytes(),
            pos: 0,
            line: 1,
            tokens: Vec::new(),
        }
    }

    /// Scan the whole source, starting in HTML mode like PHP itself.
    pub fn scan(mut self) -> Vec<Token> {
        while self.pos < self.bytes.len() {
            self.scan_html();
            if self.pos < self.bytes.len() {
                self.scan_php();
            }
        }
        self.tokens
    }

    fn peek(&self, offset: usize) -> Option<u8> {
        self.bytes.get(self.pos + offset).copied()
    }

    /// Emit a token spanning `start..self.pos`, with `line` the line the
    /// token started on. Advances `self.line` past any newlines consumed.
    fn emit(&mut self, kind: TokenKind, start: usize, line: usize) {
        let src = self.src;
        let text = &src[start..self.pos];
        self.line += text.bytes().filter(|&b| b == b'\n').count();
        self.tokens.push(Token::new(kind, text, line));
    }

    /// Consume raw text up to the next PHP open tag, then the tag itself.
    fn scan_html(&mut self) {
        let start = self.pos;
        let line = self.line;

        while self.pos < self.bytes.len() {
            if self.bytes[self.pos] == b'<' && self.peek(1) == Some(b'?') {
                break;
            }
            self.pos += 1;
        }

        if self.pos > start {
            self.emit(TokenKind::InlineHtml, start, line);
        }

        if self.pos < self.bytes.len() {
            self.scan_open_tag();
        }
    }

    fn scan_open_tag(&mut self) {
        let start = self.pos;
        let line = self.line;

        self.pos += 2; // <?
        if self.peek(0) == Some(b'=') {
            self.pos += 1;
        } else {
            let rest = &self.bytes[self.pos..];
            let is_long_tag = rest.len() >= 3
                && rest[..3].eq_ignore_ascii_case(b"php")
                && rest.get(3).map_or(true, |&b| !is_ident_continue(b));
            if is_long_tag {
                self.pos += 3;
            }
        }

        self.emit(TokenKind::OpenTag, start, line);
    }

    /// Scan PHP code until a close tag or end of input.
    fn scan_php(&mut self) {
        while let Some(byte) = self.peek(0) {
            match byte {
                b'?' if self.peek(1) == Some(b'>') => {
                    let start = self.pos;
                    let line = self.line;
                    self.pos += 2;
                    self.emit(TokenKind::CloseTag, start, line);
                    return;
                }
                b if b.is_ascii_whitespace() => self.scan_whitespace(),
                b'$' => self.scan_variable(),
                b'\'' => self.scan_quoted_string(b'\''),
                b'"' => self.scan_quoted_string(b'"'),
                b'`' => self.scan_quoted_string(b'`'),
                b'/' if self.peek(1) == Some(b'/') => self.scan_line_comment(),
                b'#' => self.scan_line_comment(),
                b'/' if self.peek(1) == Some(b'*') => self.scan_block_comment(),
                b'<' if self.peek(1) == Some(b'<') && self.peek(2) == Some(b'<') => {
                    self.scan_heredoc()
                }
                b if b.is_ascii_digit() => self.scan_number(),
                b'.' if self.peek(1).is_some_and(|b| b.is_ascii_digit()) => self.scan_number(),
                b if is_ident_start(b) => self.scan_word(),
                _ => {
                    let start = self.pos;
                    let line = self.line;
                    self.pos += 1;
                    self.emit(TokenKind::Punct, start, line);
                }
            }
        }
    }

    fn scan_whitespace(&mut self) {
        let start = self.pos;
        let line = self.line;
        while self.peek(0).is_some_and(|b| b.is_ascii_whitespace()) {
            self.pos += 1;
        }
        self.emit(TokenKind::Whitespace, start, line);
    }

    fn scan_variable(&mut self) {
        let start = self.pos;
        let line = self.line;
        self.pos += 1; // $
        if self.peek(0).is_some_and(is_ident_start) {
            while self.peek(0).is_some_and(is_ident_continue) {
                self.pos += 1;
            }
            self.emit(TokenKind::Variable, start, line);
        } else {
            self.emit(TokenKind::Punct, start, line);
        }
    }

    fn scan_word(&mut self) {
        let start = self.pos;
        let line = self.line;
        while self.peek(0).is_some_and(is_ident_continue) {
            self.pos += 1;
        }

        let word = &self.src[start..self.pos];
        let lower = word.to_ascii_lowercase();
        let kind = if lower == "function" {
            TokenKind::Function
        } else if KEYWORDS.contains(&lower.as_str()) {
            TokenKind::Keyword
        } else {
            TokenKind::Identifier
        };

        self.emit(kind, start, line);
    }

    fn scan_number(&mut self) {
        let start = self.pos;
        let line = self.line;
        while let Some(b) = self.peek(0) {
            if b.is_ascii_alphanumeric() || b == b'.' || b == b'_' {
                self.pos += 1;
                // Exponent sign: 1e+5, 1E-5
                if (b == b'e' || b == b'E')
                    && self.peek(0).is_some_and(|s| s == b'+' || s == b'-')
                    && self.peek(1).is_some_and(|d| d.is_ascii_digit())
                {
                    self.pos += 1;
                }
            } else {
                break;
            }
        }
        self.emit(TokenKind::Number, start, line);
    }

    fn scan_line_comment(&mut self) {
        let start = self.pos;
        let line = self.line;
        while let Some(b) = self.peek(0) {
            if b == b'\n' {
                break;
            }
            // A line comment also ends at a close tag.
            if b == b'?' && self.peek(1) == Some(b'>') {
                break;
            }
            self.pos += 1;
        }
        self.emit(TokenKind::Comment, start, line);
    }

    fn scan_block_comment(&mut self) {
        let start = self.pos;
        let line = self.line;
        self.pos += 2; // /*
        while self.pos < self.bytes.len() {
            if self.bytes[self.pos] == b'*' && self.peek(1) == Some(b'/') {
                self.pos += 2;
                break;
            }
            self.pos += 1;
        }
        self.emit(TokenKind::Comment, start, line);
    }

    fn scan_quoted_string(&mut self, quote: u8) {
        let start = self.pos;
        let line = self.line;
        self.pos += 1; // opening quote
        while let Some(b) = self.peek(0) {
            if b == b'\\' && self.peek(1).is_some() {
                self.pos += 2;
            } else if b == quote {
                self.pos += 1;
                break;
            } else {
                self.pos += 1;
            }
        }
        self.emit(TokenKind::StringLiteral, start, line);
    }

    /// Heredoc (`<<<LABEL`) and nowdoc (`<<<'LABEL'`) strings, emitted as a
    /// single string token through the closing label.
    fn scan_heredoc(&mut self) {
        let start = self.pos;
        let line = self.line;
        self.pos += 3; // <<<

        while self.peek(0).is_some_and(|b| b == b' ' || b == b'\t') {
            self.pos += 1;
        }
        let quote = match self.peek(0) {
            Some(b @ (b'\'' | b'"')) => {
                self.pos += 1;
                Some(b)
            }
            _ => None,
        };

        let label_start = self.pos;
        while self.peek(0).is_some_and(is_ident_continue) {
            self.pos += 1;
        }
        let label = self.src[label_start..self.pos].to_string();

        if let Some(q) = quote {
            if self.peek(0) == Some(q) {
                self.pos += 1;
            }
        }

        if label.is_empty() {
            // Not actually a heredoc opener; emit what was consumed as-is.
            self.emit(TokenKind::Punct, start, line);
            return;
        }

        // Skip to the end of the opener line, then look for a line whose
        // first word (after optional indentation) is the closing label.
        while self.peek(0).is_some_and(|b| b != b'\n') {
            self.pos += 1;
        }
        while self.pos < self.bytes.len() {
            self.pos += 1; // the newline
            let mut probe = self.pos;
            while self.bytes.get(probe).is_some_and(|&b| b == b' ' || b == b'\t') {
                probe += 1;
            }
            let after_label = probe + label.len();
            let matches_label = self
                .bytes
                .get(probe..after_label)
                .is_some_and(|s| s == label.as_bytes())
                && !self.bytes.get(after_label).copied().is_some_and(is_ident_continue);
            if matches_label {
                self.pos = after_label;
                break;
            }
            while self.peek(0).is_some_and(|b| b != b'\n') {
                self.pos += 1;
            }
        }

        self.emit(TokenKind::StringLiteral, start, line);
    }
}

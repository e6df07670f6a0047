//! PHP tokenizer.
//!
//! Converts one source file's text into an ordered sequence of [`Token`]s.
//! Every atomic lexical unit is retained in source order (whitespace and
//! comments included), since the declaration indexer relies on stable
//! fixed-offset indexing into the token sequence.

mod scanner;
mod token;

pub use token::{Token, TokenKind};

use scanner::Scanner;
use std::path::Path;
use thiserror::Error;

/// Tokenization failures. All of these are per-file and non-fatal: the
/// affected file is excluded from both analysis phases and the run continues.
#[derive(Error, Debug)]
pub enum TokenizeError {
    #[error("failed to read file: {0}")]
    Read(#[from] std::io::Error),
    #[error("file is not valid UTF-8")]
    NotUtf8,
    #[error("file produced no tokens")]
    Empty,
}

/// Tokenize raw source text.
pub fn tokenize(source: &str) -> Vec<Token> {
    Scanner::new(source).scan()
}

/// Read and tokenize a file, with an explicit "no tokens" signal for empty
/// or unreadable input. Never returns a partially tokenized sequence.
pub fn tokenize_file(path: &Path) -> Result<Vec<Token>, TokenizeError> {
    let bytes = std::fs::read(path)?;
    let source = String::from_utf8(bytes).map_err(|_| TokenizeError::NotUtf8)?;

    let tokens = tokenize(&source);
    if tokens.is_empty() {
        return Err(TokenizeError::Empty);
    }
    Ok(tokens)
}

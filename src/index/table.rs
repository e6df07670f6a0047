use crate::discovery::SourceFile;
use crate::lexer::{self, Token};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Mapping from file path to that file's ordered token sequence.
///
/// Built once during the first traversal and read by both analysis phases;
/// re-tokenizing on the second pass would be correct but wasteful, so the
/// table trades memory for doing the lexing work exactly once. Files that
/// produced no tokens are simply absent.
#[derive(Debug, Default)]
pub struct TokenTable {
    files: BTreeMap<PathBuf, Vec<Token>>,
}

impl TokenTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, file: PathBuf, tokens: Vec<Token>) {
        self.files.insert(file, tokens);
    }

    pub fn tokens(&self, file: &Path) -> Option<&[Token]> {
        self.files.get(file).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Path, &[Token])> {
        self.files.iter().map(|(path, tokens)| (path.as_path(), tokens.as_slice()))
    }

    /// Number of files that tokenized successfully.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Sequential token table builder.
pub struct TableBuilder {
    table: TokenTable,
    skipped: usize,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self {
            table: TokenTable::new(),
            skipped: 0,
        }
    }

    /// Tokenize one file into the table. A file that fails to tokenize
    /// (unreadable, binary, empty) is skipped with a debug log; it never
    /// aborts the run.
    pub fn process_file(&mut self, file: &SourceFile) {
        match lexer::tokenize_file(&file.path) {
            Ok(tokens) => {
                self.table.insert(file.path.clone(), tokens);
            }
            Err(e) => {
                debug!("Skipping {} (continuing): {}", file.path.display(), e);
                self.skipped += 1;
            }
        }
    }

    /// Number of files skipped so far.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn build(self) -> TokenTable {
        self.table
    }
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Parallel token table builder using rayon.
///
/// Tokenization is embarrassingly parallel: each file is lexed
/// independently and the results are merged afterwards, so there is no
/// shared mutable state between workers.
pub struct ParallelTableBuilder;

impl ParallelTableBuilder {
    pub fn new() -> Self {
        Self
    }

    pub fn build_from_files(&self, files: &[SourceFile]) -> TokenTable {
        let results: Vec<_> = files
            .par_iter()
            .map(|file| (file.path.clone(), lexer::tokenize_file(&file.path)))
            .collect();

        let mut table = TokenTable::new();
        for (path, result) in results {
            match result {
                Ok(tokens) => table.insert(path, tokens),
                Err(e) => {
                    debug!("Skipping {} (continuing): {}", path.display(), e);
                }
            }
        }
        table
    }
}

impl Default for ParallelTableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//! deadphp - Find unused function declarations in PHP codebases
//!
//! This library performs a purely lexical, two-phase analysis over a
//! directory tree of PHP files. It has no symbol table, no scoping rules
//! and no knowledge of includes; a name used anywhere in the scanned corpus
//! satisfies every declaration of that name.
//!
//! # Architecture
//!
//! The analysis pipeline consists of:
//! 1. **File Discovery** - Find all .php files under the root
//! 2. **Tokenization** - Lex each file into a token table, kept in memory
//! 3. **Declaration Indexing** - Extract function declaration sites
//! 4. **Usage Elimination** - Prune every name seen outside its declaration
//! 5. **Reporting** - Render the surviving index as terminal or JSON output

pub mod analysis;
pub mod discovery;
pub mod index;
pub mod lexer;
pub mod report;

pub use analysis::{DeclarationIndexer, UsageEliminator};
pub use discovery::{FileFinder, SourceFile};
pub use index::{DeclarationIndex, DeclarationSite, ParallelTableBuilder, TableBuilder, TokenTable};
pub use lexer::{Token, TokenKind};
pub use report::{Reporter, ReportFormat};

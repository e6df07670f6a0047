//! Recursive discovery of PHP source files.

mod file_finder;

pub use file_finder::{is_php_file, FileFinder, SourceFile};

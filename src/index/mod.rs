//! Shared data model for the two analysis phases: the per-file token table
//! and the declaration index it is distilled into.

mod declarations;
mod table;

pub use declarations::{DeclarationIndex, DeclarationSite};
pub use table::{ParallelTableBuilder, TableBuilder, TokenTable};

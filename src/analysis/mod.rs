//! The two-phase token-matching analysis.
//!
//! Phase 1 ([`DeclarationIndexer`]) distills the token table into a
//! declaration index. Phase 2 ([`UsageEliminator`]) rescans the same
//! tokens and prunes every name seen outside its own declaration site(s).

mod eliminator;
mod indexer;

pub use eliminator::UsageEliminator;
pub use indexer::DeclarationIndexer;

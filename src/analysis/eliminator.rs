use crate::index::{DeclarationIndex, TokenTable};
use crate::lexer::TokenKind;
use tracing::debug;

/// Phase 2: rescan every file's token sequence and remove from the index
/// each name with at least one occurrence outside its own declaration
/// site(s). What survives is the unused set.
pub struct UsageEliminator;

impl UsageEliminator {
    pub fn new() -> Self {
        Self
    }

    /// Prune the index down to names with zero confirmed uses.
    ///
    /// Elimination is eager: the first non-declaration occurrence of a name
    /// removes the whole entry, and later occurrences look up an absent key
    /// and are no-ops. Removal is monotonic, so the result is independent
    /// of file traversal order, and running the eliminator again over an
    /// already-pruned index changes nothing.
    pub fn eliminate(&self, table: &TokenTable, mut index: DeclarationIndex) -> DeclarationIndex {
        let before = index.len();

        for (file, tokens) in table.iter() {
            for token in tokens {
                if token.kind != TokenKind::Identifier {
                    continue;
                }
                let name = token.text.as_str();
                if index.sites(name).is_none() {
                    continue;
                }

                // An occurrence matching a recorded (file, line) site is
                // the declaration itself, not a use. Matching is by line,
                // not column: two declarations sharing a physical line can
                // shadow a genuine use on that line. Accepted limitation.
                if !index.is_declaration_site(name, file, token.line) {
                    index.remove(name);
                }
            }
        }

        debug!("Eliminated {} used names, {} remain", before - index.len(), index.len());
        index
    }
}

impl Default for UsageEliminator {
    fn default() -> Self {
        Self::new()
    }
}

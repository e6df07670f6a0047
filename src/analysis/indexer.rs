use crate::index::{DeclarationIndex, DeclarationSite, TokenTable};
use crate::lexer::TokenKind;
use tracing::debug;

/// Token offset from the `function` keyword to the declared name. The
/// intervening slot is the coalesced whitespace between them, or a `&`
/// by-reference marker when the name follows the keyword with no space.
const NAME_OFFSET: usize = 2;

/// Phase 1: scan each file's token sequence once and extract every
/// function declaration site.
pub struct DeclarationIndexer;

impl DeclarationIndexer {
    pub fn new() -> Self {
        Self
    }

    /// Build the declaration index from the token table. The table is not
    /// mutated; the index is handed on to the usage eliminator.
    pub fn index(&self, table: &TokenTable) -> DeclarationIndex {
        let mut index = DeclarationIndex::new();

        for (file, tokens) in table.iter() {
            for (i, token) in tokens.iter().enumerate() {
                if token.kind != TokenKind::Function {
                    continue;
                }

                // A declaration keyword with no identifier at the fixed
                // offset (anonymous functions, unusual token layouts) is
                // skipped silently. Known limitation, not an error.
                let Some(name_token) = tokens.get(i + NAME_OFFSET) else {
                    continue;
                };
                if name_token.kind != TokenKind::Identifier {
                    continue;
                }

                let name = name_token.text.trim();
                if name.is_empty() {
                    continue;
                }

                index.record(name, DeclarationSite::new(file.to_path_buf(), name_token.line));
            }
        }

        debug!(
            "Indexed {} declared names ({} sites)",
            index.len(),
            index.site_count()
        );
        index
    }
}

impl Default for DeclarationIndexer {
    fn default() -> Self {
        Self::new()
    }
}

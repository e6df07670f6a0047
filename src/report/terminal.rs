use crate::index::DeclarationIndex;
use colored::Colorize;
use miette::Result;

const SEPARATOR: &str = "=======================================";

/// Terminal reporter with colored output.
///
/// Each surviving declaration site is one report line; a name left with two
/// sites yields two lines. The summary tail is always printed, zero count
/// included.
pub struct TerminalReporter;

impl TerminalReporter {
    pub fn new() -> Self {
        Self
    }

    pub fn report(&self, unused: &DeclarationIndex) -> Result<()> {
        if unused.is_empty() {
            println!("{}", "No unused functions found.".green());
        }

        let mut count = 0;
        for (name, sites) in unused.sorted_entries() {
            for site in sites {
                println!(
                    "'{}' in {} on line {}",
                    name.yellow(),
                    site.file.display().to_string().cyan(),
                    site.line
                );
                count += 1;
            }
        }

        println!("{}", SEPARATOR.dimmed());
        println!(
            "Found {} unused function{}.",
            count,
            if count == 1 { "" } else { "s" }
        );

        Ok(())
    }
}

impl Default for TerminalReporter {
    fn default() -> Self {
        Self::new()
    }
}

use crate::index::DeclarationIndex;
use miette::{IntoDiagnostic, Result};
use serde::Serialize;
use std::path::PathBuf;

/// JSON reporter for programmatic output.
pub struct JsonReporter {
    output_path: Option<PathBuf>,
}

impl JsonReporter {
    pub fn new(output_path: Option<PathBuf>) -> Self {
        Self { output_path }
    }

    pub fn report(&self, unused: &DeclarationIndex) -> Result<()> {
        let report = JsonReport::from_index(unused);
        let json = serde_json::to_string_pretty(&report).into_diagnostic()?;

        if let Some(path) = &self.output_path {
            std::fs::write(path, &json).into_diagnostic()?;
            println!("Report written to: {}", path.display());
        } else {
            println!("{}", json);
        }

        Ok(())
    }
}

#[derive(Serialize)]
struct JsonReport {
    version: &'static str,
    total_unused: usize,
    functions: Vec<JsonFunction>,
}

#[derive(Serialize)]
struct JsonFunction {
    name: String,
    declarations: Vec<JsonSite>,
}

#[derive(Serialize)]
struct JsonSite {
    file: String,
    line: usize,
}

impl JsonReport {
    fn from_index(unused: &DeclarationIndex) -> Self {
        let functions: Vec<JsonFunction> = unused
            .sorted_entries()
            .into_iter()
            .map(|(name, sites)| JsonFunction {
                name: name.to_string(),
                declarations: sites
                    .iter()
                    .map(|site| JsonSite {
                        file: site.file.to_string_lossy().to_string(),
                        line: site.line,
                    })
                    .collect(),
            })
            .collect();

        Self {
            version: "1.0",
            total_unused: unused.site_count(),
            functions,
        }
    }
}

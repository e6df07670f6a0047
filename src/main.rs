use clap::Parser;
use colored::Colorize;
use miette::{bail, Result};
use std::path::PathBuf;
use tracing::info;

use deadphp::analysis::{DeclarationIndexer, UsageEliminator};
use deadphp::discovery::FileFinder;
use deadphp::index::{ParallelTableBuilder, TableBuilder};
use deadphp::report::{Reporter, ReportFormat};

/// deadphp - Find unused function declarations in PHP codebases
#[derive(Parser, Debug)]
#[command(name = "deadphp")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Root directory to scan for .php files
    path: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "terminal")]
    format: OutputFormat,

    /// Output file (for json format)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Tokenize files in parallel
    #[arg(long)]
    parallel: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Quiet mode - only output results
    #[arg(short, long)]
    quiet: bool,
}

#[derive(clap::ValueEnum, Clone, Debug, Default)]
enum OutputFormat {
    #[default]
    Terminal,
    Json,
}

impl From<OutputFormat> for ReportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Terminal => ReportFormat::Terminal,
            OutputFormat::Json => ReportFormat::Json,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.quiet);

    info!("deadphp v{}", env!("CARGO_PKG_VERSION"));

    // Both usage-level failures are fatal before any scanning happens.
    if !cli.path.is_dir() || std::fs::read_dir(&cli.path).is_err() {
        bail!(
            "'{}' is not a readable directory\n\nUSAGE: deadphp <root_directory>",
            cli.path.display()
        );
    }

    run_analysis(&cli)
}

fn init_logging(verbose: bool, quiet: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run_analysis(cli: &Cli) -> Result<()> {
    use indicatif::{ProgressBar, ProgressStyle};
    use std::time::Instant;

    let start_time = Instant::now();

    // Step 1: Discover files
    info!("Discovering files...");
    let finder = FileFinder::new();
    let files = finder.find_files(&cli.path);

    info!("Found {} files to analyze", files.len());

    if files.is_empty() {
        println!("{}", "No PHP files found.".yellow());
        return Ok(());
    }

    // Step 2: Tokenize every file into the token table
    let table = if cli.parallel {
        if !cli.quiet {
            println!(
                "{}",
                format!("Parallel mode: tokenizing {} files...", files.len()).cyan()
            );
        }
        ParallelTableBuilder::new().build_from_files(&files)
    } else {
        let pb = if cli.quiet {
            ProgressBar::hidden()
        } else {
            let pb = ProgressBar::new(files.len() as u64);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len}")
                    .unwrap()
                    .progress_chars("#>-"),
            );
            pb
        };

        info!("Tokenizing files...");
        let mut builder = TableBuilder::new();
        for file in &files {
            builder.process_file(file);
            pb.inc(1);
        }
        pb.finish_and_clear();

        if builder.skipped() > 0 {
            info!("Skipped {} files that produced no tokens", builder.skipped());
        }
        builder.build()
    };

    info!("Tokenized {} of {} files", table.len(), files.len());

    // Step 3: Index declaration sites
    info!("Indexing function declarations...");
    let indexer = DeclarationIndexer::new();
    let index = indexer.index(&table);

    info!("Found {} declared function names", index.len());

    // Step 4: Eliminate every name with a confirmed use
    info!("Scanning for uses...");
    let eliminator = UsageEliminator::new();
    let unused = eliminator.eliminate(&table, index);

    // Step 5: Report survivors
    let reporter = Reporter::new(cli.format.clone().into(), cli.output.clone());
    reporter.report(&unused)?;

    let elapsed = start_time.elapsed();
    info!("Analysis completed in {:.2}s", elapsed.as_secs_f64());

    Ok(())
}

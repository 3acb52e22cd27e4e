/// DirScope terminal frontend.
///
/// Wires the core pipeline to the command line: resolves the scan path,
/// picks a report sink and metadata provider from the arguments, drives
/// the scan with a progress bar, and prints the completion summary.
pub mod cli;
pub mod progress;

use anyhow::Context;
use clap::Parser;
use cli::{Args, OutputFormat};
use dirscope_core::metadata::{ExtendedMetadata, NoExtendedMetadata};
use dirscope_core::model::size::{format_count, format_duration, format_size};
use dirscope_core::model::ScanStats;
use dirscope_core::platform::SpotlightMetadata;
use dirscope_core::report::{CsvReport, JsonLinesReport, ReportSink};
use dirscope_core::scanner::{run_scan, NullProgress};
use progress::TerminalProgress;
use tracing::{info, warn};

/// Parse arguments and run one scan.
pub fn run() -> anyhow::Result<()> {
    run_with(Args::parse())
}

fn run_with(args: Args) -> anyhow::Result<()> {
    let root = args
        .path
        .canonicalize()
        .with_context(|| format!("cannot resolve {}", args.path.display()))?;
    anyhow::ensure!(root.is_dir(), "{} is not a directory", root.display());

    let output = args
        .output
        .unwrap_or_else(|| cli::default_output_name(&root, args.format, chrono::Local::now()));

    let provider: Box<dyn ExtendedMetadata> = if args.extended {
        if SpotlightMetadata::is_available() {
            Box::new(SpotlightMetadata)
        } else {
            warn!("Spotlight (mdls) is unavailable; Tags and Kind columns will be empty");
            Box::new(NoExtendedMetadata)
        }
    } else {
        Box::new(NoExtendedMetadata)
    };

    let mut sink: Box<dyn ReportSink> = match args.format {
        OutputFormat::Csv => Box::new(
            CsvReport::create(&output)
                .with_context(|| format!("cannot create {}", output.display()))?,
        ),
        OutputFormat::Jsonl => Box::new(
            JsonLinesReport::create(&output)
                .with_context(|| format!("cannot create {}", output.display()))?,
        ),
    };

    info!("Scanning {}", root.display());
    let mut stats = if args.quiet {
        run_scan(&root, sink.as_mut(), provider.as_ref(), &mut NullProgress)?
    } else {
        let mut bar = TerminalProgress::new();
        let result = run_scan(&root, sink.as_mut(), provider.as_ref(), &mut bar);
        bar.finish();
        result?
    };
    stats.output = Some(output);

    print_summary(&stats);
    Ok(())
}

/// Terminal rendering of the completion summary.
fn print_summary(stats: &ScanStats) {
    println!("Directory Metadata Extraction Results:");
    println!();
    println!("  Directory scanned: {}", stats.root.display());
    println!("  Items processed:   {}", format_count(stats.processed));
    println!("    - Directories:   {}", format_count(stats.directories));
    println!("    - Files:         {}", format_count(stats.files));
    println!("    - Errors:        {}", format_count(stats.errors));
    println!("  Max depth:         {} levels", stats.max_levels);
    println!(
        "  Total size:        {:.2} MB ({})",
        stats.total_size_mb(),
        format_size(stats.total_size)
    );
    if let Some(output) = &stats.output {
        println!("  Output file:       {}", output.display());
    }
    println!("  Processing time:   {}", format_duration(stats.duration));
}

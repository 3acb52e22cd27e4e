//! DirScope — directory metadata extraction tool.
//!
//! Thin binary entry point. All logic lives in the `dirscope-core`
//! and `dirscope-cli` crates.

fn main() -> anyhow::Result<()> {
    // Initialise structured logging. Diagnostics go to stderr so they
    // never interleave with the progress bar's own stream handling.
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_writer(std::io::stderr)
        .init();

    dirscope_cli::run()
}

//! Fallacy trainer entry point.
//!
//! Loads the built-in content catalog and prints how many fallacies, quiz
//! questions, daily challenges, and badges it holds. Logs go to stderr and are
//! filtered with `RUST_LOG`; stdout carries only the summary.

mod report;

use anyhow::{Context, Result};
use fallacy_catalog::Catalog;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let catalog = Catalog::builtin().context("failed to load the built-in catalog")?;
    info!(
        badge_points = catalog.total_badge_points(),
        "Built-in catalog ready"
    );

    let stdout = std::io::stdout();
    report::write_summary(&mut stdout.lock(), catalog).context("failed to write summary")?;

    Ok(())
}

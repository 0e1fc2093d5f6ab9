// ============================================================================
// Currency Value Demo
// Prints the sum of two sample amounts and whether it equals $9.25
// ============================================================================

use currency_value::report;
use std::io::{self, Write};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "logging")]
    init_tracing();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    report::run(&mut out)?;
    out.flush()?;

    Ok(())
}

// Logs go to stderr; stdout carries only the report.
#[cfg(feature = "logging")]
fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

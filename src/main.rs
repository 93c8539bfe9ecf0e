//! docbatch CLI entry point
//!
//! # Examples
//!
//! ```bash
//! # Pack an extracted archive into batch artifacts
//! docbatch pack ./extracted --project-name "Operator Support" --project-code opsup
//!
//! # Override chunking on the command line
//! docbatch pack ./extracted -n "Billing" -c billing --chunk-size 4000 --overlap 100
//!
//! # Show configuration
//! docbatch show-config
//! ```

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use docbatch::cli::{run, Cli};

fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "docbatch=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

//! Binary entry point: set up diagnostics, find the library file, and run
//! the interactive menu until the user exits.
use library_manager::{library_path, run_app};
use tracing_subscriber::EnvFilter;

/// Diagnostics go to stderr and stay quiet unless `RUST_LOG` asks for more,
/// so they never interleave with the menu.
fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let path = library_path()?;
    run_app(&path)
}

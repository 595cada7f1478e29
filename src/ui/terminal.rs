use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::Result;
use crossterm::tty::IsTty;

use crate::models::Book;
use crate::storage::{load_library, save_library};

use super::app::App;
use super::console::Console;
use super::helpers::surface_error;

/// Load the library, drive the menu over stdin/stdout until the user exits,
/// then write the library back.
pub fn run_app(library_path: &Path) -> Result<()> {
    let stdout = io::stdout();
    let color = stdout.is_tty();
    let console = Console::new(io::stdin().lock(), stdout.lock(), color);
    run_session(library_path, console)?;
    Ok(())
}

/// One full session against any console: load, loop, save exactly once.
/// Returns the library as it was saved. If the console fails mid-session the
/// library is still saved before the error is returned.
pub fn run_session<R: BufRead, W: Write>(
    library_path: &Path,
    console: Console<R, W>,
) -> Result<Vec<Book>> {
    let library = load_library(library_path);
    let mut app = App::new(library, console);
    let outcome = app.run();
    if let Err(err) = &outcome {
        tracing::error!("session ended early: {}", surface_error(err));
    }

    let (library, _) = app.into_parts();
    save_library(library_path, &library)?;
    outcome?;
    Ok(library)
}

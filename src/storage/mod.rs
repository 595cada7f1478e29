//! JSON file store for the library: where the file lives and how it is
//! read at startup and written back at exit.

mod file;
mod path;

pub use file::{load_library, save_library};
pub use path::library_path;

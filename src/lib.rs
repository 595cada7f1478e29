//! Core library surface for the personal library manager.
//!
//! The `bin` target only wires these pieces together; tests and other tools
//! can drive a session with their own console handles.
pub mod library;
pub mod models;
pub mod storage;
pub mod ui;

/// Locating, reading and writing the JSON library file.
pub use storage::{library_path, load_library, save_library};

/// The record type every layer manipulates.
pub use models::Book;

/// The interactive shell entry points.
pub use ui::{run_app, run_session, App, Console};

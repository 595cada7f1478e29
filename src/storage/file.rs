use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::models::Book;

/// Indentation used for the human-readable library file.
const INDENT: &[u8] = b"    ";

/// Read the library file, falling back to an empty library when the file is
/// missing, unreadable, or not a JSON array of complete book records. A single
/// malformed record rejects the whole file.
pub fn load_library(path: &Path) -> Vec<Book> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            tracing::debug!("no library file at {}, starting empty", path.display());
            return Vec::new();
        }
        Err(err) => {
            tracing::warn!("failed to read {}: {err}", path.display());
            return Vec::new();
        }
    };

    match serde_json::from_str::<Vec<Book>>(&text) {
        Ok(library) => {
            tracing::info!("loaded {} books from {}", library.len(), path.display());
            library
        }
        Err(err) => {
            tracing::warn!("ignoring unreadable library file {}: {err}", path.display());
            Vec::new()
        }
    }
}

/// Overwrite the library file with the full list, creating the data
/// directory on first save. The write is not atomic.
pub fn save_library(path: &Path, library: &[Book]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).context("failed to create data directory")?;
    }

    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    library
        .serialize(&mut serializer)
        .context("failed to encode library")?;

    fs::write(path, buf)
        .with_context(|| format!("failed to write library file {}", path.display()))?;
    tracing::info!("saved {} books to {}", library.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_library() -> Vec<Book> {
        vec![
            Book {
                title: "Dune".to_string(),
                author: "Frank Herbert".to_string(),
                year: 1965,
                genre: "Science Fiction".to_string(),
                read: false,
                rating: 4.5,
            },
            Book {
                title: "1984".to_string(),
                author: "George Orwell".to_string(),
                year: 1949,
                genre: "Dystopia".to_string(),
                read: true,
                rating: 5.0,
            },
        ]
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        assert!(load_library(&dir.path().join("absent.json")).is_empty());
    }

    #[test]
    fn invalid_json_loads_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("library_data.json");
        fs::write(&path, "{ this is not json").unwrap();
        assert!(load_library(&path).is_empty());
    }

    #[test]
    fn json_object_instead_of_array_loads_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("library_data.json");
        fs::write(&path, r#"{"Title": "Dune"}"#).unwrap();
        assert!(load_library(&path).is_empty());
    }

    #[test]
    fn record_missing_a_field_rejects_whole_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("library_data.json");
        fs::write(
            &path,
            r#"[
                {"Title": "Dune", "Author": "Frank Herbert", "Year": 1965, "Genre": "SF", "Read": false, "Rating": 4.5},
                {"Title": "Emma", "Author": "Jane Austen"}
            ]"#,
        )
        .unwrap();
        assert!(load_library(&path).is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("library_data.json");
        let library = sample_library();

        save_library(&path, &library).unwrap();
        assert_eq!(load_library(&path), library);
    }

    #[test]
    fn empty_library_round_trips() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("library_data.json");

        save_library(&path, &[]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
        assert!(load_library(&path).is_empty());
    }

    #[test]
    fn save_creates_missing_directory_and_indents_four_spaces() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("library_data.json");

        save_library(&path, &sample_library()[..1]).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("[\n    {\n        \"Title\": \"Dune\","));
        assert!(text.contains("\"Rating\": 4.5"));
    }

    #[test]
    fn save_overwrites_previous_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("library_data.json");
        fs::write(&path, "garbage that is much longer than an empty array").unwrap();

        save_library(&path, &[]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
    }
}

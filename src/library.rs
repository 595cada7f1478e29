//! Operations over the in-memory library. Nothing here touches the console
//! or the file system; the shell decides how to present the results.

use std::cmp::Ordering;

use crate::models::Book;

/// Append a record at the end of the library.
pub fn add_book(library: &mut Vec<Book>, book: Book) {
    tracing::info!("adding {:?} by {:?}", book.title, book.author);
    library.push(book);
}

/// Drop every book whose title matches `title` ignoring case, returning how
/// many were removed.
pub fn remove_by_title(library: &mut Vec<Book>, title: &str) -> usize {
    let needle = title.to_lowercase();
    let before = library.len();
    library.retain(|book| book.title.to_lowercase() != needle);
    let removed = before - library.len();
    tracing::info!("removed {removed} books titled {title:?}");
    removed
}

/// Books whose title or author contains `query`, case-insensitively, in
/// library order. The query is trimmed first.
pub fn search<'a>(library: &'a [Book], query: &str) -> Vec<&'a Book> {
    let query = query.trim().to_lowercase();
    library
        .iter()
        .filter(|book| {
            book.title.to_lowercase().contains(&query)
                || book.author.to_lowercase().contains(&query)
        })
        .collect()
}

/// Unread books ordered by rating, highest first. Equal ratings keep their
/// library order.
pub fn recommendations(library: &[Book]) -> Vec<&Book> {
    let mut unread: Vec<&Book> = library.iter().filter(|book| !book.read).collect();
    unread.sort_by(|a, b| b.rating.partial_cmp(&a.rating).unwrap_or(Ordering::Equal));
    unread
}

/// Aggregate figures shown by the statistics screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stats {
    pub total: usize,
    pub read: usize,
    /// Share of read books in percent; zero for an empty library.
    pub read_percentage: f64,
    /// Mean rating; zero for an empty library.
    pub average_rating: f64,
}

impl Stats {
    pub fn compute(library: &[Book]) -> Self {
        let total = library.len();
        let read = library.iter().filter(|book| book.read).count();
        if total == 0 {
            return Self {
                total,
                read,
                read_percentage: 0.0,
                average_rating: 0.0,
            };
        }

        let rating_sum: f64 = library.iter().map(|book| book.rating).sum();
        Self {
            total,
            read,
            read_percentage: read as f64 / total as f64 * 100.0,
            average_rating: rating_sum / total as f64,
        }
    }
}

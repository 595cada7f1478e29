//! Domain model persisted to the library file and passed throughout the
//! shell. `Book` stays a plain data holder; the formatting helpers live here
//! so search, listing and recommendations print records the same way.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// One entry in the personal library. The serde renames keep the on-disk
/// keys capitalized (`"Title"`, `"Author"`, ...) so existing data files stay
/// readable.
pub struct Book {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Author")]
    pub author: String,
    /// Publication year. No range checks; negative years are accepted.
    #[serde(rename = "Year")]
    pub year: i64,
    #[serde(rename = "Genre")]
    pub genre: String,
    /// Whether the owner has finished the book.
    #[serde(rename = "Read")]
    pub read: bool,
    /// Personal rating, meant to sit between 1 and 5 but never clamped.
    #[serde(rename = "Rating")]
    pub rating: f64,
}

impl Book {
    /// `Read` or `Unread`, used by the detailed listing.
    pub fn read_label(&self) -> &'static str {
        if self.read {
            "Read"
        } else {
            "Unread"
        }
    }

    /// Compact `Title by Author - rating/5` line used by recommendations.
    pub fn recommendation_line(&self) -> String {
        format!(
            "{} by {} - {}/5",
            self.title,
            self.author,
            format_rating(self.rating)
        )
    }
}

impl fmt::Display for Book {
    /// Full detail line shared by search results and the library listing.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} by {} ({}) - {} - {} - {}/5",
            self.title,
            self.author,
            self.year,
            self.genre,
            self.read_label(),
            format_rating(self.rating)
        )
    }
}

/// Print ratings with at least one decimal so whole numbers show as `4.0`
/// rather than `4`.
pub fn format_rating(rating: f64) -> String {
    if rating.is_finite() && rating.fract() == 0.0 {
        format!("{rating:.1}")
    } else {
        rating.to_string()
    }
}

use thiserror::Error;

use crate::models::Book;

/// Reasons a filled-in book form cannot become a `Book`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum FormError {
    #[error("Publication year must be a whole number (got {0:?}).")]
    InvalidYear(String),
    #[error("Rating must be a finite number (got {0:?}).")]
    InvalidRating(String),
}

/// Raw answers collected by the "Add a Book" prompts.
#[derive(Debug, Default, Clone)]
pub(crate) struct BookForm {
    pub(crate) title: String,
    pub(crate) author: String,
    pub(crate) year: String,
    pub(crate) genre: String,
    pub(crate) read: String,
    pub(crate) rating: String,
}

impl BookForm {
    /// Validate the inputs and return a record ready to append.
    pub(crate) fn parse_inputs(&self) -> Result<Book, FormError> {
        Ok(Book {
            title: self.title.clone(),
            author: self.author.clone(),
            year: parse_year(&self.year)?,
            genre: self.genre.clone(),
            read: parse_read(&self.read),
            rating: parse_rating(&self.rating)?,
        })
    }
}

/// Parse a publication year. Surrounding spaces are ignored; fractions and
/// words are rejected.
pub(crate) fn parse_year(raw: &str) -> Result<i64, FormError> {
    raw.trim()
        .parse()
        .map_err(|_| FormError::InvalidYear(raw.to_string()))
}

/// Parse a rating. `NaN` and infinities are rejected because JSON cannot
/// store them and the saved file would no longer load.
pub(crate) fn parse_rating(raw: &str) -> Result<f64, FormError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|rating| rating.is_finite())
        .ok_or_else(|| FormError::InvalidRating(raw.to_string()))
}

/// Only an explicit "yes" (any case, surrounding spaces ignored) counts.
pub(crate) fn parse_read(raw: &str) -> bool {
    raw.trim().eq_ignore_ascii_case("yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> BookForm {
        BookForm {
            title: "Dune".to_string(),
            author: "Frank Herbert".to_string(),
            year: "1965".to_string(),
            genre: "Science Fiction".to_string(),
            read: "YES ".to_string(),
            rating: " 4.5".to_string(),
        }
    }

    #[test]
    fn valid_form_builds_book() {
        let book = filled().parse_inputs().unwrap();
        assert_eq!(book.title, "Dune");
        assert_eq!(book.year, 1965);
        assert!(book.read);
        assert_eq!(book.rating, 4.5);
    }

    #[test]
    fn non_integer_year_is_rejected() {
        let mut form = filled();
        form.year = "abc".to_string();
        assert_eq!(
            form.parse_inputs(),
            Err(FormError::InvalidYear("abc".to_string()))
        );
    }

    #[test]
    fn fractional_year_is_rejected() {
        assert!(parse_year("1965.5").is_err());
    }

    #[test]
    fn non_numeric_rating_is_rejected() {
        let mut form = filled();
        form.rating = "great".to_string();
        assert_eq!(
            form.parse_inputs(),
            Err(FormError::InvalidRating("great".to_string()))
        );
    }

    #[test]
    fn integer_rating_is_accepted() {
        assert_eq!(parse_rating("5"), Ok(5.0));
    }

    #[test]
    fn non_finite_ratings_are_rejected() {
        for raw in ["nan", "NaN", "inf", "-inf", "infinity"] {
            assert_eq!(
                parse_rating(raw),
                Err(FormError::InvalidRating(raw.to_string())),
                "rating {raw:?}"
            );
        }
    }

    #[test]
    fn read_requires_exact_yes() {
        assert!(parse_read("yes"));
        assert!(parse_read("  Yes\t"));
        assert!(!parse_read("y"));
        assert!(!parse_read("no"));
        assert!(!parse_read(""));
        assert!(!parse_read("yes please"));
    }

    #[test]
    fn error_messages_name_the_bad_input() {
        assert_eq!(
            FormError::InvalidYear("abc".to_string()).to_string(),
            "Publication year must be a whole number (got \"abc\")."
        );
    }
}

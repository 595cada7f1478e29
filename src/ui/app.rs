use std::io::{BufRead, Write};

use anyhow::Result;

use crate::library::{self, Stats};
use crate::models::Book;

use super::console::{Console, StatusKind};
use super::forms::{parse_rating, parse_year, BookForm, FormError};
use super::menu::MenuAction;

/// Shell state: the library being edited plus the console it talks through.
pub struct App<R, W> {
    library: Vec<Book>,
    console: Console<R, W>,
}

impl<R: BufRead, W: Write> App<R, W> {
    pub fn new(library: Vec<Book>, console: Console<R, W>) -> Self {
        Self { library, console }
    }

    pub fn library(&self) -> &[Book] {
        &self.library
    }

    pub fn into_parts(self) -> (Vec<Book>, Console<R, W>) {
        (self.library, self.console)
    }

    /// Show the menu and dispatch selections until the user exits or input
    /// runs out. Persisting the result is left to the caller.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.draw_menu()?;
            let Some(choice) = self.console.prompt("Choose an option: ")? else {
                tracing::debug!("input closed at main menu");
                self.say_goodbye()?;
                return Ok(());
            };
            if self.handle_choice(&choice)? {
                return Ok(());
            }
        }
    }

    /// Run one menu selection. Returns `true` when the session should end.
    pub fn handle_choice(&mut self, choice: &str) -> Result<bool> {
        let Some(action) = MenuAction::from_key(choice) else {
            tracing::debug!("invalid menu choice {choice:?}");
            self.console
                .status("Invalid choice. Please try again!", StatusKind::Error)?;
            return Ok(false);
        };

        tracing::debug!(?action, "menu selection");
        match action {
            MenuAction::AddBook => self.add_book()?,
            MenuAction::RemoveBook => self.remove_book()?,
            MenuAction::SearchBooks => self.search_books()?,
            MenuAction::ShowAll => self.display_books()?,
            MenuAction::ShowStats => self.display_stats()?,
            MenuAction::Recommend => self.recommend_books()?,
            MenuAction::Exit => {
                self.say_goodbye()?;
                return Ok(true);
            }
        }
        Ok(false)
    }

    fn draw_menu(&mut self) -> Result<()> {
        self.console.header("Library Manager")?;
        for action in MenuAction::ALL {
            self.console
                .line(format!("{}. {}", action.key(), action.label()))?;
        }
        Ok(())
    }

    fn say_goodbye(&mut self) -> Result<()> {
        self.console
            .status("Exiting and saving... Have a great day!", StatusKind::Info)
    }

    fn add_book(&mut self) -> Result<()> {
        self.console.header("Add a Book")?;
        let Some(form) = self.fill_book_form()? else {
            tracing::debug!("input closed while adding a book");
            return self
                .console
                .status("Input ended; book not added.", StatusKind::Notice);
        };

        match form.parse_inputs() {
            Ok(book) => {
                library::add_book(&mut self.library, book);
                self.console
                    .status("Book successfully added to your library!", StatusKind::Info)
            }
            Err(err) => self.console.status(&err.to_string(), StatusKind::Error),
        }
    }

    /// Collect every field, re-asking for the year or rating until they
    /// parse. `None` means input ended before the form was complete.
    fn fill_book_form(&mut self) -> Result<Option<BookForm>> {
        let mut form = BookForm::default();

        let Some(title) = self.console.prompt("Title: ")? else {
            return Ok(None);
        };
        form.title = title;

        let Some(author) = self.console.prompt("Author: ")? else {
            return Ok(None);
        };
        form.author = author;

        let Some(year) = self.prompt_valid("Publication Year: ", parse_year)? else {
            return Ok(None);
        };
        form.year = year;

        let Some(genre) = self.console.prompt("Genre: ")? else {
            return Ok(None);
        };
        form.genre = genre;

        let Some(read) = self
            .console
            .prompt("Have you read this book? (yes/no): ")?
        else {
            return Ok(None);
        };
        form.read = read;

        let Some(rating) = self.prompt_valid("Rate the book (1-5): ", parse_rating)? else {
            return Ok(None);
        };
        form.rating = rating;

        Ok(Some(form))
    }

    /// Keep prompting until `parse` accepts the answer, returning the raw text.
    fn prompt_valid<T>(
        &mut self,
        label: &str,
        parse: fn(&str) -> Result<T, FormError>,
    ) -> Result<Option<String>> {
        loop {
            let Some(raw) = self.console.prompt(label)? else {
                return Ok(None);
            };
            match parse(&raw) {
                Ok(_) => return Ok(Some(raw)),
                Err(err) => {
                    tracing::debug!("rejected input: {err}");
                    self.console.status(&err.to_string(), StatusKind::Error)?;
                }
            }
        }
    }

    fn remove_book(&mut self) -> Result<()> {
        self.console.header("Remove a Book")?;
        let Some(title) = self.console.prompt("Enter the book title to remove: ")? else {
            return Ok(());
        };

        if library::remove_by_title(&mut self.library, &title) > 0 {
            self.console
                .status("Book successfully removed!", StatusKind::Info)
        } else {
            self.console
                .status("Book not found. Try again!", StatusKind::Error)
        }
    }

    fn search_books(&mut self) -> Result<()> {
        self.console.header("Search for a Book")?;
        let Some(query) = self.console.prompt("Enter title or author: ")? else {
            return Ok(());
        };

        let results = library::search(&self.library, &query);
        if results.is_empty() {
            return self.console.status(
                "No matches found. Try a different search!",
                StatusKind::Notice,
            );
        }

        self.console.line("Matching Books:")?;
        for (idx, book) in results.iter().enumerate() {
            self.console.line(format!("{}. {book}", idx + 1))?;
        }
        Ok(())
    }

    fn display_books(&mut self) -> Result<()> {
        self.console.header("All Books in Library")?;
        if self.library.is_empty() {
            return self.console.status(
                "Your library is empty! Add books to get started.",
                StatusKind::Notice,
            );
        }

        for (idx, book) in self.library.iter().enumerate() {
            self.console.line(format!("{}. {book}", idx + 1))?;
        }
        Ok(())
    }

    fn display_stats(&mut self) -> Result<()> {
        self.console.header("Library Statistics")?;
        let stats = Stats::compute(&self.library);
        self.console.line(format!("Total Books: {}", stats.total))?;
        self.console.line(format!(
            "Books Read: {} ({:.2}%)",
            stats.read, stats.read_percentage
        ))?;
        self.console
            .line(format!("Average Rating: {:.2}/5", stats.average_rating))
    }

    fn recommend_books(&mut self) -> Result<()> {
        self.console.header("Recommended Books")?;
        let picks = library::recommendations(&self.library);
        if picks.is_empty() {
            return self.console.status(
                "You've read all books! Add more to get recommendations.",
                StatusKind::Info,
            );
        }

        self.console.line("Suggested Books:")?;
        for (idx, book) in picks.iter().enumerate() {
            self.console
                .line(format!("{}. {}", idx + 1, book.recommendation_line()))?;
        }
        Ok(())
    }
}

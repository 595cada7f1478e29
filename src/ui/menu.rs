/// Entries of the main menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    AddBook,
    RemoveBook,
    SearchBooks,
    ShowAll,
    ShowStats,
    Recommend,
    Exit,
}

impl MenuAction {
    pub const ALL: [MenuAction; 7] = [
        MenuAction::AddBook,
        MenuAction::RemoveBook,
        MenuAction::SearchBooks,
        MenuAction::ShowAll,
        MenuAction::ShowStats,
        MenuAction::Recommend,
        MenuAction::Exit,
    ];

    /// The text the user types to pick this entry.
    pub fn key(self) -> &'static str {
        match self {
            MenuAction::AddBook => "1",
            MenuAction::RemoveBook => "2",
            MenuAction::SearchBooks => "3",
            MenuAction::ShowAll => "4",
            MenuAction::ShowStats => "5",
            MenuAction::Recommend => "6",
            MenuAction::Exit => "7",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuAction::AddBook => "Add Book",
            MenuAction::RemoveBook => "Remove Book",
            MenuAction::SearchBooks => "Search Books",
            MenuAction::ShowAll => "Show All Books",
            MenuAction::ShowStats => "Show Stats",
            MenuAction::Recommend => "Get Book Recommendations",
            MenuAction::Exit => "Exit",
        }
    }

    /// Resolve a typed selection. Surrounding whitespace is ignored; anything
    /// else that is not a listed key yields `None`.
    pub fn from_key(input: &str) -> Option<Self> {
        let input = input.trim();
        Self::ALL.into_iter().find(|action| action.key() == input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_key_resolves_to_its_action() {
        for action in MenuAction::ALL {
            assert_eq!(MenuAction::from_key(action.key()), Some(action));
        }
    }

    #[test]
    fn keys_are_numbered_in_order() {
        let keys: Vec<&str> = MenuAction::ALL.iter().map(|a| a.key()).collect();
        assert_eq!(keys, vec!["1", "2", "3", "4", "5", "6", "7"]);
    }

    #[test]
    fn whitespace_around_key_is_ignored() {
        assert_eq!(MenuAction::from_key(" 7 "), Some(MenuAction::Exit));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        for key in ["", "0", "8", "exit", "1 2", "11"] {
            assert_eq!(MenuAction::from_key(key), None, "key {key:?}");
        }
    }
}

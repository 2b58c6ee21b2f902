//! Terminal command parsing.

use thiserror::Error;

/// A command typed at the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Go to a one-indexed page.
    Page(u32),
    /// Pick a zero-indexed page, as a pagination widget would.
    Select(u32),
    /// Replace the search text (empty clears it).
    Search(String),
    /// Replace the species filter (empty clears it).
    Species(String),
    /// Toggle the favorite flag of the n-th card (one-indexed).
    Favorite(usize),
    /// List favorites.
    Favorites,
    /// Open the details of the n-th card (one-indexed).
    Details(usize),
    /// Close the details view.
    Close,
    /// Re-run the last fetch.
    Retry,
    /// Show species filter options.
    SpeciesOptions,
    /// Show help.
    Help,
    /// Exit.
    Quit,
}

/// Errors from parsing a command line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// Blank input.
    #[error("type a command, or `help`")]
    Empty,

    /// Unrecognized command word.
    #[error("unknown command `{0}`; type `help`")]
    Unknown(String),

    /// A numeric argument was missing or not a number.
    #[error("`{command}` expects a number, got `{argument}`")]
    InvalidNumber {
        /// Command word.
        command: String,
        /// Offending argument.
        argument: String,
    },
}

/// Help text listing every command.
pub const HELP: &str = "\
commands:
  page <n>        go to page n (1-based)
  select <i>      select page i (0-based)
  search <text>   search by name (no text clears)
  species <name>  filter by species (no name clears)
  options         list species filter options
  fav <n>         toggle favorite for card n
  favs            list favorites
  details <n>     show details for card n
  close           close details
  retry           retry the last failed load
  help            show this help
  quit            exit";

impl Command {
    /// Parses one input line.
    ///
    /// # Errors
    ///
    /// Returns a `CommandError` for blank, unknown or malformed input.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim();
        let (word, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(w, r)| (w, r.trim()));

        match word.to_ascii_lowercase().as_str() {
            "" => Err(CommandError::Empty),
            "page" | "p" => number(word, rest).map(Self::Page),
            "select" => number(word, rest).map(Self::Select),
            "search" | "s" => Ok(Self::Search(rest.to_string())),
            "species" => Ok(Self::Species(rest.to_string())),
            "options" => Ok(Self::SpeciesOptions),
            "fav" | "f" => number(word, rest).map(Self::Favorite),
            "favs" => Ok(Self::Favorites),
            "details" | "d" => number(word, rest).map(Self::Details),
            "close" => Ok(Self::Close),
            "retry" | "r" => Ok(Self::Retry),
            "help" | "?" => Ok(Self::Help),
            "quit" | "q" | "exit" => Ok(Self::Quit),
            _ => Err(CommandError::Unknown(word.to_string())),
        }
    }
}

fn number<T: std::str::FromStr>(command: &str, argument: &str) -> Result<T, CommandError> {
    argument.parse().map_err(|_| CommandError::InvalidNumber {
        command: command.to_string(),
        argument: argument.to_string(),
    })
}

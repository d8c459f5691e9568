//! Commands accepted by the interactive terminal loop.
//!
//! A line is split into a verb and an optional argument. The verb is parsed with
//! `strum` (case-insensitive), the argument according to the verb.
use std::str::FromStr;

use quote_common::{QuoteError, QuoteId};
use strum_macros::{Display, EnumString};

/// Command verbs, as typed by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Verb {
    /// Append the next page of quotes.
    More,
    /// Print the displayed quotes.
    List,
    /// Toggle a favorite.
    Fav,
    /// Print the favorites.
    Favs,
    /// Filter fetched quotes by text or author.
    Search,
    /// Leave search mode.
    Clear,
    /// Print the command list.
    Help,
    /// Leave the program.
    #[strum(serialize = "quit", serialize = "exit", serialize = "q")]
    Quit,
}

/// A fully parsed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Append the next page of quotes.
    More,
    /// Print the displayed quotes.
    List,
    /// Toggle the favorite flag of a quote id.
    Fav(QuoteId),
    /// Print the favorites.
    Favs,
    /// Search for a term.
    Search(String),
    /// Leave search mode.
    Clear,
    /// Print the command list.
    Help,
    /// Leave the program.
    Quit,
}

impl FromStr for Command {
    type Err = QuoteError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (verb, arg) = match line.split_once(char::is_whitespace) {
            Some((verb, arg)) => (verb, arg.trim()),
            None => (line, ""),
        };
        let verb: Verb = verb
            .parse()
            .map_err(|_| QuoteError::InvalidCommand(line.to_string()))?;

        let command = match verb {
            Verb::More => Command::More,
            Verb::List => Command::List,
            Verb::Fav => {
                let id = arg
                    .parse::<QuoteId>()
                    .map_err(|e| QuoteError::InvalidCommand(format!("fav {}: {}", arg, e)))?;
                Command::Fav(id)
            }
            Verb::Favs => Command::Favs,
            Verb::Search => {
                if arg.is_empty() {
                    return Err(QuoteError::InvalidCommand("search needs a term".to_string()));
                }
                Command::Search(arg.to_string())
            }
            Verb::Clear => Command::Clear,
            Verb::Help => Command::Help,
            Verb::Quit => Command::Quit,
        };
        Ok(command)
    }
}

/// Help text listing every command.
pub const HELP: &str = "\
Commands:
  more           load more quotes
  list           show displayed quotes
  fav <id>       add or remove a favorite
  favs           show favorites
  search <term>  search quotes by text or author
  clear          leave search
  help           show this help
  quit           exit";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_verbs() {
        assert_eq!("more".parse::<Command>().unwrap(), Command::More);
        assert_eq!("  LIST ".parse::<Command>().unwrap(), Command::List);
        assert_eq!("exit".parse::<Command>().unwrap(), Command::Quit);
        assert_eq!("q".parse::<Command>().unwrap(), Command::Quit);
    }

    #[test]
    fn test_parse_fav() {
        assert_eq!("fav 42".parse::<Command>().unwrap(), Command::Fav(42));
        assert!(matches!(
            "fav forty".parse::<Command>(),
            Err(QuoteError::InvalidCommand(_))
        ));
        assert!("fav".parse::<Command>().is_err());
    }

    #[test]
    fn test_parse_search_keeps_spaces() {
        assert_eq!(
            "search  the only way ".parse::<Command>().unwrap(),
            Command::Search("the only way".to_string())
        );
        assert!("search".parse::<Command>().is_err());
    }

    #[test]
    fn test_unknown_verb() {
        assert!(matches!(
            "dance".parse::<Command>(),
            Err(QuoteError::InvalidCommand(_))
        ));
    }

    #[test]
    fn test_verb_display() {
        assert_eq!(Verb::Favs.to_string(), "favs");
    }
}

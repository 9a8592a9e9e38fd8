//! Interactive command words.

/// A command entered at the `sdb>` prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `LN`: list all records by last name.
    ListByName,
    /// `LI`: list all records by ID.
    ListById,
    /// `FN`: prompt for a last name and show the matching record.
    FindByName,
    /// `FI`: prompt for an ID and show the matching record.
    FindById,
    /// `H...` or `?`: print the command list.
    Help,
    /// `Q...`: leave the program.
    Quit,
    /// Anything else.
    Unknown,
}

impl Command {
    /// Parses a command word, ignoring case.
    ///
    /// Two-letter prefixes are tried before the one-letter `H` and `Q`
    /// fallbacks, so `HELP` and `Quit` work but `F` alone does not.
    pub fn parse(word: &str) -> Self {
        let word = word.to_ascii_uppercase();
        if word.starts_with("LN") {
            Self::ListByName
        } else if word.starts_with("LI") {
            Self::ListById
        } else if word.starts_with("FN") {
            Self::FindByName
        } else if word.starts_with("FI") {
            Self::FindById
        } else if word.starts_with('H') || word == "?" {
            Self::Help
        } else if word.starts_with('Q') {
            Self::Quit
        } else {
            Self::Unknown
        }
    }
}

/// Text printed for `HELP` and `?`.
pub const HELP: &str = "\
LN List all the records in the database ordered by last name.
LI List all the records in the database ordered by student ID.
FN Prompts for a name and lists the record of the student with the corresponding name.
FI Prompts for an ID and lists the record of the student with the corresponding ID.
HELP Prints this list.
? Prints this list.
Q Exits the program.
";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_letter_commands() {
        assert_eq!(Command::parse("LN"), Command::ListByName);
        assert_eq!(Command::parse("li"), Command::ListById);
        assert_eq!(Command::parse("Fn"), Command::FindByName);
        assert_eq!(Command::parse("fI"), Command::FindById);
    }

    #[test]
    fn prefixes_match() {
        assert_eq!(Command::parse("lname"), Command::ListByName);
        assert_eq!(Command::parse("FIND"), Command::FindById);
        assert_eq!(Command::parse("help"), Command::Help);
        assert_eq!(Command::parse("hxyz"), Command::Help);
        assert_eq!(Command::parse("quit"), Command::Quit);
        assert_eq!(Command::parse("q"), Command::Quit);
    }

    #[test]
    fn question_mark_must_stand_alone() {
        assert_eq!(Command::parse("?"), Command::Help);
        assert_eq!(Command::parse("?x"), Command::Unknown);
    }

    #[test]
    fn unknown_commands() {
        assert_eq!(Command::parse("F"), Command::Unknown);
        assert_eq!(Command::parse("L"), Command::Unknown);
        assert_eq!(Command::parse("list"), Command::ListById);
        assert_eq!(Command::parse("lx"), Command::Unknown);
        assert_eq!(Command::parse("xq"), Command::Unknown);
    }
}

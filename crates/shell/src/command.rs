use thiserror::Error;

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add one unit (the "+" / "Add to Cart" button).
    Add(String),
    /// Remove the most recent unit (the "-" button).
    Remove(String),
    /// Remove every unit of a product (the trash button).
    Clear(String),
    Show,
    Help,
    Quit,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command: {0} (try `help`)")]
    Unknown(String),

    #[error("`{0}` needs a product name")]
    MissingProduct(&'static str),
}

pub const HELP: &str = "\
commands:
  add <product>     add one unit
  remove <product>  remove the most recently added unit
  clear <product>   remove every unit of the product
  show              re-render the storefront
  help              this text
  quit              leave";

impl Command {
    /// Parse a line; blank lines yield `None`.
    ///
    /// Product names may contain spaces: everything after the verb is the name.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        let product = |command: &'static str| {
            if rest.is_empty() {
                Err(CommandError::MissingProduct(command))
            } else {
                Ok(rest.to_string())
            }
        };

        let command = match verb.to_ascii_lowercase().as_str() {
            "add" | "+" => Command::Add(product("add")?),
            "remove" | "-" => Command::Remove(product("remove")?),
            "clear" | "rm" => Command::Clear(product("clear")?),
            "show" | "ls" => Command::Show,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            _ => return Err(CommandError::Unknown(verb.to_string())),
        };
        Ok(Some(command))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_verbs_with_product_names() {
        assert_eq!(Command::parse("add Pears").unwrap(), Some(Command::Add("Pears".into())));
        assert_eq!(
            Command::parse("  REMOVE   Blood Oranges ").unwrap(),
            Some(Command::Remove("Blood Oranges".into()))
        );
        assert_eq!(Command::parse("clear Apples").unwrap(), Some(Command::Clear("Apples".into())));
        assert_eq!(Command::parse("quit").unwrap(), Some(Command::Quit));
    }

    #[test]
    fn blank_lines_are_ignored() {
        assert_eq!(Command::parse("   ").unwrap(), None);
    }

    #[test]
    fn reports_missing_product_and_unknown_verbs() {
        assert_eq!(Command::parse("add").unwrap_err(), CommandError::MissingProduct("add"));
        assert_eq!(
            Command::parse("buy Pears").unwrap_err(),
            CommandError::Unknown("buy".into())
        );
    }
}

use std::str::FromStr;

use rboard_views::route::Route;

pub const HELP: &str = "\
commands:
  :home            go to the thread list
  :create          go to the new-thread form
  :go <path>       open a route, e.g. :go /threads/3 (a bare /path works too)
  :submit          send the current form
  :clear           discard the current draft
  :refresh         reload the current page
  :help            show this text
  :quit            exit
any other line is typed into the current form";

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("unknown command: {0} (try :help)")]
    Unknown(String),

    #[error("missing argument for {0}")]
    MissingArgument(&'static str),

    #[error(transparent)]
    Route(#[from] rboard_views::error::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Go(Route),
    Submit,
    Clear,
    Refresh,
    Help,
    Quit,
    /// A line of form input.
    Text(String),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let trimmed = line.trim();
        if trimmed.starts_with('/') {
            return Ok(Self::Go(trimmed.parse()?));
        }
        let Some(command) = trimmed.strip_prefix(':') else {
            return Ok(Self::Text(line.to_string()));
        };
        let (name, arg) = match command.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (command, ""),
        };
        match name {
            "home" => Ok(Self::Go(Route::Home)),
            "create" => Ok(Self::Go(Route::Create)),
            "go" if arg.is_empty() => Err(CommandError::MissingArgument(":go")),
            "go" => Ok(Self::Go(arg.parse()?)),
            "submit" => Ok(Self::Submit),
            "clear" => Ok(Self::Clear),
            "refresh" => Ok(Self::Refresh),
            "help" => Ok(Self::Help),
            "quit" | "q" => Ok(Self::Quit),
            _ => Err(CommandError::Unknown(trimmed.to_string())),
        }
    }
}

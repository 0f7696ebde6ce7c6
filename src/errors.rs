// Copyright (c) 2022  Mubelotix <mubelotix@gmail.com>
// Program licensed under GNU AGPL v3 or later. See the LICENSE file for details.

use structopt::clap;

/// For when a counter value could not be read from text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseUInt64Error {
    Empty,
    Invalid(String),
}

impl std::fmt::Display for ParseUInt64Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ParseUInt64Error::Empty => write!(f, "{}", crate::constants::E_UINT64_ARGS),
            ParseUInt64Error::Invalid(s) => write!(f, "{}, got {:?}", crate::constants::E_UINT64_ARGS, s),
        }
    }
}

impl std::error::Error for ParseUInt64Error {}

/// For when a command line could not be turned into destinators and a command.
#[derive(Debug)]
pub enum CommandParsingError {
    /// The destinator prefix (`0-2,5`) is malformed.
    Prefix(&'static str),
    /// The prefix was fine but clap rejected the command itself.
    Clap(clap::Error),
}

impl CommandParsingError {
    /// Whether clap only printed the help of the command language.
    pub fn is_help(&self) -> bool {
        matches!(self, CommandParsingError::Clap(e) if e.kind == clap::ErrorKind::HelpDisplayed)
    }
}

impl From<&'static str> for CommandParsingError {
    fn from(reason: &'static str) -> Self {
        CommandParsingError::Prefix(reason)
    }
}

impl From<clap::Error> for CommandParsingError {
    fn from(e: clap::Error) -> Self {
        CommandParsingError::Clap(e)
    }
}

impl std::fmt::Display for CommandParsingError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            CommandParsingError::Prefix(reason) => write!(f, "invalid destinators: {}", reason),
            CommandParsingError::Clap(e) => write!(f, "{}", e.message),
        }
    }
}

impl std::error::Error for CommandParsingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CommandParsingError::Prefix(_) => None,
            CommandParsingError::Clap(e) => Some(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::Command;
    use std::error::Error;

    #[test]
    fn test_display() {
        assert_eq!(ParseUInt64Error::Empty.to_string(), "expected a positive integer");
        assert_eq!(ParseUInt64Error::Invalid(String::from("-3")).to_string(), "expected a positive integer, got \"-3\"");

        let e = CommandParsingError::from("Reversed destinator range");
        assert_eq!(e.to_string(), "invalid destinators: Reversed destinator range");
        assert!(e.source().is_none());
        assert!(!e.is_help());
    }

    #[test]
    fn test_clap_errors() {
        let e = Command::parse("0 --help").unwrap_err();
        assert!(e.is_help());

        let e = Command::parse("0 set abc").unwrap_err();
        assert!(!e.is_help());
        assert!(e.source().is_some());
        assert!(e.to_string().contains("expected a positive integer"));
    }
}

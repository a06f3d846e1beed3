use chrono::NaiveDate;
use rover_common::{CameraSelection, Rover};
use thiserror::Error;

use crate::filter::parse_earth_date;

/// Commands understood by the terminal front-end
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start,
    Rover(Rover),
    Camera(CameraSelection),
    Sol(u32),
    /// `None` clears the date
    Date(Option<NaiveDate>),
    Search,
    More,
    Retry,
    Cameras,
    Rovers,
    /// `None` means the rover currently selected
    Manifest(Option<Rover>),
    Status,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command '{0}', type 'help' for a list")]
    Unknown(String),
    #[error("'{0}' needs an argument: {1}")]
    MissingArgument(&'static str, &'static str),
    #[error("{0}")]
    InvalidArgument(String),
}

impl Command {
    /// Parse one input line. `/` and `\` prefixes are accepted and ignored.
    ///
    /// Returns `Ok(None)` for blank lines.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let trimmed = line.trim();
        let trimmed = trimmed
            .strip_prefix('/')
            .or_else(|| trimmed.strip_prefix('\\'))
            .unwrap_or(trimmed);

        let mut parts = trimmed.split_whitespace();
        let Some(name) = parts.next() else {
            return Ok(None);
        };
        let argument = parts.next();
        if let Some(extra) = parts.next() {
            return Err(CommandError::InvalidArgument(format!(
                "unexpected argument '{}'",
                extra
            )));
        }

        let command = match name.to_lowercase().as_str() {
            "start" => Command::Start,
            "rover" => {
                let value = argument.ok_or(CommandError::MissingArgument("rover", "<curiosity|opportunity|spirit|perseverance>"))?;
                Command::Rover(value.parse().map_err(CommandError::InvalidArgument)?)
            }
            "camera" | "cam" => {
                let value = argument.ok_or(CommandError::MissingArgument("camera", "<code|all>"))?;
                Command::Camera(CameraSelection::from(value))
            }
            "sol" => {
                let value = argument.ok_or(CommandError::MissingArgument("sol", "<number>"))?;
                let sol = value.parse::<u32>().map_err(|_| {
                    CommandError::InvalidArgument(format!("sol must be a non-negative integer, got '{}'", value))
                })?;
                Command::Sol(sol)
            }
            "date" => {
                let value = argument.ok_or(CommandError::MissingArgument("date", "<YYYY-MM-DD|clear>"))?;
                if value.eq_ignore_ascii_case("clear") {
                    Command::Date(None)
                } else {
                    let date = parse_earth_date(value).map_err(|_| {
                        CommandError::InvalidArgument(format!("date must be YYYY-MM-DD, got '{}'", value))
                    })?;
                    Command::Date(Some(date))
                }
            }
            "search" | "s" => Command::Search,
            "more" | "m" => Command::More,
            "retry" => Command::Retry,
            "cameras" => Command::Cameras,
            "rovers" => Command::Rovers,
            "manifest" | "info" => match argument {
                Some(value) => Command::Manifest(Some(value.parse().map_err(CommandError::InvalidArgument)?)),
                None => Command::Manifest(None),
            },
            "status" => Command::Status,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };

        Ok(Some(command))
    }
}

pub const HELP_TEXT: &str = "\
Commands:
  start                     leave the welcome screen and load the default feed
  rover <name>              curiosity, opportunity, spirit or perseverance
  camera <code|all>         camera code for the current rover (see 'cameras')
  sol <n>                   search by Martian sol (clears the date)
  date <YYYY-MM-DD|clear>   search by Earth date (zeroes the sol)
  search                    run a fresh search with the current filters
  more                      load the next page
  retry                     repeat the last failed fetch
  cameras                   list cameras of the current rover
  rovers                    list rovers and mission facts
  manifest [rover]          fetch the live mission manifest
  status                    show the current filters and feed
  help                      this text
  quit                      exit";

/*!
 * Shell Commands
 * Parsing of raw input lines into typed commands
 */

use crate::core::types::ClassSize;
use thiserror::Error;

const ALLOC_USAGE: &str = "alloc <process-id> <size-kb>";
const FREE_USAGE: &str = "free <process-id>";

/// A parsed shell command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Allocate { process_id: String, size: ClassSize },
    Deallocate { process_id: String },
    State,
    Help,
    Quit,
}

/// Why a raw line failed to parse
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty input")]
    Empty,

    #[error("unknown command {0:?}, try 'help'")]
    UnknownCommand(String),

    #[error("usage: {0}")]
    Usage(&'static str),

    #[error("memory size must be a positive number, got {0:?}")]
    InvalidSize(String),
}

/// Parse one raw input line.
///
/// Raw text never reaches the allocator: the process id is a non-empty
/// token by construction and the size must parse to a positive integer.
pub fn parse(line: &str) -> Result<Command, ParseError> {
    let mut parts = line.split_whitespace();
    let Some(keyword) = parts.next() else {
        return Err(ParseError::Empty);
    };

    match keyword {
        "alloc" | "allocate" => {
            let process_id = parts.next().ok_or(ParseError::Usage(ALLOC_USAGE))?;
            let raw_size = parts.next().ok_or(ParseError::Usage(ALLOC_USAGE))?;
            if parts.next().is_some() {
                return Err(ParseError::Usage(ALLOC_USAGE));
            }
            let size = raw_size
                .parse::<ClassSize>()
                .ok()
                .filter(|size| *size > 0)
                .ok_or_else(|| ParseError::InvalidSize(raw_size.to_string()))?;
            Ok(Command::Allocate {
                process_id: process_id.to_string(),
                size,
            })
        }
        "free" | "deallocate" => {
            let process_id = parts.next().ok_or(ParseError::Usage(FREE_USAGE))?;
            if parts.next().is_some() {
                return Err(ParseError::Usage(FREE_USAGE));
            }
            Ok(Command::Deallocate {
                process_id: process_id.to_string(),
            })
        }
        "state" | "blocks" => Ok(Command::State),
        "help" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(ParseError::UnknownCommand(other.to_string())),
    }
}

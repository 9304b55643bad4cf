use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::builder::BuilderInvalidReason;

/// Non-fatal outcomes of board actions that did not go through.
///
/// None of these leave the board in a different state than before the call.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum BoardError {
    /// The two locations cannot hold a bridge. Players expect such clicks to do nothing.
    #[error("no bridge can be built between these locations")]
    InvalidBridgeRequest,
    /// The undo history holds no entries.
    #[error("nothing to undo")]
    EmptyHistory,
    /// The loaded solution was replayed but does not satisfy every island.
    #[error("the solution file does not solve the puzzle")]
    SolutionMismatch,
}

/// Reasons a puzzle could not be loaded.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("error opening {path}: {source}")]
    Io {
        /// The file being read.
        path: PathBuf,
        /// What went wrong reading it.
        #[source]
        source: io::Error,
    },
    /// The file ending names no known puzzle format.
    #[error("{0} must end in .xy or .plain")]
    UnsupportedFormat(PathBuf),
    /// A line could not be parsed.
    #[error("line {line}: {reason}")]
    Malformed {
        /// 1-based line number in the file.
        line: usize,
        /// What was wrong with the line.
        reason: String,
    },
    /// The file holds no islands at all.
    #[error("puzzle has no islands")]
    Empty,
    /// The islands were parsed but do not form a valid board.
    #[error("invalid puzzle: {0:?}")]
    Invalid(Vec<BuilderInvalidReason>),
}

use std::fmt;
use std::io;

use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Failure of a counter group operation.
///
/// Each variant names the operation that failed. Opening never leaves a
/// partial group behind: by the time [`Open`][Self::Open] or
/// [`IdentifierQuery`][Self::IdentifierQuery] is returned, every counter
/// opened in that attempt has been closed.
#[derive(Debug, Error)]
pub enum Error {
    /// The kernel refused to create a counter, e.g. missing permission,
    /// exhausted resources or an event this CPU does not support.
    #[error("failed to open counter #{index} `{name}`")]
    Open {
        index: usize,
        name: String,
        #[source]
        source: io::Error,
    },

    /// The id of a freshly opened counter could not be queried.
    #[error("failed to query id of counter #{index} `{name}`")]
    IdentifierQuery {
        index: usize,
        name: String,
        #[source]
        source: io::Error,
    },

    /// A group-wide reset, start or stop was rejected.
    #[error("failed to {op} counter group")]
    Control {
        op: ControlOp,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Read(#[from] ReadError),

    /// The read record carries an id that belongs to no group member.
    #[error("counter id {id} matches no member of the group")]
    Correlation { id: u64 },

    /// A resolved value has no label at its catalog slot.
    #[error("no name for counter #{index}")]
    MissingName { index: usize },

    /// The output sink rejected a line.
    #[error("failed to write counter values")]
    Write(#[source] io::Error),
}

/// Failure while reading or decoding the grouped read record.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("failed to read counter group")]
    Io(#[source] io::Error),

    #[error("grouped read record truncated: expected {expected} bytes, got {actual}")]
    Truncated { expected: usize, actual: usize },

    #[error("grouped read record reports {reported} entries, group has {capacity}")]
    TooManyEntries { reported: u64, capacity: usize },

    #[error("grouped read record reports {reported} entries, group has {expected}")]
    MissingEntries { reported: usize, expected: usize },

    #[error("counter id {id} reported more than once")]
    DuplicateEntry { id: u64 },
}

/// Group-wide control operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlOp {
    Reset,
    Start,
    Stop,
}

impl fmt::Display for ControlOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op = match self {
            ControlOp::Reset => "reset",
            ControlOp::Start => "start",
            ControlOp::Stop => "stop",
        };
        f.write_str(op)
    }
}

//! Error types for adapter parsing and printing.
//!
//! This module provides error reporting with enough context to tell which
//! element kind rejected an input and why.
//!
//! ## Error Categories
//!
//! - **Unparsable**: no prefix of the input matched the kind's grammar
//! - **Out of Range**: a numeric prefix matched but does not fit the kind
//! - **I/O Errors**: the sink failed while printing
//!
//! ## Examples
//!
//! ```rust
//! use elemops::{Adapter, Error, IntAdapter};
//!
//! let result = IntAdapter.from_text("qwerty12345");
//! assert!(result.is_err());
//!
//! if let Err(err) = result {
//!     eprintln!("parse error: {}", err);
//!     // Error messages name the kind and echo the rejected input
//! }
//! ```

use thiserror::Error;

use crate::adapter::ValueKind;

/// Represents all possible errors that can occur while parsing or printing
/// through an adapter.
///
/// Each error variant carries the element kind and the offending input.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// IO error while writing to a print sink
    #[error("IO error: {0}")]
    Io(String),

    /// No prefix of the input matched the kind's grammar
    #[error("no {kind} could be parsed from {input:?}")]
    Unparsable {
        kind: ValueKind,
        input: String,
    },

    /// A numeric prefix matched the grammar but overflows the kind
    #[error("{kind} value in {input:?} is out of range")]
    OutOfRange {
        kind: ValueKind,
        input: String,
    },
}

impl Error {
    /// Creates an error for input with no parsable prefix.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use elemops::{Error, ValueKind};
    ///
    /// let err = Error::unparsable(ValueKind::Int, "qwerty");
    /// assert!(err.to_string().contains("integer"));
    /// ```
    pub fn unparsable(kind: ValueKind, input: &str) -> Self {
        Error::Unparsable {
            kind,
            input: input.to_string(),
        }
    }

    /// Creates an error for a numeric prefix that overflows the target kind.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use elemops::{Error, ValueKind};
    ///
    /// let err = Error::out_of_range(ValueKind::Int, "2147483648");
    /// assert!(err.to_string().contains("out of range"));
    /// ```
    pub fn out_of_range(kind: ValueKind, input: &str) -> Self {
        Error::OutOfRange {
            kind,
            input: input.to_string(),
        }
    }

    /// Creates an I/O error for print sink failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Returns the element kind a parse error refers to, if any.
    pub fn value_kind(&self) -> Option<ValueKind> {
        match self {
            Error::Unparsable { kind, .. } | Error::OutOfRange { kind, .. } => Some(*kind),
            Error::Io(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

//! The element adapter trait and its null-handling contract.
//!
//! This module provides the [`Adapter`] trait, the capability bundle a
//! container needs to print, order, format and parse one kind of element.
//! Containers hold optional values; the adapter owns the convention for the
//! absent case so every kind renders and orders nulls the same way.
//!
//! ## Core Types
//!
//! - [`Adapter`]: per-kind print / compare / to-text / from-text operations
//! - [`ValueKind`]: label for the element kind, used in error reports
//! - [`NULL_TOKEN`]: the text emitted for absent values
//!
//! ## Usage Patterns
//!
//! ### Printing a column of optional values
//!
//! ```rust
//! use elemops::{Adapter, IntAdapter};
//!
//! let column = [Some(3), None, Some(-7)];
//! let mut out = Vec::new();
//! for slot in &column {
//!     IntAdapter.print(&mut out, slot.as_ref()).unwrap();
//! }
//! assert_eq!(out, b"3 null -7 ");
//! ```
//!
//! ### Sorting with nulls first
//!
//! ```rust
//! use elemops::{Adapter, IntAdapter};
//!
//! let mut column = [Some(9), None, Some(2)];
//! column.sort_by(|a, b| IntAdapter.compare(a.as_ref(), b.as_ref()));
//! assert_eq!(column, [None, Some(2), Some(9)]);
//! ```
//!
//! ### Working through a trait object
//!
//! ```rust
//! use elemops::{Adapter, IntAdapter};
//!
//! let ops: &dyn Adapter<Value = i32> = &IntAdapter;
//! let parsed = ops.from_text("12345qwerty").unwrap();
//! assert_eq!(parsed, 12345);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::io;

use crate::error::{Error, Result};

/// Text emitted in place of an absent value.
///
/// Printed with the usual trailing separator, a null slot contributes exactly
/// `"null "` to the output.
pub const NULL_TOKEN: &str = "null";

/// Labels the element kind an adapter handles.
///
/// Carried inside [`Error`](crate::Error) variants so a failed parse names the
/// grammar that rejected the input.
///
/// # Examples
///
/// ```rust
/// use elemops::ValueKind;
///
/// assert_eq!(ValueKind::Int.to_string(), "integer");
/// assert_eq!(ValueKind::Ptr.name(), "pointer");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Char,
    Int,
    Float,
    Str,
    Ptr,
}

impl ValueKind {
    /// Returns the kind's lowercase name as used in error messages.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            ValueKind::Char => "char",
            ValueKind::Int => "integer",
            ValueKind::Float => "float",
            ValueKind::Str => "string",
            ValueKind::Ptr => "pointer",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-kind element operations with a shared null convention.
///
/// Implementors supply the present-value behavior ([`render`](Adapter::render),
/// [`compare_values`](Adapter::compare_values), [`from_text`](Adapter::from_text));
/// the provided methods lift those over `Option` so null handling is identical
/// across kinds:
///
/// - printing a null writes [`NULL_TOKEN`] plus the separator
/// - [`to_text`](Adapter::to_text) maps null to `None`, never to a string
/// - in [`compare`](Adapter::compare), null sorts before every present value
///   and equals itself, which keeps the order total
///
/// The trait is dyn-compatible, so a container can hold its operations as
/// `&dyn Adapter<Value = T>` chosen at runtime.
///
/// # Examples
///
/// ```rust
/// use std::cmp::Ordering;
/// use elemops::{Adapter, FloatAdapter};
///
/// assert_eq!(FloatAdapter.to_text(Some(&0.001)), Some("0.001".to_string()));
/// assert_eq!(FloatAdapter.to_text(None), None);
/// assert_eq!(FloatAdapter.compare(None, Some(&f64::MIN)), Ordering::Less);
/// ```
pub trait Adapter {
    /// The element type this adapter operates on.
    type Value;

    /// Returns the kind label used in diagnostics and error reports.
    fn kind(&self) -> ValueKind;

    /// Formats a present value as text.
    ///
    /// The rendering contains no separator and never equals [`NULL_TOKEN`]
    /// for numeric kinds; string elements may of course spell `"null"`.
    fn render(&self, value: &Self::Value) -> String;

    /// Orders two present values.
    ///
    /// Kinds without a total intrinsic order document their tie-breaking here;
    /// the float adapter treats NaN as equal to everything it is not less or
    /// greater than.
    fn compare_values(&self, a: &Self::Value, b: &Self::Value) -> Ordering;

    /// Parses a value from the longest matching prefix of `text`.
    ///
    /// Trailing unmatched input is ignored. See the kind implementations in
    /// [`kinds`](crate::kinds) for each grammar.
    ///
    /// # Errors
    ///
    /// [`Error::Unparsable`] when no prefix matches the grammar, and
    /// [`Error::OutOfRange`] when a numeric prefix overflows the kind.
    fn from_text(&self, text: &str) -> Result<Self::Value>;

    /// Writes the value and a single space separator to `sink`.
    ///
    /// A null slot is written as the five bytes `"null "`. Returns the number
    /// of bytes written, separator included.
    ///
    /// # Errors
    ///
    /// [`Error::Io`] when the sink fails.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use elemops::{Adapter, CharAdapter};
    ///
    /// let mut out = Vec::new();
    /// let written = CharAdapter.print(&mut out, Some(&'x')).unwrap();
    /// assert_eq!(written, 2);
    ///
    /// let written = CharAdapter.print(&mut out, None).unwrap();
    /// assert_eq!(written, 5);
    /// assert_eq!(out, b"x null ");
    /// ```
    fn print(&self, sink: &mut dyn io::Write, value: Option<&Self::Value>) -> Result<usize> {
        let rendered;
        let text = match value {
            Some(v) => {
                rendered = self.render(v);
                rendered.as_str()
            }
            None => NULL_TOKEN,
        };
        sink.write_all(text.as_bytes())
            .map_err(|e| Error::io(&e.to_string()))?;
        sink.write_all(b" ").map_err(|e| Error::io(&e.to_string()))?;
        Ok(text.len() + 1)
    }

    /// Formats an optional value, mapping null to `None`.
    ///
    /// Callers that need visible text for nulls substitute [`NULL_TOKEN`]
    /// themselves; the absent case is kept distinguishable from a string
    /// element that happens to spell `"null"`.
    #[must_use]
    fn to_text(&self, value: Option<&Self::Value>) -> Option<String> {
        value.map(|v| self.render(v))
    }

    /// Orders two optional values, null first.
    ///
    /// Null compares equal to null and less than every present value, so the
    /// relation stays reflexive, antisymmetric and transitive over optional
    /// slots.
    fn compare(&self, a: Option<&Self::Value>, b: Option<&Self::Value>) -> Ordering {
        match (a, b) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(a), Some(b)) => self.compare_values(a, b),
        }
    }

    /// Returns `true` when the two optional values order as equal.
    fn equals(&self, a: Option<&Self::Value>, b: Option<&Self::Value>) -> bool {
        self.compare(a, b) == Ordering::Equal
    }

    /// Releases an element removed from a container.
    ///
    /// Accepts null and does nothing for it. For owned kinds this drops the
    /// value and its buffers; for `Copy` kinds it is a no-op.
    fn release(&self, value: Option<Self::Value>) {
        drop(value);
    }
}

//! Adapter implementations for the built-in element kinds.
//!
//! Each kind pairs a value type with its grammar and rendering:
//!
//! | Adapter | Value | Parses | Renders |
//! |---|---|---|---|
//! | [`CharAdapter`] | `char` | first character, empty input as `'\0'` | the character |
//! | [`IntAdapter`] | `i32` | signed decimal prefix | decimal digits |
//! | [`FloatAdapter`] | `f64` | decimal or hex prefix, `inf`, `nan` | 15 significant digits, shortest notation |
//! | [`StringAdapter`] | `String` | the whole input | the string itself |
//! | [`PointerAdapter`] | [`Addr`] | hex prefix, optional `0x` | `0x`-prefixed hex |
//!
//! The numeric grammars skip leading whitespace and stop at the first byte
//! the kind cannot use, so `"12345qwerty"` parses as `12345` and the rest is
//! ignored. Only an input with no usable prefix at all is an error.
//!
//! ## Examples
//!
//! ```rust
//! use elemops::{Adapter, FloatAdapter, IntAdapter};
//!
//! assert_eq!(IntAdapter.from_text("  -42 17").unwrap(), -42);
//! assert_eq!(FloatAdapter.from_text("1e-3").unwrap(), 0.001);
//! assert_eq!(FloatAdapter.from_text("0x1F6db9").unwrap(), 2_059_705.0);
//! assert!(IntAdapter.from_text("qwerty12345").is_err());
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::num::IntErrorKind;

use tracing::debug;

use crate::adapter::{Adapter, ValueKind};
use crate::error::{Error, Result};
use crate::scan::FloatPrefix;
use crate::{render, scan};

/// Adapter for single `char` elements.
///
/// Parsing takes the first character of the input verbatim, whitespace
/// included; the empty input parses as `'\0'` rather than failing.
///
/// # Examples
///
/// ```rust
/// use elemops::{Adapter, CharAdapter};
///
/// assert_eq!(CharAdapter.from_text("cdefghijk").unwrap(), 'c');
/// assert_eq!(CharAdapter.from_text("").unwrap(), '\0');
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CharAdapter;

impl Adapter for CharAdapter {
    type Value = char;

    fn kind(&self) -> ValueKind {
        ValueKind::Char
    }

    fn render(&self, value: &char) -> String {
        value.to_string()
    }

    fn compare_values(&self, a: &char, b: &char) -> Ordering {
        a.cmp(b)
    }

    fn from_text(&self, text: &str) -> Result<char> {
        Ok(text.chars().next().unwrap_or('\0'))
    }
}

/// Adapter for `i32` elements.
///
/// Parsing reads an optionally signed decimal prefix after leading
/// whitespace. A prefix that overflows `i32` reports
/// [`Error::OutOfRange`](crate::Error::OutOfRange) instead of wrapping.
///
/// # Examples
///
/// ```rust
/// use elemops::{Adapter, IntAdapter};
///
/// assert_eq!(IntAdapter.from_text("123qwerty45").unwrap(), 123);
/// assert!(IntAdapter.from_text("2147483648").is_err());
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct IntAdapter;

impl Adapter for IntAdapter {
    type Value = i32;

    fn kind(&self) -> ValueKind {
        ValueKind::Int
    }

    fn render(&self, value: &i32) -> String {
        value.to_string()
    }

    fn compare_values(&self, a: &i32, b: &i32) -> Ordering {
        a.cmp(b)
    }

    fn from_text(&self, text: &str) -> Result<i32> {
        let subject = match scan::int_prefix(text) {
            Some(subject) => subject,
            None => {
                debug!("no integer could be parsed from {:?}", text);
                return Err(Error::unparsable(ValueKind::Int, text));
            }
        };
        subject.parse::<i32>().map_err(|e| match e.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                debug!("integer prefix {:?} does not fit an i32", subject);
                Error::out_of_range(ValueKind::Int, text)
            }
            _ => Error::unparsable(ValueKind::Int, text),
        })
    }
}

/// Adapter for `f64` elements.
///
/// Parsing accepts decimal and `0x` hexadecimal notation as well as the
/// case-insensitive `inf`, `infinity` and `nan` keywords. A finite subject
/// whose magnitude overflows `f64` reports
/// [`Error::OutOfRange`](crate::Error::OutOfRange); one that underflows
/// parses as (signed) zero. Rendering uses 15 significant digits in the
/// shortest of plain and scientific notation.
///
/// Ordering treats NaN as equal to every value it is not less or greater
/// than, which keeps comparisons total at the cost of NaN equality.
///
/// # Examples
///
/// ```rust
/// use elemops::{Adapter, FloatAdapter};
///
/// assert_eq!(FloatAdapter.from_text("-123.4nbvcxz").unwrap(), -123.4);
/// assert_eq!(FloatAdapter.from_text("0x1Fp-19").unwrap(), 31.0 / 524_288.0);
/// assert_eq!(FloatAdapter.to_text(Some(&1e16)), Some("1e+16".to_string()));
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FloatAdapter;

impl Adapter for FloatAdapter {
    type Value = f64;

    fn kind(&self) -> ValueKind {
        ValueKind::Float
    }

    fn render(&self, value: &f64) -> String {
        render::general(*value, f64::DIGITS as usize)
    }

    fn compare_values(&self, a: &f64, b: &f64) -> Ordering {
        a.partial_cmp(b).unwrap_or(Ordering::Equal)
    }

    fn from_text(&self, text: &str) -> Result<f64> {
        let prefix = match scan::float_prefix(text) {
            Some(prefix) => prefix,
            None => {
                debug!("no float could be parsed from {:?}", text);
                return Err(Error::unparsable(ValueKind::Float, text));
            }
        };
        let value = match prefix {
            FloatPrefix::Decimal(subject) => subject
                .parse::<f64>()
                .map_err(|_| Error::unparsable(ValueKind::Float, text))?,
            FloatPrefix::Hex {
                negative,
                mantissa,
                exponent,
            } => scan::hex_to_f64(negative, mantissa, exponent),
            FloatPrefix::Infinity { negative } => {
                return Ok(if negative {
                    f64::NEG_INFINITY
                } else {
                    f64::INFINITY
                });
            }
            FloatPrefix::Nan { negative } => {
                return Ok(if negative { -f64::NAN } else { f64::NAN });
            }
        };
        if value.is_infinite() {
            debug!("float subject in {:?} overflows f64", text);
            return Err(Error::out_of_range(ValueKind::Float, text));
        }
        Ok(value)
    }
}

/// Adapter for owned `String` elements.
///
/// Parsing copies the whole input, so every string round-trips through
/// [`to_text`](Adapter::to_text) unchanged, the empty string included.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StringAdapter;

impl Adapter for StringAdapter {
    type Value = String;

    fn kind(&self) -> ValueKind {
        ValueKind::Str
    }

    fn render(&self, value: &String) -> String {
        value.clone()
    }

    fn compare_values(&self, a: &String, b: &String) -> Ordering {
        a.cmp(b)
    }

    fn from_text(&self, text: &str) -> Result<String> {
        Ok(text.to_string())
    }
}

/// An element address: the numeric identity of a referent, comparable and
/// hashable without carrying a lifetime or a type.
///
/// # Examples
///
/// ```rust
/// use elemops::Addr;
///
/// let x = 7;
/// let addr = Addr::of(&x);
/// assert_eq!(addr, Addr::of(&x));
/// assert!(addr.to_string().starts_with("0x"));
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Addr(usize);

impl Addr {
    /// Captures the address of any referent.
    #[must_use]
    pub fn of<T: ?Sized>(value: &T) -> Self {
        Addr(value as *const T as *const () as usize)
    }

    /// Builds an address from its numeric form.
    #[must_use]
    pub const fn new(addr: usize) -> Self {
        Addr(addr)
    }

    /// Returns the numeric address.
    #[must_use]
    pub const fn value(self) -> usize {
        self.0
    }
}

impl From<usize> for Addr {
    fn from(addr: usize) -> Self {
        Addr(addr)
    }
}

impl fmt::Display for Addr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

/// Adapter for [`Addr`] elements.
///
/// Addresses render in `0x`-prefixed lowercase hex and order numerically,
/// so equality means pointer identity, not referent equality. Parsing reads
/// a hex prefix with an optional `0x`/`0X` marker.
///
/// # Examples
///
/// ```rust
/// use elemops::{Adapter, Addr, PointerAdapter};
///
/// assert_eq!(PointerAdapter.from_text("0x1f2a!").unwrap(), Addr::new(0x1f2a));
/// assert_eq!(PointerAdapter.to_text(Some(&Addr::new(0))), Some("0x0".to_string()));
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PointerAdapter;

impl Adapter for PointerAdapter {
    type Value = Addr;

    fn kind(&self) -> ValueKind {
        ValueKind::Ptr
    }

    fn render(&self, value: &Addr) -> String {
        value.to_string()
    }

    fn compare_values(&self, a: &Addr, b: &Addr) -> Ordering {
        a.cmp(b)
    }

    fn from_text(&self, text: &str) -> Result<Addr> {
        let subject = match scan::addr_prefix(text) {
            Some(subject) => subject,
            None => {
                debug!("no pointer could be parsed from {:?}", text);
                return Err(Error::unparsable(ValueKind::Ptr, text));
            }
        };
        match usize::from_str_radix(subject, 16) {
            Ok(addr) => Ok(Addr(addr)),
            Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow) => {
                debug!("address {:?} does not fit a usize", subject);
                Err(Error::out_of_range(ValueKind::Ptr, text))
            }
            Err(_) => Err(Error::unparsable(ValueKind::Ptr, text)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_labels_match_their_adapters() {
        assert_eq!(CharAdapter.kind(), ValueKind::Char);
        assert_eq!(IntAdapter.kind(), ValueKind::Int);
        assert_eq!(FloatAdapter.kind(), ValueKind::Float);
        assert_eq!(StringAdapter.kind(), ValueKind::Str);
        assert_eq!(PointerAdapter.kind(), ValueKind::Ptr);
        assert_eq!(ValueKind::Int.name(), "integer");
    }

    #[test]
    fn addr_captures_distinct_referents_in_order() {
        let cells = [1u8, 2, 3];
        let first = Addr::of(&cells[0]);
        let last = Addr::of(&cells[2]);
        assert!(first < last);
        assert_eq!(last.value() - first.value(), 2);
    }

    #[test]
    fn addr_converts_to_and_from_its_number() {
        let addr = Addr::from(0x7fff_1234usize);
        assert_eq!(addr, Addr::new(0x7fff_1234));
        assert_eq!(addr.value(), 0x7fff_1234);
        assert_eq!(addr.to_string(), "0x7fff1234");
    }

    #[test]
    fn addr_works_with_unsized_referents() {
        let text = "abc";
        let whole = Addr::of(text);
        let head = Addr::of(&text.as_bytes()[0]);
        assert_eq!(whole, head);
    }
}

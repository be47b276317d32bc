//! Element Adapter Semantics
//!
//! This module documents the conventions every adapter in this library
//! follows, so containers can rely on one contract across kinds.
//!
//! # Overview
//!
//! A container that stores optional elements needs four per-kind operations:
//! print, compare, to-text and from-text. Adapters bundle those operations
//! behind one trait and fix the conventions that must not vary by kind: how
//! absent values print, where they sort, and how lenient parsing is.
//!
//! ## Design Philosophy
//!
//! - **Nulls are ordinary**: every operation accepts the absent case and
//!   handles it the same way in every kind
//! - **Parsing is lenient**: the longest usable prefix wins and trailing
//!   input is ignored, in the manner of the classic C number scanners
//! - **Rendering is canonical**: one spelling per value, with floats in
//!   their shortest 15-digit form
//!
//! # The Null Convention
//!
//! | Operation | Null behavior |
//! |-----------|---------------|
//! | `print` | writes the five bytes `null ` |
//! | `to_text` | returns `None`, never a string |
//! | `compare` | null equals null and precedes every present value |
//! | `equals` | follows `compare` |
//! | `release` | accepts null as a no-op |
//!
//! `to_text` deliberately refuses to spell nulls: a `Some("null")` result
//! always means a present string element with that content. Callers who want
//! visible nulls substitute [`NULL_TOKEN`](crate::NULL_TOKEN) themselves.
//!
//! Sorting nulls first keeps the order total. With `N` for null and any
//! present values `a`, `b`:
//!
//! ```text
//! compare(N, N) == Equal
//! compare(N, a) == Less
//! compare(a, N) == Greater
//! compare(a, b) == compare_values(a, b)
//! ```
//!
//! # Rendering
//!
//! | Kind | Rendering | Examples |
//! |------|-----------|----------|
//! | char | the character itself | `x`, `!` |
//! | integer | decimal digits, `-` when negative | `0`, `-2147483648` |
//! | float | 15 significant digits, shortest notation | `0.001`, `1e+16` |
//! | string | the string, unquoted and unescaped | `World Hello` |
//! | pointer | `0x`-prefixed lowercase hex | `0x0`, `0x7fff1234` |
//!
//! ## Float notation
//!
//! Floats pick between plain and scientific notation by the rounded decimal
//! exponent `x`: plain when `-4 <= x < 15`, scientific otherwise. Trailing
//! fraction zeros are trimmed, scientific exponents carry a sign and at
//! least two digits, and non-finite values spell `inf`, `-inf`, `nan`,
//! `-nan`.
//!
//! ```text
//! 100.0               ->  100
//! 0.001               ->  0.001
//! 1234567.8901234568  ->  1234567.89012346
//! 1e16                ->  1e+16
//! 0.00001             ->  1e-05
//! f64::MAX            ->  1.79769313486232e+308
//! ```
//!
//! # Parsing
//!
//! Numeric kinds skip leading whitespace (space, tab, `\n`, `\v`, `\f`,
//! `\r`), then take the longest prefix their grammar accepts. Trailing
//! input never causes a failure; only the absence of any usable prefix does.
//!
//! | Kind | Grammar | `"input"` → value |
//! |------|---------|-------------------|
//! | char | first character; empty input is `'\0'` | `"cdef"` → `'c'` |
//! | integer | `[ws] [+-] digit+` | `"123qwerty45"` → `123` |
//! | float | decimal, hex, `inf`/`infinity`, `nan`, case-insensitive | `"1234.567nbvcxz"` → `1234.567` |
//! | string | the whole input | `""` → `""` |
//! | pointer | `[ws] [0x] hexdigit+` | `"0x1f2a!"` → `0x1f2a` |
//!
//! ## Float subjects
//!
//! ```text
//! decimal:  [+-] digits [. digits] [e [+-] digits]
//! hex:      [+-] 0x hexdigits [. hexdigits] [p [+-] digits]
//! keyword:  [+-] inf | infinity | nan [(alnum_)]
//! ```
//!
//! An exponent marker without digits is not part of the subject: `"1e"`
//! parses as `1`, `"0x1Fp"` as `0x1F`. A bare `"0x"` with no hex digit
//! falls back to the decimal subject `0`.
//!
//! ## Range behavior
//!
//! - An integer prefix outside `i32` is an out-of-range error, never a
//!   wrapped or saturated value.
//! - A float subject whose magnitude exceeds `f64::MAX` is an out-of-range
//!   error; one too small for `f64` quietly parses as (signed) zero.
//! - A pointer prefix outside `usize` is an out-of-range error.
//! - `inf` and `nan` keywords are values, not range errors.
//!
//! # Edge Cases
//!
//! - `""` parses as `'\0'` for char and `""` for string; for the numeric
//!   kinds it is unparsable.
//! - `'\0'` renders as the NUL character itself, one byte long.
//! - `-0.0` renders as `-0` and parses back with its sign.
//! - NaN compares equal to everything unordered against it, so a NaN
//!   element neither precedes nor follows a number.
//! - Pointer equality is identity: two addresses are equal exactly when
//!   they are the same address.
//!
//! # Limitations
//!
//! - **One integer width**: the integer kind is `i32`; wider input is out
//!   of range rather than promoted.
//! - **No locale handling**: the decimal separator is `.` regardless of
//!   environment.
//! - **Parsed, not validated**: `from_text` does not reject trailing
//!   garbage, so it cannot be used as a whole-input validator.

// This module contains only documentation; no implementation code

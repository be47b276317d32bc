//! # elemops
//!
//! Null-aware print, compare, to-text and from-text adapters for primitive
//! element kinds, pluggable into generic containers.
//!
//! ## What are element adapters?
//!
//! A generic container (a list, a tree, a table column) stores elements it
//! knows nothing about. To print itself, sort itself or load itself from
//! text, it needs a small bundle of per-kind operations. This crate provides
//! that bundle as the [`Adapter`] trait plus ready-made implementations for
//! chars, integers, floats, strings and addresses, with one shared
//! convention for absent values.
//!
//! ## Key Features
//!
//! - **Uniform null handling**: nulls print as `null `, sort before every
//!   present value and stay distinguishable from the string `"null"`
//! - **Lenient parsing**: the longest usable prefix wins, trailing garbage
//!   is ignored, and hex floats, `inf` and `nan` are understood
//! - **Canonical rendering**: floats come out in their shortest 15-digit
//!   form, `100` rather than `100.000000000000000`
//! - **Dyn-compatible**: containers can pick their operations at runtime
//!   through `&dyn Adapter<Value = T>`
//! - **No Unsafe Code**: written entirely in safe Rust
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! elemops = "0.1"
//! ```
//!
//! ### Parsing and printing
//!
//! ```rust
//! use elemops::{Adapter, FloatAdapter, IntAdapter};
//!
//! // the longest usable prefix parses; the rest is ignored
//! assert_eq!(IntAdapter.from_text("12345qwerty").unwrap(), 12345);
//! assert_eq!(FloatAdapter.from_text("1e-3").unwrap(), 0.001);
//!
//! // nulls print as the five bytes "null "
//! let mut out = Vec::new();
//! IntAdapter.print(&mut out, Some(&3)).unwrap();
//! IntAdapter.print(&mut out, None).unwrap();
//! assert_eq!(out, b"3 null ");
//! ```
//!
//! ### Sorting optional elements
//!
//! ```rust
//! use elemops::{Adapter, FloatAdapter};
//!
//! let mut column = [Some(2.5), None, Some(-0.5), None];
//! column.sort_by(|a, b| FloatAdapter.compare(a.as_ref(), b.as_ref()));
//! assert_eq!(column, [None, None, Some(-0.5), Some(2.5)]);
//! ```
//!
//! ### Choosing operations at runtime
//!
//! ```rust
//! use elemops::{Adapter, IntAdapter};
//!
//! fn load(ops: &dyn Adapter<Value = i32>, lines: &[&str]) -> Vec<i32> {
//!     lines.iter().filter_map(|line| ops.from_text(line).ok()).collect()
//! }
//!
//! let values = load(&IntAdapter, &["17", "noise", "-3"]);
//! assert_eq!(values, [17, -3]);
//! ```
//!
//! ## Performance Characteristics
//!
//! - **Parsing**: single pass over the matched prefix, no allocation except
//!   for string elements
//! - **Rendering**: one output `String` per value
//! - **Comparison**: constant time for the scalar kinds
//!
//! ## Safety Guarantees
//!
//! - No `unsafe` code blocks
//! - No panics in the public API; failures surface as [`Error`]
//! - Addresses are plain numbers ([`Addr`]), never dereferenced
//!
//! ## Examples
//!
//! See the `demos/` directory for runnable walkthroughs:
//!
//! - **`tour.rs`** - printing, sorting and releasing optional elements
//! - **`parsing.rs`** - the parsing grammars and their error cases
//!
//! Run any of them with: `cargo run --example <name>`

pub mod adapter;
pub mod error;
pub mod kinds;
mod render;
mod scan;
pub mod semantics;

pub use adapter::{Adapter, ValueKind, NULL_TOKEN};
pub use error::{Error, Result};
pub use kinds::{Addr, CharAdapter, FloatAdapter, IntAdapter, PointerAdapter, StringAdapter};

//! Printing, sorting and releasing optional elements through one adapter.
//!
//! Run with: cargo run --example tour

use std::error::Error;
use std::io;

use elemops::{Adapter, FloatAdapter, IntAdapter, StringAdapter};

fn print_column<A: Adapter>(ops: &A, column: &[Option<A::Value>]) -> elemops::Result<usize> {
    let mut stdout = io::stdout();
    let mut written = 0;
    for slot in column {
        written += ops.print(&mut stdout, slot.as_ref())?;
    }
    println!();
    Ok(written)
}

fn main() -> Result<(), Box<dyn Error>> {
    // A column of optional integers prints with nulls spelled out
    let mut ages = vec![Some(30), None, Some(25), Some(61), None];
    let written = print_column(&IntAdapter, &ages)?;
    println!("  ({} bytes, separator included)\n", written);

    // Sorting with the adapter puts nulls ahead of every value
    ages.sort_by(|a, b| IntAdapter.compare(a.as_ref(), b.as_ref()));
    print_column(&IntAdapter, &ages)?;
    println!("  (nulls first)\n");

    // Floats render in their shortest 15-digit form
    let readings = vec![
        Some(0.001),
        Some(2_059_705.0),
        Some(12_345_678_912_345_678.9),
        None,
        Some(f64::INFINITY),
    ];
    print_column(&FloatAdapter, &readings)?;
    println!("  (canonical float spellings)\n");

    // to_text keeps nulls distinguishable from the string "null"
    let labels = vec![Some("null".to_string()), None];
    for slot in &labels {
        match StringAdapter.to_text(slot.as_ref()) {
            Some(text) => println!("present element: {:?}", text),
            None => println!("absent element"),
        }
    }

    // Elements removed from a column go through release; nulls are fine
    for slot in labels {
        StringAdapter.release(slot);
    }
    println!("\n✓ Column released");

    Ok(())
}

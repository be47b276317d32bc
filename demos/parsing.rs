//! The parsing grammars, their leniency and their error cases.
//!
//! Run with: cargo run --example parsing

use std::error::Error;

use elemops::{Adapter, CharAdapter, FloatAdapter, IntAdapter, PointerAdapter};

fn show<A>(ops: &A, inputs: &[&str])
where
    A: Adapter,
    A::Value: std::fmt::Debug,
{
    println!("-- {} --", ops.kind());
    for input in inputs {
        match ops.from_text(input) {
            Ok(value) => println!("  {:>24?} -> {:?}", input, value),
            Err(err) => println!("  {:>24?} -> error: {}", input, err),
        }
    }
    println!();
}

fn main() -> Result<(), Box<dyn Error>> {
    // The longest usable prefix wins; trailing garbage is ignored
    show(&IntAdapter, &[
        "12345",
        "12345qwerty",
        "123qwerty45",
        "   -40381 rest",
        "qwerty12345",
        "2147483648",
    ]);

    // Floats accept decimal and hex notation plus inf/nan keywords
    show(&FloatAdapter, &[
        "1234.567nbvcxz",
        "1e-3",
        "1e",
        "0x1F6db9",
        "0x1Fp-19",
        "-INFINITY",
        "nan(alpha_7)",
        "34e+1024",
        "34e-1024",
        "",
    ]);

    // Chars take the first character; only the empty input is special
    show(&CharAdapter, &["cdefghijk0987654321", " x", ""]);

    // Pointers read hex with an optional 0x marker
    show(&PointerAdapter, &["0x1f2a", "1F2A", "0x", "zz"]);

    Ok(())
}

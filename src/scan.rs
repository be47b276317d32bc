//! Prefix scanners for the parsing grammars.
//!
//! Each scanner skips leading whitespace, then slices the longest prefix the
//! kind's grammar accepts; trailing input is left alone and never causes a
//! failure. Numeric conversion happens in [`kinds`](crate::kinds), except for
//! hexadecimal floats whose mantissa and binary exponent are split here.

/// The float grammar's possible subjects.
#[derive(Debug, PartialEq)]
pub(crate) enum FloatPrefix<'a> {
    /// Plain decimal notation, sign included, ready for `f64::from_str`.
    Decimal(&'a str),
    /// Hexadecimal notation: hex digits with at most one point, plus the
    /// binary exponent from an optional `p` suffix.
    Hex {
        negative: bool,
        mantissa: &'a str,
        exponent: i64,
    },
    /// An `inf` or `infinity` keyword.
    Infinity { negative: bool },
    /// A `nan` keyword, optional `(chars)` payload already consumed.
    Nan { negative: bool },
}

struct Cursor<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(text: &'a str) -> Self {
        Cursor { text, pos: 0 }
    }

    fn peek(&self) -> Option<u8> {
        self.text.as_bytes().get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<u8> {
        self.text.as_bytes().get(self.pos + offset).copied()
    }

    fn advance(&mut self, n: usize) {
        self.pos += n;
    }

    fn skip_space(&mut self) {
        while matches!(self.peek(), Some(b) if is_space(b)) {
            self.pos += 1;
        }
    }

    /// Consumes a leading `+` or `-`; returns `true` for `-`.
    fn eat_sign(&mut self) -> bool {
        match self.peek() {
            Some(b'-') => {
                self.pos += 1;
                true
            }
            Some(b'+') => {
                self.pos += 1;
                false
            }
            _ => false,
        }
    }

    fn eat_while(&mut self, pred: impl Fn(u8) -> bool) -> usize {
        let start = self.pos;
        while matches!(self.peek(), Some(b) if pred(b)) {
            self.pos += 1;
        }
        self.pos - start
    }

    /// Consumes `keyword` if it matches ASCII case-insensitively.
    fn eat_keyword(&mut self, keyword: &str) -> bool {
        let end = self.pos + keyword.len();
        if end > self.text.len() {
            return false;
        }
        if self.text.as_bytes()[self.pos..end].eq_ignore_ascii_case(keyword.as_bytes()) {
            self.pos = end;
            true
        } else {
            false
        }
    }

    fn slice_from(&self, start: usize) -> &'a str {
        &self.text[start..self.pos]
    }
}

/// Whitespace skipped ahead of every numeric subject: space, tab, and the
/// line controls `\n` `\v` `\f` `\r`.
fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}

/// Slices a signed decimal integer: optional sign, then at least one digit.
pub(crate) fn int_prefix(text: &str) -> Option<&str> {
    let mut cur = Cursor::new(text);
    cur.skip_space();
    let start = cur.pos;
    cur.eat_sign();
    if cur.eat_while(|b| b.is_ascii_digit()) == 0 {
        return None;
    }
    Some(cur.slice_from(start))
}

/// Finds the longest float subject: decimal or hex notation, `inf`/`infinity`
/// or `nan`, all case-insensitive.
///
/// An exponent marker without digits is not part of the subject, so `"1e"`
/// scans as `1`; likewise `"0x"` without hex digits scans as the decimal `0`.
pub(crate) fn float_prefix(text: &str) -> Option<FloatPrefix<'_>> {
    let mut cur = Cursor::new(text);
    cur.skip_space();
    let start = cur.pos;
    let negative = cur.eat_sign();

    if cur.eat_keyword("infinity") || cur.eat_keyword("inf") {
        return Some(FloatPrefix::Infinity { negative });
    }
    if cur.eat_keyword("nan") {
        eat_nan_payload(&mut cur);
        return Some(FloatPrefix::Nan { negative });
    }

    if cur.peek() == Some(b'0')
        && matches!(cur.peek_at(1), Some(b'x' | b'X'))
        && hex_digits_follow(&cur)
    {
        cur.advance(2);
        let mant_start = cur.pos;
        cur.eat_while(|b| b.is_ascii_hexdigit());
        if cur.peek() == Some(b'.') {
            cur.advance(1);
            cur.eat_while(|b| b.is_ascii_hexdigit());
        }
        let mantissa = cur.slice_from(mant_start);
        let exponent = eat_binary_exponent(&mut cur);
        return Some(FloatPrefix::Hex {
            negative,
            mantissa,
            exponent,
        });
    }

    let int_digits = cur.eat_while(|b| b.is_ascii_digit());
    let mut frac_digits = 0;
    if cur.peek() == Some(b'.') {
        cur.advance(1);
        frac_digits = cur.eat_while(|b| b.is_ascii_digit());
    }
    if int_digits + frac_digits == 0 {
        return None;
    }
    eat_decimal_exponent(&mut cur);
    Some(FloatPrefix::Decimal(cur.slice_from(start)))
}

/// Slices the hex digits of an address, accepting an optional `0x` prefix.
///
/// Mirrors base-16 integer scanning: `"0x"` with no digit after it is read
/// as the digit `0`, not as an empty subject.
pub(crate) fn addr_prefix(text: &str) -> Option<&str> {
    let mut cur = Cursor::new(text);
    cur.skip_space();
    if cur.peek() == Some(b'0')
        && matches!(cur.peek_at(1), Some(b'x' | b'X'))
        && matches!(cur.peek_at(2), Some(b) if b.is_ascii_hexdigit())
    {
        cur.advance(2);
    }
    let start = cur.pos;
    if cur.eat_while(|b| b.is_ascii_hexdigit()) == 0 {
        return None;
    }
    Some(cur.slice_from(start))
}

/// True when `0x` at the cursor is followed by a hex mantissa rather than
/// bare trailing text.
fn hex_digits_follow(cur: &Cursor<'_>) -> bool {
    match cur.peek_at(2) {
        Some(b) if b.is_ascii_hexdigit() => true,
        Some(b'.') => matches!(cur.peek_at(3), Some(b) if b.is_ascii_hexdigit()),
        _ => false,
    }
}

/// Consumes a `(chars)` payload after `nan`, backing off when the closing
/// parenthesis never comes.
fn eat_nan_payload(cur: &mut Cursor<'_>) {
    if cur.peek() != Some(b'(') {
        return;
    }
    let mark = cur.pos;
    cur.advance(1);
    cur.eat_while(|b| b == b'_' || b.is_ascii_alphanumeric());
    if cur.peek() == Some(b')') {
        cur.advance(1);
    } else {
        cur.pos = mark;
    }
}

/// Consumes `e[sign]digits`, backing off when no digits follow the marker.
fn eat_decimal_exponent(cur: &mut Cursor<'_>) {
    if !matches!(cur.peek(), Some(b'e' | b'E')) {
        return;
    }
    let mark = cur.pos;
    cur.advance(1);
    cur.eat_sign();
    if cur.eat_while(|b| b.is_ascii_digit()) == 0 {
        cur.pos = mark;
    }
}

/// Consumes `p[sign]digits` and returns the binary exponent, saturating on
/// absurd digit runs; absent or digit-less markers yield zero.
fn eat_binary_exponent(cur: &mut Cursor<'_>) -> i64 {
    if !matches!(cur.peek(), Some(b'p' | b'P')) {
        return 0;
    }
    let mark = cur.pos;
    cur.advance(1);
    let negative = cur.eat_sign();
    let start = cur.pos;
    if cur.eat_while(|b| b.is_ascii_digit()) == 0 {
        cur.pos = mark;
        return 0;
    }
    let mut exponent: i64 = 0;
    for b in cur.slice_from(start).bytes() {
        exponent = exponent
            .saturating_mul(10)
            .saturating_add(i64::from(b - b'0'));
    }
    if negative {
        -exponent
    } else {
        exponent
    }
}

/// Converts a scanned hex mantissa and binary exponent to `f64`.
///
/// The mantissa accumulates into 128 bits; integer digits past that widen the
/// exponent instead, fraction digits past it only sharpen a value already at
/// full precision and are dropped. Overflow saturates to infinity, underflow
/// to (signed) zero.
pub(crate) fn hex_to_f64(negative: bool, mantissa: &str, exponent: i64) -> f64 {
    let mut mant: u128 = 0;
    let mut exp = exponent;
    let mut fractional = false;
    for b in mantissa.bytes() {
        if b == b'.' {
            fractional = true;
            continue;
        }
        let digit = match b {
            b'0'..=b'9' => b - b'0',
            b'a'..=b'f' => b - b'a' + 10,
            _ => b - b'A' + 10,
        };
        if mant >> 120 == 0 {
            mant = (mant << 4) | u128::from(digit);
            if fractional {
                exp = exp.saturating_sub(4);
            }
        } else if !fractional {
            exp = exp.saturating_add(4);
        }
    }
    let magnitude = scale2(mant as f64, exp);
    if negative {
        -magnitude
    } else {
        magnitude
    }
}

/// Multiplies by `2^exponent` in steps that keep every factor a normal
/// finite power of two.
fn scale2(mut value: f64, exponent: i64) -> f64 {
    let mut remaining = exponent.clamp(-2_200, 2_200) as i32;
    while remaining != 0 {
        let step = remaining.clamp(-1_000, 1_000);
        value *= pow2(step);
        remaining -= step;
    }
    value
}

/// Exact `2^exp` for exponents in the normal range.
fn pow2(exp: i32) -> f64 {
    f64::from_bits(u64::from((exp + 1_023) as u32) << 52)
}

//! Plain decimal rendering of sample fields
//!
//! Output fields are always written in positional notation (`0.00003`, never
//! `3e-5`). Integral values keep a fractional part (`1.0`), and non-finite
//! values are written as `inf`, `-inf` or `NaN`.

use core::fmt::{self, Write};

/// Widest rendering of one `f32` field
///
/// The smallest subnormal needs 45 fractional digits and `f32::MAX` has 39
/// integer digits; with sign, point and shortest round-trip digits every
/// value stays below this.
pub const MAX_FIELD_WIDTH: usize = 56;

/// Forwards text and remembers whether it carried a point or a non-finite word
struct Tracking<'a, W: Write> {
    out: &'a mut W,
    has_point: bool,
}

impl<W: Write> Write for Tracking<'_, W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if s.contains(['.', 'i', 'N']) {
            self.has_point = true;
        }
        self.out.write_str(s)
    }
}

/// Write `value` as a plain decimal
pub fn write_decimal<W: Write>(out: &mut W, value: f32) -> fmt::Result {
    let mut tracking = Tracking {
        out,
        has_point: false,
    };
    write!(tracking, "{}", value)?;
    if !tracking.has_point {
        tracking.out.write_str(".0")?;
    }
    Ok(())
}

//! Scalar diagnostic builtins for Laurel programs.

use std::io::{self, Write};
use std::process;

/// Print an integer followed by a newline and return it unchanged.
///
/// The pass-through return value lets generated code use the call as an
/// expression: `x = println(compute())` both logs and propagates.
///
/// Signature: `(n: i32) -> i32`
#[unsafe(no_mangle)]
pub extern "C" fn println(n: i32) -> i32 {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if write_scalar(n, &mut out).is_err() {
        process::abort();
    }
    n
}

/// Formatting seam for [`println`], testable against any writer.
pub(crate) fn write_scalar<W: Write>(n: i32, out: &mut W) -> io::Result<()> {
    writeln!(out, "{n}")
}

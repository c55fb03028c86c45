//! By-value record passing and the record diagnostic builtins.
//!
//! `Person` is the composite record the code generator lowers to a C-style
//! aggregate. It crosses the call boundary by value in both directions, so
//! the layout here is a binary contract: field order and widths must match
//! the declaration the generated code was compiled against, forever.

use std::io::{self, Write};
use std::process;

/// The composite record passed by value across the generated-code boundary.
///
/// `#[repr(C)]` layout contract: `age` at offset 0 (4 bytes), `alive` at
/// offset 4 (1 byte), trailing padding to size 8, alignment 4. The record is
/// caller-owned and copied at each call; it has no heap identity and never
/// enters the GC object graph.
///
/// `alive` must hold 0 or 1 at the byte level (C `_Bool` contract). The code
/// generator normalizes truth values before calling in.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Person {
    pub age: i32,
    pub alive: bool,
}

/// Construct a record and immediately report it on stdout.
///
/// Returns the constructed record by value; the returned fields equal the
/// inputs exactly. Emits the same two lines as [`print_person`] before
/// returning. Cannot fail.
///
/// Signature: `(age: i32, alive: i1) -> Person`
#[unsafe(no_mangle)]
pub extern "C" fn create_person(age: i32, alive: bool) -> Person {
    let person = Person { age, alive };
    print_person(person);
    person
}

/// Print a record's fields to stdout, two lines, booleans as `1`/`0`.
///
/// The integer rendering of the boolean is a stable text contract inherited
/// from the original `printf("%d", ...)` output; do not "fix" it to
/// `true`/`false`.
///
/// Signature: `(person: Person) -> ()`
#[unsafe(no_mangle)]
pub extern "C" fn print_person(person: Person) {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if write_person(&person, &mut out).is_err() {
        // A dead stdout is unrecoverable at this layer; no error value
        // crosses the C ABI.
        process::abort();
    }
}

/// Formatting seam for [`print_person`], testable against any writer.
pub(crate) fn write_person<W: Write>(person: &Person, out: &mut W) -> io::Result<()> {
    writeln!(out, "alive person? {}", person.alive as i32)?;
    writeln!(out, "Age: {} {}", person.age, person.alive as i32)
}

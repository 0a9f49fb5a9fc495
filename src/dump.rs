//! Textual dump rendering for [`BoundedSequence`](crate::BoundedSequence).
//!
//! Two modes share one line format: an indented, comma-separated row of
//! values followed by a label line.
//!
//! Full-storage mode renders every backing slot (filler included) and
//! reports the fixed capacity:
//!
//! ```text
//!     1, 2, 3, 0, 0, 0, 0
//!     SIZE of array: 7
//! ```
//!
//! Logical mode renders only the first `count` values (omitting the row
//! entirely when the sequence is empty) and reports the count:
//!
//! ```text
//!     1, 2, 3
//!     Count of elements in array: 3
//! ```
//!
//! The indent, separator, and label texts are a compatibility surface for
//! downstream consumers of the dump; change them and every golden output
//! breaks.

use std::io;
use std::io::Write;

/// Indent token prefixing each value row and label line.
pub const INDENT: &str = "    ";

/// Separator between values in a row.
pub const SEPARATOR: &str = ", ";

/// Label preceding the capacity in full-storage mode.
pub const SIZE_LABEL: &str = "SIZE of array: ";

/// Label preceding the count in logical mode.
pub const COUNT_LABEL: &str = "Count of elements in array: ";

fn write_row<W: Write>(values: &[i64], out: &mut W) -> io::Result<()> {
    assert!(!values.is_empty());

    write!(out, "{INDENT}")?;
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            write!(out, "{SEPARATOR}")?;
        }
        write!(out, "{value}")?;
    }
    writeln!(out)
}

/// Renders the entire backing storage plus the capacity label line.
///
/// `values` must be the full storage slice, so the row always holds exactly
/// `capacity` entries regardless of how many are logically set.
pub fn write_storage<W: Write>(values: &[i64], out: &mut W) -> io::Result<()> {
    assert!(!values.is_empty());

    write_row(values, out)?;
    writeln!(out, "{INDENT}{SIZE_LABEL}{}", values.len())
}

/// Renders the logical contents plus the count label line.
///
/// The value row is omitted when `values` is empty; the label line is
/// always written.
pub fn write_logical<W: Write>(values: &[i64], out: &mut W) -> io::Result<()> {
    if !values.is_empty() {
        write_row(values, out)?;
    }
    writeln!(out, "{INDENT}{COUNT_LABEL}{}", values.len())
}

//! Prefixed diagnostic output for the user.

use std::fmt;
use std::io::{self, Write};

/// Prefix written before every diagnostic line.
pub const DIAGNOSTIC_PREFIX: &str = "omg-protoc: ";

/// Handle for user-facing diagnostics.
///
/// Writes one prefixed line per message to the wrapped sink. The binary
/// uses [`Diagnostics::stderr()`]; tests pass an in-memory buffer.
///
/// # Examples
///
/// ```
/// use omg_protoc_core::Diagnostics;
///
/// let mut buffer = Vec::new();
/// {
///     let mut diagnostics = Diagnostics::new(&mut buffer);
///     diagnostics.line(format_args!("install failed"));
/// }
/// assert_eq!(String::from_utf8(buffer).unwrap(), "omg-protoc: install failed\n");
/// ```
pub struct Diagnostics<'w> {
    prefix: &'static str,
    sink: Box<dyn Write + 'w>,
}

impl<'w> Diagnostics<'w> {
    pub fn new(sink: impl Write + 'w) -> Self {
        Self {
            prefix: DIAGNOSTIC_PREFIX,
            sink: Box::new(sink),
        }
    }

    pub fn stderr() -> Diagnostics<'static> {
        Diagnostics::new(io::stderr())
    }

    /// Writes one prefixed line. Write errors are dropped; there is nowhere
    /// left to report them.
    pub fn line(&mut self, message: fmt::Arguments<'_>) {
        let _ = writeln!(self.sink, "{}{message}", self.prefix);
        let _ = self.sink.flush();
    }
}

impl fmt::Debug for Diagnostics<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Diagnostics")
            .field("prefix", &self.prefix)
            .finish_non_exhaustive()
    }
}

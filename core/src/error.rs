//! Error types for the wrapper.
//!
//! A single [`ToolError`] covers every failure that can escape a component:
//! child processes that fail or cannot be spawned, resolver output that does
//! not parse, and a compiler that cannot be found on `PATH`.

use thiserror::Error;

/// Errors surfaced by collaborators and the compile driver.
#[derive(Debug, Error)]
pub enum ToolError {
    /// A child process ran and exited unsuccessfully.
    ///
    /// `stderr` is already trimmed and reindented with [`reindent`].
    #[error("`{command}` failed: {status}\n  {stderr}")]
    CommandFailed {
        command: String,
        status: String,
        stderr: String,
    },

    /// A child process could not be started or awaited.
    #[error("`{command}` failed: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The metadata resolver printed something that is not a package object.
    #[error("Cannot parse `{command}` output: {source}")]
    InvalidMetadata {
        command: String,
        #[source]
        source: serde_json::Error,
    },

    /// The compiler executable is not on the search path.
    #[error(
        "Cannot find the `{program}` command: {reason}.\nPlease install it or see: https://github.com/protocolbuffers/protobuf#protocol-compiler-installation"
    )]
    CompilerNotFound { program: String, reason: String },
}

/// Convenience alias for results with [`ToolError`].
pub type Result<T> = std::result::Result<T, ToolError>;

/// Trims captured diagnostic text and indents every continuation line by two
/// spaces so it nests under the failure headline.
///
/// # Examples
///
/// ```
/// use omg_protoc_core::reindent;
///
/// assert_eq!(reindent("\nfoo.proto: error\nbar.proto: error\n"), "foo.proto: error\n  bar.proto: error");
/// ```
pub fn reindent(text: &str) -> String {
    text.trim().replace('\n', "\n  ")
}

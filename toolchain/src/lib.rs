//! Real collaborators for the `omg-protoc` wrapper.
//!
//! - [`GoTool`] — resolves plugin packages with `go list -json` and builds
//!   them with `go install`.
//! - [`ProtocCompiler`] — `protoc` located on `PATH`, run with its standard
//!   output forwarded.
//!
//! All child processes go through [`process::run`], which captures standard
//! error and turns unsuccessful exits into
//! [`ToolError::CommandFailed`](omg_protoc_core::ToolError::CommandFailed).

pub mod go;
pub mod process;
pub mod protoc;

pub use go::GoTool;
pub use protoc::ProtocCompiler;

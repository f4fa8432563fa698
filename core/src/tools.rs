//! Seams to the external programs the wrapper drives.
//!
//! The rewriter only talks to these traits, so it can run against fakes in
//! tests without spawning anything. Real implementations live in the
//! `omg-protoc-toolchain` crate.

use std::ffi::OsString;

use crate::error::Result;
use crate::plugin::PackageMetadata;

/// Looks up where a package is (or would be) installed.
pub trait PackageResolver {
    /// Any error means "not a known plugin" to the rewriter.
    fn resolve(&self, import_path: &str) -> Result<PackageMetadata>;
}

/// Builds and installs a package.
pub trait PackageInstaller {
    fn install(&self, import_path: &str) -> Result<()>;
}

/// The protocol-buffer compiler.
pub trait Compiler {
    /// Runs the compiler to completion, forwarding its standard output.
    fn run(&self, args: &[OsString]) -> Result<()>;
}

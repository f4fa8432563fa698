//! One complete wrapper invocation: rewrite, then delegate.

use std::ffi::OsStr;

use tracing::debug;

use crate::config::RewriteConfig;
use crate::diagnostics::Diagnostics;
use crate::error::Result;
use crate::rewrite::ArgumentRewriter;
use crate::tools::{Compiler, PackageInstaller, PackageResolver};

/// The collaborators one invocation runs against.
pub struct Toolchain<'a> {
    pub resolver: &'a dyn PackageResolver,
    pub installer: &'a dyn PackageInstaller,
    pub compiler: &'a dyn Compiler,
}

/// Rewrites `args` and runs the compiler with the result.
///
/// The compiler must already be located; a failing compiler run is the only
/// error this returns.
pub fn compile<S: AsRef<OsStr>>(
    config: &RewriteConfig,
    toolchain: &Toolchain<'_>,
    diagnostics: &mut Diagnostics<'_>,
    args: &[S],
) -> Result<()> {
    let rewritten =
        ArgumentRewriter::new(config, toolchain.resolver, toolchain.installer, diagnostics)
            .process(args);
    let compiler_args = rewritten.into_compiler_args();
    debug!(args = ?compiler_args, "Invoking compiler");
    toolchain.compiler.run(&compiler_args)
}

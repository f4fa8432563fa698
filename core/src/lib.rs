//! Argument rewriting and plugin discovery for `protoc`.
//!
//! This crate holds everything the `omg-protoc` wrapper decides on its own,
//! with every external program behind a trait:
//!
//! - [`FlagArg`] — splits `--name=value` arguments and recognizes
//!   `--<stem>_out` plugin flags.
//! - [`insert_type_mappings`] / [`GOGO_TYPE_MAPPINGS`] — default
//!   well-known-type mappings prepended to plugin values.
//! - [`PluginDescriptor`] / [`PackageMetadata`] — what a flag names and what
//!   the package resolver reports for it.
//! - [`ArgumentRewriter`] — the single pass that resolves, installs and
//!   registers plugins and rewrites their flags.
//! - [`compile`] — rewrite, then hand the result to the [`Compiler`].
//!
//! Real implementations of [`PackageResolver`], [`PackageInstaller`] and
//! [`Compiler`] are in `omg-protoc-toolchain`.
//!
//! # Example
//!
//! ```
//! use omg_protoc_core::*;
//!
//! struct NoPackages;
//!
//! impl PackageResolver for NoPackages {
//!     fn resolve(&self, import_path: &str) -> Result<PackageMetadata> {
//!         Err(ToolError::CommandFailed {
//!             command: format!("go list -mod=readonly -json {import_path}"),
//!             status: "exit status: 1".to_string(),
//!             stderr: "cannot find package".to_string(),
//!         })
//!     }
//! }
//!
//! impl PackageInstaller for NoPackages {
//!     fn install(&self, _import_path: &str) -> Result<()> {
//!         Ok(())
//!     }
//! }
//!
//! let config = RewriteConfig::default();
//! let mut diagnostics = Diagnostics::new(std::io::sink());
//! let rewritten = ArgumentRewriter::new(&config, &NoPackages, &NoPackages, &mut diagnostics)
//!     .process(&["--cpp_out=gen", "a.proto"]);
//!
//! assert_eq!(
//!     rewritten.into_compiler_args(),
//!     vec!["--proto_path=.", "--cpp_out=gen", "a.proto"]
//! );
//! ```

mod compile;
mod config;
mod diagnostics;
mod error;
mod flag;
mod mapping;
mod plugin;
mod rewrite;
mod tools;

pub use compile::{Toolchain, compile};
pub use config::{
    DEFAULT_COMPILER, DEFAULT_PLUGIN_NAMESPACE, DEFAULT_RPC_FLAG, DEFAULT_RPC_PLUGIN,
    DEFAULT_WORKDIR_INCLUDE, PLUGIN_EXECUTABLE_PREFIX, RewriteConfig,
};
pub use diagnostics::{DIAGNOSTIC_PREFIX, Diagnostics};
pub use error::{Result, ToolError, reindent};
pub use flag::FlagArg;
pub use mapping::{GOGO_TYPE_MAPPINGS, insert_type_mappings};
pub use plugin::{PackageMetadata, PluginDescriptor};
pub use rewrite::{ArgumentRewriter, RewrittenArgs};
pub use tools::{Compiler, PackageInstaller, PackageResolver};

//! Rewriting of compiler arguments.
//!
//! The rewriter makes one pass over the caller's arguments. Output flags
//! (`--<stem>_out[=<value>]`) backed by a resolvable plugin package get that
//! plugin installed, registered with `--plugin=` and their value prefixed
//! with the default type mappings. Everything else passes through in place.
//!
//! Outcomes per output flag:
//! - RPC flag: install its fixed package, leave the argument alone.
//! - Resolution fails or the target is not absolute: leave the argument
//!   alone, register nothing.
//! - Install fails: write a diagnostic, leave the argument alone, register
//!   nothing.
//! - Otherwise: rewrite the value, register the plugin, and add the include
//!   directives of its package root the first time that root is seen.

use std::collections::HashSet;
use std::ffi::{OsStr, OsString};

use tracing::{debug, info};

use crate::config::RewriteConfig;
use crate::diagnostics::Diagnostics;
use crate::flag::FlagArg;
use crate::mapping::insert_type_mappings;
use crate::plugin::PluginDescriptor;
use crate::tools::{PackageInstaller, PackageResolver};

/// Result of a rewrite pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RewrittenArgs {
    /// Working-directory include directive, emitted first.
    pub workdir_include: String,
    /// Plugin and include directives in discovery order.
    pub directives: Vec<String>,
    /// Caller arguments in their original order, some values rewritten.
    /// Arguments that are not valid UTF-8 are carried through untouched.
    pub args: Vec<OsString>,
    /// Executable names of the plugins that were registered.
    pub plugins: Vec<String>,
}

impl RewrittenArgs {
    /// Flattens into the argument list handed to the compiler.
    pub fn into_compiler_args(self) -> Vec<OsString> {
        let mut out = Vec::with_capacity(1 + self.directives.len() + self.args.len());
        out.push(OsString::from(self.workdir_include));
        out.extend(self.directives.into_iter().map(OsString::from));
        out.extend(self.args);
        out
    }
}

/// Rewrites compiler arguments using injected collaborators.
pub struct ArgumentRewriter<'a, 'w> {
    config: &'a RewriteConfig,
    resolver: &'a dyn PackageResolver,
    installer: &'a dyn PackageInstaller,
    diagnostics: &'a mut Diagnostics<'w>,
}

impl<'a, 'w> ArgumentRewriter<'a, 'w> {
    pub fn new(
        config: &'a RewriteConfig,
        resolver: &'a dyn PackageResolver,
        installer: &'a dyn PackageInstaller,
        diagnostics: &'a mut Diagnostics<'w>,
    ) -> Self {
        Self {
            config,
            resolver,
            installer,
            diagnostics,
        }
    }

    /// Runs one rewrite pass over `args`.
    ///
    /// Never fails: every per-flag problem is either skipped or reported
    /// through the diagnostics handle.
    pub fn process<S: AsRef<OsStr>>(&mut self, args: &[S]) -> RewrittenArgs {
        let mut rewritten = RewrittenArgs {
            workdir_include: self.config.workdir_include.clone(),
            directives: Vec::new(),
            args: args.iter().map(|arg| arg.as_ref().to_os_string()).collect(),
            plugins: Vec::new(),
        };
        let mut seen_roots: HashSet<String> = HashSet::new();

        for position in 0..rewritten.args.len() {
            let Some(text) = rewritten.args[position].to_str() else {
                continue;
            };
            let flag = FlagArg::parse(text);
            let Some(stem) = flag.output_stem() else {
                continue;
            };

            if flag.name == self.config.rpc_flag {
                self.install_rpc_plugin();
                continue;
            }

            let plugin = PluginDescriptor::new(stem, self.config);
            let metadata = match self.resolver.resolve(&plugin.import_path) {
                Ok(metadata) => metadata,
                Err(e) => {
                    debug!(
                        flag = %flag.name,
                        import_path = %plugin.import_path,
                        error = %e,
                        "Not a known plugin, passing flag through"
                    );
                    continue;
                }
            };
            if !metadata.is_installable() {
                debug!(
                    flag = %flag.name,
                    import_path = %plugin.import_path,
                    target = %metadata.target,
                    "Plugin target is not absolute, passing flag through"
                );
                continue;
            }

            if let Err(e) = self.installer.install(&plugin.import_path) {
                self.diagnostics.line(format_args!(
                    "{} (target {}): {e}",
                    plugin.import_path, metadata.target
                ));
                continue;
            }

            if let Some(value) = flag.value.as_deref().filter(|value| !value.is_empty()) {
                rewritten.args[position] = flag
                    .with_value(&insert_type_mappings(&self.config.type_mappings, value))
                    .into();
            }

            rewritten
                .directives
                .push(plugin.plugin_directive(&metadata.target));
            if let Some(includes) = metadata.include_directives() {
                if seen_roots.insert(metadata.root.clone()) {
                    rewritten.directives.extend(includes);
                }
            }

            info!(
                plugin = %plugin.executable,
                target = %metadata.target,
                "Registered plugin"
            );
            rewritten.plugins.push(plugin.executable);
        }

        rewritten
    }

    fn install_rpc_plugin(&self) {
        if let Err(e) = self.installer.install(&self.config.rpc_plugin) {
            debug!(
                import_path = %self.config.rpc_plugin,
                error = %e,
                "RPC plugin install failed"
            );
        }
    }
}

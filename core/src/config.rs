//! Fixed settings for one wrapper invocation.
//!
//! There are no configuration files and no environment variables; the
//! binary always runs with [`RewriteConfig::default()`]. Tests and library
//! callers can point the rewriter at other namespaces or mapping lists.

use crate::mapping::GOGO_TYPE_MAPPINGS;

/// Namespace that plugin import paths are formed under.
pub const DEFAULT_PLUGIN_NAMESPACE: &str = "github.com/gogo/protobuf/";

/// Executable prefix `protoc` expects for a `--<name>_out` plugin.
pub const PLUGIN_EXECUTABLE_PREFIX: &str = "protoc-gen-";

/// Output flag of the RPC plugin that is installed but never resolved.
pub const DEFAULT_RPC_FLAG: &str = "--twirp_out";

/// Import path installed when [`DEFAULT_RPC_FLAG`] is seen.
pub const DEFAULT_RPC_PLUGIN: &str = "github.com/twitchtv/twirp/protoc-gen-twirp";

/// Include directive for the working directory, always emitted first.
pub const DEFAULT_WORKDIR_INCLUDE: &str = "--proto_path=.";

/// Compiler executable looked up on `PATH`.
pub const DEFAULT_COMPILER: &str = "protoc";

/// Settings consumed by the [`ArgumentRewriter`](crate::ArgumentRewriter).
///
/// # Examples
///
/// ```
/// use omg_protoc_core::RewriteConfig;
///
/// let config = RewriteConfig::default();
/// assert_eq!(config.compiler, "protoc");
/// assert_eq!(config.type_mappings.len(), 6);
/// assert_eq!(config.import_path("gogofast"), "github.com/gogo/protobuf/protoc-gen-gogofast");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteConfig {
    /// Namespace prepended to `protoc-gen-<stem>` to form the import path.
    pub plugin_namespace: String,
    /// Output flag whose plugin is installed from `rpc_plugin`.
    pub rpc_flag: String,
    /// Import path installed for `rpc_flag`.
    pub rpc_plugin: String,
    /// First argument of every compiler invocation.
    pub workdir_include: String,
    /// Mappings prepended to rewritten plugin values.
    pub type_mappings: Vec<String>,
    /// Name of the compiler executable.
    pub compiler: String,
}

impl Default for RewriteConfig {
    fn default() -> Self {
        Self {
            plugin_namespace: DEFAULT_PLUGIN_NAMESPACE.to_string(),
            rpc_flag: DEFAULT_RPC_FLAG.to_string(),
            rpc_plugin: DEFAULT_RPC_PLUGIN.to_string(),
            workdir_include: DEFAULT_WORKDIR_INCLUDE.to_string(),
            type_mappings: GOGO_TYPE_MAPPINGS.iter().map(ToString::to_string).collect(),
            compiler: DEFAULT_COMPILER.to_string(),
        }
    }
}

impl RewriteConfig {
    /// Executable name of the plugin serving `--<stem>_out`.
    pub fn executable_name(&self, stem: &str) -> String {
        format!("{PLUGIN_EXECUTABLE_PREFIX}{stem}")
    }

    /// Import path the plugin for `--<stem>_out` is resolved and installed from.
    pub fn import_path(&self, stem: &str) -> String {
        format!("{}{}", self.plugin_namespace, self.executable_name(stem))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rpc_settings() {
        let config = RewriteConfig::default();
        assert_eq!(config.rpc_flag, "--twirp_out");
        assert_eq!(config.rpc_plugin, "github.com/twitchtv/twirp/protoc-gen-twirp");
        assert_eq!(config.workdir_include, "--proto_path=.");
    }

    #[test]
    fn test_custom_namespace() {
        let config = RewriteConfig {
            plugin_namespace: "example.com/plugins/".to_string(),
            ..RewriteConfig::default()
        };
        assert_eq!(config.import_path("go"), "example.com/plugins/protoc-gen-go");
        assert_eq!(config.executable_name("go"), "protoc-gen-go");
    }
}

//! Plugin descriptors and the package metadata reported for them.

use std::path::Path;

use serde::Deserialize;

use crate::config::RewriteConfig;

/// A code-generation plugin named by a `--<stem>_out` flag.
///
/// # Examples
///
/// ```
/// use omg_protoc_core::{PluginDescriptor, RewriteConfig};
///
/// let plugin = PluginDescriptor::new("gogofaster", &RewriteConfig::default());
/// assert_eq!(plugin.executable, "protoc-gen-gogofaster");
/// assert_eq!(plugin.import_path, "github.com/gogo/protobuf/protoc-gen-gogofaster");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginDescriptor {
    /// Text between `--` and `_out`.
    pub stem: String,
    /// Executable name `protoc` looks up for the flag.
    pub executable: String,
    /// Package import path used for resolution and installation.
    pub import_path: String,
}

impl PluginDescriptor {
    pub fn new(stem: &str, config: &RewriteConfig) -> Self {
        Self {
            stem: stem.to_string(),
            executable: config.executable_name(stem),
            import_path: config.import_path(stem),
        }
    }

    /// `--plugin=<executable>=<target>` directive for the compiler.
    pub fn plugin_directive(&self, target: &str) -> String {
        format!("--plugin={}={target}", self.executable)
    }
}

/// Package metadata as printed by `go list -json`.
///
/// Only the fields the rewriter reads are modelled; absent fields are empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PackageMetadata {
    #[serde(default)]
    pub import_path: String,
    /// Install location of the built command.
    #[serde(default)]
    pub target: String,
    /// Root directory of the source tree holding the package.
    #[serde(default)]
    pub root: String,
}

impl PackageMetadata {
    /// A package whose target is not absolute is not buildable as a command.
    pub fn is_installable(&self) -> bool {
        !self.target.is_empty() && Path::new(&self.target).is_absolute()
    }

    /// Include directives contributed by the package root, if it has one.
    pub fn include_directives(&self) -> Option<[String; 2]> {
        if self.root.is_empty() {
            return None;
        }
        let protobuf = Path::new(&self.root).join("protobuf");
        Some([
            format!("--proto_path={}", self.root),
            format!("--proto_path={}", protobuf.display()),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_parses_go_list_output() {
        let raw = r#"{
            "Dir": "/home/dev/go/pkg/mod/github.com/gogo/protobuf@v1.3.2/protoc-gen-gogo",
            "ImportPath": "github.com/gogo/protobuf/protoc-gen-gogo",
            "Name": "main",
            "Target": "/home/dev/go/bin/protoc-gen-gogo",
            "Root": "/home/dev/go/pkg/mod/github.com/gogo/protobuf@v1.3.2",
            "Stale": true
        }"#;
        let metadata: PackageMetadata = serde_json::from_str(raw).unwrap();
        assert_eq!(metadata.import_path, "github.com/gogo/protobuf/protoc-gen-gogo");
        assert_eq!(metadata.target, "/home/dev/go/bin/protoc-gen-gogo");
        assert!(metadata.is_installable());
    }

    #[test]
    fn test_metadata_missing_fields_default_to_empty() {
        let metadata: PackageMetadata =
            serde_json::from_str(r#"{"ImportPath": "github.com/gogo/protobuf/types"}"#).unwrap();
        assert!(metadata.target.is_empty());
        assert!(metadata.root.is_empty());
        assert!(!metadata.is_installable());
        assert!(metadata.include_directives().is_none());
    }

    #[test]
    fn test_relative_target_is_not_installable() {
        let metadata = PackageMetadata {
            target: "bin/protoc-gen-gogo".to_string(),
            ..PackageMetadata::default()
        };
        assert!(!metadata.is_installable());
    }

    #[test]
    fn test_include_directives_from_root() {
        let metadata = PackageMetadata {
            root: "/src/gogo".to_string(),
            ..PackageMetadata::default()
        };
        assert_eq!(
            metadata.include_directives(),
            Some([
                "--proto_path=/src/gogo".to_string(),
                "--proto_path=/src/gogo/protobuf".to_string(),
            ])
        );
    }

    #[test]
    fn test_plugin_directive() {
        let plugin = PluginDescriptor::new("gogo", &RewriteConfig::default());
        assert_eq!(
            plugin.plugin_directive("/go/bin/protoc-gen-gogo"),
            "--plugin=protoc-gen-gogo=/go/bin/protoc-gen-gogo"
        );
    }
}

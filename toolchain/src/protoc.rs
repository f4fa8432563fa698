//! The `protoc` compiler.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use omg_protoc_core::{Compiler, Result, ToolError};

use crate::process::run;

/// A located `protoc` executable.
#[derive(Debug, Clone)]
pub struct ProtocCompiler {
    path: PathBuf,
}

impl ProtocCompiler {
    /// Finds `program` on `PATH`.
    ///
    /// # Errors
    ///
    /// [`ToolError::CompilerNotFound`] naming `program` when it is not
    /// found or not executable.
    pub fn locate(program: &str) -> Result<Self> {
        which::which(program)
            .map(Self::at)
            .map_err(|e| ToolError::CompilerNotFound {
                program: program.to_string(),
                reason: e.to_string(),
            })
    }

    /// Finds `program` in the given search path instead of `PATH`.
    pub fn locate_in(program: &str, paths: impl AsRef<OsStr>, cwd: &Path) -> Result<Self> {
        which::which_in(program, Some(paths), cwd)
            .map(Self::at)
            .map_err(|e| ToolError::CompilerNotFound {
                program: program.to_string(),
                reason: e.to_string(),
            })
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Compiler for ProtocCompiler {
    fn run(&self, args: &[OsString]) -> Result<()> {
        let mut command = Command::new(&self.path);
        command.args(args).stdout(Stdio::inherit());
        run(&mut command).map(drop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locate_missing_program() {
        let dir = tempfile::tempdir().unwrap();
        let err = ProtocCompiler::locate_in("protoc", dir.path(), dir.path())
            .expect_err("empty search path has no protoc");
        assert!(matches!(err, ToolError::CompilerNotFound { ref program, .. } if program == "protoc"));
        assert!(err.to_string().starts_with("Cannot find the `protoc` command: "));
    }

    #[cfg(unix)]
    #[test]
    fn test_locate_and_run_fake_protoc() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("protoc");
        std::fs::write(&script, "#!/bin/sh\necho 'Expected \";\".' >&2\nexit 1\n").unwrap();
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();

        let protoc = ProtocCompiler::locate_in("protoc", dir.path(), dir.path()).unwrap();
        assert_eq!(protoc.path().file_name(), script.file_name());

        let err = protoc
            .run(&[OsString::from("--proto_path=."), OsString::from("a.proto")])
            .expect_err("script exits non-zero");
        let message = err.to_string();
        assert!(message.contains("protoc --proto_path=. a.proto` failed: "));
        assert!(message.ends_with("\n  Expected \";\"."));
    }
}

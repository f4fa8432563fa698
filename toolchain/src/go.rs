//! Package resolution and installation through the `go` command.

use std::ffi::OsString;
use std::process::Command;

use omg_protoc_core::{PackageInstaller, PackageMetadata, PackageResolver, Result, ToolError};

use crate::process::{describe, run};

/// `go` invoked from `PATH` with module downloads disabled.
///
/// Every call passes `-mod=readonly`, so resolution and installation only
/// use what the surrounding module already requires.
#[derive(Debug, Clone)]
pub struct GoTool {
    program: OsString,
}

impl Default for GoTool {
    fn default() -> Self {
        Self::new("go")
    }
}

impl GoTool {
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn command(&self, subcommand: &str) -> Command {
        let mut command = Command::new(&self.program);
        command.arg(subcommand).arg("-mod=readonly");
        command
    }
}

impl PackageResolver for GoTool {
    fn resolve(&self, import_path: &str) -> Result<PackageMetadata> {
        let mut command = self.command("list");
        command.arg("-json").arg(import_path);
        let output = run(&mut command)?;
        parse_list_output(&describe(&command), &output.stdout)
    }
}

impl PackageInstaller for GoTool {
    fn install(&self, import_path: &str) -> Result<()> {
        let mut command = self.command("install");
        command.arg(import_path);
        run(&mut command).map(drop)
    }
}

fn parse_list_output(command: &str, stdout: &[u8]) -> Result<PackageMetadata> {
    serde_json::from_slice(stdout).map_err(|source| ToolError::InvalidMetadata {
        command: command_name(command),
        source,
    })
}

/// `go list` rather than the full command line, to keep the parse error
/// short.
fn command_name(command: &str) -> String {
    command.split_whitespace().take(2).collect::<Vec<_>>().join(" ")
}

use std::ffi::OsString;

use clap::Parser;
use omg_protoc_core::{Diagnostics, RewriteConfig, ToolError, Toolchain, compile};
use omg_protoc_toolchain::{GoTool, ProtocCompiler};

/// Runs protoc with gogo plugins installed and registered.
///
/// Every argument is forwarded to protoc. `--<name>_out` flags whose
/// `github.com/gogo/protobuf/protoc-gen-<name>` package resolves are
/// installed, registered with `--plugin=` and get the default
/// well-known-type mappings prepended to their value.
#[derive(Debug, Parser)]
#[command(name = "omg-protoc")]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// Arguments for protoc.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<OsString>,
}

/// Puts `--` right after the binary name so clap takes every caller
/// argument as a value, including a leading `--` of the caller's own.
fn with_separator(args: impl IntoIterator<Item = OsString>) -> Vec<OsString> {
    let mut args = args.into_iter();
    let mut out: Vec<OsString> = args.next().into_iter().collect();
    out.push(OsString::from("--"));
    out.extend(args);
    out
}

fn main() {
    let cli = Cli::parse_from(with_separator(std::env::args_os()));
    let mut diagnostics = Diagnostics::stderr();

    if let Err(err) = run(&cli.args, &mut diagnostics) {
        diagnostics.line(format_args!("{err}"));
        std::process::exit(1);
    }
}

fn run(args: &[OsString], diagnostics: &mut Diagnostics<'_>) -> Result<(), ToolError> {
    let config = RewriteConfig::default();
    // Located before anything else runs, so a missing compiler spawns nothing.
    let protoc = ProtocCompiler::locate(&config.compiler)?;
    let go = GoTool::default();
    let toolchain = Toolchain {
        resolver: &go,
        installer: &go,
        compiler: &protoc,
    };
    compile(&config, &toolchain, diagnostics, args)
}

use clap::builder::NonEmptyStringValueParser;
use clap::Parser;
use std::path::PathBuf;

/// Rename a batch of files by swapping a literal filename prefix
//
// -V means verbose here and -v prints the version, so clap's built-in help
// and version flags are disabled and redeclared as ordinary options. main
// scans for the informational ones before parsing so they work even when
// the required flags are absent.
#[derive(Parser, Debug)]
#[command(name = "reprefix")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Directory to run in
    #[arg(short = 'i', long = "input", value_name = "DIR")]
    pub input: PathBuf,

    /// Prefix to be replaced
    #[arg(
        short = 'p',
        long = "previousPrefix",
        value_name = "PREFIX",
        value_parser = NonEmptyStringValueParser::new()
    )]
    pub previous_prefix: String,

    /// Prefix to replace it with. May be empty
    #[arg(short = 'n', long = "newPrefix", value_name = "PREFIX")]
    pub new_prefix: String,

    /// Do not actually perform the renames
    #[arg(short = 'd', long = "dryRun")]
    pub dry_run: bool,

    /// Print each rename as it happens, plus a summary
    #[arg(short = 'V', long = "verbose")]
    pub verbose: bool,

    /// Print the version
    #[arg(short = 'v', long = "version")]
    pub version: bool,

    /// Print this usage guide
    #[arg(short = 'h', long = "help")]
    pub help: bool,

    /// Print this usage guide
    #[arg(short = 'u', long = "usage")]
    pub usage: bool,
}

use clap::{CommandFactory, Parser};
use reprefix_core::{paint, rename_operation, Config, Tone};
use std::env;
use std::ffi::OsString;
use std::io::{self, IsTerminal};
use std::process;

mod cli;

use cli::Cli;

fn main() {
    let args: Vec<OsString> = env::args_os().collect();

    // Informational flags win over everything else, including missing
    // required flags, so scan for them before the real parse.
    if has_flag(&args, "-v", "--version") {
        print_version();
        process::exit(0);
    }
    if has_flag(&args, "-h", "--help") || has_flag(&args, "-u", "--usage") {
        print_usage();
        process::exit(0);
    }

    let cli = match Cli::try_parse_from(&args) {
        Ok(cli) => cli,
        Err(e) => {
            report_parse_error(&e);
            process::exit(1);
        },
    };

    // The prepass only sees exact tokens; bundled shorts like `-dv` land
    // here after the parse.
    if cli.version {
        print_version();
        process::exit(0);
    }
    if cli.help || cli.usage {
        print_usage();
        process::exit(0);
    }

    let config = Config {
        dir: cli.input,
        previous_prefix: cli.previous_prefix,
        new_prefix: cli.new_prefix,
        dry_run: cli.dry_run,
        verbose: cli.verbose,
    };

    let use_color = color_enabled(io::stdout().is_terminal());
    match rename_operation(&config, use_color) {
        Ok(_) => process::exit(0),
        Err(e) => {
            let e = anyhow::Error::new(e);
            report_error(&e);
            process::exit(1);
        },
    }
}

/// True when any argument after the program name is exactly `short` or
/// `long`. Values that merely contain the flag text do not count.
fn has_flag(args: &[OsString], short: &str, long: &str) -> bool {
    args.iter().skip(1).any(|arg| arg == short || arg == long)
}

fn color_enabled(stream_is_terminal: bool) -> bool {
    stream_is_terminal && env::var_os("NO_COLOR").is_none()
}

fn print_version() {
    println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
}

fn print_usage() {
    print!("{}", Cli::command().render_help());
}

fn report_error(e: &anyhow::Error) {
    let use_color = color_enabled(io::stderr().is_terminal());
    eprintln!("{}", paint(&format!("{e:#}"), Tone::Failure, use_color));
}

fn report_parse_error(e: &clap::Error) {
    let use_color = color_enabled(io::stderr().is_terminal());
    eprintln!("{}", paint(&parse_error_line(e), Tone::Failure, use_color));
    eprint!("{}", Cli::command().render_help());
}

/// Folds clap's multi-line diagnostic into the single message line the
/// rest of the error reporting uses. Everything from the first blank line
/// on (tips, usage) is dropped; the usage text is printed separately.
fn parse_error_line(e: &clap::Error) -> String {
    let rendered = e.to_string();
    let mut parts = Vec::new();
    for line in rendered.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with("Usage:") {
            break;
        }
        parts.push(line.strip_prefix("error: ").unwrap_or(line));
    }
    parts.join(" ")
}

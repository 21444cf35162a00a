use crate::config::Config;
use crate::error::Error;
use crate::output;
use crate::rename::rename_entry;
use crate::scanner::scan_directory;
use std::io::{self, Write};

/// Counts reported by one rename pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenameSummary {
    /// Entries whose names matched the previous prefix.
    pub matched: usize,
    /// Entries actually renamed. Always zero in a dry run.
    pub renamed: usize,
}

/// Runs one rename pass: validate the prefixes, announce a dry run, scan
/// the directory, then rename (or simulate) every match in name order.
///
/// Progress goes to stdout and only when `verbose` is set, except for the
/// quiet dry run advisory. The first failing rename aborts the rest of the
/// batch; entries renamed before it stay renamed.
pub fn rename_operation(config: &Config, use_color: bool) -> Result<RenameSummary, Error> {
    validate_prefixes(config)?;

    // The notice comes before directory validation, so a dry run against a
    // bad path still announces itself first.
    if config.dry_run {
        println!("{}", output::dry_run_notice(config.verbose, use_color));
    }

    let matches = scan_directory(config)?;
    let longest = output::longest_name(&matches);

    if config.verbose {
        println!("{}", output::matched_count_line(matches.len()));
    }

    let mut renamed = 0;
    for file in &matches {
        if config.verbose {
            // Leave the line open so the completion marker can follow the
            // rename itself. A failed flush only delays the partial line,
            // so the result is ignored.
            print!("{}", output::rename_line(file, longest));
            let _ = io::stdout().flush();
        }

        if config.dry_run {
            if config.verbose {
                println!();
            }
            continue;
        }

        if let Err(err) = rename_entry(&config.dir, file) {
            if config.verbose {
                // Close the open progress line before the error surfaces
                // on stderr.
                println!();
            }
            return Err(err);
        }
        renamed += 1;

        if config.verbose {
            println!("{}", output::done_marker(use_color));
        }
    }

    if config.verbose {
        if config.dry_run {
            println!("{}", output::dry_run_hint(matches.len()));
        } else {
            println!("{}", output::renamed_summary(matches.len(), use_color));
        }
    }

    Ok(RenameSummary {
        matched: matches.len(),
        renamed,
    })
}

fn validate_prefixes(config: &Config) -> Result<(), Error> {
    if config.previous_prefix == config.new_prefix {
        return Err(Error::PrefixesNotDistinct);
    }
    if config.previous_prefix.is_empty() {
        return Err(Error::EmptyPreviousPrefix);
    }
    Ok(())
}

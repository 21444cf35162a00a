use crate::config::Config;
use crate::error::Error;
use crate::rename::MatchedFile;
use std::fs;

/// Validates the target directory and collects the rename candidates among
/// its direct entries, sorted by current name.
///
/// Only direct children are considered. A subdirectory whose own name
/// matches is a candidate like any other entry, but nothing inside it is
/// ever scanned. Entry names that are not valid UTF-8 cannot start with a
/// UTF-8 prefix argument and are skipped.
pub fn scan_directory(config: &Config) -> Result<Vec<MatchedFile>, Error> {
    let dir = &config.dir;
    if !dir.exists() {
        return Err(Error::DirectoryNotFound { dir: dir.clone() });
    }
    if !dir.is_dir() {
        return Err(Error::NotADirectory { dir: dir.clone() });
    }

    let entries = fs::read_dir(dir).map_err(|source| Error::ReadDir {
        dir: dir.clone(),
        source,
    })?;

    let mut matches = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| Error::ReadDir {
            dir: dir.clone(),
            source,
        })?;

        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            continue;
        };

        if name.starts_with(&config.previous_prefix) {
            matches.push(MatchedFile::new(
                name.to_string(),
                &config.previous_prefix,
                &config.new_prefix,
            ));
        }
    }

    // read_dir order is platform-dependent; sort so reporting and rename
    // order are stable.
    matches.sort_by(|a, b| a.old_name.cmp(&b.old_name));

    Ok(matches)
}

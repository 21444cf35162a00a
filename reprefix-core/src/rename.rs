use crate::error::Error;
use std::fs;
use std::io;
use std::path::Path;

/// A rename candidate: a direct directory entry paired with the name it
/// will receive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedFile {
    pub old_name: String,
    pub new_name: String,
}

impl MatchedFile {
    /// Pairs `old_name` with its post-swap name. Callers guarantee that
    /// `old_name` starts with `previous_prefix`.
    pub fn new(old_name: String, previous_prefix: &str, new_prefix: &str) -> Self {
        let new_name = replace_prefix(&old_name, previous_prefix, new_prefix);
        Self { old_name, new_name }
    }
}

/// Returns `new_prefix` followed by whatever comes after `previous_prefix`
/// in `name`. The remainder may be empty, so a name equal to the previous
/// prefix becomes exactly the new prefix.
///
/// `name` must start with `previous_prefix`.
pub fn replace_prefix(name: &str, previous_prefix: &str, new_prefix: &str) -> String {
    format!("{}{}", new_prefix, &name[previous_prefix.len()..])
}

/// Renames one matched entry in place inside `dir`. Source and destination
/// share a parent, so this never moves anything across directories.
///
/// An entry of any type already sitting at the destination name fails the
/// rename: `fs::rename` would silently replace a destination file, so every
/// existing destination is refused before the rename is attempted.
pub fn rename_entry(dir: &Path, file: &MatchedFile) -> Result<(), Error> {
    let destination = dir.join(&file.new_name);
    if destination.symlink_metadata().is_ok() {
        return Err(Error::Rename {
            old_name: file.old_name.clone(),
            new_name: file.new_name.clone(),
            source: io::Error::new(io::ErrorKind::AlreadyExists, "destination already exists"),
        });
    }
    fs::rename(dir.join(&file.old_name), destination).map_err(|source| Error::Rename {
        old_name: file.old_name.clone(),
        new_name: file.new_name.clone(),
        source,
    })
}

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Everything a rename pass can fail with.
///
/// Messages are written to be shown to the user as-is, so they name the
/// offending flag or path instead of describing internals.
#[derive(Error, Debug)]
pub enum Error {
    #[error("newPrefix must be distinct from oldPrefix")]
    PrefixesNotDistinct,

    #[error("previousPrefix must not be empty")]
    EmptyPreviousPrefix,

    #[error("{} directory not found", .dir.display())]
    DirectoryNotFound { dir: PathBuf },

    #[error("{} is not a directory", .dir.display())]
    NotADirectory { dir: PathBuf },

    #[error("failed to read directory {}", .dir.display())]
    ReadDir {
        dir: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to rename '{old_name}' to '{new_name}'")]
    Rename {
        old_name: String,
        new_name: String,
        #[source]
        source: io::Error,
    },
}

/// Coarse families the CLI can branch on without matching every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The arguments themselves are unusable.
    InvalidArgument,
    /// The target directory does not exist.
    NotFound,
    /// The filesystem refused an operation.
    Io,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::PrefixesNotDistinct | Self::EmptyPreviousPrefix | Self::NotADirectory { .. } => {
                ErrorKind::InvalidArgument
            },
            Self::DirectoryNotFound { .. } => ErrorKind::NotFound,
            Self::ReadDir { .. } | Self::Rename { .. } => ErrorKind::Io,
        }
    }
}

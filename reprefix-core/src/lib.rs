#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::missing_errors_doc)]

pub mod config;
pub mod error;
pub mod operations;
pub mod output;
pub mod rename;
pub mod scanner;

pub use config::Config;
pub use error::{Error, ErrorKind};
pub use operations::{rename_operation, RenameSummary};
pub use output::{paint, Tone};
pub use rename::{replace_prefix, MatchedFile};
pub use scanner::scan_directory;

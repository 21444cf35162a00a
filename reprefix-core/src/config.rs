use std::path::PathBuf;

/// One rename pass, fully described. The CLI builds this from its flags;
/// tests build it directly.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory whose direct entries are rename candidates.
    pub dir: PathBuf,
    /// Literal prefix an entry name must start with.
    pub previous_prefix: String,
    /// Literal prefix substituted in its place. May be empty, which strips
    /// the previous prefix.
    pub new_prefix: String,
    pub dry_run: bool,
    pub verbose: bool,
}

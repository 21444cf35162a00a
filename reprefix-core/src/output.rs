use crate::rename::MatchedFile;
use nu_ansi_term::Color;

/// Output roles for terminal text. The palette is fixed: green for
/// success, yellow for advisories, red for failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Advisory,
    Failure,
}

impl Tone {
    fn color(self) -> Color {
        match self {
            Self::Success => Color::Green,
            Self::Advisory => Color::Yellow,
            Self::Failure => Color::Red,
        }
    }
}

/// Wraps `text` in the tone's ANSI color when `use_color` is set, and
/// returns it untouched otherwise.
pub fn paint(text: &str, tone: Tone, use_color: bool) -> String {
    if use_color {
        tone.color().paint(text).to_string()
    } else {
        text.to_string()
    }
}

/// Heading printed before the per-file lines of a verbose run.
pub fn matched_count_line(count: usize) -> String {
    format!("found {} matching files", count)
}

/// One per-file progress line, without a trailing newline so a completion
/// marker can land on the same line.
///
/// Old names are padded out to the longest one so every `>` lines up, with
/// two spaces around the `>` for the longest name itself.
pub fn rename_line(file: &MatchedFile, longest: usize) -> String {
    let pad = longest.saturating_sub(file.old_name.len()) + 1;
    format!(
        "'{}'{:pad$} >  '{}'",
        file.old_name, "", file.new_name
    )
}

/// Marker appended to a progress line once the rename has happened.
pub fn done_marker(use_color: bool) -> String {
    paint(" done", Tone::Success, use_color)
}

/// Closing line of a verbose dry run.
pub fn dry_run_hint(count: usize) -> String {
    format!("run without flag -d/--dryRun to rename {} files", count)
}

/// Closing line of a verbose live run.
pub fn renamed_summary(count: usize, use_color: bool) -> String {
    paint(&format!("renamed {} files", count), Tone::Success, use_color)
}

/// Notice printed at the start of every dry run. Without verbose output a
/// dry run shows nothing else, so the notice turns into an advisory.
pub fn dry_run_notice(verbose: bool, use_color: bool) -> String {
    if verbose {
        "running in dryRun mode".to_string()
    } else {
        paint(
            "Running in dryRun mode - note that this is not very useful without verbose mode",
            Tone::Advisory,
            use_color,
        )
    }
}

/// Length of the longest current name, used to align per-file lines.
pub fn longest_name(files: &[MatchedFile]) -> usize {
    files.iter().map(|f| f.old_name.len()).max().unwrap_or(0)
}

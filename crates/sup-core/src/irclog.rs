use crate::error::{Result, SupError};
use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// IrcLogLine
// ---------------------------------------------------------------------------

/// One `datetime \t username \t content` line of an IRC log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IrcLogLine {
    pub datetime: String,
    pub username: String,
    pub content: String,
    /// Whether the line comes after the discussion marker.
    pub in_discussion: bool,
}

impl IrcLogLine {
    /// Split a raw log line. Missing columns read as empty strings.
    pub fn parse(line: &str) -> Self {
        let mut cols = line.split('\t');
        let mut next = || cols.next().unwrap_or_default().to_string();
        Self {
            datetime: next(),
            username: next(),
            content: next(),
            in_discussion: false,
        }
    }
}

impl fmt::Display for IrcLogLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.in_discussion {
            write!(f, "    {}\t{}", self.username, self.content)
        } else if self.content.starts_with('#') {
            write!(f, "\n{}", self.content)
        } else {
            f.write_str(&self.content)
        }
    }
}

// ---------------------------------------------------------------------------
// Standup extraction
// ---------------------------------------------------------------------------

/// Markers that delimit a standup in an IRC log.
#[derive(Debug, Clone, Copy)]
pub struct Markers<'a> {
    pub begin: &'a str,
    pub discussion: &'a str,
    pub end: &'a str,
}

fn last_line_containing(lines: &[&str], pattern: &str) -> Result<usize> {
    lines
        .iter()
        .rposition(|l| l.contains(pattern))
        .ok_or_else(|| SupError::IrcStandupNotFound(pattern.to_string()))
}

/// Extract the last standup in `log`.
///
/// Each marker is located by its last occurrence; they must appear in the
/// order begin, discussion, end. The returned lines run from the begin line
/// up to (not including) the end line.
pub fn last_standup(log: &str, markers: Markers<'_>) -> Result<Vec<IrcLogLine>> {
    let lines: Vec<&str> = log.lines().collect();
    let begin = last_line_containing(&lines, markers.begin)?;
    let discussion = last_line_containing(&lines, markers.discussion)?;
    let end = last_line_containing(&lines, markers.end)?;

    if !(begin < discussion && discussion < end) {
        return Err(SupError::IrcStandupPositionInvalid {
            begin,
            discussion,
            end,
        });
    }
    tracing::debug!(begin, discussion, end, "located IRC standup");

    Ok(lines[begin..end]
        .iter()
        .enumerate()
        .map(|(offset, raw)| {
            let mut line = IrcLogLine::parse(raw);
            line.in_discussion = begin + offset > discussion;
            line
        })
        .collect())
}

/// Write the last standup in `log` to `out`, one display line per log line.
pub fn write_last_standup<W: Write>(log: &str, markers: Markers<'_>, mut out: W) -> Result<()> {
    for line in last_standup(log, markers)? {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Log discovery
// ---------------------------------------------------------------------------

/// Entries of `dir` whose path contains `pattern`, sorted.
pub fn find_irc_logs(dir: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    let mut found: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.to_string_lossy().contains(pattern))
        .collect();
    found.sort();
    Ok(found)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

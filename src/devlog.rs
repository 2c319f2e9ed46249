use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::trace::{TraceEvent, TraceLog};

/// One solve's worth of material for a session report.
pub struct SessionLog<'a> {
    pub puzzle: &'a str,
    pub solution: Option<&'a str>,
    pub trace: &'a TraceLog,
}

/// Write a markdown report of a solve into `dir`, one file per session,
/// named by local timestamp. Returns the path written.
pub fn write_session_markdown<P: AsRef<Path>>(
    dir: P,
    log: &SessionLog<'_>,
) -> std::io::Result<PathBuf> {
    fs::create_dir_all(dir.as_ref())?;
    let now = Local::now();
    let filename = format!("session_{}.md", now.format("%Y-%m-%d_%H%M%S"));
    let path = dir.as_ref().join(filename);
    let mut f = OpenOptions::new().create(true).write(true).open(&path)?;
    writeln!(f, "# Solve session")?;
    writeln!(f, "Timestamp: {}", now.format("%Y-%m-%d %H:%M:%S"))?;
    writeln!(f, "Puzzle: `{}`", log.puzzle)?;
    match log.solution {
        Some(s) => writeln!(f, "Solution: `{}`", s)?,
        None => writeln!(f, "Solution: none found")?,
    }
    writeln!(f, "\n## Steps ({})", log.trace.len())?;
    for (i, ev) in log.trace.events().iter().enumerate() {
        match *ev {
            TraceEvent::Assign { row, col, value } => {
                writeln!(f, "{}. Assign {} at r{}c{}", i + 1, value, row, col)?
            }
            TraceEvent::Backtrack { row, col } => {
                writeln!(f, "{}. Backtrack at r{}c{}", i + 1, row, col)?
            }
        }
    }
    Ok(path)
}

/// Dump the raw event list as JSON next to the markdown reports.
#[cfg(feature = "serde")]
pub fn write_trace_json<P: AsRef<Path>>(dir: P, trace: &TraceLog) -> std::io::Result<PathBuf> {
    fs::create_dir_all(dir.as_ref())?;
    let now = Local::now();
    let path = dir
        .as_ref()
        .join(format!("trace_{}.json", now.format("%Y-%m-%d_%H%M%S")));
    let body = serde_json::to_string_pretty(trace.events())
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
    fs::write(&path, body)?;
    Ok(path)
}

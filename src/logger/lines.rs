//! Line logger: append-only plain-text log for operator consumption.
//!
//! Each record is one human-readable line: UTC timestamp, severity tag,
//! message. Lines are assembled in memory and written atomically via a single
//! `write_all` to prevent interleaved partial lines when the file is being
//! tailed by another process.
//!
//! Degradation chain:
//! 1. Primary file path
//! 2. stderr with `[WRB]` prefix
//! 3. Silent discard (a run must never abort because logging failed)

#![allow(missing_docs)]

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

/// Severity level for log lines, mirroring the host logger levels the
/// orchestration contract uses (informational, warning, severe).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Severe,
}

impl Severity {
    const fn tag(self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Warning => "WARN",
            Self::Severe => "SEVERE",
        }
    }
}

/// Degradation state of the line writer.
#[derive(Debug)]
enum Sink {
    /// Writing to the primary log file.
    File(File),
    /// File unavailable, writing to stderr.
    Stderr,
    /// Everything failed, silently discarding.
    Discard,
}

/// Synchronous plain-text run logger.
///
/// The run is single-threaded, so there is no logger thread or channel; the
/// mutex only guards the sink state so handles can be shared by reference
/// across components.
pub struct RunLogger {
    sink: Mutex<Sink>,
}

impl RunLogger {
    /// Open the log file in append mode, creating parent directories.
    ///
    /// Falls through the degradation chain on failure instead of erroring.
    pub fn open(path: &Path) -> Self {
        let sink = match open_append(path) {
            Ok(file) => Sink::File(file),
            Err(err) => {
                eprintln!("[WRB] cannot open log file {}: {err}", path.display());
                Sink::Stderr
            }
        };
        Self {
            sink: Mutex::new(sink),
        }
    }

    /// Logger that writes straight to stderr (host adapters without a file,
    /// tests).
    #[must_use]
    pub fn to_stderr() -> Self {
        Self {
            sink: Mutex::new(Sink::Stderr),
        }
    }

    pub fn info(&self, message: impl AsRef<str>) {
        self.write_line(Severity::Info, message.as_ref());
    }

    pub fn warning(&self, message: impl AsRef<str>) {
        self.write_line(Severity::Warning, message.as_ref());
    }

    pub fn severe(&self, message: impl AsRef<str>) {
        self.write_line(Severity::Severe, message.as_ref());
    }

    /// Whether the logger is still writing to its primary file.
    pub fn is_file_backed(&self) -> bool {
        matches!(*self.sink.lock(), Sink::File(_))
    }

    fn write_line(&self, severity: Severity, message: &str) {
        let ts = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);
        let line = format!("{ts} {:6} {message}\n", severity.tag());

        let mut sink = self.sink.lock();
        if let Sink::File(file) = &mut *sink {
            // One write_all per line; flush so tailing operators see it.
            if file.write_all(line.as_bytes()).and_then(|()| file.flush()).is_err() {
                *sink = Sink::Stderr;
            } else {
                return;
            }
        }

        match &*sink {
            Sink::Stderr => {
                if write!(io::stderr(), "[WRB] {line}").is_err() {
                    *sink = Sink::Discard;
                }
            }
            Sink::Discard | Sink::File(_) => {}
        }
    }
}

fn open_append(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

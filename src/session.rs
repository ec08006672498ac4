//! Session logging for vigil
//!
//! Records every dispatched value in JSONL format so a watch session can be
//! inspected after the fact. One JSON object per line, append-only.

use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::Path;

/// One dispatched value in the session log
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionEntry {
    /// ISO 8601 timestamp when the value was dispatched
    pub timestamp: String,
    /// The command that was running (e.g., "watch", "demo")
    pub command: String,
    /// The value handed to the handler
    pub value: i64,
    /// Name of the handler that received it
    pub handler: String,
    /// Whether the alert predicate fired for this value
    pub fired: bool,
}

impl SessionEntry {
    /// Create a new entry with the current timestamp
    pub fn new(command: impl Into<String>, value: i64, handler: impl Into<String>, fired: bool) -> Self {
        Self {
            timestamp: timestamp_now(),
            command: command.into(),
            value,
            handler: handler.into(),
            fired,
        }
    }
}

/// Current UTC time in ISO 8601 format, without pulling in a date crate
fn timestamp_now() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};

    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs() as i64;

    let days = secs.div_euclid(86_400);
    let tod = secs.rem_euclid(86_400);

    // civil-from-days, Gregorian calendar
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = yoe + era * 400 + i64::from(month <= 2);

    format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
        year,
        month,
        day,
        tod / 3_600,
        (tod % 3_600) / 60,
        tod % 60
    )
}

/// Session log that appends entries to a JSONL file
pub struct SessionLog {
    path: std::path::PathBuf,
    enabled: bool,
}

impl SessionLog {
    /// Create a new session log
    pub fn new(path: impl AsRef<Path>, enabled: bool) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            enabled,
        }
    }

    /// Check if logging is enabled
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Append one entry to the log file
    pub fn log(&self, entry: &SessionEntry) -> std::io::Result<()> {
        if !self.enabled {
            return Ok(());
        }

        let file = OpenOptions::new().create(true).append(true).open(&self.path)?;

        let mut writer = BufWriter::new(file);
        let json = serde_json::to_string(entry)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        writeln!(writer, "{}", json)?;
        writer.flush()?;

        Ok(())
    }
}

// Global session log (thread-local to avoid synchronization)
thread_local! {
    static SESSION: std::cell::RefCell<Option<SessionLog>> = const { std::cell::RefCell::new(None) };
}

/// Initialize the global session log
pub fn init_session(path: impl AsRef<Path>, enabled: bool) {
    SESSION.with(|s| {
        *s.borrow_mut() = Some(SessionLog::new(path, enabled));
    });
}

/// Record an entry using the global session log
pub fn record(entry: &SessionEntry) {
    SESSION.with(|s| {
        if let Some(ref log) = *s.borrow() {
            let _ = log.log(entry);
        }
    });
}

/// Check if the global session log is enabled
pub fn is_recording() -> bool {
    SESSION.with(|s| s.borrow().as_ref().map(|l| l.is_enabled()).unwrap_or(false))
}

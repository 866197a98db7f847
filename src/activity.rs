//! Activity Log
//!
//! Append-only, user-visible record of what the dashboard did. Each entry
//! is mirrored to the `log` facade (browser console).

use chrono::Local;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Success,
    Error,
}

impl LogLevel {
    pub fn css_class(self) -> &'static str {
        match self {
            LogLevel::Info => "log-info",
            LogLevel::Success => "log-success",
            LogLevel::Error => "log-error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    /// Local wall-clock time, `HH:MM:SS`
    pub time: String,
    pub level: LogLevel,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityLog {
    entries: Vec<LogEntry>,
}

impl ActivityLog {
    pub fn push(&mut self, level: LogLevel, message: impl Into<String>) {
        let message = message.into();
        match level {
            LogLevel::Error => log::error!("[ACTIVITY] {}", message),
            _ => log::info!("[ACTIVITY] {}", message),
        }
        self.entries.push(LogEntry {
            time: Local::now().format("%H:%M:%S").to_string(),
            level,
            message,
        });
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(LogLevel::Info, message);
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(LogLevel::Success, message);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(LogLevel::Error, message);
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn last(&self) -> Option<&LogEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_are_appended_in_order() {
        let mut log = ActivityLog::default();
        log.info("Refreshing");
        log.error("Request failed");
        log.success("Done");

        let levels: Vec<_> = log.entries().iter().map(|e| e.level).collect();
        assert_eq!(levels, vec![LogLevel::Info, LogLevel::Error, LogLevel::Success]);
        assert_eq!(log.last().map(|e| e.message.as_str()), Some("Done"));
        assert_eq!(log.entries()[0].time.len(), 8);
    }
}

use dioxus::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LogEntry {
    pub timestamp: String,
    pub level: LogLevel,
    pub message: String,
}

/// Entries kept before the oldest are dropped.
pub const MAX_ENTRIES: usize = 200;

/// In-app record of backend calls and their outcomes.
#[derive(Clone, Debug, Default)]
pub struct ActivityLog {
    pub entries: Vec<LogEntry>,
    pub visible: bool,
}

impl ActivityLog {
    pub fn record(&mut self, level: LogLevel, message: &str) {
        self.entries.push(LogEntry {
            timestamp: current_time(),
            level,
            message: message.to_string(),
        });
        if self.entries.len() > MAX_ENTRIES {
            let excess = self.entries.len() - MAX_ENTRIES;
            self.entries.drain(..excess);
        }
    }

    pub fn has_errors(&self) -> bool {
        self.entries.iter().any(|e| e.level == LogLevel::Error)
    }
}

pub fn use_activity_log() -> Signal<ActivityLog> {
    use_context::<Signal<ActivityLog>>()
}

pub fn log_activity(log: &mut Signal<ActivityLog>, level: LogLevel, message: &str) {
    log.write().record(level, message);
}

fn current_time() -> String {
    chrono::Local::now().format("%H:%M:%S").to_string()
}

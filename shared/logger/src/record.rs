//! A single log line travelling from a [`Logger`](crate::Logger) to the writer.

use crate::log_level::LogLevel;
use chrono::Local;

#[derive(Debug, Clone)]
pub(crate) struct Record {
    pub timestamp: String,
    pub level: LogLevel,
    pub component: Option<String>,
    pub message: String,
}

impl Record {
    pub fn now(level: LogLevel, component: Option<&str>, message: &str) -> Self {
        Self {
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S%.3f").to_string(),
            level,
            component: component.map(str::to_owned),
            message: message.to_owned(),
        }
    }

    /// `[timestamp] LEVEL [component: NAME]: message\n`
    pub fn render(&self) -> String {
        match &self.component {
            Some(component) => format!(
                "[{}] {} [component: {}]: {}\n",
                self.timestamp, self.level, component, self.message
            ),
            None => format!("[{}] {}: {}\n", self.timestamp, self.level, self.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_with_component() {
        let record = Record::now(LogLevel::Warn, Some("Welcome"), "empty room");
        let line = record.render();

        assert!(line.contains("WARN [component: Welcome]: empty room"));
        assert!(line.ends_with('\n'));
    }

    #[test]
    fn test_render_without_component() {
        let record = Record::now(LogLevel::Error, None, "boom");
        assert!(record.render().contains("] ERROR: boom"));
    }

    #[test]
    fn test_timestamp_shape() {
        let record = Record::now(LogLevel::Info, None, "x");
        // YYYY-MM-DD HH:MM:SS.mmm
        assert_eq!(record.timestamp.len(), 23);
        assert_eq!(&record.timestamp[4..5], "-");
        assert_eq!(&record.timestamp[19..20], ".");
    }
}

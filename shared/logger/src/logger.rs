//! Thread-safe asynchronous logger.

use crate::error::Result;
use crate::log_level::LogLevel;
use crate::record::Record;
use crate::writer::spawn_file_writer;
use std::path::Path;
use std::sync::Arc;
use std::sync::mpsc::{Sender, channel};

/// Non-blocking logger backed by a dedicated writer thread.
///
/// Clones and [`Logger::for_component`] children share one channel, so a whole
/// application writes through a single thread and a single file handle.
///
/// # Examples
///
/// ```no_run
/// use logging::{LogLevel, Logger};
///
/// let logger = Logger::with_component("client.log", LogLevel::Info, "APP", false).unwrap();
/// logger.info("[APP] started");
///
/// let nav = logger.for_component("NAV");
/// nav.debug("[NAV] not recorded at Info level");
/// ```
#[derive(Clone)]
pub struct Logger {
    sender: Option<Sender<Record>>,
    level: LogLevel,
    component: Option<Arc<str>>,
    console_output: bool,
}

impl Logger {
    /// Creates a logger writing to `log_path` (created if missing).
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or the writer thread
    /// cannot be spawned.
    pub fn new(log_path: impl AsRef<Path>, level: LogLevel) -> Result<Self> {
        let (sender, receiver) = channel();
        spawn_file_writer(log_path.as_ref(), receiver)?;
        Ok(Self {
            sender: Some(sender),
            level,
            component: None,
            console_output: false,
        })
    }

    /// Creates a logger tagged with a component name, optionally mirroring
    /// accepted lines to stdout.
    pub fn with_component(
        log_path: impl AsRef<Path>,
        level: LogLevel,
        component: &str,
        console_output: bool,
    ) -> Result<Self> {
        let mut logger = Self::new(log_path, level)?;
        logger.component = Some(Arc::from(component));
        logger.console_output = console_output;
        Ok(logger)
    }

    /// A logger that discards everything.
    pub fn null() -> Self {
        Self {
            sender: None,
            level: LogLevel::Error,
            component: None,
            console_output: false,
        }
    }

    /// Same writer and level, different component tag.
    pub fn for_component(&self, component: &str) -> Self {
        Self {
            component: Some(Arc::from(component)),
            ..self.clone()
        }
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    /// Whether a message at `level` would be recorded.
    pub fn enabled(&self, level: LogLevel) -> bool {
        (self.sender.is_some() || self.console_output) && level >= self.level
    }

    pub fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message);
    }

    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    pub fn warn(&self, message: &str) {
        self.log(LogLevel::Warn, message);
    }

    pub fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }

    fn log(&self, level: LogLevel, message: &str) {
        if !self.enabled(level) {
            return;
        }

        let record = Record::now(level, self.component.as_deref(), message);

        if self.console_output {
            print!("{}", record.render());
        }

        if let Some(sender) = &self.sender {
            // The writer only goes away at process exit.
            let _ = sender.send(record);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::thread;
    use std::time::Duration;
    use tempfile::tempdir;

    fn wait_for_write() {
        thread::sleep(Duration::from_millis(50));
    }

    #[test]
    fn test_logger_creates_file() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("test.log");

        let logger = Logger::new(&log_path, LogLevel::Debug).unwrap();
        logger.info("Joined room");
        wait_for_write();

        let content = fs::read_to_string(log_path).unwrap();
        assert!(content.contains("INFO: Joined room"));
    }

    #[test]
    fn test_logger_respects_level() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("test.log");

        let logger = Logger::new(&log_path, LogLevel::Warn).unwrap();
        logger.debug("Debug message");
        logger.info("Info message");
        logger.warn("Warn message");
        wait_for_write();

        let content = fs::read_to_string(log_path).unwrap();
        assert!(!content.contains("Debug message"));
        assert!(!content.contains("Info message"));
        assert!(content.contains("Warn message"));
    }

    #[test]
    fn test_for_component_shares_writer() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("test.log");

        let app = Logger::with_component(&log_path, LogLevel::Info, "App", false).unwrap();
        let nav = app.for_component("Navigation");
        assert_eq!(nav.level(), LogLevel::Info);

        app.info("from app");
        nav.info("from nav");
        wait_for_write();

        let content = fs::read_to_string(log_path).unwrap();
        assert!(content.contains("[component: App]: from app"));
        assert!(content.contains("[component: Navigation]: from nav"));
    }

    #[test]
    fn test_logger_clone_across_threads() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("test.log");

        let logger = Logger::new(&log_path, LogLevel::Info).unwrap();
        let logger_clone = logger.clone();

        thread::spawn(move || {
            logger_clone.info("Message from thread");
        })
        .join()
        .unwrap();

        logger.info("Message from main");
        wait_for_write();

        let content = fs::read_to_string(log_path).unwrap();
        assert!(content.contains("Message from thread"));
        assert!(content.contains("Message from main"));
    }

    #[test]
    fn test_null_logger_records_nothing() {
        let logger = Logger::null();
        assert!(!logger.enabled(LogLevel::Error));

        // Must not panic without a writer.
        logger.error("dropped");
        logger.for_component("Child").warn("dropped too");
    }
}

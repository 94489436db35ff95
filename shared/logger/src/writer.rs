//! Background thread that appends records to the log file.

use crate::error::{LoggingError, Result};
use crate::record::Record;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::mpsc::Receiver;

struct FileWriter {
    file: File,
}

impl FileWriter {
    fn open(path: &Path) -> Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self { file })
    }

    fn write(&mut self, record: &Record) {
        let result = self
            .file
            .write_all(record.render().as_bytes())
            .and_then(|_| self.file.flush());
        if let Err(e) = result {
            eprintln!("Error writing log: {}", e);
        }
    }

    /// Runs until every sender is dropped.
    fn run(mut self, receiver: Receiver<Record>) {
        for record in receiver {
            self.write(&record);
        }
    }
}

/// Opens `path` in append mode and spawns the thread draining `receiver` into it.
pub(crate) fn spawn_file_writer(path: &Path, receiver: Receiver<Record>) -> Result<()> {
    let writer = FileWriter::open(path)?;
    std::thread::Builder::new()
        .name("log-writer".to_string())
        .spawn(move || writer.run(receiver))
        .map_err(|e| LoggingError::Spawn(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log_level::LogLevel;
    use std::fs;
    use std::sync::mpsc::channel;
    use std::thread;
    use std::time::Duration;
    use tempfile::tempdir;

    #[test]
    fn test_open_creates_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("client.log");

        assert!(FileWriter::open(&path).is_ok());
        assert!(path.exists());
    }

    #[test]
    fn test_open_fails_in_missing_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("client.log");

        assert!(matches!(FileWriter::open(&path), Err(LoggingError::Io(_))));
    }

    #[test]
    fn test_spawned_writer_appends_records() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("client.log");
        let (sender, receiver) = channel();

        spawn_file_writer(&path, receiver).unwrap();
        sender
            .send(Record::now(LogLevel::Info, Some("NAV"), "first"))
            .unwrap();
        sender
            .send(Record::now(LogLevel::Info, Some("NAV"), "second"))
            .unwrap();
        drop(sender);

        thread::sleep(Duration::from_millis(100));

        let content = fs::read_to_string(path).unwrap();
        let first = content.find("first").unwrap();
        let second = content.find("second").unwrap();
        assert!(first < second);
    }
}

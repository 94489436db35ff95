//! Asynchronous file logger shared by the meeting client crates.
//!
//! Every [`Logger`] clone feeds the same writer thread, so logging from the
//! UI thread never blocks on file I/O.

pub mod error;
mod log_level;
mod logger;
mod record;
mod writer;

pub use error::{LoggingError, Result};
pub use log_level::LogLevel;
pub use logger::Logger;


use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::config::Config;

#[derive(Debug, Copy, Clone)]
pub enum LogLevel {
    Info,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            LogLevel::Info => "INFO",
            LogLevel::Error => "ERROR",
        })
    }
}

#[derive(Debug, Copy, Clone)]
pub enum LogTarget {
    ConsoleAndFile,
    FileOnly,
}

/// One log file per run, named after the moment it was opened.
#[derive(Debug)]
struct SessionFile {
    path: PathBuf,
    file: File,
}

impl SessionFile {
    fn create(dir: &Path) -> std::io::Result<Self> {
        fs::create_dir_all(dir)?;
        let stamp = Local::now().format("%Y%m%d-%H%M%S");
        let path = dir.join(format!("session-{stamp}.log"));
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        Ok(Self { path, file })
    }
}

/// Run diagnostics. Console lines go to stderr so stdout only ever carries the greeting.
#[derive(Debug, Default)]
pub struct Logger {
    console: bool,
    session: Option<SessionFile>,
}

impl Logger {
    /// Discards everything.
    pub fn disabled() -> Self {
        Self::default()
    }

    /// `log_dir` of `None` keeps file output off. A directory that cannot be
    /// written costs one warning on stderr and the run continues without a file.
    pub fn new(console: bool, log_dir: Option<&Path>) -> Self {
        let session = log_dir.and_then(|dir| match SessionFile::create(dir) {
            Ok(session) => Some(session),
            Err(err) => {
                eprintln!("WARN: File logging unavailable; continuing without a log file. ({err})");
                None
            }
        });
        Self { console, session }
    }

    pub fn from_config(config: &Config) -> Self {
        let log_dir = config.file_logging_enabled().then(|| config.log_dir());
        Self::new(config.console_logging_enabled(), log_dir)
    }

    pub fn info(&self, message: impl AsRef<str>, target: LogTarget) {
        self.write(LogLevel::Info, message.as_ref(), target);
    }

    pub fn error(&self, message: impl AsRef<str>, target: LogTarget) {
        self.write(LogLevel::Error, message.as_ref(), target);
    }

    pub fn log_path(&self) -> Option<&Path> {
        self.session.as_ref().map(|s| s.path.as_path())
    }

    fn write(&self, level: LogLevel, message: &str, target: LogTarget) {
        let console = self.console && matches!(target, LogTarget::ConsoleAndFile);
        if !console && self.session.is_none() {
            return;
        }

        let line = format!(
            "[{}] {level:<5} {message}",
            Local::now().format("%Y-%m-%d %H:%M:%S")
        );
        if console {
            eprintln!("{line}");
        }
        if let Some(session) = &self.session {
            let mut file = &session.file;
            let _ = writeln!(file, "{line}");
        }
    }
}

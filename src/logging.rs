// src/logging.rs
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use env_logger::{Env, Target};
use log::warn;

use crate::errors::Result;

const DEFAULT_FILTER: &str = "info,homework_bot=debug";

/// Writes every log line to stdout and, when available, appends it to a file.
pub struct DualSink {
    file: Option<File>,
}

impl DualSink {
    pub fn console_only() -> Self {
        Self { file: None }
    }

    pub fn with_file(path: &Path) -> Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self { file: Some(file) })
    }
}

impl Write for DualSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        io::stdout().write_all(buf)?;
        if let Some(file) = self.file.as_mut() {
            file.write_all(buf)?;
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stdout().flush()?;
        if let Some(file) = self.file.as_mut() {
            file.flush()?;
        }
        Ok(())
    }
}

/// Installs the global logger. `RUST_LOG` overrides the default filter.
pub fn init(log_file: &Path) {
    let (sink, open_error) = match DualSink::with_file(log_file) {
        Ok(sink) => (sink, None),
        Err(e) => (DualSink::console_only(), Some(e)),
    };

    let result = env_logger::Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} - {} - {} - {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S,%3f"),
                record.level(),
                record.args(),
                record.target()
            )
        })
        .target(Target::Pipe(Box::new(sink)))
        .try_init();

    if let Err(e) = result {
        eprintln!("⚠️  Warning: logger already initialized: {}", e);
    }

    if let Some(e) = open_error {
        warn!("Logging to console only, {} unavailable: {}", log_file.display(), e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sink_appends_to_file() {
        let path = std::env::temp_dir().join(format!("homework_bot_sink_{}.log", std::process::id()));
        let _ = std::fs::remove_file(&path);

        {
            let mut sink = DualSink::with_file(&path).unwrap();
            sink.write_all(b"first\n").unwrap();
            sink.flush().unwrap();
        }
        {
            let mut sink = DualSink::with_file(&path).unwrap();
            sink.write_all(b"second\n").unwrap();
            sink.flush().unwrap();
        }

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "first\nsecond\n");
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_unopenable_file_is_an_error() {
        let path = std::env::temp_dir().join("homework_bot_missing_dir").join("nested").join("bot.log");
        assert!(DualSink::with_file(&path).is_err());
    }
}

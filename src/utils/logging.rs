use chrono::Local;
use std::fs::{File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;

use super::app_paths::AppPaths;

/// Shared handle to the session log file
#[derive(Clone)]
pub struct LogFileWriter {
    file: Arc<Mutex<File>>,
}

impl LogFileWriter {
    /// Create a timestamped log file in `log_dir` and point `latest.log` at it
    pub fn create_in(log_dir: &Path) -> io::Result<(Self, PathBuf)> {
        std::fs::create_dir_all(log_dir)?;

        let timestamp = Local::now().format("%Y%m%d_%H%M%S");
        let log_path = log_dir.join(format!("openf1_{}.log", timestamp));

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        #[cfg(unix)]
        {
            let latest_path = log_dir.join("latest.log");
            let _ = std::fs::remove_file(&latest_path);
            let _ = std::os::unix::fs::symlink(&log_path, &latest_path);
        }

        Ok((
            Self {
                file: Arc::new(Mutex::new(file)),
            },
            log_path,
        ))
    }
}

impl io::Write for LogFileWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut file = self
            .file
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log file lock poisoned"))?;
        file.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut file = self
            .file
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log file lock poisoned"))?;
        file.flush()
    }
}

impl<'a> MakeWriter<'a> for LogFileWriter {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Initialize tracing: a compact log file per run, plus stderr when `verbose`.
///
/// `RUST_LOG` overrides the default level. Returns the log file path, or
/// `None` if no log file could be created.
pub fn init_tracing(verbose: bool) -> Option<PathBuf> {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let log_file = AppPaths::log_dir()
        .ok()
        .and_then(|dir| LogFileWriter::create_in(&dir).ok());
    let log_path = log_file.as_ref().map(|(_, path)| path.clone());

    let file_layer = log_file.map(|(writer, _)| {
        fmt::layer()
            .with_writer(writer)
            .with_target(true)
            .with_level(true)
            .with_ansi(false)
            .with_timer(fmt::time::LocalTime::rfc_3339())
            .compact()
    });

    let stderr_layer = verbose.then(|| {
        fmt::layer()
            .with_writer(io::stderr)
            .with_target(true)
            .without_time()
            .compact()
    });

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stderr_layer)
        .try_init();

    tracing::info!(target: "logging", "Logging initialized");
    log_path
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_log_file_created_and_written() {
        let dir = tempfile::tempdir().unwrap();
        let (mut writer, path) = LogFileWriter::create_in(dir.path()).unwrap();

        writer.write_all(b"INFO api_client: GET https://api.openf1.org/v1/laps\n").unwrap();
        writer.flush().unwrap();

        assert!(path.starts_with(dir.path()));
        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("GET https://api.openf1.org/v1/laps"));

        #[cfg(unix)]
        assert!(dir.path().join("latest.log").exists());
    }
}

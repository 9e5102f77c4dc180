//! Logging init: file under XDG state dir plus stderr, or graceful fallback to stderr only.

use anyhow::Result;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,vdm=debug,vdm_core=debug,vdm_cli=debug";

/// Writer that is either a file or stderr (used when file clone fails).
enum FileOrStderr {
    File(std::fs::File),
    Stderr,
}

impl io::Write for FileOrStderr {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            FileOrStderr::File(f) => f.write(buf),
            FileOrStderr::Stderr => io::stderr().lock().write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            FileOrStderr::File(f) => f.flush(),
            FileOrStderr::Stderr => io::stderr().lock().flush(),
        }
    }
}

struct FileMakeWriter(std::fs::File);

impl<'a> MakeWriter<'a> for FileMakeWriter {
    type Writer = FileOrStderr;

    fn make_writer(&'a self) -> Self::Writer {
        self.0
            .try_clone()
            .map(FileOrStderr::File)
            .unwrap_or(FileOrStderr::Stderr)
    }
}

/// Default log file: `~/.local/state/vdm/vdm.log`.
pub fn default_log_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("vdm")?;
    Ok(xdg_dirs.get_state_home().join("vdm.log"))
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

fn open_log_file(path: &Path) -> Result<fs::File> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let file = fs::OpenOptions::new().create(true).append(true).open(path)?;
    Ok(file)
}

/// Initialize structured logging to `log_file` (or the XDG default) and to stderr.
/// Only file setup can fail (e.g. log dir unwritable); the caller then falls back to
/// [`init_logging_stderr`]. Either function may be called once per process.
pub fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let log_file_path = match log_file {
        Some(p) => p.to_path_buf(),
        None => default_log_path()?,
    };
    let file = open_log_file(&log_file_path)?;
    let writer: BoxMakeWriter = BoxMakeWriter::new(FileMakeWriter(file));

    tracing_subscriber::registry()
        .with(env_filter())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    tracing::info!("vdm logging initialized at {}", log_file_path.display());

    Ok(())
}

/// Initialize logging to stderr only (no file). Use when init_logging() fails so the CLI doesn't crash.
pub fn init_logging_stderr() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn open_log_file_creates_parent_and_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("vdm.log");
        {
            let mut f = open_log_file(&path).unwrap();
            f.write_all(b"one\n").unwrap();
        }
        {
            let mut f = open_log_file(&path).unwrap();
            f.write_all(b"two\n").unwrap();
        }
        assert_eq!(fs::read_to_string(&path).unwrap(), "one\ntwo\n");
    }

    #[test]
    fn init_logging_fails_before_installing_subscriber() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        fs::write(&blocker, b"").unwrap();

        let err = init_logging(Some(&blocker.join("vdm.log"))).unwrap_err();
        assert!(err.downcast_ref::<io::Error>().is_some(), "{err:#}");
        assert!(!blocker.join("vdm.log").exists());
    }

    #[test]
    fn file_make_writer_writes_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vdm.log");
        let mw = FileMakeWriter(open_log_file(&path).unwrap());
        let mut w = mw.make_writer();
        w.write_all(b"hello").unwrap();
        w.flush().unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello");
    }
}

//! Append-only trace file with size-based rotation.
//!
//! When the file grows past its limit it is renamed to a backup stamped with
//! the UTC time of rotation, e.g. `carousel-otlp.json.20261019T101500.123456`,
//! and a fresh file is started. Backup names sort chronologically, so the
//! oldest ones beyond the retention limit are found by name alone.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Default size limit before rotation (10 MB).
pub const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Default number of backups kept after rotation.
pub const MAX_BACKUP_FILES: usize = 3;

/// Thread-safe rotating line writer.
pub struct RotatingFile {
    path: PathBuf,
    max_bytes: u64,
    max_backups: usize,
    handle: Mutex<Option<File>>,
}

impl RotatingFile {
    /// Creates a writer with the default limits. The file is opened lazily
    /// on the first write.
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self::with_limits(path, MAX_FILE_SIZE_BYTES, MAX_BACKUP_FILES)
    }

    /// Creates a writer that rotates past `max_bytes` and keeps `max_backups`.
    #[must_use]
    pub const fn with_limits(path: PathBuf, max_bytes: u64, max_backups: usize) -> Self {
        Self {
            path,
            max_bytes,
            max_backups,
            handle: Mutex::new(None),
        }
    }

    /// Path of the live file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends `line` and a newline, rotating first if the file is full.
    ///
    /// # Errors
    ///
    /// Returns the I/O error from rotating, opening or writing the file, or
    /// an error if a previous writer panicked while holding the lock.
    pub fn write_line(&self, line: &str) -> io::Result<()> {
        let mut handle = self
            .handle
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("lock poisoned: {e}")))?;

        let size = fs::metadata(&self.path).map_or(0, |m| m.len());
        if size > self.max_bytes {
            *handle = None;
            self.rotate()?;
        }

        if handle.is_none() {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.path)?;
            *handle = Some(file);
        }
        let Some(file) = handle.as_mut() else {
            return Err(io::Error::new(io::ErrorKind::Other, "trace file unavailable"));
        };

        writeln!(file, "{line}")?;
        file.flush()
    }

    /// Moves the live file to a timestamped backup and prunes old backups.
    fn rotate(&self) -> io::Result<()> {
        if self.path.exists() {
            let stamp = chrono::Utc::now().format("%Y%m%dT%H%M%S%.6f").to_string();
            let mut backup = self.backup_path(&stamp);
            let mut n = 1;
            while backup.exists() {
                backup = self.backup_path(&format!("{stamp}-{n}"));
                n += 1;
            }
            fs::rename(&self.path, &backup)?;
        }

        let mut backups = self.backups()?;
        backups.sort();
        let excess = backups.len().saturating_sub(self.max_backups);
        for old in backups.iter().take(excess) {
            let _ = fs::remove_file(old);
        }
        Ok(())
    }

    fn backup_path(&self, suffix: &str) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".");
        name.push(suffix);
        PathBuf::from(name)
    }

    /// Lists existing backups of the live file.
    fn backups(&self) -> io::Result<Vec<PathBuf>> {
        let Some(dir) = self.path.parent() else {
            return Ok(vec![]);
        };
        let Some(prefix) = self
            .path
            .file_name()
            .and_then(|n| n.to_str())
            .map(|n| format!("{n}."))
        else {
            return Ok(vec![]);
        };

        Ok(fs::read_dir(dir)?
            .filter_map(std::result::Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| n.starts_with(&prefix))
            })
            .collect())
    }
}

impl std::fmt::Debug for RotatingFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatingFile")
            .field("path", &self.path)
            .field("max_bytes", &self.max_bytes)
            .field("max_backups", &self.max_backups)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_are_appended() {
        let dir = tempfile::tempdir().unwrap();
        let writer = RotatingFile::new(dir.path().join("trace.json"));

        writer.write_line("{\"a\":1}").unwrap();
        writer.write_line("{\"b\":2}").unwrap();

        let contents = fs::read_to_string(writer.path()).unwrap();
        assert_eq!(contents, "{\"a\":1}\n{\"b\":2}\n");
    }

    #[test]
    fn full_file_rotates_to_backup() {
        let dir = tempfile::tempdir().unwrap();
        let writer = RotatingFile::with_limits(dir.path().join("trace.json"), 10, 3);

        writer.write_line("0123456789abc").unwrap();
        writer.write_line("next").unwrap();

        assert_eq!(fs::read_to_string(writer.path()).unwrap(), "next\n");
        let backups = writer.backups().unwrap();
        assert_eq!(backups.len(), 1);
        assert_eq!(fs::read_to_string(&backups[0]).unwrap(), "0123456789abc\n");
    }

    #[test]
    fn old_backups_are_pruned() {
        let dir = tempfile::tempdir().unwrap();
        let writer = RotatingFile::with_limits(dir.path().join("trace.json"), 4, 2);

        for i in 0..6 {
            writer.write_line(&format!("line-{i}")).unwrap();
        }

        let mut backups = writer.backups().unwrap();
        backups.sort();
        assert_eq!(backups.len(), 2);
        assert_eq!(fs::read_to_string(&backups[1]).unwrap(), "line-4\n");
        assert_eq!(fs::read_to_string(writer.path()).unwrap(), "line-5\n");
    }

    #[test]
    fn unrelated_files_are_left_alone() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("notes.txt"), "keep").unwrap();
        let writer = RotatingFile::with_limits(dir.path().join("trace.json"), 1, 0);

        writer.write_line("aa").unwrap();
        writer.write_line("bb").unwrap();

        assert!(dir.path().join("notes.txt").exists());
        assert!(writer.backups().unwrap().is_empty());
    }
}

//! Size-rotated append-only file used as the trace sink.
//!
//! The active file is `<path>`; rotated generations are `<path>.1` (newest)
//! through `<path>.N` (oldest). Rotation happens before a write that would
//! start on a file already over the size limit, so a single oversized line is
//! never split.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// When to rotate and how many generations to keep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationPolicy {
    /// Rotate once the active file is larger than this.
    pub max_bytes: u64,
    /// Rotated generations retained; older ones are deleted.
    pub max_backups: usize,
}

impl Default for RotationPolicy {
    /// 10 MB per file, 3 backups.
    fn default() -> Self {
        Self {
            max_bytes: 10 * 1024 * 1024,
            max_backups: 3,
        }
    }
}

/// Thread-safe line writer with numbered rotation.
pub struct RotatingWriter {
    path: PathBuf,
    policy: RotationPolicy,
    /// Opened lazily on first write, dropped on rotation.
    file: Mutex<Option<File>>,
}

impl RotatingWriter {
    pub const fn new(path: PathBuf, policy: RotationPolicy) -> Self {
        Self {
            path,
            policy,
            file: Mutex::new(None),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends `line` plus a newline, rotating first when needed.
    ///
    /// # Errors
    ///
    /// Returns I/O errors from rotation, opening or writing, and an error if
    /// the internal lock was poisoned.
    pub fn write_line(&self, line: &str) -> io::Result<()> {
        let mut guard = self
            .file
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("writer lock poisoned: {e}")))?;

        if self.needs_rotation() {
            *guard = None;
            self.rotate()?;
        }

        if guard.is_none() {
            *guard = Some(
                OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(&self.path)?,
            );
        }

        if let Some(file) = guard.as_mut() {
            writeln!(file, "{line}")?;
            file.flush()?;
        }
        Ok(())
    }

    fn needs_rotation(&self) -> bool {
        fs::metadata(&self.path).is_ok_and(|meta| meta.len() > self.policy.max_bytes)
    }

    /// `<path>.{n}` for generation `n`.
    fn backup_path(&self, generation: usize) -> PathBuf {
        let mut name = self.path.as_os_str().to_os_string();
        name.push(format!(".{generation}"));
        PathBuf::from(name)
    }

    /// Shifts every generation up by one and moves the active file to `.1`.
    fn rotate(&self) -> io::Result<()> {
        if self.policy.max_backups == 0 {
            return fs::remove_file(&self.path).or_else(ignore_missing);
        }

        fs::remove_file(self.backup_path(self.policy.max_backups)).or_else(ignore_missing)?;
        for generation in (1..self.policy.max_backups).rev() {
            let from = self.backup_path(generation);
            if from.exists() {
                fs::rename(&from, self.backup_path(generation + 1))?;
            }
        }
        fs::rename(&self.path, self.backup_path(1)).or_else(ignore_missing)
    }
}

fn ignore_missing(err: io::Error) -> io::Result<()> {
    if err.kind() == io::ErrorKind::NotFound {
        Ok(())
    } else {
        Err(err)
    }
}

impl std::fmt::Debug for RotatingWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatingWriter")
            .field("path", &self.path)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_policy(max_backups: usize) -> RotationPolicy {
        RotationPolicy {
            max_bytes: 16,
            max_backups,
        }
    }

    #[test]
    fn test_appends_lines() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("trace.json");
        let writer = RotatingWriter::new(path.clone(), RotationPolicy::default());

        writer.write_line("{\"a\":1}").expect("write");
        writer.write_line("{\"b\":2}").expect("write");

        let contents = fs::read_to_string(&path).expect("read");
        assert_eq!(contents, "{\"a\":1}\n{\"b\":2}\n");
    }

    #[test]
    fn test_rotates_when_over_limit() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("trace.json");
        let writer = RotatingWriter::new(path.clone(), small_policy(3));

        writer.write_line("first line over sixteen bytes").expect("write");
        writer.write_line("second").expect("write");

        assert_eq!(fs::read_to_string(&path).expect("active"), "second\n");
        assert_eq!(
            fs::read_to_string(writer.backup_path(1)).expect("backup"),
            "first line over sixteen bytes\n"
        );
    }

    #[test]
    fn test_keeps_at_most_max_backups() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("trace.json");
        let writer = RotatingWriter::new(path, small_policy(2));

        for i in 0..5 {
            writer
                .write_line(&format!("generation {i} padded past the limit"))
                .expect("write");
        }

        assert!(writer.backup_path(1).exists());
        assert!(writer.backup_path(2).exists());
        assert!(!writer.backup_path(3).exists());
        assert!(fs::read_to_string(writer.backup_path(1))
            .expect("newest backup")
            .starts_with("generation 3"));
    }

    #[test]
    fn test_zero_backups_truncates() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("trace.json");
        let writer = RotatingWriter::new(path.clone(), small_policy(0));

        writer.write_line("this line is long enough").expect("write");
        writer.write_line("next").expect("write");

        assert_eq!(fs::read_to_string(&path).expect("active"), "next\n");
        assert!(!writer.backup_path(1).exists());
    }
}

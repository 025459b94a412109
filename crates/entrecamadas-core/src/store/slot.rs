//! Key-value slots holding the serialized message snapshot.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::constants::STORAGE_KEY;

/// A single durable slot. Every write replaces the whole contents.
pub trait SnapshotSlot {
    /// Read the slot. `Ok(None)` means nothing has been written yet.
    fn read(&self) -> io::Result<Option<String>>;

    fn write(&mut self, contents: &str) -> io::Result<()>;
}

/// Slot backed by `<data_dir>/<STORAGE_KEY>.json`
#[derive(Debug, Clone)]
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(format!("{}.json", STORAGE_KEY)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotSlot for FileSlot {
    fn read(&self) -> io::Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            // File doesn't exist yet - that's fine, not an error
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn write(&mut self, contents: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        // Replace atomically: write a sibling file, then rename over the target
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, contents)?;
        fs::rename(&tmp, &self.path)
    }
}

/// In-memory slot
#[derive(Debug, Clone, Default)]
pub struct MemorySlot {
    contents: Option<String>,
    fail_writes: bool,
    writes: usize,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slot pre-filled with the given contents
    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            contents: Some(contents.into()),
            ..Self::default()
        }
    }

    /// Slot whose writes always fail
    pub fn failing() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }

    /// Number of successful writes so far
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl SnapshotSlot for MemorySlot {
    fn read(&self) -> io::Result<Option<String>> {
        Ok(self.contents.clone())
    }

    fn write(&mut self, contents: &str) -> io::Result<()> {
        if self.fail_writes {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "slot is read-only"));
        }
        self.contents = Some(contents.to_string());
        self.writes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_slot_missing_file_reads_none() {
        let dir = tempfile::tempdir().unwrap();
        let slot = FileSlot::new(dir.path());
        assert!(slot.read().unwrap().is_none());
    }

    #[test]
    fn test_file_slot_write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let mut slot = FileSlot::new(&dir.path().join("nested"));
        slot.write("[]").unwrap();
        assert_eq!(slot.read().unwrap().as_deref(), Some("[]"));
        assert!(slot.path().ends_with("entrecamadas_messages.json"));
    }

    #[test]
    fn test_memory_slot_failing_writes() {
        let mut slot = MemorySlot::failing();
        assert!(slot.write("[]").is_err());
        assert!(slot.contents().is_none());
        assert_eq!(slot.writes(), 0);
    }
}

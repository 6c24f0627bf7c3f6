//! Writability probe
//!
//! Before any worker starts, the destination is checked by writing one file of
//! the full target size and removing it again. Permission problems and a lack
//! of space show up here instead of halfway through a large run.

use crate::error::WriteDiskError;
use crate::target::FileNamer;
use std::fs::{self, File};
use std::io::{self, Read};

/// Ensure the destination exists and can hold a file of `file_size` bytes
///
/// Creates the directory (recursively) if needed, writes a zero-filled probe
/// file of `file_size` bytes and deletes it.
pub fn probe(namer: &FileNamer, file_size: u64) -> Result<(), WriteDiskError> {
    let dir = namer.dir();

    fs::create_dir_all(dir).map_err(|source| WriteDiskError::Directory {
        path: dir.to_path_buf(),
        source,
    })?;

    let probe_path = namer.probe_file();

    if let Err(source) = write_zeros(&probe_path, file_size) {
        // Partial probe output must not be left behind
        let _ = fs::remove_file(&probe_path);
        return Err(WriteDiskError::ProbeWrite {
            path: probe_path,
            source,
        });
    }

    fs::remove_file(&probe_path).map_err(|source| WriteDiskError::ProbeRemove {
        path: probe_path,
        source,
    })
}

/// Stream `size` zero bytes into a new file without a full-size allocation
fn write_zeros(path: &std::path::Path, size: u64) -> io::Result<()> {
    let mut file = File::create(path)?;
    let copied = io::copy(&mut io::repeat(0).take(size), &mut file)?;
    if copied != size {
        return Err(io::Error::new(
            io::ErrorKind::WriteZero,
            format!("wrote {} of {} bytes", copied, size),
        ));
    }
    file.sync_all()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_probe_creates_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let dest = temp_dir.path().join("a").join("b");
        let namer = FileNamer::new(&dest);

        probe(&namer, 4096).unwrap();

        assert!(dest.is_dir());
        assert!(!namer.probe_file().exists());
        assert_eq!(fs::read_dir(&dest).unwrap().count(), 0);
    }

    #[test]
    fn test_probe_fails_when_destination_is_a_file() {
        let temp_dir = TempDir::new().unwrap();
        let dest = temp_dir.path().join("occupied");
        fs::write(&dest, b"not a directory").unwrap();

        let err = probe(&FileNamer::new(&dest), 16).unwrap_err();
        assert!(matches!(err, WriteDiskError::Directory { .. }));
    }

    #[test]
    fn test_probe_write_error_when_probe_path_is_a_directory() {
        let temp_dir = TempDir::new().unwrap();
        let namer = FileNamer::with_base(temp_dir.path(), "file-deadbeef");
        fs::create_dir(namer.probe_file()).unwrap();

        let err = probe(&namer, 16).unwrap_err();
        assert!(matches!(err, WriteDiskError::ProbeWrite { .. }));
    }
}

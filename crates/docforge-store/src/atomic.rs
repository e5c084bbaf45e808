use std::fs::{OpenOptions, create_dir_all};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Create `path` holding `data`, failing with `AlreadyExists` if it is taken.
///
/// The data goes to a synced temp file that is then hard-linked into place,
/// so readers see either nothing or the complete file and an existing file
/// is never replaced.
pub fn write_bytes_new(path: &Path, data: &[u8]) -> io::Result<()> {
    let parent = path.parent().filter(|parent| !parent.as_os_str().is_empty());
    if let Some(parent) = parent {
        create_dir_all(parent)?;
    }

    let tmp_path = temp_path(path)?;
    let published = write_temp(&tmp_path, data).and_then(|()| std::fs::hard_link(&tmp_path, path));
    let _ = std::fs::remove_file(&tmp_path);
    published?;

    if let Some(parent) = parent {
        sync_dir(parent)?;
    }

    Ok(())
}

/// Returns true for temp files left behind by an interrupted write.
pub fn is_temp_file(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "tmp")
}

fn write_temp(tmp_path: &Path, data: &[u8]) -> io::Result<()> {
    let mut file = OpenOptions::new()
        .create_new(true)
        .write(true)
        .open(tmp_path)?;
    file.write_all(data)?;
    file.sync_all()
}

fn temp_path(path: &Path) -> io::Result<PathBuf> {
    let file_name = path.file_name().ok_or_else(|| {
        io::Error::new(io::ErrorKind::InvalidInput, "invalid path for atomic write")
    })?;
    let tmp_name = format!(
        ".{}.{}.tmp",
        file_name.to_string_lossy(),
        uuid::Uuid::new_v4().simple()
    );
    Ok(path.with_file_name(tmp_name))
}

#[cfg(unix)]
fn sync_dir(path: &Path) -> io::Result<()> {
    let dir = OpenOptions::new().read(true).open(path)?;
    dir.sync_all()
}

#[cfg(not(unix))]
fn sync_dir(_path: &Path) -> io::Result<()> {
    Ok(())
}

use std::path::Path;

use crate::error::{Error, Result};

/// Fails with `Error::Folder` when something other than a directory occupies
/// `dest_path`.
pub fn check_dir_target<P: AsRef<Path>>(dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    if dest_path.exists() && !dest_path.is_dir() {
        return Err(Error::Folder {
            path: dest_path.to_path_buf(),
            source: std::io::Error::new(
                std::io::ErrorKind::AlreadyExists,
                "a file with this name already exists",
            ),
        });
    }
    Ok(())
}

/// Creates `dest_path` and its parents. An existing directory is not an error.
pub fn create_dir_all<P: AsRef<Path>>(dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    check_dir_target(dest_path)?;
    std::fs::create_dir_all(dest_path)
        .map_err(|source| Error::Folder { path: dest_path.to_path_buf(), source })
}

/// Writes `content` to `dest_path`, creating missing parent directories.
/// An existing file is replaced.
pub fn write_file<P: AsRef<Path>>(content: &str, dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    let write_error = |source| Error::Write { path: dest_path.to_path_buf(), source };

    if let Some(parent) = dest_path.parent() {
        std::fs::create_dir_all(parent).map_err(write_error)?;
    }
    std::fs::write(dest_path, content).map_err(write_error)
}

pub fn read_from(mut reader: impl std::io::Read) -> Result<String> {
    let mut buf = String::new();
    reader.read_to_string(&mut buf).map_err(Error::IoError)?;
    Ok(buf)
}

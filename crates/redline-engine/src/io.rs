use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("file path is empty")]
    EmptyPath,
    #[error("file not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Read the whole input file as UTF-8 text
pub fn read_file(path: &Path) -> Result<String, IoError> {
    if path.as_os_str().is_empty() {
        return Err(IoError::EmptyPath);
    }
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }

    let content = fs::read_to_string(path).map_err(IoError::Io)?;
    debug!(path = %path.display(), bytes = content.len(), "input file read");
    Ok(content)
}

/// Write the processed text to a file, creating parent directories as needed
pub fn write_file(path: &Path, content: &str) -> Result<(), IoError> {
    if path.as_os_str().is_empty() {
        return Err(IoError::EmptyPath);
    }

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }

    fs::write(path, content).map_err(IoError::Io)?;
    debug!(path = %path.display(), bytes = content.len(), "output file written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn read_round_trips_written_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("output.txt");

        write_file(&path, "processed text\n").unwrap();
        assert_eq!(read_file(&path).unwrap(), "processed text\n");
    }

    #[test]
    fn read_missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.txt");

        let result = read_file(&path);
        assert!(matches!(result, Err(IoError::NotFound(_))));
    }

    #[test]
    fn empty_path_is_rejected() {
        assert!(matches!(read_file(Path::new("")), Err(IoError::EmptyPath)));
        assert!(matches!(
            write_file(Path::new(""), "content"),
            Err(IoError::EmptyPath)
        ));
    }

    #[test]
    fn write_creates_missing_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/deeper/out.txt");

        write_file(&path, "text").unwrap();
        assert!(path.exists());
        assert_eq!(read_file(&path).unwrap(), "text");
    }

    #[test]
    fn write_overwrites_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.txt");

        write_file(&path, "first").unwrap();
        write_file(&path, "second").unwrap();
        assert_eq!(read_file(&path).unwrap(), "second");
    }
}

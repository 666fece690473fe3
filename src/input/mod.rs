//! Domain list input and output file handling.
//!
//! Domain files are UTF-8 text with one domain per line. Blank lines and
//! lines starting with `#` (after trimming) are ignored.
//!
//! Output writes report success as a `bool` so callers can warn and carry on.

use std::path::Path;

use log::debug;
use tokio::fs::{self, OpenOptions};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use crate::config::SAMPLE_DOMAINS;
use crate::error_handling::FileError;

/// Reads domain names from a text file, in file order.
///
/// # Errors
///
/// - `FileError::NotFound` if `path` does not exist (checked before opening)
/// - `FileError::Read` if the file cannot be opened or a line cannot be read
pub async fn read_domains(path: &Path) -> Result<Vec<String>, FileError> {
    if !fs::try_exists(path).await.unwrap_or(false) {
        return Err(FileError::NotFound(path.to_path_buf()));
    }

    let read_error = |source| FileError::Read {
        path: path.to_path_buf(),
        source,
    };

    let file = fs::File::open(path).await.map_err(read_error)?;
    let mut lines = BufReader::new(file).lines();
    let mut domains = Vec::new();

    while let Some(line) = lines.next_line().await.map_err(read_error)? {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        domains.push(trimmed.to_string());
    }

    debug!("Read {} domains from {}", domains.len(), path.display());
    Ok(domains)
}

/// Writes `content` to `path`, replacing any existing file.
///
/// Missing parent directories are created. Returns `false` on any failure.
pub async fn write_output(content: &str, path: &Path) -> bool {
    match write_file(content, path, false).await {
        Ok(()) => true,
        Err(e) => {
            debug!("Failed to write {}: {e}", path.display());
            false
        }
    }
}

/// Appends `content` to `path`, creating the file if needed.
///
/// Missing parent directories are created. Returns `false` on any failure.
pub async fn append_output(content: &str, path: &Path) -> bool {
    match write_file(content, path, true).await {
        Ok(()) => true,
        Err(e) => {
            debug!("Failed to append to {}: {e}", path.display());
            false
        }
    }
}

async fn write_file(content: &str, path: &Path, append: bool) -> std::io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).await?;
    }

    let mut file = OpenOptions::new()
        .create(true)
        .write(true)
        .append(append)
        .truncate(!append)
        .open(path)
        .await?;
    file.write_all(content.as_bytes()).await?;
    file.flush().await
}

/// Returns `true` if `path` exists and is a regular file.
pub async fn validate_file_path(path: &Path) -> bool {
    fs::metadata(path)
        .await
        .map(|meta| meta.is_file())
        .unwrap_or(false)
}

/// Writes a commented sample domains file to `path`.
///
/// # Errors
///
/// Returns the underlying I/O error if the file cannot be written.
pub async fn create_sample_domains_file(path: &Path) -> std::io::Result<()> {
    write_file(&SAMPLE_DOMAINS.join("\n"), path, false).await
}

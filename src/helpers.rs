use anyhow::Result;
use std::fs::DirEntry;
use std::path::Path;

/// Lists the regular files in `dir`, one directory level only.
///
/// Directories and other non-file entries are skipped, not recursed into.
/// Order is whatever the OS returns. A missing or unreadable directory is
/// an error; an entry whose file type cannot be read is silently dropped.
pub fn list_files(dir: &Path) -> Result<Vec<DirEntry>> {
    let files = dir
        .read_dir()?
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().map(|ft| ft.is_file()).unwrap_or(false))
        .collect::<Vec<_>>();

    Ok(files)
}

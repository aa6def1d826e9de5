//! TSV file discovery for directory conversion

use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

fn is_tsv_file(path: &Path) -> bool {
    path.is_file() && path.extension().map_or(false, |ext| ext == "tsv")
}

/// Find TSV files in a directory. If recursive is true, use walkdir; otherwise list files.
pub fn find_tsv_files(dir: &Path, recursive: bool) -> Result<Vec<PathBuf>, std::io::Error> {
    let mut tsv_files = Vec::new();

    if recursive {
        for entry in WalkDir::new(dir) {
            let entry = entry.map_err(std::io::Error::from)?;
            let path = entry.path();
            if is_tsv_file(path) {
                tsv_files.push(path.to_path_buf());
            }
        }
    } else {
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();
            if is_tsv_file(&path) {
                tsv_files.push(path);
            }
        }
    }

    // Deterministic processing order regardless of directory iteration order
    tsv_files.sort();
    Ok(tsv_files)
}

//! Directory listing for the `-f` flag.
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

/// Lists the files a folder contributes to the input list.
pub trait DirLister {
    fn list_files(&self, dir: &Path) -> io::Result<Vec<PathBuf>>;
}

/// Real filesystem listing: regular entries of `dir` (not recursive), in
/// `read_dir` order. Sub-directories are skipped.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsDirLister;

impl DirLister for FsDirLister {
    fn list_files(&self, dir: &Path) -> io::Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.is_dir() {
                debug!("Skipping sub-directory: {:?}", path);
                continue;
            }
            files.push(path);
        }
        debug!("Listed {} file(s) in {:?}", files.len(), dir);
        Ok(files)
    }
}

impl<F> DirLister for F
where
    F: Fn(&Path) -> io::Result<Vec<PathBuf>>,
{
    fn list_files(&self, dir: &Path) -> io::Result<Vec<PathBuf>> {
        self(dir)
    }
}

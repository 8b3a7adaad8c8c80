use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::splitter::split;

/// A newline-delimited list of URLs saved by the user.
pub struct DownloadList {
    entries: Vec<String>,
    path: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListMode {
    AllowDuplicates,
    DisallowDuplicates,
}

impl DownloadList {
    // A missing file is an empty list
    pub fn load<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        let entries = match fs::read_to_string(&path) {
            Ok(src) => split(&src, '\n', true)
                .into_iter()
                .map(|line| line.trim_end_matches('\r').to_string())
                .filter(|line| !line.trim().is_empty())
                .collect(),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(e),
        };
        debug!(path = %path.display(), entries = entries.len(), "loaded download list");
        Ok(Self { entries, path })
    }

    pub fn save(&self) -> io::Result<()> {
        fs::write(&self.path, self.entries.join("\n"))?;
        debug!(path = %self.path.display(), entries = self.entries.len(), "saved download list");
        Ok(())
    }

    /// Appends `urls` in order and returns how many were added.
    pub fn extend<I, S>(&mut self, urls: I, mode: ListMode) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let before = self.entries.len();
        for url in urls {
            let url = url.as_ref().trim();
            if url.is_empty() {
                continue;
            }
            if mode == ListMode::DisallowDuplicates && self.entries.iter().any(|e| e == url) {
                continue;
            }
            self.entries.push(url.to_string());
        }
        self.entries.len() - before
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let list = DownloadList::load(dir.path().join("list.txt")).unwrap();
        assert!(list.is_empty());
    }

    #[test]
    fn test_load_skips_blank_and_crlf() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("list.txt");
        fs::write(&path, "https://a.example/1\r\n\r\n  \nhttps://b.example/2\n").unwrap();
        let list = DownloadList::load(&path).unwrap();
        assert_eq!(list.entries(), ["https://a.example/1", "https://b.example/2"]);
    }

    #[test]
    fn test_extend_and_save_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("list.txt");
        fs::write(&path, "https://a.example/1").unwrap();

        let mut list = DownloadList::load(&path).unwrap();
        let added = list.extend(["https://b.example/2", "https://a.example/1"], ListMode::AllowDuplicates);
        assert_eq!(added, 2);
        list.save().unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "https://a.example/1\nhttps://b.example/2\nhttps://a.example/1"
        );
    }

    #[test]
    fn test_extend_without_duplicates() {
        let dir = tempfile::tempdir().unwrap();
        let mut list = DownloadList::load(dir.path().join("list.txt")).unwrap();
        let added = list.extend(
            vec!["u1".to_string(), "u2".to_string(), "u1".to_string(), " ".to_string()],
            ListMode::DisallowDuplicates,
        );
        assert_eq!(added, 2);
        assert_eq!(list.entries(), ["u1", "u2"]);
    }

    #[test]
    fn test_unreadable_path_is_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(DownloadList::load(dir.path()).is_err());
    }
}

//! In-memory file tree and its one-shot write to disk

use crate::error::{Result, ScaffoldError};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tokio::fs;

/// A node in the generated tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// Ensure the directory exists, even if nothing is written into it
    Directory,
    File(String),
}

/// Every path the generator produces, keyed by `/`-separated relative path
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileTree {
    entries: BTreeMap<String, Entry>,
}

impl FileTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a directory for creation
    pub fn dir(&mut self, path: impl Into<String>) {
        let path = path.into();
        self.entries.entry(path).or_insert(Entry::Directory);
    }

    /// Add a text file, replacing any earlier content at the same path
    pub fn file(&mut self, path: impl Into<String>, content: impl Into<String>) {
        self.entries.insert(path.into(), Entry::File(content.into()));
    }

    /// Add a JSON document, pretty-printed with two-space indentation
    pub fn json(&mut self, path: impl Into<String>, value: &serde_json::Value) {
        self.file(path, format!("{:#}\n", value));
    }

    pub fn get(&self, path: &str) -> Option<&Entry> {
        self.entries.get(path)
    }

    /// Content of a file entry
    pub fn content(&self, path: &str) -> Option<&str> {
        match self.entries.get(path) {
            Some(Entry::File(content)) => Some(content),
            _ => None,
        }
    }

    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Paths of all file entries, sorted
    pub fn files(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().filter_map(|(path, entry)| match entry {
            Entry::File(_) => Some(path.as_str()),
            Entry::Directory => None,
        })
    }

    /// Every directory that must exist before the files are written
    fn required_directories(&self) -> Vec<PathBuf> {
        let mut dirs: Vec<PathBuf> = self
            .entries
            .iter()
            .filter_map(|(path, entry)| match entry {
                Entry::Directory => Some(PathBuf::from(path)),
                Entry::File(_) => Path::new(path).parent().map(Path::to_path_buf),
            })
            .filter(|dir| !dir.as_os_str().is_empty())
            .collect();
        dirs.sort();
        dirs.dedup();
        dirs
    }

    /// Write the tree under `root`, directories first.
    ///
    /// Stops at the first failure; whatever was written so far stays on disk.
    /// Returns the number of files written.
    pub async fn write_to(&self, root: &Path) -> Result<usize> {
        fs::create_dir_all(root)
            .await
            .map_err(|source| ScaffoldError::Write {
                path: root.to_path_buf(),
                source,
            })?;

        for dir in self.required_directories() {
            let target = root.join(&dir);
            fs::create_dir_all(&target)
                .await
                .map_err(|source| ScaffoldError::Write {
                    path: target.clone(),
                    source,
                })?;
        }

        let mut written = 0;
        for (path, entry) in &self.entries {
            if let Entry::File(content) = entry {
                let target = root.join(path);
                fs::write(&target, content)
                    .await
                    .map_err(|source| ScaffoldError::Write {
                        path: target.clone(),
                        source,
                    })?;
                tracing::debug!(path = %path, bytes = content.len(), "wrote file");
                written += 1;
            }
        }

        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dir_does_not_clobber_file() {
        let mut tree = FileTree::new();
        tree.file("a/b.txt", "hello");
        tree.dir("a/b.txt");
        assert_eq!(tree.content("a/b.txt"), Some("hello"));
    }

    #[test]
    fn test_json_is_pretty_printed() {
        let mut tree = FileTree::new();
        tree.json("x.json", &serde_json::json!({ "a": 1 }));
        assert_eq!(tree.content("x.json"), Some("{\n  \"a\": 1\n}\n"));
    }

    #[test]
    fn test_required_directories_include_file_parents() {
        let mut tree = FileTree::new();
        tree.dir("public");
        tree.file("src/app/page.tsx", "");
        tree.file("README.md", "");

        let dirs = tree.required_directories();
        assert_eq!(dirs, vec![PathBuf::from("public"), PathBuf::from("src/app")]);
    }

    #[tokio::test]
    async fn test_write_to_creates_directories_and_files() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().join("demo");

        let mut tree = FileTree::new();
        tree.dir("public/images");
        tree.file("src/app/page.tsx", "export default function Page() {}");

        let written = tree.write_to(&root).await.unwrap();
        assert_eq!(written, 1);
        assert!(root.join("public/images").is_dir());
        assert_eq!(
            std::fs::read_to_string(root.join("src/app/page.tsx")).unwrap(),
            "export default function Page() {}"
        );
    }

    #[tokio::test]
    async fn test_write_to_is_idempotent_for_directories() {
        let tmp = tempfile::tempdir().unwrap();
        let mut tree = FileTree::new();
        tree.dir("src");

        tree.write_to(tmp.path()).await.unwrap();
        tree.write_to(tmp.path()).await.unwrap();
        assert!(tmp.path().join("src").is_dir());
    }

    #[tokio::test]
    async fn test_write_failure_reports_path() {
        let tmp = tempfile::tempdir().unwrap();
        // A file where a directory is needed
        std::fs::write(tmp.path().join("src"), "not a dir").unwrap();

        let mut tree = FileTree::new();
        tree.file("src/app/page.tsx", "");

        let err = tree.write_to(tmp.path()).await.unwrap_err();
        match err {
            ScaffoldError::Write { path, .. } => assert!(path.starts_with(tmp.path())),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}

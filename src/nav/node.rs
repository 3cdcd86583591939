use std::path::PathBuf;

/// A directory in the outline. Children are kept in sorted order.
#[derive(Debug, Clone, PartialEq)]
pub struct DirNode {
    /// Capitalized base name shown in the heading line
    pub title: String,
    pub path: PathBuf,
    /// Levels below the nav root; the root itself is 0
    pub depth: usize,
    pub files: Vec<FileEntry>,
    pub dirs: Vec<DirNode>,
}

/// A file listed under its directory's heading.
#[derive(Debug, Clone, PartialEq)]
pub struct FileEntry {
    pub title: String,
    /// Path printed after the title
    pub display_path: PathBuf,
}

impl DirNode {
    pub fn new(title: String, path: PathBuf, depth: usize) -> Self {
        Self {
            title,
            path,
            depth,
            files: Vec::new(),
            dirs: Vec::new(),
        }
    }

    /// Files in this directory and every directory below it
    pub fn file_count(&self) -> usize {
        self.files.len() + self.dirs.iter().map(DirNode::file_count).sum::<usize>()
    }
}

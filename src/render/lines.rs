use crate::nav::{DirNode, FileEntry};
use std::path::Path;

/// One line of the outline before formatting
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NavLine<'a> {
    /// A directory heading at `depth`
    Heading { depth: usize, title: &'a str },
    /// A file, one level deeper than its directory's heading
    Entry {
        depth: usize,
        title: &'a str,
        path: &'a Path,
    },
}

impl NavLine<'_> {
    pub fn depth(&self) -> usize {
        match self {
            NavLine::Heading { depth, .. } | NavLine::Entry { depth, .. } => *depth,
        }
    }
}

enum Pending<'a> {
    Dir(&'a DirNode),
    File(&'a FileEntry, usize),
}

/// Lazy pre-order walk over a built tree: a directory's heading, then its
/// files, then each subdirectory in turn.
pub struct NavLines<'a> {
    stack: Vec<Pending<'a>>,
}

impl<'a> NavLines<'a> {
    pub fn new(root: &'a DirNode) -> Self {
        Self {
            stack: vec![Pending::Dir(root)],
        }
    }
}

impl<'a> Iterator for NavLines<'a> {
    type Item = NavLine<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.stack.pop()? {
            Pending::Dir(dir) => {
                // Pushed in reverse so files pop before subdirectories
                self.stack.extend(dir.dirs.iter().rev().map(Pending::Dir));
                self.stack.extend(
                    dir.files
                        .iter()
                        .rev()
                        .map(|file| Pending::File(file, dir.depth + 1)),
                );
                Some(NavLine::Heading {
                    depth: dir.depth,
                    title: &dir.title,
                })
            }
            Pending::File(file, depth) => Some(NavLine::Entry {
                depth,
                title: &file.title,
                path: &file.display_path,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn dir(name: &str, depth: usize, files: &[&str], dirs: Vec<DirNode>) -> DirNode {
        let mut node = DirNode::new(
            crate::nav::title::capitalize(name),
            PathBuf::from(name),
            depth,
        );
        node.files = files
            .iter()
            .map(|f| FileEntry {
                title: f.to_string(),
                display_path: PathBuf::from(f),
            })
            .collect();
        node.dirs = dirs;
        node
    }

    #[test]
    fn test_order_files_before_subdirectories() {
        let tree = dir(
            "API",
            0,
            &["index"],
            vec![
                dir("a", 1, &["a1"], vec![dir("deep", 2, &["d1"], vec![])]),
                dir("b", 1, &["b1", "b2"], vec![]),
            ],
        );

        let rendered: Vec<(usize, &str)> = NavLines::new(&tree)
            .map(|line| match line {
                NavLine::Heading { depth, title } => (depth, title),
                NavLine::Entry { depth, title, .. } => (depth, title),
            })
            .collect();

        assert_eq!(
            rendered,
            vec![
                (0, "Api"),
                (1, "index"),
                (1, "A"),
                (2, "a1"),
                (2, "Deep"),
                (3, "d1"),
                (1, "B"),
                (2, "b1"),
                (2, "b2"),
            ]
        );
    }

    #[test]
    fn test_empty_root_yields_single_heading() {
        let tree = dir("API", 0, &[], vec![]);
        let lines: Vec<NavLine> = NavLines::new(&tree).collect();
        assert_eq!(lines, vec![NavLine::Heading { depth: 0, title: "Api" }]);
    }

    #[test]
    fn test_fresh_iterator_each_time() {
        let tree = dir("API", 0, &["x"], vec![]);
        assert_eq!(NavLines::new(&tree).count(), 2);
        assert_eq!(NavLines::new(&tree).count(), 2);
    }
}

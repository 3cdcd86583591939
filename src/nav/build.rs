use super::node::{DirNode, FileEntry};
use super::title::{capitalize, file_title};
use crate::diag;
use crate::errors::AppError;
use crate::matcher::{MatchSpec, MatcherEngine, RelPath, Selection};
use crate::util::path::{base_name, calculate_display_path};
use ignore::{DirEntry, WalkBuilder};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Options that shape the tree built from the filesystem
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Suffix removed from file names to form titles
    pub strip_suffix: String,
    pub include_hidden: bool,
    /// Print file paths relative to this directory instead of as walked
    pub display_root: Option<PathBuf>,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            strip_suffix: ".md".to_string(),
            include_hidden: true,
            display_root: None,
        }
    }
}

/// Walked entries grouped under the directory that holds them
#[derive(Default)]
struct Listing {
    files: Vec<String>,
    dirs: Vec<String>,
}

/// Walk `root` and build the outline tree.
///
/// Fails when the root is missing, unreadable or not a directory.
/// Directories below the root that cannot be listed are left out entirely,
/// with a warning.
pub fn build_nav(root: &Path, spec: &MatchSpec, options: &BuildOptions) -> Result<DirNode, AppError> {
    let metadata = fs::metadata(root)?;
    if !metadata.is_dir() {
        return Err(AppError::NotADirectory(root.to_path_buf()));
    }
    // Surface permission errors on the root itself instead of printing a bare heading
    fs::read_dir(root)?;

    let matcher = MatcherEngine::compile(spec)?;
    let resolver = DisplayResolver::new(root, options.display_root.as_deref());

    // .gitignore files are scoped to the directory holding them, including
    // ones above the root and nested below it.
    let mut walker = WalkBuilder::new(root);
    walker
        .standard_filters(false)
        .hidden(!options.include_hidden)
        .git_ignore(spec.respect_gitignore)
        .git_exclude(spec.respect_gitignore)
        .parents(spec.respect_gitignore)
        .require_git(false)
        .follow_links(false)
        .filter_entry(is_listable)
        .sort_by_file_name(|a, b| a.cmp(b));

    let mut listings: HashMap<PathBuf, Listing> = HashMap::new();
    let mut pruned_dirs: Vec<PathBuf> = Vec::new();

    for entry in walker.build() {
        let entry = match entry {
            Ok(e) => e,
            Err(err) => {
                diag::warn(format!("Skipping unreadable entry: {}", err));
                continue;
            }
        };

        let entry_path = entry.path();
        if entry.depth() == 0 {
            continue;
        }

        if pruned_dirs.iter().any(|pruned| entry_path.starts_with(pruned)) {
            continue;
        }

        let Some(name) = entry_path.file_name().and_then(|n| n.to_str()) else {
            diag::warn(format!("Skipping non-UTF8 path: {:?}", entry_path));
            continue;
        };

        let Some(file_type) = entry.file_type() else {
            continue;
        };

        // Symlinked directories are listed but never entered; links to files
        // (and dangling links) are listed as files.
        let is_dir = if file_type.is_symlink() {
            if fs::metadata(entry_path).map(|m| m.is_dir()).unwrap_or(false) {
                continue;
            }
            false
        } else {
            file_type.is_dir()
        };

        let Some(rel_path) = RelPath::from_root_rel(entry_path, root) else {
            continue;
        };

        let selection = if is_dir {
            matcher.select_dir(&rel_path)
        } else {
            matcher.select_file(&rel_path)
        };

        match selection {
            Selection::PruneDir => {
                pruned_dirs.push(entry_path.to_path_buf());
                continue;
            }
            Selection::Exclude => continue,
            Selection::Include => {}
        }

        let Some(parent) = entry_path.parent() else {
            continue;
        };
        let listing = listings.entry(parent.to_path_buf()).or_default();
        if is_dir {
            listing.dirs.push(name.to_string());
        } else {
            listing.files.push(name.to_string());
        }
    }

    let root_name = base_name(root);
    let mut root_node = DirNode::new(capitalize(&root_name), root.to_path_buf(), 0);
    assemble(&mut root_node, &mut listings, options, &resolver);

    Ok(root_node)
}

/// Directories below the root that cannot be listed are dropped before the
/// walker yields them, so they get no heading.
fn is_listable(entry: &DirEntry) -> bool {
    let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
    if entry.depth() == 0 || !is_dir {
        return true;
    }
    match fs::read_dir(entry.path()) {
        Ok(_) => true,
        Err(err) => {
            diag::warn(format!(
                "Skipping unreadable directory {}: {}",
                entry.path().display(),
                err
            ));
            false
        }
    }
}

/// Attach the listing for `parent.path` and recurse into its subdirectories.
fn assemble(
    parent: &mut DirNode,
    listings: &mut HashMap<PathBuf, Listing>,
    options: &BuildOptions,
    resolver: &DisplayResolver,
) {
    let Some(mut listing) = listings.remove(&parent.path) else {
        return;
    };

    // The walker already yields sorted names; sorting again keeps the
    // order independent of it.
    listing.files.sort();
    listing.dirs.sort();

    for name in listing.files {
        let path = parent.path.join(&name);
        parent.files.push(FileEntry {
            title: file_title(&name, &options.strip_suffix).to_string(),
            display_path: resolver.display_path(&path),
        });
    }

    for name in listing.dirs {
        let mut child = DirNode::new(capitalize(&name), parent.path.join(&name), parent.depth + 1);
        assemble(&mut child, listings, options, resolver);
        parent.dirs.push(child);
    }
}

/// Maps walked paths to the paths printed in the outline
struct DisplayResolver {
    /// (walked root, resolved root, resolved display root)
    rebase: Option<(PathBuf, PathBuf, PathBuf)>,
}

impl DisplayResolver {
    fn new(root: &Path, display_root: Option<&Path>) -> Self {
        let rebase = display_root.map(|display_root| {
            let resolved_root = root.canonicalize().unwrap_or_else(|_| root.to_path_buf());
            let resolved_display = display_root
                .canonicalize()
                .unwrap_or_else(|_| display_root.to_path_buf());
            (root.to_path_buf(), resolved_root, resolved_display)
        });
        Self { rebase }
    }

    fn display_path(&self, walked: &Path) -> PathBuf {
        match &self.rebase {
            None => walked.to_path_buf(),
            Some((root, resolved_root, display_root)) => {
                let resolved = match walked.strip_prefix(root) {
                    Ok(rel) => resolved_root.join(rel),
                    Err(_) => walked.to_path_buf(),
                };
                calculate_display_path(&resolved, display_root)
            }
        }
    }
}

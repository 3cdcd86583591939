use super::{MatchSpec, RelPath};
use crate::errors::AppError;
use globset::{Glob, GlobSet, GlobSetBuilder};

/// Selection decision for a path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Keep this entry in the outline
    Include,
    /// Leave this file out
    Exclude,
    /// Leave this directory and everything under it out
    PruneDir,
}

/// Compiled exclude globs evaluated against root-relative paths.
/// Gitignore rules are applied by the walker, not here.
pub struct MatcherEngine {
    exclude_globset: Option<GlobSet>,
}

impl MatcherEngine {
    pub fn compile(spec: &MatchSpec) -> Result<Self, AppError> {
        let exclude_globset = if !spec.exclude_glob.is_empty() {
            let mut builder = GlobSetBuilder::new();
            for pattern in &spec.exclude_glob {
                let glob = Glob::new(pattern).map_err(|e| {
                    AppError::InvalidPattern(format!("'{}': {}", pattern, e))
                })?;
                builder.add(glob);
            }
            Some(builder.build()?)
        } else {
            None
        };

        Ok(Self { exclude_globset })
    }

    pub fn select_file(&self, rel_path: &RelPath) -> Selection {
        if let Some(ref exclude_globset) = self.exclude_globset {
            if exclude_globset.is_match(rel_path.as_match_str().as_ref()) {
                return Selection::Exclude;
            }
        }

        Selection::Include
    }

    pub fn select_dir(&self, rel_path: &RelPath) -> Selection {
        let path_str = rel_path.as_match_str();

        if let Some(ref exclude_globset) = self.exclude_globset {
            // "**/drafts/**" only matches with the trailing slash
            if exclude_globset.is_match(path_str.as_ref())
                || exclude_globset.is_match(format!("{}/", path_str))
            {
                return Selection::PruneDir;
            }
        }

        Selection::Include
    }
}

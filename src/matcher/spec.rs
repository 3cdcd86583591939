use crate::cli::UseGitignoreMode;
use crate::config::Settings;
use std::path::Path;

/// Declarative description of which entries are left out of the outline
#[derive(Debug, Clone, Default)]
pub struct MatchSpec {
    /// Glob patterns to exclude, already normalized (e.g., ["**/drafts/**"])
    pub exclude_glob: Vec<String>,

    /// Whether to respect gitignore files
    pub respect_gitignore: bool,
}

impl MatchSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize a glob pattern to be recursive if it doesn't contain path separators.
    /// "*.tmp" becomes "**/*.tmp"; a bare name like "drafts" becomes "**/drafts/**".
    fn normalize_pattern(pattern: &str) -> String {
        // "drafts/" and "drafts" behave identically
        let pattern = pattern.strip_suffix('/').unwrap_or(pattern);

        if !pattern.contains('/') {
            if !pattern.contains('*') && !pattern.contains('.') {
                format!("**/{}/**", pattern)
            } else {
                format!("**/{}", pattern)
            }
        } else {
            pattern.to_string()
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        let respect_gitignore = match settings.use_gitignore {
            UseGitignoreMode::Always => true,
            UseGitignoreMode::Never => false,
            UseGitignoreMode::Auto => Self::is_inside_git_repo(&settings.root),
        };

        Self::new()
            .with_exclude_glob(settings.exclude.clone())
            .with_gitignore(respect_gitignore)
    }

    /// Walk up from `path` looking for a `.git` entry.
    fn is_inside_git_repo(path: &Path) -> bool {
        let start = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
        start.ancestors().any(|dir| dir.join(".git").exists())
    }

    pub fn with_exclude_glob(mut self, patterns: Vec<String>) -> Self {
        self.exclude_glob = patterns
            .iter()
            .map(|p| Self::normalize_pattern(p))
            .collect();
        self
    }

    pub fn with_gitignore(mut self, respect: bool) -> Self {
        self.respect_gitignore = respect;
        self
    }
}

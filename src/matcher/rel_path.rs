use std::borrow::Cow;
use std::ffi::OsString;
use std::path::Path;

/// A path relative to the nav root, matched with forward slashes on every platform.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RelPath {
    inner: OsString,
}

impl RelPath {
    /// Returns None if the path is not under the root.
    pub fn from_root_rel<P: AsRef<Path>>(path: P, root: &Path) -> Option<Self> {
        let relative = path.as_ref().strip_prefix(root).ok()?;
        Some(Self {
            inner: relative.as_os_str().to_owned(),
        })
    }

    #[cfg(test)]
    pub fn from_relative<P: AsRef<Path>>(path: P) -> Self {
        Self {
            inner: path.as_ref().as_os_str().to_owned(),
        }
    }

    pub fn as_match_str(&self) -> Cow<'_, str> {
        let path_str = self.inner.to_string_lossy();
        if path_str.contains('\\') {
            Cow::Owned(path_str.replace('\\', "/"))
        } else {
            path_str
        }
    }
}

use std::path::Path;

/// Decides which entries of a directory end up in an archive.
///
/// The filter sees the full path of every child entry. The root path
/// handed to [`dump_path`](crate::dump_path) is never filtered.
pub trait PathFilter {
    fn include(&self, path: &Path) -> bool;
}

impl<F> PathFilter for F
where
    F: Fn(&Path) -> bool + ?Sized,
{
    fn include(&self, path: &Path) -> bool {
        self(path)
    }
}

/// The default filter: every entry is included.
pub fn accept_all(_path: &Path) -> bool {
    true
}

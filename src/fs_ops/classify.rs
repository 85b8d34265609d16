use std::path::Path;

/// How an endpoint of a copy is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    /// A regular file exists at the path (symlinks followed).
    File,
    /// An existing directory, or nothing at all: a directory to be created.
    DirectoryLike,
}

/// Classify `path`. Never fails: anything that is not a readable regular file
/// is directory-like.
pub fn classify(path: &Path) -> PathKind {
    if path.is_file() {
        PathKind::File
    } else {
        PathKind::DirectoryLike
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::prelude::*;

    #[test]
    fn file_dir_and_missing() {
        let td = assert_fs::TempDir::new().unwrap();
        let f = td.child("a.txt");
        f.write_str("x").unwrap();
        let d = td.child("sub");
        d.create_dir_all().unwrap();

        assert_eq!(classify(f.path()), PathKind::File);
        assert_eq!(classify(d.path()), PathKind::DirectoryLike);
        assert_eq!(classify(td.child("nope").path()), PathKind::DirectoryLike);
        assert_eq!(classify(Path::new("")), PathKind::DirectoryLike);
    }

    #[cfg(unix)]
    #[test]
    fn symlink_to_file_is_file() {
        let td = assert_fs::TempDir::new().unwrap();
        let f = td.child("real.txt");
        f.write_str("x").unwrap();
        let link = td.child("link.txt");
        link.symlink_to_file(f.path()).unwrap();
        assert_eq!(classify(link.path()), PathKind::File);

        let dangling = td.child("dangling");
        dangling.symlink_to_file(td.child("gone").path()).unwrap();
        assert_eq!(classify(dangling.path()), PathKind::DirectoryLike);
    }
}

use std::path::Path;

/// Returns `true` when a filesystem entry exists at `path`.
pub fn file_exists(path: impl AsRef<Path>) -> bool {
    path.as_ref().exists()
}

/// Returns `true` when `path` exists and is a directory.
pub fn dir_exists(path: impl AsRef<Path>) -> bool {
    path.as_ref().is_dir()
}

#[cfg(test)]
mod tests {
    use super::{dir_exists, file_exists};

    #[test]
    fn probes_files_and_directories() {
        let dir = tempfile::tempdir().expect("must create temp dir");
        let file_path = dir.path().join("probe.txt");
        std::fs::write(&file_path, b"x").expect("must write probe file");

        assert!(file_exists(&file_path));
        assert!(file_exists(dir.path()));
        assert!(dir_exists(dir.path()));
        assert!(!dir_exists(&file_path));
        assert!(!file_exists(dir.path().join("missing.txt")));
    }
}

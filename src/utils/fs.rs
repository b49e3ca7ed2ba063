use std::path::{Path, PathBuf};

/// True if `path` is a regular file the current user may execute.
pub fn is_executable_file(path: &Path) -> bool {
    let metadata = match std::fs::metadata(path) {
        Ok(m) => m,
        Err(_) => return false,
    };
    if !metadata.is_file() {
        return false;
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        metadata.permissions().mode() & 0o111 != 0
    }
    #[cfg(not(unix))]
    {
        true
    }
}

/// Directory holding the running binary, with symlinks resolved.
pub fn install_dir() -> Option<PathBuf> {
    let exe = std::env::current_exe().ok()?;
    let exe = exe.canonicalize().unwrap_or(exe);
    exe.parent().map(Path::to_path_buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_not_executable() {
        let tmp = TempDir::new().unwrap();
        assert!(!is_executable_file(&tmp.path().join("clang-tidy")));
    }

    #[test]
    fn test_directory_is_not_executable() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("bin")).unwrap();
        assert!(!is_executable_file(&tmp.path().join("bin")));
    }

    #[cfg(unix)]
    #[test]
    fn test_permission_bits_decide() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("clang-tidy");
        fs::write(&path, "#!/bin/sh\n").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();
        assert!(!is_executable_file(&path));

        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        assert!(is_executable_file(&path));
    }

    #[test]
    fn test_install_dir_contains_current_exe() {
        let dir = install_dir().unwrap();
        assert!(dir.is_dir());
    }
}

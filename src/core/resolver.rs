use std::env::consts::EXE_SUFFIX;
use std::path::{Path, PathBuf};

use crate::core::error::InvocationError;

const ANALYZER_NAME: &str = "clang-tidy";

/// Build directories searched under the install dir, in priority order.
const CANDIDATE_DIRS: [&str; 2] = ["build", "debug"];

/// Candidate analyzer locations under `install_dir`: the installed build
/// first, then the debug build.
pub fn candidate_paths(install_dir: &Path) -> Vec<PathBuf> {
    let file_name = format!("{}{}", ANALYZER_NAME, EXE_SUFFIX);
    CANDIDATE_DIRS
        .iter()
        .map(|dir| install_dir.join(dir).join("bin").join(&file_name))
        .collect()
}

/// Pick the first candidate accepted by `lookup`.
pub fn resolve_executable<F>(candidates: &[PathBuf], lookup: F) -> Result<PathBuf, InvocationError>
where
    F: Fn(&Path) -> bool,
{
    for candidate in candidates {
        if lookup(candidate) {
            log::debug!("Found analyzer at {}", candidate.display());
            return Ok(candidate.clone());
        }
        log::debug!("No analyzer at {}", candidate.display());
    }
    Err(InvocationError::MissingExecutable { path: None })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::fs::is_executable_file;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_candidates_are_build_then_debug() {
        let candidates = candidate_paths(Path::new("/opt/tools"));
        assert_eq!(candidates.len(), 2);
        assert!(candidates[0].starts_with("/opt/tools/build/bin"));
        assert!(candidates[1].starts_with("/opt/tools/debug/bin"));
        for c in &candidates {
            let name = c.file_name().unwrap().to_string_lossy();
            assert!(name.starts_with("clang-tidy"));
        }
    }

    #[test]
    fn test_first_match_wins() {
        let candidates = candidate_paths(Path::new("/opt/tools"));
        let resolved = resolve_executable(&candidates, |_| true).unwrap();
        assert_eq!(resolved, candidates[0]);
    }

    #[test]
    fn test_falls_back_to_debug_build() {
        let candidates = candidate_paths(Path::new("/opt/tools"));
        let resolved =
            resolve_executable(&candidates, |p| p.to_string_lossy().contains("debug")).unwrap();
        assert_eq!(resolved, candidates[1]);
    }

    #[test]
    fn test_no_match_is_missing_executable() {
        let candidates = candidate_paths(Path::new("/opt/tools"));
        let err = resolve_executable(&candidates, |_| false).unwrap_err();
        assert!(matches!(err, InvocationError::MissingExecutable { path: None }));
    }

    #[test]
    fn test_empty_candidate_list() {
        let err = resolve_executable(&[], |_| true).unwrap_err();
        assert!(matches!(err, InvocationError::MissingExecutable { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_resolves_on_real_filesystem() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = TempDir::new().unwrap();
        let candidates = candidate_paths(tmp.path());
        let debug = &candidates[1];
        fs::create_dir_all(debug.parent().unwrap()).unwrap();
        fs::write(debug, "#!/bin/sh\n").unwrap();
        fs::set_permissions(debug, fs::Permissions::from_mode(0o755)).unwrap();

        let resolved = resolve_executable(&candidates, is_executable_file).unwrap();
        assert_eq!(&resolved, debug);
    }
}

use std::path::PathBuf;

use thiserror::Error;

/// User-facing failures that end the run with exit status 1.
#[derive(Error, Debug)]
pub enum InvocationError {
    /// No analyzer binary could be found or spawned
    #[error("No Clang-tidy executable found{}", at_path(.path))]
    MissingExecutable {
        /// The explicit path that failed to spawn, if one was given
        path: Option<PathBuf>,
    },

    /// The positional file argument was omitted
    #[error("No file provided for analysis")]
    MissingInput,

    /// Spawning or waiting on the analyzer failed for another reason
    #[error("Failed to run {}: {source}", .program.display())]
    Spawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn at_path(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" at {}", p.display()))
        .unwrap_or_default()
}

impl InvocationError {
    pub fn exit_code(&self) -> i32 {
        1
    }
}

use std::path::PathBuf;

use crate::cli::Cli;
use crate::core::config::Config;
use crate::core::error::InvocationError;

/// Everything needed to invoke the analyzer once, after flags and config
/// have been merged.
#[derive(Debug, Clone, PartialEq)]
pub struct InvocationRequest {
    pub executable: Option<PathBuf>,
    pub declarations: Option<PathBuf>,
    pub use_compilation_db: bool,
    pub target_file: PathBuf,
}

impl InvocationRequest {
    /// Flags win over config values. Fails if no target file was given.
    pub fn from_cli(cli: &Cli, config: &Config) -> Result<Self, InvocationError> {
        let target_file = cli.file.clone().ok_or(InvocationError::MissingInput)?;

        Ok(Self {
            executable: cli.executable.clone().or_else(|| config.executable.clone()),
            declarations: cli
                .declarations
                .clone()
                .or_else(|| config.declarations.clone()),
            use_compilation_db: cli.compilation_db || config.compilation_database.unwrap_or(false),
            target_file,
        })
    }
}

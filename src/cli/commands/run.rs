use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::cli::output::OutputFormatter;
use crate::cli::Cli;
use crate::core::config::Config;
use crate::core::invocation::Invocation;
use crate::core::request::InvocationRequest;
use crate::core::resolver::candidate_paths;
use crate::runner::ProcessRunner;
use crate::utils::fs::{install_dir, is_executable_file};

/// Entry point used by `main`: loads the project config from the working
/// directory and searches next to the running binary.
pub async fn execute(cli: &Cli, runner: &dyn ProcessRunner) -> Result<i32> {
    let config = Config::load(&std::env::current_dir()?);
    let candidates = install_dir()
        .map(|dir| candidate_paths(&dir))
        .unwrap_or_default();

    run(cli, &config, &candidates, is_executable_file, runner).await
}

pub async fn run<F>(
    cli: &Cli,
    config: &Config,
    candidates: &[PathBuf],
    lookup: F,
    runner: &dyn ProcessRunner,
) -> Result<i32>
where
    F: Fn(&Path) -> bool,
{
    let request = InvocationRequest::from_cli(cli, config)?;
    let invocation = Invocation::build(&request, candidates, lookup)?;
    log::debug!("Analyzer invocation: {:?}", invocation.argv());

    if cli.dry_run {
        OutputFormatter::new(&cli.format).display(&invocation);
        return Ok(0);
    }

    log::info!(
        "Running {} on {}",
        invocation.program.display(),
        request.target_file.display()
    );
    runner.run(&invocation).await
}

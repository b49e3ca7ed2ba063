mod cli;
mod core;
mod runner;
mod utils;

use clap::Parser;
use env_logger::Env;

use cli::output::print_error;
use cli::Cli;
use crate::core::error::InvocationError;
use runner::SystemRunner;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    let env = Env::default().default_filter_or(cli.log_level.as_str());
    env_logger::Builder::from_env(env).init();

    let code = match cli::commands::run::execute(&cli, &SystemRunner).await {
        Ok(code) => code,
        Err(err) => {
            print_error(&err.to_string());
            err.downcast_ref::<InvocationError>()
                .map(InvocationError::exit_code)
                .unwrap_or(1)
        }
    };

    std::process::exit(code);
}

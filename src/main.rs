use anyhow::Result;
use clap::Parser;
use fileman::{
    app::config::Config,
    cli::{self, Cli},
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set config file override if --config flag was used
    if let Some(ref config_file) = cli.config {
        fileman::util::paths::set_config_file_override(Some(config_file.clone()));
    }

    let mut config = Config::load()?;
    if let Some(ref file) = cli.file {
        config.data.path = file.clone();
    }

    // Keep the guard alive so the log file is flushed on exit
    let guard = fileman::util::logging::init(&config.logging, cli.verbose)?;
    tracing::debug!("Config loaded: {:?}", config);

    match cli.command {
        Some(command) => {
            let exit_code = cli::handler::handle_command(command, &config);
            // process::exit skips destructors
            drop(guard);
            std::process::exit(exit_code);
        }
        None => cli::handler::run_demo(&config),
    }
}

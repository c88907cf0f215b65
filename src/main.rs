use anyhow::{anyhow, Context};
use clap::Parser;

use rust_passgen::api::{self, ApiState};
use rust_passgen::cli::{handlers, menu, Args, CliCommand};
use rust_passgen::core::{Config, Session, SessionSettings};
use rust_passgen::{logging, PasswordGenerator};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let env_files = Config::load_env_files().context("Invalid environment file")?;
    let mut config = Config::load().context("Invalid configuration")?;
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    let log_level = args.log_level.unwrap_or(config.log_level);

    logging::init(log_level, config.log_file.as_deref()).context("Failed to initialize logging")?;
    for path in &env_files {
        log::debug!("Loaded {}", path.display());
    }
    log::debug!("Loaded config: {:?}", config);

    let generator = PasswordGenerator::new(config.length_policy);

    match args.resolved_command() {
        CliCommand::Generate(generate) => {
            handlers::handle_generate(&generator, &config, &generate, config.seed)
                .map_err(|e| anyhow!("{}", e))?;
        }
        CliCommand::Check { password, json } => {
            handlers::handle_check(&password, json).map_err(|e| anyhow!("{}", e))?;
        }
        CliCommand::Menu => {
            let session = match config.seed {
                Some(seed) => Session::seeded(generator, SessionSettings::default(), seed),
                None => Session::new(generator, SessionSettings::default()),
            };
            menu::run_cli_menu(session).map_err(|e| anyhow!("{}", e))?;
        }
        CliCommand::Serve { port, address } => {
            if config.seed.is_some() {
                log::warn!("Ignoring seed in server mode; every request draws fresh entropy");
            }
            let address = address.unwrap_or_else(|| config.api_address.clone());
            let port = port.unwrap_or(config.api_port);
            println!("🚀 API server listening on http://{}:{}", address, port);
            api::start_server(ApiState::from_config(&config), &address, port)
                .await
                .context("API server failed")?;
        }
    }

    Ok(())
}

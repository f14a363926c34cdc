//! CLI entry point - the composition root.
//!
//! The only place where configuration, logging and the HTTP client are
//! wired together. Handlers receive the client as a `PolicyServerPort`.

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use emdac_cli::{Cli, CliError, Commands, handlers};
use emdac_ps::DefaultPsClient;

fn init_logging(cli: &Cli) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.default_log_filter()));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let Some(command) = cli.command.as_ref() else {
        // No command provided - show help
        Cli::command()
            .print_help()
            .map_err(|e| CliError::Arguments(e.to_string()))?;
        return Ok(());
    };

    if matches!(command, Commands::Endpoints) {
        for line in handlers::endpoints() {
            println!("{line}");
        }
        return Ok(());
    }

    let config = cli.client_config().ok_or_else(|| {
        CliError::Arguments("--base-url (or EMDAC_PS_URL) is required".to_string())
    })?;
    let client = DefaultPsClient::new(&config)?;

    match command {
        Commands::ClearPolicyList { body } => {
            handlers::clear_policy_list(&client, body).await?;
        }
        Commands::DelegatePolicy { body } => {
            handlers::delegate_policy(&client, body).await?;
        }
        Commands::Endpoints => {}
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables before clap reads them
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_logging(&cli);

    if let Err(err) = run(cli).await {
        tracing::debug!(error = ?err, "command failed");
        eprintln!("Error: {err}");
        std::process::exit(err.exit_code());
    }
    Ok(())
}

use std::path::PathBuf;

use accounts::config::{Configuration, DEFAULT_CONFIG_PATH};
use accounts::{initialize_state, telemetry};
use application::ports::outbound::AccountRepository as _;
use clap::{Parser, Subcommand};
use domain::identity::account::Account;
use serde::Serialize;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the YAML configuration file.
    #[arg(long, short, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug, Clone)]
enum Commands {
    /// Create a new account.
    Create {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        confirm_password: String,
    },
    /// Print every stored account.
    List,
}

/// Public view of an account. The hash never leaves the process.
#[derive(Serialize)]
struct AccountView<'a> {
    id: &'a str,
    email: &'a str,
}

impl<'a> From<&'a Account> for AccountView<'a> {
    fn from(account: &'a Account) -> Self {
        Self {
            id: account.id().as_str(),
            email: account.email().as_str(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let logging = telemetry::setup_logging();
    let config = Configuration::default().path(args.config.clone()).read();
    logging.set_level(&config.log_level);

    let state = initialize_state(config).await.inspect_err(|err| {
        tracing::error!(error = %err, "cannot initialize services");
    })?;

    let output = match args.cmd {
        Commands::Create {
            email,
            password,
            confirm_password,
        } => {
            let account = state
                .create(&email, password, confirm_password)
                .await
                .inspect_err(|err| {
                    tracing::error!(error = %err, "account creation failed");
                })?;

            serde_json::to_string_pretty(&AccountView::from(&account))?
        },
        Commands::List => {
            let accounts = state.accounts.get_all().await?;
            let views: Vec<_> =
                accounts.iter().map(AccountView::from).collect();

            serde_json::to_string_pretty(&views)?
        },
    };

    println!("{output}");

    Ok(())
}

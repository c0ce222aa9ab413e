//! Crowdfund CLI
//!
//! Command-line client for browsing, creating and funding crowdfunding campaigns

use clap::Parser;
use crowdfund_client::cli::args::{Cli, Commands, ConfigAction};
use crowdfund_client::cli::commands::{self, CommandError};
use crowdfund_client::config::{parse_address, ConfigOverrides};
use crowdfund_client::view::CreateCampaignForm;
use std::process;

fn main() {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let contract_address = cli.contract.as_deref().map(|s| match parse_address(s) {
        Ok(address) => address,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    });

    // Build config overrides from global arguments
    let overrides = ConfigOverrides {
        node_url: cli.node_url.clone(),
        contract_address,
        gas_limit: None,
        config_dir: cli.config_dir.clone(),
    };
    let account = cli.account.as_deref();

    let result: Result<(), CommandError> = match cli.command {
        Commands::Config { action } => match action {
            ConfigAction::Init { force } => commands::config::init(force, &overrides),
            ConfigAction::Show => commands::config::show(&overrides),
        },

        command => match tokio::runtime::Runtime::new() {
            Ok(rt) => rt.block_on(run(command, &overrides, account)),
            Err(e) => {
                eprintln!("Error: Failed to create async runtime: {}", e);
                process::exit(1);
            }
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run(
    command: Commands,
    overrides: &ConfigOverrides,
    account: Option<&str>,
) -> Result<(), CommandError> {
    match command {
        Commands::Config { .. } => Ok(()),

        Commands::Node => commands::node::info(overrides).await,

        Commands::Accounts => commands::wallet::accounts(overrides, account).await,

        Commands::List {
            search,
            status,
            watch,
        } => commands::campaign::list(overrides, account, search, status, watch).await,

        Commands::Show { id } => commands::campaign::show(overrides, account, id).await,

        Commands::Create {
            title,
            description,
            goal,
            days,
        } => {
            let form = CreateCampaignForm {
                title,
                description,
                goal,
                duration_days: days,
            };
            commands::campaign::create(overrides, account, form).await
        }

        Commands::Contribute { id, amount } => {
            commands::campaign::contribute(overrides, account, id, amount).await
        }

        Commands::Withdraw { id } => commands::campaign::withdraw(overrides, account, id).await,

        Commands::Refund { id } => commands::campaign::refund(overrides, account, id).await,

        Commands::Deactivate { id } => {
            commands::campaign::deactivate(overrides, account, id).await
        }

        Commands::Contributors { id } => {
            commands::campaign::contributors(overrides, account, id).await
        }
    }
}

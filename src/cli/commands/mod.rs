//! CLI command implementations

pub mod campaign;
pub mod config;
pub mod node;
pub mod wallet;

use std::path::PathBuf;

use crate::config::{load_config, ConfigError, ConfigOverrides};
use crate::contract::TxOutcome;
use crate::manager::{CrowdfundManager, ManagerError};

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Manager(#[from] ManagerError),

    #[error("Configuration already exists at {0} (use --force to overwrite)")]
    ConfigExists(PathBuf),
}

/// Whether a command needs a signing account
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalletMode {
    /// Connect if possible; reads work without an account
    Optional,

    /// Fail when no account can be selected
    Required,
}

/// Load config, connect to the node and the wallet, select `account`
pub async fn open_session(
    overrides: &ConfigOverrides,
    account: Option<&str>,
    mode: WalletMode,
) -> Result<CrowdfundManager, CommandError> {
    let config = load_config(overrides.clone())?;
    let mut manager = CrowdfundManager::new(config);
    manager.connect_node().await?;

    match manager.connect_wallet_from_env().await {
        Ok(()) => {
            if let Some(selector) = account {
                manager.select_account(selector)?;
            }
        }
        Err(e) if mode == WalletMode::Optional => {
            log::info!("Continuing without an account: {}", e);
        }
        Err(e) => return Err(e.into()),
    }

    Ok(manager)
}

/// Print the hash, block and created campaign id of a confirmed transaction
pub(crate) fn print_outcome(outcome: &TxOutcome) {
    if let Some(id) = outcome.campaign_id {
        println!("  Campaign ID:  {}", id);
    }
    println!("  Transaction:  {}", outcome.tx_hash);
    if let Some(block) = outcome.block_number {
        println!("  Block:        {}", block);
    }
}

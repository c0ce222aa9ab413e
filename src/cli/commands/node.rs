//! Node command implementation

use crate::cli::commands::CommandError;
use crate::config::{load_config, ConfigOverrides};
use crate::manager::CrowdfundManager;

/// Print chain metadata reported by the node
pub async fn info(overrides: &ConfigOverrides) -> Result<(), CommandError> {
    let config = load_config(overrides.clone())?;
    let mut manager = CrowdfundManager::new(config);
    manager.connect_node().await?;

    let info = manager.chain_info().await?;

    println!("✓ Connected to {}", manager.config().node.ws_url);
    println!();
    println!("  Chain ID:       {}", info.chain_id);
    println!("  Client:         {}", info.client_version);
    println!("  Current block:  {}", info.block_number);
    match manager.config().contract.address {
        Some(address) => println!("  Contract:       {}", address),
        None => println!("  Contract:       (not configured)"),
    }

    Ok(())
}

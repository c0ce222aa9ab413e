//! Wallet command implementation

use std::sync::Arc;

use crate::chain::ChainConnection;
use crate::cli::commands::CommandError;
use crate::config::{load_config, ConfigOverrides};
use crate::manager::ManagerError;
use crate::view::render_wallet;
use crate::wallet::{LocalExtension, WalletExtension};

/// Show the wallet picker
///
/// Needs no node: only the extension handshake runs.
pub async fn accounts(
    overrides: &ConfigOverrides,
    account: Option<&str>,
) -> Result<(), CommandError> {
    let config = load_config(overrides.clone())?;

    let extension = LocalExtension::from_env(&config.wallet)
        .map_err(ManagerError::from)?
        .map(|extension| Arc::new(extension) as Arc<dyn WalletExtension>);

    let mut connection = ChainConnection::new();
    if connection
        .connect_wallet(extension, &config.wallet.app_name)
        .await
        .is_ok()
    {
        if let Some(selector) = account {
            connection.select(selector).map_err(ManagerError::from)?;
        }
    }

    println!("{}", render_wallet(&connection));

    Ok(())
}

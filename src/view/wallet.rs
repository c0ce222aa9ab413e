//! Wallet picker

use crate::chain::ChainConnection;
use crate::view::format::short_address;

const CONNECT_PROMPT: &str =
    "Wallet not connected. Set CROWDFUND_MNEMONIC or CROWDFUND_PRIVATE_KEYS to connect.";

/// Render the connection state and the account list
pub fn render_wallet(connection: &ChainConnection) -> String {
    let Some(selected) = connection.selected_account() else {
        let mut lines = vec![CONNECT_PROMPT.to_string()];
        if let Some(error) = connection.error() {
            lines.push(format!("Error: {}", error));
        }
        return lines.join("\n");
    };

    let mut lines = vec![format!("Connected: {}", short_address(&selected.address))];

    let accounts = connection.accounts();
    if accounts.len() > 1 {
        lines.push(String::new());
        for (index, account) in accounts.iter().enumerate() {
            let marker = if account.address == selected.address {
                "*"
            } else {
                " "
            };
            lines.push(format!(
                "{} [{}] {} ({})",
                marker,
                index,
                account.name,
                short_address(&account.address)
            ));
        }
    }

    lines.join("\n")
}

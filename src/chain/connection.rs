//! Node and wallet connection
//!
//! Opens the WebSocket provider to the chain node and performs the wallet
//! extension handshake (enable, enumerate accounts, pick one).

use alloy::network::EthereumWallet;
use alloy::primitives::Address;
use alloy::providers::{DynProvider, Provider, ProviderBuilder, WsConnect};
use async_trait::async_trait;
use std::sync::Arc;

use crate::types::InjectedAccount;
use crate::wallet::{WalletError, WalletExtension};

/// Errors that can occur while connecting to the node or the wallet
#[derive(Debug, thiserror::Error)]
pub enum ConnectionError {
    #[error("Failed to connect to node. Make sure your node is running on {url} ({reason})")]
    NodeUnavailable { url: String, reason: String },

    #[error("Node request failed: {0}")]
    Rpc(String),

    #[error("No wallet extension found. Set CROWDFUND_MNEMONIC or CROWDFUND_PRIVATE_KEYS.")]
    NoExtension,

    #[error("No accounts found. Please add an account to your wallet extension.")]
    NoAccounts,

    #[error("Account not found: {0}")]
    AccountNotFound(String),

    #[error("Wallet error: {0}")]
    Wallet(#[from] WalletError),

    #[error("Not connected: {0}")]
    NotConnected(&'static str),
}

/// Chain metadata reported by the node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainInfo {
    pub chain_id: u64,
    pub client_version: String,
    pub block_number: u64,
}

/// Anything that can report the current block number
#[async_trait]
pub trait BlockSource: Send + Sync {
    async fn block_number(&self) -> Result<u64, ConnectionError>;
}

/// WebSocket client for the chain node
#[derive(Clone)]
pub struct NodeClient {
    provider: DynProvider,
    url: String,
}

impl NodeClient {
    /// Connect to the node at `url`
    pub async fn connect(url: &str) -> Result<Self, ConnectionError> {
        log::info!("Connecting to node at {}", url);

        let provider = ProviderBuilder::new()
            .connect_ws(WsConnect::new(url))
            .await
            .map_err(|e| ConnectionError::NodeUnavailable {
                url: url.to_string(),
                reason: e.to_string(),
            })?
            .erased();

        Ok(Self::from_provider(provider, url))
    }

    /// Wrap a provider that is already set up
    pub fn from_provider(provider: DynProvider, url: impl Into<String>) -> Self {
        Self {
            provider,
            url: url.into(),
        }
    }

    /// Open a second connection that signs transactions with `wallet`
    pub async fn signing_provider(
        &self,
        wallet: EthereumWallet,
    ) -> Result<DynProvider, ConnectionError> {
        let provider = ProviderBuilder::new()
            .wallet(wallet)
            .connect_ws(WsConnect::new(self.url.as_str()))
            .await
            .map_err(|e| ConnectionError::NodeUnavailable {
                url: self.url.clone(),
                reason: e.to_string(),
            })?
            .erased();

        Ok(provider)
    }

    /// Read-only provider
    pub fn provider(&self) -> &DynProvider {
        &self.provider
    }

    /// Node endpoint URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Query chain id, client version and latest block number
    pub async fn chain_info(&self) -> Result<ChainInfo, ConnectionError> {
        let chain_id = self
            .provider
            .get_chain_id()
            .await
            .map_err(|e| ConnectionError::Rpc(format!("Failed to get chain id: {}", e)))?;
        let client_version = self
            .provider
            .get_client_version()
            .await
            .map_err(|e| ConnectionError::Rpc(format!("Failed to get client version: {}", e)))?;
        let block_number = self.block_number().await?;

        Ok(ChainInfo {
            chain_id,
            client_version,
            block_number,
        })
    }
}

#[async_trait]
impl BlockSource for NodeClient {
    async fn block_number(&self) -> Result<u64, ConnectionError> {
        self.provider
            .get_block_number()
            .await
            .map_err(|e| ConnectionError::Rpc(format!("Failed to get current block: {}", e)))
    }
}

impl std::fmt::Debug for NodeClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeClient").field("url", &self.url).finish()
    }
}

/// Connection state shared by every command
///
/// Mirrors what a front-end keeps in its connection hook: the node client,
/// the wallet accounts, the selected account and the last error message.
#[derive(Default)]
pub struct ChainConnection {
    node: Option<NodeClient>,
    extension: Option<Arc<dyn WalletExtension>>,
    accounts: Vec<InjectedAccount>,
    selected: Option<InjectedAccount>,
    is_connecting: bool,
    error: Option<String>,
}

impl ChainConnection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Connect to the node, recording the failure message on error
    pub async fn connect_node(&mut self, url: &str) -> Result<(), ConnectionError> {
        self.is_connecting = true;
        let result = NodeClient::connect(url).await;
        self.is_connecting = false;

        match result {
            Ok(node) => {
                self.node = Some(node);
                self.error = None;
                Ok(())
            }
            Err(e) => {
                log::error!("Failed to connect to node: {}", e);
                self.error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Enable the wallet extension and select its first account
    pub async fn connect_wallet(
        &mut self,
        extension: Option<Arc<dyn WalletExtension>>,
        app_name: &str,
    ) -> Result<(), ConnectionError> {
        self.is_connecting = true;
        self.error = None;
        let result = self.enable_wallet(extension, app_name).await;
        self.is_connecting = false;

        if let Err(e) = &result {
            log::error!("Failed to connect wallet: {}", e);
            self.error = Some(e.to_string());
        }
        result
    }

    async fn enable_wallet(
        &mut self,
        extension: Option<Arc<dyn WalletExtension>>,
        app_name: &str,
    ) -> Result<(), ConnectionError> {
        let extension = extension.ok_or(ConnectionError::NoExtension)?;

        let enabled = extension.enable(app_name).await?;
        if enabled.is_empty() {
            return Err(ConnectionError::NoExtension);
        }

        let accounts = extension.accounts().await?;
        if accounts.is_empty() {
            return Err(ConnectionError::NoAccounts);
        }

        log::info!(
            "Wallet '{}' connected with {} account(s)",
            extension.name(),
            accounts.len()
        );
        self.selected = accounts.first().cloned();
        self.accounts = accounts;
        self.extension = Some(extension);
        Ok(())
    }

    /// Select one of the connected accounts by address
    pub fn select_account(&mut self, address: Address) -> Result<(), ConnectionError> {
        let account = self
            .accounts
            .iter()
            .find(|account| account.address == address)
            .cloned()
            .ok_or_else(|| ConnectionError::AccountNotFound(address.to_string()))?;
        self.selected = Some(account);
        Ok(())
    }

    /// Select an account by address string or by its position in the list
    pub fn select(&mut self, selector: &str) -> Result<(), ConnectionError> {
        if let Ok(index) = selector.parse::<usize>() {
            let account = self
                .accounts
                .get(index)
                .cloned()
                .ok_or_else(|| ConnectionError::AccountNotFound(selector.to_string()))?;
            self.selected = Some(account);
            return Ok(());
        }

        let address = selector
            .parse::<Address>()
            .map_err(|_| ConnectionError::AccountNotFound(selector.to_string()))?;
        self.select_account(address)
    }

    /// Per-account transaction signer from the extension
    pub async fn signer(&self, account: &InjectedAccount) -> Result<EthereumWallet, ConnectionError> {
        let extension = self
            .extension
            .as_ref()
            .ok_or(ConnectionError::NotConnected("wallet"))?;
        Ok(extension.signer(account.address).await?)
    }

    /// Install an already connected node client
    pub fn set_node(&mut self, node: NodeClient) {
        self.node = Some(node);
    }

    pub fn node(&self) -> Option<&NodeClient> {
        self.node.as_ref()
    }

    pub fn accounts(&self) -> &[InjectedAccount] {
        &self.accounts
    }

    pub fn selected_account(&self) -> Option<&InjectedAccount> {
        self.selected.as_ref()
    }

    pub fn is_connecting(&self) -> bool {
        self.is_connecting
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Both the node and an account are available
    pub fn is_connected(&self) -> bool {
        self.node.is_some() && self.selected.is_some()
    }
}

//! Crowdfund manager - Main integration layer
//!
//! Coordinates between config, the chain connection, the wallet extension
//! and the contract client.

use std::sync::Arc;
use std::time::Duration;

use crate::chain::{BlockSource, BlockWatcher, ChainConnection, ChainInfo, ConnectionError};
use crate::config::{ConfigError, GlobalConfig};
use crate::contract::{load_campaigns, CampaignReader, ContractCallError, CrowdfundContract, TxOutcome};
use crate::types::{CampaignWithId, ContributionInfo};
use crate::view::{ContributeForm, CreateCampaignForm, FormError};
use crate::wallet::{LocalExtension, WalletError, WalletExtension};

/// Errors that can occur in the crowdfund manager
#[derive(Debug, thiserror::Error)]
pub enum ManagerError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Connection(#[from] ConnectionError),

    #[error("Wallet error: {0}")]
    Wallet(#[from] WalletError),

    #[error("{0}")]
    Contract(#[from] ContractCallError),

    #[error("{0}")]
    Form(#[from] FormError),

    #[error("Campaign {0} not found")]
    CampaignNotFound(u32),

    #[error("Not connected to the node")]
    NodeNotConnected,
}

/// Main crowdfund manager
///
/// Owns the connection state and a contract client bound to the node and
/// the selected account. The client is rebuilt whenever either changes.
pub struct CrowdfundManager {
    /// Global configuration
    config: GlobalConfig,

    /// Node client, wallet accounts and selection
    connection: ChainConnection,

    /// Contract client for the current node and account
    contract: CrowdfundContract,
}

impl CrowdfundManager {
    /// Create a disconnected manager
    ///
    /// # Example
    ///
    /// ```ignore
    /// use crowdfund_client::config::GlobalConfig;
    /// use crowdfund_client::manager::CrowdfundManager;
    ///
    /// let mut manager = CrowdfundManager::new(GlobalConfig::default());
    /// manager.connect_node().await?;
    /// let campaigns = manager.load_campaigns().await;
    /// ```
    pub fn new(config: GlobalConfig) -> Self {
        let contract = CrowdfundContract::new(&config.contract, None, None);
        Self {
            config,
            connection: ChainConnection::new(),
            contract,
        }
    }

    pub fn config(&self) -> &GlobalConfig {
        &self.config
    }

    pub fn connection(&self) -> &ChainConnection {
        &self.connection
    }

    pub fn contract(&self) -> &CrowdfundContract {
        &self.contract
    }

    fn refresh_contract(&mut self) {
        self.contract = CrowdfundContract::new(
            &self.config.contract,
            self.connection.node().cloned(),
            self.connection.selected_account().cloned(),
        );
    }

    /// Connect to the configured node
    pub async fn connect_node(&mut self) -> Result<(), ManagerError> {
        let url = self.config.node.ws_url.clone();
        self.connection.connect_node(&url).await?;
        self.refresh_contract();
        Ok(())
    }

    /// Connect a wallet extension and select its first account
    pub async fn connect_wallet(
        &mut self,
        extension: Option<Arc<dyn WalletExtension>>,
    ) -> Result<(), ManagerError> {
        let app_name = self.config.wallet.app_name.clone();
        self.connection.connect_wallet(extension, &app_name).await?;
        self.refresh_contract();
        Ok(())
    }

    /// Connect the extension configured through the environment
    pub async fn connect_wallet_from_env(&mut self) -> Result<(), ManagerError> {
        let extension = LocalExtension::from_env(&self.config.wallet)?
            .map(|extension| Arc::new(extension) as Arc<dyn WalletExtension>);
        self.connect_wallet(extension).await
    }

    /// Select an account by address or list index
    pub fn select_account(&mut self, selector: &str) -> Result<(), ManagerError> {
        self.connection.select(selector)?;
        self.refresh_contract();
        Ok(())
    }

    pub async fn chain_info(&self) -> Result<ChainInfo, ManagerError> {
        let node = self.connection.node().ok_or(ManagerError::NodeNotConnected)?;
        Ok(node.chain_info().await?)
    }

    pub async fn current_block(&self) -> Result<u64, ManagerError> {
        let node = self.connection.node().ok_or(ManagerError::NodeNotConnected)?;
        Ok(node.block_number().await?)
    }

    /// Start polling the current block at the configured block time
    ///
    /// `seen` is the block the caller already shows; only later blocks
    /// notify subscribers.
    pub fn block_watcher(&self, seen: u64) -> Result<BlockWatcher, ManagerError> {
        let node = self
            .connection
            .node()
            .cloned()
            .ok_or(ManagerError::NodeNotConnected)?;
        let interval = Duration::from_secs(self.config.display.block_time_secs);
        Ok(BlockWatcher::starting_at(Arc::new(node), interval, seen))
    }

    /// Every campaign the contract reports, in index order
    pub async fn load_campaigns(&self) -> Vec<CampaignWithId> {
        if self.config.contract.address.is_none() {
            log::warn!("No contract address configured; showing no campaigns");
        }
        load_campaigns(&self.contract).await
    }

    pub async fn get_campaign(&self, campaign_id: u32) -> Result<CampaignWithId, ManagerError> {
        let campaign = self
            .contract
            .get_campaign(campaign_id)
            .await
            .ok_or(ManagerError::CampaignNotFound(campaign_id))?;
        Ok(CampaignWithId {
            id: campaign_id,
            campaign,
        })
    }

    /// Validate the form and submit a new campaign
    pub async fn create_campaign(
        &mut self,
        form: &CreateCampaignForm,
    ) -> Result<TxOutcome, ManagerError> {
        let draft = form.validate(&self.config.display)?;
        log::debug!(
            "Creating campaign '{}' lasting {} blocks",
            draft.title,
            draft.duration_blocks
        );

        Ok(self
            .contract
            .create_campaign(
                &self.connection,
                &draft.title,
                &draft.description,
                draft.goal,
                draft.duration_blocks,
            )
            .await?)
    }

    pub async fn contribute(
        &mut self,
        campaign_id: u32,
        form: &ContributeForm,
    ) -> Result<TxOutcome, ManagerError> {
        let amount = form.parse(self.config.display.token_decimals)?;
        Ok(self
            .contract
            .contribute(&self.connection, campaign_id, amount)
            .await?)
    }

    pub async fn withdraw_funds(&mut self, campaign_id: u32) -> Result<TxOutcome, ManagerError> {
        Ok(self
            .contract
            .withdraw_funds(&self.connection, campaign_id)
            .await?)
    }

    pub async fn request_refund(&mut self, campaign_id: u32) -> Result<TxOutcome, ManagerError> {
        Ok(self
            .contract
            .request_refund(&self.connection, campaign_id)
            .await?)
    }

    pub async fn deactivate_campaign(
        &mut self,
        campaign_id: u32,
    ) -> Result<TxOutcome, ManagerError> {
        Ok(self
            .contract
            .deactivate_campaign(&self.connection, campaign_id)
            .await?)
    }

    pub async fn get_contributors(
        &self,
        campaign_id: u32,
    ) -> Result<Vec<ContributionInfo>, ManagerError> {
        Ok(self.contract.get_contributors(campaign_id).await?)
    }
}

//! Crowdfunding contract client
//!
//! Thin wrappers around the generated contract proxy. Reads never fail: a
//! failed read is logged and reported as "nothing there". Writes carry the
//! fixed call budget and surface the client library's error text unchanged.

use alloy::contract::{CallBuilder, CallDecoder, SolCallBuilder};
use alloy::network::{Ethereum, Network};
use alloy::primitives::{Address, TxHash, U256};
use alloy::providers::{DynProvider, PendingTransactionBuilder, Provider};
use alloy::rpc::types::{Log, TransactionReceipt};
use alloy::sol_types::SolCall;
use async_trait::async_trait;

use crate::chain::{ChainConnection, ConnectionError, NodeClient};
use crate::config::ContractConfig;
use crate::contract::bindings::ICrowdFunding::{self, ICrowdFundingInstance};
use crate::types::{Campaign, ContractError, ContributionInfo, InjectedAccount};

/// Errors returned by contract calls
#[derive(Debug, thiserror::Error)]
pub enum ContractCallError {
    #[error("API or account not available")]
    NotReady,

    #[error("Contract not available: no contract address configured")]
    NotAvailable,

    #[error("Connection error: {0}")]
    Connection(#[from] ConnectionError),

    #[error("{operation} failed: {message}{}", known_suffix(.known))]
    Call {
        operation: &'static str,
        message: String,
        known: Option<ContractError>,
    },

    #[error("{operation} reverted in transaction {tx_hash}")]
    Reverted {
        operation: &'static str,
        tx_hash: TxHash,
    },
}

impl ContractCallError {
    /// Contract error recognised in the failure, if any
    pub fn contract_error(&self) -> Option<ContractError> {
        match self {
            ContractCallError::Call { known, .. } => *known,
            _ => None,
        }
    }
}

fn known_suffix(known: &Option<ContractError>) -> String {
    known.map(|k| format!(" ({})", k)).unwrap_or_default()
}

/// Wrap a client library failure, recognising known contract errors
pub fn call_error(operation: &'static str, error: impl std::fmt::Display) -> ContractCallError {
    let message = error.to_string();
    let known = ContractError::from_revert_text(&message);
    ContractCallError::Call {
        operation,
        message,
        known,
    }
}

/// Fixed resource budget attached to every mutating call
///
/// The budget is never estimated or adapted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallBudget {
    pub gas_limit: u64,
}

impl CallBudget {
    /// Set the sender and the fixed gas limit on a call
    ///
    /// With the gas limit present the provider's gas filler never runs an
    /// estimate.
    pub fn apply<P, D, N>(&self, call: CallBuilder<P, D, N>, from: Address) -> CallBuilder<P, D, N>
    where
        P: Provider<N>,
        D: CallDecoder,
        N: Network,
    {
        call.from(from).gas(self.gas_limit)
    }
}

impl From<&ContractConfig> for CallBudget {
    fn from(config: &ContractConfig) -> Self {
        Self {
            gas_limit: config.gas_limit,
        }
    }
}

/// Result of a confirmed transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxOutcome {
    pub tx_hash: TxHash,
    pub block_number: Option<u64>,

    /// Id of the campaign created by the transaction, if it created one
    pub campaign_id: Option<u32>,
}

impl TxOutcome {
    pub fn from_receipt(receipt: &TransactionReceipt) -> Self {
        Self {
            tx_hash: receipt.transaction_hash,
            block_number: receipt.block_number,
            campaign_id: created_campaign_id(receipt.inner.logs()),
        }
    }
}

/// Id from the first `CampaignCreated` event among `logs`
pub fn created_campaign_id(logs: &[Log]) -> Option<u32> {
    logs.iter().find_map(|log| {
        log.log_decode::<ICrowdFunding::CampaignCreated>()
            .ok()
            .map(|decoded| decoded.inner.data.campaignId)
    })
}

/// Read access to campaigns
#[async_trait]
pub trait CampaignReader: Send + Sync {
    /// Number of campaigns ever created (0 when unavailable)
    async fn get_campaign_count(&self) -> u32;

    /// Campaign at `campaign_id` (`None` when missing or unavailable)
    async fn get_campaign(&self, campaign_id: u32) -> Option<Campaign>;
}

/// Client for the crowdfunding contract
pub struct CrowdfundContract {
    node: Option<NodeClient>,
    address: Option<Address>,
    account: Option<InjectedAccount>,
    budget: CallBudget,
    is_loading: bool,
    error: Option<String>,
}

impl CrowdfundContract {
    /// Create a client for the configured contract
    ///
    /// `account` is used as the caller for queries and the sender for
    /// transactions.
    pub fn new(
        config: &ContractConfig,
        node: Option<NodeClient>,
        account: Option<InjectedAccount>,
    ) -> Self {
        Self {
            node,
            address: config.address,
            account,
            budget: CallBudget::from(config),
            is_loading: false,
            error: None,
        }
    }

    pub fn budget(&self) -> CallBudget {
        self.budget
    }

    /// A mutating call is in flight
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Message of the last failed mutating call
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    fn instance(&self) -> Option<ICrowdFundingInstance<DynProvider>> {
        let node = self.node.as_ref()?;
        let address = self.address?;
        Some(ICrowdFunding::new(address, node.provider().clone()))
    }

    fn caller(&self) -> Address {
        self.account
            .as_ref()
            .map(|account| account.address)
            .unwrap_or(Address::ZERO)
    }

    fn begin(&mut self) {
        self.is_loading = true;
        self.error = None;
    }

    fn finish<T>(&mut self, result: &Result<T, ContractCallError>) {
        self.is_loading = false;
        if let Err(e) = result {
            self.error = Some(e.to_string());
        }
    }

    /// Sign, send and confirm one contract call
    ///
    /// Missing node, account or contract address fail before the call
    /// starts. Everything after that, signer included, is recorded in
    /// `error()`.
    async fn transact<C>(
        &mut self,
        wallet: &ChainConnection,
        operation: &'static str,
        call: C,
        value: U256,
    ) -> Result<TxOutcome, ContractCallError>
    where
        C: SolCall + Send + Sync,
    {
        let (node, account) = match (&self.node, &self.account) {
            (Some(node), Some(account)) => (node.clone(), account.clone()),
            _ => return Err(ContractCallError::NotReady),
        };
        let address = self.address.ok_or(ContractCallError::NotAvailable)?;
        let budget = self.budget;

        self.begin();
        let result = async {
            let signer = wallet.signer(&account).await?;
            let provider = node.signing_provider(signer).await?;

            let pending = budget
                .apply(SolCallBuilder::new_sol(&provider, &address, &call), account.address)
                .value(value)
                .send()
                .await
                .map_err(|e| call_error(operation, e))?;
            confirm(operation, pending).await
        }
        .await;
        self.finish(&result);
        result
    }

    /// Create a new campaign lasting `duration_blocks` blocks
    pub async fn create_campaign(
        &mut self,
        wallet: &ChainConnection,
        title: &str,
        description: &str,
        goal: U256,
        duration_blocks: u32,
    ) -> Result<TxOutcome, ContractCallError> {
        let call = ICrowdFunding::createCampaignCall {
            title: title.to_string(),
            description: description.to_string(),
            goal,
            durationBlocks: duration_blocks,
        };
        let outcome = self
            .transact(wallet, "create campaign", call, U256::ZERO)
            .await?;

        log::info!(
            "Campaign created in {} (id {:?})",
            outcome.tx_hash,
            outcome.campaign_id
        );
        Ok(outcome)
    }

    /// Contribute `amount` base units to a campaign
    pub async fn contribute(
        &mut self,
        wallet: &ChainConnection,
        campaign_id: u32,
        amount: U256,
    ) -> Result<TxOutcome, ContractCallError> {
        let call = ICrowdFunding::contributeCall {
            campaignId: campaign_id,
        };
        let outcome = self.transact(wallet, "contribute", call, amount).await?;

        log::info!("Contributed {} to campaign {} in {}", amount, campaign_id, outcome.tx_hash);
        Ok(outcome)
    }

    /// Withdraw the raised funds (creator only, goal reached)
    pub async fn withdraw_funds(
        &mut self,
        wallet: &ChainConnection,
        campaign_id: u32,
    ) -> Result<TxOutcome, ContractCallError> {
        let call = ICrowdFunding::withdrawFundsCall {
            campaignId: campaign_id,
        };
        self.transact(wallet, "withdraw", call, U256::ZERO).await
    }

    /// Reclaim a contribution from a failed campaign
    pub async fn request_refund(
        &mut self,
        wallet: &ChainConnection,
        campaign_id: u32,
    ) -> Result<TxOutcome, ContractCallError> {
        let call = ICrowdFunding::requestRefundCall {
            campaignId: campaign_id,
        };
        self.transact(wallet, "refund", call, U256::ZERO).await
    }

    /// Stop a campaign from accepting contributions (creator only)
    pub async fn deactivate_campaign(
        &mut self,
        wallet: &ChainConnection,
        campaign_id: u32,
    ) -> Result<TxOutcome, ContractCallError> {
        let call = ICrowdFunding::deactivateCampaignCall {
            campaignId: campaign_id,
        };
        self.transact(wallet, "deactivate", call, U256::ZERO).await
    }

    /// Amount `contributor` has put into a campaign
    pub async fn get_contribution(
        &self,
        campaign_id: u32,
        contributor: Address,
    ) -> Result<U256, ContractCallError> {
        let contract = self.instance().ok_or(ContractCallError::NotAvailable)?;
        contract
            .getContribution(campaign_id, contributor)
            .from(self.caller())
            .call()
            .await
            .map_err(|e| call_error("get contribution", e))
    }

    /// Every contributor of a campaign with their current contribution
    pub async fn get_contributors(
        &self,
        campaign_id: u32,
    ) -> Result<Vec<ContributionInfo>, ContractCallError> {
        let contract = self.instance().ok_or(ContractCallError::NotAvailable)?;
        let contributors = contract
            .getContributors(campaign_id)
            .from(self.caller())
            .call()
            .await
            .map_err(|e| call_error("get contributors", e))?;

        let mut infos = Vec::with_capacity(contributors.len());
        for contributor in contributors {
            let amount = self.get_contribution(campaign_id, contributor).await?;
            infos.push(ContributionInfo {
                contributor,
                amount,
            });
        }
        Ok(infos)
    }

    pub async fn is_goal_reached(&self, campaign_id: u32) -> Result<bool, ContractCallError> {
        let contract = self.instance().ok_or(ContractCallError::NotAvailable)?;
        contract
            .isGoalReached(campaign_id)
            .from(self.caller())
            .call()
            .await
            .map_err(|e| call_error("is goal reached", e))
    }

    pub async fn has_campaign_ended(&self, campaign_id: u32) -> Result<bool, ContractCallError> {
        let contract = self.instance().ok_or(ContractCallError::NotAvailable)?;
        contract
            .hasCampaignEnded(campaign_id)
            .from(self.caller())
            .call()
            .await
            .map_err(|e| call_error("has campaign ended", e))
    }
}

#[async_trait]
impl CampaignReader for CrowdfundContract {
    async fn get_campaign_count(&self) -> u32 {
        let Some(contract) = self.instance() else {
            return 0;
        };

        match contract.getCampaignCount().from(self.caller()).call().await {
            Ok(count) => count,
            Err(e) => {
                log::error!("Failed to get campaign count: {}", e);
                0
            }
        }
    }

    async fn get_campaign(&self, campaign_id: u32) -> Option<Campaign> {
        let contract = self.instance()?;

        match contract.getCampaign(campaign_id).from(self.caller()).call().await {
            Ok(output) if output.found => Some(output.campaign.into()),
            Ok(_) => None,
            Err(e) => {
                log::error!("Failed to get campaign {}: {}", campaign_id, e);
                None
            }
        }
    }
}

/// Wait for the receipt and check the execution status
async fn confirm(
    operation: &'static str,
    pending: PendingTransactionBuilder<Ethereum>,
) -> Result<TxOutcome, ContractCallError> {
    log::debug!("{}: submitted {}", operation, pending.tx_hash());

    let receipt = pending
        .get_receipt()
        .await
        .map_err(|e| call_error(operation, e))?;

    if !receipt.status() {
        return Err(ContractCallError::Reverted {
            operation,
            tx_hash: receipt.transaction_hash,
        });
    }

    Ok(TxOutcome::from_receipt(&receipt))
}

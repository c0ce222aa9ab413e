//! Shared types for crowdfund-client
//!
//! Typed projections of the on-chain crowdfunding records, plus the
//! account shape handed out by wallet extensions.

use alloy::primitives::{Address, U256};
use serde::{Deserialize, Serialize};

/// Read projection of an on-chain campaign
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Campaign {
    /// Account that created the campaign
    pub creator: Address,

    /// Campaign title
    pub title: String,

    /// Campaign description
    pub description: String,

    /// Funding goal in base units of the native token
    pub goal: U256,

    /// Deadline as a block number
    pub deadline: u32,

    /// Total amount raised so far, in base units
    pub raised: U256,

    /// Whether the campaign accepts contributions
    pub active: bool,

    /// Whether the creator has withdrawn the funds
    pub withdrawn: bool,
}

impl Campaign {
    /// Goal is met once raised reaches it (a zero goal counts as met)
    pub fn is_goal_reached(&self) -> bool {
        self.raised >= self.goal
    }

    /// Expired once the current block reaches the deadline
    pub fn is_expired(&self, current_block: u64) -> bool {
        current_block >= u64::from(self.deadline)
    }
}

/// Campaign together with its index in the contract
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignWithId {
    pub id: u32,

    #[serde(flatten)]
    pub campaign: Campaign,
}

impl std::ops::Deref for CampaignWithId {
    type Target = Campaign;

    fn deref(&self) -> &Self::Target {
        &self.campaign
    }
}

/// A single contributor's total for a campaign
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionInfo {
    pub contributor: Address,
    pub amount: U256,
}

/// Account exposed by a wallet extension
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InjectedAccount {
    /// Account address
    pub address: Address,

    /// Human-readable account name
    pub name: String,

    /// Name of the extension that owns the account
    pub source: String,
}

/// Errors the crowdfunding contract can revert with
///
/// The client never enforces these rules itself. They are only recognised in
/// revert text so failures can be reported with a readable description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContractError {
    CampaignNotFound,
    CampaignEnded,
    CampaignInactive,
    GoalNotReached,
    OnlyCreator,
    InvalidDeadline,
    ZeroContribution,
    RefundNotAvailable,
    AlreadyWithdrawn,
    NoContribution,
    TransferFailed,
    GoalAlreadyReached,
}

impl ContractError {
    pub const ALL: [ContractError; 12] = [
        ContractError::CampaignNotFound,
        ContractError::CampaignEnded,
        ContractError::CampaignInactive,
        ContractError::GoalNotReached,
        ContractError::OnlyCreator,
        ContractError::InvalidDeadline,
        ContractError::ZeroContribution,
        ContractError::RefundNotAvailable,
        ContractError::AlreadyWithdrawn,
        ContractError::NoContribution,
        ContractError::TransferFailed,
        ContractError::GoalAlreadyReached,
    ];

    /// Variant name as it appears in revert data
    pub fn name(&self) -> &'static str {
        match self {
            ContractError::CampaignNotFound => "CampaignNotFound",
            ContractError::CampaignEnded => "CampaignEnded",
            ContractError::CampaignInactive => "CampaignInactive",
            ContractError::GoalNotReached => "GoalNotReached",
            ContractError::OnlyCreator => "OnlyCreator",
            ContractError::InvalidDeadline => "InvalidDeadline",
            ContractError::ZeroContribution => "ZeroContribution",
            ContractError::RefundNotAvailable => "RefundNotAvailable",
            ContractError::AlreadyWithdrawn => "AlreadyWithdrawn",
            ContractError::NoContribution => "NoContribution",
            ContractError::TransferFailed => "TransferFailed",
            ContractError::GoalAlreadyReached => "GoalAlreadyReached",
        }
    }

    /// Find a known contract error named in a revert message
    pub fn from_revert_text(text: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|error| text.contains(error.name()))
    }
}

impl std::fmt::Display for ContractError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let description = match self {
            ContractError::CampaignNotFound => "campaign does not exist",
            ContractError::CampaignEnded => "campaign has ended",
            ContractError::CampaignInactive => "campaign is not active",
            ContractError::GoalNotReached => "goal not reached",
            ContractError::OnlyCreator => "only the campaign creator can do this",
            ContractError::InvalidDeadline => "campaign deadline must be in the future",
            ContractError::ZeroContribution => "contribution must be greater than 0",
            ContractError::RefundNotAvailable => "refund not available",
            ContractError::AlreadyWithdrawn => "funds already withdrawn",
            ContractError::NoContribution => "no contribution found",
            ContractError::TransferFailed => "transfer failed",
            ContractError::GoalAlreadyReached => "goal already reached",
        };
        write!(f, "{}", description)
    }
}

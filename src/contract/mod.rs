//! Crowdfunding contract layer
//!
//! ABI bindings, the typed call wrapper and campaign list loading.

pub mod bindings;
pub mod client;
pub mod loader;

pub use bindings::ICrowdFunding;
pub use client::{
    call_error, created_campaign_id, CallBudget, CampaignReader, ContractCallError,
    CrowdfundContract, TxOutcome,
};
pub use loader::load_campaigns;

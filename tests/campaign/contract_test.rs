//! Contract client tests that never reach a node
//!
//! The HTTP provider used here is lazy: building it sends nothing, and every
//! path under test fails or finishes before a request would go out.

use std::sync::Arc;

use alloy::contract::SolCallBuilder;
use alloy::primitives::{Address, LogData, U256};
use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use alloy::rpc::types::Log;
use alloy::sol_types::SolEvent;
use crowdfund_client::chain::{ChainConnection, ConnectionError, NodeClient};
use crowdfund_client::config::GlobalConfig;
use crowdfund_client::contract::{
    call_error, created_campaign_id, CallBudget, CampaignReader, ContractCallError,
    CrowdfundContract, ICrowdFunding,
};
use crowdfund_client::types::{Campaign, ContractError, InjectedAccount};
use crowdfund_client::wallet::WalletError;

use crate::common::{init_test_logger, tokens, FakeExtension};

const UNUSED_URL: &str = "http://127.0.0.1:1";

fn offline_node() -> NodeClient {
    let provider: DynProvider = ProviderBuilder::new()
        .connect_http(UNUSED_URL.parse().unwrap())
        .erased();
    NodeClient::from_provider(provider, UNUSED_URL)
}

fn contract_address() -> Address {
    Address::repeat_byte(0x42)
}

fn contract(node: Option<NodeClient>, account: Option<InjectedAccount>) -> CrowdfundContract {
    let mut config = GlobalConfig::default();
    config.contract.address = Some(contract_address());
    CrowdfundContract::new(&config.contract, node, account)
}

fn stranger() -> InjectedAccount {
    InjectedAccount {
        address: Address::repeat_byte(0x99),
        name: "Stranger".to_string(),
        source: "elsewhere".to_string(),
    }
}

fn rpc_log(data: LogData) -> Log {
    Log {
        inner: alloy::primitives::Log {
            address: contract_address(),
            data,
        },
        ..Default::default()
    }
}

#[test]
fn test_created_campaign_id_from_event() {
    let created = ICrowdFunding::CampaignCreated {
        campaignId: 7,
        creator: Address::repeat_byte(0x11),
        title: "Solar Farm".to_string(),
        goal: tokens(100),
        deadline: 432_000,
    };
    let contributed = ICrowdFunding::ContributionMade {
        campaignId: 3,
        contributor: Address::repeat_byte(0x22),
        amount: tokens(1),
        totalRaised: tokens(1),
    };

    let logs = vec![
        rpc_log(contributed.encode_log_data()),
        rpc_log(created.encode_log_data()),
    ];
    assert_eq!(created_campaign_id(&logs), Some(7));
}

#[test]
fn test_no_campaign_id_without_created_event() {
    assert_eq!(created_campaign_id(&[]), None);

    let contributed = ICrowdFunding::ContributionMade {
        campaignId: 3,
        contributor: Address::repeat_byte(0x22),
        amount: tokens(1),
        totalRaised: tokens(1),
    };
    let logs = vec![rpc_log(contributed.encode_log_data())];
    assert_eq!(created_campaign_id(&logs), None);
}

#[test]
fn test_budget_sets_fixed_gas_and_sender() {
    let node = offline_node();
    let sender = Address::repeat_byte(0x77);
    let budget = CallBudget { gas_limit: 123_456 };
    let call = ICrowdFunding::contributeCall { campaignId: 3 };

    let request = budget
        .apply(
            SolCallBuilder::new_sol(node.provider(), &contract_address(), &call),
            sender,
        )
        .value(tokens(2))
        .into_transaction_request();

    assert_eq!(request.gas, Some(123_456));
    assert_eq!(request.from, Some(sender));
    assert_eq!(request.value, Some(tokens(2)));
}

#[test]
fn test_budget_follows_config() {
    let mut config = GlobalConfig::default();
    config.contract.gas_limit = 42;

    let client = CrowdfundContract::new(&config.contract, None, None);
    assert_eq!(client.budget(), CallBudget { gas_limit: 42 });
}

#[test]
fn test_call_error_names_known_contract_error() {
    let error = call_error("contribute", "execution reverted: CampaignEnded");

    assert_eq!(error.contract_error(), Some(ContractError::CampaignEnded));
    assert_eq!(
        error.to_string(),
        "contribute failed: execution reverted: CampaignEnded (campaign has ended)"
    );
}

#[test]
fn test_call_error_passes_unknown_text_through() {
    let error = call_error("withdraw", "out of gas");

    assert_eq!(error.contract_error(), None);
    assert_eq!(error.to_string(), "withdraw failed: out of gas");
    assert_eq!(ContractCallError::NotReady.contract_error(), None);
}

#[test]
fn test_revert_text_matched_by_variant_name() {
    assert_eq!(
        ContractError::from_revert_text("execution reverted: OnlyCreator"),
        Some(ContractError::OnlyCreator)
    );
    assert_eq!(ContractError::from_revert_text("out of gas"), None);
}

#[test]
fn test_zero_goal_counts_as_reached() {
    let campaign = Campaign {
        creator: Address::ZERO,
        title: String::new(),
        description: String::new(),
        goal: U256::ZERO,
        deadline: 10,
        raised: U256::ZERO,
        active: true,
        withdrawn: false,
    };

    assert!(campaign.is_goal_reached());
    assert!(!campaign.is_expired(9));
    assert!(campaign.is_expired(10));
}

#[tokio::test]
async fn test_reads_fall_back_without_node() {
    let client = contract(None, None);

    assert_eq!(client.get_campaign_count().await, 0);
    assert_eq!(client.get_campaign(0).await, None);
    assert!(matches!(
        client.get_contributors(0).await,
        Err(ContractCallError::NotAvailable)
    ));
    assert!(matches!(
        client.is_goal_reached(0).await,
        Err(ContractCallError::NotAvailable)
    ));
}

#[tokio::test]
async fn test_writes_rejected_without_account() {
    let mut client = contract(Some(offline_node()), None);
    let wallet = ChainConnection::new();

    let result = client.contribute(&wallet, 0, tokens(1)).await;

    assert!(matches!(result, Err(ContractCallError::NotReady)));
    assert_eq!(client.error(), None, "rejected before the call started");
    assert!(!client.is_loading());
}

#[tokio::test]
async fn test_writes_rejected_without_contract_address() {
    let config = GlobalConfig::default();
    let mut client =
        CrowdfundContract::new(&config.contract, Some(offline_node()), Some(stranger()));

    let result = client.withdraw_funds(&ChainConnection::new(), 0).await;

    assert!(matches!(result, Err(ContractCallError::NotAvailable)));
    assert_eq!(client.error(), None);
}

#[tokio::test]
async fn test_signer_failure_is_recorded() {
    init_test_logger();
    let mut wallet = ChainConnection::new();
    wallet
        .connect_wallet(Some(Arc::new(FakeExtension::with_accounts(1))), "app")
        .await
        .unwrap();
    let mut client = contract(Some(offline_node()), Some(stranger()));

    let result = client.contribute(&wallet, 0, tokens(1)).await;

    assert!(matches!(
        result,
        Err(ContractCallError::Connection(ConnectionError::Wallet(
            WalletError::UnknownAccount(_)
        )))
    ));
    let recorded = client.error().expect("failure should be recorded");
    assert!(recorded.contains("not managed by this extension"));
    assert!(!client.is_loading());
}

#[tokio::test]
async fn test_missing_wallet_is_recorded() {
    let mut client = contract(Some(offline_node()), Some(stranger()));

    let result = client.deactivate_campaign(&ChainConnection::new(), 1).await;

    assert!(matches!(
        result,
        Err(ContractCallError::Connection(ConnectionError::NotConnected(_)))
    ));
    assert_eq!(client.error(), Some("Connection error: Not connected: wallet"));
    assert!(!client.is_loading());
}

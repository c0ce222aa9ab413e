//! Manager tests without a node
//!
//! Everything here must fail or fall back before any request is sent.

use std::sync::Arc;

use alloy::primitives::Address;
use crowdfund_client::config::GlobalConfig;
use crowdfund_client::contract::ContractCallError;
use crowdfund_client::manager::{CrowdfundManager, ManagerError};
use crowdfund_client::view::{ContributeForm, CreateCampaignForm, FormError};

use crate::common::FakeExtension;

fn manager_with_contract() -> CrowdfundManager {
    let mut config = GlobalConfig::default();
    config.contract.address = Some(Address::repeat_byte(0x42));
    CrowdfundManager::new(config)
}

#[tokio::test]
async fn test_reads_fall_back_without_node() {
    let manager = manager_with_contract();

    assert!(manager.load_campaigns().await.is_empty());
    assert!(matches!(
        manager.get_campaign(0).await,
        Err(ManagerError::CampaignNotFound(0))
    ));
    assert!(matches!(
        manager.current_block().await,
        Err(ManagerError::NodeNotConnected)
    ));
    assert!(matches!(
        manager.block_watcher(0),
        Err(ManagerError::NodeNotConnected)
    ));
}

#[tokio::test]
async fn test_form_errors_come_before_submission() {
    let mut manager = manager_with_contract();

    let form = CreateCampaignForm::default();
    assert!(matches!(
        manager.create_campaign(&form).await,
        Err(ManagerError::Form(FormError::TitleRequired))
    ));

    assert!(matches!(
        manager.contribute(0, &ContributeForm::new("0")).await,
        Err(ManagerError::Form(FormError::AmountNotPositive))
    ));
}

#[tokio::test]
async fn test_writes_need_node_and_account() {
    let mut manager = manager_with_contract();
    manager
        .connect_wallet(Some(Arc::new(FakeExtension::with_accounts(1))))
        .await
        .expect("fake wallet should connect");

    let result = manager.contribute(0, &ContributeForm::new("1")).await;
    assert!(matches!(
        result,
        Err(ManagerError::Contract(ContractCallError::NotReady))
    ));
    assert_eq!(
        manager.contract().error(),
        None,
        "rejected before the call started"
    );

    let result = manager.withdraw_funds(0).await;
    assert_eq!(
        result.unwrap_err().to_string(),
        "API or account not available"
    );
}

#[tokio::test]
async fn test_wallet_selection_rebuilds_contract_account() {
    let mut manager = manager_with_contract();
    let extension = FakeExtension::with_accounts(3);
    let addresses = extension.addresses();

    manager.connect_wallet(Some(Arc::new(extension))).await.unwrap();
    assert_eq!(
        manager.connection().selected_account().map(|a| a.address),
        Some(addresses[0])
    );

    manager.select_account("2").unwrap();
    assert_eq!(
        manager.connection().selected_account().map(|a| a.address),
        Some(addresses[2])
    );

    assert!(matches!(
        manager.select_account("7"),
        Err(ManagerError::Connection(_))
    ));
}

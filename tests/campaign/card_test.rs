//! Campaign card tests

use crowdfund_client::config::GlobalConfig;
use crowdfund_client::view::{CampaignCard, CampaignStatus, ContributeForm, FormError};

use crate::common::{campaign, sample_campaigns, tokens, SAMPLE_BLOCK};

#[test]
fn test_status_precedence() {
    let campaigns = sample_campaigns();
    let statuses: Vec<CampaignStatus> = campaigns
        .iter()
        .map(|c| CampaignStatus::of(c, SAMPLE_BLOCK))
        .collect();

    assert_eq!(
        statuses,
        vec![
            CampaignStatus::Active,
            CampaignStatus::GoalReached,
            CampaignStatus::Expired,
            CampaignStatus::Inactive,
            CampaignStatus::GoalReached,
        ]
    );

    // Inactive and expired shows as expired
    let stale = campaign(9, "Stale", 10, 1, 500, false);
    assert_eq!(CampaignStatus::of(&stale, SAMPLE_BLOCK), CampaignStatus::Expired);
}

#[test]
fn test_can_contribute_and_footer() {
    let campaigns = sample_campaigns();
    let footers: Vec<Option<&str>> = campaigns
        .iter()
        .map(|c| CampaignCard::new(c, SAMPLE_BLOCK, true).footer())
        .collect();

    assert_eq!(
        footers,
        vec![
            None,
            Some("Goal reached!"),
            Some("Campaign expired"),
            Some("Campaign inactive"),
            Some("Goal reached!"),
        ]
    );

    assert!(CampaignCard::new(&campaigns[0], SAMPLE_BLOCK, true).can_contribute());
    assert!(!CampaignCard::new(&campaigns[0], SAMPLE_BLOCK, false).can_contribute());
}

#[test]
fn test_no_footer_without_account() {
    for c in sample_campaigns() {
        assert_eq!(CampaignCard::new(&c, SAMPLE_BLOCK, false).footer(), None);
    }
}

#[test]
fn test_render() {
    let display = GlobalConfig::default().display;
    let campaigns = sample_campaigns();

    let output = CampaignCard::new(&campaigns[0], SAMPLE_BLOCK, true).render(&display);

    assert!(output.starts_with("#0 Solar Farm [Active]"));
    assert!(output.contains("by 0x1111...111111"));
    assert!(output.contains("40 / 100 tokens"));
    assert!(output.contains("40.0%"));
    assert!(output.contains("Deadline: block 2000 (1h remaining)"));

    let output = CampaignCard::new(&campaigns[1], SAMPLE_BLOCK, true).render(&display);
    assert!(output.contains("[Goal Reached]"));
    assert!(output.contains("100.0%"));
    assert!(output.contains("(Expired)"));
    assert!(output.ends_with("Goal reached!"));
}

#[test]
fn test_contribute_form() {
    assert_eq!(ContributeForm::new("2.25").parse(18), Ok(tokens(9) / alloy::primitives::U256::from(4)));
    assert_eq!(ContributeForm::new("0").parse(18), Err(FormError::AmountNotPositive));
    assert_eq!(ContributeForm::new("0.000").parse(18), Err(FormError::AmountNotPositive));
    assert!(matches!(ContributeForm::new("").parse(18), Err(FormError::Amount(_))));
    assert!(matches!(ContributeForm::new("-3").parse(18), Err(FormError::Amount(_))));
}

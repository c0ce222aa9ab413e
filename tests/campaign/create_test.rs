//! Creation form tests

use alloy::primitives::U256;
use crowdfund_client::config::GlobalConfig;
use crowdfund_client::view::create::DEFAULT_DURATION_DAYS;
use crowdfund_client::view::{duration_blocks, CreateCampaignForm, FormError};

use crate::common::tokens;

fn form(title: &str, description: &str, goal: &str, days: u32) -> CreateCampaignForm {
    CreateCampaignForm {
        title: title.to_string(),
        description: description.to_string(),
        goal: goal.to_string(),
        duration_days: days,
    }
}

#[test]
fn test_valid_form_converts_units() {
    let display = GlobalConfig::default().display;

    let draft = form("  Solar Farm ", "Panels for the school", "100.5", 30)
        .validate(&display)
        .expect("form should be valid");

    assert_eq!(draft.title, "Solar Farm");
    assert_eq!(draft.goal, tokens(201) / U256::from(2));
    assert_eq!(draft.duration_blocks, 432_000);
}

#[test]
fn test_duration_follows_block_time() {
    let mut display = GlobalConfig::default().display;
    display.block_time_secs = 12;

    let draft = form("t", "d", "1", 1).validate(&display).unwrap();
    assert_eq!(draft.duration_blocks, 7_200);
}

#[test]
fn test_required_fields() {
    let display = GlobalConfig::default().display;

    assert_eq!(
        form("", "d", "1", 30).validate(&display),
        Err(FormError::TitleRequired)
    );
    assert_eq!(
        form("t", "   ", "1", 30).validate(&display),
        Err(FormError::DescriptionRequired)
    );
    assert!(matches!(
        form("t", "d", "", 30).validate(&display),
        Err(FormError::Amount(_))
    ));
}

#[test]
fn test_goal_must_be_positive() {
    let display = GlobalConfig::default().display;

    assert_eq!(
        form("t", "d", "0", 30).validate(&display),
        Err(FormError::GoalNotPositive)
    );
    assert!(matches!(
        form("t", "d", "ten", 30).validate(&display),
        Err(FormError::Amount(_))
    ));
}

#[test]
fn test_duration_bounds() {
    let display = GlobalConfig::default().display;

    assert_eq!(
        form("t", "d", "1", 0).validate(&display),
        Err(FormError::InvalidDuration(0))
    );
    assert_eq!(
        form("t", "d", "1", 366).validate(&display),
        Err(FormError::InvalidDuration(366))
    );
    assert!(form("t", "d", "1", 1).validate(&display).is_ok());
    assert!(form("t", "d", "1", 365).validate(&display).is_ok());
}

#[test]
fn test_duration_blocks_per_day() {
    assert_eq!(duration_blocks(1, 6), Some(14_400));
    assert_eq!(duration_blocks(30, 6), Some(432_000));
    assert_eq!(duration_blocks(1, 7), Some(12_342));
    assert_eq!(duration_blocks(1, 0), None);
}

#[test]
fn test_default_form_uses_thirty_days() {
    assert_eq!(CreateCampaignForm::default().duration_days, 30);
    assert_eq!(DEFAULT_DURATION_DAYS, 30);
}

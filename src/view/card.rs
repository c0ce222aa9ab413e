//! Campaign card
//!
//! Derives the badge, progress and contribution eligibility of a single
//! campaign at a given block and renders it as a text block.

use alloy::primitives::U256;
use std::fmt;

use crate::config::DisplayConfig;
use crate::types::CampaignWithId;
use crate::view::create::FormError;
use crate::view::format::{
    calculate_progress, format_time_remaining, format_token_amount, parse_token_amount,
    progress_bar, short_address,
};

const PROGRESS_BAR_WIDTH: usize = 30;

/// Badge shown on a campaign card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CampaignStatus {
    GoalReached,
    Expired,
    Active,
    Inactive,
}

impl CampaignStatus {
    /// Badge for a campaign at `current_block`
    ///
    /// A reached goal wins over expiry, expiry wins over the active flag.
    pub fn of(campaign: &CampaignWithId, current_block: u64) -> Self {
        if campaign.is_goal_reached() {
            CampaignStatus::GoalReached
        } else if campaign.is_expired(current_block) {
            CampaignStatus::Expired
        } else if campaign.active {
            CampaignStatus::Active
        } else {
            CampaignStatus::Inactive
        }
    }
}

impl fmt::Display for CampaignStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CampaignStatus::GoalReached => "Goal Reached",
            CampaignStatus::Expired => "Expired",
            CampaignStatus::Active => "Active",
            CampaignStatus::Inactive => "Inactive",
        };
        write!(f, "{}", label)
    }
}

/// A campaign as seen by one viewer at one block
pub struct CampaignCard<'a> {
    campaign: &'a CampaignWithId,
    current_block: u64,
    has_account: bool,
}

impl<'a> CampaignCard<'a> {
    pub fn new(campaign: &'a CampaignWithId, current_block: u64, has_account: bool) -> Self {
        Self {
            campaign,
            current_block,
            has_account,
        }
    }

    pub fn status(&self) -> CampaignStatus {
        CampaignStatus::of(self.campaign, self.current_block)
    }

    pub fn progress(&self) -> f64 {
        calculate_progress(self.campaign.raised, self.campaign.goal)
    }

    pub fn is_expired(&self) -> bool {
        self.campaign.is_expired(self.current_block)
    }

    pub fn goal_reached(&self) -> bool {
        self.campaign.is_goal_reached()
    }

    /// Contributions are open and someone is there to make one
    pub fn can_contribute(&self) -> bool {
        self.campaign.active && !self.is_expired() && !self.goal_reached() && self.has_account
    }

    /// Why contributions are closed, shown only to a connected viewer
    pub fn footer(&self) -> Option<&'static str> {
        if !self.has_account || self.can_contribute() {
            return None;
        }

        Some(if self.goal_reached() {
            "Goal reached!"
        } else if self.is_expired() {
            "Campaign expired"
        } else {
            "Campaign inactive"
        })
    }

    /// Multi-line text rendering of the card
    pub fn render(&self, display: &DisplayConfig) -> String {
        let campaign = self.campaign;
        let amount = |value: U256| {
            format_token_amount(value, display.token_decimals, display.display_decimals)
        };
        let progress = self.progress();

        let mut lines = vec![
            format!("#{} {} [{}]", campaign.id, campaign.title, self.status()),
            format!("  by {}", short_address(&campaign.creator)),
            format!("  {}", campaign.description),
            format!(
                "  {} / {} {}",
                amount(campaign.raised),
                amount(campaign.goal),
                display.token_symbol
            ),
            format!(
                "  {} {:.1}%",
                progress_bar(progress, PROGRESS_BAR_WIDTH),
                progress
            ),
            format!(
                "  Deadline: block {} ({})",
                campaign.deadline,
                format_time_remaining(self.current_block, campaign.deadline, display.block_time_secs)
            ),
        ];

        if campaign.withdrawn {
            lines.push("  Funds withdrawn".to_string());
        }
        if let Some(footer) = self.footer() {
            lines.push(format!("  {}", footer));
        }

        lines.join("\n")
    }
}

/// Contribution amount input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContributeForm {
    pub amount: String,
}

impl ContributeForm {
    pub fn new(amount: impl Into<String>) -> Self {
        Self {
            amount: amount.into(),
        }
    }

    /// Amount in base units; empty and zero amounts are rejected
    pub fn parse(&self, token_decimals: u8) -> Result<U256, FormError> {
        let amount = parse_token_amount(&self.amount, token_decimals)?;
        if amount.is_zero() {
            return Err(FormError::AmountNotPositive);
        }
        Ok(amount)
    }
}

//! Campaign list: search, status filter, aggregate stats and rendering

use alloy::primitives::U256;
use std::fmt;
use std::str::FromStr;

use crate::config::DisplayConfig;
use crate::types::CampaignWithId;
use crate::view::card::CampaignCard;
use crate::view::format::format_token_amount;

/// Status filter applied on top of the search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Completed,
    Expired,
}

impl StatusFilter {
    /// Whether `campaign` belongs in this filter at `current_block`
    ///
    /// Completed and expired never overlap: a reached goal counts as
    /// completed even past the deadline.
    pub fn matches(&self, campaign: &CampaignWithId, current_block: u64) -> bool {
        let expired = campaign.is_expired(current_block);
        let reached = campaign.is_goal_reached();

        match self {
            StatusFilter::All => true,
            StatusFilter::Active => campaign.active && !expired && !reached,
            StatusFilter::Completed => reached,
            StatusFilter::Expired => expired && !reached,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(StatusFilter::All),
            "active" => Ok(StatusFilter::Active),
            "completed" => Ok(StatusFilter::Completed),
            "expired" => Ok(StatusFilter::Expired),
            other => Err(format!(
                "Invalid status '{}'. Use: all, active, completed, or expired",
                other
            )),
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StatusFilter::All => "all",
            StatusFilter::Active => "active",
            StatusFilter::Completed => "completed",
            StatusFilter::Expired => "expired",
        };
        write!(f, "{}", name)
    }
}

/// Case-insensitive substring match on title or description
pub fn matches_search(campaign: &CampaignWithId, search: &str) -> bool {
    let needle = search.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    campaign.title.to_lowercase().contains(&needle)
        || campaign.description.to_lowercase().contains(&needle)
}

/// Campaigns matching both the search and the status filter, in order
pub fn filter_campaigns<'a>(
    campaigns: &'a [CampaignWithId],
    search: &str,
    filter: StatusFilter,
    current_block: u64,
) -> Vec<&'a CampaignWithId> {
    campaigns
        .iter()
        .filter(|campaign| matches_search(campaign, search))
        .filter(|campaign| filter.matches(campaign, current_block))
        .collect()
}

/// Aggregate figures over the unfiltered list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CampaignStats {
    pub total: usize,
    pub active: usize,
    pub successful: usize,
    pub total_raised: U256,
}

impl CampaignStats {
    /// `active` here only looks at the flag and the deadline
    pub fn compute(campaigns: &[CampaignWithId], current_block: u64) -> Self {
        campaigns.iter().fold(Self::default(), |mut stats, campaign| {
            stats.total += 1;
            if campaign.active && current_block < u64::from(campaign.deadline) {
                stats.active += 1;
            }
            if campaign.is_goal_reached() {
                stats.successful += 1;
            }
            stats.total_raised = stats.total_raised.saturating_add(campaign.raised);
            stats
        })
    }
}

/// Heading and hint shown when nothing matches
pub fn empty_state(search: &str, filter: StatusFilter) -> (&'static str, &'static str) {
    let hint = if !search.trim().is_empty() || filter != StatusFilter::All {
        "Try adjusting your search or filter criteria"
    } else {
        "Be the first to create a campaign!"
    };
    ("No campaigns found", hint)
}

/// Campaign list view state
#[derive(Debug, Clone, Default)]
pub struct CampaignList {
    pub search: String,
    pub filter: StatusFilter,
}

impl CampaignList {
    pub fn new(search: impl Into<String>, filter: StatusFilter) -> Self {
        Self {
            search: search.into(),
            filter,
        }
    }

    pub fn visible<'a>(
        &self,
        campaigns: &'a [CampaignWithId],
        current_block: u64,
    ) -> Vec<&'a CampaignWithId> {
        filter_campaigns(campaigns, &self.search, self.filter, current_block)
    }

    /// Stats header, then one card per visible campaign or the empty state
    pub fn render(
        &self,
        campaigns: &[CampaignWithId],
        current_block: u64,
        has_account: bool,
        display: &DisplayConfig,
    ) -> String {
        let stats = CampaignStats::compute(campaigns, current_block);
        let mut sections = vec![format!(
            "Total: {}  Active: {}  Successful: {}  Raised: {} {}\nCurrent block: {}",
            stats.total,
            stats.active,
            stats.successful,
            format_token_amount(
                stats.total_raised,
                display.token_decimals,
                display.display_decimals
            ),
            display.token_symbol,
            current_block
        )];

        let visible = self.visible(campaigns, current_block);
        if visible.is_empty() {
            let (heading, hint) = empty_state(&self.search, self.filter);
            sections.push(format!("{}\n{}", heading, hint));
        } else {
            sections.extend(
                visible
                    .into_iter()
                    .map(|campaign| CampaignCard::new(campaign, current_block, has_account).render(display)),
            );
        }

        sections.join("\n\n")
    }
}

//! Campaign creation form

use alloy::primitives::U256;

use crate::config::DisplayConfig;
use crate::view::format::{parse_token_amount, AmountError};

/// Campaign duration used when none is given
pub const DEFAULT_DURATION_DAYS: u32 = 30;

/// Longest campaign the form accepts
pub const MAX_DURATION_DAYS: u32 = 365;

const SECONDS_PER_DAY: u64 = 86_400;

/// Form validation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Title is required")]
    TitleRequired,

    #[error("Description is required")]
    DescriptionRequired,

    #[error("Goal must be greater than 0")]
    GoalNotPositive,

    #[error("Amount must be greater than 0")]
    AmountNotPositive,

    #[error("Duration must be between 1 and 365 days (got {0})")]
    InvalidDuration(u32),

    #[error("Duration of {0} days does not fit in a block count")]
    DurationTooLong(u32),

    #[error(transparent)]
    Amount(#[from] AmountError),
}

/// Raw user input for a new campaign
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateCampaignForm {
    pub title: String,
    pub description: String,

    /// Goal as entered, in whole tokens (e.g. `"100.5"`)
    pub goal: String,

    pub duration_days: u32,
}

impl Default for CreateCampaignForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            goal: String::new(),
            duration_days: DEFAULT_DURATION_DAYS,
        }
    }
}

/// Validated form, ready to submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CampaignDraft {
    pub title: String,
    pub description: String,

    /// Goal in base units
    pub goal: U256,

    pub duration_blocks: u32,
}

impl CreateCampaignForm {
    /// Validate every field and convert goal and duration to chain units
    pub fn validate(&self, display: &DisplayConfig) -> Result<CampaignDraft, FormError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(FormError::TitleRequired);
        }

        let description = self.description.trim();
        if description.is_empty() {
            return Err(FormError::DescriptionRequired);
        }

        let goal = parse_token_amount(&self.goal, display.token_decimals)?;
        if goal.is_zero() {
            return Err(FormError::GoalNotPositive);
        }

        if !(1..=MAX_DURATION_DAYS).contains(&self.duration_days) {
            return Err(FormError::InvalidDuration(self.duration_days));
        }
        let duration_blocks = duration_blocks(self.duration_days, display.block_time_secs)
            .ok_or(FormError::DurationTooLong(self.duration_days))?;

        Ok(CampaignDraft {
            title: title.to_string(),
            description: description.to_string(),
            goal,
            duration_blocks,
        })
    }
}

/// Convert whole days to a block count at the assumed block time
///
/// Rounds down. Returns `None` for a zero block time or when the count
/// overflows `u32`.
pub fn duration_blocks(days: u32, block_time_secs: u64) -> Option<u32> {
    if block_time_secs == 0 {
        return None;
    }
    let blocks = u64::from(days) * SECONDS_PER_DAY / block_time_secs;
    u32::try_from(blocks).ok()
}

//! Text views
//!
//! Pure functions over campaign data and connection state. Nothing in here
//! talks to the node.

pub mod card;
pub mod create;
pub mod format;
pub mod list;
pub mod wallet;

pub use card::{CampaignCard, CampaignStatus, ContributeForm};
pub use create::{duration_blocks, CampaignDraft, CreateCampaignForm, FormError};
pub use format::{
    calculate_progress, format_address, format_time_remaining, format_token_amount,
    parse_token_amount, short_address, AmountError,
};
pub use list::{filter_campaigns, CampaignList, CampaignStats, StatusFilter};
pub use wallet::render_wallet;

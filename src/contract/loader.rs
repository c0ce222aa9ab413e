//! Campaign list loading

use crate::contract::client::CampaignReader;
use crate::types::CampaignWithId;

/// Fetch every campaign the contract knows about
///
/// Reads the count, then each index in turn. Indices that cannot be read
/// are skipped; the surviving campaigns keep their index as id.
pub async fn load_campaigns<R>(reader: &R) -> Vec<CampaignWithId>
where
    R: CampaignReader + ?Sized,
{
    let count = reader.get_campaign_count().await;
    log::debug!("Loading {} campaign(s)", count);

    let mut campaigns = Vec::with_capacity(count as usize);
    for id in 0..count {
        match reader.get_campaign(id).await {
            Some(campaign) => campaigns.push(CampaignWithId { id, campaign }),
            None => log::debug!("Campaign {} unavailable, skipping", id),
        }
    }

    campaigns
}

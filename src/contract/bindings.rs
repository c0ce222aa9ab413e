//! Solidity-ABI bindings for the crowdfunding contract
//!
//! The contract is built with the Solidity ABI, so its messages are exposed
//! as camelCase functions. `Option<Campaign>` is encoded as `(found, campaign)`.

use alloy::sol;

use crate::types::Campaign;

sol! {
    #[sol(rpc)]
    interface ICrowdFunding {
        struct CampaignData {
            address creator;
            string title;
            string description;
            uint256 goal;
            uint32 deadline;
            uint256 raised;
            bool active;
            bool withdrawn;
        }

        event CampaignCreated(
            uint32 indexed campaignId,
            address indexed creator,
            string title,
            uint256 goal,
            uint32 deadline
        );

        event ContributionMade(
            uint32 indexed campaignId,
            address indexed contributor,
            uint256 amount,
            uint256 totalRaised
        );

        function createCampaign(
            string title,
            string description,
            uint256 goal,
            uint32 durationBlocks
        ) external returns (uint32);

        function contribute(uint32 campaignId) external payable;

        function withdrawFunds(uint32 campaignId) external;

        function requestRefund(uint32 campaignId) external;

        function deactivateCampaign(uint32 campaignId) external;

        function getCampaign(uint32 campaignId)
            external
            view
            returns (bool found, CampaignData campaign);

        function getContribution(uint32 campaignId, address contributor)
            external
            view
            returns (uint256);

        function getContributors(uint32 campaignId) external view returns (address[]);

        function getCampaignCount() external view returns (uint32);

        function isGoalReached(uint32 campaignId) external view returns (bool);

        function hasCampaignEnded(uint32 campaignId) external view returns (bool);
    }
}

impl From<ICrowdFunding::CampaignData> for Campaign {
    fn from(data: ICrowdFunding::CampaignData) -> Self {
        Self {
            creator: data.creator,
            title: data.title,
            description: data.description,
            goal: data.goal,
            deadline: data.deadline,
            raised: data.raised,
            active: data.active,
            withdrawn: data.withdrawn,
        }
    }
}

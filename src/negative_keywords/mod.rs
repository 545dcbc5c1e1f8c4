//! Negative keywords applied to every ad group of a campaign.
//!
//! Served by the same generic [`Accessor`](crate::resource::Accessor) as ad groups,
//! under `/campaigns/{campaignId}/negativekeywords`.
//!
//! # Example
//!
//! ```no_run
//! use searchads_client_sdk::Client;
//! use searchads_client_sdk::negative_keywords::types::{KeywordMatchType, NegativeKeyword};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::default();
//!
//! let keyword = NegativeKeyword::builder()
//!     .text("free")
//!     .match_type(KeywordMatchType::Broad)
//!     .build();
//! let created = client.campaign_negative_keywords().create(56543219, &keyword).await?;
//! println!("created {:?}", created.data.id);
//! # Ok(())
//! # }
//! ```

pub mod types;

use crate::resource::Resource;

/// Marker selecting the campaign negative keyword endpoints for an
/// [`Accessor`](crate::resource::Accessor).
#[derive(Debug, Clone, Copy)]
pub struct CampaignNegativeKeywords;

impl Resource for CampaignNegativeKeywords {
    const PARENT: &'static str = "campaigns";
    const PARENT_ID: &'static str = "campaign_id";
    const SEGMENT: &'static str = "negativekeywords";

    type Record = types::NegativeKeyword;
}

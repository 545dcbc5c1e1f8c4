//! Ad groups, scoped to a campaign.
//!
//! ## Available Endpoints
//!
//! | Endpoint | Method | Accessor call |
//! |----------|--------|---------------|
//! | `/campaigns/{campaignId}/adgroups` | GET | [`list`](crate::resource::Accessor::list) |
//! | `/campaigns/{campaignId}/adgroups/{adgroupId}` | GET | [`get`](crate::resource::Accessor::get) |
//! | `/campaigns/{campaignId}/adgroups` | POST | [`create`](crate::resource::Accessor::create) |
//! | `/campaigns/{campaignId}/adgroups/{adgroupId}` | PUT | [`edit`](crate::resource::Accessor::edit) |
//! | `/campaigns/{campaignId}/adgroups/{adgroupId}` | DELETE | [`delete`](crate::resource::Accessor::delete) |
//! | `/campaigns/{campaignId}/adgroups/find` | POST | [`find`](crate::resource::Accessor::find) |
//!
//! # Example
//!
//! ```no_run
//! use searchads_client_sdk::Client;
//! use searchads_client_sdk::ad_groups::types::AdGroup;
//! use searchads_client_sdk::status::Status;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::default();
//!
//! let payload = AdGroup::builder().status(Status::Paused).build();
//! let updated = client.ad_groups().edit(56543219, 542370642, &payload).await?;
//! println!("{:?}", updated.data.display_status);
//! # Ok(())
//! # }
//! ```

pub mod types;

use crate::resource::Resource;

/// Marker selecting the ad group endpoints for an [`Accessor`](crate::resource::Accessor).
#[derive(Debug, Clone, Copy)]
pub struct AdGroups;

impl Resource for AdGroups {
    const PARENT: &'static str = "campaigns";
    const PARENT_ID: &'static str = "campaign_id";
    const SEGMENT: &'static str = "adgroups";

    type Record = types::AdGroup;
}

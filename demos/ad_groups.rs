//! Ad group example: lists every ad group of a campaign, then pauses the first enabled one.
//!
//! Run with tracing enabled:
//! ```sh
//! SEARCHADS_ACCESS_TOKEN=... SEARCHADS_ORG_ID=40669820 CAMPAIGN_ID=56543219 \
//! RUST_LOG=info,hyper_util=off,hyper=off,reqwest=off,h2=off,rustls=off cargo run --example ad_groups --features tracing
//! ```
//!
//! Optionally log to a file:
//! ```sh
//! LOG_FILE=ad_groups.log RUST_LOG=info cargo run --example ad_groups --features tracing
//! ```

use std::fs::File;

use futures::StreamExt as _;
use searchads_client_sdk::ad_groups::types::AdGroup;
use searchads_client_sdk::status::Status;
use searchads_client_sdk::{ACCESS_TOKEN_VAR, Client, Config, ORG_ID_VAR};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Ok(path) = std::env::var("LOG_FILE") {
        let file = File::create(path)?;
        tracing_subscriber::registry()
            .with(EnvFilter::from_default_env())
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(file)
                    .with_ansi(false),
            )
            .init();
    } else {
        tracing_subscriber::fmt::init();
    }

    let config = Config::builder()
        .maybe_org_id(std::env::var(ORG_ID_VAR).ok().and_then(|id| id.parse().ok()))
        .maybe_access_token(std::env::var(ACCESS_TOKEN_VAR).ok())
        .build();
    let client = Client::new(searchads_client_sdk::client::DEFAULT_HOST, config)?;
    let campaign_id: u64 = std::env::var("CAMPAIGN_ID")?.parse()?;

    let ad_groups = client.ad_groups();
    let mut stream = Box::pin(ad_groups.stream(campaign_id, 100));
    let mut first_enabled = None;

    while let Some(result) = stream.next().await {
        match result {
            Ok(ad_group) => {
                info!(
                    endpoint = "list",
                    id = ?ad_group.id,
                    name = ?ad_group.name,
                    status = ?ad_group.status,
                    display_status = ?ad_group.display_status
                );
                if first_enabled.is_none() && ad_group.status == Some(Status::Enabled) {
                    first_enabled = ad_group.id;
                }
            }
            Err(e) => {
                debug!(endpoint = "list", error = %e);
                break;
            }
        }
    }

    if let Some(id) = first_enabled {
        let payload = AdGroup::builder().status(Status::Paused).build();
        match ad_groups.edit(campaign_id, id, &payload).await {
            Ok(response) => info!(
                endpoint = "edit",
                id,
                status = ?response.data.status,
                serving_state_reasons = ?response.data.serving_state_reasons
            ),
            Err(e) => debug!(endpoint = "edit", error = %e),
        }
    }

    Ok(())
}

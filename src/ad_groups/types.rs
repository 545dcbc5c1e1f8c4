use bon::Builder;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_with::{DefaultOnNull, serde_as, skip_serializing_none};

use crate::status::{DisplayStatus, PricingModel, ServingStatus, Status};
use crate::types::{Amount, NaiveDateTime};

/// An ad group within a campaign.
///
/// Every field is optional so that the same type serves as a read model and as a
/// create/edit payload. Unset fields are left out of the request body, except
/// `cpaGoal` and `endTime`, which are always sent (as `null` when unset) so that
/// an edit can clear them.
///
/// # Example
///
/// ```
/// use searchads_client_sdk::ad_groups::types::AdGroup;
/// use searchads_client_sdk::status::Status;
/// use searchads_client_sdk::types::{Amount, dec};
///
/// let ad_group = AdGroup::builder()
///     .name("Brand terms")
///     .status(Status::Enabled)
///     .default_bid_amount(Amount::builder().amount(dec!(1.50)).currency("USD").build())
///     .build();
/// assert_eq!(ad_group.id, None);
/// ```
#[skip_serializing_none]
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
pub struct AdGroup {
    pub id: Option<u64>,
    pub campaign_id: Option<u64>,
    #[builder(into)]
    pub name: Option<String>,
    /// Target cost per acquisition.
    #[serialize_always]
    pub cpa_goal: Option<Amount>,
    pub start_time: Option<NaiveDateTime>,
    /// `None` means the ad group runs indefinitely.
    #[serialize_always]
    pub end_time: Option<NaiveDateTime>,
    #[builder(default)]
    #[serde(default)]
    pub automated_keywords_opt_in: bool,
    pub default_bid_amount: Option<Amount>,
    pub targeting_dimensions: Option<TargetingDimensions>,
    pub org_id: Option<u64>,
    pub modification_time: Option<NaiveDateTime>,
    pub status: Option<Status>,
    pub serving_status: Option<ServingStatus>,
    pub display_status: Option<DisplayStatus>,
    /// Server-side reasons why the ad group is not serving, e.g. `["AD_GROUP_PAUSED_BY_USER"]`.
    /// Kept as raw JSON since the shape is not fixed.
    pub serving_state_reasons: Option<Value>,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub deleted: bool,
    pub pricing_model: Option<PricingModel>,
}

/// Audience restrictions for an ad group.
///
/// Each dimension is independent; `None` means no restriction on that dimension.
/// All dimensions are always sent, `null` when unset.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
pub struct TargetingDimensions {
    pub age: Option<Criteria<AgeRange>>,
    /// `M` or `F`.
    pub gender: Option<Criteria>,
    /// ISO 3166-1 alpha-2 country codes.
    pub country: Option<Criteria>,
    /// Regions, e.g. `US|CA`.
    pub admin_area: Option<Criteria>,
    /// Cities, e.g. `US|CA|Cupertino`.
    pub locality: Option<Criteria>,
    /// `IPHONE` or `IPAD`.
    pub device_class: Option<Criteria>,
    pub daypart: Option<Daypart>,
    pub app_downloaders: Option<AppDownloaders>,
}

/// An inclusion list for one targeting dimension. Build it from a `Vec`.
#[serde_as]
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Criteria<T = String> {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub included: Vec<T>,
}

impl<T> From<Vec<T>> for Criteria<T> {
    fn from(included: Vec<T>) -> Self {
        Self { included }
    }
}

/// Inclusive age bounds; either end may be open.
#[skip_serializing_none]
#[non_exhaustive]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
pub struct AgeRange {
    pub min_age: Option<u8>,
    pub max_age: Option<u8>,
}

/// Hours of the week, in the user's local time, during which ads may show.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
pub struct Daypart {
    /// Hour indices from 0 (Sunday 00:00) to 167 (Saturday 23:00).
    #[builder(default)]
    #[serde(default)]
    pub user_time: Criteria<u8>,
}

/// Apps whose downloaders are included in or excluded from the audience.
#[serde_as]
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
pub struct AppDownloaders {
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub included: Vec<String>,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub excluded: Vec<String>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::types::dec;

    #[test]
    fn payload_should_omit_unset_fields() {
        let ad_group = AdGroup::builder()
            .name("Brand")
            .status(Status::Paused)
            .default_bid_amount(Amount::builder().amount(dec!(1.00)).currency("USD").build())
            .build();

        assert_eq!(
            serde_json::to_value(&ad_group).expect("serialize"),
            json!({
                "name": "Brand",
                "cpaGoal": null,
                "endTime": null,
                "automatedKeywordsOptIn": false,
                "defaultBidAmount": {"amount": "1.00", "currency": "USD"},
                "status": "PAUSED"
            })
        );
    }

    #[test]
    fn targeting_should_send_every_dimension() {
        let targeting = TargetingDimensions::builder()
            .age(vec![AgeRange::builder().min_age(18).max_age(34).build()].into())
            .country(vec!["US".to_owned(), "CA".to_owned()].into())
            .daypart(Daypart::builder().user_time(vec![0, 1, 2].into()).build())
            .app_downloaders(
                AppDownloaders::builder()
                    .excluded(vec!["284882215".to_owned()])
                    .build(),
            )
            .build();

        assert_eq!(
            serde_json::to_value(&targeting).expect("serialize"),
            json!({
                "age": {"included": [{"minAge": 18, "maxAge": 34}]},
                "gender": null,
                "country": {"included": ["US", "CA"]},
                "adminArea": null,
                "locality": null,
                "deviceClass": null,
                "daypart": {"userTime": {"included": [0, 1, 2]}},
                "appDownloaders": {"excluded": ["284882215"]}
            })
        );
    }

    #[test]
    fn server_record_should_deserialize() {
        let ad_group: AdGroup = serde_json::from_value(json!({
            "id": 542370642,
            "campaignId": 56543219,
            "name": "Brand",
            "cpaGoal": {"amount": "3", "currency": "USD"},
            "startTime": "2024-01-10T00:00:00.000",
            "endTime": null,
            "automatedKeywordsOptIn": true,
            "defaultBidAmount": {"amount": "1.5", "currency": "USD"},
            "targetingDimensions": {
                "age": null,
                "gender": {"included": ["F"]},
                "country": null,
                "adminArea": null,
                "locality": null,
                "deviceClass": {"included": ["IPHONE", "IPAD"]},
                "daypart": null,
                "appDownloaders": null
            },
            "orgId": 40669820,
            "modificationTime": "2024-02-01T12:30:45.123",
            "status": "ENABLED",
            "servingStatus": "NOT_RUNNING",
            "displayStatus": "ON_HOLD",
            "servingStateReasons": ["CAMPAIGN_ON_HOLD"],
            "deleted": false,
            "pricingModel": "CPC"
        }))
        .expect("deserialize");

        assert_eq!(ad_group.id, Some(542_370_642));
        assert_eq!(ad_group.cpa_goal.map(|a| a.amount), Some(dec!(3)));
        assert_eq!(ad_group.serving_status, Some(ServingStatus::NotRunning));
        assert_eq!(ad_group.display_status, Some(DisplayStatus::OnHold));
        assert_eq!(ad_group.pricing_model, Some(PricingModel::Cpc));
        assert!(ad_group.automated_keywords_opt_in, "opt-in flag decoded");
        assert_eq!(
            ad_group
                .start_time
                .map(|t| t.format("%Y-%m-%d").to_string())
                .as_deref(),
            Some("2024-01-10")
        );

        let targeting = ad_group.targeting_dimensions.expect("targeting");
        assert_eq!(targeting.gender.map(|g| g.included), Some(vec!["F".to_owned()]));
        assert!(targeting.age.is_none(), "null dimension is unset");
    }

    #[test]
    fn serving_state_reasons_should_accept_any_shape() {
        let listed: AdGroup = serde_json::from_value(json!({
            "id": 1,
            "servingStateReasons": ["AD_GROUP_PAUSED_BY_USER"]
        }))
        .expect("deserialize");
        let keyed: AdGroup = serde_json::from_value(json!({
            "id": 2,
            "servingStateReasons": {"AD_GROUP_PAUSED_BY_USER": true}
        }))
        .expect("deserialize");

        assert_eq!(
            listed.serving_state_reasons,
            Some(json!(["AD_GROUP_PAUSED_BY_USER"]))
        );
        assert_eq!(
            keyed.serving_state_reasons,
            Some(json!({"AD_GROUP_PAUSED_BY_USER": true}))
        );
    }

    #[test]
    fn null_lists_should_decode_as_empty() {
        let targeting: TargetingDimensions = serde_json::from_value(json!({
            "country": {"included": null},
            "appDownloaders": {"included": null, "excluded": ["284882215"]}
        }))
        .expect("deserialize");

        assert_eq!(targeting.country, Some(Criteria::default()));
        let downloaders = targeting.app_downloaders.expect("app downloaders");
        assert!(downloaders.included.is_empty(), "null list is empty");
        assert_eq!(downloaders.excluded, vec!["284882215".to_owned()]);
    }

    #[test]
    fn unknown_status_should_fail_to_decode() {
        let err = serde_json::from_value::<AdGroup>(json!({"status": "ARCHIVED"})).unwrap_err();

        assert!(
            err.to_string().contains(r#"invalid Status name: "ARCHIVED""#),
            "unexpected message: {err}"
        );
    }
}

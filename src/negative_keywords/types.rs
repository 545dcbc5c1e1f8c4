use bon::Builder;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::codec::string_enum;
use crate::types::NaiveDateTime;

string_enum! {
    /// How closely a search term has to match the keyword text.
    pub enum KeywordMatchType {
        Exact = 1 => "EXACT",
        Broad = 2 => "BROAD",
    }
}

string_enum! {
    pub enum KeywordStatus {
        Active = 1 => "ACTIVE",
        Paused = 2 => "PAUSED",
    }
}

/// A search term for which the campaign's ads never show.
#[skip_serializing_none]
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
pub struct NegativeKeyword {
    pub id: Option<u64>,
    pub campaign_id: Option<u64>,
    /// Set only for keywords scoped to a single ad group.
    pub ad_group_id: Option<u64>,
    #[builder(into)]
    pub text: Option<String>,
    pub match_type: Option<KeywordMatchType>,
    pub status: Option<KeywordStatus>,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub deleted: bool,
    pub creation_time: Option<NaiveDateTime>,
    pub modification_time: Option<NaiveDateTime>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn payload_should_carry_only_set_fields() {
        let keyword = NegativeKeyword::builder()
            .text("free")
            .match_type(KeywordMatchType::Exact)
            .build();

        assert_eq!(
            serde_json::to_value(&keyword).expect("serialize"),
            json!({"text": "free", "matchType": "EXACT"})
        );
    }

    #[test]
    fn server_record_should_deserialize() {
        let keyword: NegativeKeyword = serde_json::from_value(json!({
            "id": 8811,
            "campaignId": 56543219,
            "adGroupId": null,
            "text": "cheap",
            "matchType": "BROAD",
            "status": "PAUSED",
            "deleted": true,
            "creationTime": "2024-03-01T08:00:00.000",
            "modificationTime": "2024-03-02T08:00:00.000"
        }))
        .expect("deserialize");

        assert_eq!(keyword.match_type, Some(KeywordMatchType::Broad));
        assert_eq!(keyword.status.map(KeywordStatus::value), Some(2));
        assert!(keyword.deleted, "deleted flag decoded");
        assert!(keyword.ad_group_id.is_none(), "campaign-wide keyword");
    }

    #[test]
    fn numeric_match_type_should_be_rejected() {
        let err = serde_json::from_value::<NegativeKeyword>(json!({"matchType": 1})).unwrap_err();

        assert!(
            err.to_string().contains("expected KeywordMatchType as a string"),
            "unexpected message: {err}"
        );
    }
}

//! Request types shared by every resource accessor.
//!
//! [`ListOptions`] become the query string of `list` calls, while a
//! [`Selector`] is posted as the body of `find` calls. Both use the
//! [`bon`](https://docs.rs/bon) builder pattern.

use bon::Builder;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// Pagination for `list` calls, sent as `?limit=..&offset=..`.
///
/// # Example
///
/// ```
/// use searchads_client_sdk::ToQueryParams as _;
/// use searchads_client_sdk::request::ListOptions;
///
/// let options = ListOptions::builder().limit(20).offset(40).build();
/// assert_eq!(options.query_params(), "?limit=20&offset=40");
/// ```
#[skip_serializing_none]
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Builder)]
pub struct ListOptions {
    /// Maximum number of records to return.
    pub limit: Option<u32>,
    /// Index of the first record to return.
    pub offset: Option<u32>,
}

/// Server-side query posted to the `find` endpoints.
///
/// # Example
///
/// ```
/// use searchads_client_sdk::request::{Condition, Operator, OrderBy, Selector, SortOrder};
///
/// let selector = Selector::builder()
///     .conditions(vec![
///         Condition::builder()
///             .field("status")
///             .operator(Operator::Equals)
///             .values(vec!["ENABLED".to_owned()])
///             .build(),
///     ])
///     .order_by(vec![OrderBy::builder().field("name").sort_order(SortOrder::Ascending).build()])
///     .build();
/// assert_eq!(selector.conditions.len(), 1);
/// ```
#[skip_serializing_none]
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
pub struct Selector {
    #[builder(default)]
    pub conditions: Vec<Condition>,
    /// Restricts the returned records to these fields.
    pub fields: Option<Vec<String>>,
    #[builder(default)]
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub order_by: Vec<OrderBy>,
    pub pagination: Option<PageRequest>,
}

/// A single predicate in a [`Selector`].
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
pub struct Condition {
    #[builder(into)]
    pub field: String,
    pub operator: Operator,
    #[builder(default)]
    pub values: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, strum_macros::Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum Operator {
    Equals,
    Contains,
    #[serde(rename = "STARTSWITH")]
    #[strum(serialize = "STARTSWITH")]
    StartsWith,
    #[serde(rename = "ENDSWITH")]
    #[strum(serialize = "ENDSWITH")]
    EndsWith,
    In,
    LessThan,
    GreaterThan,
    Between,
    ContainsAll,
    ContainsAny,
    /// Operator not known to this SDK, sent verbatim.
    #[serde(untagged)]
    Unknown(String),
}

/// Sort key for [`Selector`] results.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
pub struct OrderBy {
    #[builder(into)]
    pub field: String,
    #[builder(default)]
    pub sort_order: SortOrder,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, strum_macros::Display,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
#[non_exhaustive]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

/// Offset pagination embedded in a [`Selector`].
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Builder)]
pub struct PageRequest {
    #[builder(default)]
    pub offset: u32,
    pub limit: u32,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::ToQueryParams as _;

    #[test]
    fn empty_list_options_should_produce_no_query() {
        assert_eq!(ListOptions::default().query_params(), "");
        assert_eq!(ListOptions::builder().limit(5).build().query_params(), "?limit=5");
    }

    #[test]
    fn selector_should_serialize_api_shape() {
        let selector = Selector::builder()
            .conditions(vec![
                Condition::builder()
                    .field("name")
                    .operator(Operator::StartsWith)
                    .values(vec!["Brand".to_owned()])
                    .build(),
                Condition::builder()
                    .field("status")
                    .operator(Operator::In)
                    .values(vec!["ENABLED".to_owned(), "PAUSED".to_owned()])
                    .build(),
            ])
            .order_by(vec![
                OrderBy::builder()
                    .field("modificationTime")
                    .sort_order(SortOrder::Descending)
                    .build(),
            ])
            .pagination(PageRequest::builder().limit(100).build())
            .build();

        assert_eq!(
            serde_json::to_value(&selector).expect("serialize"),
            json!({
                "conditions": [
                    {"field": "name", "operator": "STARTSWITH", "values": ["Brand"]},
                    {"field": "status", "operator": "IN", "values": ["ENABLED", "PAUSED"]}
                ],
                "orderBy": [{"field": "modificationTime", "sortOrder": "DESCENDING"}],
                "pagination": {"offset": 0, "limit": 100}
            })
        );
    }

    #[test]
    fn operator_display_should_match_wire_name() {
        assert_eq!(Operator::LessThan.to_string(), "LESS_THAN");
        assert_eq!(Operator::EndsWith.to_string(), "ENDSWITH");
        assert_eq!(
            serde_json::to_value(Operator::ContainsAny).expect("serialize"),
            json!("CONTAINS_ANY")
        );
    }

    #[test]
    fn unknown_operator_should_round_trip() {
        let op: Operator = serde_json::from_str(r#""NOT_EQUALS""#).expect("deserialize");
        assert_eq!(op, Operator::Unknown("NOT_EQUALS".to_owned()));
        assert_eq!(
            serde_json::to_value(&op).expect("serialize"),
            json!("NOT_EQUALS")
        );
    }
}

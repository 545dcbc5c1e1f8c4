//! The transport-level wrapper returned alongside every decoded body.

use reqwest::StatusCode;
use reqwest::header::HeaderMap;
use serde::Deserialize;

/// Decoded response body together with the HTTP metadata it arrived with.
///
/// Failed calls surface the same metadata through
/// [`error::Status`](crate::error::Status).
#[non_exhaustive]
#[derive(Debug, Clone)]
pub struct Response<T> {
    pub status: StatusCode,
    pub headers: HeaderMap,
    /// Paging details, present when the server wrapped the body in its envelope.
    pub pagination: Option<PageDetail>,
    pub data: T,
}

impl<T> Response<T> {
    /// Discards the metadata and returns the decoded body.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.data
    }

    /// Transforms the body, keeping the metadata.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Response<U> {
        Response {
            status: self.status,
            headers: self.headers,
            pagination: self.pagination,
            data: f(self.data),
        }
    }
}

/// Paging details from the response envelope.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageDetail {
    pub total_results: u64,
    pub start_index: u64,
    pub items_per_page: u64,
}

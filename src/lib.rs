#![cfg_attr(doc, doc = include_str!("../README.md"))]

pub mod ad_groups;
pub mod client;
pub(crate) mod codec;
pub mod error;
pub mod negative_keywords;
pub mod request;
pub mod resource;
pub mod response;
pub(crate) mod serde_helpers;
pub mod status;
pub mod types;

use std::fmt::Write as _;

pub use client::{Client, Config};
use reqwest::Request;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::Error;
use crate::response::Response;

pub type Result<T> = std::result::Result<T, Error>;

/// Environment variable read by the demos for the bearer access token.
pub const ACCESS_TOKEN_VAR: &str = "SEARCHADS_ACCESS_TOKEN";

/// Environment variable read by the demos for the organization id.
pub const ORG_ID_VAR: &str = "SEARCHADS_ORG_ID";

/// Trait for converting request types to URL query parameters.
///
/// This trait is automatically implemented for all types that implement [`Serialize`].
/// It uses [`serde_html_form`] to serialize the struct fields into a query string.
/// Arrays are serialized as repeated keys (`key=val1&key=val2`).
pub trait ToQueryParams: Serialize {
    /// Converts the request to a URL query string.
    ///
    /// Returns an empty string if no parameters are set, otherwise returns
    /// a string starting with `?` followed by URL-encoded key-value pairs.
    fn query_params(&self) -> String {
        let params = serde_html_form::to_string(self)
            .inspect_err(|e| {
                #[cfg(feature = "tracing")]
                tracing::error!("Unable to convert to URL-encoded string {e:?}");
                #[cfg(not(feature = "tracing"))]
                let _: &serde_html_form::ser::Error = e;
            })
            .unwrap_or_default();

        let mut query = String::new();
        if !params.is_empty() {
            let _ = write!(query, "?{params}");
        }
        query
    }
}

impl<T: Serialize> ToQueryParams for T {}

/// Sends `request` and fails with a [`Kind::Status`](error::Kind::Status) error on any
/// non-2xx response. The error keeps the status, headers and raw body.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        level = "debug",
        skip(client, request),
        fields(
            method = %request.method(),
            path = request.url().path(),
            status_code
        )
    )
)]
async fn send(client: &reqwest::Client, request: Request) -> Result<reqwest::Response> {
    let method = request.method().clone();
    let path = request.url().path().to_owned();

    let response = client.execute(request).await?;
    let status_code = response.status();

    #[cfg(feature = "tracing")]
    tracing::Span::current().record("status_code", status_code.as_u16());

    if status_code.is_success() {
        return Ok(response);
    }

    let headers = response.headers().clone();
    let message = response.text().await.unwrap_or_default();

    #[cfg(feature = "tracing")]
    tracing::warn!(
        status = %status_code,
        method = %method,
        path = %path,
        message = %message,
        "API request failed"
    );

    Err(Error::status(status_code, method, path, headers, message))
}

/// Executes `request` and decodes the body into `T`, unwrapping the
/// `{"data": .., "pagination": ..}` envelope when the server sends one.
///
/// A body that does not decode fails with an [`error::Decode`] error that keeps
/// the status, headers and raw body.
async fn request<T: DeserializeOwned>(
    client: &reqwest::Client,
    request: Request,
) -> Result<Response<T>> {
    let response = send(client, request).await?;
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.bytes().await?;

    codec::take_failure();
    let decoded = serde_json::from_slice::<serde_json::Value>(&bytes)
        .and_then(serde_helpers::decode_envelope);

    match decoded {
        Ok((data, pagination)) => Ok(Response {
            status,
            headers,
            pagination,
            data,
        }),
        Err(source) => Err(Error::decode(
            status,
            headers,
            String::from_utf8_lossy(&bytes).into_owned(),
            source,
            codec::take_failure(),
        )),
    }
}

/// Executes `request` without looking at the response body.
async fn request_empty(client: &reqwest::Client, request: Request) -> Result<Response<()>> {
    let response = send(client, request).await?;

    Ok(Response {
        status: response.status(),
        headers: response.headers().clone(),
        pagination: None,
        data: (),
    })
}

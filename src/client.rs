//! HTTP transport for the Search Ads campaign management API.
//!
//! [`Client`] builds requests relative to its host ([`Client::new_request`]) and
//! executes them ([`Client::execute`]), decoding the JSON body into a
//! [`Response`]. Resource-specific operations live on the accessors returned by
//! [`Client::ad_groups`] and [`Client::campaign_negative_keywords`].
//!
//! # Example
//!
//! ```no_run
//! use searchads_client_sdk::{Client, Config};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::builder()
//!     .org_id(40669820)
//!     .access_token(std::env::var("SEARCHADS_ACCESS_TOKEN")?)
//!     .build();
//! let client = Client::new("https://api.searchads.apple.com/api/v5/", config)?;
//!
//! let ad_groups = client.ad_groups().list(56543219, None).await?;
//! for ad_group in ad_groups.data {
//!     println!("{:?}: {:?}", ad_group.id, ad_group.name);
//! }
//! # Ok(())
//! # }
//! ```

use bon::Builder;
use reqwest::{
    Client as ReqwestClient, Method, Request,
    header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT},
};
use secrecy::{ExposeSecret as _, SecretString};
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::Result;
use crate::ad_groups::AdGroups;
use crate::negative_keywords::CampaignNegativeKeywords;
use crate::resource::Accessor;
use crate::response::Response;

/// The default API host. Paths are resolved relative to it.
pub const DEFAULT_HOST: &str = "https://api.searchads.apple.com/api/v5/";

/// Header carrying the organization the call acts on behalf of.
pub const CONTEXT_HEADER: &str = "X-AP-Context";

const DEFAULT_USER_AGENT: &str = "searchads_client_sdk";

/// Configuration for [`Client`]
#[derive(Clone, Debug, Default, Builder)]
pub struct Config {
    /// Organization id sent as `X-AP-Context: orgId=<id>` on every request.
    org_id: Option<u64>,
    /// Bearer access token sent as `Authorization: Bearer <token>`. Obtaining the token is
    /// up to the caller.
    #[builder(into)]
    access_token: Option<SecretString>,
    /// Overrides the `User-Agent` header.
    #[builder(into)]
    user_agent: Option<String>,
}

/// HTTP client for the campaign management API.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone, Debug)]
pub struct Client {
    host: Url,
    client: ReqwestClient,
}

impl Default for Client {
    fn default() -> Self {
        Client::new(DEFAULT_HOST, Config::default())
            .expect("Client with default endpoint should succeed")
    }
}

impl Client {
    /// Creates a new client against `host`.
    ///
    /// A trailing `/` is added to the host path when missing, so that
    /// `https://example.com/api/v5` and `https://example.com/api/v5/` behave the same.
    ///
    /// # Errors
    ///
    /// Returns an error if the host URL is invalid, a configured header value is not
    /// valid, or the HTTP client cannot be initialized.
    pub fn new(host: &str, config: Config) -> Result<Client> {
        let mut headers = HeaderMap::new();

        let user_agent = match config.user_agent.as_deref() {
            Some(agent) => HeaderValue::from_str(agent)?,
            None => HeaderValue::from_static(DEFAULT_USER_AGENT),
        };
        headers.insert(USER_AGENT, user_agent);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(token) = &config.access_token {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", token.expose_secret()))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }
        if let Some(org_id) = config.org_id {
            headers.insert(
                CONTEXT_HEADER,
                HeaderValue::from_str(&format!("orgId={org_id}"))?,
            );
        }

        let client = ReqwestClient::builder().default_headers(headers).build()?;

        let mut host = Url::parse(host)?;
        if !host.path().ends_with('/') {
            let path = format!("{}/", host.path());
            host.set_path(&path);
        }

        Ok(Self { host, client })
    }

    /// Returns the host URL for the client.
    #[must_use]
    pub fn host(&self) -> &Url {
        &self.host
    }

    /// Builds a request for `path`, resolved relative to [`Self::host`], with `body`
    /// serialized as JSON when present.
    ///
    /// # Errors
    ///
    /// Returns an error if `path` cannot be joined to the host or the body cannot be serialized.
    pub fn new_request<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Request> {
        let url = self.host.join(path)?;
        let mut builder = self.client.request(method, url);
        if let Some(body) = body {
            builder = builder.body(serde_json::to_vec(body)?);
        }

        Ok(builder.build()?)
    }

    /// Executes `request` and decodes the response body into `T`.
    ///
    /// Non-2xx responses fail with a [`Kind::Status`](crate::error::Kind::Status) error that
    /// carries the status code, headers and body.
    pub async fn execute<T: DeserializeOwned>(&self, request: Request) -> Result<Response<T>> {
        crate::request(&self.client, request).await
    }

    /// Executes `request` without decoding the response body.
    pub async fn execute_empty(&self, request: Request) -> Result<Response<()>> {
        crate::request_empty(&self.client, request).await
    }

    /// Ad groups, scoped to a campaign.
    #[must_use]
    pub fn ad_groups(&self) -> Accessor<'_, AdGroups> {
        Accessor::new(self)
    }

    /// Negative keywords applied to a whole campaign.
    #[must_use]
    pub fn campaign_negative_keywords(&self) -> Accessor<'_, CampaignNegativeKeywords> {
        Accessor::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_client_should_have_correct_host() {
        let client = Client::default();
        assert_eq!(client.host().as_str(), DEFAULT_HOST);
    }

    #[test]
    fn host_without_trailing_slash_should_be_normalized() -> Result<()> {
        let client = Client::new("https://example.com/api/v5", Config::default())?;
        assert_eq!(client.host().as_str(), "https://example.com/api/v5/");

        let request = client.new_request::<()>(Method::GET, "campaigns/1/adgroups", None)?;
        assert_eq!(
            request.url().as_str(),
            "https://example.com/api/v5/campaigns/1/adgroups"
        );
        Ok(())
    }

    #[test]
    fn new_request_should_serialize_body() -> Result<()> {
        let client = Client::new("https://example.com", Config::default())?;
        let body = serde_json::json!({"name": "Brand"});

        let request = client.new_request(Method::POST, "campaigns/1/adgroups", Some(&body))?;

        assert_eq!(request.method(), Method::POST);
        let bytes = request
            .body()
            .and_then(reqwest::Body::as_bytes)
            .expect("buffered body");
        assert_eq!(bytes, br#"{"name":"Brand"}"#);
        Ok(())
    }

    #[test]
    fn invalid_host_should_fail() {
        Client::new("not a valid url", Config::default()).unwrap_err();
    }

    #[test]
    fn invalid_user_agent_should_fail() {
        let config = Config::builder().user_agent("bad\nagent").build();
        Client::new(DEFAULT_HOST, config).unwrap_err();
    }
}

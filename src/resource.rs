//! Generic CRUD accessor for resources nested under a parent collection.
//!
//! A [`Resource`] names the parent path segment (e.g. `campaigns`), its own
//! segment (e.g. `adgroups`) and the record type. [`Accessor`] then provides
//! `list`, `get`, `create`, `edit`, `delete`, `find` and `stream` against
//! `{parent}/{parent_id}/{segment}[/{id}]`.
//!
//! Required ids are validated before anything is sent: a zero `parent_id`
//! (or a zero `id` for `edit`/`delete`) fails with a
//! [`Kind::Validation`](crate::error::Kind::Validation) error.

use std::marker::PhantomData;

use async_stream::try_stream;
use futures::Stream;
use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;
#[cfg(feature = "tracing")]
use tracing::warn;

use crate::client::Client;
use crate::error::Error;
use crate::request::{ListOptions, Selector};
use crate::response::Response;
use crate::{Result, ToQueryParams as _};

/// Largest page the API returns for a single `list` call.
pub const MAX_PAGE_SIZE: u32 = 1000;

/// A record type reachable at `{PARENT}/{parent_id}/{SEGMENT}`.
pub trait Resource {
    /// Path segment of the owning collection.
    const PARENT: &'static str;
    /// Name of the parent identifier, used in validation messages.
    const PARENT_ID: &'static str;
    /// Path segment of this resource under its parent.
    const SEGMENT: &'static str;

    type Record: Serialize + DeserializeOwned;
}

/// Operations on one [`Resource`], borrowed from a [`Client`].
#[derive(Debug)]
pub struct Accessor<'client, R> {
    client: &'client Client,
    resource: PhantomData<R>,
}

impl<R> Clone for Accessor<'_, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for Accessor<'_, R> {}

impl<'client, R: Resource> Accessor<'client, R> {
    pub(crate) fn new(client: &'client Client) -> Self {
        Self {
            client,
            resource: PhantomData,
        }
    }

    fn collection(parent_id: u64) -> Result<String> {
        if parent_id == 0 {
            return Err(Error::validation(format!("{} can not be 0", R::PARENT_ID)));
        }
        Ok(format!("{}/{parent_id}/{}", R::PARENT, R::SEGMENT))
    }

    fn member(parent_id: u64, id: u64) -> Result<String> {
        let collection = Self::collection(parent_id)?;
        Ok(format!("{collection}/{id}"))
    }

    fn existing_member(parent_id: u64, id: u64) -> Result<String> {
        let collection = Self::collection(parent_id)?;
        if id == 0 {
            return Err(Error::validation("id can not be 0"));
        }
        Ok(format!("{collection}/{id}"))
    }

    /// Lists the records under `parent_id`. Zero matches yield an empty `Vec`.
    pub async fn list(
        &self,
        parent_id: u64,
        options: Option<&ListOptions>,
    ) -> Result<Response<Vec<R::Record>>> {
        let mut path = Self::collection(parent_id)?;
        if let Some(options) = options {
            path.push_str(&options.query_params());
        }
        let request = self.client.new_request::<()>(Method::GET, &path, None)?;

        self.client.execute(request).await
    }

    /// Fetches a single record.
    pub async fn get(&self, parent_id: u64, id: u64) -> Result<Response<R::Record>> {
        let path = Self::member(parent_id, id)?;
        let request = self.client.new_request::<()>(Method::GET, &path, None)?;

        self.client.execute(request).await
    }

    /// Creates a record and returns it as stored by the server.
    pub async fn create(
        &self,
        parent_id: u64,
        payload: &R::Record,
    ) -> Result<Response<R::Record>> {
        let path = Self::collection(parent_id)?;
        let request = self
            .client
            .new_request(Method::POST, &path, Some(payload))?;

        self.client.execute(request).await
    }

    /// Updates an existing record and returns it as stored by the server.
    pub async fn edit(
        &self,
        parent_id: u64,
        id: u64,
        payload: &R::Record,
    ) -> Result<Response<R::Record>> {
        let path = Self::existing_member(parent_id, id)?;
        let request = self.client.new_request(Method::PUT, &path, Some(payload))?;

        self.client.execute(request).await
    }

    /// Deletes a record. The response body is not decoded.
    pub async fn delete(&self, parent_id: u64, id: u64) -> Result<Response<()>> {
        let path = Self::existing_member(parent_id, id)?;
        let request = self.client.new_request::<()>(Method::DELETE, &path, None)?;

        self.client.execute_empty(request).await
    }

    /// Runs a server-side search under `parent_id`.
    pub async fn find(
        &self,
        parent_id: u64,
        selector: &Selector,
    ) -> Result<Response<Vec<R::Record>>> {
        let path = format!("{}/find", Self::collection(parent_id)?);
        let request = self
            .client
            .new_request(Method::POST, &path, Some(selector))?;

        self.client.execute(request).await
    }

    /// Returns a stream over every record under `parent_id`, fetched page by page
    /// with [`Self::list`].
    ///
    /// The stream ends after an empty or short page, or once the server-reported
    /// total has been yielded. `page_size` is capped at [`MAX_PAGE_SIZE`].
    ///
    /// # Example
    ///
    /// ```no_run
    /// use futures::StreamExt as _;
    /// use searchads_client_sdk::Client;
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = Client::default();
    /// let ad_groups = client.ad_groups();
    /// let mut stream = Box::pin(ad_groups.stream(56543219, 100));
    ///
    /// while let Some(ad_group) = stream.next().await {
    ///     println!("{:?}", ad_group?.name);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn stream(
        self,
        parent_id: u64,
        page_size: u32,
    ) -> impl Stream<Item = Result<R::Record>> + 'client
    where
        R: 'client,
        R::Record: 'client,
    {
        let limit = if page_size > MAX_PAGE_SIZE {
            #[cfg(feature = "tracing")]
            warn!(
                "Supplied {page_size} page size, the API allows at most {MAX_PAGE_SIZE} records per call, defaulting to {MAX_PAGE_SIZE}"
            );

            MAX_PAGE_SIZE
        } else {
            page_size.max(1)
        };

        try_stream! {
            let mut offset: u32 = 0;

            loop {
                let options = ListOptions::builder().limit(limit).offset(offset).build();
                let page = self.list(parent_id, Some(&options)).await?;
                let total = page.pagination.map(|p| p.total_results);

                #[expect(
                    clippy::cast_possible_truncation,
                    reason = "a single page never exceeds MAX_PAGE_SIZE records"
                )]
                let count = page.data.len() as u32;

                for record in page.data {
                    yield record;
                }

                offset = offset.saturating_add(count);
                let exhausted = total.is_some_and(|total| u64::from(offset) >= total);
                if count < limit || exhausted {
                    break;
                }
            }
        }
    }
}

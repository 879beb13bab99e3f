use crate::ProductRecord;
use eyre::{bail, Result, WrapErr};
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Path of the product resource, relative to the API base.
const PRODUCT_RESOURCE: &[&str] = &["api", "shopping", "product"];

/// Fetches product records from the shopping API.
///
/// Cloning is cheap: the underlying connection pool is shared.
#[derive(Clone, Debug)]
pub struct ProductClient {
    client: Client,
    base: Url,
}

impl ProductClient {
    /// Creates a client for the API rooted at `base`.
    ///
    /// Every request is bounded by `timeout`.
    pub fn new(base: Url, timeout: Duration) -> Result<Self> {
        if base.cannot_be_a_base() {
            bail!("API base `{base}` cannot hold a path");
        }
        let client = Client::builder()
            .default_headers(crate::build_headers())
            .timeout(timeout)
            .build()?;
        Ok(Self { client, base })
    }

    /// URL of the product resource for `id`.
    ///
    /// The id is percent-encoded into the last path segment, so ids like
    /// `a/b` or `x?y` cannot escape the product resource.
    pub fn product_url(&self, id: &str) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(PRODUCT_RESOURCE)
                .push(id);
        }
        url
    }

    /// Fetches the record of the product `id`.
    ///
    /// `Ok(None)` when the API rejects the id (`400` or `404`). Transport
    /// failures, other non-success statuses and malformed bodies are
    /// returned as errors. Nothing is retried.
    pub async fn fetch(&self, id: &str) -> Result<Option<ProductRecord>> {
        let url = self.product_url(id);
        debug!(%url, "fetching product");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .wrap_err_with(|| format!("Request for product `{id}` failed"))?;
        let status = response.status();
        if matches!(status, StatusCode::BAD_REQUEST | StatusCode::NOT_FOUND) {
            debug!(%status, id, "product API rejected id");
            return Ok(None);
        }
        if !status.is_success() {
            bail!("Product API answered {status} for `{id}`");
        }

        let body = response
            .text()
            .await
            .wrap_err_with(|| format!("Reading product `{id}` failed"))?;
        ProductRecord::from_json(&body)
            .map(Some)
            .wrap_err_with(|| format!("Product API sent a malformed record for `{id}`"))
    }
}

//! HTTP implementation of [`CatalogApi`] backed by reqwest.

use std::time::Duration;

use reqwest::{Client, RequestBuilder, Response};
use url::Url;

use journal_core::prelude::*;
use journal_core::{Page, PageQuery, Product, ProductDraft, ProductId};

use crate::api::CatalogApi;
use crate::query::list_query_pairs;

/// Default base URL of the catalog service
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api/products";

const USER_AGENT: &str = concat!("skincare-journal/", env!("CARGO_PKG_VERSION"));

/// Catalog service client speaking JSON over HTTP.
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    client: Client,
    base: Url,
}

impl HttpCatalog {
    /// Create a client for the collection rooted at `base_url`
    /// (e.g. `http://localhost:8080/api/products`).
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base = parse_base_url(base_url)?;
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| Error::network(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { client, base })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// `{base}?page=..&limit=..&...`
    pub fn list_url(&self, query: &PageQuery) -> Url {
        let mut url = self.base.clone();
        url.query_pairs_mut().extend_pairs(list_query_pairs(query));
        url
    }

    /// `{base}/{segment}`
    pub fn member_url(&self, segment: &str) -> Url {
        let mut url = self.base.clone();
        // parse_base_url rejects cannot-be-a-base URLs, so this always succeeds
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(segment);
        }
        url
    }

    async fn send(&self, request: RequestBuilder, url: &Url) -> Result<Response> {
        let response = request.send().await.map_err(|e| transport_error(&e))?;
        let status = response.status();
        if !status.is_success() {
            warn!("Catalog request rejected: {} {}", status, url);
            return Err(Error::rejected(status.as_u16(), url.as_str()));
        }
        Ok(response)
    }

    async fn send_json<T: serde::de::DeserializeOwned>(
        &self,
        request: RequestBuilder,
        url: &Url,
    ) -> Result<T> {
        let response = self.send(request, url).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| Error::invalid_response(format!("{url}: {e}")))
    }
}

impl CatalogApi for HttpCatalog {
    async fn list_products(&self, query: &PageQuery) -> Result<Page> {
        let url = self.list_url(query);
        debug!("GET {}", url);
        let response = self.send(self.client.get(url.clone()), &url).await?;
        let body = response.text().await.map_err(|e| transport_error(&e))?;
        Page::from_json(&body).map_err(|e| Error::invalid_response(format!("{url}: {e}")))
    }

    async fn list_brands(&self) -> Result<Vec<String>> {
        let url = self.member_url("brands");
        debug!("GET {}", url);
        self.send_json(self.client.get(url.clone()), &url).await
    }

    async fn get_product(&self, id: ProductId) -> Result<Product> {
        let url = self.member_url(&id.to_string());
        debug!("GET {}", url);
        self.send_json(self.client.get(url.clone()), &url).await
    }

    async fn create_product(&self, draft: &ProductDraft) -> Result<Product> {
        let url = self.base.clone();
        debug!("POST {}", url);
        self.send_json(self.client.post(url.clone()).json(draft), &url)
            .await
    }

    async fn update_product(&self, id: ProductId, draft: &ProductDraft) -> Result<Product> {
        let url = self.member_url(&id.to_string());
        debug!("PUT {}", url);
        self.send_json(self.client.put(url.clone()).json(draft), &url)
            .await
    }

    async fn delete_product(&self, id: ProductId) -> Result<()> {
        let url = self.member_url(&id.to_string());
        debug!("DELETE {}", url);
        self.send(self.client.delete(url.clone()), &url).await?;
        Ok(())
    }
}

/// Validate a base URL: must parse, use http(s) and have a path we can extend.
pub fn parse_base_url(base_url: &str) -> Result<Url> {
    let url = Url::parse(base_url)
        .map_err(|e| Error::config(format!("Invalid API base URL '{base_url}': {e}")))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(Error::config(format!(
            "API base URL must use http or https: {base_url}"
        )));
    }
    if url.cannot_be_a_base() {
        return Err(Error::config(format!(
            "API base URL cannot have path segments appended: {base_url}"
        )));
    }
    Ok(url)
}

fn transport_error(err: &reqwest::Error) -> Error {
    if err.is_decode() {
        Error::invalid_response(err.to_string())
    } else {
        Error::network(err.to_string())
    }
}

//! Paginated list responses and the `has_more` derivation

use serde::Deserialize;

use crate::types::{FilterState, Product};

/// One page of products as requested from the catalog service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageQuery {
    /// 1-based page number
    pub page: u32,
    /// Page size (`limit` parameter)
    pub limit: u32,
    pub filter: FilterState,
}

impl PageQuery {
    pub fn new(page: u32, limit: u32, filter: FilterState) -> Self {
        Self {
            page,
            limit,
            filter,
        }
    }
}

/// A server-paginated batch of products plus pagination metadata.
///
/// `total_items` and `total_pages` are optional because not every endpoint
/// variant reports them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    /// Page number reported by the server, if any. Not used for `has_more`.
    pub page: Option<u32>,
    pub items: Vec<Product>,
    pub total_items: Option<u64>,
    pub total_pages: Option<u32>,
}

/// Wire shape of `GET /products`.
///
/// The service normally answers with a paginated envelope but some variants
/// return a bare array of products.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ListBody {
    Paged(PagedBody),
    Bare(Vec<Product>),
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PagedBody {
    products: Vec<Product>,
    #[serde(default)]
    total: Option<u64>,
    #[serde(default)]
    total_pages: Option<u32>,
    #[serde(default)]
    page: Option<u32>,
}

impl Page {
    /// Decode a list response body (envelope or bare array).
    pub fn from_json(body: &str) -> serde_json::Result<Self> {
        Ok(serde_json::from_str::<ListBody>(body)?.into())
    }

    /// Decide whether more pages remain after this one.
    ///
    /// `requested_page` is the page number that was asked for and
    /// `accumulated` is the total number of items held after merging this
    /// page. The page number echoed by the server is informational only. `total_pages` is authoritative when present; otherwise the
    /// accumulated count is compared to `total_items`. A response with
    /// neither is treated as the final page.
    pub fn has_more(&self, requested_page: u32, accumulated: usize) -> bool {
        if let Some(total_pages) = self.total_pages {
            return requested_page < total_pages;
        }
        match self.total_items {
            Some(total) => (accumulated as u64) < total,
            None => false,
        }
    }
}

impl From<ListBody> for Page {
    fn from(body: ListBody) -> Self {
        match body {
            ListBody::Paged(paged) => Page {
                page: paged.page,
                items: paged.products,
                total_items: paged.total,
                total_pages: paged.total_pages,
            },
            ListBody::Bare(items) => Page {
                page: None,
                items,
                total_items: None,
                total_pages: None,
            },
        }
    }
}

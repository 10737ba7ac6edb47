//! Query-string encoding for list requests

use journal_core::PageQuery;

/// Build the query parameters for `GET /products`.
///
/// `page`, `limit` and `sortBy` are always sent. Filter fields that are not
/// set are omitted entirely rather than sent empty; tags are comma-joined.
pub fn list_query_pairs(query: &PageQuery) -> Vec<(&'static str, String)> {
    let filter = &query.filter;
    let mut pairs = vec![
        ("page", query.page.to_string()),
        ("limit", query.limit.to_string()),
    ];

    if let Some(product_type) = filter.product_type {
        pairs.push(("productType", product_type.as_str().to_string()));
    }
    if !filter.tags.is_empty() {
        pairs.push(("tags", filter.tags.join(",")));
    }
    if let Some(brand) = filter.brand.as_deref().filter(|b| !b.is_empty()) {
        pairs.push(("brand", brand.to_string()));
    }
    if !filter.search.is_empty() {
        pairs.push(("search", filter.search.clone()));
    }
    pairs.push(("sortBy", filter.sort.as_param().to_string()));

    pairs
}

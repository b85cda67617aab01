use axum::http::{HeaderMap, HeaderName, HeaderValue, Uri, header::LINK};

use crate::repository::Pageable;

pub static X_TOTAL_COUNT: HeaderName = HeaderName::from_static("x-total-count");

/// `X-Total-Count` and RFC 5988 `Link` headers for one page of `total` rows.
///
/// Links are built from `uri` with its `page` and `size` parameters replaced,
/// keeping every other parameter (such as `sort`) as sent.
pub fn generate_pagination_headers(uri: &Uri, pageable: &Pageable, total: u64) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(X_TOTAL_COUNT.clone(), HeaderValue::from(total));

    let page = pageable.page;
    let size = pageable.size;
    let total_pages = pageable.total_pages(total);

    let mut links = Vec::with_capacity(4);
    if page.saturating_add(1) < total_pages {
        links.push(prepare_link(uri, page + 1, size, "next"));
    }
    if page > 0 {
        links.push(prepare_link(uri, page - 1, size, "prev"));
    }
    links.push(prepare_link(uri, total_pages.saturating_sub(1), size, "last"));
    links.push(prepare_link(uri, 0, size, "first"));

    match HeaderValue::try_from(links.join(",")) {
        Ok(value) => {
            headers.insert(LINK, value);
        }
        Err(e) => tracing::warn!("Skipping Link header: {e}"),
    }
    headers
}

fn prepare_link(uri: &Uri, page: u64, size: u64, rel: &str) -> String {
    format!("<{}>; rel=\"{rel}\"", page_uri(uri, page, size))
}

fn page_uri(uri: &Uri, page: u64, size: u64) -> String {
    let mut params: Vec<String> = Vec::new();
    let (mut has_page, mut has_size) = (false, false);

    for pair in uri.query().unwrap_or_default().split('&').filter(|p| !p.is_empty()) {
        let key = pair.split_once('=').map_or(pair, |(k, _)| k);
        match key {
            "page" if !has_page => {
                has_page = true;
                params.push(format!("page={page}"));
            }
            "size" if !has_size => {
                has_size = true;
                params.push(format!("size={size}"));
            }
            "page" | "size" => {}
            _ => params.push(pair.to_string()),
        }
    }
    if !has_page {
        params.push(format!("page={page}"));
    }
    if !has_size {
        params.push(format!("size={size}"));
    }

    format!("{}?{}", uri.path(), params.join("&"))
        .replace(',', "%2C")
        .replace(';', "%3B")
}

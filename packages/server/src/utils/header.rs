//! `X-{app}-alert` / `X-{app}-params` headers the client UI turns into
//! notifications.

use axum::http::{HeaderMap, HeaderName, HeaderValue};

pub fn entity_creation_alert(app_name: &str, entity_name: &str, param: &str) -> HeaderMap {
    alert(app_name, &format!("{app_name}.{entity_name}.created"), param)
}

pub fn entity_update_alert(app_name: &str, entity_name: &str, param: &str) -> HeaderMap {
    alert(app_name, &format!("{app_name}.{entity_name}.updated"), param)
}

pub fn entity_deletion_alert(app_name: &str, entity_name: &str, param: &str) -> HeaderMap {
    alert(app_name, &format!("{app_name}.{entity_name}.deleted"), param)
}

fn alert(app_name: &str, message: &str, param: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    insert(&mut headers, &format!("x-{app_name}-alert"), message);
    insert(&mut headers, &format!("x-{app_name}-params"), param);
    headers
}

fn insert(headers: &mut HeaderMap, name: &str, value: &str) {
    match (
        HeaderName::try_from(name),
        HeaderValue::try_from(value),
    ) {
        (Ok(name), Ok(value)) => {
            headers.insert(name, value);
        }
        _ => tracing::warn!(name, value, "Skipping alert header that is not valid HTTP"),
    }
}

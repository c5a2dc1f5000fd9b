use std::collections::HashMap;

use crate::empty::is_empty;

/// Builds a header map from optional content-type and authorization
/// values, omitting entries whose value is empty.
pub fn content_type_and_authorization(
    content_type: &str,
    authorization: &str,
) -> HashMap<String, String> {
    let mut headers = HashMap::new();
    if !is_empty(content_type) {
        headers.insert("Content-Type".to_owned(), content_type.to_owned());
    }
    if !is_empty(authorization) {
        headers.insert("Authorization".to_owned(), authorization.to_owned());
    }
    headers
}

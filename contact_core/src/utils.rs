use url::Url;

use crate::error::ApiError;

/// Adds `https://` when no scheme was typed and drops trailing slashes so
/// id segments can be appended uniformly.
pub fn normalize_url(input: &str) -> String {
    let trimmed = input.trim().trim_end_matches('/');
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    }
}

pub fn parse_collection_url(input: &str) -> Result<Url, ApiError> {
    let url = Url::parse(&normalize_url(input))?;
    if url.cannot_be_a_base() {
        return Err(ApiError::NotABase(url.to_string()));
    }
    Ok(url)
}

/// `<collection>/<id>` with the id percent-encoded as a single path segment.
pub fn member_url(collection: &Url, id: &str) -> Result<Url, ApiError> {
    let mut url = collection.clone();
    url.path_segments_mut()
        .map_err(|_| ApiError::NotABase(collection.to_string()))?
        .pop_if_empty()
        .push(id);
    Ok(url)
}

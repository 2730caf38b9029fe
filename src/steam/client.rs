use std::fmt::Display;

use super::{logger::FilteringLogger, models::StoreItem};

pub const BASE_URL: &str = "https://store.steampowered.com";
pub const DEFAULT_LANGUAGE: &str = "portuguese";
pub const DEFAULT_COUNTRY: &str = "BR";

#[derive(Debug, Clone)]
pub struct StoreSearchRequest<'a> {
    pub base_url: &'a str,
    pub term: &'a str,
    pub language: &'a str,
    pub country: &'a str,
}

/// Searches the storefront for `request.term` and returns the first hit, if any.
pub async fn search_store<'a>(
    client: &reqwest::Client,
    request: StoreSearchRequest<'_>,
    logger: &'a FilteringLogger<'a>,
) -> Result<Option<StoreItem>, Error> {
    let url = format!("{base}/api/storesearch/", base = request.base_url);

    let params = [
        ("term", request.term),
        ("l", request.language),
        ("cc", request.country),
    ];

    logger
        .trace(format!("searching store for {:?}", request.term))
        .await;
    let response = client.get(url).query(&params).send().await?;

    if response.status().is_success() {
        let body = response.text().await?;
        return parse_store_search(&body);
    }

    Err(Error::HttpStatus(response.status().as_u16()))
}

/// Picks the first element of `items` out of a store search body.
///
/// A missing, null or empty `items` is not an error, it just means nothing matched.
pub fn parse_store_search(body: &str) -> Result<Option<StoreItem>, Error> {
    let parse_body: serde_json::Value = serde_json::from_str(body)?;
    if !parse_body.is_object() {
        return Err(Error::JsonMissingValue);
    }
    let items = &parse_body["items"];
    if items.is_null() {
        return Ok(None);
    }
    match items.as_array().ok_or(Error::JsonMissingValue)?.first() {
        Some(first) => Ok(Some(serde_json::from_value(first.to_owned())?)),
        None => Ok(None),
    }
}

#[derive(Debug)]
pub enum Error {
    Json(serde_json::Error),
    JsonMissingValue,
    Http(reqwest::Error),
    HttpStatus(u16),
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

impl From<reqwest::Error> for Error {
    fn from(value: reqwest::Error) -> Self {
        Self::Http(value)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Json(err) => write!(f, "JsonError({})", err),
            Error::JsonMissingValue => write!(f, "JsonMissingValueError"),
            Error::Http(err) => write!(f, "HttpError({})", err),
            Error::HttpStatus(err) => write!(f, "HttpStatusError({})", err),
        }
    }
}

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use serde_json::Value;
use url::Url;

use crate::api::models::{Contact, NewContact};
use crate::error::{ApiError, Result};
use crate::utils::{member_url, parse_collection_url};

/// The remote collection of contact records.
#[async_trait]
pub trait ContactStore: Send + Sync {
    async fn list(&self) -> Result<Vec<Contact>>;
    /// `None` when the backend accepted the record but did not echo it back.
    async fn create(&self, contact: &NewContact) -> Result<Option<Contact>>;
    async fn update(&self, id: &str, contact: &NewContact) -> Result<Contact>;
    async fn delete(&self, id: &str) -> Result<()>;
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: HttpClient,
    collection: Url,
}

impl ApiClient {
    pub fn new(api_url: &str) -> Result<Self> {
        Ok(Self::with_http(HttpClient::new(), parse_collection_url(api_url)?))
    }

    pub fn with_http(http: HttpClient, collection: Url) -> Self {
        Self { http, collection }
    }

    pub fn collection(&self) -> &Url {
        &self.collection
    }

    async fn read_json(resp: reqwest::Response) -> Result<Value> {
        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::Status(status));
        }
        let bytes = resp.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Finds a record in a bare or `data`/`contact`-wrapped body. Anything
    /// else, including an empty body, yields `None`.
    fn echoed_record(bytes: &[u8]) -> Option<Contact> {
        let json: Value = serde_json::from_slice(bytes).ok()?;
        let candidate = match json.get("_id").or_else(|| json.get("id")) {
            Some(_) => json,
            None => json.get("data").or_else(|| json.get("contact"))?.clone(),
        };
        serde_json::from_value(candidate).ok()
    }
}

#[async_trait]
impl ContactStore for ApiClient {
    /// Accepts a bare array or an array wrapped in `data`/`contacts`. Items
    /// that cannot be read as a contact are skipped.
    async fn list(&self) -> Result<Vec<Contact>> {
        log::debug!("GET {}", self.collection);
        let resp = self.http.get(self.collection.clone()).send().await?;
        let json = Self::read_json(resp).await?;
        let items = match json {
            Value::Array(items) => items,
            Value::Object(mut obj) => match obj.remove("data").or_else(|| obj.remove("contacts")) {
                Some(Value::Array(items)) => items,
                _ => return Err(ApiError::Shape("expected an array of contacts".into())),
            },
            _ => return Err(ApiError::Shape("expected an array of contacts".into())),
        };
        let total = items.len();
        let contacts: Vec<Contact> = items
            .into_iter()
            .filter_map(|item| match serde_json::from_value(item) {
                Ok(contact) => Some(contact),
                Err(e) => {
                    log::warn!("skipping unreadable contact: {e}");
                    None
                }
            })
            .collect();
        log::debug!("fetched {} of {} contacts", contacts.len(), total);
        Ok(contacts)
    }

    async fn create(&self, contact: &NewContact) -> Result<Option<Contact>> {
        log::debug!("POST {}", self.collection);
        let resp = self.http.post(self.collection.clone()).json(contact).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::Status(status));
        }
        let bytes = resp.bytes().await?;
        let created = Self::echoed_record(&bytes);
        if created.is_none() {
            log::debug!("create answered {status} without a readable record");
        }
        Ok(created)
    }

    async fn update(&self, id: &str, contact: &NewContact) -> Result<Contact> {
        let endpoint = member_url(&self.collection, id)?;
        log::debug!("PUT {}", endpoint);
        let resp = self.http.put(endpoint).json(contact).send().await?;
        let json = Self::read_json(resp).await?;
        Ok(serde_json::from_value(json)?)
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let endpoint = member_url(&self.collection, id)?;
        log::debug!("DELETE {}", endpoint);
        let resp = self.http.delete(endpoint).send().await?;
        if !resp.status().is_success() {
            return Err(ApiError::Status(resp.status()));
        }
        Ok(())
    }
}

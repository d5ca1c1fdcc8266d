use crate::api::traits::ListingSource;
use crate::config::{api_origin, Config};
use crate::error::ApiError;
use crate::models::{ImageRecord, PropertyPayload, PropertyRecord};
use crate::normalize::{normalize_images, normalize_properties, pick_one, property_from_value};
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Client, RequestBuilder};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info, warn};
use url::Url;

const USER_AGENT: &str = concat!("realo-listings/", env!("CARGO_PKG_VERSION"));

/// REST client for the listing backend
#[derive(Debug, Clone)]
pub struct RealoClient {
    client: Client,
    base: Url,
    origin: String,
}

impl RealoClient {
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(USER_AGENT)
            .build()?;
        Self::with_client(&config.api_url, client)
    }

    /// Use a preconfigured `reqwest::Client` against `api_url`
    pub fn with_client(api_url: &str, client: Client) -> Result<Self, ApiError> {
        let base = Url::parse(api_url.trim_end_matches('/'))?;
        let origin = api_origin(base.as_str());
        Ok(Self { client, base, origin })
    }

    /// Client with default settings, mostly for tests and scripts
    pub fn connect(api_url: &str) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(USER_AGENT)
            .build()?;
        Self::with_client(api_url, client)
    }

    /// Origin that root-relative image paths resolve against
    pub fn origin(&self) -> &str {
        &self.origin
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl(url::ParseError::RelativeUrlWithCannotBeABaseBase))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn send(&self, request: RequestBuilder) -> Result<reqwest::Response, ApiError> {
        let response = request.header(ACCEPT, "application/json").send().await?;
        let status = response.status();
        if !status.is_success() {
            let url = response.url().to_string();
            warn!("API returned status {} for {}", status, url);
            return Err(ApiError::Status { status, url });
        }
        Ok(response)
    }

    async fn get_json(&self, url: Url) -> Result<Value, ApiError> {
        debug!("GET {}", url);
        let response = self.send(self.client.get(url)).await?;
        let body = response.text().await?;
        debug!("Downloaded {} bytes", body.len());
        Ok(serde_json::from_str(&body)?)
    }

    pub async fn list_properties(&self) -> Result<Vec<PropertyRecord>, ApiError> {
        let url = self.endpoint(&["api", "Property", "GetProperties"])?;
        let raw = self.get_json(url).await?;
        let properties = normalize_properties(raw, &self.origin);
        info!("Fetched {} properties", properties.len());
        Ok(properties)
    }

    pub async fn get_property(&self, id: &str) -> Result<PropertyRecord, ApiError> {
        let url = self.endpoint(&["api", "Property", "GetProperty", id])?;
        let raw = self.get_json(url).await?;
        match pick_one(raw) {
            Some(value) if value.is_object() => Ok(property_from_value(&value, &self.origin)),
            _ => Err(ApiError::NotFound(id.to_string())),
        }
    }

    pub async fn property_images(&self, id: &str) -> Result<Vec<ImageRecord>, ApiError> {
        let url = self.endpoint(&["api", "Property", "GetPropertyImages", id, "images"])?;
        let raw = self.get_json(url).await?;
        Ok(normalize_images(raw, &self.origin, id))
    }

    pub async fn create_property(&self, payload: &PropertyPayload) -> Result<(), ApiError> {
        let url = self.endpoint(&["api", "Property", "PostProperty"])?;
        debug!("POST {}", url);
        self.send(self.client.post(url).json(payload)).await?;
        info!("Created property '{}'", payload.title);
        Ok(())
    }

    pub async fn update_property(&self, id: &str, payload: &PropertyPayload) -> Result<(), ApiError> {
        let url = self.endpoint(&["api", "Property", "PutProperty", id])?;
        debug!("PUT {}", url);
        self.send(self.client.put(url).json(payload)).await?;
        info!("Updated property {}", id);
        Ok(())
    }

    pub async fn delete_property(&self, id: &str) -> Result<(), ApiError> {
        let url = self.endpoint(&["api", "Property", "DeleteProperty", id])?;
        debug!("DELETE {}", url);
        self.send(self.client.delete(url)).await?;
        info!("Deleted property {}", id);
        Ok(())
    }

    /// The backend takes the bare URL as a JSON string body
    pub async fn add_image(&self, id: &str, image_url: &str) -> Result<(), ApiError> {
        let url = self.endpoint(&["api", "Property", "AddPropertyImage", id, "images"])?;
        debug!("POST {}", url);
        self.send(self.client.post(url).json(&image_url)).await?;
        info!("Added image to property {}", id);
        Ok(())
    }

    pub async fn delete_image(&self, id: &str, image_id: i64) -> Result<(), ApiError> {
        let image_id = image_id.to_string();
        let url = self.endpoint(&["api", "Property", "DeletePropertyImage", id, "images", &image_id])?;
        debug!("DELETE {}", url);
        self.send(self.client.delete(url)).await?;
        info!("Deleted image {} of property {}", image_id, id);
        Ok(())
    }
}

#[async_trait]
impl ListingSource for RealoClient {
    async fn fetch_all(&self) -> Result<Vec<PropertyRecord>, ApiError> {
        self.list_properties().await
    }

    async fn fetch_one(&self, id: &str) -> Result<PropertyRecord, ApiError> {
        self.get_property(id).await
    }

    async fn fetch_images(&self, id: &str) -> Result<Vec<ImageRecord>, ApiError> {
        self.property_images(id).await
    }

    fn source_name(&self) -> &'static str {
        "Realo API"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_keep_base_path_and_encode_ids() {
        let client = RealoClient::connect("https://api.example.com/proxy/").unwrap();
        let url = client.endpoint(&["api", "Property", "GetProperty", "a b/1"]).unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.example.com/proxy/api/Property/GetProperty/a%20b%2F1"
        );
        assert_eq!(client.origin(), "https://api.example.com");
    }

    #[test]
    fn root_base_has_no_double_slash() {
        let client = RealoClient::connect("http://127.0.0.1:9000").unwrap();
        let url = client.endpoint(&["api", "Property", "GetProperties"]).unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:9000/api/Property/GetProperties");
    }

    #[test]
    fn rejects_unparseable_base() {
        assert!(matches!(
            RealoClient::connect("not a url"),
            Err(ApiError::InvalidUrl(_))
        ));
    }
}

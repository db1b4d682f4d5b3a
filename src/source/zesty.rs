use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::blocking::Client as HttpClient;
use reqwest::Url;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::MealSource;
use crate::data::model::{Client, DeliveryRecord};

const FETCH_FAILED: &str =
    "Something went wrong with the request to Zesty, check the error below to debug";

/// The Zesty client portal API.
pub struct ZestyApi {
    http: HttpClient,
    endpoint: String,
    client_id: String,
}

#[derive(Debug, Deserialize)]
struct MealsResponse {
    meals: Vec<DeliveryRecord>,
}

#[derive(Debug, Deserialize)]
struct ClientResponse {
    client: Client,
}

impl ZestyApi {
    pub fn new(endpoint: &str, client_id: &str, timeout: Duration) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(timeout)
            .user_agent(concat!("zesty/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self {
            http,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            client_id: client_id.to_string(),
        })
    }

    fn meals_url(&self) -> Result<Url> {
        let base = format!("{}/meals", self.endpoint);
        Url::parse_with_params(&base, &[("client_id", self.client_id.as_str())])
            .with_context(|| format!("Invalid API endpoint {}", self.endpoint))
    }

    fn client_url(&self) -> Result<Url> {
        let mut url = Url::parse(&format!("{}/clients/", self.endpoint))
            .with_context(|| format!("Invalid API endpoint {}", self.endpoint))?;
        url.path_segments_mut()
            .map_err(|_| anyhow::anyhow!("Invalid API endpoint {}", self.endpoint))?
            .pop_if_empty()
            .push(&self.client_id);
        Ok(url)
    }

    fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        tracing::debug!(%url, "GET");
        let response = self
            .http
            .get(url.clone())
            .send()
            .with_context(|| format!("{FETCH_FAILED}\nRequest to {url} failed"))?
            .error_for_status()
            .with_context(|| format!("{FETCH_FAILED}\nRequest to {url} was rejected"))?;
        response
            .json::<T>()
            .with_context(|| format!("{FETCH_FAILED}\nUnexpected response from {url}"))
    }
}

impl MealSource for ZestyApi {
    fn fetch_meals(&self) -> Result<Vec<DeliveryRecord>> {
        let response: MealsResponse = self.get_json(self.meals_url()?)?;
        Ok(response.meals)
    }

    fn fetch_client(&self) -> Result<Client> {
        let response: ClientResponse = self.get_json(self.client_url()?)?;
        Ok(response.client)
    }
}

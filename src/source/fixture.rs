use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::MealSource;
use crate::data::model::{Client, DeliveryRecord};

/// A JSON file holding a client and their meals, in the same shapes the API
/// returns. Used for offline browsing. The file is read once, on open.
pub struct FixtureFile {
    data: FixtureData,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureData {
    pub client: Client,
    #[serde(default)]
    pub meals: Vec<DeliveryRecord>,
}

impl FixtureFile {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let data: FixtureData = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(Self { data })
    }
}

impl MealSource for FixtureFile {
    fn fetch_meals(&self) -> Result<Vec<DeliveryRecord>> {
        Ok(self.data.meals.clone())
    }

    fn fetch_client(&self) -> Result<Client> {
        Ok(self.data.client.clone())
    }
}

mod fixture;
mod zesty;

pub use fixture::FixtureFile;
pub use zesty::ZestyApi;

use anyhow::Result;

use crate::data::model::{Client, DeliveryRecord};
use crate::data::schedule::ScheduleIndex;

/// Where the meal schedule comes from. Each source is read exactly once per
/// run; the result is never refreshed.
pub trait MealSource {
    fn fetch_meals(&self) -> Result<Vec<DeliveryRecord>>;
    fn fetch_client(&self) -> Result<Client>;
}

/// A client's name plus their complete, read-only schedule.
#[derive(Debug, Clone)]
pub struct Schedule {
    pub client: Client,
    pub index: ScheduleIndex,
}

pub fn load_schedule(source: &dyn MealSource) -> Result<Schedule> {
    let index = ScheduleIndex::new(source.fetch_meals()?);
    let client = source.fetch_client()?;
    tracing::info!(meals = index.len(), client = %client.name, "schedule loaded");
    Ok(Schedule { client, index })
}

use std::fmt;

use chrono::{DateTime, Local, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

/// Identifier of a scheduled meal. The API hands these out as numbers, but
/// nothing here relies on that beyond equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MealId {
    Number(i64),
    Text(String),
}

impl fmt::Display for MealId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MealId::Number(n) => write!(f, "{n}"),
            MealId::Text(s) => write!(f, "{s}"),
        }
    }
}

#[cfg(test)]
impl From<i64> for MealId {
    fn from(n: i64) -> Self {
        MealId::Number(n)
    }
}

/// One scheduled meal delivery. `delivery` is local wall-clock time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryRecord {
    pub id: MealId,
    #[serde(rename = "delivery_date", deserialize_with = "deserialize_delivery")]
    pub delivery: NaiveDateTime,
    pub restaurant_name: String,
    #[serde(rename = "restaurant_cuisine")]
    pub cuisine: String,
}

#[cfg(test)]
impl DeliveryRecord {
    pub fn new(
        id: impl Into<MealId>,
        delivery: NaiveDateTime,
        restaurant_name: &str,
        cuisine: &str,
    ) -> Self {
        Self {
            id: id.into(),
            delivery,
            restaurant_name: restaurant_name.to_string(),
            cuisine: cuisine.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub name: String,
}

/// Parses a delivery timestamp. Timestamps carrying an offset are converted to
/// the machine's local time; naive ones are taken as already local.
pub fn parse_delivery_date(s: &str) -> anyhow::Result<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Local).naive_local());
    }
    if let Ok(naive) = s.parse::<NaiveDateTime>() {
        return Ok(naive);
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f")
        .map_err(|_| anyhow::anyhow!("Invalid delivery date '{s}'"))
}

fn deserialize_delivery<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_delivery_date(&raw).map_err(serde::de::Error::custom)
}

//! Sport group model

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use super::payment::SubscriptionType;

/// The four fixed directions shown on the main screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Gymnastics,
    Judo,
    Mma,
    Fitness,
}

impl Category {
    /// Display order of the directions
    pub const ALL: [Category; 4] = [
        Category::Gymnastics,
        Category::Judo,
        Category::Mma,
        Category::Fitness,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Category::Gymnastics => "gymnastics",
            Category::Judo => "judo",
            Category::Mma => "mma",
            Category::Fitness => "fitness",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.key() == key)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// An offered class with pricing tiers and schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SportGroup {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub detailed_description: Option<String>,
    /// Raw category key; groups with unknown keys never appear under a direction
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub age_group: Option<String>,
    #[serde(default)]
    pub trainer_name: Option<String>,
    #[serde(default)]
    pub trainer_info: Option<String>,
    #[serde(default, alias = "schedule", deserialize_with = "schedule_text")]
    pub schedule_text: Option<String>,
    #[serde(default)]
    pub price_8: Option<i64>,
    #[serde(default)]
    pub price_12: Option<i64>,
    #[serde(default)]
    pub price_single: Option<i64>,
}

impl SportGroup {
    pub fn in_category(&self, category: Category) -> bool {
        self.category.as_deref() == Some(category.key())
    }

    /// Price of a subscription tier; missing prices count as 0
    pub fn price_for(&self, subscription: SubscriptionType) -> i64 {
        let price = match subscription {
            SubscriptionType::Eight => self.price_8,
            SubscriptionType::Twelve => self.price_12,
            SubscriptionType::Single => self.price_single,
        };
        price.unwrap_or(0)
    }
}

/// Schedules arrive either as display text or as a list of
/// `{day, start_time, end_time}` slots; slots are joined into one line.
fn schedule_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(text)) if !text.trim().is_empty() => Some(text),
        Some(Value::Array(slots)) => {
            let parts: Vec<String> = slots
                .iter()
                .filter_map(|slot| {
                    let day = slot.get("day")?.as_str()?;
                    let start = slot.get("start_time").and_then(Value::as_str).unwrap_or("");
                    let end = slot.get("end_time").and_then(Value::as_str).unwrap_or("");
                    Some(format!("{} {}-{}", day, start, end))
                })
                .collect();
            if parts.is_empty() { None } else { Some(parts.join(", ")) }
        }
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_keys_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_key(category.key()), Some(category));
        }
        assert_eq!(Category::from_key("chess"), None);
    }

    #[test]
    fn test_schedule_accepts_text_alias() {
        let json = r#"{"id": 1, "name": "Дзюдо", "schedule": "Пн, Ср 18:00"}"#;
        let group: SportGroup = serde_json::from_str(json).unwrap();
        assert_eq!(group.schedule_text.as_deref(), Some("Пн, Ср 18:00"));
    }

    #[test]
    fn test_schedule_accepts_slot_list() {
        let json = r#"{"id": 1, "name": "Дзюдо", "schedule": [
            {"id": 1, "day": "Понедельник", "start_time": "18:00", "end_time": "19:00"},
            {"id": 2, "day": "Среда", "start_time": "18:00", "end_time": "19:00"}
        ]}"#;
        let group: SportGroup = serde_json::from_str(json).unwrap();
        assert_eq!(
            group.schedule_text.as_deref(),
            Some("Понедельник 18:00-19:00, Среда 18:00-19:00")
        );
    }

    #[test]
    fn test_missing_price_counts_as_zero() {
        let json = r#"{"id": 1, "name": "ММА", "price_8": 4000}"#;
        let group: SportGroup = serde_json::from_str(json).unwrap();
        assert_eq!(group.price_for(SubscriptionType::Eight), 4000);
        assert_eq!(group.price_for(SubscriptionType::Twelve), 0);
    }
}

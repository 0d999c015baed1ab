//! Discount and contact models

use serde::{Deserialize, Serialize};
use super::null_as_default;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Discount {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub discount_type: String,
    #[serde(default)]
    pub discount_percent: Option<i64>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default = "default_active", deserialize_with = "null_as_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

fn null_as_active<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or_else(default_active))
}

/// Body of `POST /api/admin/discounts`
///
/// `discount_percent` is sent as `null` when the form value is not numeric;
/// the backend decides what that means.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateDiscountRequest {
    pub name: String,
    pub description: String,
    pub discount_type: String,
    pub discount_percent: Option<i64>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub is_active: bool,
}

/// Club contact details from `/api/parent/contact`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub telegram: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_numeric_percent_serializes_null() {
        let request = CreateDiscountRequest {
            name: "Весна".to_string(),
            description: String::new(),
            discount_type: "Сезонная скидка".to_string(),
            discount_percent: None,
            start_date: None,
            end_date: None,
            is_active: true,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert!(value["discount_percent"].is_null());
        assert!(value["start_date"].is_null());
    }

    #[test]
    fn test_discount_defaults_active() {
        let json = r#"{"id": 1, "name": "Семейная", "discount_type": "Семейная скидка", "discount_percent": 10}"#;
        let discount: Discount = serde_json::from_str(json).unwrap();
        assert!(discount.is_active);
    }

    #[test]
    fn test_null_columns_read_as_defaults() {
        let json = r#"{"id": 2, "name": "Весна", "discount_type": null, "is_active": null}"#;
        let discount: Discount = serde_json::from_str(json).unwrap();
        assert!(discount.discount_type.is_empty());
        assert!(discount.is_active);
    }
}

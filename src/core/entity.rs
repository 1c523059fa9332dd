//! Catalog entities as they are stored and exported
//!
//! Field names match the column names of the source tables, so the same
//! types decode SQLite rows, load JSON snapshots and write them back out.

use anyhow::{Result, anyhow};
use serde::{Deserialize, Deserializer, Serialize, de};

/// A named pizza recipe, independent of size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PizzaType {
    pub pizza_type_id: String,
    pub name: String,
    pub category: String,
    pub ingredients: String,
}

/// One purchasable size of a pizza type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pizza {
    pub pizza_id: String,
    pub pizza_type_id: String,
    pub size: String,
    /// Stored either as a number or as decimal text (`"9.50"`)
    #[serde(deserialize_with = "deserialize_price")]
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: i64,
    pub date: String,
    pub time: String,
}

/// One line item (pizza + quantity) within an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderDetail {
    pub order_details_id: i64,
    pub order_id: i64,
    pub pizza_id: String,
    pub quantity: i64,
}

impl PizzaType {
    pub fn new(
        pizza_type_id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        ingredients: impl Into<String>,
    ) -> Self {
        Self {
            pizza_type_id: pizza_type_id.into(),
            name: name.into(),
            category: category.into(),
            ingredients: ingredients.into(),
        }
    }
}

impl Pizza {
    pub fn new(
        pizza_id: impl Into<String>,
        pizza_type_id: impl Into<String>,
        size: impl Into<String>,
        price: f64,
    ) -> Self {
        Self {
            pizza_id: pizza_id.into(),
            pizza_type_id: pizza_type_id.into(),
            size: size.into(),
            price,
        }
    }
}

impl Order {
    pub fn new(order_id: i64, date: impl Into<String>, time: impl Into<String>) -> Self {
        Self {
            order_id,
            date: date.into(),
            time: time.into(),
        }
    }
}

impl OrderDetail {
    pub fn new(
        order_details_id: i64,
        order_id: i64,
        pizza_id: impl Into<String>,
        quantity: i64,
    ) -> Self {
        Self {
            order_details_id,
            order_id,
            pizza_id: pizza_id.into(),
            quantity,
        }
    }
}

/// Parse a price from its stored text form
///
/// Accepts anything `f64` parses after trimming whitespace, but rejects
/// NaN and infinities since they cannot be rendered as a currency amount.
pub fn parse_price(raw: &str) -> Result<f64> {
    let trimmed = raw.trim();
    let value: f64 = trimmed
        .parse()
        .map_err(|e| anyhow!("Invalid price '{}': {}", trimmed, e))?;

    if !value.is_finite() {
        return Err(anyhow!("Invalid price '{}': not a finite number", trimmed));
    }

    Ok(value)
}

fn deserialize_price<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawPrice {
        Number(f64),
        Text(String),
    }

    match RawPrice::deserialize(deserializer)? {
        RawPrice::Number(value) => Ok(value),
        RawPrice::Text(text) => parse_price(&text).map_err(de::Error::custom),
    }
}

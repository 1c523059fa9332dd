//! Catalog aggregation: pure in-memory joins over store collections
//!
//! Nothing here does I/O or caches. Handlers fetch the raw collections and
//! call these functions on every request.

use crate::core::entity::{Order, OrderDetail, Pizza, PizzaType};
use crate::core::error::CatalogError;
use indexmap::IndexMap;
use serde::Serialize;
use std::collections::HashMap;

/// Builds public image paths of the form `<base>/<pizza_type_id>.<ext>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePaths {
    base: String,
    extension: String,
}

impl ImagePaths {
    pub fn new(base: impl Into<String>, extension: impl Into<String>) -> Self {
        let base = base.into();
        let extension = extension.into();
        Self {
            base: base.trim_end_matches('/').to_string(),
            extension: extension.trim_start_matches('.').to_string(),
        }
    }

    pub fn for_pizza_type(&self, pizza_type_id: &str) -> String {
        format!("{}/{}.{}", self.base, pizza_type_id, self.extension)
    }
}

impl Default for ImagePaths {
    fn default() -> Self {
        Self::new("/public/pizzas", "webp")
    }
}

/// Denormalized pizza type with its size/price map
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogEntry {
    pub id: String,
    pub name: String,
    pub category: String,
    pub description: String,
    pub image: String,
    /// size -> price, in first-seen size order
    pub sizes: IndexMap<String, f64>,
}

/// A pizza as it appears on an order line
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderedPizza {
    /// The pizza type id, same as `CatalogEntry::id`
    pub id: String,
    pub name: String,
    pub size: String,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderLine {
    pub quantity: i64,
    pub pizza: OrderedPizza,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderView {
    pub order_id: i64,
    pub date: String,
    pub time: String,
    pub items: Vec<OrderLine>,
    /// Sum of price × quantity, rounded to cents
    pub total: f64,
}

impl OrderView {
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|line| line.quantity).sum()
    }
}

/// Join every pizza type to its size variants
///
/// Output order follows `pizza_types`. Duplicate `(pizza_type_id, size)`
/// rows are last-write-wins on price.
pub fn build_catalog(
    pizza_types: &[PizzaType],
    pizzas: &[Pizza],
    images: &ImagePaths,
) -> Vec<CatalogEntry> {
    let mut sizes_by_type: HashMap<&str, IndexMap<String, f64>> = HashMap::new();
    for pizza in pizzas {
        sizes_by_type
            .entry(pizza.pizza_type_id.as_str())
            .or_default()
            .insert(pizza.size.clone(), pizza.price);
    }

    pizza_types
        .iter()
        .map(|pizza_type| {
            let sizes = sizes_by_type
                .get(pizza_type.pizza_type_id.as_str())
                .cloned()
                .unwrap_or_default();
            shape_entry(pizza_type, sizes, images)
        })
        .collect()
}

/// Build the catalog entry for a single pizza type
pub fn build_catalog_entry(
    pizza_type: &PizzaType,
    pizzas: &[Pizza],
    images: &ImagePaths,
) -> CatalogEntry {
    let mut sizes = IndexMap::new();
    for pizza in pizzas
        .iter()
        .filter(|pizza| pizza.pizza_type_id == pizza_type.pizza_type_id)
    {
        sizes.insert(pizza.size.clone(), pizza.price);
    }
    shape_entry(pizza_type, sizes, images)
}

fn shape_entry(
    pizza_type: &PizzaType,
    sizes: IndexMap<String, f64>,
    images: &ImagePaths,
) -> CatalogEntry {
    CatalogEntry {
        id: pizza_type.pizza_type_id.clone(),
        name: pizza_type.name.clone(),
        category: pizza_type.category.clone(),
        description: pizza_type.ingredients.clone(),
        image: images.for_pizza_type(&pizza_type.pizza_type_id),
        sizes,
    }
}

/// Find an order by id
pub fn find_order(orders: &[Order], order_id: i64) -> Result<&Order, CatalogError> {
    orders
        .iter()
        .find(|order| order.order_id == order_id)
        .ok_or_else(|| CatalogError::order_not_found(order_id.to_string()))
}

/// Resolve the line items of one order against pizzas and pizza types
///
/// Lookups keep the first row for a duplicated key. Any reference that
/// does not resolve fails the whole view with `ReferentialGap`.
pub fn build_order_view(
    order: &Order,
    order_details: &[OrderDetail],
    pizzas: &[Pizza],
    pizza_types: &[PizzaType],
) -> Result<OrderView, CatalogError> {
    let mut pizzas_by_id: HashMap<&str, &Pizza> = HashMap::new();
    for pizza in pizzas {
        pizzas_by_id.entry(pizza.pizza_id.as_str()).or_insert(pizza);
    }
    let mut types_by_id: HashMap<&str, &PizzaType> = HashMap::new();
    for pizza_type in pizza_types {
        types_by_id
            .entry(pizza_type.pizza_type_id.as_str())
            .or_insert(pizza_type);
    }

    let mut items = Vec::new();
    let mut total = 0.0;

    for detail in order_details
        .iter()
        .filter(|detail| detail.order_id == order.order_id)
    {
        let pizza = pizzas_by_id
            .get(detail.pizza_id.as_str())
            .ok_or_else(|| CatalogError::ReferentialGap {
                referrer: format!("order detail {}", detail.order_details_id),
                entity: "pizza",
                key: detail.pizza_id.clone(),
            })?;
        let pizza_type = types_by_id
            .get(pizza.pizza_type_id.as_str())
            .ok_or_else(|| CatalogError::ReferentialGap {
                referrer: format!("pizza '{}'", pizza.pizza_id),
                entity: "pizza type",
                key: pizza.pizza_type_id.clone(),
            })?;

        total += pizza.price * detail.quantity as f64;
        items.push(OrderLine {
            quantity: detail.quantity,
            pizza: OrderedPizza {
                id: pizza_type.pizza_type_id.clone(),
                name: pizza_type.name.clone(),
                size: pizza.size.clone(),
                price: pizza.price,
            },
        });
    }

    Ok(OrderView {
        order_id: order.order_id,
        date: order.date.clone(),
        time: order.time.clone(),
        items,
        total: (total * 100.0).round() / 100.0,
    })
}

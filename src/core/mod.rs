//! Core module containing the catalog model, store trait and pure logic

pub mod catalog;
pub mod daily;
pub mod entity;
pub mod error;
pub mod store;

pub use catalog::{
    CatalogEntry, ImagePaths, OrderLine, OrderView, OrderedPizza, build_catalog,
    build_catalog_entry, build_order_view, find_order,
};
pub use daily::{days_since_epoch, select_pizza_of_the_day};
pub use entity::{Order, OrderDetail, Pizza, PizzaType};
pub use error::{CatalogError, ErrorResponse};
pub use store::CatalogStore;

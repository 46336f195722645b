//! Inventory store domain module.
//!
//! This crate contains the product-list state container and its transition
//! rules, implemented purely as deterministic domain logic (no IO, no HTTP,
//! no storage). A presentation layer renders `products()` and forwards user
//! interactions into the store operations.

pub mod draft;
pub mod inventory;
pub mod notification;
pub mod product;
pub mod store;

pub use draft::Draft;
pub use inventory::{
    AddProduct, Inventory, InventoryCommand, InventoryEvent, InventoryId, ProductAdded,
    ProductRemoved, ProductSold, RemoveProduct, SellProduct,
};
pub use notification::Notification;
pub use product::{Product, ProductId};
pub use store::InventoryStore;

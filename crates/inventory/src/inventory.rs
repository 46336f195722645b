use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use shelfkeeper_core::{Aggregate, AggregateRoot, DomainError};
use shelfkeeper_events::Event;

use crate::product::{Product, ProductId};

/// Identifier of one inventory list (one per session/composition root).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InventoryId(Uuid);

impl InventoryId {
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for InventoryId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for InventoryId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Aggregate root: the ordered product list.
///
/// State evolves only through `apply`; `handle` decides without mutating.
/// List order is insertion order - nothing here reorders, sorts, or dedups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inventory {
    id: InventoryId,
    products: Vec<Product>,
    version: u64,
}

impl Inventory {
    pub fn new() -> Self {
        Self::with_id(InventoryId::new())
    }

    pub fn with_id(id: InventoryId) -> Self {
        Self {
            id,
            products: Vec::new(),
            version: 0,
        }
    }

    pub fn id_typed(&self) -> InventoryId {
        self.id
    }

    /// Products in insertion order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn find(&self, product_id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id_typed() == product_id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new()
    }
}

impl AggregateRoot for Inventory {
    type Id = InventoryId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }
}

/// Command: AddProduct. Carries the raw draft text; parsing and the currency
/// prefix happen at decision time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddProduct {
    pub product_id: ProductId,
    pub name: String,
    pub price: String,
    pub stock: String,
    pub occurred_at: DateTime<Utc>,
}

/// Command: SellProduct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SellProduct {
    pub product_id: ProductId,
    pub occurred_at: DateTime<Utc>,
}

/// Command: RemoveProduct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveProduct {
    pub product_id: ProductId,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InventoryCommand {
    AddProduct(AddProduct),
    SellProduct(SellProduct),
    RemoveProduct(RemoveProduct),
}

/// Event: ProductAdded. Carries the finished record fields: `price` is
/// already currency-prefixed, `stock` already parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductAdded {
    pub product_id: ProductId,
    pub name: String,
    pub price: String,
    pub stock: u32,
    pub occurred_at: DateTime<Utc>,
}

/// Event: ProductSold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSold {
    pub product_id: ProductId,
    pub occurred_at: DateTime<Utc>,
}

/// Event: ProductRemoved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRemoved {
    pub product_id: ProductId,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InventoryEvent {
    ProductAdded(ProductAdded),
    ProductSold(ProductSold),
    ProductRemoved(ProductRemoved),
}

impl Event for InventoryEvent {
    fn event_type(&self) -> &'static str {
        match self {
            InventoryEvent::ProductAdded(_) => "inventory.product.added",
            InventoryEvent::ProductSold(_) => "inventory.product.sold",
            InventoryEvent::ProductRemoved(_) => "inventory.product.removed",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            InventoryEvent::ProductAdded(e) => e.occurred_at,
            InventoryEvent::ProductSold(e) => e.occurred_at,
            InventoryEvent::ProductRemoved(e) => e.occurred_at,
        }
    }
}

impl Aggregate for Inventory {
    type Command = InventoryCommand;
    type Event = InventoryEvent;
    type Error = DomainError;

    fn apply(&mut self, event: &Self::Event) {
        match event {
            InventoryEvent::ProductAdded(e) => {
                self.products.push(Product::new(
                    e.product_id,
                    e.name.clone(),
                    e.price.clone(),
                    e.stock,
                ));
            }
            InventoryEvent::ProductSold(e) => {
                // Unknown ids and zero stock are no-ops; stock never goes
                // below zero.
                if let Some(product) = self
                    .products
                    .iter_mut()
                    .find(|p| p.id_typed() == e.product_id)
                {
                    if product.stock() > 0 {
                        product.decrement_stock();
                    }
                }
            }
            InventoryEvent::ProductRemoved(e) => {
                // No-op on a miss; relative order of survivors is unchanged.
                self.products.retain(|p| p.id_typed() != e.product_id);
            }
        }

        // Deterministic version tracking: +1 per applied event.
        self.version += 1;
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        match command {
            InventoryCommand::AddProduct(cmd) => self.handle_add(cmd),
            InventoryCommand::SellProduct(cmd) => self.handle_sell(cmd),
            InventoryCommand::RemoveProduct(cmd) => self.handle_remove(cmd),
        }
    }
}

impl Inventory {
    fn handle_add(&self, cmd: &AddProduct) -> Result<Vec<InventoryEvent>, DomainError> {
        // Presence check only: whitespace-only text passes.
        if cmd.name.is_empty() || cmd.price.is_empty() || cmd.stock.is_empty() {
            return Err(DomainError::validation(
                "product name, price, and stock quantity are required",
            ));
        }

        let stock: u32 = cmd.stock.trim().parse().map_err(|_| {
            DomainError::validation(format!(
                "stock quantity must be a whole number, got {:?}",
                cmd.stock
            ))
        })?;

        if self.find(cmd.product_id).is_some() {
            return Err(DomainError::invariant("product id already in use"));
        }

        Ok(vec![InventoryEvent::ProductAdded(ProductAdded {
            product_id: cmd.product_id,
            name: cmd.name.clone(),
            price: format!("${}", cmd.price),
            stock,
            occurred_at: cmd.occurred_at,
        })])
    }

    fn handle_sell(&self, cmd: &SellProduct) -> Result<Vec<InventoryEvent>, DomainError> {
        // Total over the input space: no existence or stock check. Unknown
        // ids and zero stock become no-ops at apply time, but the event is
        // still emitted.
        Ok(vec![InventoryEvent::ProductSold(ProductSold {
            product_id: cmd.product_id,
            occurred_at: cmd.occurred_at,
        })])
    }

    fn handle_remove(&self, cmd: &RemoveProduct) -> Result<Vec<InventoryEvent>, DomainError> {
        // Total as well: a miss is a no-op at apply time.
        Ok(vec![InventoryEvent::ProductRemoved(ProductRemoved {
            product_id: cmd.product_id,
            occurred_at: cmd.occurred_at,
        })])
    }
}

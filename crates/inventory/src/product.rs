use core::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use shelfkeeper_core::{DomainError, Entity};

/// Product identifier.
///
/// UUIDv7 (time-ordered), so ids assigned over the life of the process are
/// both unique and monotonic.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(Uuid);

impl ProductId {
    /// Create a fresh identifier.
    ///
    /// Prefer passing ids explicitly in tests for determinism.
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

impl Default for ProductId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<Uuid> for ProductId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<ProductId> for Uuid {
    fn from(value: ProductId) -> Self {
        value.0
    }
}

impl FromStr for ProductId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let uuid = Uuid::from_str(s)
            .map_err(|e| DomainError::invalid_id(format!("ProductId: {e}")))?;
        Ok(Self(uuid))
    }
}

/// One inventory record.
///
/// Created only through `ProductAdded`, mutated only through `ProductSold`
/// (stock decrement, floored at zero), destroyed only through
/// `ProductRemoved`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    price: String,
    stock: u32,
    sold: bool,
}

impl Product {
    pub(crate) fn new(id: ProductId, name: String, price: String, stock: u32) -> Self {
        Self {
            id,
            name,
            price,
            stock,
            sold: false,
        }
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Display price, currency symbol included (e.g. "$20"). Fixed at
    /// creation and never re-parsed.
    pub fn price(&self) -> &str {
        &self.price
    }

    pub fn stock(&self) -> u32 {
        self.stock
    }

    /// Flag carried on every record but never transitioned; always `false`.
    pub fn sold(&self) -> bool {
        self.sold
    }

    pub fn is_out_of_stock(&self) -> bool {
        self.stock == 0
    }

    pub(crate) fn decrement_stock(&mut self) {
        self.stock = self.stock.saturating_sub(1);
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

use serde::{Deserialize, Serialize};

use shelfkeeper_core::ValueObject;

/// Transient unsaved form state for a not-yet-created product.
///
/// Three raw text fields mirroring the form inputs. Cleared to empty strings
/// after a successful add; left untouched by a failed one. Never part of the
/// product list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    name: String,
    price: String,
    stock: String,
}

impl Draft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_name(&mut self, text: impl Into<String>) {
        self.name = text.into();
    }

    pub fn set_price(&mut self, text: impl Into<String>) {
        self.price = text.into();
    }

    pub fn set_stock(&mut self, text: impl Into<String>) {
        self.stock = text.into();
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> &str {
        &self.price
    }

    /// Raw stock text; parsed only when the add is attempted.
    pub fn stock(&self) -> &str {
        &self.stock
    }

    /// Presence check only: every field holds at least one character.
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.price.is_empty() && !self.stock.is_empty()
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.price.clear();
        self.stock.clear();
    }
}

impl ValueObject for Draft {}

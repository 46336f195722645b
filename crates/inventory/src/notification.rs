use serde::{Deserialize, Serialize};

use crate::product::ProductId;

/// User-facing outcome of a store operation.
///
/// Carried as data; the presentation layer owns the rendering (the `title`
/// and `message` pairs map onto a modal alert, a toast, or whatever the UI
/// stack provides).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Notification {
    /// An add was rejected; the product list is unchanged.
    AddRejected { reason: String },

    /// A sell was dispatched. Emitted even when the sell changed nothing
    /// (unknown id, or a product already at zero stock).
    ProductSold { product_id: ProductId },

    /// A remove was dispatched. Emitted even on a miss.
    ProductRemoved { product_id: ProductId },
}

impl Notification {
    pub fn title(&self) -> &'static str {
        match self {
            Notification::AddRejected { .. } => "Error",
            Notification::ProductSold { .. } => "Success",
            Notification::ProductRemoved { .. } => "Removed",
        }
    }

    pub fn message(&self) -> String {
        match self {
            Notification::AddRejected { reason } => reason.clone(),
            Notification::ProductSold { .. } => "Product marked as sold.".to_string(),
            Notification::ProductRemoved { .. } => "Product has been removed.".to_string(),
        }
    }
}

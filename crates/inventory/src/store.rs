use chrono::Utc;

use shelfkeeper_core::{Aggregate, AggregateRoot, DomainResult};
use shelfkeeper_events::NotificationSink;

use crate::draft::Draft;
use crate::inventory::{
    AddProduct, Inventory, InventoryCommand, RemoveProduct, SellProduct,
};
use crate::notification::Notification;
use crate::product::{Product, ProductId};

/// The inventory store: the composition-root state container.
///
/// Owns the product list, the pending-entry draft, and the notification sink.
/// All operations are synchronous and run to completion; the presentation
/// layer forwards user interactions here and re-renders from `products()`
/// (watching `version()` for changes).
#[derive(Debug)]
pub struct InventoryStore<S> {
    inventory: Inventory,
    draft: Draft,
    sink: S,
}

impl<S> InventoryStore<S>
where
    S: NotificationSink<Notification>,
{
    pub fn new(sink: S) -> Self {
        Self {
            inventory: Inventory::new(),
            draft: Draft::new(),
            sink,
        }
    }

    /// Draft-field update: product name text.
    pub fn set_name(&mut self, text: impl Into<String>) {
        self.draft.set_name(text);
    }

    /// Draft-field update: raw price text (no parsing).
    pub fn set_price(&mut self, text: impl Into<String>) {
        self.draft.set_price(text);
    }

    /// Draft-field update: raw stock quantity text.
    pub fn set_stock(&mut self, text: impl Into<String>) {
        self.draft.set_stock(text);
    }

    /// Create a product from the current draft and append it to the list.
    ///
    /// On success the draft resets to empty strings and the new id is
    /// returned. On failure the list and the draft are both left unchanged,
    /// an `AddRejected` notification is emitted, and the error is returned.
    pub fn add_product(&mut self) -> DomainResult<ProductId> {
        let product_id = ProductId::new();
        let cmd = InventoryCommand::AddProduct(AddProduct {
            product_id,
            name: self.draft.name().to_owned(),
            price: self.draft.price().to_owned(),
            stock: self.draft.stock().to_owned(),
            occurred_at: Utc::now(),
        });

        let events = match self.inventory.handle(&cmd) {
            Ok(events) => events,
            Err(err) => {
                tracing::warn!(error = %err, "add rejected");
                self.sink.notify(Notification::AddRejected {
                    reason: err.to_string(),
                });
                return Err(err);
            }
        };

        for event in &events {
            self.inventory.apply(event);
        }
        self.draft.clear();
        tracing::info!(product_id = %product_id, products = self.inventory.len(), "product added");

        Ok(product_id)
    }

    /// Decrement the product's stock by one (floored at zero).
    ///
    /// The `ProductSold` notification is emitted unconditionally - also for
    /// unknown ids and for products already at zero stock.
    pub fn sell_product(&mut self, product_id: ProductId) -> DomainResult<()> {
        let cmd = InventoryCommand::SellProduct(SellProduct {
            product_id,
            occurred_at: Utc::now(),
        });

        let events = self.inventory.handle(&cmd)?;
        for event in &events {
            self.inventory.apply(event);
        }
        self.sink.notify(Notification::ProductSold { product_id });
        tracing::info!(product_id = %product_id, "sell dispatched");

        Ok(())
    }

    /// Remove the product with the given id (no-op on a miss).
    ///
    /// The `ProductRemoved` notification is emitted unconditionally.
    pub fn remove_product(&mut self, product_id: ProductId) -> DomainResult<()> {
        let cmd = InventoryCommand::RemoveProduct(RemoveProduct {
            product_id,
            occurred_at: Utc::now(),
        });

        let events = self.inventory.handle(&cmd)?;
        for event in &events {
            self.inventory.apply(event);
        }
        self.sink.notify(Notification::ProductRemoved { product_id });
        tracing::info!(product_id = %product_id, products = self.inventory.len(), "remove dispatched");

        Ok(())
    }

    /// Current product list in insertion order, for rendering rows.
    pub fn products(&self) -> &[Product] {
        self.inventory.products()
    }

    /// Current unsaved form state.
    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// State version; bumps once per applied event. A presentation binding
    /// re-renders when this changes.
    pub fn version(&self) -> u64 {
        self.inventory.version()
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}

impl<S> Default for InventoryStore<S>
where
    S: NotificationSink<Notification> + Default,
{
    fn default() -> Self {
        Self::new(S::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use shelfkeeper_core::DomainError;
    use shelfkeeper_events::RecordingSink;

    fn store() -> InventoryStore<RecordingSink<Notification>> {
        InventoryStore::new(RecordingSink::new())
    }

    fn fill_draft(store: &mut InventoryStore<RecordingSink<Notification>>, name: &str, price: &str, stock: &str) {
        store.set_name(name);
        store.set_price(price);
        store.set_stock(stock);
    }

    #[test]
    fn successful_add_appends_and_resets_the_draft() {
        let mut store = store();
        fill_draft(&mut store, "Shirt", "20", "5");

        let product_id = store.add_product().unwrap();

        assert_eq!(store.products().len(), 1);
        let product = &store.products()[0];
        assert_eq!(product.id_typed(), product_id);
        assert_eq!(product.name(), "Shirt");
        assert_eq!(product.price(), "$20");
        assert_eq!(product.stock(), 5);
        assert!(!product.sold());

        assert_eq!(store.draft(), &Draft::new());
        // No success notification for add; only failures notify.
        assert!(store.sink().is_empty());
    }

    #[test]
    fn failed_add_keeps_list_and_draft_and_notifies_error() {
        let mut store = store();
        fill_draft(&mut store, "Shirt", "", "5");

        let err = store.add_product().unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            other => panic!("expected Validation, got {other:?}"),
        }

        assert!(store.products().is_empty());
        assert_eq!(store.draft().name(), "Shirt");
        assert_eq!(store.draft().stock(), "5");

        let notifications = store.sink().drain();
        assert_eq!(notifications.len(), 1);
        match &notifications[0] {
            Notification::AddRejected { .. } => {
                assert_eq!(notifications[0].title(), "Error");
            }
            other => panic!("expected AddRejected, got {other:?}"),
        }
    }

    #[test]
    fn non_numeric_stock_text_rejects_the_add() {
        let mut store = store();
        fill_draft(&mut store, "Shirt", "20", "many");

        assert!(store.add_product().is_err());
        assert!(store.products().is_empty());
        assert_eq!(store.sink().len(), 1);
    }

    #[test]
    fn sell_decrements_and_notifies_success() {
        let mut store = store();
        fill_draft(&mut store, "Shirt", "20", "5");
        let product_id = store.add_product().unwrap();

        store.sell_product(product_id).unwrap();

        assert_eq!(store.products()[0].stock(), 4);
        let notifications = store.sink().drain();
        assert_eq!(
            notifications,
            vec![Notification::ProductSold { product_id }]
        );
        assert_eq!(notifications[0].message(), "Product marked as sold.");
    }

    #[test]
    fn sell_at_zero_stock_notifies_anyway() {
        let mut store = store();
        fill_draft(&mut store, "Shirt", "20", "0");
        let product_id = store.add_product().unwrap();

        store.sell_product(product_id).unwrap();

        assert_eq!(store.products()[0].stock(), 0);
        assert_eq!(
            store.sink().drain(),
            vec![Notification::ProductSold { product_id }]
        );
    }

    #[test]
    fn sell_unknown_id_notifies_anyway() {
        let mut store = store();
        let unknown = ProductId::new();

        store.sell_product(unknown).unwrap();

        assert!(store.products().is_empty());
        assert_eq!(
            store.sink().drain(),
            vec![Notification::ProductSold {
                product_id: unknown
            }]
        );
    }

    #[test]
    fn remove_deletes_and_notifies() {
        let mut store = store();
        fill_draft(&mut store, "Shirt", "20", "5");
        let product_id = store.add_product().unwrap();

        store.remove_product(product_id).unwrap();

        assert!(store.products().is_empty());
        let notifications = store.sink().drain();
        assert_eq!(
            notifications,
            vec![Notification::ProductRemoved { product_id }]
        );
        assert_eq!(notifications[0].message(), "Product has been removed.");
    }

    #[test]
    fn remove_unknown_id_is_a_noop_but_notifies() {
        let mut store = store();
        fill_draft(&mut store, "Shirt", "20", "5");
        let kept = store.add_product().unwrap();

        store.remove_product(ProductId::new()).unwrap();

        assert_eq!(store.products().len(), 1);
        assert_eq!(store.products()[0].id_typed(), kept);
        assert_eq!(store.sink().len(), 1);
    }

    #[test]
    fn version_tracks_applied_events_only() {
        let mut store = store();
        assert_eq!(store.version(), 0);

        fill_draft(&mut store, "Shirt", "", "5");
        let _ = store.add_product();
        // Rejected add applies nothing.
        assert_eq!(store.version(), 0);

        fill_draft(&mut store, "Shirt", "20", "5");
        let product_id = store.add_product().unwrap();
        assert_eq!(store.version(), 1);

        store.sell_product(product_id).unwrap();
        assert_eq!(store.version(), 2);
    }
}

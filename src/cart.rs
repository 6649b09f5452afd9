use crate::codec;
use crate::config::CartConfig;
use crate::error::{CartError, OrderError};
use crate::models::{CartView, LineItem, LineView, OrderRequest, OrderStatus};
use crate::receipt::Receipt;
use crate::storage::KeyValueStore;
use crate::validation;

/// Owns the cart lines and the order flag, and mirrors the cart into `S`.
pub struct CartManager<S: KeyValueStore> {
    cart: Vec<LineItem>,
    status: OrderStatus,
    receipt: Option<Receipt>,
    store: S,
    config: CartConfig,
}

impl<S: KeyValueStore> CartManager<S> {
    /// Restore the cart persisted under the configured key.
    ///
    /// Missing, unreadable or malformed content starts an empty cart.
    pub fn load(store: S, config: CartConfig) -> Self {
        let cart = match store.get(&config.storage_key) {
            Ok(Some(raw)) => match codec::decode(&raw) {
                Ok(items) => {
                    tracing::debug!(lines = items.len(), "Restored persisted cart");
                    items
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Discarding malformed persisted cart");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, "Could not read persisted cart, starting empty");
                Vec::new()
            }
        };

        CartManager {
            cart,
            status: OrderStatus::Open,
            receipt: None,
            store,
            config,
        }
    }

    pub fn items(&self) -> &[LineItem] {
        &self.cart
    }

    pub fn len(&self) -> usize {
        self.cart.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn is_confirmed(&self) -> bool {
        self.status == OrderStatus::Confirmed
    }

    /// Receipt of the last confirmed order, held until reset.
    pub fn receipt(&self) -> Option<&Receipt> {
        self.receipt.as_ref()
    }

    pub fn config(&self) -> &CartConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn compute_total(&self) -> f64 {
        self.cart.iter().map(LineItem::subtotal).sum()
    }

    pub fn view(&self) -> CartView {
        CartView {
            items: self.cart.iter().map(LineView::from).collect(),
            total: self.compute_total(),
            item_count: self.cart.iter().map(|item| u64::from(item.quantity)).sum(),
            order_confirmed: self.is_confirmed(),
        }
    }

    pub fn add_item(&mut self, name: &str, price: f64) -> Result<(), CartError> {
        if name.trim().is_empty() {
            return Err(CartError::InvalidItem("item name is empty".to_string()));
        }
        if !price.is_finite() || price < 0.0 {
            return Err(CartError::InvalidItem(format!(
                "price {} for {} must be a non-negative number",
                price, name
            )));
        }

        match self.cart.iter().position(|item| item.name == name) {
            Some(index) => self.bump_quantity(index)?,
            None => self.cart.push(LineItem::new(name, price)),
        }

        tracing::debug!(name, price, "Added item to cart");
        self.persist();
        Ok(())
    }

    pub fn remove_item(&mut self, index: usize) -> Result<(), CartError> {
        self.check_index(index)?;

        let removed = self.cart.remove(index);
        tracing::debug!(name = %removed.name, index, "Removed item from cart");
        self.persist();
        Ok(())
    }

    pub fn increase_quantity(&mut self, index: usize) -> Result<(), CartError> {
        self.check_index(index)?;

        self.bump_quantity(index)?;
        self.persist();
        Ok(())
    }

    /// Decrease by one; a line at quantity 1 is removed instead of reaching zero.
    pub fn decrease_quantity(&mut self, index: usize) -> Result<(), CartError> {
        self.check_index(index)?;

        if self.cart[index].quantity > 1 {
            self.cart[index].quantity -= 1;
        } else {
            let removed = self.cart.remove(index);
            tracing::debug!(name = %removed.name, "Quantity reached zero, line removed");
        }
        self.persist();
        Ok(())
    }

    /// Validate the order against the current cart, then snapshot it into a
    /// receipt and clear the cart.
    ///
    /// On error nothing is modified.
    pub fn confirm_order(&mut self, request: &OrderRequest) -> Result<Receipt, OrderError> {
        if self.cart.is_empty() {
            return Err(OrderError::EmptyCart);
        }
        let details = validation::validate_request(request, &self.config.serving_window)?;

        let receipt = Receipt::new(&self.cart, self.compute_total(), details);

        self.status = OrderStatus::Confirmed;
        self.cart.clear();
        self.purge();
        self.receipt = Some(receipt.clone());

        tracing::info!(
            order_type = %receipt.order_type(),
            lines = receipt.lines.len(),
            total = receipt.total,
            "Order confirmed"
        );
        Ok(receipt)
    }

    pub fn reset_order(&mut self) {
        self.status = OrderStatus::Open;
        self.receipt = None;
        self.cart.clear();
        self.purge();

        tracing::info!("Order reset");
    }

    fn check_index(&self, index: usize) -> Result<(), CartError> {
        if index >= self.cart.len() {
            return Err(CartError::IndexOutOfRange {
                index,
                len: self.cart.len(),
            });
        }
        Ok(())
    }

    fn bump_quantity(&mut self, index: usize) -> Result<(), CartError> {
        let item = &mut self.cart[index];
        item.quantity = item
            .quantity
            .checked_add(1)
            .ok_or_else(|| CartError::QuantityOverflow {
                name: item.name.clone(),
            })?;
        Ok(())
    }

    // Write failures leave the in-memory cart authoritative; they are logged, not returned.
    fn persist(&self) {
        let encoded = match codec::encode(&self.cart) {
            Ok(encoded) => encoded,
            Err(e) => {
                tracing::warn!(error = %e, "Could not encode cart");
                return;
            }
        };

        if let Err(e) = self.store.set(&self.config.storage_key, &encoded) {
            tracing::warn!(error = %e, "Could not persist cart");
        }
    }

    fn purge(&self) {
        if let Err(e) = self.store.remove(&self.config.storage_key) {
            tracing::warn!(error = %e, "Could not remove persisted cart");
        }
    }
}

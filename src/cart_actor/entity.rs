use tracing::{debug, instrument};

use super::actions::CartAction;
use super::persistence::CartPersistence;
use crate::actor_framework::{Store, Transition};
use crate::domain::{CartItem, CartSnapshot};

/// Authoritative cart for the current session.
///
/// Holds at most one entry per product id. Every mutation is written
/// through to session storage before it is published.
#[derive(Debug)]
pub struct CartStore {
    items: Vec<CartItem>,
    persistence: CartPersistence,
}

impl CartStore {
    /// Creates the store, seeded from whatever the persistence layer can restore.
    pub fn restore(persistence: CartPersistence) -> Self {
        let items = persistence.load();
        Self { items, persistence }
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    fn position(&self, product_id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.product_id == product_id)
    }

    fn add_item(&mut self, product_id: String, quantity: i64) {
        match self.position(&product_id) {
            Some(index) => {
                let item = &mut self.items[index];
                item.quantity = item.quantity.saturating_add(quantity);
            }
            None => self.items.push(CartItem { product_id, quantity }),
        }
    }

    fn remove_item(&mut self, product_id: &str) {
        self.items.retain(|item| item.product_id != product_id);
    }

    fn update_quantity(&mut self, product_id: &str, quantity: i64) {
        if quantity <= 0 {
            self.remove_item(product_id);
        } else if let Some(index) = self.position(product_id) {
            self.items[index].quantity = quantity;
        }
    }
}

impl Store for CartStore {
    const NAME: &'static str = "cart";
    type State = CartSnapshot;
    type Action = CartAction;

    fn snapshot(&self) -> CartSnapshot {
        self.items.as_slice().into()
    }

    /// Applies a cart mutation and persists the result.
    ///
    /// # Actions
    /// - `AddItem`: increments an existing entry or appends a new one
    /// - `RemoveItem`: drops the entry if present
    /// - `UpdateQuantity`: sets the quantity, removing the entry when it is not positive
    /// - `Clear`: empties the cart and erases the stored copy
    #[instrument(name = "cart_reduce", skip(self))]
    fn reduce(&mut self, action: CartAction) -> Transition {
        match action {
            CartAction::AddItem { product_id, quantity } => self.add_item(product_id, quantity),
            CartAction::RemoveItem { product_id } => self.remove_item(&product_id),
            CartAction::UpdateQuantity { product_id, quantity } => {
                self.update_quantity(&product_id, quantity)
            }
            CartAction::Clear => {
                self.items.clear();
                self.persistence.erase();
                debug!("Cart cleared");
                return Transition::Changed;
            }
        }

        self.persistence.save(&self.items);
        debug!(entries = self.items.len(), "Cart updated");
        Transition::Changed
    }
}

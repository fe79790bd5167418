use std::sync::Arc;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Product;

/// A (product reference, quantity) pair in the cart.
///
/// The product id is not required to resolve; stale ids show up as
/// "no product" in the derived views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub product_id: String,
    pub quantity: i64,
}

impl CartItem {
    pub fn new(product_id: impl Into<String>, quantity: i64) -> Self {
        Self {
            product_id: product_id.into(),
            quantity,
        }
    }
}

/// Immutable cart value published to observers after every mutation.
pub type CartSnapshot = Arc<[CartItem]>;

/// Aggregate figures over the current cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CartStats {
    pub item_count: i64,
    pub total_price: Decimal,
}

/// A cart entry joined with its product, if the product still exists.
#[derive(Debug, Clone, PartialEq)]
pub struct CartItemView {
    pub item: CartItem,
    pub product: Option<Product>,
}

impl CartItemView {
    /// Price of this line, zero when the product no longer resolves.
    pub fn line_total(&self) -> Decimal {
        self.product
            .as_ref()
            .map(|product| line_price(product.price, self.item.quantity))
            .unwrap_or(Decimal::ZERO)
    }
}

/// `price × quantity`, clamped to the `Decimal` range instead of overflowing.
pub fn line_price(price: Decimal, quantity: i64) -> Decimal {
    let quantity = Decimal::from(quantity);
    price
        .checked_mul(quantity)
        .unwrap_or_else(|| saturated(price.is_sign_negative() != quantity.is_sign_negative()))
}

/// Running total that clamps to the `Decimal` range instead of overflowing.
pub fn saturating_total(total: Decimal, amount: Decimal) -> Decimal {
    total
        .checked_add(amount)
        .unwrap_or_else(|| saturated(amount.is_sign_negative()))
}

fn saturated(negative: bool) -> Decimal {
    if negative {
        Decimal::MIN
    } else {
        Decimal::MAX
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_price_clamps_instead_of_overflowing() {
        let price = Decimal::new(10_000_000_000, 0);
        assert_eq!(line_price(price, i64::MAX), Decimal::MAX);
        assert_eq!(line_price(price, i64::MIN), Decimal::MIN);
        assert_eq!(line_price(Decimal::new(24999, 2), 2), Decimal::new(49998, 2));
    }

    #[test]
    fn totals_clamp_at_the_decimal_range() {
        assert_eq!(saturating_total(Decimal::MAX, Decimal::ONE), Decimal::MAX);
        assert_eq!(saturating_total(Decimal::MIN, Decimal::NEGATIVE_ONE), Decimal::MIN);
        assert_eq!(saturating_total(Decimal::MAX, Decimal::NEGATIVE_ONE), Decimal::MAX - Decimal::ONE);
    }

    #[test]
    fn line_total_of_a_saturated_line_does_not_panic() {
        let view = CartItemView {
            item: CartItem::new("p1", i64::MAX),
            product: Some(Product::new("p1", "Vault", Decimal::new(10_000_000_000, 0))),
        };
        assert_eq!(view.line_total(), Decimal::MAX);
    }
}

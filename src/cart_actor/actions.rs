/// Mutations the cart store understands.
///
/// None of them can fail. Operations on a product that is not in the cart
/// are no-ops.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartAction {
    /// Adds `quantity` to the entry for `product_id`, creating it if needed.
    ///
    /// The resulting quantity is not checked, so a negative `quantity` can
    /// leave a non-positive entry behind.
    AddItem { product_id: String, quantity: i64 },
    /// Removes the entry for `product_id`.
    RemoveItem { product_id: String },
    /// Sets the quantity of an existing entry. `quantity <= 0` removes it.
    UpdateQuantity { product_id: String, quantity: i64 },
    /// Empties the cart and erases the stored copy.
    Clear,
}

/// Quantity used when a product is added without an explicit amount.
pub const DEFAULT_ADD_QUANTITY: i64 = 1;

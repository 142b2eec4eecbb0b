//! # Cart Module
//!
//! Cart lines and the cart aggregate.
//!
//! ## Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  Cart (one per checkout session, the only mutable thing here)       │
//! │  ├── CartItem { product, quantity: 2, line_total: ₹438.00 }         │
//! │  ├── CartItem { product, quantity: 1, line_total: ₹120.00 }         │
//! │  └── ...                                                            │
//! │                                                                     │
//! │  CartItem itself is immutable: quantity changes return a new line   │
//! │  with the line total recomputed from the product's price.           │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A deactivated product cannot enter a cart, but deactivation does not
//! retroactively invalidate a line that already holds it. Quantity updates
//! do not re-check availability.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{CartError, CartResult};
use crate::money::Money;
use crate::pricing;
use crate::product::{Product, ProductId};
use crate::validation::validate_quantity;

// =============================================================================
// Cart Item Id
// =============================================================================

/// Identifier for a cart line, assigned by whatever aggregates the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CartItemId {
    /// Not yet persisted.
    Unassigned,
    /// Persisted under this row id.
    Assigned(i64),
}

// =============================================================================
// Cart Item
// =============================================================================

/// A product bound to a quantity, with a derived line total.
///
/// Invariants: `quantity > 0`, `line_total = price × quantity`, and the
/// product was available for sale when the line was created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    id: CartItemId,
    product: Product,
    quantity: i64,
    line_total: Money,
}

impl CartItem {
    /// Creates a cart line from an available product and a positive quantity.
    ///
    /// ## Example
    /// ```rust
    /// use rust_decimal::Decimal;
    /// use vendo_core::cart::CartItem;
    /// use vendo_core::money::Money;
    /// use vendo_core::product::Product;
    ///
    /// let price = Money::inr(Decimal::from(219))?;
    /// let kulfi = Product::create("Mango Kulfi", price, "Desserts", "", None)?;
    ///
    /// let line = CartItem::create(kulfi, 2)?;
    /// assert_eq!(line.line_total().format(), "₹438.00");
    /// # Ok::<(), vendo_core::CoreError>(())
    /// ```
    pub fn create(product: Product, quantity: i64) -> CartResult<Self> {
        if !product.is_available_for_sale() {
            return Err(CartError::ProductUnavailable {
                name: product.name().to_string(),
            });
        }
        validate_quantity(quantity)?;

        let line_total = Self::line_total_for(&product, quantity)?;
        Ok(CartItem {
            id: CartItemId::Unassigned,
            product,
            quantity,
            line_total,
        })
    }

    /// The aggregator-assigned identifier.
    pub const fn id(&self) -> CartItemId {
        self.id
    }

    /// The product snapshot this line was built from.
    pub const fn product(&self) -> &Product {
        &self.product
    }

    /// Units of the product on this line.
    pub const fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Derived total: unit price × quantity.
    pub const fn line_total(&self) -> Money {
        self.line_total
    }

    /// Line total rendered for a receipt, e.g. `₹438.00`.
    pub fn formatted_line_total(&self) -> String {
        self.line_total.format()
    }

    /// Returns a new line with the quantity replaced and the total recomputed.
    ///
    /// Availability is NOT re-checked: once a product is in the cart, a
    /// concurrent deactivation does not invalidate the line.
    pub fn update_quantity(&self, new_quantity: i64) -> CartResult<Self> {
        validate_quantity(new_quantity)?;
        let line_total = Self::line_total_for(&self.product, new_quantity)?;
        Ok(CartItem {
            id: self.id,
            product: self.product.clone(),
            quantity: new_quantity,
            line_total,
        })
    }

    /// Returns a new line with `by` more units.
    pub fn increase_quantity(&self, by: i64) -> CartResult<Self> {
        self.update_quantity(self.quantity + by)
    }

    /// Returns a new line with `by` fewer units, flooring at 1.
    ///
    /// Removing the last unit is a cart operation (remove the line), not a
    /// line operation, so this path can never reach zero.
    pub fn decrease_quantity(&self, by: i64) -> CartResult<Self> {
        self.update_quantity((self.quantity - by).max(1))
    }

    /// Checks whether two lines refer to the same persisted product.
    ///
    /// Lines holding unsaved products (`ProductId::Unassigned`) never match,
    /// even against each other; two distinct unsaved products must not merge.
    pub fn is_same_product(&self, other: &CartItem) -> bool {
        self.product.id().is_assigned() && self.product.id() == other.product.id()
    }

    fn line_total_for(product: &Product, quantity: i64) -> CartResult<Money> {
        // Quantity is validated positive before this runs, so the factor is
        // always a valid multiplier.
        product
            .price()
            .multiply(Decimal::from(quantity))
            .map_err(|_| CartError::InvalidQuantity {
                requested: quantity,
            })
    }
}

// =============================================================================
// Cart
// =============================================================================

/// A checkout session's set of cart lines.
///
/// The one mutable type in the crate: a cart belongs to exactly one session,
/// so interior mutability and locking are unnecessary. Duplicate products
/// merge into a single line on add.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Creates an empty cart.
    pub fn new() -> Self {
        Cart::default()
    }

    /// Adds a product, merging into an existing line for the same product.
    pub fn add_product(&mut self, product: Product, quantity: i64) -> CartResult<()> {
        let candidate = CartItem::create(product, quantity)?;

        if let Some(existing) = self
            .items
            .iter_mut()
            .find(|line| line.is_same_product(&candidate))
        {
            *existing = existing.increase_quantity(quantity)?;
        } else {
            self.items.push(candidate);
        }
        Ok(())
    }

    /// Removes the line for a product, if present.
    pub fn remove_product(&mut self, product_id: ProductId) {
        self.items
            .retain(|line| line.product().id() != product_id);
    }

    /// Sets the quantity on a product's line; zero or less removes the line.
    pub fn update_quantity(&mut self, product_id: ProductId, quantity: i64) -> CartResult<()> {
        if quantity <= 0 {
            self.remove_product(product_id);
            return Ok(());
        }

        if let Some(line) = self
            .items
            .iter_mut()
            .find(|line| line.product().id() == product_id)
        {
            *line = line.update_quantity(quantity)?;
        }
        Ok(())
    }

    /// Empties the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// The cart lines, in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Total units across all lines (not the line count).
    pub fn item_count(&self) -> i64 {
        pricing::item_count(&self.items)
    }

    /// Checks if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Checks if a product already has a line.
    pub fn has_product(&self, product_id: ProductId) -> bool {
        self.items
            .iter()
            .any(|line| line.product().id() == product_id)
    }

    /// Units of a product in the cart (0 when absent).
    pub fn product_quantity(&self, product_id: ProductId) -> i64 {
        self.items
            .iter()
            .find(|line| line.product().id() == product_id)
            .map_or(0, CartItem::quantity)
    }

    /// Sum of all line totals.
    ///
    /// Fails on an empty cart or when lines span multiple currencies.
    pub fn subtotal(&self) -> crate::error::PricingResult<Money> {
        pricing::subtotal(&self.items)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PricingError;

    fn product(id: i64, name: &str, rupees: i64) -> Product {
        Product::create(
            name,
            Money::inr(Decimal::from(rupees)).unwrap(),
            "Desserts",
            "",
            None,
        )
        .unwrap()
        .with_id(id)
    }

    #[test]
    fn test_create_derives_line_total() {
        let line = CartItem::create(product(1, "Mango Kulfi", 219), 2).unwrap();
        assert_eq!(line.quantity(), 2);
        assert_eq!(line.line_total(), Money::inr(Decimal::from(438)).unwrap());
        assert_eq!(line.formatted_line_total(), "₹438.00");
        assert_eq!(line.id(), CartItemId::Unassigned);
    }

    #[test]
    fn test_create_rejects_unavailable_product() {
        let inactive = product(1, "Mango Kulfi", 219).toggle_status();
        assert_eq!(
            CartItem::create(inactive, 1),
            Err(CartError::ProductUnavailable {
                name: "Mango Kulfi".to_string()
            })
        );
    }

    #[test]
    fn test_create_rejects_non_positive_quantity() {
        let p = product(1, "Mango Kulfi", 219);
        assert!(matches!(
            CartItem::create(p.clone(), 0),
            Err(CartError::InvalidQuantity { requested: 0 })
        ));
        assert!(matches!(
            CartItem::create(p, -1),
            Err(CartError::InvalidQuantity { requested: -1 })
        ));
    }

    #[test]
    fn test_update_quantity_recomputes_total() {
        let line = CartItem::create(product(1, "Falooda", 120), 1).unwrap();
        let updated = line.update_quantity(3).unwrap();

        assert_eq!(updated.quantity(), 3);
        assert_eq!(updated.line_total(), Money::inr(Decimal::from(360)).unwrap());
        assert_eq!(line.quantity(), 1); // original untouched

        assert!(line.update_quantity(0).is_err());
    }

    #[test]
    fn test_update_quantity_skips_availability_recheck() {
        // A line built before deactivation stays valid afterwards.
        let line = CartItem::create(product(1, "Falooda", 120), 1).unwrap();
        let deactivated_line = CartItem {
            id: line.id,
            product: line.product.toggle_status(),
            quantity: line.quantity,
            line_total: line.line_total,
        };
        assert!(deactivated_line.update_quantity(5).is_ok());
    }

    #[test]
    fn test_increase_and_decrease() {
        let line = CartItem::create(product(1, "Falooda", 120), 2).unwrap();

        assert_eq!(line.increase_quantity(1).unwrap().quantity(), 3);
        assert_eq!(line.decrease_quantity(1).unwrap().quantity(), 1);

        // Decrease floors at 1, it never removes the line.
        assert_eq!(line.decrease_quantity(10).unwrap().quantity(), 1);
    }

    #[test]
    fn test_is_same_product() {
        let a = CartItem::create(product(1, "Kulfi", 219), 1).unwrap();
        let b = CartItem::create(product(1, "Kulfi", 219), 3).unwrap();
        let c = CartItem::create(product(2, "Falooda", 120), 1).unwrap();

        assert!(a.is_same_product(&b));
        assert!(!a.is_same_product(&c));

        // Unsaved products never merge, even with themselves.
        let unsaved = Product::create(
            "Draft",
            Money::inr(Decimal::from(10)).unwrap(),
            "Misc",
            "",
            None,
        )
        .unwrap();
        let d = CartItem::create(unsaved.clone(), 1).unwrap();
        let e = CartItem::create(unsaved, 1).unwrap();
        assert!(!d.is_same_product(&e));
    }

    #[test]
    fn test_cart_merges_duplicate_products() {
        let mut cart = Cart::new();
        cart.add_product(product(1, "Kulfi", 219), 2).unwrap();
        cart.add_product(product(1, "Kulfi", 219), 1).unwrap();
        cart.add_product(product(2, "Falooda", 120), 1).unwrap();

        assert_eq!(cart.items().len(), 2);
        assert_eq!(cart.product_quantity(ProductId::Assigned(1)), 3);
        assert_eq!(cart.item_count(), 4);
    }

    #[test]
    fn test_cart_remove_and_update() {
        let mut cart = Cart::new();
        cart.add_product(product(1, "Kulfi", 219), 2).unwrap();
        cart.add_product(product(2, "Falooda", 120), 1).unwrap();

        cart.update_quantity(ProductId::Assigned(1), 5).unwrap();
        assert_eq!(cart.product_quantity(ProductId::Assigned(1)), 5);

        // Zero quantity removes the line.
        cart.update_quantity(ProductId::Assigned(2), 0).unwrap();
        assert!(!cart.has_product(ProductId::Assigned(2)));

        cart.remove_product(ProductId::Assigned(1));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_cart_subtotal() {
        let mut cart = Cart::new();
        cart.add_product(product(1, "Kulfi", 219), 2).unwrap();
        cart.add_product(product(2, "Falooda", 120), 1).unwrap();

        assert_eq!(
            cart.subtotal().unwrap(),
            Money::inr(Decimal::from(558)).unwrap()
        );

        cart.clear();
        assert_eq!(cart.subtotal(), Err(PricingError::EmptyCart));
    }
}

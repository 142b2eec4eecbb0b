//! # Product Entity
//!
//! An immutable sellable item with validated construction.
//!
//! ## Immutable-Value Mutation Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  There are no setters. Every "mutation" returns a NEW Product and   │
//! │  re-runs validation, so an invalid Product can never exist:         │
//! │                                                                     │
//! │    let p  = Product::create(...)?;        // is_active = true       │
//! │    let p2 = p.update_price(new_price)?;   // p untouched            │
//! │    let p3 = p2.toggle_status();           // p2 untouched           │
//! │                                                                     │
//! │  Callers that hold a Product hold a snapshot. A price change made   │
//! │  elsewhere mid-checkout is invisible here; staleness is the         │
//! │  caller's concern, not this type's.                                 │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ProductResult;
use crate::money::Money;
use crate::validation::{validate_category, validate_price, validate_product_name};

// =============================================================================
// Product Id
// =============================================================================

/// Identifier for a product, assigned by persistence.
///
/// A freshly created product is `Unassigned` until the repository saves it
/// and hands back an `Assigned` copy. An explicit variant instead of a
/// sentinel `0` keeps an unsaved product from colliding with a real row id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductId {
    /// Not yet persisted.
    Unassigned,
    /// Persisted under this row id.
    Assigned(i64),
}

impl ProductId {
    /// Checks whether persistence has assigned an id yet.
    pub const fn is_assigned(&self) -> bool {
        matches!(self, ProductId::Assigned(_))
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product available for sale.
///
/// Invariants, enforced by every constructor and mutator:
/// - `name` is non-empty
/// - `price` is strictly positive
/// - `category` is non-empty
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    price: Money,
    category: String,
    description: String,
    is_active: bool,
    image_ref: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Product {
    /// Creates a new, active, not-yet-persisted product.
    ///
    /// ## Example
    /// ```rust
    /// use rust_decimal::Decimal;
    /// use vendo_core::money::Money;
    /// use vendo_core::product::Product;
    ///
    /// let price = Money::inr(Decimal::from(219))?;
    /// let kulfi = Product::create("Mango Kulfi", price, "Desserts", "", None)?;
    ///
    /// assert!(kulfi.is_available_for_sale());
    /// assert!(!kulfi.id().is_assigned());
    /// # Ok::<(), vendo_core::CoreError>(())
    /// ```
    pub fn create(
        name: &str,
        price: Money,
        category: &str,
        description: &str,
        image_ref: Option<String>,
    ) -> ProductResult<Self> {
        validate_product_name(name)?;
        validate_price(&price)?;
        validate_category(category)?;

        let now = Utc::now();
        Ok(Product {
            id: ProductId::Unassigned,
            name: name.trim().to_string(),
            price,
            category: category.trim().to_string(),
            description: description.to_string(),
            is_active: true,
            image_ref,
            created_at: now,
            updated_at: now,
        })
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    /// The persistence-assigned identifier.
    pub const fn id(&self) -> ProductId {
        self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unit price.
    pub const fn price(&self) -> Money {
        self.price
    }

    /// Category name.
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Free-form description (may be empty).
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Active flag (soft delete).
    pub const fn is_active(&self) -> bool {
        self.is_active
    }

    /// Optional image reference (URL or asset key).
    pub fn image_ref(&self) -> Option<&str> {
        self.image_ref.as_deref()
    }

    /// Creation timestamp.
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Timestamp of the last logical mutation.
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    // -------------------------------------------------------------------------
    // Predicates
    // -------------------------------------------------------------------------

    /// Checks if the product can be added to a cart.
    pub const fn is_available_for_sale(&self) -> bool {
        self.is_active
    }

    /// Checks if the product has a non-empty image reference.
    pub fn has_image(&self) -> bool {
        self.image_ref
            .as_deref()
            .is_some_and(|r| !r.trim().is_empty())
    }

    // -------------------------------------------------------------------------
    // Mutations (return new instances)
    // -------------------------------------------------------------------------

    /// Returns a copy with the price changed and `updated_at` refreshed.
    pub fn update_price(&self, new_price: Money) -> ProductResult<Self> {
        validate_price(&new_price)?;
        Ok(Product {
            price: new_price,
            updated_at: Utc::now(),
            ..self.clone()
        })
    }

    /// Returns a copy with the active flag flipped.
    ///
    /// Always succeeds; deactivation is how products are soft-deleted.
    pub fn toggle_status(&self) -> Self {
        Product {
            is_active: !self.is_active,
            updated_at: Utc::now(),
            ..self.clone()
        }
    }

    /// Returns a copy with name, category and description replaced.
    ///
    /// Re-validates name and category under the same rules as
    /// [`Product::create`].
    pub fn update_info(&self, name: &str, category: &str, description: &str) -> ProductResult<Self> {
        validate_product_name(name)?;
        validate_category(category)?;
        Ok(Product {
            name: name.trim().to_string(),
            category: category.trim().to_string(),
            description: description.to_string(),
            updated_at: Utc::now(),
            ..self.clone()
        })
    }

    /// Returns a copy with the image reference replaced.
    pub fn update_image(&self, image_ref: Option<String>) -> Self {
        Product {
            image_ref,
            updated_at: Utc::now(),
            ..self.clone()
        }
    }

    /// Returns a copy carrying the id persistence assigned on save.
    ///
    /// Repository implementations call this when handing back a saved row.
    pub fn with_id(&self, id: i64) -> Self {
        Product {
            id: ProductId::Assigned(id),
            ..self.clone()
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProductError;
    use crate::money::Currency;
    use rust_decimal::Decimal;

    fn kulfi() -> Product {
        let price = Money::inr(Decimal::from(219)).unwrap();
        Product::create("Mango Kulfi", price, "Desserts", "Stick kulfi", None).unwrap()
    }

    #[test]
    fn test_create_defaults() {
        let p = kulfi();
        assert_eq!(p.id(), ProductId::Unassigned);
        assert!(p.is_active());
        assert!(p.is_available_for_sale());
        assert_eq!(p.created_at(), p.updated_at());
    }

    #[test]
    fn test_create_rejects_invalid_fields() {
        let price = Money::inr(Decimal::from(100)).unwrap();

        assert_eq!(
            Product::create("", price, "cat", "", None),
            Err(ProductError::InvalidName)
        );
        assert_eq!(
            Product::create("Name", price, "  ", "", None),
            Err(ProductError::InvalidCategory)
        );

        let zero = Money::zero(Currency::INR);
        assert_eq!(
            Product::create("Name", zero, "cat", "", None),
            Err(ProductError::InvalidPrice)
        );
    }

    #[test]
    fn test_create_trims_name_and_category() {
        let price = Money::inr(Decimal::from(100)).unwrap();
        let p = Product::create("  Falooda  ", price, " Drinks ", "", None).unwrap();
        assert_eq!(p.name(), "Falooda");
        assert_eq!(p.category(), "Drinks");
    }

    #[test]
    fn test_update_price() {
        let p = kulfi();
        let new_price = Money::inr(Decimal::from(249)).unwrap();

        let updated = p.update_price(new_price).unwrap();
        assert_eq!(updated.price(), new_price);
        assert_eq!(p.price(), Money::inr(Decimal::from(219)).unwrap()); // original untouched
        assert!(updated.updated_at() >= p.updated_at());

        let zero = Money::zero(Currency::INR);
        assert_eq!(p.update_price(zero), Err(ProductError::InvalidPrice));
    }

    #[test]
    fn test_toggle_status_twice_is_identity_except_updated_at() {
        let p = kulfi();
        let toggled = p.toggle_status();
        assert!(!toggled.is_available_for_sale());

        let back = toggled.toggle_status();
        assert_eq!(back.id(), p.id());
        assert_eq!(back.name(), p.name());
        assert_eq!(back.price(), p.price());
        assert_eq!(back.category(), p.category());
        assert_eq!(back.description(), p.description());
        assert_eq!(back.is_active(), p.is_active());
        assert_eq!(back.image_ref(), p.image_ref());
        assert_eq!(back.created_at(), p.created_at());
    }

    #[test]
    fn test_update_info_revalidates() {
        let p = kulfi();

        let updated = p.update_info("Pista Kulfi", "Desserts", "Pistachio").unwrap();
        assert_eq!(updated.name(), "Pista Kulfi");
        assert_eq!(updated.description(), "Pistachio");

        assert_eq!(
            p.update_info("", "Desserts", ""),
            Err(ProductError::InvalidName)
        );
        assert_eq!(
            p.update_info("Name", "", ""),
            Err(ProductError::InvalidCategory)
        );
    }

    #[test]
    fn test_update_image_and_has_image() {
        let p = kulfi();
        assert!(!p.has_image());

        let with_image = p.update_image(Some("assets/kulfi.png".to_string()));
        assert!(with_image.has_image());
        assert_eq!(with_image.image_ref(), Some("assets/kulfi.png"));

        // Whitespace-only refs do not count as an image.
        let blank = p.update_image(Some("   ".to_string()));
        assert!(!blank.has_image());

        let cleared = with_image.update_image(None);
        assert!(!cleared.has_image());
    }

    #[test]
    fn test_with_id_assigns_identity() {
        let p = kulfi();
        let saved = p.with_id(42);
        assert_eq!(saved.id(), ProductId::Assigned(42));
        assert!(saved.id().is_assigned());
        assert_eq!(saved.name(), p.name());
    }
}

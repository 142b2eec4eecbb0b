//! # Validation Module
//!
//! Field-level validation shared by the entity constructors.
//!
//! ## Validation Strategy
//! Every constructor and mutator in this crate validates eagerly, at the
//! point of construction, so an invalid entity can never exist. The checks
//! themselves live here so `Product::create` and `Product::update_info`
//! agree on what a valid name is, and so the pricing service and any future
//! API layer agree on what a valid tax rate is.
//!
//! ## Usage
//! ```rust
//! use rust_decimal::Decimal;
//! use vendo_core::validation::{validate_product_name, validate_tax_rate};
//!
//! assert!(validate_product_name("Mango Kulfi").is_ok());
//! assert!(validate_product_name("   ").is_err());
//!
//! assert!(validate_tax_rate(Decimal::from(18)).is_ok());
//! assert!(validate_tax_rate(Decimal::from(150)).is_err());
//! ```

use rust_decimal::Decimal;

use crate::error::{
    CartError, CartResult, PricingError, PricingResult, ProductError, ProductResult,
};
use crate::money::Money;

// =============================================================================
// Product Field Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty or whitespace-only
pub fn validate_product_name(name: &str) -> ProductResult<()> {
    if name.trim().is_empty() {
        return Err(ProductError::InvalidName);
    }
    Ok(())
}

/// Validates a product category.
///
/// ## Rules
/// - Must not be empty or whitespace-only
pub fn validate_category(category: &str) -> ProductResult<()> {
    if category.trim().is_empty() {
        return Err(ProductError::InvalidCategory);
    }
    Ok(())
}

/// Validates a product price.
///
/// ## Rules
/// - Must be strictly positive; a free item is not a sellable product
pub fn validate_price(price: &Money) -> ProductResult<()> {
    if price.amount() <= Decimal::ZERO {
        return Err(ProductError::InvalidPrice);
    }
    Ok(())
}

// =============================================================================
// Cart Field Validators
// =============================================================================

/// Validates a cart line quantity.
///
/// ## Rules
/// - Must be positive (> 0); a zero-quantity line is a removal, which is the
///   cart aggregate's job, not the line's
pub fn validate_quantity(quantity: i64) -> CartResult<()> {
    if quantity <= 0 {
        return Err(CartError::InvalidQuantity {
            requested: quantity,
        });
    }
    Ok(())
}

// =============================================================================
// Pricing Field Validators
// =============================================================================

/// Validates a tax rate expressed in percent.
///
/// ## Rules
/// - Must be between 0 and 100 inclusive
pub fn validate_tax_rate(rate_percent: Decimal) -> PricingResult<()> {
    if rate_percent < Decimal::ZERO || rate_percent > Decimal::ONE_HUNDRED {
        return Err(PricingError::InvalidTaxRate { rate: rate_percent });
    }
    Ok(())
}

/// Validates a percentage discount value.
///
/// ## Rules
/// - Must be between 0 and 100 inclusive
pub fn validate_discount_percentage(percentage: Decimal) -> PricingResult<()> {
    if percentage < Decimal::ZERO || percentage > Decimal::ONE_HUNDRED {
        return Err(PricingError::InvalidDiscountPercentage { percentage });
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("Rose Falooda").is_ok());
        assert_eq!(validate_product_name(""), Err(ProductError::InvalidName));
        assert_eq!(validate_product_name("   "), Err(ProductError::InvalidName));
    }

    #[test]
    fn test_validate_category() {
        assert!(validate_category("Desserts").is_ok());
        assert_eq!(validate_category(""), Err(ProductError::InvalidCategory));
    }

    #[test]
    fn test_validate_price() {
        let positive = Money::inr(Decimal::from(219)).unwrap();
        assert!(validate_price(&positive).is_ok());

        let zero = Money::zero(Currency::INR);
        assert_eq!(validate_price(&zero), Err(ProductError::InvalidPrice));
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(999).is_ok());

        assert_eq!(
            validate_quantity(0),
            Err(CartError::InvalidQuantity { requested: 0 })
        );
        assert_eq!(
            validate_quantity(-3),
            Err(CartError::InvalidQuantity { requested: -3 })
        );
    }

    #[test]
    fn test_validate_tax_rate() {
        assert!(validate_tax_rate(Decimal::ZERO).is_ok());
        assert!(validate_tax_rate(Decimal::from(18)).is_ok());
        assert!(validate_tax_rate(Decimal::ONE_HUNDRED).is_ok());

        assert!(validate_tax_rate(Decimal::from(-1)).is_err());
        assert!(validate_tax_rate(Decimal::from(150)).is_err());
    }

    #[test]
    fn test_validate_discount_percentage() {
        assert!(validate_discount_percentage(Decimal::from(10)).is_ok());
        assert!(validate_discount_percentage(Decimal::from(101)).is_err());
        assert!(validate_discount_percentage(Decimal::from(-5)).is_err());
    }
}

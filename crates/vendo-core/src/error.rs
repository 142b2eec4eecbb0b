//! # Error Types
//!
//! Domain-specific error types for vendo-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                          Error Types                                │
//! │                                                                     │
//! │  vendo-core errors (this file)                                      │
//! │  ├── MoneyError     - Currency-safe arithmetic failures             │
//! │  ├── ProductError   - Product invariant violations                  │
//! │  ├── CartError      - Cart line invariant violations                │
//! │  ├── PricingError   - Order calculation failures                    │
//! │  └── CoreError      - Aggregate of all of the above                 │
//! │                                                                     │
//! │  Storage adapter errors live in their own crates and flow through   │
//! │  ProductRepository::Error, never through this file.                 │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (currency codes, amounts, etc.)
//! 3. Errors are enum variants, never String
//! 4. Every variant is a *validation* failure: a failed construction means
//!    "do not build this object", nothing is retried or recovered

use rust_decimal::Decimal;
use thiserror::Error;

// =============================================================================
// Money Errors
// =============================================================================

/// Failures from currency-safe monetary arithmetic.
///
/// `Money` never clamps: an operation that would violate the non-negative
/// invariant fails instead. The one deliberate clamp in the system (flat
/// discounts capped at the subtotal) lives in the pricing service as a
/// business rule, not here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    /// Amount was negative at construction.
    #[error("money amount cannot be negative: {amount}")]
    InvalidAmount { amount: Decimal },

    /// Currency code is not a 3-letter code.
    #[error("currency code must be exactly 3 letters, got '{code}'")]
    InvalidCurrency { code: String },

    /// Two values with different currencies were combined or compared.
    #[error("cannot operate on mismatched currencies: {left} vs {right}")]
    CurrencyMismatch { left: String, right: String },

    /// Subtraction would have produced a negative amount.
    #[error("subtraction would result in a negative amount")]
    NegativeResult,

    /// Multiplication factor was negative.
    #[error("multiplication factor cannot be negative: {factor}")]
    InvalidFactor { factor: Decimal },

    /// Division divisor was zero or negative.
    #[error("division divisor must be positive: {divisor}")]
    InvalidDivisor { divisor: Decimal },
}

// =============================================================================
// Product Errors
// =============================================================================

/// Product invariant violations.
///
/// Raised eagerly by `Product::create` and every mutator, so an invalid
/// `Product` can never exist.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProductError {
    /// Product name is empty or whitespace.
    #[error("product name is required and cannot be empty")]
    InvalidName,

    /// Product price is not strictly positive.
    #[error("product price must be greater than zero")]
    InvalidPrice,

    /// Product category is empty or whitespace.
    #[error("product category is required and cannot be empty")]
    InvalidCategory,
}

// =============================================================================
// Cart Errors
// =============================================================================

/// Cart line invariant violations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    /// The product is deactivated and cannot be added to a cart.
    #[error("product '{name}' is not available for sale")]
    ProductUnavailable { name: String },

    /// Quantity is zero or negative.
    #[error("cart item quantity must be greater than zero, got {requested}")]
    InvalidQuantity { requested: i64 },
}

// =============================================================================
// Pricing Errors
// =============================================================================

/// Order calculation failures.
///
/// Currency mismatches discovered while summing cart lines surface through
/// the `Money` variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PricingError {
    /// Calculation was requested for an empty cart.
    #[error("cart items are required for calculation")]
    EmptyCart,

    /// Discount amount is negative.
    #[error("discount amount cannot be negative")]
    NegativeDiscount,

    /// Delivery charge is negative.
    #[error("delivery charge cannot be negative")]
    NegativeDeliveryCharge,

    /// Tax rate is outside 0-100 percent.
    #[error("tax rate must be between 0 and 100 percent, got {rate}")]
    InvalidTaxRate { rate: Decimal },

    /// Percentage discount is outside 0-100.
    #[error("percentage discount must be between 0 and 100, got {percentage}")]
    InvalidDiscountPercentage { percentage: Decimal },

    /// Monetary arithmetic failed (e.g. mixed currencies in one cart).
    #[error(transparent)]
    Money(#[from] MoneyError),
}

// =============================================================================
// Core Error
// =============================================================================

/// Aggregate error for callers that drive the whole core.
///
/// Checkout flows touch money, products, cart lines and the pricing service
/// in one pass; this lets them use a single error type with `?`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error(transparent)]
    Money(#[from] MoneyError),

    #[error(transparent)]
    Product(#[from] ProductError),

    #[error(transparent)]
    Cart(#[from] CartError),

    #[error(transparent)]
    Pricing(#[from] PricingError),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience alias for Results with MoneyError.
pub type MoneyResult<T> = Result<T, MoneyError>;

/// Convenience alias for Results with ProductError.
pub type ProductResult<T> = Result<T, ProductError>;

/// Convenience alias for Results with CartError.
pub type CartResult<T> = Result<T, CartError>;

/// Convenience alias for Results with PricingError.
pub type PricingResult<T> = Result<T, PricingError>;

/// Convenience alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

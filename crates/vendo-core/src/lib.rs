//! # vendo-core: Pure Pricing Logic for Vendo POS
//!
//! This crate is the **heart** of Vendo POS: the order pricing core, as pure
//! functions and immutable values with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Vendo POS Architecture                        │
//! │                                                                     │
//! │  ┌─────────────────────────────────────────────────────────────┐    │
//! │  │        UI / API layers (out of scope, other crates)         │    │
//! │  │   catalog ──► cart building ──► checkout ──► receipt        │    │
//! │  └────────────────────────────┬────────────────────────────────┘    │
//! │                               │                                     │
//! │  ┌────────────────────────────▼────────────────────────────────┐    │
//! │  │              ★ vendo-core (THIS CRATE) ★                    │    │
//! │  │                                                             │    │
//! │  │  ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌──────────┐           │    │
//! │  │  │  money  │ │ product │ │  cart   │ │ pricing  │           │    │
//! │  │  │  Money  │ │ Product │ │CartItem │ │ discount │           │    │
//! │  │  │Currency │ │ProductId│ │  Cart   │ │ tax/total│           │    │
//! │  │  └─────────┘ └─────────┘ └─────────┘ └──────────┘           │    │
//! │  │                                                             │    │
//! │  │  NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS         │    │
//! │  └────────────────────────────┬────────────────────────────────┘    │
//! │                               │ ProductRepository contract          │
//! │  ┌────────────────────────────▼────────────────────────────────┐    │
//! │  │      Storage adapters (out of scope, other crates)          │    │
//! │  └─────────────────────────────────────────────────────────────┘    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - `Money` and `Currency`: non-negative, currency-safe amounts
//! - [`product`] - `Product`: immutable sellable item with validated mutations
//! - [`cart`] - `CartItem` lines and the `Cart` aggregate
//! - [`pricing`] - the order calculation service
//! - [`repository`] - the async persistence contract (never called here)
//! - [`error`] - typed domain errors
//! - [`validation`] - shared field validators
//!
//! ## Design Principles
//!
//! 1. **Immutable values**: "mutations" return new instances; there are no
//!    setters, so concurrent checkout sessions cannot observe each other
//! 2. **Eager validation**: constructors fail instead of building invalid
//!    entities; an invalid `Product` or `Money` can never exist
//! 3. **Exact arithmetic**: decimal money, full-precision intermediates,
//!    one rounding step when final totals are emitted
//! 4. **Explicit errors**: typed enums, never strings or panics; the only
//!    deliberate clamp is the flat-discount cap, a documented business rule
//!
//! ## Example Usage
//!
//! ```rust
//! use rust_decimal::Decimal;
//! use vendo_core::cart::CartItem;
//! use vendo_core::money::{Currency, Money};
//! use vendo_core::pricing::{calculate_order, Discount};
//! use vendo_core::product::Product;
//!
//! let kulfi = Product::create(
//!     "Mango Kulfi",
//!     Money::inr(Decimal::from(219))?,
//!     "Desserts",
//!     "Stick kulfi",
//!     None,
//! )?;
//!
//! let items = vec![CartItem::create(kulfi, 2)?];
//! let totals = calculate_order(
//!     &items,
//!     &Discount::flat(Money::zero(Currency::INR)),
//!     Decimal::from(18),
//!     Money::zero(Currency::INR),
//! )?;
//!
//! assert_eq!(totals.total_amount.format(), "₹516.84");
//! # Ok::<(), vendo_core::CoreError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod money;
pub mod pricing;
pub mod product;
pub mod repository;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use vendo_core::Money` instead of
// `use vendo_core::money::Money`.

pub use cart::{Cart, CartItem, CartItemId};
pub use error::{
    CartError, CartResult, CoreError, CoreResult, MoneyError, MoneyResult, PricingError,
    PricingResult, ProductError, ProductResult,
};
pub use money::{Currency, Money};
pub use pricing::{calculate_order, Discount, DiscountKind, OrderTotals};
pub use product::{Product, ProductId};
pub use repository::{
    PriceRange, ProductFilters, ProductRepository, ProductSearchCriteria, ProductStatistics,
    SortBy, SortOrder,
};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Default currency for the single-currency deployments this core ships in.
///
/// The domain model carries currencies everywhere so mixing them fails
/// loudly, but every deployed till today runs a single currency; callers
/// that have nothing better to offer use this one.
pub const DEFAULT_CURRENCY: Currency = Currency::INR;

//! # Pricing Module
//!
//! The stateless order calculation service.
//!
//! ## Calculation Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  cart lines ──► subtotal (Σ line totals, one currency enforced)     │
//! │                     │                                               │
//! │                     ▼                                               │
//! │  discount ─────► min(flat, subtotal)  OR  subtotal × pct/100        │
//! │                     │                                               │
//! │                     ▼                                               │
//! │  taxable = subtotal − discount                                      │
//! │  tax     = taxable × rate/100                                       │
//! │  total   = taxable + tax + delivery                                 │
//! │                                                                     │
//! │  Intermediates carry full precision; each emitted figure is         │
//! │  rounded to 2 dp once, and the totals invariants hold on the        │
//! │  rounded values.                                                    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Pure functions, no state: any number of checkout sessions can call in
//! parallel. The flat-discount cap at the subtotal is the single deliberate
//! clamp in the crate; it is a business rule, not an arithmetic error.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::cart::CartItem;
use crate::error::{PricingError, PricingResult};
use crate::money::Money;
use crate::validation::{validate_discount_percentage, validate_tax_rate};

// =============================================================================
// Discount
// =============================================================================

/// How a discount value is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscountKind {
    /// A fixed amount off the subtotal, capped at the subtotal.
    Flat,
    /// A proportion of the subtotal, expressed 0-100.
    Percentage,
}

/// A discount to apply to an order.
///
/// For `Percentage`, the money's amount carries the percentage value itself
/// (e.g. `₹10.00` means 10%); its currency is ignored. Both kinds come from
/// the same till input field, which is why they share a representation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Discount {
    pub amount: Money,
    pub kind: DiscountKind,
}

impl Discount {
    /// A fixed amount off the subtotal.
    pub const fn flat(amount: Money) -> Self {
        Discount {
            amount,
            kind: DiscountKind::Flat,
        }
    }

    /// A percentage (0-100) off the subtotal.
    pub const fn percentage(value: Money) -> Self {
        Discount {
            amount: value,
            kind: DiscountKind::Percentage,
        }
    }
}

// =============================================================================
// Order Totals
// =============================================================================

/// The itemized result of an order calculation.
///
/// Always the full breakdown, never just the total: receipts print every
/// line. All figures are rounded to 2 decimal places, and the invariants
/// `taxable = subtotal − discount` and `total = taxable + tax + delivery`
/// hold on the rounded values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrderTotals {
    pub subtotal: Money,
    pub discount_amount: Money,
    pub taxable_amount: Money,
    pub tax_amount: Money,
    pub delivery_charge: Money,
    pub total_amount: Money,
}

// =============================================================================
// Order Calculation
// =============================================================================

/// Calculates the full itemized totals for an order.
///
/// ## Arguments
/// * `items` - cart lines; must be non-empty and single-currency
/// * `discount` - flat or percentage discount (see [`Discount`])
/// * `tax_rate_percent` - tax rate in percent, 0-100 inclusive
/// * `delivery_charge` - flat surcharge added after tax; pass zero money
///   for non-delivery orders (that policy belongs to the caller)
///
/// ## Example
/// ```rust
/// use rust_decimal::Decimal;
/// use vendo_core::cart::CartItem;
/// use vendo_core::money::{Currency, Money};
/// use vendo_core::pricing::{calculate_order, Discount};
/// use vendo_core::product::Product;
///
/// let kulfi = Product::create(
///     "Mango Kulfi",
///     Money::inr(Decimal::from(219))?,
///     "Desserts",
///     "",
///     None,
/// )?;
/// let items = vec![CartItem::create(kulfi, 2)?];
///
/// let totals = calculate_order(
///     &items,
///     &Discount::flat(Money::zero(Currency::INR)),
///     Decimal::from(18),
///     Money::zero(Currency::INR),
/// )?;
///
/// assert_eq!(totals.subtotal.format(), "₹438.00");
/// assert_eq!(totals.tax_amount.format(), "₹78.84");
/// assert_eq!(totals.total_amount.format(), "₹516.84");
/// # Ok::<(), vendo_core::CoreError>(())
/// ```
pub fn calculate_order(
    items: &[CartItem],
    discount: &Discount,
    tax_rate_percent: Decimal,
    delivery_charge: Money,
) -> PricingResult<OrderTotals> {
    // Money construction forbids negative amounts, but values deserialized
    // straight from storage bypass the factory; re-check at the boundary.
    if discount.amount.amount() < Decimal::ZERO {
        return Err(PricingError::NegativeDiscount);
    }
    if delivery_charge.amount() < Decimal::ZERO {
        return Err(PricingError::NegativeDeliveryCharge);
    }
    validate_tax_rate(tax_rate_percent)?;

    let subtotal = subtotal(items)?.rounded();

    let discount_amount = apply_discount(subtotal, discount)?.rounded();

    // Non-negative by the clamp above; rounding is monotonic so the rounded
    // discount still cannot exceed the rounded subtotal.
    let taxable_amount = subtotal.subtract(discount_amount)?;

    let tax_amount = taxable_amount
        .multiply(tax_rate_percent / Decimal::ONE_HUNDRED)?
        .rounded();

    let delivery_charge = delivery_charge.rounded();
    let total_amount = taxable_amount.add(tax_amount)?.add(delivery_charge)?;

    Ok(OrderTotals {
        subtotal,
        discount_amount,
        taxable_amount,
        tax_amount,
        delivery_charge,
        total_amount,
    })
}

/// Sums all line totals in the cart's currency.
///
/// Fails with [`PricingError::EmptyCart`] on an empty slice and with a
/// currency mismatch when lines span multiple currencies — the core never
/// guesses a conversion.
pub fn subtotal(items: &[CartItem]) -> PricingResult<Money> {
    let first = items.first().ok_or(PricingError::EmptyCart)?;

    let mut sum = Money::zero(first.line_total().currency());
    for item in items {
        sum = sum.add(item.line_total())?;
    }
    Ok(sum)
}

fn apply_discount(subtotal: Money, discount: &Discount) -> PricingResult<Money> {
    match discount.kind {
        DiscountKind::Flat => {
            // A flat discount can never exceed the subtotal. Clamped, not an
            // error: "₹150 off" on a ₹100 order is a free order, not a bug.
            if subtotal.is_less_than(&discount.amount)? {
                Ok(subtotal)
            } else {
                Ok(discount.amount)
            }
        }
        DiscountKind::Percentage => {
            let percentage = discount.amount.amount();
            validate_discount_percentage(percentage)?;
            Ok(subtotal.multiply(percentage / Decimal::ONE_HUNDRED)?)
        }
    }
}

// =============================================================================
// Cart Queries
// =============================================================================

/// Total units across all lines (sum of quantities, not the line count).
pub fn item_count(items: &[CartItem]) -> i64 {
    items.iter().map(CartItem::quantity).sum()
}

/// Average unit price across the cart: subtotal ÷ total units.
///
/// Fails with [`PricingError::EmptyCart`] on an empty cart rather than
/// dividing by zero.
pub fn average_item_price(items: &[CartItem]) -> PricingResult<Money> {
    let total = subtotal(items)?;
    let count = item_count(items);
    Ok(total.divide(Decimal::from(count))?)
}

/// Checks whether a subtotal meets a free-delivery threshold (inclusive).
pub fn qualifies_for_free_delivery(subtotal: &Money, threshold: &Money) -> PricingResult<bool> {
    Ok(subtotal.is_greater_than(threshold)? || subtotal.equals(threshold)?)
}

// =============================================================================
// Unit Tests
// =============================================================================

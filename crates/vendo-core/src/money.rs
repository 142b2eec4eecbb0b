//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Decimal Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                         │
//! │                                                                     │
//! │  In binary floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                       │
//! │                                                                     │
//! │  OUR SOLUTION: exact decimal arithmetic (rust_decimal)              │
//! │    ₹438.00 × 18% = ₹78.84, exactly                                  │
//! │                                                                     │
//! │  Derived amounts (discount, tax) are computed in FULL precision     │
//! │  and rounded to 2 decimal places only when the final order totals   │
//! │  are produced, so rounding error never compounds.                   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use rust_decimal::Decimal;
//! use vendo_core::money::{Currency, Money};
//!
//! let price = Money::new(Decimal::new(21900, 2), Currency::INR)?;
//! let line = price.multiply(Decimal::from(2))?;
//!
//! assert_eq!(line.format(), "₹438.00");
//! # Ok::<(), vendo_core::MoneyError>(())
//! ```

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{MoneyError, MoneyResult};

// =============================================================================
// Currency
// =============================================================================

/// A validated 3-letter currency code.
///
/// Stored as three ASCII bytes, uppercased at construction. The pricing core
/// never converts between currencies; `Currency` exists so that mixing them
/// fails loudly instead of summing rupees into dollars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Currency([u8; 3]);

impl Currency {
    /// Indian Rupee.
    pub const INR: Currency = Currency(*b"INR");
    /// US Dollar.
    pub const USD: Currency = Currency(*b"USD");
    /// Euro.
    pub const EUR: Currency = Currency(*b"EUR");
    /// Pound Sterling.
    pub const GBP: Currency = Currency(*b"GBP");

    /// Creates a currency from a 3-letter code.
    ///
    /// ## Example
    /// ```rust
    /// use vendo_core::money::Currency;
    ///
    /// assert!(Currency::new("INR").is_ok());
    /// assert!(Currency::new("inr").is_ok()); // uppercased
    /// assert!(Currency::new("RUPEE").is_err());
    /// assert!(Currency::new("").is_err());
    /// ```
    pub fn new(code: &str) -> MoneyResult<Self> {
        let bytes = code.as_bytes();
        if bytes.len() != 3 || !bytes.iter().all(u8::is_ascii_alphabetic) {
            return Err(MoneyError::InvalidCurrency {
                code: code.to_string(),
            });
        }

        let mut upper = [0u8; 3];
        for (dst, src) in upper.iter_mut().zip(bytes) {
            *dst = src.to_ascii_uppercase();
        }
        Ok(Currency(upper))
    }

    /// Returns the 3-letter code.
    pub fn code(&self) -> &str {
        // Construction guarantees ASCII, so this cannot fail.
        std::str::from_utf8(&self.0).unwrap_or("???")
    }

    /// Returns the display symbol for known currencies, or the code itself.
    pub fn symbol(&self) -> &str {
        match &self.0 {
            b"INR" => "₹",
            b"USD" => "$",
            b"EUR" => "€",
            b"GBP" => "£",
            _ => self.code(),
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl TryFrom<String> for Currency {
    type Error = MoneyError;

    fn try_from(code: String) -> MoneyResult<Self> {
        Currency::new(&code)
    }
}

impl From<Currency> for String {
    fn from(currency: Currency) -> Self {
        currency.code().to_string()
    }
}

// =============================================================================
// Money
// =============================================================================

/// A non-negative monetary amount tagged with a currency.
///
/// ## Design Decisions
/// - **Immutable**: every operation returns a *new* value, nothing mutates
/// - **Non-negative**: operations that would go below zero fail, they never
///   silently clamp (the flat-discount cap in the pricing service is the one
///   documented business-rule exception, and it lives there, not here)
/// - **Currency-safe**: arithmetic and comparison across currencies fail
///   with [`MoneyError::CurrencyMismatch`]
///
/// ## Where Money Flows
/// ```text
/// Product.price ──► CartItem.line_total ──► subtotal
///                                              │
///                        discount / tax / delivery
///                                              │
///                                              ▼
///                                     OrderTotals.total_amount
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    amount: Decimal,
    currency: Currency,
}

impl Money {
    /// Creates a money value after validating the amount.
    ///
    /// ## Example
    /// ```rust
    /// use rust_decimal::Decimal;
    /// use vendo_core::money::{Currency, Money};
    ///
    /// let price = Money::new(Decimal::new(1050, 2), Currency::USD)?;
    /// assert_eq!(price.format(), "$10.50");
    ///
    /// assert!(Money::new(Decimal::from(-1), Currency::USD).is_err());
    /// # Ok::<(), vendo_core::MoneyError>(())
    /// ```
    pub fn new(amount: Decimal, currency: Currency) -> MoneyResult<Self> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(MoneyError::InvalidAmount { amount });
        }
        Ok(Money { amount, currency })
    }

    /// Zero in the given currency.
    pub const fn zero(currency: Currency) -> Self {
        Money {
            amount: Decimal::ZERO,
            currency,
        }
    }

    /// Convenience factory for INR amounts.
    pub fn inr(amount: Decimal) -> MoneyResult<Self> {
        Money::new(amount, Currency::INR)
    }

    /// Convenience factory for USD amounts.
    pub fn usd(amount: Decimal) -> MoneyResult<Self> {
        Money::new(amount, Currency::USD)
    }

    /// Returns the raw amount.
    pub const fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns the currency.
    pub const fn currency(&self) -> Currency {
        self.currency
    }

    /// Checks if the amount is zero.
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Adds another value of the same currency.
    pub fn add(self, other: Money) -> MoneyResult<Self> {
        self.require_same_currency(&other)?;
        Ok(Money {
            amount: self.amount + other.amount,
            currency: self.currency,
        })
    }

    /// Subtracts another value of the same currency.
    ///
    /// Fails with [`MoneyError::NegativeResult`] rather than clamping when
    /// the result would drop below zero.
    pub fn subtract(self, other: Money) -> MoneyResult<Self> {
        self.require_same_currency(&other)?;
        if self.amount < other.amount {
            return Err(MoneyError::NegativeResult);
        }
        Ok(Money {
            amount: self.amount - other.amount,
            currency: self.currency,
        })
    }

    /// Multiplies by a non-negative factor.
    ///
    /// The factor is a plain number, not money: quantities (`price × 3`) and
    /// rates (`taxable × 0.18`) both come through here. The result keeps
    /// full precision; round it explicitly with [`Money::rounded`] when
    /// producing a final figure.
    pub fn multiply(self, factor: Decimal) -> MoneyResult<Self> {
        if factor.is_sign_negative() && !factor.is_zero() {
            return Err(MoneyError::InvalidFactor { factor });
        }
        Ok(Money {
            amount: self.amount * factor,
            currency: self.currency,
        })
    }

    /// Divides by a positive divisor.
    pub fn divide(self, divisor: Decimal) -> MoneyResult<Self> {
        if divisor <= Decimal::ZERO {
            return Err(MoneyError::InvalidDivisor { divisor });
        }
        Ok(Money {
            amount: self.amount / divisor,
            currency: self.currency,
        })
    }

    /// Checks if this value is strictly greater than another.
    pub fn is_greater_than(&self, other: &Money) -> MoneyResult<bool> {
        self.require_same_currency(other)?;
        Ok(self.amount > other.amount)
    }

    /// Checks if this value is strictly less than another.
    pub fn is_less_than(&self, other: &Money) -> MoneyResult<bool> {
        self.require_same_currency(other)?;
        Ok(self.amount < other.amount)
    }

    /// Checks amount equality within the same currency.
    pub fn equals(&self, other: &Money) -> MoneyResult<bool> {
        self.require_same_currency(other)?;
        Ok(self.amount == other.amount)
    }

    /// Rounds to 2 decimal places (midpoint away from zero).
    ///
    /// Applied once, at the point of producing final order totals. Chaining
    /// arithmetic on already-rounded intermediates compounds error; keep
    /// intermediates full precision instead.
    pub fn rounded(self) -> Self {
        Money {
            amount: self
                .amount
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
            currency: self.currency,
        }
    }

    /// Formats with the currency symbol and 2 decimal places.
    ///
    /// ## Example
    /// ```rust
    /// use rust_decimal::Decimal;
    /// use vendo_core::money::{Currency, Money};
    ///
    /// let m = Money::new(Decimal::new(51684, 2), Currency::INR)?;
    /// assert_eq!(m.format(), "₹516.84");
    ///
    /// let odd = Money::new(Decimal::from(7), Currency::new("PKR")?)?;
    /// assert_eq!(odd.format(), "PKR7.00"); // unknown codes render the code
    /// # Ok::<(), vendo_core::MoneyError>(())
    /// ```
    pub fn format(&self) -> String {
        format!("{}{:.2}", self.currency.symbol(), self.amount)
    }

    fn require_same_currency(&self, other: &Money) -> MoneyResult<()> {
        if self.currency != other.currency {
            return Err(MoneyError::CurrencyMismatch {
                left: self.currency.code().to_string(),
                right: other.currency.code().to_string(),
            });
        }
        Ok(())
    }
}

/// Display matches [`Money::format`]: symbol plus 2 decimal places.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:.2}", self.currency.symbol(), self.amount)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn inr(major: i64, minor: i64) -> Money {
        Money {
            amount: Decimal::new(major * 100 + minor, 2),
            currency: Currency::INR,
        }
    }

    #[test]
    fn test_currency_validation() {
        assert_eq!(Currency::new("INR").map(|c| c.code().to_string()), Ok("INR".to_string()));
        assert_eq!(Currency::new("usd").map(|c| c.code().to_string()), Ok("USD".to_string()));

        assert!(Currency::new("").is_err());
        assert!(Currency::new("IN").is_err());
        assert!(Currency::new("INRR").is_err());
        assert!(Currency::new("IN1").is_err());
    }

    #[test]
    fn test_currency_symbols() {
        assert_eq!(Currency::INR.symbol(), "₹");
        assert_eq!(Currency::USD.symbol(), "$");
        assert_eq!(Currency::EUR.symbol(), "€");
        assert_eq!(Currency::GBP.symbol(), "£");

        let pkr = Currency::new("PKR").unwrap();
        assert_eq!(pkr.symbol(), "PKR");
    }

    #[test]
    fn test_negative_amount_rejected() {
        let err = Money::new(Decimal::from(-5), Currency::INR);
        assert!(matches!(err, Err(MoneyError::InvalidAmount { .. })));

        // Negative zero is still zero.
        assert!(Money::new(Decimal::from(0), Currency::INR).is_ok());
    }

    #[test]
    fn test_add_and_subtract() {
        let a = inr(10, 0);
        let b = inr(4, 50);

        assert_eq!(a.add(b).unwrap(), inr(14, 50));
        assert_eq!(a.subtract(b).unwrap(), inr(5, 50));
    }

    #[test]
    fn test_subtract_never_goes_negative() {
        let a = inr(1, 0);
        let b = inr(2, 0);
        assert_eq!(a.subtract(b), Err(MoneyError::NegativeResult));
    }

    #[test]
    fn test_currency_mismatch() {
        let rupees = inr(10, 0);
        let dollars = Money::usd(Decimal::from(10)).unwrap();

        assert!(matches!(
            rupees.add(dollars),
            Err(MoneyError::CurrencyMismatch { .. })
        ));
        assert!(matches!(
            rupees.is_greater_than(&dollars),
            Err(MoneyError::CurrencyMismatch { .. })
        ));
        assert!(matches!(
            rupees.equals(&dollars),
            Err(MoneyError::CurrencyMismatch { .. })
        ));
    }

    #[test]
    fn test_multiply_and_divide_guards() {
        let m = inr(10, 0);

        assert_eq!(m.multiply(Decimal::from(3)).unwrap(), inr(30, 0));
        assert!(matches!(
            m.multiply(Decimal::from(-1)),
            Err(MoneyError::InvalidFactor { .. })
        ));

        assert_eq!(m.divide(Decimal::from(4)).unwrap(), inr(2, 50));
        assert!(matches!(
            m.divide(Decimal::ZERO),
            Err(MoneyError::InvalidDivisor { .. })
        ));
        assert!(matches!(
            m.divide(Decimal::from(-2)),
            Err(MoneyError::InvalidDivisor { .. })
        ));
    }

    #[test]
    fn test_comparisons() {
        let small = inr(5, 0);
        let big = inr(9, 99);

        assert!(big.is_greater_than(&small).unwrap());
        assert!(small.is_less_than(&big).unwrap());
        assert!(small.equals(&inr(5, 0)).unwrap());
        assert!(!small.equals(&big).unwrap());
    }

    #[test]
    fn test_full_precision_then_round() {
        // ₹438.00 × 0.18 = ₹78.84 exactly; ÷ 3 keeps precision until rounded.
        let subtotal = inr(438, 0);
        let tax = subtotal.multiply(Decimal::new(18, 2)).unwrap();
        assert_eq!(tax.amount(), Decimal::new(7884, 2));

        let third = inr(10, 0).divide(Decimal::from(3)).unwrap();
        let rebuilt = third.multiply(Decimal::from(3)).unwrap().rounded();
        assert_eq!(rebuilt, inr(10, 0));
    }

    #[test]
    fn test_rounding_strategy() {
        let m = Money::inr(Decimal::new(12345, 3)).unwrap(); // 12.345
        assert_eq!(m.rounded().amount(), Decimal::new(1235, 2)); // midpoint away from zero
    }

    #[test]
    fn test_format() {
        assert_eq!(inr(516, 84).format(), "₹516.84");
        assert_eq!(inr(0, 0).format(), "₹0.00");
        assert_eq!(Money::usd(Decimal::from(5)).unwrap().format(), "$5.00");
        assert_eq!(format!("{}", inr(219, 0)), "₹219.00");
    }

    #[test]
    fn test_serde_round_trip() {
        let m = inr(99, 95);
        let json = serde_json::to_string(&m).unwrap();
        let back: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, back);

        // Currency serializes as its code, and validation runs on the way in.
        assert!(json.contains("\"INR\""));
        assert!(serde_json::from_str::<Currency>("\"RUPEE\"").is_err());
    }
}

use std::fmt;

use rust_decimal::Decimal;

use crate::{EngineError, ResultEngine};

/// Non-negative money amount backed by a [`Decimal`].
///
/// Use this type for **all** stored monetary values in the engine (expense
/// amounts, monthly limits) to avoid floating-point drift. Derived values
/// that can go below zero, like a remaining budget, are plain [`Decimal`].
///
/// Construction rejects negative values and more than two fractional
/// digits; trailing zeros are dropped.
///
/// # Examples
///
/// ```rust
/// use engine::Money;
/// use rust_decimal::Decimal;
///
/// let amount = Money::new(Decimal::new(1234, 2)).unwrap();
/// assert_eq!(amount.amount(), Decimal::new(1234, 2));
/// assert_eq!(amount.to_string(), "12.34");
///
/// assert!(Money::new(Decimal::new(-1, 0)).is_err());
/// assert!(Money::new(Decimal::new(12345, 3)).is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);

    /// Maximum number of fractional digits accepted.
    pub const MAX_SCALE: u32 = 2;

    /// Validates and wraps a decimal amount.
    pub fn new(amount: Decimal) -> ResultEngine<Self> {
        if amount.is_zero() {
            return Ok(Self::ZERO);
        }
        if amount.is_sign_negative() {
            return Err(EngineError::InvalidAmount(format!(
                "amount must not be negative, got {amount}"
            )));
        }

        let normalized = amount.normalize();
        if normalized.scale() > Self::MAX_SCALE {
            return Err(EngineError::InvalidAmount("too many decimals".to_string()));
        }

        Ok(Self(normalized))
    }

    /// Returns the raw decimal value.
    #[must_use]
    pub const fn amount(self) -> Decimal {
        self.0
    }

    /// Returns `true` if the amount is 0.
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }

    /// Checked addition (returns `None` on overflow).
    #[must_use]
    pub fn checked_add(self, rhs: Money) -> Option<Money> {
        self.0.checked_add(rhs.0).map(Money)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

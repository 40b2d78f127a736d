//! Time value of money primitives
//!
//! All three primitives describe the same balance equation: a starting
//! balance `present_value` plus a level `payment` per period, compounding at
//! `rate` per period, ends at `future_value`:
//!
//! ```text
//! fv = pv * (1 + r)^n + pmt * (1 + r * w) * ((1 + r)^n - 1) / r
//! ```
//!
//! where `w` is 1 when payments fall at the start of each period
//! (annuity-due) and 0 when they fall at the end (ordinary annuity).
//! Deposits are positive payments, withdrawals are negative payments.
//!
//! `present_value` and `payment` work with the discount `(1 + r)^-n` rather
//! than dividing by the growth, so a huge horizon underflows the discount
//! to zero instead of overflowing the growth. A zero amount never meets an
//! infinite factor, so results outside `f64` range come back infinite and
//! never NaN.

use serde::{Deserialize, Serialize};

use crate::error::{PlanError, Result};

/// Rates closer to zero than this are treated as exactly zero (no compounding)
pub const ZERO_RATE_EPSILON: f64 = 1e-10;

/// When a level payment falls within each period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PaymentTiming {
    /// Start of each period (annuity-due)
    #[default]
    Begin,
    /// End of each period (ordinary annuity)
    End,
}

impl PaymentTiming {
    fn weight(self) -> f64 {
        match self {
            PaymentTiming::Begin => 1.0,
            PaymentTiming::End => 0.0,
        }
    }

    /// Accumulated value of one unit paid every period, given `(1 + r)^n`
    fn annuity_factor(self, rate: f64, growth: f64) -> f64 {
        (1.0 + rate * self.weight()) * (growth - 1.0) / rate
    }

    /// Present value of one unit paid every period, given `(1 + r)^-n`
    fn discounted_annuity_factor(self, rate: f64, discount: f64) -> f64 {
        (1.0 + rate * self.weight()) * (1.0 - discount) / rate
    }

    /// Balance after `periods` periods
    pub fn future_value(self, rate: f64, periods: i32, payment: f64, present_value: f64) -> Result<f64> {
        check_rate(rate)?;
        check_periods(periods)?;

        if rate.abs() < ZERO_RATE_EPSILON {
            return Ok(present_value + payment * periods as f64);
        }

        let growth = (1.0 + rate).powi(periods);
        Ok(scaled(present_value, growth) + scaled(payment, self.annuity_factor(rate, growth)))
    }

    /// Starting balance that lands on `future_value` after `periods` periods
    pub fn present_value(self, rate: f64, periods: i32, payment: f64, future_value: f64) -> Result<f64> {
        check_rate(rate)?;
        check_periods(periods)?;

        if rate.abs() < ZERO_RATE_EPSILON {
            return Ok(future_value - payment * periods as f64);
        }

        let discount = (1.0 + rate).powi(-periods);
        Ok(scaled(future_value, discount) - scaled(payment, self.discounted_annuity_factor(rate, discount)))
    }

    /// Level payment that carries `present_value` to `future_value`
    ///
    /// Zero periods leave no payment that can move the balance, so they are
    /// rejected along with negative counts.
    pub fn payment(self, rate: f64, periods: i32, present_value: f64, future_value: f64) -> Result<f64> {
        check_rate(rate)?;
        if periods <= 0 {
            return Err(PlanError::InvalidPeriods { periods });
        }

        if rate.abs() < ZERO_RATE_EPSILON {
            return Ok((future_value - present_value) / periods as f64);
        }

        let discount = (1.0 + rate).powi(-periods);
        Ok((scaled(future_value, discount) - present_value) / self.discounted_annuity_factor(rate, discount))
    }
}

/// Future value with start-of-period payments
pub fn future_value(rate: f64, periods: i32, payment: f64, present_value: f64) -> Result<f64> {
    PaymentTiming::Begin.future_value(rate, periods, payment, present_value)
}

/// Present value with start-of-period payments
pub fn present_value(rate: f64, periods: i32, payment: f64, future_value: f64) -> Result<f64> {
    PaymentTiming::Begin.present_value(rate, periods, payment, future_value)
}

/// Level start-of-period payment between two balances
pub fn payment(rate: f64, periods: i32, present_value: f64, future_value: f64) -> Result<f64> {
    PaymentTiming::Begin.payment(rate, periods, present_value, future_value)
}

/// Reject rates at or below -100% (and NaN)
pub fn check_rate(rate: f64) -> Result<()> {
    if rate > -1.0 && rate.is_finite() {
        Ok(())
    } else {
        Err(PlanError::InvalidRate { rate })
    }
}

/// `amount * factor`, except a zero amount stays zero against an infinite factor
fn scaled(amount: f64, factor: f64) -> f64 {
    if amount == 0.0 {
        0.0
    } else {
        amount * factor
    }
}

fn check_periods(periods: i32) -> Result<()> {
    if periods < 0 {
        Err(PlanError::InvalidPeriods { periods })
    } else {
        Ok(())
    }
}

//! The [`Decimal`] value type and its exact and rounded arithmetic.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

use bigdecimal::BigDecimal;
use num_bigint::{BigInt, Sign};
use num_integer::Integer;
use num_traits::{One, Signed, ToPrimitive, Zero};

use crate::{fixed, NumericError, DIVISION_SCALE};

/// An arbitrary-precision signed decimal.
///
/// Equality and ordering compare numeric value, so `10` equals `10.0`.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Decimal(BigDecimal);

/// `10^exponent` as a `BigInt`. Fails for exponents outside `0..=u32::MAX`.
pub(crate) fn pow10(exponent: i64, operation: &'static str) -> Result<BigInt, NumericError> {
    let exponent = u32::try_from(exponent).map_err(|_| NumericError::Overflow { operation })?;
    Ok(BigInt::from(10u32).pow(exponent))
}

/// Integer quotient `num / den` rounded half away from zero.
pub(crate) fn div_half_up(num: &BigInt, den: &BigInt) -> BigInt {
    let (quotient, remainder) = num.div_rem(den);
    if (remainder.abs() << 1u32) < den.abs() {
        return quotient;
    }
    if (num.sign() == Sign::Minus) == (den.sign() == Sign::Minus) {
        quotient + BigInt::one()
    } else {
        quotient - BigInt::one()
    }
}

impl Decimal {
    pub fn zero() -> Self {
        Decimal(BigDecimal::zero())
    }

    pub fn one() -> Self {
        Decimal::from(1i64)
    }

    /// `mantissa * 10^-scale`.
    pub(crate) fn from_parts(mantissa: BigInt, scale: i64) -> Self {
        Decimal(BigDecimal::new(mantissa, scale))
    }

    pub(crate) fn parts(&self) -> (BigInt, i64) {
        self.0.as_bigint_and_exponent()
    }

    /// Mantissa and scale with trailing decimal zeros removed.
    fn normalized_parts(&self) -> (BigInt, i64) {
        let (mut mantissa, mut scale) = self.parts();
        if mantissa.is_zero() {
            return (mantissa, 0);
        }
        let ten = BigInt::from(10u32);
        loop {
            let (quotient, remainder) = mantissa.div_rem(&ten);
            if !remainder.is_zero() {
                return (mantissa, scale);
            }
            mantissa = quotient;
            scale -= 1;
        }
    }

    pub fn is_zero(&self) -> bool {
        self.parts().0.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.parts().0.sign() == Sign::Minus
    }

    /// Whether the value has no fractional part.
    pub fn is_integer(&self) -> bool {
        self.normalized_parts().1 <= 0
    }

    pub(crate) fn is_odd_integer(&self) -> bool {
        let (mantissa, scale) = self.normalized_parts();
        scale == 0 && mantissa.is_odd()
    }

    /// The value as an `i64`, if it is an integer in range.
    pub fn to_i64(&self) -> Option<i64> {
        let (mantissa, scale) = self.normalized_parts();
        if scale > 0 {
            return None;
        }
        let factor = pow10(-scale, "conversion").ok()?;
        (mantissa * factor).to_i64()
    }

    /// The value truncated toward zero, if the integer part fits an `i64`.
    pub fn trunc_to_i64(&self) -> Option<i64> {
        let (mantissa, scale) = self.parts();
        if scale <= 0 {
            return self.to_i64();
        }
        let divisor = pow10(scale, "conversion").ok()?;
        (mantissa / divisor).to_i64()
    }

    /// The value as a `u32`, if it is a non-negative integer in range.
    pub fn to_u32(&self) -> Option<u32> {
        self.to_i64().and_then(|n| u32::try_from(n).ok())
    }

    /// Round half-up to at most `scale` fractional digits.
    pub(crate) fn rounded(&self, scale: u32) -> Result<Decimal, NumericError> {
        let (mantissa, current) = self.parts();
        let target = i64::from(scale);
        if current <= target {
            return Ok(self.clone());
        }
        let divisor = pow10(current - target, "rounding")?;
        Ok(Decimal::from_parts(div_half_up(&mantissa, &divisor), target))
    }

    /// Quotient rounded half-up to [`DIVISION_SCALE`] fractional digits.
    pub fn try_div(&self, rhs: &Decimal) -> Result<Decimal, NumericError> {
        let (numerator, lhs_scale) = self.parts();
        let (denominator, rhs_scale) = rhs.parts();
        if denominator.is_zero() {
            return Err(NumericError::DivisionByZero);
        }
        let target = i64::from(DIVISION_SCALE);
        let shift = rhs_scale
            .checked_sub(lhs_scale)
            .and_then(|s| s.checked_add(target))
            .ok_or(NumericError::Overflow {
                operation: "division",
            })?;
        let (numerator, denominator) = if shift >= 0 {
            (numerator * pow10(shift, "division")?, denominator)
        } else {
            (numerator, denominator * pow10(-shift, "division")?)
        };
        Ok(Decimal::from_parts(
            div_half_up(&numerator, &denominator),
            target,
        ))
    }

    /// Truncated remainder: the result has the sign of `self`.
    pub fn try_rem(&self, rhs: &Decimal) -> Result<Decimal, NumericError> {
        let (lhs, lhs_scale) = self.parts();
        let (rhs, rhs_scale) = rhs.parts();
        if rhs.is_zero() {
            return Err(NumericError::ModuloByZero);
        }
        let scale = lhs_scale.max(rhs_scale);
        let lhs = lhs * pow10(scale - lhs_scale, "modulo")?;
        let rhs = rhs * pow10(scale - rhs_scale, "modulo")?;
        Ok(Decimal::from_parts(&lhs % &rhs, scale))
    }

    /// `self` raised to `exponent`.
    ///
    /// Non-negative integer exponents below `i32::MAX` are exact. Negative
    /// integer exponents give the rounded reciprocal of the exact power.
    /// Anything else goes through `exp(y * ln x)`.
    pub fn try_pow(&self, exponent: &Decimal) -> Result<Decimal, NumericError> {
        let limit = i64::from(i32::MAX);
        if let Some(n) = exponent.to_i64() {
            if (0..limit).contains(&n) {
                return self.pow_exact(n);
            }
            if (-limit + 1..0).contains(&n) {
                if self.is_zero() {
                    return Err(NumericError::DivisionByZero);
                }
                return Decimal::one().try_div(&self.pow_exact(-n)?);
            }
        }
        fixed::pow(self, exponent)
    }

    fn pow_exact(&self, n: i64) -> Result<Decimal, NumericError> {
        let overflow = NumericError::Overflow { operation: "power" };
        let exponent = u32::try_from(n).map_err(|_| overflow.clone())?;
        let (mantissa, scale) = self.parts();
        let scale = scale.checked_mul(n).ok_or(overflow)?;
        Ok(Decimal::from_parts(mantissa.pow(exponent), scale))
    }

    /// Square root rounded to [`DIVISION_SCALE`] fractional digits.
    pub fn sqrt(&self) -> Result<Decimal, NumericError> {
        if self.is_negative() {
            return Err(NumericError::domain(
                "square root",
                format!("negative argument {self}"),
            ));
        }
        let (mantissa, scale) = self.parts();
        // One guard digit past the target, and an even power of ten under the root.
        let root_scale = i64::from(DIVISION_SCALE).max(scale / 2 + 1) + 1;
        let radicand = mantissa * pow10(2 * root_scale - scale, "square root")?;
        Decimal::from_parts(radicand.sqrt(), root_scale).rounded(DIVISION_SCALE)
    }

    /// Sine of an angle in radians.
    pub fn sin(&self) -> Result<Decimal, NumericError> {
        fixed::sin(self)
    }

    /// Cosine of an angle in radians.
    pub fn cos(&self) -> Result<Decimal, NumericError> {
        fixed::cos(self)
    }

    /// Tangent of an angle in radians.
    pub fn tan(&self) -> Result<Decimal, NumericError> {
        fixed::tan(self)
    }
}

impl From<i64> for Decimal {
    fn from(value: i64) -> Self {
        Decimal(BigDecimal::from(value))
    }
}

impl From<u32> for Decimal {
    fn from(value: u32) -> Self {
        Decimal::from(i64::from(value))
    }
}

impl From<BigInt> for Decimal {
    fn from(value: BigInt) -> Self {
        Decimal::from_parts(value, 0)
    }
}

impl FromStr for Decimal {
    type Err = NumericError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        BigDecimal::from_str(text)
            .map(Decimal)
            .map_err(|_| NumericError::Parse(text.to_owned()))
    }
}

impl Add for &Decimal {
    type Output = Decimal;

    fn add(self, rhs: &Decimal) -> Decimal {
        Decimal(&self.0 + &rhs.0)
    }
}

impl Sub for &Decimal {
    type Output = Decimal;

    fn sub(self, rhs: &Decimal) -> Decimal {
        Decimal(&self.0 - &rhs.0)
    }
}

impl Mul for &Decimal {
    type Output = Decimal;

    fn mul(self, rhs: &Decimal) -> Decimal {
        Decimal(&self.0 * &rhs.0)
    }
}

impl Neg for &Decimal {
    type Output = Decimal;

    fn neg(self) -> Decimal {
        let (mantissa, scale) = self.parts();
        Decimal::from_parts(-mantissa, scale)
    }
}

/// Plain notation with trailing zeros stripped: `10.0` prints as `10`.
impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (mantissa, scale) = self.normalized_parts();
        let sign = if mantissa.sign() == Sign::Minus { "-" } else { "" };
        let digits = mantissa.magnitude().to_string();
        if scale <= 0 {
            let zeros = usize::try_from(-scale).map_err(|_| fmt::Error)?;
            return write!(f, "{sign}{digits}{}", "0".repeat(zeros));
        }
        let scale = usize::try_from(scale).map_err(|_| fmt::Error)?;
        if digits.len() > scale {
            let (whole, fraction) = digits.split_at(digits.len() - scale);
            write!(f, "{sign}{whole}.{fraction}")
        } else {
            let padding = "0".repeat(scale - digits.len());
            write!(f, "{sign}0.{padding}{digits}")
        }
    }
}

impl fmt::Debug for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Decimal({self})")
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;

//! Fixed-point kernels behind the transcendental operations.
//!
//! A kernel value is a `BigInt` holding `x * 10^WORKING_SCALE`. Series are
//! summed until the next term truncates to zero.

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{ToPrimitive, Zero};

use crate::decimal::{div_half_up, pow10};
use crate::{Decimal, NumericError, DIVISION_SCALE, WORKING_SCALE};

struct Kernel {
    unit: BigInt,
}

impl Kernel {
    fn new() -> Self {
        Kernel {
            unit: BigInt::from(10u32).pow(WORKING_SCALE),
        }
    }

    fn mul(&self, a: &BigInt, b: &BigInt) -> BigInt {
        (a * b) / &self.unit
    }

    fn div(&self, a: &BigInt, b: &BigInt) -> BigInt {
        (a * &self.unit) / b
    }

    fn from_decimal(&self, value: &Decimal) -> Result<BigInt, NumericError> {
        let (mantissa, scale) = value.parts();
        let shift = i64::from(WORKING_SCALE) - scale;
        if shift >= 0 {
            Ok(mantissa * pow10(shift, "conversion")?)
        } else {
            Ok(mantissa / pow10(-shift, "conversion")?)
        }
    }

    fn to_decimal(x: &BigInt) -> Decimal {
        let divisor = BigInt::from(10u32).pow(WORKING_SCALE - DIVISION_SCALE);
        Decimal::from_parts(div_half_up(x, &divisor), i64::from(DIVISION_SCALE))
    }

    /// `atanh(1/n)`.
    fn atanh_inverse(&self, n: u32) -> BigInt {
        let n = BigInt::from(n);
        let n_squared = &n * &n;
        let mut power = &self.unit / &n;
        let mut sum = BigInt::zero();
        let mut k = 1u32;
        while !power.is_zero() {
            sum += &power / k;
            power /= &n_squared;
            k += 2;
        }
        sum
    }

    /// `atan(1/n)`.
    fn atan_inverse(&self, n: u32) -> BigInt {
        let n = BigInt::from(n);
        let n_squared = &n * &n;
        let mut power = &self.unit / &n;
        let mut sum = BigInt::zero();
        let mut k = 1u32;
        let mut subtract = false;
        while !power.is_zero() {
            let term = &power / k;
            if subtract {
                sum -= term;
            } else {
                sum += term;
            }
            subtract = !subtract;
            power /= &n_squared;
            k += 2;
        }
        sum
    }

    fn atanh(&self, z: &BigInt) -> BigInt {
        let z_squared = self.mul(z, z);
        let mut power = z.clone();
        let mut sum = BigInt::zero();
        let mut k = 1u32;
        loop {
            let term = &power / k;
            if term.is_zero() {
                return sum;
            }
            sum += term;
            power = self.mul(&power, &z_squared);
            k += 2;
        }
    }

    fn ln2(&self) -> BigInt {
        self.atanh_inverse(3) * 2u32
    }

    /// `ln 10 = 3 ln 2 + ln 1.25`, and `ln 1.25 = 2 atanh(1/9)`.
    fn ln10(&self) -> BigInt {
        self.ln2() * 3u32 + self.atanh_inverse(9) * 2u32
    }

    fn pi(&self) -> BigInt {
        self.atan_inverse(5) * 16u32 - self.atan_inverse(239) * 4u32
    }

    /// Natural logarithm of a strictly positive decimal.
    fn ln(&self, value: &Decimal) -> Result<BigInt, NumericError> {
        let (mantissa, scale) = value.parts();
        let digits = i64::try_from(mantissa.magnitude().to_string().len())
            .map_err(|_| NumericError::Overflow { operation: "logarithm" })?;
        // value = y * 10^(digits - scale) with y in [0.1, 1)
        let shift = i64::from(WORKING_SCALE) - digits;
        let mut y = if shift >= 0 {
            mantissa * pow10(shift, "logarithm")?
        } else {
            mantissa / pow10(-shift, "logarithm")?
        };
        let mut doublings = 0u32;
        while y < self.unit {
            y <<= 1u32;
            doublings += 1;
        }
        let ratio = self.div(&(&y - &self.unit), &(&y + &self.unit));
        let ln_y = self.atanh(&ratio) * 2u32;
        Ok(ln_y - self.ln2() * doublings + self.ln10() * BigInt::from(digits - scale))
    }

    fn exp(&self, t: &BigInt) -> Result<BigInt, NumericError> {
        let ln2 = self.ln2();
        let halvings = t.div_floor(&ln2);
        let r = t - &halvings * &ln2;
        let mut sum = self.unit.clone();
        let mut term = self.unit.clone();
        let mut k = 1u32;
        loop {
            term = self.mul(&term, &r) / k;
            if term.is_zero() {
                break;
            }
            sum += &term;
            k += 1;
        }
        let overflow = NumericError::Overflow { operation: "power" };
        let shift = halvings.to_i64().ok_or(overflow.clone())?;
        if shift >= 0 {
            let shift = u32::try_from(shift).map_err(|_| overflow)?;
            Ok(sum << shift)
        } else {
            match u32::try_from(-shift) {
                Ok(shift) => Ok(sum >> shift),
                Err(_) => Ok(BigInt::zero()),
            }
        }
    }

    fn sin_cos(&self, x: &BigInt) -> (BigInt, BigInt) {
        let pi = self.pi();
        let two_pi = &pi * 2u32;
        let turns = (x + &pi).div_floor(&two_pi);
        // r in [-pi, pi)
        let r = x - turns * &two_pi;
        let r_squared = self.mul(&r, &r);

        let mut sine = r.clone();
        let mut term = r;
        let mut k = 1u32;
        loop {
            let next = self.mul(&term, &r_squared) / ((2 * k) * (2 * k + 1));
            if next.is_zero() {
                break;
            }
            term = -next;
            sine += &term;
            k += 1;
        }

        let mut cosine = self.unit.clone();
        let mut term = self.unit.clone();
        let mut k = 1u32;
        loop {
            let next = self.mul(&term, &r_squared) / ((2 * k - 1) * (2 * k));
            if next.is_zero() {
                break;
            }
            term = -next;
            cosine += &term;
            k += 1;
        }
        (sine, cosine)
    }
}

/// General power through `exp(y * ln |x|)`.
pub(crate) fn pow(base: &Decimal, exponent: &Decimal) -> Result<Decimal, NumericError> {
    if base.is_zero() {
        return if exponent.is_negative() || exponent.is_zero() {
            Err(NumericError::DivisionByZero)
        } else {
            Ok(Decimal::zero())
        };
    }
    let negate = if base.is_negative() {
        if !exponent.is_integer() {
            return Err(NumericError::domain(
                "power",
                format!("negative base {base} with fractional exponent {exponent}"),
            ));
        }
        exponent.is_odd_integer()
    } else {
        false
    };
    let kernel = Kernel::new();
    let magnitude = if base.is_negative() { -base } else { base.clone() };
    let log = kernel.ln(&magnitude)?;
    let t = kernel.mul(&kernel.from_decimal(exponent)?, &log);
    let result = Kernel::to_decimal(&kernel.exp(&t)?);
    Ok(if negate { -&result } else { result })
}

pub(crate) fn sin(x: &Decimal) -> Result<Decimal, NumericError> {
    let kernel = Kernel::new();
    let (sine, _) = kernel.sin_cos(&kernel.from_decimal(x)?);
    Ok(Kernel::to_decimal(&sine))
}

pub(crate) fn cos(x: &Decimal) -> Result<Decimal, NumericError> {
    let kernel = Kernel::new();
    let (_, cosine) = kernel.sin_cos(&kernel.from_decimal(x)?);
    Ok(Kernel::to_decimal(&cosine))
}

pub(crate) fn tan(x: &Decimal) -> Result<Decimal, NumericError> {
    let kernel = Kernel::new();
    let (sine, cosine) = kernel.sin_cos(&kernel.from_decimal(x)?);
    if cosine.is_zero() {
        return Err(NumericError::domain("tangent", format!("cosine of {x} is zero")));
    }
    Ok(Kernel::to_decimal(&kernel.div(&sine, &cosine)))
}

#[cfg(test)]
mod tests {
    use super::Kernel;
    use pretty_assertions::assert_eq;

    #[test]
    fn pi_to_fifty_places() {
        let kernel = Kernel::new();
        assert_eq!(
            Kernel::to_decimal(&kernel.pi()).to_string(),
            "3.14159265358979323846264338327950288419716939937511"
        );
    }

    #[test]
    fn ln2_to_fifty_places() {
        let kernel = Kernel::new();
        assert_eq!(
            Kernel::to_decimal(&kernel.ln2()).to_string(),
            "0.69314718055994530941723212145817656807550013436026"
        );
    }

    #[test]
    fn exp_of_zero_is_one() {
        let kernel = Kernel::new();
        let one = kernel.exp(&num_bigint::BigInt::from(0)).ok();
        assert_eq!(one, Some(kernel.unit.clone()));
    }
}

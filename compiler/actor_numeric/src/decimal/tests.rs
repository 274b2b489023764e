use super::Decimal;
use crate::NumericError;
use pretty_assertions::assert_eq;

fn dec(text: &str) -> Decimal {
    text.parse().unwrap()
}

fn abs(value: &Decimal) -> Decimal {
    if value.is_negative() {
        -value
    } else {
        value.clone()
    }
}

fn assert_close(actual: &Decimal, expected: &Decimal, tolerance: &str) {
    let diff = abs(&(actual - expected));
    assert!(
        diff <= dec(tolerance),
        "{actual} differs from {expected} by {diff}"
    );
}

// Display

#[test]
fn display_strips_trailing_zeros() {
    assert_eq!(dec("10.0").to_string(), "10");
    assert_eq!(dec("0.00010").to_string(), "0.0001");
    assert_eq!(dec("-1.50").to_string(), "-1.5");
    assert_eq!(dec("0.000").to_string(), "0");
}

#[test]
fn display_uses_plain_notation() {
    assert_eq!(dec("1e3").to_string(), "1000");
    assert_eq!(dec("1.5e-3").to_string(), "0.0015");
    assert_eq!(Decimal::from(-42i64).to_string(), "-42");
}

#[test]
fn parse_rejects_garbage() {
    assert_eq!(
        "12x".parse::<Decimal>(),
        Err(NumericError::Parse("12x".to_owned()))
    );
}

// Comparison

#[test]
fn equality_is_by_value() {
    assert_eq!(dec("10"), dec("10.0"));
    assert!(dec("2.5") < dec("10"));
    assert!(dec("-3") < dec("-2.99"));
}

// Division

#[test]
fn division_keeps_fifty_places() {
    assert_eq!(
        dec("10").try_div(&dec("3")).unwrap().to_string(),
        "3.33333333333333333333333333333333333333333333333333"
    );
}

#[test]
fn division_rounds_half_up() {
    assert_eq!(
        dec("2").try_div(&dec("3")).unwrap().to_string(),
        "0.66666666666666666666666666666666666666666666666667"
    );
    assert_eq!(
        dec("-2").try_div(&dec("3")).unwrap().to_string(),
        "-0.66666666666666666666666666666666666666666666666667"
    );
}

#[test]
fn exact_division_is_exact() {
    assert_eq!(dec("1").try_div(&dec("8")).unwrap(), dec("0.125"));
    assert_eq!(dec("7.5").try_div(&dec("0.5")).unwrap(), dec("15"));
}

#[test]
fn division_by_zero_is_a_domain_error() {
    assert_eq!(
        dec("20").try_div(&dec("0")),
        Err(NumericError::DivisionByZero)
    );
}

// Remainder

#[test]
fn remainder_takes_the_sign_of_the_dividend() {
    assert_eq!(dec("7").try_rem(&dec("3")).unwrap(), dec("1"));
    assert_eq!(dec("-7").try_rem(&dec("3")).unwrap(), dec("-1"));
    assert_eq!(dec("7").try_rem(&dec("-3")).unwrap(), dec("1"));
    assert_eq!(dec("7.5").try_rem(&dec("2")).unwrap(), dec("1.5"));
}

#[test]
fn modulo_by_zero_fails() {
    assert_eq!(
        dec("7").try_rem(&dec("0.0")),
        Err(NumericError::ModuloByZero)
    );
}

// Power

#[test]
fn integer_power_is_exact() {
    assert_eq!(dec("2").try_pow(&dec("10")).unwrap(), dec("1024"));
    assert_eq!(dec("-2").try_pow(&dec("3")).unwrap(), dec("-8"));
    assert_eq!(dec("1.5").try_pow(&dec("2")).unwrap(), dec("2.25"));
    assert_eq!(dec("0").try_pow(&dec("0")).unwrap(), dec("1"));
}

#[test]
fn negative_power_is_a_reciprocal() {
    let result = dec("100").try_pow(&dec("-2")).unwrap();
    assert_eq!(&result * &dec("100000"), dec("10"));
}

#[test]
fn fractional_power() {
    let half = dec("1").try_div(&dec("2")).unwrap();
    assert_eq!(dec("100").try_pow(&half).unwrap(), dec("10"));
    assert_close(
        &dec("2").try_pow(&dec("0.5")).unwrap(),
        &dec("1.41421356237309504880168872420969807856967187537695"),
        "1e-49",
    );
}

#[test]
fn power_of_zero_with_negative_exponent_fails() {
    assert_eq!(
        dec("0").try_pow(&dec("-1")),
        Err(NumericError::DivisionByZero)
    );
    assert_eq!(
        dec("0").try_pow(&dec("-0.5")),
        Err(NumericError::DivisionByZero)
    );
}

#[test]
fn fractional_power_of_negative_base_is_undefined() {
    assert!(matches!(
        dec("-8").try_pow(&dec("0.5")),
        Err(NumericError::Domain {
            operation: "power",
            ..
        })
    ));
}

// Roots and trigonometry

#[test]
fn square_root() {
    assert_eq!(dec("100").sqrt().unwrap(), dec("10"));
    assert_eq!(dec("0.25").sqrt().unwrap(), dec("0.5"));
    assert_eq!(
        dec("2").sqrt().unwrap().to_string(),
        "1.41421356237309504880168872420969807856967187537695"
    );
}

#[test]
fn square_root_of_negative_is_undefined() {
    assert!(matches!(
        dec("-1").sqrt(),
        Err(NumericError::Domain {
            operation: "square root",
            ..
        })
    ));
}

#[test]
fn trigonometry_at_zero() {
    assert_eq!(dec("0").sin().unwrap(), dec("0"));
    assert_eq!(dec("0").cos().unwrap(), dec("1"));
    assert_eq!(dec("0").tan().unwrap(), dec("0"));
}

#[test]
fn pythagorean_identity() {
    for angle in ["1", "-2.5", "100"] {
        let sine = dec(angle).sin().unwrap();
        let cosine = dec(angle).cos().unwrap();
        let sum = &(&sine * &sine) + &(&cosine * &cosine);
        assert_close(&sum, &dec("1"), "1e-45");
    }
}

#[test]
fn tangent_is_sine_over_cosine() {
    let angle = dec("0.75");
    let ratio = angle.sin().unwrap().try_div(&angle.cos().unwrap()).unwrap();
    assert_close(&angle.tan().unwrap(), &ratio, "1e-45");
}

// Conversions

#[test]
fn integer_conversions() {
    assert_eq!(dec("3.0").to_i64(), Some(3));
    assert_eq!(dec("3.5").to_i64(), None);
    assert_eq!(dec("1e2").to_i64(), Some(100));
    assert_eq!(dec("-2.7").trunc_to_i64(), Some(-2));
    assert_eq!(dec("-1").to_u32(), None);
    assert!(dec("4.000").is_integer());
}

mod proptest_arithmetic {
    #![allow(
        clippy::disallowed_types,
        reason = "proptest macros internally use Arc"
    )]

    use super::{assert_close, Decimal};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn division_then_multiplication_approximates(
            a in -1_000_000_000i64..1_000_000_000,
            b in -1_000_000_000i64..1_000_000_000,
        ) {
            prop_assume!(b != 0);
            let a = Decimal::from(a);
            let b = Decimal::from(b);
            let product = &a.try_div(&b).unwrap() * &b;
            assert_close(&product, &a, "1e-40");
        }

        #[test]
        fn addition_is_undone_by_subtraction(
            a in any::<i64>(),
            scale in 0u32..20,
            b in any::<i32>(),
        ) {
            let divisor = Decimal::from(10u32).try_pow(&Decimal::from(scale)).unwrap();
            let a = Decimal::from(a).try_div(&divisor).unwrap();
            let b = Decimal::from(i64::from(b));
            prop_assert_eq!(&(&a + &b) - &b, a);
        }

        #[test]
        fn display_parses_back(mantissa in any::<i64>(), scale in -10i64..30) {
            let value = Decimal::from_parts(mantissa.into(), scale);
            let reparsed: Decimal = value.to_string().parse().unwrap();
            prop_assert_eq!(reparsed, value);
        }
    }
}

// ============================================================================
// Property Tests
// Algebraic laws and cross-checks against rust_decimal
// ============================================================================

use digit_decimal::prelude::*;
use proptest::prelude::*;
use quickcheck::{quickcheck, TestResult};
use rust_decimal::Decimal;
use std::cmp::Ordering;

const DECIMAL: &str = "-?[0-9]{1,20}(\\.[0-9]{1,20})?";
const LITERAL: &str = "[0-9]{1,6}(\\.[0-9]{1,4})?";

fn exact(value: &str) -> ExactDecimal {
    value.parse().unwrap()
}

fn small_decimal() -> impl Strategy<Value = Decimal> {
    (any::<i32>(), 0u32..=8).prop_map(|(m, scale)| Decimal::new(i64::from(m), scale))
}

proptest! {
    #[test]
    fn canonicalize_is_idempotent(x in DECIMAL) {
        let once = canonicalize(&x).unwrap();
        prop_assert_eq!(canonicalize(&once).unwrap(), once);
    }

    #[test]
    fn canonicalize_accepts_exponent_form(x in DECIMAL, e in -30i64..30) {
        let scientific = format!("{x}e{e}");
        let shifted = multiply(&x, &format!("1e{e}")).unwrap();
        prop_assert_eq!(canonicalize(&scientific).unwrap(), shifted);
    }

    #[test]
    fn addition_and_multiplication_commute(a in DECIMAL, b in DECIMAL) {
        prop_assert_eq!(add(&a, &b).unwrap(), add(&b, &a).unwrap());
        prop_assert_eq!(multiply(&a, &b).unwrap(), multiply(&b, &a).unwrap());
    }

    #[test]
    fn additive_inverse_is_zero(a in DECIMAL) {
        let inverse = subtract("0", &a).unwrap();
        prop_assert_eq!(add(&a, &inverse).unwrap(), "0");
        prop_assert_eq!(inverse, negate(&a).unwrap());
    }

    #[test]
    fn subtraction_is_addition_of_negation(a in DECIMAL, b in DECIMAL) {
        let negated = negate(&b).unwrap();
        prop_assert_eq!(subtract(&a, &b).unwrap(), add(&a, &negated).unwrap());
    }

    #[test]
    fn exact_division_recovers_factor(a in DECIMAL, b in DECIMAL) {
        prop_assume!(compare(&b, "0").unwrap() != Ordering::Equal);
        let product = multiply(&a, &b).unwrap();
        let expected = canonicalize(&a).unwrap();
        prop_assert_eq!(divide(&product, &b, 40).unwrap(), expected);
    }

    #[test]
    fn division_remainder_reconstructs_dividend(a in DECIMAL, b in DECIMAL, cap in 0u32..20) {
        prop_assume!(compare(&b, "0").unwrap() != Ordering::Equal);
        let result = divide_with_remainder(&a, &b, cap).unwrap();

        // |a| == |q| * |b| + r
        let rebuilt = add(
            &multiply(&abs(&result.quotient).unwrap(), &abs(&b).unwrap()).unwrap(),
            &result.remainder,
        ).unwrap();
        prop_assert_eq!(rebuilt, abs(&a).unwrap());
        prop_assert!(compare(&result.remainder, "0").unwrap() != Ordering::Less);
    }

    #[test]
    fn floor_never_exceeds_value(a in DECIMAL, decimals in 0u32..6) {
        let floored = round(&a, decimals, false, RoundingMode::Floor).unwrap();
        prop_assert!(compare(&floored, &a).unwrap() != Ordering::Greater);

        let gap = subtract(&a, &floored).unwrap();
        let unit = format!("1e-{decimals}");
        prop_assert_eq!(compare(&gap, &unit).unwrap(), Ordering::Less);
    }

    #[test]
    fn arithmetic_matches_rust_decimal(a in small_decimal(), b in small_decimal()) {
        let (x, y) = (a.to_string(), b.to_string());

        prop_assert_eq!(exact(&add(&x, &y).unwrap()), ExactDecimal::from_decimal(a + b));
        prop_assert_eq!(exact(&subtract(&x, &y).unwrap()), ExactDecimal::from_decimal(a - b));
        prop_assert_eq!(exact(&multiply(&x, &y).unwrap()), ExactDecimal::from_decimal(a * b));
        prop_assert_eq!(compare(&x, &y).unwrap(), a.cmp(&b));
    }

    #[test]
    fn rust_decimal_roundtrip(a in small_decimal()) {
        let value = ExactDecimal::from_decimal(a);
        prop_assert_eq!(value.to_decimal().unwrap(), a);
    }

    #[test]
    fn evaluation_honours_precedence(a in LITERAL, b in LITERAL, c in LITERAL) {
        let expression = format!("{a}+{b}*{c}-{a}");
        let expected = multiply(&b, &c).unwrap();
        prop_assert_eq!(evaluate(&expression, 15).unwrap(), expected);
    }
}

// ============================================================================
// QuickCheck Properties
// ============================================================================

fn compare_is_antisymmetric(a: i64, b: i64, scale: u8) -> bool {
    let scale = u32::from(scale % 10);
    let x = Decimal::new(a, scale).to_string();
    let y = Decimal::new(b, scale).to_string();
    compare(&x, &y).unwrap() == compare(&y, &x).unwrap().reverse()
}

fn multiply_then_divide_by_nonzero(a: i32, b: i32) -> TestResult {
    if b == 0 {
        return TestResult::discard();
    }
    let product = multiply(&a.to_string(), &b.to_string()).unwrap();
    let quotient = divide(&product, &b.to_string(), DEFAULT_MAX_DECIMAL_LENGTH).unwrap();
    TestResult::from_bool(quotient == a.to_string())
}

fn negate_twice_is_identity(a: i64, scale: u8) -> bool {
    let x = Decimal::new(a, u32::from(scale % 10)).to_string();
    negate(&negate(&x).unwrap()).unwrap() == canonicalize(&x).unwrap()
}

#[test]
fn quickcheck_compare_antisymmetry() {
    quickcheck(compare_is_antisymmetric as fn(i64, i64, u8) -> bool);
}

#[test]
fn quickcheck_multiply_divide_roundtrip() {
    quickcheck(multiply_then_divide_by_nonzero as fn(i32, i32) -> TestResult);
}

#[test]
fn quickcheck_double_negation() {
    quickcheck(negate_twice_is_identity as fn(i64, u8) -> bool);
}

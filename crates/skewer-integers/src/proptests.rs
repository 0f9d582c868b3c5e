//! Property-based tests for arbitrary precision arithmetic.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    use crate::{Integer, Rational};

    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    proptest! {
        #[test]
        fn integer_distributive(a in small_int(), b in small_int(), c in small_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let c = Integer::new(c);
            prop_assert_eq!(
                a.clone() * (b.clone() + c.clone()),
                a.clone() * b + a * c
            );
        }

        #[test]
        fn integer_parse_display_agree(a in any::<i64>()) {
            let parsed: Integer = a.to_string().parse().unwrap();
            prop_assert_eq!(parsed.to_i64(), Some(a));
            prop_assert_eq!(parsed.to_string(), a.to_string());
        }

        #[test]
        fn exact_sqrt_rejects_non_squares(a in 1i64..1_000_000i64, offset in 1i64..1000i64) {
            // a^2 < a^2 + offset < (a + 1)^2 whenever offset <= 2a
            prop_assume!(offset <= 2 * a);
            let n = Integer::new(a * a + offset);
            prop_assert_eq!(n.exact_sqrt(), None);
        }

        #[test]
        fn exact_sqrt_of_square(a in -100_000i64..100_000i64) {
            let a = Integer::new(a);
            let square = &a * &a;
            prop_assert_eq!(square.exact_sqrt(), Some(a.abs()));
        }

        #[test]
        fn rational_distributive(
            num_a in small_int(),
            den_a in non_zero_int(),
            num_b in small_int(),
            den_b in non_zero_int(),
            num_c in small_int(),
            den_c in non_zero_int()
        ) {
            let a = Rational::from_i64(num_a, den_a);
            let b = Rational::from_i64(num_b, den_b);
            let c = Rational::from_i64(num_c, den_c);
            prop_assert_eq!(
                a.clone() * (b.clone() + c.clone()),
                a.clone() * b + a * c
            );
        }

        #[test]
        fn rational_multiplicative_inverse(num in non_zero_int(), den in non_zero_int()) {
            let a = Rational::from_i64(num, den);
            let product = a.clone() * a.recip();
            prop_assert!(product.is_one());
        }

        #[test]
        fn rational_lowest_terms(num in small_int(), den in non_zero_int()) {
            let r = Rational::from_i64(num, den);
            prop_assert!(!r.denominator().is_negative());
            prop_assert!(!r.denominator().is_zero());
            // Cross-multiplication recovers the original fraction.
            prop_assert_eq!(
                r.numerator() * Integer::new(den),
                Integer::new(num) * r.denominator()
            );
        }

        #[test]
        fn rational_exact_sqrt_roundtrip(num in 0i64..1000i64, den in 1i64..1000i64) {
            let root = Rational::from_i64(num, den);
            let square = &root * &root;
            prop_assert_eq!(square.exact_sqrt(), Some(root));
        }
    }
}

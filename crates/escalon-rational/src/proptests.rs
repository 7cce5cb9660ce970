//! Property-based tests for exact rational arithmetic.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    use crate::{Rational, DEFAULT_TOLERANCE};

    // Strategy for generating small integers
    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    // Strategy for generating non-zero integers
    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    fn rational() -> impl Strategy<Value = Rational> {
        (small_int(), non_zero_int()).prop_map(|(n, d)| Rational::from_i64(n, d).unwrap())
    }

    proptest! {
        // Field axioms

        #[test]
        fn add_commutative(a in rational(), b in rational()) {
            prop_assert_eq!(a.clone() + b.clone(), b + a);
        }

        #[test]
        fn mul_associative(a in rational(), b in rational(), c in rational()) {
            prop_assert_eq!(
                (a.clone() * b.clone()) * c.clone(),
                a * (b * c)
            );
        }

        #[test]
        fn distributive(a in rational(), b in rational(), c in rational()) {
            prop_assert_eq!(
                a.clone() * (b.clone() + c.clone()),
                a.clone() * b + a * c
            );
        }

        #[test]
        fn sub_is_add_neg(a in rational(), b in rational()) {
            prop_assert_eq!(a.clone() - b.clone(), a + (-b));
        }

        #[test]
        fn recip_is_mul_inverse(a in rational()) {
            if !a.is_zero() {
                let inv = a.recip().unwrap();
                prop_assert!((a * inv).is_one());
            }
        }

        // Invariant: denominator positive, lowest terms

        #[test]
        fn denominator_always_positive(n in small_int(), d in non_zero_int()) {
            let r = Rational::from_i64(n, d).unwrap();
            prop_assert!(!r.denominator().is_negative());
        }

        // Parsing

        #[test]
        fn display_parse_round_trip(a in rational()) {
            let parsed: Rational = a.to_string().parse().unwrap();
            prop_assert_eq!(parsed, a);
        }

        // Bounded float approximation

        #[test]
        fn from_f64_denominator_bounded(n in small_int(), d in non_zero_int()) {
            let approx = Rational::from_f64(n as f64 / d as f64).unwrap();
            prop_assert!(approx.denominator() <= crate::Integer::new(10_000));
        }

        #[test]
        fn from_f64_recovers_small_fractions(n in small_int(), d in 1i64..1000i64) {
            // Denominators below the bound round-trip exactly.
            let exact = Rational::from_i64(n, d).unwrap();
            let approx = Rational::from_f64(n as f64 / d as f64).unwrap();
            prop_assert_eq!(approx, exact);
        }

        // Near-zero heuristic agrees with exact zero on honest inputs

        #[test]
        fn near_zero_matches_is_zero(a in rational()) {
            prop_assert_eq!(a.is_near_zero(DEFAULT_TOLERANCE), a.is_zero());
        }
    }
}

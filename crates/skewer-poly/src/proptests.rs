//! Property-based tests for sparse polynomial arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use skewer_rings::rationals::Q;
    use skewer_rings::traits::Ring;

    use crate::{Monomial, MonomialOrder, SparsePoly};

    const NUM_VARS: usize = 3;

    fn small_coeff() -> impl Strategy<Value = Q> {
        (-50i64..50i64).prop_map(Q::from_integer)
    }

    fn small_monomial() -> impl Strategy<Value = Monomial> {
        proptest::collection::vec(0u16..3, NUM_VARS).prop_map(|e| Monomial::new(&e))
    }

    fn small_poly() -> impl Strategy<Value = SparsePoly<Q>> {
        proptest::collection::vec((small_monomial(), small_coeff()), 0..6)
            .prop_map(|terms| SparsePoly::new(terms, NUM_VARS, MonomialOrder::Grevlex))
    }

    fn small_point() -> impl Strategy<Value = Vec<Q>> {
        proptest::collection::vec(small_coeff(), NUM_VARS)
    }

    proptest! {
        #[test]
        fn monomial_product_degree_is_cached(
            a in proptest::collection::vec(0u16..1000, NUM_VARS),
            b in proptest::collection::vec(0u16..1000, NUM_VARS)
        ) {
            let product = Monomial::new(&a).mul(&Monomial::new(&b));
            let rebuilt = Monomial::new(product.exponents());
            prop_assert_eq!(product.total_degree(), rebuilt.total_degree());
            prop_assert_eq!(product, rebuilt);
        }

        #[test]
        fn poly_add_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.add(&b), b.add(&a));
        }

        #[test]
        fn poly_mul_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.mul(&b), b.mul(&a));
        }

        #[test]
        fn poly_distributive(a in small_poly(), b in small_poly(), c in small_poly()) {
            let left = a.mul(&b.add(&c));
            let right = a.mul(&b).add(&a.mul(&c));
            prop_assert_eq!(left, right);
        }

        #[test]
        fn poly_sub_self_is_zero(a in small_poly()) {
            prop_assert!(a.sub(&a).is_zero());
        }

        #[test]
        fn terms_stay_sorted(a in small_poly(), b in small_poly()) {
            let p = a.mul(&b);
            for pair in p.terms().windows(2) {
                prop_assert_eq!(
                    p.order().compare(&pair[0].0, &pair[1].0),
                    std::cmp::Ordering::Greater
                );
            }
        }

        #[test]
        fn mul_monomial_matches_mul(a in small_poly(), m in small_monomial(), c in small_coeff()) {
            let term = SparsePoly::new(vec![(m, c.clone())], NUM_VARS, MonomialOrder::Grevlex);
            prop_assert_eq!(a.mul_monomial(&m, &c), a.mul(&term));
        }

        #[test]
        fn evaluation_is_a_ring_morphism(a in small_poly(), b in small_poly(), p in small_point()) {
            prop_assert_eq!(
                a.mul(&b).evaluate(&p),
                a.evaluate(&p) * b.evaluate(&p)
            );
            prop_assert_eq!(
                a.add(&b).evaluate(&p),
                a.evaluate(&p) + b.evaluate(&p)
            );
        }

        #[test]
        fn reordering_preserves_value(a in small_poly(), p in small_point()) {
            let lex = a.with_order(MonomialOrder::Lex);
            prop_assert_eq!(lex.evaluate(&p), a.evaluate(&p));
            prop_assert_eq!(lex.len(), a.len());
            prop_assert!(lex.evaluate(&p).is_zero() == a.evaluate(&p).is_zero());
        }
    }
}

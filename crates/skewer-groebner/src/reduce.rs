//! Polynomial reduction against a set of polynomials.

use skewer_poly::{Monomial, SparsePoly};
use skewer_rings::traits::Field;

/// Computes the S-polynomial of `f` and `g`.
///
/// `S(f, g) = (L / lt(f)) * f - (L / lt(g)) * g` with `L = lcm(lm(f), lm(g))`,
/// which cancels both leading terms.
pub fn s_polynomial<R: Field>(f: &SparsePoly<R>, g: &SparsePoly<R>) -> SparsePoly<R> {
    let (Some((lm_f, lc_f)), Some((lm_g, lc_g))) = (f.leading_term(), g.leading_term()) else {
        return SparsePoly::zero(f.num_vars(), f.order());
    };

    let lcm = lm_f.lcm(lm_g);
    let (Some(mul_f), Some(mul_g)) = (lcm.div(lm_f), lcm.div(lm_g)) else {
        return SparsePoly::zero(f.num_vars(), f.order());
    };

    let left = f.mul_monomial(&mul_f, &R::one().field_div(lc_f));
    let right = g.mul_monomial(&mul_g, &R::one().field_div(lc_g));
    left.sub(&right)
}

/// Fully reduces `p` modulo `basis`.
///
/// Every term of the result is irreducible: no leading monomial of the
/// basis divides it. With a Gröbner basis this is the unique normal form.
pub fn normal_form<R: Field>(p: &SparsePoly<R>, basis: &[SparsePoly<R>]) -> SparsePoly<R> {
    let mut current = p.clone();
    let mut remainder: Vec<(Monomial, R)> = Vec::new();

    while let Some((lm, lc)) = current.leading_term().cloned() {
        let step = basis.iter().find_map(|g| {
            let (g_lm, g_lc) = g.leading_term()?;
            let quotient = lm.div(g_lm)?;
            Some((g, quotient, g_lc))
        });

        match step {
            Some((g, quotient, g_lc)) => {
                let scale = lc.field_div(g_lc);
                current = current.sub(&g.mul_monomial(&quotient, &scale));
            }
            None => {
                remainder.push((lm, lc));
                current = current.tail();
            }
        }
    }

    SparsePoly::new(remainder, p.num_vars(), p.order())
}

/// Turns a Gröbner basis into the reduced Gröbner basis.
///
/// Drops zeros, makes everything monic, removes elements whose leading
/// monomial is divisible by another's, then reduces every tail against the
/// remaining elements. The result is sorted by leading monomial, largest
/// first, and is unique for the ideal and ordering.
pub fn reduce_basis<R: Field>(basis: Vec<SparsePoly<R>>) -> Vec<SparsePoly<R>> {
    let monic: Vec<SparsePoly<R>> = basis
        .into_iter()
        .filter(|p| !p.is_zero())
        .map(|p| p.make_monic())
        .collect();

    let minimal: Vec<SparsePoly<R>> = monic
        .iter()
        .enumerate()
        .filter(|&(idx, g)| {
            let Some(lm) = g.leading_monomial() else {
                return false;
            };
            !monic.iter().enumerate().any(|(k, h)| {
                k != idx
                    && h.leading_monomial().is_some_and(|h_lm| {
                        lm.is_divisible_by(h_lm) && (h_lm != lm || k < idx)
                    })
            })
        })
        .map(|(_, g)| g.clone())
        .collect();

    let mut reduced: Vec<SparsePoly<R>> = minimal
        .iter()
        .enumerate()
        .map(|(idx, g)| {
            let others: Vec<SparsePoly<R>> = minimal
                .iter()
                .enumerate()
                .filter(|&(k, _)| k != idx)
                .map(|(_, h)| h.clone())
                .collect();
            let head = SparsePoly::new(
                g.leading_term().into_iter().cloned().collect(),
                g.num_vars(),
                g.order(),
            );
            head.add(&normal_form(&g.tail(), &others))
        })
        .collect();

    reduced.sort_by(|a, b| match (a.leading_monomial(), b.leading_monomial()) {
        (Some(x), Some(y)) => a.order().compare(y, x),
        _ => std::cmp::Ordering::Equal,
    });
    reduced
}

#[cfg(test)]
mod tests {
    use super::*;
    use skewer_poly::MonomialOrder;
    use skewer_rings::rationals::Q;

    fn q(n: i64) -> Q {
        Q::from_integer(n)
    }

    fn poly(terms: &[(&[u16], i64)], order: MonomialOrder) -> SparsePoly<Q> {
        let num_vars = terms[0].0.len();
        SparsePoly::new(
            terms.iter().map(|(e, c)| (Monomial::new(e), q(*c))).collect(),
            num_vars,
            order,
        )
    }

    #[test]
    fn test_s_polynomial_cancels_leading_terms() {
        let order = MonomialOrder::Grevlex;
        // f = x^2 - 1, g = x*y - y
        let f = poly(&[(&[2, 0], 1), (&[0, 0], -1)], order);
        let g = poly(&[(&[1, 1], 1), (&[0, 1], -1)], order);

        // y*f - x*g = -y + x*y
        let s = s_polynomial(&f, &g);
        let expected = poly(&[(&[1, 1], 1), (&[0, 1], -1)], order);
        assert_eq!(s, expected);
    }

    #[test]
    fn test_normal_form_division() {
        let order = MonomialOrder::Lex;
        // (x^2 + x*y) mod {x + y} = 0
        let p = poly(&[(&[2, 0], 1), (&[1, 1], 1)], order);
        let g = poly(&[(&[1, 0], 1), (&[0, 1], 1)], order);
        assert!(normal_form(&p, &[g.clone()]).is_zero());

        // (x^2 + 1) mod {x + y} = y^2 + 1
        let p = poly(&[(&[2, 0], 1), (&[0, 0], 1)], order);
        let expected = poly(&[(&[0, 2], 1), (&[0, 0], 1)], order);
        assert_eq!(normal_form(&p, &[g]), expected);
    }

    #[test]
    fn test_normal_form_keeps_irreducible_terms() {
        let order = MonomialOrder::Grevlex;
        let p = poly(&[(&[0, 2], 3), (&[0, 0], 5)], order);
        let g = poly(&[(&[1, 0], 1)], order);
        assert_eq!(normal_form(&p, &[g]), p);
    }

    #[test]
    fn test_reduce_basis() {
        let order = MonomialOrder::Lex;
        // {2x - 2y, x - y, y^2 - 1, x*y - 1}: minimal basis keeps x - y and
        // y^2 - 1; x*y is divisible by x and goes away.
        let basis = vec![
            poly(&[(&[1, 0], 2), (&[0, 1], -2)], order),
            poly(&[(&[1, 0], 1), (&[0, 1], -1)], order),
            poly(&[(&[0, 2], 1), (&[0, 0], -1)], order),
            poly(&[(&[1, 1], 1), (&[0, 0], -1)], order),
        ];
        let reduced = reduce_basis(basis);

        assert_eq!(reduced.len(), 2);
        assert_eq!(reduced[0], poly(&[(&[1, 0], 1), (&[0, 1], -1)], order));
        assert_eq!(reduced[1], poly(&[(&[0, 2], 1), (&[0, 0], -1)], order));
    }
}

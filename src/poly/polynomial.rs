use crate::{
    error::{Error, Result},
    field::FieldElement,
    poly::{monomial::Monomial, ring::Ring},
};
use derivative::Derivative;
use std::{
    cmp::Ordering,
    fmt::{self, Debug, Display, Formatter},
    ops::Neg,
    vec::Vec,
};

/// Stores a sparse multivariate polynomial in coefficient form.
///
/// Terms are kept strictly increasing under the ring's monomial order and
/// no coefficient is zero, so the leading term is always the last one and
/// the zero polynomial has no terms at all.
#[derive(Derivative)]
#[derivative(Clone, PartialEq, Eq, Hash)]
pub struct Polynomial {
    #[derivative(Hash = "ignore")]
    ring: Ring,
    terms: Vec<(FieldElement, Monomial)>,
}

impl Polynomial {
    /// Builds a polynomial from terms in any order. Repeated monomials are
    /// summed and zero coefficients are dropped.
    pub fn new(ring: &Ring, terms: &[(FieldElement, Monomial)]) -> Result<Self> {
        let mut sorted = Vec::with_capacity(terms.len());
        for (coeff, monomial) in terms {
            ring.check_same(monomial.ring())?;
            sorted.push((ring.field().coerce(coeff.clone())?, monomial.clone()));
        }
        sorted.sort_by(|(_, a), (_, b)| a.cmp(b));

        let mut terms_dedup: Vec<(FieldElement, Monomial)> = Vec::with_capacity(sorted.len());
        for (coeff, monomial) in sorted {
            if let Some((prev, last)) = terms_dedup.last_mut() {
                if *last == monomial {
                    *prev = prev.try_add(&coeff)?;
                    continue;
                }
            }
            terms_dedup.push((coeff, monomial));
        }
        terms_dedup.retain(|(c, _)| !c.is_zero());

        Ok(Self {
            ring: ring.clone(),
            terms: terms_dedup,
        })
    }

    pub fn zero(ring: &Ring) -> Self {
        Self {
            ring: ring.clone(),
            terms: Vec::new(),
        }
    }

    pub fn constant(ring: &Ring, coeff: FieldElement) -> Result<Self> {
        let coeff = ring.field().coerce(coeff)?;
        if coeff.is_zero() {
            return Ok(Self::zero(ring));
        }
        Ok(Self {
            ring: ring.clone(),
            terms: vec![(coeff, Monomial::one(ring))],
        })
    }

    pub fn from_monomial(monomial: Monomial) -> Self {
        let ring = monomial.ring().clone();
        Self {
            terms: vec![(ring.field().one(), monomial)],
            ring,
        }
    }

    pub fn ring(&self) -> &Ring {
        &self.ring
    }

    /// Terms in increasing monomial order.
    pub fn terms(&self) -> &[(FieldElement, Monomial)] {
        self.terms.as_slice()
    }

    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Highest total degree among the terms; 0 for the zero polynomial.
    pub fn degree(&self) -> u64 {
        self.terms.iter().map(|(_, m)| m.degree()).max().unwrap_or(0)
    }

    pub fn leading_term(&self) -> Option<&(FieldElement, Monomial)> {
        self.terms.last()
    }

    pub fn leading_monomial(&self) -> Option<&Monomial> {
        self.leading_term().map(|(_, m)| m)
    }

    /// The field's zero for the zero polynomial.
    pub fn leading_coefficient(&self) -> FieldElement {
        self.leading_term()
            .map(|(c, _)| c.clone())
            .unwrap_or_else(|| self.ring.field().zero())
    }

    /// Leading term as a one-term polynomial.
    pub fn lt(&self) -> Self {
        Self {
            ring: self.ring.clone(),
            terms: self.leading_term().cloned().into_iter().collect(),
        }
    }

    pub fn trailing_terms(&self) -> &[(FieldElement, Monomial)] {
        match self.terms.split_last() {
            Some((_, rest)) => rest,
            None => &[],
        }
    }

    pub fn coefficient_of(&self, monomial: &Monomial) -> Option<&FieldElement> {
        self.terms
            .binary_search_by(|(_, m)| m.cmp(monomial))
            .ok()
            .map(|i| &self.terms[i].0)
    }

    pub fn is_monic(&self) -> bool {
        self.leading_term().map_or(false, |(c, _)| c.is_one())
    }

    /// Compares leading monomials; the zero polynomial sorts below everything.
    pub fn cmp_leading(&self, other: &Self) -> Ordering {
        self.leading_monomial().cmp(&other.leading_monomial())
    }

    fn merge(&self, other: &Self, subtract: bool) -> Result<Self> {
        self.ring.check_same(&other.ring)?;
        let mut terms = Vec::with_capacity(self.terms.len() + other.terms.len());
        let mut lhs = self.terms.iter().peekable();
        let mut rhs = other.terms.iter().peekable();

        loop {
            let which = match (lhs.peek(), rhs.peek()) {
                (Some((_, a)), Some((_, b))) => a.cmp(b),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => break,
            };

            match which {
                Ordering::Less => terms.extend(lhs.next().cloned()),
                Ordering::Greater => {
                    if let Some((c, m)) = rhs.next() {
                        let c = if subtract { -c } else { c.clone() };
                        terms.push((c, m.clone()));
                    }
                },
                Ordering::Equal => {
                    if let (Some((a, m)), Some((b, _))) = (lhs.next(), rhs.next()) {
                        let c = if subtract { a.try_sub(b)? } else { a.try_add(b)? };
                        if !c.is_zero() {
                            terms.push((c, m.clone()));
                        }
                    }
                },
            }
        }

        Ok(Self {
            ring: self.ring.clone(),
            terms,
        })
    }

    pub fn try_add(&self, other: &Self) -> Result<Self> {
        self.merge(other, false)
    }

    pub fn try_sub(&self, other: &Self) -> Result<Self> {
        self.merge(other, true)
    }

    /// `coeff * monomial * self`. Multiplying by a monomial keeps the term
    /// order, so no re-sort is needed.
    pub fn mul_term(&self, coeff: &FieldElement, monomial: &Monomial) -> Result<Self> {
        self.ring.check_same(monomial.ring())?;
        let mut terms = Vec::with_capacity(self.terms.len());
        for (c, m) in &self.terms {
            let c = c.try_mul(coeff)?;
            if !c.is_zero() {
                terms.push((c, m.mul_exponents(monomial)?));
            }
        }
        Ok(Self {
            ring: self.ring.clone(),
            terms,
        })
    }

    pub fn scale(&self, coeff: &FieldElement) -> Result<Self> {
        self.mul_term(coeff, &Monomial::one(&self.ring))
    }

    /// Product through a balanced split of the shorter operand's terms.
    pub fn try_mul(&self, other: &Self) -> Result<Self> {
        self.ring.check_same(&other.ring)?;
        let (long, short) = if self.terms.len() >= other.terms.len() {
            (self, other)
        } else {
            (other, self)
        };
        long.mul_terms(&short.terms)
    }

    fn mul_terms(&self, terms: &[(FieldElement, Monomial)]) -> Result<Self> {
        match terms {
            [] => Ok(Self::zero(&self.ring)),
            [(c, m)] => self.mul_term(c, m),
            _ => {
                let (left, right) = terms.split_at(terms.len() / 2);
                self.mul_terms(left)?.try_add(&self.mul_terms(right)?)
            },
        }
    }

    /// `self^k` by repeated multiplication; `self^0` is the constant 1.
    pub fn try_pow(&self, k: i64) -> Result<Self> {
        if k < 0 {
            return Err(Error::InvalidExponent(k));
        }
        let mut result = Self::from_monomial(Monomial::one(&self.ring));
        for _ in 0..k {
            result = result.try_mul(self)?;
        }
        Ok(result)
    }

    /// Multivariate division with a first-fit divisor policy.
    ///
    /// Returns quotients `q` (one per divisor, positionally) and a remainder
    /// `r` with `self == sum(q[i] * divisors[i]) + r`, where no term of `r`
    /// is divisible by the leading monomial of any divisor. Zero divisors are
    /// skipped; an empty or all-zero divisor list is a division by zero.
    pub fn divide(&self, divisors: &[Polynomial]) -> Result<(Vec<Self>, Self)> {
        for divisor in divisors {
            self.ring.check_same(&divisor.ring)?;
        }
        let leads: Vec<Option<&(FieldElement, Monomial)>> =
            divisors.iter().map(Polynomial::leading_term).collect();
        if leads.iter().all(Option::is_none) {
            return Err(Error::DivisionByZero);
        }

        // Both accumulate in decreasing order and are reversed at the end.
        let mut quotients: Vec<Vec<(FieldElement, Monomial)>> = vec![Vec::new(); divisors.len()];
        let mut remainder = Vec::new();
        let mut p = self.clone();

        while let Some((p_coeff, p_monomial)) = p.leading_term().cloned() {
            let fit = leads.iter().enumerate().find_map(|(i, lead)| {
                let (g_coeff, g_monomial) = (*lead)?;
                p_monomial
                    .checked_div(g_monomial)
                    .map(|t_monomial| (i, g_coeff, t_monomial))
            });

            match fit {
                Some((i, g_coeff, t_monomial)) => {
                    let t_coeff = p_coeff.try_div(g_coeff)?;
                    p = p.try_sub(&divisors[i].mul_term(&t_coeff, &t_monomial)?)?;
                    quotients[i].push((t_coeff, t_monomial));
                },
                None => {
                    p.terms.pop();
                    remainder.push((p_coeff, p_monomial));
                },
            }
        }

        let ring = &self.ring;
        let into_poly = |mut terms: Vec<(FieldElement, Monomial)>| {
            terms.reverse();
            Self {
                ring: ring.clone(),
                terms,
            }
        };
        Ok((
            quotients.into_iter().map(into_poly).collect(),
            into_poly(remainder),
        ))
    }

    /// Remainder of [`Polynomial::divide`].
    pub fn normal_form(&self, divisors: &[Polynomial]) -> Result<Self> {
        self.divide(divisors).map(|(_, r)| r)
    }

    /// `(L / LM f) / LC f * f - (L / LM g) / LC g * g` with
    /// `L = lcm(LM f, LM g)`; zero when either operand is zero.
    pub fn s_polynomial(&self, other: &Self) -> Result<Self> {
        self.ring.check_same(&other.ring)?;
        let (Some((f_coeff, f_monomial)), Some((g_coeff, g_monomial))) =
            (self.leading_term(), other.leading_term())
        else {
            return Ok(Self::zero(&self.ring));
        };

        let lcm = f_monomial.lcm(g_monomial)?;
        let f = self.mul_term(&f_coeff.inverse()?, &lcm.try_div(f_monomial)?)?;
        let g = other.mul_term(&g_coeff.inverse()?, &lcm.try_div(g_monomial)?)?;
        f.try_sub(&g)
    }

    /// Divides through by the leading coefficient; zero stays zero.
    pub fn monic(&self) -> Result<Self> {
        match self.leading_term() {
            None => Ok(self.clone()),
            Some((c, _)) if c.is_one() => Ok(self.clone()),
            Some((c, _)) => self.scale(&c.inverse()?),
        }
    }
}

impl Neg for &Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Self::Output {
        Polynomial {
            ring: self.ring.clone(),
            terms: self.terms.iter().map(|(c, m)| (-c, m.clone())).collect(),
        }
    }
}

impl Neg for Polynomial {
    type Output = Self;

    #[inline]
    fn neg(mut self) -> Self::Output {
        for (coeff, _) in &mut self.terms {
            *coeff = -&*coeff;
        }
        self
    }
}

impl Display for Polynomial {
    /// Terms from highest to lowest, joined by `" + "`. A unit coefficient
    /// is elided, negative ones are parenthesised and the constant monomial
    /// prints as `1`, e.g. `x^2*y + (-1/2)*x + 3*1`.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }
        for (i, (coeff, monomial)) in self.terms.iter().rev().enumerate() {
            if i > 0 {
                write!(f, " + ")?;
            }
            if coeff.is_one() {
                write!(f, "{}", monomial)?;
            } else if coeff.is_negative() {
                write!(f, "({})*{}", coeff, monomial)?;
            } else {
                write!(f, "{}*{}", coeff, monomial)?;
            }
        }
        Ok(())
    }
}

impl Debug for Polynomial {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{field::CoefficientField, poly::monomial::MonomialOrder};
    use ark_std::test_rng;
    use rand::Rng;

    fn qq(vars: &str, order: MonomialOrder) -> Ring {
        Ring::from_chars(CoefficientField::Rational, vars, order).unwrap()
    }

    fn fp(p: i64, vars: &str, order: MonomialOrder) -> Ring {
        Ring::from_chars(CoefficientField::prime(p).unwrap(), vars, order).unwrap()
    }

    /// Random polynomial with up to `n` terms of individual degree at most `d`
    fn rand_poly<R: Rng>(ring: &Ring, n: usize, d: u32, rng: &mut R) -> Polynomial {
        let num_terms = rng.gen_range(0..=n);
        let terms: Vec<_> = (0..num_terms)
            .map(|_| {
                let exponents = (0..ring.num_vars()).map(|_| rng.gen_range(0..=d)).collect();
                (
                    ring.field().from_integer(rng.gen_range(-9i64..10)),
                    Monomial::new(ring, exponents).unwrap(),
                )
            })
            .collect();
        Polynomial::new(ring, &terms).unwrap()
    }

    fn rand_nonzero_poly<R: Rng>(ring: &Ring, n: usize, d: u32, rng: &mut R) -> Polynomial {
        loop {
            let p = rand_poly(ring, n, d, rng);
            if !p.is_zero() {
                return p;
            }
        }
    }

    fn rings() -> Vec<Ring> {
        vec![
            qq("xyz", MonomialOrder::Lex),
            qq("xyz", MonomialOrder::GradedLex),
            fp(101, "xyz", MonomialOrder::GradedLex),
            fp(7, "xy", MonomialOrder::Lex),
        ]
    }

    fn assert_invariant(p: &Polynomial) {
        assert!(p.terms().windows(2).all(|w| w[0].1 < w[1].1));
        assert!(p.terms().iter().all(|(c, _)| !c.is_zero()));
    }

    #[test]
    fn test_construction_sorts_merges_and_prunes() {
        let r = qq("xy", MonomialOrder::Lex);
        let c = |n: i64| r.field().from_integer(n);
        let m = |e: &[u32]| r.monomial(e).unwrap();
        let p = Polynomial::new(
            &r,
            &[
                (c(1), m(&[0, 1])),
                (c(3), m(&[2, 0])),
                (c(0), m(&[5, 5])),
                (c(2), m(&[0, 1])),
                (c(-3), m(&[2, 0])),
            ],
        )
        .unwrap();
        assert_eq!(p.terms(), &[(c(3), m(&[0, 1]))]);
        assert_eq!(p.to_string(), "3*y");
        assert!(Polynomial::new(&r, &[(c(4), m(&[1, 1])), (c(-4), m(&[1, 1]))])
            .unwrap()
            .is_zero());
    }

    #[test]
    fn test_construction_rejects_foreign_parts() {
        let r = qq("xy", MonomialOrder::Lex);
        let s = qq("xyz", MonomialOrder::Lex);
        let f7 = CoefficientField::prime(7).unwrap();
        assert!(matches!(
            Polynomial::new(&r, &[(r.field().one(), s.monomial(&[1, 0, 0]).unwrap())]),
            Err(Error::RingMismatch { .. })
        ));
        assert!(matches!(
            Polynomial::new(&r, &[(f7.one(), r.monomial(&[1, 0]).unwrap())]),
            Err(Error::IncompatibleField { .. })
        ));
        assert!(matches!(
            r.one().try_add(&s.one()),
            Err(Error::RingMismatch { .. })
        ));
    }

    #[test]
    fn test_leading_term_accessors() {
        let r = qq("xy", MonomialOrder::GradedLex);
        let p = r.parse("x^2 + 3*x*y^2 - y").unwrap();
        assert_eq!(p.leading_monomial(), Some(&r.monomial(&[1, 2]).unwrap()));
        assert_eq!(p.leading_coefficient(), r.field().from_integer(3));
        assert_eq!(p.lt().to_string(), "3*x*y^2");
        assert_eq!(p.trailing_terms().len(), 2);
        assert_eq!(p.degree(), 3);
        assert_eq!(
            p.coefficient_of(&r.monomial(&[0, 1]).unwrap()),
            Some(&r.field().from_integer(-1))
        );
        assert_eq!(p.coefficient_of(&r.monomial(&[1, 0]).unwrap()), None);
        assert!(!p.is_monic());
        assert!(p.monic().unwrap().is_monic());

        let zero = r.zero();
        assert_eq!(zero.leading_monomial(), None);
        assert!(zero.leading_coefficient().is_zero());
        assert!(zero.lt().is_zero());
        assert!(zero.trailing_terms().is_empty());
        assert!(zero.monic().unwrap().is_zero());
        assert_eq!(zero.cmp_leading(&r.one()), Ordering::Less);
    }

    #[test]
    fn add_polynomials() {
        let rng = &mut test_rng();
        for ring in rings() {
            for _ in 0..50 {
                let p1 = rand_poly(&ring, 20, 4, rng);
                let p2 = rand_poly(&ring, 20, 4, rng);
                let res1 = p1.try_add(&p2).unwrap();
                let res2 = p2.try_add(&p1).unwrap();
                assert_invariant(&res1);
                assert_eq!(res1, res2);
                assert!(res2.try_sub(&res1).unwrap().is_zero());
            }
        }
    }

    #[test]
    fn sub_polynomials() {
        let rng = &mut test_rng();
        for ring in rings() {
            for _ in 0..50 {
                let p1 = rand_poly(&ring, 20, 4, rng);
                let p2 = rand_poly(&ring, 20, 4, rng);
                let res1 = p1.try_sub(&p2).unwrap();
                let res2 = p2.try_sub(&p1).unwrap();
                assert_invariant(&res1);
                assert_eq!(res1, -&res2);
                assert_eq!(res1.try_add(&p2).unwrap(), p1);
                assert!(p1.try_sub(&p1).unwrap().is_zero());
            }
        }
    }

    #[test]
    fn mul_polynomials() {
        let rng = &mut test_rng();
        for ring in rings() {
            for _ in 0..20 {
                let p1 = rand_poly(&ring, 8, 3, rng);
                let p2 = rand_poly(&ring, 8, 3, rng);
                let p3 = rand_poly(&ring, 8, 3, rng);
                let p12 = p1.try_mul(&p2).unwrap();
                assert_invariant(&p12);
                assert_eq!(p12, p2.try_mul(&p1).unwrap());
                assert_eq!(
                    p12.try_mul(&p3).unwrap(),
                    p1.try_mul(&p2.try_mul(&p3).unwrap()).unwrap()
                );
                assert_eq!(
                    p1.try_mul(&p2.try_add(&p3).unwrap()).unwrap(),
                    p12.try_add(&p1.try_mul(&p3).unwrap()).unwrap()
                );
                assert_eq!(p1.try_mul(&ring.one()).unwrap(), p1);
                assert!(p1.try_mul(&ring.zero()).unwrap().is_zero());
            }
        }
    }

    #[test]
    fn mul_term() {
        let rng = &mut test_rng();
        for ring in rings() {
            for _ in 0..20 {
                let p = rand_poly(&ring, 20, 4, rng);
                let t = rand_nonzero_poly(&ring, 1, 4, rng);
                let (c, m) = t.leading_term().unwrap();
                let res1 = p.mul_term(c, m).unwrap();
                let res2 = p
                    .terms()
                    .iter()
                    .map(|tt| {
                        Polynomial::new(&ring, &[tt.to_owned()])
                            .unwrap()
                            .try_mul(&t)
                            .unwrap()
                    })
                    .fold(ring.zero(), |a, b| a.try_add(&b).unwrap());
                assert_invariant(&res1);
                assert_eq!(res1, res2);
                assert_eq!(p.scale(c).unwrap(), p.try_mul(&ring.coerce(c.clone()).unwrap()).unwrap());
            }
        }
    }

    #[test]
    fn test_pow() {
        let r = qq("xy", MonomialOrder::GradedLex);
        let [x, y]: [Polynomial; 2] = r.variables().try_into().unwrap();
        let s = x.try_add(&y).unwrap();
        assert_eq!(
            s.try_pow(3).unwrap().to_string(),
            "x^3 + 3*x^2*y + 3*x*y^2 + y^3"
        );
        assert_eq!(s.try_pow(0).unwrap(), r.one());
        assert_eq!(r.zero().try_pow(0).unwrap(), r.one());
        assert_eq!(s.try_pow(1).unwrap(), s);
        assert_eq!(s.try_pow(-1), Err(Error::InvalidExponent(-1)));
    }

    #[test]
    fn test_exponent_overflow() {
        let r = qq("xy", MonomialOrder::GradedLex);
        let big = Polynomial::from_monomial(r.monomial(&[u32::MAX, 0]).unwrap());
        let overflow = Err(Error::ExponentOverflow("x".to_owned()));

        let x = r.parse("x + y").unwrap();
        assert_eq!(big.try_mul(&x), overflow);
        assert_eq!(big.try_pow(2), overflow);
        assert_eq!(
            big.mul_term(&r.field().one(), r.monomial(&[1, 0]).as_ref().unwrap()),
            overflow
        );
        assert_eq!(
            big.try_mul(&r.parse("y").unwrap()).unwrap().to_string(),
            "x^4294967295*y"
        );
    }

    #[test]
    fn test_division_scenarios() {
        for order in [MonomialOrder::Lex, MonomialOrder::GradedLex] {
            let r = qq("xy", order);
            let p = r.parse("x^2*y + x*y^2 + y^2").unwrap();

            let d = r.parse_list("[x*y - 1, y^2 - 1]").unwrap();
            let (q, rem) = p.divide(&d).unwrap();
            assert_eq!(q[0].to_string(), "x + y");
            assert_eq!(q[1].to_string(), "1");
            assert_eq!(rem.to_string(), "x + y + 1");

            // divisor order changes the normal form
            let d = r.parse_list("[y^2 - 1, x*y - 1]").unwrap();
            let (q, rem) = p.divide(&d).unwrap();
            assert_eq!(q[0].to_string(), "x + 1");
            assert_eq!(q[1].to_string(), "x");
            assert_eq!(rem.to_string(), "2*x + 1");

            let d = r.parse_list("[x*y + 1, y + 1]").unwrap();
            let (q, rem) = r.parse("x*y^2 + 1").unwrap().divide(&d).unwrap();
            assert_eq!(q[0].to_string(), "y");
            assert_eq!(q[1].to_string(), "(-1)*1");
            assert_eq!(rem.to_string(), "2*1");
        }
    }

    #[test]
    fn test_division_by_zero_divisors() {
        let r = qq("xy", MonomialOrder::GradedLex);
        let p = r.parse("x^2 + y").unwrap();
        assert_eq!(p.divide(&[]), Err(Error::DivisionByZero));
        assert_eq!(p.divide(&[r.zero(), r.zero()]), Err(Error::DivisionByZero));

        let (q, rem) = p.divide(&[r.zero(), r.parse("x").unwrap()]).unwrap();
        assert!(q[0].is_zero());
        assert_eq!(q[1].to_string(), "x");
        assert_eq!(rem.to_string(), "y");
    }

    #[test]
    fn div_mod_polys() {
        let rng = &mut test_rng();
        for ring in rings() {
            for _ in 0..30 {
                let p = rand_poly(&ring, 15, 4, rng);
                let divisors: Vec<_> = (0..rng.gen_range(1..4))
                    .map(|_| rand_nonzero_poly(&ring, 4, 2, rng))
                    .collect();
                let (q, rem) = p.divide(&divisors).unwrap();
                assert_eq!(q.len(), divisors.len());
                assert_invariant(&rem);

                let recombined = q
                    .iter()
                    .zip(divisors.iter())
                    .map(|(q, d)| q.try_mul(d).unwrap())
                    .fold(rem.clone(), |a, b| a.try_add(&b).unwrap());
                assert_eq!(recombined, p);

                for (_, m) in rem.terms() {
                    for d in &divisors {
                        assert!(!m.is_divisible(d.leading_monomial().unwrap()));
                    }
                }
            }
        }
    }

    #[test]
    fn test_s_polynomial() {
        let r = qq("xy", MonomialOrder::Lex);
        let f = r.parse("x^3*y^2 - x^2*y^3 + x").unwrap();
        let g = r.parse("3*x^4*y + y^2").unwrap();
        assert_eq!(
            f.s_polynomial(&g).unwrap().to_string(),
            "(-1)*x^3*y^3 + x^2 + (-1/3)*y^3"
        );

        let r = qq("xy", MonomialOrder::GradedLex);
        let f = r.parse("x^3*y^2 - x^2*y^3 + x").unwrap();
        let g = r.parse("3*x^4*y + y^2").unwrap();
        assert_eq!(
            f.s_polynomial(&g).unwrap().to_string(),
            "(-1)*x^3*y^3 + (-1/3)*y^3 + x^2"
        );
        assert!(f.s_polynomial(&r.zero()).unwrap().is_zero());
        assert!(r.zero().s_polynomial(&g).unwrap().is_zero());
    }

    #[test]
    fn s_polynomial_cancels_leading_terms() {
        let rng = &mut test_rng();
        for ring in rings() {
            for _ in 0..50 {
                let f = rand_nonzero_poly(&ring, 6, 3, rng);
                let g = rand_nonzero_poly(&ring, 6, 3, rng);
                let lcm = f
                    .leading_monomial()
                    .unwrap()
                    .lcm(g.leading_monomial().unwrap())
                    .unwrap();
                let s = f.s_polynomial(&g).unwrap();
                assert_invariant(&s);
                if let Some(lm) = s.leading_monomial() {
                    assert!(*lm < lcm);
                }
            }
        }
    }

    #[test]
    fn test_display() {
        let r = qq("xyz", MonomialOrder::Lex);
        assert_eq!(r.zero().to_string(), "0");
        assert_eq!(r.one().to_string(), "1");
        assert_eq!(r.parse("-1").unwrap().to_string(), "(-1)*1");
        assert_eq!(
            r.parse("x - 2*x*y + 1/2*z^3").unwrap().to_string(),
            "(-2)*x*y + x + 1/2*z^3"
        );
        assert_eq!(r.parse("-2/3*y").unwrap().to_string(), "(-2/3)*y");

        let f7 = fp(7, "xy", MonomialOrder::Lex);
        assert_eq!(f7.parse("x - 2*y^2").unwrap().to_string(), "x + 5*y^2");
        assert_eq!(f7.parse("8*x").unwrap().to_string(), "x");
    }

    #[test]
    fn test_negation_does_not_alias() {
        let r = qq("xy", MonomialOrder::GradedLex);
        let p = r.parse("x^2 - y").unwrap();
        let n = -&p;
        assert_eq!(p.to_string(), "x^2 + (-1)*y");
        assert_eq!(n.to_string(), "(-1)*x^2 + y");
        assert_eq!(-n, p);
    }
}

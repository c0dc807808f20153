//! Buchberger's algorithm and the passes around it.

use crate::{
    error::{Error, Result},
    poly::polynomial::Polynomial,
};
use std::cmp::Ordering;
use tracing::{debug, info, trace};

/// Index pairs `(i, j)` with `j < i < len`, outer index ascending, inner
/// index ascending.
///
/// The engines call [`PairScan::reseed`] whenever the basis grows, which
/// restarts the scan from `(1, 0)` over the new length.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PairScan {
    len: usize,
    i: usize,
    j: usize,
}

impl PairScan {
    pub fn new(len: usize) -> Self {
        Self { len, i: 1, j: 0 }
    }

    pub fn reseed(&mut self, len: usize) {
        *self = Self::new(len);
    }
}

impl Iterator for PairScan {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        if self.i >= self.len {
            return None;
        }
        let pair = (self.i, self.j);
        self.j += 1;
        if self.j == self.i {
            self.i += 1;
            self.j = 0;
        }
        Some(pair)
    }
}

fn check_rings(polys: &[Polynomial]) -> Result<()> {
    if let Some((first, rest)) = polys.split_first() {
        for p in rest {
            first.ring().check_same(p.ring())?;
        }
    }
    Ok(())
}

/// Computes a Gröbner basis of the ideal generated by `generators`.
///
/// The generators are kept, in order, at the front of the result. Every
/// nonzero S-polynomial remainder is appended and the pair scan restarts
/// from the top, so the output is fully determined by the input order.
pub fn groebner(generators: &[Polynomial]) -> Result<Vec<Polynomial>> {
    check_rings(generators)?;
    info!(generators = generators.len(), "groebner start");

    let mut ideal = generators.to_vec();
    let mut pairs = PairScan::new(ideal.len());
    while let Some((i, j)) = pairs.next() {
        trace!(i, j, "pair");
        let s = ideal[i].s_polynomial(&ideal[j])?;
        if s.is_zero() {
            continue;
        }
        let remainder = s.normal_form(&ideal)?;
        if !remainder.is_zero() {
            debug!(index = ideal.len(), i, j, remainder = %remainder, "basis grows");
            ideal.push(remainder);
            pairs.reseed(ideal.len());
        }
    }

    info!(basis = ideal.len(), "groebner done");
    Ok(ideal)
}

/// True iff every S-polynomial of `basis` reduces to zero against `basis`.
pub fn is_groebner(basis: &[Polynomial]) -> Result<bool> {
    check_rings(basis)?;
    for (i, j) in PairScan::new(basis.len()) {
        let s = basis[i].s_polynomial(&basis[j])?;
        if !s.is_zero() && !s.normal_form(basis)?.is_zero() {
            trace!(i, j, "pair does not reduce to zero");
            return Ok(false);
        }
    }
    Ok(true)
}

/// Computes the reduced Gröbner basis of the ideal generated by
/// `generators`, which must be nonzero and strictly decreasing by leading
/// monomial.
///
/// Works like [`groebner`] on monic generators, but every new remainder is
/// made monic, inserted where it keeps the list decreasing, and used to
/// interreduce the elements in front of it. The result goes through
/// [`reduce_groebner_basis`] and comes out sorted by decreasing leading
/// monomial.
pub fn reduced_groebner(generators: &[Polynomial]) -> Result<Vec<Polynomial>> {
    check_rings(generators)?;
    if generators.iter().any(Polynomial::is_zero) {
        return Err(Error::PreconditionViolation(
            "generators must be nonzero".to_owned(),
        ));
    }
    if let Some(w) = generators
        .windows(2)
        .find(|w| w[0].cmp_leading(&w[1]) != Ordering::Greater)
    {
        return Err(Error::PreconditionViolation(format!(
            "generators must be strictly decreasing, found {} before {}",
            w[0], w[1]
        )));
    }
    info!(generators = generators.len(), "reduced groebner start");

    let mut ideal = generators
        .iter()
        .map(Polynomial::monic)
        .collect::<Result<Vec<_>>>()?;
    let mut pairs = PairScan::new(ideal.len());
    while let Some((i, j)) = pairs.next() {
        trace!(i, j, "pair");
        let s = ideal[i].s_polynomial(&ideal[j])?;
        if s.is_zero() {
            continue;
        }
        let remainder = s.normal_form(&ideal)?;
        if remainder.is_zero() {
            continue;
        }
        let s = remainder.monic()?;

        let mut pos = ideal.len();
        while pos > 0 && ideal[pos - 1].cmp_leading(&s) == Ordering::Less {
            pos -= 1;
        }
        debug!(index = pos, i, j, remainder = %s, "basis grows");
        ideal.insert(pos, s.clone());
        interreduce_prefix(&mut ideal, &mut pos, &s)?;
        pairs.reseed(ideal.len());
    }

    let basis = reduce_groebner_basis(&ideal)?;
    info!(basis = basis.len(), "reduced groebner done");
    Ok(basis)
}

/// Eliminates the monomials of `s`, highest first, from every element in
/// front of it, dropping monomial elements that `s` now divides.
///
/// Each element there has a larger leading monomial than `s`, so the
/// eliminations never touch leading terms and the list stays decreasing.
fn interreduce_prefix(ideal: &mut Vec<Polynomial>, pos: &mut usize, s: &Polynomial) -> Result<()> {
    let mut n = 0;
    while n < *pos {
        for (s_coeff, monomial) in s.terms().iter().rev() {
            if let Some(coeff) = ideal[n].coefficient_of(monomial) {
                let factor = coeff.try_div(s_coeff)?;
                ideal[n] = ideal[n].try_sub(&s.scale(&factor)?)?;
            }
        }

        if ideal[n].terms().len() == 1 && s.terms().len() == 1 {
            if let (Some(m), Some(d)) = (ideal[n].leading_monomial(), s.leading_monomial()) {
                if m.is_divisible(d) {
                    let removed = &ideal[n];
                    debug!(removed = %removed, by = %s, "interreduce");
                    ideal.remove(n);
                    *pos -= 1;
                    continue;
                }
            }
        }
        n += 1;
    }
    Ok(())
}

/// Turns a Gröbner basis into the reduced one: zero elements are dropped,
/// elements whose leading monomial is a multiple of another's are removed,
/// every tail is reduced against the rest and each element is made monic.
///
/// The output is sorted by decreasing leading monomial. A basis containing
/// a nonzero constant collapses to `[1]`.
pub fn reduce_groebner_basis(basis: &[Polynomial]) -> Result<Vec<Polynomial>> {
    check_rings(basis)?;
    debug!(basis = basis.len(), "interreduce start");

    let mut ideal: Vec<Polynomial> = basis.iter().filter(|p| !p.is_zero()).cloned().collect();
    ideal.sort_by(|f, g| g.cmp_leading(f));
    ideal.dedup_by(|f, g| f.cmp_leading(g) == Ordering::Equal);

    let minimal: Vec<Polynomial> = ideal
        .iter()
        .enumerate()
        .filter(|(i, f)| {
            !ideal.iter().enumerate().any(|(j, g)| {
                *i != j
                    && matches!(
                        (f.leading_monomial(), g.leading_monomial()),
                        (Some(m), Some(d)) if m.is_divisible(d)
                    )
            })
        })
        .map(|(_, f)| f.clone())
        .collect();

    let mut reduced = Vec::with_capacity(minimal.len());
    for (i, f) in minimal.iter().enumerate() {
        let others: Vec<Polynomial> = minimal
            .iter()
            .enumerate()
            .filter(|(j, _)| *j != i)
            .map(|(_, g)| g.clone())
            .collect();
        let tail_reduced = if others.is_empty() {
            f.clone()
        } else {
            f.normal_form(&others)?
        };
        reduced.push(tail_reduced.monic()?);
    }

    debug!(basis = reduced.len(), "interreduce end");
    Ok(reduced)
}

use crate::{
    error::{Error, Result},
    poly::ring::Ring,
};
use derivative::Derivative;
use std::{
    cmp::Ordering,
    fmt::{self, Debug, Display, Formatter},
    str::FromStr,
};

/// A total order on exponent vectors of equal length.
pub trait MonomialOrd {
    fn compare(lhs: &[u32], rhs: &[u32]) -> Ordering;
}

/// Pure lexicographic order: the first differing exponent decides.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
pub struct LexOrder;

/// Total degree first, ties broken lexicographically.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
pub struct GradedLexOrder;

impl MonomialOrd for LexOrder {
    fn compare(lhs: &[u32], rhs: &[u32]) -> Ordering {
        lhs.cmp(rhs)
    }
}

impl MonomialOrd for GradedLexOrder {
    fn compare(lhs: &[u32], rhs: &[u32]) -> Ordering {
        let degree = |exps: &[u32]| exps.iter().map(|&e| u64::from(e)).sum::<u64>();
        degree(lhs)
            .cmp(&degree(rhs))
            .then_with(|| LexOrder::compare(lhs, rhs))
    }
}

/// The order a [`Ring`] was built with.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
pub enum MonomialOrder {
    Lex,
    #[default]
    GradedLex,
}

impl MonomialOrder {
    pub fn compare(&self, lhs: &[u32], rhs: &[u32]) -> Ordering {
        match self {
            Self::Lex => LexOrder::compare(lhs, rhs),
            Self::GradedLex => GradedLexOrder::compare(lhs, rhs),
        }
    }
}

impl FromStr for MonomialOrder {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "lex" => Ok(Self::Lex),
            "grlex" | "graded-lex" => Ok(Self::GradedLex),
            _ => Err(Error::Parse {
                input: s.to_owned(),
                message: "expected `lex` or `grlex`".to_owned(),
            }),
        }
    }
}

impl Display for MonomialOrder {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lex => write!(f, "lex"),
            Self::GradedLex => write!(f, "grlex"),
        }
    }
}

fn overflow(ring: &Ring, var: usize) -> Error {
    Error::ExponentOverflow(ring.variable_names()[var].clone())
}

/// A power product `x_0^e_0 * ... * x_{n-1}^e_{n-1}` of a fixed ring.
#[derive(Derivative)]
#[derivative(Clone, PartialEq, Eq, Hash)]
pub struct Monomial {
    #[derivative(Hash = "ignore")]
    ring: Ring,
    exponents: Vec<u32>,
}

impl Monomial {
    pub fn new(ring: &Ring, exponents: Vec<u32>) -> Result<Self> {
        if exponents.len() != ring.num_vars() {
            return Err(Error::ArityMismatch {
                expected: ring.num_vars(),
                found: exponents.len(),
            });
        }
        Ok(Self {
            ring: ring.clone(),
            exponents,
        })
    }

    /// Builds a monomial from `(variable, exponent)` pairs; repeated
    /// variables have their exponents summed.
    pub fn from_sparse(ring: &Ring, powers: &[(usize, u32)]) -> Result<Self> {
        let mut exponents: Vec<u32> = vec![0; ring.num_vars()];
        for &(var, pow) in powers {
            let slot = exponents.get_mut(var).ok_or(Error::ArityMismatch {
                expected: ring.num_vars(),
                found: var + 1,
            })?;
            *slot = slot
                .checked_add(pow)
                .ok_or_else(|| overflow(ring, var))?;
        }
        Ok(Self {
            ring: ring.clone(),
            exponents,
        })
    }

    pub fn one(ring: &Ring) -> Self {
        Self {
            ring: ring.clone(),
            exponents: vec![0; ring.num_vars()],
        }
    }

    /// `x_var`; `var` must be below the ring's arity.
    pub(crate) fn variable(ring: &Ring, var: usize) -> Self {
        let mut m = Self::one(ring);
        m.exponents[var] = 1;
        m
    }

    pub fn ring(&self) -> &Ring {
        &self.ring
    }

    pub fn exponents(&self) -> &[u32] {
        &self.exponents
    }

    pub fn degree(&self) -> u64 {
        self.exponents.iter().map(|&e| u64::from(e)).sum()
    }

    pub fn is_constant(&self) -> bool {
        self.exponents.iter().all(|&e| e == 0)
    }

    fn zip_with(&self, other: &Self, op: impl Fn(u32, u32) -> u32) -> Self {
        Self {
            ring: self.ring.clone(),
            exponents: self
                .exponents
                .iter()
                .zip(other.exponents.iter())
                .map(|(&a, &b)| op(a, b))
                .collect(),
        }
    }

    /// Product of two monomials already known to share a ring.
    pub(crate) fn mul_exponents(&self, other: &Self) -> Result<Self> {
        let exponents = self
            .exponents
            .iter()
            .zip(other.exponents.iter())
            .enumerate()
            .map(|(var, (&a, &b))| {
                a.checked_add(b)
                    .ok_or_else(|| overflow(&self.ring, var))
            })
            .collect::<Result<_>>()?;
        Ok(Self {
            ring: self.ring.clone(),
            exponents,
        })
    }

    pub fn try_mul(&self, other: &Self) -> Result<Self> {
        self.ring.check_same(&other.ring)?;
        self.mul_exponents(other)
    }

    /// True iff `other` divides `self`, i.e. no exponent of `other` exceeds
    /// the matching exponent of `self`. Monomials of different rings never
    /// divide each other.
    pub fn is_divisible(&self, other: &Self) -> bool {
        self.ring == other.ring
            && self
                .exponents
                .iter()
                .zip(other.exponents.iter())
                .all(|(a, b)| a >= b)
    }

    pub(crate) fn checked_div(&self, other: &Self) -> Option<Self> {
        self.is_divisible(other)
            .then(|| self.zip_with(other, |a, b| a - b))
    }

    pub fn try_div(&self, other: &Self) -> Result<Self> {
        self.ring.check_same(&other.ring)?;
        self.checked_div(other).ok_or_else(|| Error::NegativeExponent {
            dividend: self.to_string(),
            divisor: other.to_string(),
        })
    }

    pub fn gcd(&self, other: &Self) -> Result<Self> {
        self.ring.check_same(&other.ring)?;
        Ok(self.zip_with(other, u32::min))
    }

    pub fn lcm(&self, other: &Self) -> Result<Self> {
        self.ring.check_same(&other.ring)?;
        Ok(self.zip_with(other, u32::max))
    }

    pub fn pow(&self, k: u32) -> Result<Self> {
        let exponents = self
            .exponents
            .iter()
            .enumerate()
            .map(|(var, &e)| {
                e.checked_mul(k)
                    .ok_or_else(|| overflow(&self.ring, var))
            })
            .collect::<Result<_>>()?;
        Ok(Self {
            ring: self.ring.clone(),
            exponents,
        })
    }

    /// Compares under the ring's monomial order.
    pub fn compare(&self, other: &Self) -> Result<Ordering> {
        self.ring.check_same(&other.ring)?;
        Ok(self.cmp(other))
    }
}

impl PartialOrd for Monomial {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Ordering is only meaningful between monomials of one ring: the exponent
/// vectors are compared under `self`'s order without looking at the rings.
/// Use [`Monomial::compare`] when the operands may come from different rings.
impl Ord for Monomial {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ring
            .order()
            .compare(&self.exponents, &other.exponents)
    }
}

impl Display for Monomial {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_constant() {
            return write!(f, "1");
        }
        let mut first = true;
        for (name, &exp) in self.ring.variable_names().iter().zip(self.exponents.iter()) {
            if exp == 0 {
                continue;
            }
            if !first {
                write!(f, "*")?;
            }
            first = false;
            match exp {
                1 => write!(f, "{}", name)?,
                _ => write!(f, "{}^{}", name, exp)?,
            }
        }
        Ok(())
    }
}

impl Debug for Monomial {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(self, f)
    }
}

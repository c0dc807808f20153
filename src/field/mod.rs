//! Exact coefficient fields: the rationals `QQ` and prime fields `GF(p)`.
//!
//! A computation picks one [`CoefficientField`]; every coefficient it touches
//! is a [`FieldElement`] of that field. Combining elements of different
//! fields fails with [`Error::IncompatibleField`].

pub mod prime;
pub mod rational;

use crate::error::{Error, Result};
use num_bigint::BigInt;
use prime::PrimeElement;
use rational::Rational;
use std::{fmt, ops::Neg};

/// Which field the coefficients of a ring live in.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum CoefficientField {
    Rational,
    Prime(BigInt),
}

impl CoefficientField {
    /// `GF(p)`; `p` is trusted to be prime, only `p >= 2` is checked.
    pub fn prime(modulus: impl Into<BigInt>) -> Result<Self> {
        let modulus = modulus.into();
        if modulus < BigInt::from(2) {
            return Err(Error::InvalidModulus(modulus.to_string()));
        }
        Ok(Self::Prime(modulus))
    }

    pub fn from_integer(&self, value: impl Into<BigInt>) -> FieldElement {
        match self {
            Self::Rational => FieldElement::Rational(Rational::from_integer(value)),
            Self::Prime(p) => FieldElement::Prime(PrimeElement::reduced(value.into(), p.clone())),
        }
    }

    /// `numerator / denominator` inside this field.
    pub fn from_ratio(
        &self,
        numerator: impl Into<BigInt>,
        denominator: impl Into<BigInt>,
    ) -> Result<FieldElement> {
        match self {
            Self::Rational => Rational::new(numerator, denominator).map(FieldElement::Rational),
            Self::Prime(_) => self
                .from_integer(numerator)
                .try_div(&self.from_integer(denominator)),
        }
    }

    pub fn zero(&self) -> FieldElement {
        self.from_integer(0)
    }

    pub fn one(&self) -> FieldElement {
        self.from_integer(1)
    }

    pub fn contains(&self, element: &FieldElement) -> bool {
        match (self, element) {
            (Self::Rational, FieldElement::Rational(_)) => true,
            (Self::Prime(p), FieldElement::Prime(x)) => p == x.modulus(),
            _ => false,
        }
    }

    /// Accepts `element` only if it already belongs to this field; no
    /// conversion between moduli or from rationals is attempted.
    pub fn coerce(&self, element: FieldElement) -> Result<FieldElement> {
        if self.contains(&element) {
            Ok(element)
        } else {
            Err(Error::IncompatibleField {
                left: self.to_string(),
                right: element.field().to_string(),
            })
        }
    }
}

impl fmt::Display for CoefficientField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rational => write!(f, "QQ"),
            Self::Prime(p) => write!(f, "GF({})", p),
        }
    }
}

/// A scalar of either supported field kind.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum FieldElement {
    Rational(Rational),
    Prime(PrimeElement),
}

impl FieldElement {
    pub fn rational(numerator: impl Into<BigInt>, denominator: impl Into<BigInt>) -> Result<Self> {
        Rational::new(numerator, denominator).map(Self::Rational)
    }

    pub fn prime(value: impl Into<BigInt>, modulus: impl Into<BigInt>) -> Result<Self> {
        PrimeElement::new(value, modulus).map(Self::Prime)
    }

    pub fn field(&self) -> CoefficientField {
        match self {
            Self::Rational(_) => CoefficientField::Rational,
            Self::Prime(x) => CoefficientField::Prime(x.modulus().clone()),
        }
    }

    pub fn is_zero(&self) -> bool {
        match self {
            Self::Rational(x) => x.is_zero(),
            Self::Prime(x) => x.is_zero(),
        }
    }

    pub fn is_one(&self) -> bool {
        match self {
            Self::Rational(x) => x.is_one(),
            Self::Prime(x) => x.is_one(),
        }
    }

    /// Only rationals carry a sign; prime-field representatives never do.
    pub fn is_negative(&self) -> bool {
        match self {
            Self::Rational(x) => x.is_negative(),
            Self::Prime(_) => false,
        }
    }

    fn combine(
        &self,
        other: &Self,
        rational: impl FnOnce(&Rational, &Rational) -> Result<Rational>,
        prime: impl FnOnce(&PrimeElement, &PrimeElement) -> Result<PrimeElement>,
    ) -> Result<Self> {
        match (self, other) {
            (Self::Rational(a), Self::Rational(b)) => rational(a, b).map(Self::Rational),
            (Self::Prime(a), Self::Prime(b)) => prime(a, b).map(Self::Prime),
            _ => Err(Error::IncompatibleField {
                left: self.field().to_string(),
                right: other.field().to_string(),
            }),
        }
    }

    pub fn try_add(&self, other: &Self) -> Result<Self> {
        self.combine(other, |a, b| Ok(a + b), PrimeElement::try_add)
    }

    pub fn try_sub(&self, other: &Self) -> Result<Self> {
        self.combine(other, |a, b| Ok(a - b), PrimeElement::try_sub)
    }

    pub fn try_mul(&self, other: &Self) -> Result<Self> {
        self.combine(other, |a, b| Ok(a * b), PrimeElement::try_mul)
    }

    /// `self * other^-1`, failing with [`Error::DivisionByZero`] on a zero divisor.
    pub fn try_div(&self, other: &Self) -> Result<Self> {
        self.combine(other, Rational::checked_div, PrimeElement::try_div)
    }

    pub fn inverse(&self) -> Result<Self> {
        match self {
            Self::Rational(x) => x.inverse().map(Self::Rational),
            Self::Prime(x) => x.inverse().map(Self::Prime),
        }
    }
}

impl Neg for &FieldElement {
    type Output = FieldElement;

    fn neg(self) -> Self::Output {
        match self {
            FieldElement::Rational(x) => FieldElement::Rational(-x),
            FieldElement::Prime(x) => FieldElement::Prime(-x),
        }
    }
}

impl Neg for FieldElement {
    type Output = FieldElement;

    fn neg(self) -> Self::Output {
        -&self
    }
}

impl From<Rational> for FieldElement {
    fn from(value: Rational) -> Self {
        Self::Rational(value)
    }
}

impl From<PrimeElement> for FieldElement {
    fn from(value: PrimeElement) -> Self {
        Self::Prime(value)
    }
}

impl fmt::Display for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rational(x) => fmt::Display::fmt(x, f),
            Self::Prime(x) => fmt::Display::fmt(x, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rational_reduces_on_construction() {
        assert_eq!(FieldElement::rational(6, 9), FieldElement::rational(2, 3));
    }

    #[test]
    fn test_prime_field_addition() {
        let f7 = CoefficientField::prime(7).unwrap();
        let sum = f7.from_integer(6).try_add(&f7.from_integer(3)).unwrap();
        assert_eq!(sum, f7.from_integer(2));
        assert_eq!(f7.from_integer(-1), f7.from_integer(6));
    }

    #[test]
    fn test_incompatible_fields() {
        let f5 = CoefficientField::prime(5).unwrap();
        let f7 = CoefficientField::prime(7).unwrap();
        let qq = CoefficientField::Rational;

        assert!(matches!(
            f5.one().try_mul(&f7.one()),
            Err(Error::IncompatibleField { .. })
        ));
        assert!(matches!(
            qq.one().try_add(&f7.one()),
            Err(Error::IncompatibleField { .. })
        ));
        // no silent truncation to the smaller modulus
        assert!(matches!(
            f5.coerce(f7.from_integer(6)),
            Err(Error::IncompatibleField { .. })
        ));
        assert_eq!(f7.coerce(f7.from_integer(6)), Ok(f7.from_integer(6)));
    }

    #[test]
    fn test_division() {
        let qq = CoefficientField::Rational;
        let f19 = CoefficientField::prime(19).unwrap();

        assert_eq!(
            qq.from_integer(3).try_div(&qq.from_integer(5)),
            qq.from_ratio(3, 5)
        );
        assert_eq!(qq.one().try_div(&qq.zero()), Err(Error::DivisionByZero));
        assert_eq!(f19.one().try_div(&f19.zero()), Err(Error::DivisionByZero));
        assert_eq!(f19.from_ratio(13, 5), Ok(f19.from_integer(14)));
        assert!(matches!(f19.zero().inverse(), Err(Error::NotInvertible { .. })));
        assert!(matches!(qq.zero().inverse(), Err(Error::NotInvertible { .. })));
    }

    #[test]
    fn test_sign_and_display() {
        let qq = CoefficientField::Rational;
        let f5 = CoefficientField::prime(5).unwrap();

        assert!(qq.from_ratio(-1, 3).unwrap().is_negative());
        assert!(!f5.from_integer(-1).is_negative());
        assert_eq!((-qq.from_ratio(1, 3).unwrap()).to_string(), "-1/3");
        assert_eq!((-f5.from_integer(1)).to_string(), "4");
        assert_eq!(qq.to_string(), "QQ");
        assert_eq!(f5.to_string(), "GF(5)");
    }

    #[test]
    fn test_invalid_modulus() {
        assert!(matches!(
            CoefficientField::prime(0),
            Err(Error::InvalidModulus(_))
        ));
    }
}

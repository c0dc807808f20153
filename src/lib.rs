//! Exact Gröbner bases with Buchberger's algorithm.
//!
//! A computation fixes a [`Ring`]: a coefficient field (`QQ` or `GF(p)`),
//! an ordered list of variables and a [`MonomialOrder`]. Polynomials of
//! that ring feed [`groebner`], [`is_groebner`] and [`reduced_groebner`].
//!
//! ```
//! use buchberger::{groebner, is_groebner, CoefficientField, MonomialOrder, Ring};
//!
//! let ring = Ring::from_chars(CoefficientField::Rational, "xy", MonomialOrder::GradedLex)?;
//! let ideal = ring.parse_list("[x^3 - 2*x*y, x^2*y - 2*y^2 + x]")?;
//! let basis = groebner(&ideal)?;
//! assert!(is_groebner(&basis)?);
//! # Ok::<(), buchberger::Error>(())
//! ```

#![allow(clippy::type_complexity)]

pub mod error;
pub mod field;
pub mod groebner;
pub mod poly;

pub use crate::{
    error::{Error, Result},
    field::{prime::PrimeElement, rational::Rational, CoefficientField, FieldElement},
    groebner::{groebner, is_groebner, reduce_groebner_basis, reduced_groebner, PairScan},
    poly::{
        monomial::{GradedLexOrder, LexOrder, Monomial, MonomialOrd, MonomialOrder},
        polynomial::Polynomial,
        ring::{Ring, RingElement},
    },
};

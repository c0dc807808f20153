//! Rings, monomials and sparse polynomials over a [`crate::field::CoefficientField`].

pub mod monomial;
pub mod parse;
pub mod polynomial;
pub mod ring;

use crate::error::{Error, Result};
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Zero};
use std::{fmt, ops::Neg};

/// An element of `GF(p)`, stored as its representative in `[0, p)`.
///
/// The modulus is trusted to be prime; only `p >= 2` is checked.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct PrimeElement {
    value: BigInt,
    modulus: BigInt,
}

impl PrimeElement {
    pub fn new(value: impl Into<BigInt>, modulus: impl Into<BigInt>) -> Result<Self> {
        let modulus = modulus.into();
        if modulus < BigInt::from(2) {
            return Err(Error::InvalidModulus(modulus.to_string()));
        }
        Ok(Self::reduced(value.into(), modulus))
    }

    /// `value mod modulus` for an already validated modulus.
    pub(crate) fn reduced(value: BigInt, modulus: BigInt) -> Self {
        Self {
            value: value.mod_floor(&modulus),
            modulus,
        }
    }

    pub fn value(&self) -> &BigInt {
        &self.value
    }

    pub fn modulus(&self) -> &BigInt {
        &self.modulus
    }

    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    pub fn is_one(&self) -> bool {
        self.value.is_one()
    }

    fn check_modulus(&self, other: &Self) -> Result<()> {
        if self.modulus == other.modulus {
            Ok(())
        } else {
            Err(Error::IncompatibleField {
                left: format!("GF({})", self.modulus),
                right: format!("GF({})", other.modulus),
            })
        }
    }

    pub fn try_add(&self, other: &Self) -> Result<Self> {
        self.check_modulus(other)?;
        Ok(Self::reduced(&self.value + &other.value, self.modulus.clone()))
    }

    pub fn try_sub(&self, other: &Self) -> Result<Self> {
        self.check_modulus(other)?;
        Ok(Self::reduced(&self.value - &other.value, self.modulus.clone()))
    }

    pub fn try_mul(&self, other: &Self) -> Result<Self> {
        self.check_modulus(other)?;
        Ok(Self::reduced(&self.value * &other.value, self.modulus.clone()))
    }

    /// Inverse through the extended Euclidean algorithm: `y` with
    /// `x * y = 1 (mod p)`, defined only when `gcd(x, p) == 1`.
    pub fn inverse(&self) -> Result<Self> {
        let egcd = self.value.extended_gcd(&self.modulus);
        if !egcd.gcd.is_one() {
            return Err(Error::NotInvertible {
                value: self.value.to_string(),
                field: format!("GF({})", self.modulus),
            });
        }
        Ok(Self::reduced(egcd.x, self.modulus.clone()))
    }

    pub fn try_div(&self, other: &Self) -> Result<Self> {
        self.check_modulus(other)?;
        if other.is_zero() {
            return Err(Error::DivisionByZero);
        }
        self.try_mul(&other.inverse()?)
    }
}

impl Neg for &PrimeElement {
    type Output = PrimeElement;

    fn neg(self) -> Self::Output {
        PrimeElement::reduced(-&self.value, self.modulus.clone())
    }
}

impl fmt::Display for PrimeElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

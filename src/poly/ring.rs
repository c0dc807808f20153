use crate::{
    error::{Error, Result},
    field::{prime::PrimeElement, rational::Rational, CoefficientField, FieldElement},
    poly::{
        monomial::{Monomial, MonomialOrder},
        polynomial::Polynomial,
    },
};
use hashbrown::HashMap;
use num_bigint::BigInt;
use std::{fmt, sync::Arc};

/// Immutable description of a polynomial ring: coefficient field, ordered
/// variable names and the monomial order used to pick leading terms.
///
/// Cloning is cheap; every monomial and polynomial carries a handle to its ring.
#[derive(Clone)]
pub struct Ring(Arc<RingDescriptor>);

struct RingDescriptor {
    field: CoefficientField,
    variables: Vec<String>,
    index: HashMap<String, usize>,
    order: MonomialOrder,
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => chars.all(|c| c.is_alphanumeric() || c == '_'),
        _ => false,
    }
}

impl Ring {
    pub fn new<I, S>(field: CoefficientField, variables: I, order: MonomialOrder) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let variables: Vec<String> = variables.into_iter().map(Into::into).collect();
        if variables.is_empty() {
            return Err(Error::InvalidVariableList("no variables given".to_owned()));
        }

        let mut index = HashMap::with_capacity(variables.len());
        for (i, name) in variables.iter().enumerate() {
            if !is_identifier(name) {
                return Err(Error::InvalidVariableList(format!(
                    "{:?} is not an identifier",
                    name
                )));
            }
            if index.insert(name.clone(), i).is_some() {
                return Err(Error::InvalidVariableList(format!("{:?} is repeated", name)));
            }
        }

        Ok(Self(Arc::new(RingDescriptor {
            field,
            variables,
            index,
            order,
        })))
    }

    /// One single-character variable per `char` of `names`, e.g. `"xyz"`.
    pub fn from_chars(field: CoefficientField, names: &str, order: MonomialOrder) -> Result<Self> {
        Self::new(field, names.chars().map(String::from), order)
    }

    pub fn field(&self) -> &CoefficientField {
        &self.0.field
    }

    pub fn variable_names(&self) -> &[String] {
        &self.0.variables
    }

    pub fn num_vars(&self) -> usize {
        self.0.variables.len()
    }

    pub fn order(&self) -> MonomialOrder {
        self.0.order
    }

    pub fn variable_index(&self, name: &str) -> Option<usize> {
        self.0.index.get(name).copied()
    }

    /// The ring's generators `x_0, x_1, ...` as polynomials.
    pub fn variables(&self) -> Vec<Polynomial> {
        (0..self.num_vars())
            .map(|i| Polynomial::from_monomial(Monomial::variable(self, i)))
            .collect()
    }

    pub fn zero(&self) -> Polynomial {
        Polynomial::zero(self)
    }

    pub fn one(&self) -> Polynomial {
        Polynomial::from_monomial(Monomial::one(self))
    }

    pub fn monomial(&self, exponents: &[u32]) -> Result<Monomial> {
        Monomial::new(self, exponents.to_vec())
    }

    pub fn polynomial(&self, terms: &[(FieldElement, Monomial)]) -> Result<Polynomial> {
        Polynomial::new(self, terms)
    }

    /// Lifts any [`RingElement`] into a polynomial of this ring. Scalars must
    /// already belong to the coefficient field; monomials and polynomials
    /// must already belong to this ring.
    pub fn coerce(&self, element: impl Into<RingElement>) -> Result<Polynomial> {
        match element.into() {
            RingElement::Integer(n) => Polynomial::constant(self, self.field().from_integer(n)),
            RingElement::Scalar(c) => Polynomial::constant(self, c),
            RingElement::Monomial(m) => {
                self.check_same(m.ring())?;
                Ok(Polynomial::from_monomial(m))
            },
            RingElement::Polynomial(p) => {
                self.check_same(p.ring())?;
                Ok(p)
            },
        }
    }

    pub(crate) fn check_same(&self, other: &Ring) -> Result<()> {
        if self == other {
            Ok(())
        } else {
            Err(Error::RingMismatch {
                left: self.to_string(),
                right: other.to_string(),
            })
        }
    }
}

impl PartialEq for Ring {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
            || (self.0.field == other.0.field
                && self.0.order == other.0.order
                && self.0.variables == other.0.variables)
    }
}

impl Eq for Ring {}

impl fmt::Display for Ring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Polynomial Ring in {} variable(s), {} over {}",
            self.num_vars(),
            self.0.variables.join(", "),
            self.0.field
        )
    }
}

impl fmt::Debug for Ring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self, self.0.order)
    }
}

/// Anything that can be lifted into a polynomial ring.
#[derive(Clone, Debug)]
pub enum RingElement {
    Integer(BigInt),
    Scalar(FieldElement),
    Monomial(Monomial),
    Polynomial(Polynomial),
}

impl From<i32> for RingElement {
    fn from(value: i32) -> Self {
        Self::Integer(value.into())
    }
}

impl From<i64> for RingElement {
    fn from(value: i64) -> Self {
        Self::Integer(value.into())
    }
}

impl From<BigInt> for RingElement {
    fn from(value: BigInt) -> Self {
        Self::Integer(value)
    }
}

impl From<FieldElement> for RingElement {
    fn from(value: FieldElement) -> Self {
        Self::Scalar(value)
    }
}

impl From<Rational> for RingElement {
    fn from(value: Rational) -> Self {
        Self::Scalar(value.into())
    }
}

impl From<PrimeElement> for RingElement {
    fn from(value: PrimeElement) -> Self {
        Self::Scalar(value.into())
    }
}

impl From<Monomial> for RingElement {
    fn from(value: Monomial) -> Self {
        Self::Monomial(value)
    }
}

impl From<Polynomial> for RingElement {
    fn from(value: Polynomial) -> Self {
        Self::Polynomial(value)
    }
}

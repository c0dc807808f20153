//! Error types shared by the field, polynomial and Gröbner layers.

use thiserror::Error;

/// Every failure the crate reports. All of them are synchronous and local:
/// the operation that hits one aborts and hands it back unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Division by the zero field element, or by a divisor list whose
    /// members are all the zero polynomial.
    #[error("division by zero")]
    DivisionByZero,

    /// The element has no multiplicative inverse in its field.
    #[error("{value} is not invertible in {field}")]
    NotInvertible {
        /// Rendering of the offending element.
        value: String,
        /// Rendering of the field it lives in.
        field: String,
    },

    /// Operands belong to different polynomial rings.
    #[error("ring mismatch: {left} vs {right}")]
    RingMismatch {
        /// Description of the left operand's ring.
        left: String,
        /// Description of the right operand's ring.
        right: String,
    },

    /// Field elements of different kinds or moduli were combined.
    #[error("incompatible fields: {left} vs {right}")]
    IncompatibleField {
        /// The left operand's field.
        left: String,
        /// The right operand's field.
        right: String,
    },

    /// Monomial division whose divisor exceeds the dividend in some variable.
    #[error("monomial {dividend} is not divisible by {divisor}")]
    NegativeExponent {
        /// Rendering of the dividend.
        dividend: String,
        /// Rendering of the divisor.
        divisor: String,
    },

    /// A polynomial was raised to a negative power.
    #[error("invalid exponent {0}, polynomial powers must be non-negative")]
    InvalidExponent(i64),

    /// A monomial product or power whose exponent in the named variable
    /// does not fit in a `u32`.
    #[error("exponent of {0} overflows")]
    ExponentOverflow(String),

    /// Duplicate, empty or malformed variable names at ring construction.
    #[error("invalid variable list: {0}")]
    InvalidVariableList(String),

    /// An exponent vector whose length differs from the ring's arity.
    #[error("exponent vector has {found} entries, ring has {expected} variables")]
    ArityMismatch {
        /// Arity of the ring.
        expected: usize,
        /// Length of the supplied vector.
        found: usize,
    },

    /// A prime-field modulus smaller than 2.
    #[error("invalid modulus {0}")]
    InvalidModulus(String),

    /// A caller-side precondition of an engine entry point does not hold.
    #[error("precondition violated: {0}")]
    PreconditionViolation(String),

    /// Polynomial text that could not be read.
    #[error("cannot parse {input:?}: {message}")]
    Parse {
        /// The offending fragment.
        input: String,
        /// What went wrong.
        message: String,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

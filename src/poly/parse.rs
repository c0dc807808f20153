//! Reading polynomials from text.
//!
//! Accepts sums of products such as `3*x^2*y - 2/3*z + 1` as well as the
//! rendering produced by `Display` (`x + (-2)*y^2`, `2*1`), so printing a
//! polynomial and reading it back gives the same polynomial.

use crate::{
    error::{Error, Result},
    field::FieldElement,
    poly::{monomial::Monomial, polynomial::Polynomial, ring::Ring},
};
use fancy_regex::Regex;
use num_bigint::BigInt;
use once_cell::sync::Lazy;

static TERM_SPLIT: Lazy<std::result::Result<Regex, fancy_regex::Error>> =
    Lazy::new(|| Regex::new(r"(?=[+-])"));

fn parse_error(input: &str, message: impl Into<String>) -> Error {
    Error::Parse {
        input: input.to_owned(),
        message: message.into(),
    }
}

/// Cuts `text` in front of every sign, keeping the sign with its term.
fn split_terms(text: &str) -> Result<Vec<&str>> {
    let splitter = TERM_SPLIT
        .as_ref()
        .map_err(|e| parse_error(text, e.to_string()))?;
    let mut result = Vec::new();
    let mut prev_match_end = 0;

    for captures in splitter.captures_iter(text) {
        let captures = captures.map_err(|e| parse_error(text, e.to_string()))?;
        if let Some(mat) = captures.get(0) {
            let part = &text[prev_match_end..mat.start()];
            if !part.is_empty() {
                result.push(part);
            }
            prev_match_end = mat.end();
        }
    }

    let remaining_part = &text[prev_match_end..];
    if !remaining_part.is_empty() {
        result.push(remaining_part);
    }
    Ok(result)
}

fn parse_integer(text: &str) -> Result<BigInt> {
    text.parse::<BigInt>()
        .map_err(|e| parse_error(text, e.to_string()))
}

impl Ring {
    fn parse_coefficient(&self, factor: &str) -> Result<FieldElement> {
        match factor.split_once('/') {
            Some((n, d)) => self
                .field()
                .from_ratio(parse_integer(n)?, parse_integer(d)?),
            None => Ok(self.field().from_integer(parse_integer(factor)?)),
        }
    }

    fn parse_power(&self, factor: &str) -> Result<(usize, u32)> {
        let (name, power) = match factor.split_once('^') {
            Some((name, power)) => (
                name,
                power
                    .parse::<u32>()
                    .map_err(|e| parse_error(factor, e.to_string()))?,
            ),
            None => (factor, 1),
        };
        let var = self
            .variable_index(name)
            .ok_or_else(|| parse_error(factor, format!("unknown variable {:?}", name)))?;
        Ok((var, power))
    }

    fn parse_term(&self, term: &str, negative: bool) -> Result<(FieldElement, Monomial)> {
        let mut coeff = self.field().one();
        let mut powers = Vec::new();

        for factor in term.split('*') {
            match factor.chars().next() {
                None => return Err(parse_error(term, "empty factor")),
                Some(c) if c.is_ascii_digit() => {
                    coeff = coeff.try_mul(&self.parse_coefficient(factor)?)?;
                },
                Some(_) => powers.push(self.parse_power(factor)?),
            }
        }

        if negative {
            coeff = -coeff;
        }
        Ok((coeff, Monomial::from_sparse(self, &powers)?))
    }

    /// Reads one polynomial of this ring. Whitespace and parentheses are
    /// ignored; an empty string or `0` is the zero polynomial.
    pub fn parse(&self, text: &str) -> Result<Polynomial> {
        let cleaned: String = text
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '(' && *c != ')')
            .collect();

        let mut terms = Vec::new();
        let mut negative = false;
        let mut dangling = false;
        for part in split_terms(&cleaned)? {
            let body = part.trim_start_matches(|c| c == '+' || c == '-');
            negative ^= part[..part.len() - body.len()]
                .chars()
                .filter(|&c| c == '-')
                .count()
                % 2
                == 1;
            // a bare sign, as in `x + -2*y` once parentheses are gone
            if body.is_empty() {
                dangling = true;
                continue;
            }
            terms.push(self.parse_term(body, negative)?);
            negative = false;
            dangling = false;
        }
        if dangling {
            return Err(parse_error(text, "dangling sign"));
        }

        Polynomial::new(self, &terms)
    }

    /// Reads a bracketed, comma separated list such as `[x*y - 1, y^2 - 1]`.
    pub fn parse_list(&self, text: &str) -> Result<Vec<Polynomial>> {
        let inner = text
            .trim()
            .strip_prefix('[')
            .and_then(|s| s.strip_suffix(']'))
            .ok_or_else(|| parse_error(text, "expected a list in square brackets"))?;
        if inner.trim().is_empty() {
            return Ok(Vec::new());
        }
        inner.split(',').map(|p| self.parse(p)).collect()
    }
}

//! Validation of caller-supplied denominations and amounts.

use std::fmt::Display;

use log::warn;
use num_integer::Integer;
use num_traits::PrimInt;

use crate::error::{Error, Result};

/// What to do with a denomination that is zero or negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DenominationPolicy {
    /// Fail with [`Error::InvalidArgument`].
    #[default]
    Reject,
    /// Drop the value, log a warning and solve with the rest.
    Discard,
}

/// A checked set of strictly positive coin values.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Denominations {
    values: Vec<usize>,
}

impl Denominations {
    /// Validates `values` according to `policy`.
    ///
    /// With `deduplicate` the set is sorted ascending and repeated values are
    /// dropped; otherwise the caller's order is kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use coinchange::{DenominationPolicy, Denominations};
    ///
    /// let set = Denominations::new(&[5, 1, 2, 1], DenominationPolicy::Reject, true).unwrap();
    /// assert_eq!(set.as_slice(), &[1, 2, 5]);
    ///
    /// assert!(Denominations::new(&[1, 0], DenominationPolicy::Reject, true).is_err());
    ///
    /// let set = Denominations::new(&[3, -2, 0], DenominationPolicy::Discard, false).unwrap();
    /// assert_eq!(set.as_slice(), &[3]);
    /// ```
    pub fn new<T>(values: &[T], policy: DenominationPolicy, deduplicate: bool) -> Result<Self>
    where
        T: PrimInt + Display,
    {
        let mut accepted = Vec::with_capacity(values.len());

        for (index, &value) in values.iter().enumerate() {
            if value < T::one() {
                match policy {
                    DenominationPolicy::Reject => {
                        return Err(Error::invalid(format!(
                            "denomination at index {} must be positive, got {}",
                            index, value
                        )));
                    }
                    DenominationPolicy::Discard => {
                        warn!(
                            "discarding non-positive denomination {} at index {}",
                            value, index
                        );
                        continue;
                    }
                }
            }

            let coin = value.to_usize().ok_or_else(|| {
                Error::invalid(format!(
                    "denomination {} at index {} does not fit in usize",
                    value, index
                ))
            })?;
            accepted.push(coin);
        }

        if deduplicate {
            accepted.sort_unstable();
            accepted.dedup();
        }

        Ok(Self { values: accepted })
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Greatest common divisor of all values, `None` for an empty set.
    ///
    /// Every reachable amount is a multiple of it.
    pub fn gcd(&self) -> Option<usize> {
        self.values.iter().copied().reduce(|a, b| a.gcd(&b))
    }
}

/// Converts a caller-supplied amount into a table size.
///
/// Negative amounts and amounts that do not fit in a `usize` are rejected.
pub fn parse_amount<T>(amount: T) -> Result<usize>
where
    T: PrimInt + Display,
{
    if amount < T::zero() {
        return Err(Error::invalid(format!(
            "amount must be non-negative, got {}",
            amount
        )));
    }
    amount
        .to_usize()
        .ok_or_else(|| Error::invalid(format!("amount {} does not fit in usize", amount)))
}

use thiserror::Error;

/// Errors produced while validating input or running a solver.
///
/// An amount that cannot be formed from the given denominations is *not* an
/// error: solvers report it as `None` (or [`INFEASIBLE`](crate::INFEASIBLE)).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Negative amounts, non-positive denominations, or values that do not fit
    /// in a `usize`.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The amount exceeds the configured `max_amount`.
    #[error("amount {amount} exceeds the configured limit of {limit}")]
    AmountTooLarge { amount: usize, limit: usize },

    /// The number of combinations does not fit in a `usize`.
    #[error("combination count overflowed while counting ways to form {amount}")]
    Overflow { amount: usize },

    /// The table for `amount` is larger than the allocator can provide.
    #[error("a table for amount {amount} cannot be allocated")]
    Allocation { amount: usize },

    /// A coin count has no `i64` representation.
    #[error("coin count {count} does not fit in an i64")]
    CountOutOfRange { count: usize },
}

impl Error {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

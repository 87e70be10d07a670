//! Validated, configurable entry points over the tabulation core.
//!
//! The functions in [`coin_change`](super::coin_change) trust their input.
//! [`MinCoinSolver`] accepts any primitive integer type, checks amounts and
//! denominations, and divides everything by the denominations' gcd before
//! building a table.

use std::fmt::Display;

use log::debug;
use num_traits::PrimInt;

use super::coin_change::{count_change_ways, try_make_change, try_min_coins_for_change};
use super::cost_table::CostTable;
use super::denominations::{parse_amount, DenominationPolicy, Denominations};
use crate::error::{Error, Result};

/// Returned by [`min_coins`] when no combination forms the amount.
pub const INFEASIBLE: i64 = -1;

/// Configuration for [`MinCoinSolver`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverConfig {
    /// How zero and negative denominations are handled
    pub denomination_policy: DenominationPolicy,
    /// Collapse repeated denominations before solving
    pub deduplicate: bool,
    /// Largest amount accepted, `None` for no limit
    pub max_amount: Option<usize>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            denomination_policy: DenominationPolicy::Reject,
            deduplicate: true,
            max_amount: None,
        }
    }
}

/// Denominations and amount after dividing out their common factor.
struct Reduced {
    coins: Vec<usize>,
    amount: usize,
    factor: usize,
}

/// Minimum-coin solver over validated input.
///
/// Holds only its configuration, so one instance can be shared freely across
/// threads.
///
/// # Examples
///
/// ```
/// use coinchange::{DenominationPolicy, MinCoinSolver, SolverConfig};
///
/// let solver = MinCoinSolver::default();
/// assert_eq!(solver.min_coins(&[1, 2, 5], 11).unwrap(), Some(3));
/// assert_eq!(solver.min_coins(&[2], 3).unwrap(), None);
/// assert!(solver.min_coins(&[0, 1], 3).is_err());
///
/// let lenient = MinCoinSolver::new(SolverConfig {
///     denomination_policy: DenominationPolicy::Discard,
///     ..SolverConfig::default()
/// });
/// assert_eq!(lenient.min_coins(&[0, 1], 3).unwrap(), Some(3));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MinCoinSolver {
    config: SolverConfig,
}

impl MinCoinSolver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Fewest coins summing exactly to `amount`, or `None` if impossible.
    pub fn min_coins<T>(&self, denominations: &[T], amount: T) -> Result<Option<usize>>
    where
        T: PrimInt + Display,
    {
        let (set, amount) = self.prepare(denominations, amount)?;
        let Some(reduced) = reduce(&set, amount) else {
            return Ok(None);
        };
        try_min_coins_for_change(&reduced.coins, reduced.amount)
            .map_err(|err| restore_amount(err, amount))
    }

    /// One optimal combination of coins, largest first, or `None` if impossible.
    ///
    /// ```
    /// use coinchange::MinCoinSolver;
    ///
    /// let solver = MinCoinSolver::default();
    /// assert_eq!(solver.make_change(&[4, 6], 10u32).unwrap(), Some(vec![6, 4]));
    /// ```
    pub fn make_change<T>(&self, denominations: &[T], amount: T) -> Result<Option<Vec<usize>>>
    where
        T: PrimInt + Display,
    {
        let (set, amount) = self.prepare(denominations, amount)?;
        let Some(reduced) = reduce(&set, amount) else {
            return Ok(None);
        };
        let used = try_make_change(&reduced.coins, reduced.amount)
            .map_err(|err| restore_amount(err, amount))?;
        Ok(used.map(|coins| {
            coins
                .into_iter()
                .map(|coin| coin * reduced.factor)
                .collect()
        }))
    }

    /// Number of distinct combinations summing to `amount`.
    pub fn count_ways<T>(&self, denominations: &[T], amount: T) -> Result<usize>
    where
        T: PrimInt + Display,
    {
        let (set, amount) = self.prepare(denominations, amount)?;
        match reduce(&set, amount) {
            Some(reduced) => count_change_ways(&reduced.coins, reduced.amount)
                .map_err(|err| restore_amount(err, amount)),
            None => Ok(0),
        }
    }

    /// The full two-dimensional grid, one row per denomination.
    ///
    /// Built on the validated denominations as given (no gcd reduction), so
    /// the columns are the caller's own sub-amounts.
    pub fn cost_table<T>(&self, denominations: &[T], amount: T) -> Result<CostTable>
    where
        T: PrimInt + Display,
    {
        let (set, amount) = self.prepare(denominations, amount)?;
        CostTable::try_build(set.as_slice(), amount)
    }

    fn prepare<T>(&self, denominations: &[T], amount: T) -> Result<(Denominations, usize)>
    where
        T: PrimInt + Display,
    {
        let amount = parse_amount(amount)?;
        if let Some(limit) = self.config.max_amount {
            if amount > limit {
                return Err(Error::AmountTooLarge { amount, limit });
            }
        }

        let set = Denominations::new(
            denominations,
            self.config.denomination_policy,
            self.config.deduplicate,
        )?;
        debug!(
            "validated {} denominations for amount {}",
            set.len(),
            amount
        );

        Ok((set, amount))
    }
}

/// Divides coins and amount by the coins' gcd.
///
/// `None` means the amount is not a multiple of the gcd and so can't be formed.
fn reduce(set: &Denominations, amount: usize) -> Option<Reduced> {
    match set.gcd() {
        None => Some(Reduced {
            coins: Vec::new(),
            amount,
            factor: 1,
        }),
        Some(factor) if amount % factor != 0 => {
            debug!(
                "amount {} is not a multiple of gcd {}, infeasible without tabulation",
                amount, factor
            );
            None
        }
        Some(factor) => {
            if factor > 1 {
                debug!("dividing denominations and amount by gcd {}", factor);
            }
            Some(Reduced {
                coins: set.as_slice().iter().map(|coin| coin / factor).collect(),
                amount: amount / factor,
                factor,
            })
        }
    }
}

/// Errors from the reduced problem name the reduced amount; report the caller's.
fn restore_amount(err: Error, amount: usize) -> Error {
    match err {
        Error::Overflow { .. } => Error::Overflow { amount },
        Error::Allocation { .. } => Error::Allocation { amount },
        other => other,
    }
}

/// Maps a solver answer onto the integer surface.
fn to_sentinel(count: Option<usize>) -> Result<i64> {
    match count {
        Some(count) => i64::try_from(count).map_err(|_| Error::CountOutOfRange { count }),
        None => Ok(INFEASIBLE),
    }
}

/// Fewest coins summing to `amount`, or [`INFEASIBLE`] (`-1`).
///
/// Uses the default [`SolverConfig`]: non-positive denominations and negative
/// amounts are rejected with [`Error::InvalidArgument`].
///
/// # Examples
///
/// ```
/// use coinchange::{min_coins, INFEASIBLE};
///
/// assert_eq!(min_coins(&[1, 2, 5], 11), Ok(3));
/// assert_eq!(min_coins(&[2], 3), Ok(INFEASIBLE));
/// assert_eq!(min_coins::<i32>(&[], 0), Ok(0));
/// assert!(min_coins(&[1, 2], -4).is_err());
/// ```
pub fn min_coins<T>(denominations: &[T], amount: T) -> Result<i64>
where
    T: PrimInt + Display,
{
    to_sentinel(MinCoinSolver::default().min_coins(denominations, amount)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cs::dynamic::coin_change::min_coins_for_change;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_reference_answers() {
        assert_eq!(min_coins(&[1, 2, 5], 0), Ok(0));
        assert_eq!(min_coins(&[2], 3), Ok(-1));
        assert_eq!(min_coins(&[1, 2, 5], 11), Ok(3));
        assert_eq!(min_coins(&[1], 0), Ok(0));
        assert_eq!(min_coins::<u32>(&[], 5), Ok(-1));
        assert_eq!(min_coins(&[1, 2, 5], 100), Ok(20));
    }

    #[test]
    fn test_zero_amount_for_any_denominations() {
        let sets: [&[i64]; 4] = [&[], &[1], &[7, 3], &[1_000_000]];
        for set in sets {
            assert_eq!(min_coins(set, 0), Ok(0));
        }
    }

    #[test]
    fn test_duplicate_invariance() {
        assert_eq!(min_coins(&[1, 1, 2, 5], 11), min_coins(&[1, 2, 5], 11));

        let keep = MinCoinSolver::new(SolverConfig {
            deduplicate: false,
            ..SolverConfig::default()
        });
        assert_eq!(keep.min_coins(&[5, 1, 1, 2, 5], 11), Ok(Some(3)));
    }

    #[test]
    fn test_idempotent() {
        let solver = MinCoinSolver::default();
        let first = solver.min_coins(&[3, 7, 11], 58);
        let second = solver.min_coins(&[3, 7, 11], 58);
        assert_eq!(first, second);
    }

    #[test]
    fn test_invalid_arguments() {
        assert!(matches!(min_coins(&[1, 2], -1), Err(Error::InvalidArgument(_))));
        assert!(matches!(min_coins(&[1, 0], 4), Err(Error::InvalidArgument(_))));
        assert!(matches!(min_coins(&[-2, 1], 4), Err(Error::InvalidArgument(_))));
        // Rejected even when the amount is zero
        assert!(matches!(min_coins(&[0], 0), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_discard_policy() {
        let solver = MinCoinSolver::new(SolverConfig {
            denomination_policy: DenominationPolicy::Discard,
            ..SolverConfig::default()
        });
        assert_eq!(solver.min_coins(&[0, -5, 2, 5], 11), Ok(Some(4)));
        assert_eq!(solver.min_coins(&[0, -5], 3), Ok(None));
        assert!(solver.min_coins(&[1], -3).is_err());
    }

    #[test]
    fn test_max_amount() {
        let solver = MinCoinSolver::new(SolverConfig {
            max_amount: Some(100),
            ..SolverConfig::default()
        });
        assert_eq!(solver.min_coins(&[1, 2, 5], 100), Ok(Some(20)));
        assert_eq!(
            solver.min_coins(&[1, 2, 5], 101),
            Err(Error::AmountTooLarge {
                amount: 101,
                limit: 100
            })
        );
    }

    #[test]
    fn test_unallocatable_amounts_are_errors() {
        assert_eq!(
            min_coins(&[1usize], usize::MAX),
            Err(Error::Allocation { amount: usize::MAX })
        );
        assert_eq!(
            min_coins(&[1usize], usize::MAX / 2),
            Err(Error::Allocation {
                amount: usize::MAX / 2
            })
        );

        // Reduced by gcd 3 before tabulating, still reported against the real amount
        let solver = MinCoinSolver::default();
        let amount = usize::MAX / 2 / 3 * 3;
        assert_eq!(
            solver.make_change(&[3usize], amount),
            Err(Error::Allocation { amount })
        );
        assert_eq!(
            solver.count_ways(&[1usize], usize::MAX),
            Err(Error::Allocation { amount: usize::MAX })
        );
        assert_eq!(
            solver.cost_table(&[1usize], usize::MAX).map(|t| t.answer()),
            Err(Error::Allocation { amount: usize::MAX })
        );

        // An odd amount from even coins never needs a table
        assert_eq!(solver.min_coins(&[2usize], usize::MAX), Ok(None));
    }

    #[test]
    fn test_sentinel_mapping() {
        assert_eq!(to_sentinel(None), Ok(INFEASIBLE));
        assert_eq!(to_sentinel(Some(7)), Ok(7));
        #[cfg(target_pointer_width = "64")]
        assert_eq!(
            to_sentinel(Some(usize::MAX)),
            Err(Error::CountOutOfRange { count: usize::MAX })
        );
    }

    #[test]
    fn test_gcd_short_circuit() {
        let solver = MinCoinSolver::default();
        assert_eq!(solver.min_coins(&[6, 10, 4], 7), Ok(None));
        // 6 + 6 + 6 or 10 + 4 + 4
        assert_eq!(solver.min_coins(&[6, 10, 4], 18), Ok(Some(3)));
        assert_eq!(solver.count_ways(&[6, 10, 4], 7), Ok(0));
    }

    #[test]
    fn test_gcd_reduction_matches_plain_tabulation() {
        let solver = MinCoinSolver::default();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let scale = rng.gen_range(1..=5usize);
            let coins: Vec<usize> = (0..rng.gen_range(1..=4))
                .map(|_| rng.gen_range(1..=9) * scale)
                .collect();
            let amount = rng.gen_range(0..=120usize);

            assert_eq!(
                solver.min_coins(&coins, amount),
                Ok(min_coins_for_change(&coins, amount)),
                "coins={:?} amount={}",
                coins,
                amount
            );
            assert_eq!(
                solver.count_ways(&coins, amount),
                count_change_ways(&coins, amount)
            );
        }
    }

    #[test]
    fn test_make_change_scales_back() {
        let solver = MinCoinSolver::default();
        let used = solver.make_change(&[4, 6], 22).unwrap().unwrap();
        assert_eq!(used.iter().sum::<usize>(), 22);
        assert_eq!(used.len(), 4);
        assert!(used.iter().all(|c| *c == 4 || *c == 6));

        assert_eq!(solver.make_change(&[4, 6], 0), Ok(Some(vec![])));
        assert_eq!(solver.make_change(&[4, 6], 9), Ok(None));
    }

    #[test]
    fn test_count_ways() {
        let solver = MinCoinSolver::default();
        assert_eq!(solver.count_ways(&[1, 2, 5], 5), Ok(4));
        assert_eq!(solver.count_ways(&[1, 1, 2, 5], 5), Ok(4));
        assert_eq!(solver.count_ways::<i32>(&[], 0), Ok(1));
    }

    #[test]
    fn test_cost_table_uses_validated_input() {
        let solver = MinCoinSolver::default();
        let table = solver.cost_table(&[5, 1, 5], 7).unwrap();
        assert_eq!(table.coins(), &[1, 5]);
        assert_eq!(table.answer(), Some(3));
        assert!(solver.cost_table(&[1], -1).is_err());
    }

    #[test]
    fn test_solver_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MinCoinSolver>();

        let solver = MinCoinSolver::default();
        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4u64)
                .map(|i| {
                    let solver = &solver;
                    scope.spawn(move || solver.min_coins(&[1, 2, 5], 100 + i))
                })
                .collect();
            for handle in handles {
                assert!(matches!(handle.join().unwrap(), Ok(Some(_))));
            }
        });
    }
}

use log::trace;

use crate::error::{Error, Result};

/// Marks a sub-amount that no combination of coins can reach.
pub const UNREACHABLE: usize = usize::MAX;

/// Allocates a table with one cell per sub-amount `0..=amount`, each set to `fill`.
///
/// Fails with [`Error::Allocation`] instead of aborting when the table can't
/// be sized or reserved.
pub(crate) fn try_table(amount: usize, fill: usize) -> Result<Vec<usize>> {
    let len = amount
        .checked_add(1)
        .ok_or(Error::Allocation { amount })?;
    let mut table = Vec::new();
    table
        .try_reserve_exact(len)
        .map_err(|_| Error::Allocation { amount })?;
    table.resize(len, fill);
    Ok(table)
}

fn table_or_panic<T>(result: Result<T>) -> T {
    result.unwrap_or_else(|err| panic!("{}", err))
}

/// Fills the rolled one-dimensional cost table for every sub-amount it covers.
///
/// Coins are the outer loop and sub-amounts ascend in the inner loop, so a
/// coin may feed its own later sub-amounts within the same pass. That is what
/// makes each coin reusable without limit; descending here would turn the
/// problem into the 0/1 variant.
fn try_fill_min_table(coins: &[usize], limit: usize) -> Result<Vec<usize>> {
    let mut dp = try_table(limit, UNREACHABLE)?;
    dp[0] = 0;

    for &coin in coins {
        if coin == 0 {
            continue;
        }
        for curr_amount in coin..=limit {
            if dp[curr_amount - coin] != UNREACHABLE {
                dp[curr_amount] = dp[curr_amount].min(dp[curr_amount - coin] + 1);
            }
        }
    }

    Ok(dp)
}

fn reachable(count: usize) -> Option<usize> {
    (count != UNREACHABLE).then_some(count)
}

pub(crate) fn try_min_coins_for_change(coins: &[usize], amount: usize) -> Result<Option<usize>> {
    // Zero coins are needed for a zero amount, whatever the denominations.
    if amount == 0 {
        return Ok(Some(0));
    }
    if coins.is_empty() {
        return Ok(None);
    }

    Ok(reachable(try_fill_min_table(coins, amount)?[amount]))
}

/// Computes the minimum number of coins needed to form the target `amount`.
///
/// This is the "unbounded" variant: each coin can be used any number of
/// times. Returns `None` if it's impossible to form the `amount` using the
/// given `coins`. Zero-valued coins are ignored; duplicates only cost
/// redundant work.
///
/// # Panics
///
/// Panics if a table of `amount + 1` cells can't be allocated.
/// [`MinCoinSolver`](crate::MinCoinSolver) reports that as an error instead.
///
/// # Examples
///
/// ```
/// use coinchange::min_coins_for_change;
///
/// // 5 + 5 + 1
/// assert_eq!(min_coins_for_change(&[1, 2, 5], 11), Some(3));
///
/// // An odd amount can't be built from even coins
/// assert_eq!(min_coins_for_change(&[2], 3), None);
/// ```
pub fn min_coins_for_change(coins: &[usize], amount: usize) -> Option<usize> {
    table_or_panic(try_min_coins_for_change(coins, amount))
}

/// Solves every amount from `0` to `limit` in one pass.
///
/// Entry `i` of the result is what [`min_coins_for_change`] would return for
/// amount `i`.
///
/// # Panics
///
/// Panics if a table of `limit + 1` cells can't be allocated.
///
/// ```
/// use coinchange::min_coins_up_to;
///
/// let table = min_coins_up_to(&[2, 3], 5);
/// assert_eq!(table, vec![Some(0), None, Some(1), Some(1), Some(2), Some(2)]);
/// ```
pub fn min_coins_up_to(coins: &[usize], limit: usize) -> Vec<Option<usize>> {
    table_or_panic(try_fill_min_table(coins, limit))
        .into_iter()
        .map(reachable)
        .collect()
}

pub(crate) fn try_make_change(coins: &[usize], amount: usize) -> Result<Option<Vec<usize>>> {
    let mut dp = try_table(amount, UNREACHABLE)?;
    // last_coin[i] = coin that produced the current best count for amount i
    let mut last_coin = try_table(amount, 0)?;
    dp[0] = 0;

    for &coin in coins {
        if coin == 0 {
            continue;
        }
        for curr_amount in coin..=amount {
            let prev = dp[curr_amount - coin];
            if prev != UNREACHABLE && prev + 1 < dp[curr_amount] {
                dp[curr_amount] = prev + 1;
                last_coin[curr_amount] = coin;
            }
        }
    }

    if dp[amount] == UNREACHABLE {
        return Ok(None);
    }

    let mut used = Vec::with_capacity(dp[amount]);
    let mut remaining = amount;
    while remaining > 0 {
        let coin = last_coin[remaining];
        trace!("take coin {} at remaining amount {}", coin, remaining);
        used.push(coin);
        remaining -= coin;
    }
    used.sort_unstable_by(|a, b| b.cmp(a));

    Ok(Some(used))
}

/// Returns one combination of coins with the minimum count for `amount`.
///
/// Each cell of the cost table remembers the coin that last improved it.
/// Walking those predecessors back from `amount` to zero yields the coins.
/// When several optimal combinations exist any one of them may be returned.
/// The coins come back largest first.
///
/// # Panics
///
/// Panics if the tables for `amount` can't be allocated.
///
/// # Examples
///
/// ```
/// use coinchange::make_change;
///
/// assert_eq!(make_change(&[1, 2, 5], 11), Some(vec![5, 5, 1]));
/// assert_eq!(make_change(&[1, 2, 5], 0), Some(vec![]));
/// assert_eq!(make_change(&[4], 6), None);
/// ```
pub fn make_change(coins: &[usize], amount: usize) -> Option<Vec<usize>> {
    table_or_panic(try_make_change(coins, amount))
}

/// Computes the number of distinct ways to form `amount` using the given `coins`.
///
/// Ways are multisets, so `1 + 2` and `2 + 1` count once. Duplicate coin
/// values are collapsed before counting and zero-valued coins are ignored.
/// Returns [`Error::Overflow`] if the count does not fit in a `usize` and
/// [`Error::Allocation`] if the table can't be allocated.
///
/// # Examples
///
/// ```
/// use coinchange::count_change_ways;
///
/// // 1+1+1+1+1, 1+1+1+2, 1+2+2, 5
/// assert_eq!(count_change_ways(&[1, 2, 5], 5), Ok(4));
/// ```
pub fn count_change_ways(coins: &[usize], amount: usize) -> Result<usize> {
    let mut distinct: Vec<usize> = coins.iter().copied().filter(|&c| c > 0).collect();
    distinct.sort_unstable();
    distinct.dedup();

    // dp[i] will be the number of ways to form amount i.
    let mut dp = try_table(amount, 0)?;
    dp[0] = 1; // use no coins

    for &coin in &distinct {
        for curr_amount in coin..=amount {
            dp[curr_amount] = dp[curr_amount]
                .checked_add(dp[curr_amount - coin])
                .ok_or(Error::Overflow { amount })?;
        }
    }

    Ok(dp[amount])
}

//! The full two-dimensional coin-change grid.
//!
//! Row `k` holds the best counts using only the first `k + 1` coins, column `s`
//! the sub-amount. The rolled one-dimensional solver in
//! [`coin_change`](super::coin_change) keeps only the last row; this keeps all
//! of them so the answer can be inspected, printed and traced back.

use std::fmt;

use ndarray::Array2;

use super::coin_change::UNREACHABLE;
use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostTable {
    coins: Vec<usize>,
    grid: Array2<usize>,
}

impl CostTable {
    /// Builds the grid for `coins` (one row each, in the given order) and
    /// sub-amounts `0..=amount`.
    ///
    /// ```text
    /// if s >= coin[k]: total[k][s] = min(total[k-1][s], 1 + total[k][s - coin[k]])
    /// else:            total[k][s] = total[k-1][s]
    /// ```
    ///
    /// # Examples
    ///
    /// ```
    /// use coinchange::CostTable;
    ///
    /// let table = CostTable::build(&[1, 5, 6, 8], 11);
    /// assert_eq!(table.answer(), Some(2));
    /// assert_eq!(table.coins_used(), Some(vec![6, 5]));
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if the grid can't be allocated; see [`try_build`](CostTable::try_build).
    pub fn build(coins: &[usize], amount: usize) -> Self {
        Self::try_build(coins, amount).unwrap_or_else(|err| panic!("{}", err))
    }

    /// Like [`build`](CostTable::build), but reports a grid too large to
    /// allocate as [`Error::Allocation`] instead of panicking.
    pub fn try_build(coins: &[usize], amount: usize) -> Result<Self> {
        let too_large = Error::Allocation { amount };
        let columns = amount.checked_add(1).ok_or(too_large.clone())?;
        let len = coins
            .len()
            .checked_mul(columns)
            .ok_or(too_large.clone())?;
        let mut cells = Vec::new();
        cells
            .try_reserve_exact(len)
            .map_err(|_| too_large.clone())?;
        cells.resize(len, UNREACHABLE);
        let mut grid =
            Array2::from_shape_vec((coins.len(), columns), cells).map_err(|_| too_large)?;

        for (row, &coin) in coins.iter().enumerate() {
            grid[[row, 0]] = 0;
            for sum in 1..=amount {
                let above = if row == 0 {
                    UNREACHABLE
                } else {
                    grid[[row - 1, sum]]
                };
                let with_coin = if coin > 0 && coin <= sum && grid[[row, sum - coin]] != UNREACHABLE
                {
                    grid[[row, sum - coin]] + 1
                } else {
                    UNREACHABLE
                };
                grid[[row, sum]] = above.min(with_coin);
            }
        }

        Ok(Self {
            coins: coins.to_vec(),
            grid,
        })
    }

    pub fn coins(&self) -> &[usize] {
        &self.coins
    }

    pub fn rows(&self) -> usize {
        self.grid.nrows()
    }

    pub fn amount(&self) -> usize {
        self.grid.ncols() - 1
    }

    /// Best count using the first `row + 1` coins for `sub_amount`.
    ///
    /// `None` when the cell is unreachable or out of range.
    pub fn get(&self, row: usize, sub_amount: usize) -> Option<usize> {
        self.grid
            .get((row, sub_amount))
            .copied()
            .filter(|&count| count != UNREACHABLE)
    }

    /// The bottom-right cell: the minimum coin count for the whole amount.
    pub fn answer(&self) -> Option<usize> {
        let amount = self.amount();
        if amount == 0 {
            return Some(0);
        }
        self.rows()
            .checked_sub(1)
            .and_then(|last| self.get(last, amount))
    }

    /// Traces one optimal combination back through the grid.
    ///
    /// A cell equal to the one above it was inherited, so move up. Otherwise
    /// the row's coin was taken: record it and step left by its value.
    pub fn coins_used(&self) -> Option<Vec<usize>> {
        let mut sum = self.amount();
        if sum == 0 {
            return Some(Vec::new());
        }
        let mut row = self.rows().checked_sub(1)?;
        self.get(row, sum)?;

        let mut used = Vec::new();
        while sum > 0 {
            let here = self.grid[[row, sum]];
            if row > 0 && self.grid[[row - 1, sum]] == here {
                row -= 1;
                continue;
            }
            let coin = self.coins[row];
            used.push(coin);
            sum -= coin;
        }

        Some(used)
    }
}

impl fmt::Display for CostTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label_width = self
            .coins
            .iter()
            .map(|coin| coin.to_string().len())
            .max()
            .unwrap_or(0)
            .max("coin".len());
        let widest = self
            .grid
            .iter()
            .copied()
            .filter(|&count| count != UNREACHABLE)
            .chain(std::iter::once(self.amount()))
            .max()
            .unwrap_or(0);
        let cell_width = widest.to_string().len();

        write!(f, "{:>w$} |", "coin", w = label_width)?;
        for sum in 0..=self.amount() {
            write!(f, " {:>w$}", sum, w = cell_width)?;
        }
        writeln!(f)?;

        for (row, coin) in self.coins.iter().enumerate() {
            write!(f, "{:>w$} |", coin, w = label_width)?;
            for &cell in self.grid.row(row) {
                if cell == UNREACHABLE {
                    write!(f, " {:>w$}", "-", w = cell_width)?;
                } else {
                    write!(f, " {:>w$}", cell, w = cell_width)?;
                }
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

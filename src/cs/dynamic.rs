pub mod coin_change;
pub mod cost_table;
pub mod denominations;
pub mod solver;

// Re-export dynamic programming algorithms with descriptive names
pub use coin_change::{
    count_change_ways, make_change, min_coins_for_change, min_coins_up_to, UNREACHABLE,
};
pub use cost_table::CostTable;
pub use denominations::{parse_amount, DenominationPolicy, Denominations};
pub use solver::{min_coins, MinCoinSolver, SolverConfig, INFEASIBLE};

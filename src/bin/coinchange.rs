use std::process::ExitCode;

use clap::{ArgAction, Parser};
use coinchange::{DenominationPolicy, MinCoinSolver, SolverConfig, INFEASIBLE};
use log::debug;
use tracing_subscriber::filter::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "coinchange")]
#[command(about = "Fewest coins that sum exactly to an amount", long_about = None)]
#[command(allow_negative_numbers = true)]
struct Cli {
    /// Amount to form
    amount: i64,

    /// Coin denominations, each usable any number of times
    denominations: Vec<i64>,

    /// Also print one optimal combination of coins
    #[arg(long)]
    show_coins: bool,

    /// Print the number of distinct combinations instead of the minimum
    #[arg(long, conflicts_with = "show_coins")]
    ways: bool,

    /// Print the full cost table after the answer
    #[arg(long)]
    table: bool,

    /// Drop zero and negative denominations instead of failing
    #[arg(long)]
    discard_invalid: bool,

    /// Reject amounts above this limit
    #[arg(long)]
    max_amount: Option<usize>,

    /// More log output on stderr (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn solver_config(&self) -> SolverConfig {
        SolverConfig {
            denomination_policy: if self.discard_invalid {
                DenominationPolicy::Discard
            } else {
                DenominationPolicy::Reject
            },
            max_amount: self.max_amount,
            ..SolverConfig::default()
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    // stdout carries the answer only
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> coinchange::Result<()> {
    let solver = MinCoinSolver::new(cli.solver_config());
    debug!("solver config: {:?}", solver.config());

    if cli.ways {
        println!("{}", solver.count_ways(&cli.denominations, cli.amount)?);
    } else if cli.show_coins {
        match solver.make_change(&cli.denominations, cli.amount)? {
            Some(coins) => {
                println!("{}", coins.len());
                // a zero amount has no coins to list
                if !coins.is_empty() {
                    let coins: Vec<String> = coins.iter().map(ToString::to_string).collect();
                    println!("{}", coins.join(" "));
                }
            }
            None => println!("{}", INFEASIBLE),
        }
    } else {
        match solver.min_coins(&cli.denominations, cli.amount)? {
            Some(count) => println!("{}", count),
            None => println!("{}", INFEASIBLE),
        }
    }

    if cli.table {
        print!("{}", solver.cost_table(&cli.denominations, cli.amount)?);
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

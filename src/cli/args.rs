//! CLI argument definitions using clap

use clap::{Parser, Subcommand, ValueEnum};

/// Balanced binary search tree: build, mutate, traverse, and render trees
#[derive(Parser, Debug)]
#[command(name = "rstree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase logging verbosity (-d, -dd, -ddd)
    #[arg(short = 'd', long = "debug", action = clap::ArgAction::Count, global = true)]
    pub debug: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the demo scenario: random build, skew, rebalance
    Demo {
        /// Number of random seed values (overrides config)
        #[arg(long)]
        count: Option<usize>,
        /// Lower bound for seed values (overrides config)
        #[arg(long)]
        min: Option<i64>,
        /// Upper bound for seed values (overrides config)
        #[arg(long)]
        max: Option<i64>,
        /// RNG seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Build a tree from values and render it
    Print {
        /// Values to store
        #[arg(required = true)]
        values: Vec<i64>,
        /// Render a top-down outline instead of the sideways diagram
        #[arg(long)]
        outline: bool,
    },

    /// List values in a given traversal order
    Traverse {
        /// Traversal order
        #[arg(short, long, value_enum, default_value_t = Order::In)]
        order: Order,
        /// Values to store
        #[arg(required = true)]
        values: Vec<i64>,
    },

    /// Show structural statistics: size, height, balance
    Stats {
        /// Values to store
        #[arg(required = true)]
        values: Vec<i64>,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    /// Breadth-first, top to bottom
    Level,
    /// Node before its subtrees
    Pre,
    /// Ascending value order
    In,
    /// Subtrees before their node
    Post,
}

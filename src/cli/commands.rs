use std::io;

use clap::CommandFactory;
use clap_complete::generate;
use itertools::Itertools;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands, Order};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::Settings;
use crate::display::TreeOutline;
use crate::tree::Bst;
use crate::util::random::{random_between, random_values};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Demo {
            count,
            min,
            max,
            seed,
        }) => _demo(*count, *min, *max, *seed),
        Some(Commands::Print { values, outline }) => _print(values, *outline),
        Some(Commands::Traverse { order, values }) => _traverse(*order, values),
        Some(Commands::Stats { values }) => _stats(values),
        Some(Commands::Completion { shell }) => _completion(*shell),
        None => Ok(()),
    }
}

/// Demo scenario: build a tree from random values, inspect it, skew it
/// with inserts from a larger range, then rebalance.
#[instrument]
fn _demo(
    count: Option<usize>,
    min: Option<i64>,
    max: Option<i64>,
    seed: Option<u64>,
) -> CliResult<()> {
    let mut settings = Settings::load()?;
    if let Some(count) = count {
        settings.seed_count = count;
    }
    if let Some(min) = min {
        settings.value_min = min;
    }
    if let Some(max) = max {
        settings.value_max = max;
    }
    if settings.seed_count == 0 {
        return Err(CliError::Usage("seed count must be positive".to_string()));
    }
    debug!("settings: {:?}", settings);

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    output::header("Creating tree");
    let values = random_values(
        &mut rng,
        settings.seed_count,
        settings.value_min,
        settings.value_max,
    )?;
    let mut tree = Bst::from_values(values);
    print!("{}", tree);
    report_balance(&tree);
    print_orders(&tree);

    output::header("Skewing tree");
    let mut rejected = 0usize;
    for _ in 0..settings.skew_count {
        let value = random_between(&mut rng, settings.skew_min, settings.skew_max)?;
        if !tree.insert(value) {
            rejected += 1;
        }
    }
    if rejected > 0 {
        output::detail(&format!("{} duplicate value(s) rejected", rejected));
    }
    print!("{}", tree);
    report_balance(&tree);

    output::header("Rebalancing tree");
    tree.rebalance();
    print!("{}", tree);
    report_balance(&tree);
    print_orders(&tree);

    Ok(())
}

#[instrument]
fn _print(values: &[i64], outline: bool) -> CliResult<()> {
    let tree = Bst::from_values(values.iter().copied());
    if outline {
        print!("{}", tree.to_outline());
    } else {
        print!("{}", tree);
    }
    Ok(())
}

#[instrument]
fn _traverse(order: Order, values: &[i64]) -> CliResult<()> {
    let tree = Bst::from_values(values.iter().copied());
    let mut visited = Vec::with_capacity(tree.len());
    match order {
        Order::Level => tree.level_order(|value| visited.push(*value)),
        Order::Pre => tree.pre_order(|value| visited.push(*value)),
        Order::In => tree.in_order(|value| visited.push(*value)),
        Order::Post => tree.post_order(|value| visited.push(*value)),
    }
    output::info(&visited.iter().join(", "));
    Ok(())
}

#[instrument]
fn _stats(values: &[i64]) -> CliResult<()> {
    let tree = Bst::from_values(values.iter().copied());
    output::header("Tree statistics");
    output::detail(&format!("size:     {}", tree.len()));
    output::detail(&format!("height:   {}", tree.height()));
    output::detail(&format!("balanced: {}", tree.is_balanced()));
    if let Some(value) = tree.root().and_then(|root| tree.get(root)) {
        output::detail(&format!("root:     {}", value));
    }
    Ok(())
}

fn _completion(shell: clap_complete::Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}

fn report_balance(tree: &Bst<i64>) {
    if tree.is_balanced() {
        output::success("tree is balanced");
    } else {
        output::failure("tree is unbalanced");
    }
}

fn print_orders(tree: &Bst<i64>) {
    let mut level = Vec::new();
    tree.level_order(|value| level.push(*value));
    output::detail(&format!("level-order: {}", level.iter().join(", ")));

    let mut pre = Vec::new();
    tree.pre_order(|value| pre.push(*value));
    output::detail(&format!("pre-order:   {}", pre.iter().join(", ")));

    let mut post = Vec::new();
    tree.post_order(|value| post.push(*value));
    output::detail(&format!("post-order:  {}", post.iter().join(", ")));

    let mut inorder = Vec::new();
    tree.in_order(|value| inorder.push(*value));
    output::detail(&format!("in-order:    {}", inorder.iter().join(", ")));
}

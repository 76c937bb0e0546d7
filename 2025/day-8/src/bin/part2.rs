use clap::Parser;
use miette::*;

use aoc2025_day_8::{part2, CliArgs};

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let path = CliArgs::parse().input_path_or("input2.txt");
    let input = std::fs::read_to_string(&path)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to read {}", path.display()))?;
    let result = part2::process(&input)?;
    println!("Result: {}", result);
    Ok(())
}

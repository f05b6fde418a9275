// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! Solve [Day 7: Bridge Repair]: print the total calibration result, first with
//! `+` and `*` alone, then with the `||` concatenation operator as well.
//!
//! [Day 7: Bridge Repair]: https://adventofcode.com/2024/day/7

use aoc24::equation::{PART1_OPERATORS, PART2_OPERATORS, parse_equations, total_calibration};
use clap::Parser;
use std::error::Error;
use std::fs::read_to_string;
use std::path::PathBuf;

#[derive(Parser)]
#[command(version)]
#[command(about = "Solver for Advent of Code 2024 day 7", long_about = None)]
struct Args {
    #[arg(help = "File containing the calibration equations, one per line")]
    input: PathBuf,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let equations = parse_equations(&read_to_string(args.input)?)?;
    println!(
        "Part 1: {}",
        total_calibration(&equations, &PART1_OPERATORS)
    );
    println!(
        "Part 2: {}",
        total_calibration(&equations, &PART2_OPERATORS)
    );
    Ok(())
}

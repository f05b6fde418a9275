// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! Solve [Day 9: Disk Fragmenter]: compact the disk by moving whole files into
//! free space and print the resulting filesystem checksum.
//!
//! [Day 9: Disk Fragmenter]: https://adventofcode.com/2024/day/9

use aoc24::disk::Layout;
use clap::Parser;
use std::error::Error;
use std::fs::read_to_string;
use std::path::PathBuf;

#[derive(Parser)]
#[command(version)]
#[command(about = "Solver for Advent of Code 2024 day 9", long_about = None)]
struct Args {
    #[arg(help = "File containing the disk map digits")]
    input: PathBuf,
    #[arg(short, long)]
    #[arg(help = "Draw the layout before and after compaction")]
    render: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let mut layout = Layout::parse(&read_to_string(args.input)?)?;
    if args.render {
        println!("{layout}");
    }
    layout.compact();
    if args.render {
        println!("{layout}");
    }
    println!("{}", layout.checksum());
    Ok(())
}

// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD
#![warn(missing_docs)]

//! Library with solutions to two Advent of Code 2024 puzzles
//!
//! The [equation] module searches for operator combinations that make calibration
//! equations true, for [Day 7].
//!
//! # Example
//!
//! ```rust
//! use aoc24::prelude::*;
//!
//! let equation: Equation = "3267: 81 40 27".parse().unwrap();
//! assert!(equation.is_solvable(&PART1_OPERATORS));
//! ```
//!
//! The [disk] module compacts a fragmented disk by moving whole files into free
//! space, for [Day 9].
//!
//! # Example
//!
//! ```rust
//! use aoc24::prelude::*;
//!
//! let mut layout = Layout::parse("12345").unwrap();
//! layout.compact();
//! assert_eq!(layout.checksum(), 141);
//! ```
//!
//! [Day 7]: https://adventofcode.com/2024/day/7
//! [Day 9]: https://adventofcode.com/2024/day/9

pub mod disk;
pub mod equation;

/// A small module that re-exports items needed when working with the solvers
pub mod prelude {
    pub use crate::disk::Layout;
    pub use crate::equation::{Equation, Operator, PART1_OPERATORS, PART2_OPERATORS};
}

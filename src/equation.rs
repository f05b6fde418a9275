// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! Calibration equation solver for [Day 7: Bridge Repair]
//!
//! Each line of the puzzle input holds a target value and a sequence of operands.
//! The operators between the operands are missing; [Equation::is_solvable] checks
//! whether any choice of operators from a given set produces the target.
//!
//! [Day 7: Bridge Repair]: https://adventofcode.com/2024/day/7

use itertools::Itertools;
use std::error::Error;
use std::fmt::{self, Display};
use std::num::ParseIntError;
use std::str::FromStr;

/// The operators available under the part 1 rules: `+` and `*`
pub const PART1_OPERATORS: [Operator; 2] = [Operator::Add, Operator::Multiply];

/// The operators available under the part 2 rules: `+`, `*`, and `||`
pub const PART2_OPERATORS: [Operator; 3] =
    [Operator::Add, Operator::Multiply, Operator::Concat];

/// A binary operator that can be placed between two operands
///
/// Operators are always applied left-to-right - there is no precedence.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Operator {
    /// Ordinary addition
    Add,
    /// Ordinary multiplication
    Multiply,
    /// Decimal digit concatenation, written `||` in the puzzle: `12 || 345` is `12345`
    Concat,
}

impl Operator {
    fn apply(self, acc: u64, operand: u64) -> u64 {
        match self {
            Operator::Add => acc + operand,
            Operator::Multiply => acc * operand,
            Operator::Concat => acc * magnitude(operand) + operand,
        }
    }
}

/// The smallest power of ten strictly greater than `value`
///
/// Multiplying by it shifts a number's digits left far enough to append `value`'s
/// digits after them.
fn magnitude(value: u64) -> u64 {
    let mut result = 1;
    while result <= value {
        result *= 10;
    }
    result
}

/// A calibration equation: the target value and the ordered operands that might
/// produce it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Equation {
    target: u64,
    operands: Vec<u64>,
}

impl Equation {
    /// Construct an equation directly from its target and operands
    pub fn new(target: u64, operands: impl IntoIterator<Item = u64>) -> Self {
        Self {
            target,
            operands: operands.into_iter().collect(),
        }
    }

    /// The value to the left of the `:` in the puzzle input
    pub fn target(&self) -> u64 {
        self.target
    }

    /// Evaluate the operands left-to-right with `operators` slotted between them.
    ///
    /// Panics if `operators` is not exactly one shorter than the operands.
    fn evaluate(&self, operators: &[Operator]) -> u64 {
        self.operands[1..]
            .iter()
            .zip_eq(operators)
            .fold(self.operands[0], |acc, (&operand, &op)| {
                op.apply(acc, operand)
            })
    }

    /// Check whether some choice of `operators` between the operands evaluates to
    /// the target.
    ///
    /// Every sequence of `operands - 1` operators drawn from `operators` is tried
    /// in turn, so the cost is `operators.len().pow(operands - 1)` evaluations in
    /// the worst case - exponential, but fine for puzzle-sized operand counts.
    pub fn is_solvable(&self, operators: &[Operator]) -> bool {
        let Some((&first, rest)) = self.operands.split_first() else {
            return false;
        };
        if rest.is_empty() {
            // no slots to fill, so the lone operand must already be the target
            return self.target == first;
        }
        itertools::repeat_n(operators.iter().copied(), rest.len())
            .multi_cartesian_product()
            .any(|ops| self.evaluate(&ops) == self.target)
    }
}

impl FromStr for Equation {
    type Err = ParseEquationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (target, operands) = s
            .split_once(':')
            .ok_or_else(|| ParseEquationError::MissingTarget(s.into()))?;
        Ok(Self {
            target: target.trim().parse()?,
            operands: operands
                .split_whitespace()
                .map(str::parse)
                .collect::<Result<_, _>>()?,
        })
    }
}

/// Parse the whole puzzle input, one equation per line
pub fn parse_equations(input: &str) -> Result<Vec<Equation>, ParseEquationError> {
    input.lines().map(str::parse).collect()
}

/// Sum the targets of every equation that is solvable with the given operators
pub fn total_calibration(equations: &[Equation], operators: &[Operator]) -> u64 {
    equations
        .iter()
        .filter(|equation| equation.is_solvable(operators))
        .map(Equation::target)
        .sum()
}

#[derive(Debug, PartialEq, Eq)]
/// A line of the puzzle input could not be parsed as an [Equation]
pub enum ParseEquationError {
    /// The line had no `:` separating the target from the operands
    MissingTarget(Box<str>),
    /// The target or one of the operands was not an unsigned integer
    BadInt(ParseIntError),
}

impl Display for ParseEquationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseEquationError::MissingTarget(line) => {
                write!(f, "line {line:?} has no ':' before the operands")
            }
            ParseEquationError::BadInt(e) => write!(f, "invalid integer token: {e}"),
        }
    }
}

impl Error for ParseEquationError {}

impl From<ParseIntError> for ParseEquationError {
    fn from(e: ParseIntError) -> Self {
        Self::BadInt(e)
    }
}

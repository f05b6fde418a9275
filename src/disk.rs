// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! Disk compaction for [Day 9: Disk Fragmenter]
//!
//! The disk map is a single line of digits that alternately give the length of a
//! file and the length of a gap of free space. [Layout::compact] moves whole files
//! into the first gap big enough to hold them, and [Layout::checksum] computes the
//! position-weighted filesystem checksum of the result.
//!
//! [Day 9: Disk Fragmenter]: https://adventofcode.com/2024/day/9

use itertools::Itertools;
use std::error::Error;
use std::fmt::{self, Display};

/// A contiguous run of disk positions, either holding one file or free
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Extent {
    start: usize,
    len: usize,
    /// `None` marks free space
    id: Option<usize>,
}

impl Extent {
    /// Sum of `position * file id` over the positions this extent covers.
    /// Free extents contribute nothing.
    fn checksum(&self) -> u64 {
        let Some(id) = self.id else {
            return 0;
        };
        (self.start..self.start + self.len)
            .map(|position| position as u64 * id as u64)
            .sum()
    }
}

/// The file and free extents decoded from a disk map
///
/// Both lists are kept in original layout order; together they partition the disk
/// contiguously, starting at offset 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    files: Vec<Extent>,
    free: Vec<Extent>,
}

impl Layout {
    /// Build a layout from alternating file and free-space lengths, starting with
    /// a file at offset 0. Files are numbered from 0 in the order they appear.
    pub fn from_lengths(lengths: impl IntoIterator<Item = usize>) -> Self {
        let mut files = Vec::new();
        let mut free = Vec::new();
        let mut start = 0;
        for (i, len) in lengths.into_iter().enumerate() {
            if i % 2 == 0 {
                files.push(Extent {
                    start,
                    len,
                    id: Some(files.len()),
                });
            } else {
                free.push(Extent {
                    start,
                    len,
                    id: None,
                });
            }
            start += len;
        }
        Self { files, free }
    }

    /// Parse a disk map: one line of decimal digits, each a single extent length,
    /// with surrounding whitespace ignored
    pub fn parse(input: &str) -> Result<Self, ParseMapError> {
        let lengths: Vec<usize> = input
            .trim()
            .chars()
            .map(|c| c.to_digit(10).map(|d| d as usize).ok_or(ParseMapError(c)))
            .collect::<Result<_, _>>()?;
        Ok(Self::from_lengths(lengths))
    }

    /// Try to move each file, highest-numbered first, into the first free extent
    /// big enough to hold it.
    ///
    /// A move consumes the front of the chosen gap; whatever is left over stays
    /// available for later files. A file that fits in no gap stays where it is.
    /// Gaps are never merged or re-sorted, and there is no requirement that the
    /// chosen gap lie to the file's left - first fit wins.
    ///
    /// Afterwards the file extents are reordered by their final start offsets.
    pub fn compact(&mut self) {
        for file in self.files.iter_mut().rev() {
            if let Some(gap) = self.free.iter_mut().find(|gap| file.len <= gap.len) {
                file.start = gap.start;
                gap.start += file.len;
                gap.len -= file.len;
            }
        }
        self.files.sort_unstable_by_key(|file| file.start);
    }

    /// The filesystem checksum: `position * file id`, summed over every position
    /// occupied by a file
    pub fn checksum(&self) -> u64 {
        self.files.iter().map(Extent::checksum).sum()
    }
}

impl Display for Layout {
    /// Draws the layout the way the puzzle text does: each file position shows its
    /// file id, each gap position a `.`. Trailing free space is not drawn.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut prev_end = 0;
        for file in self.files.iter().sorted_unstable_by_key(|file| file.start) {
            for _ in prev_end..file.start {
                f.write_str(".")?;
            }
            match file.id {
                Some(id) => {
                    for _ in 0..file.len {
                        write!(f, "{id}")?;
                    }
                }
                None => {
                    for _ in 0..file.len {
                        f.write_str(".")?;
                    }
                }
            }
            prev_end = file.start + file.len;
        }
        Ok(())
    }
}

#[derive(Debug, PartialEq, Eq)]
/// The disk map contained a character that is not a decimal digit
pub struct ParseMapError(char);

impl Display for ParseMapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} is not a decimal digit", self.0)
    }
}

impl Error for ParseMapError {}

#[cfg(test)]
mod tests {
    use super::*;

    /// > a disk map like 12345 would represent a one-block file, two blocks of
    /// > free space, a three-block file, four blocks of free space, and then a
    /// > five-block file
    #[test]
    fn builds_the_example_layout() {
        let layout = Layout::parse("12345").unwrap();
        assert_eq!(layout.to_string(), "0..111....22222");
        assert_eq!(
            layout.free,
            vec![
                Extent {
                    start: 1,
                    len: 2,
                    id: None
                },
                Extent {
                    start: 6,
                    len: 4,
                    id: None
                },
            ]
        );
    }

    #[test]
    fn rejects_non_digits() {
        assert_eq!(Layout::parse("123x5"), Err(ParseMapError('x')));
    }

    #[test]
    fn trailing_newline_is_ignored() {
        assert_eq!(Layout::parse("12345\n"), Layout::parse("12345"));
    }

    /// The five-block file fits in no gap and stays put; the others move into
    /// whatever first fits them
    #[test]
    fn oversized_files_stay_put() {
        let mut layout = Layout::parse("12345").unwrap();
        layout.compact();
        assert_eq!(layout.to_string(), ".0....111.22222");
        assert_eq!(layout.checksum(), 141);
    }

    /// A move only eats the front of a gap; the remainder is reused by the next
    /// file, even one whose original position was further left
    #[test]
    fn gaps_are_consumed_front_to_back() {
        let mut layout = Layout::parse("191").unwrap();
        layout.compact();
        // file 1 takes position 1, then file 0 takes position 2 from the same gap
        assert_eq!(layout.to_string(), ".10");
        assert_eq!(layout.checksum(), 1);
    }

    #[test]
    fn checksum_is_a_pure_function_of_the_layout() {
        let mut layout = Layout::parse("2333133121414131402").unwrap();
        layout.compact();
        let first = layout.checksum();
        assert_eq!(layout.checksum(), first);
    }
}

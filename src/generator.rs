// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Tom F.

//! Partial-shuffle generator: ascending integer sequences with a tunable
//! amount of local disorder.
//!
//! # Algorithm
//!
//! 1. Start from the ascending reference sequence `0..size`.
//! 2. Cut it into `mixing_factor` chunks of `size / mixing_factor` elements.
//! 3. `mixing_factor - 1` times: pick a remaining chunk uniformly at random,
//!    shuffle it, append it to the output.
//! 4. Insert the last remaining chunk, unshuffled, at a uniformly random
//!    position of the output (`0..=len`).
//!
//! A mixing factor of 1 therefore yields the sorted sequence, and larger
//! mixing factors yield more, smaller chunks scattered across the output.
//!
//! # Chunk layouts
//!
//! [`ChunkLayout::SlidingWindow`] (the default, used by [`generate`]) takes
//! chunk `i` as the window `[i, i + chunk_size)`. Adjacent windows overlap,
//! so the output has `mixing_factor * chunk_size` elements and repeats values
//! unless `mixing_factor` is 1 or equal to `size`. Timing results depend on
//! this shape, so it is kept as the default.
//!
//! [`ChunkLayout::Partition`] takes chunk `i` as `[i * chunk_size, (i + 1) * chunk_size)`
//! with the last chunk extended to `size`. The output is always a permutation
//! of `0..size`.
//!
//! # Randomness
//!
//! The random source is always passed in. Seed a [`rand::rngs::StdRng`] to
//! reproduce a sequence exactly.

use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

use crate::error::{Result, SortednessError};

/// How the ascending reference sequence is cut into chunks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChunkLayout {
    /// Chunk `i` covers `[i, i + chunk_size)`; windows overlap.
    #[default]
    SlidingWindow,
    /// Chunk `i` covers `[i * chunk_size, (i + 1) * chunk_size)`; the last
    /// chunk also takes the `size % mixing_factor` leftover elements.
    Partition,
}

impl ChunkLayout {
    /// Name accepted by [`FromStr`] and printed by [`fmt::Display`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::SlidingWindow => "sliding",
            Self::Partition => "partition",
        }
    }

    /// Value range of chunk `index` out of `mixing_factor` chunks.
    fn chunk_bounds(
        self,
        index: usize,
        chunk_size: usize,
        size: usize,
        mixing_factor: usize,
    ) -> Range<usize> {
        match self {
            Self::SlidingWindow => index..index + chunk_size,
            Self::Partition => {
                let start = index * chunk_size;
                let end = if index + 1 == mixing_factor {
                    size
                } else {
                    start + chunk_size
                };
                start..end
            }
        }
    }
}

impl fmt::Display for ChunkLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ChunkLayout {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sliding" | "sliding_window" => Ok(Self::SlidingWindow),
            "partition" => Ok(Self::Partition),
            other => Err(format!(
                "unknown chunk layout '{other}' (expected sliding or partition)"
            )),
        }
    }
}

/// Generates a partially shuffled sequence using the sliding-window layout.
///
/// # Errors
///
/// Returns [`SortednessError::InvalidArgument`] if `mixing_factor` is 0, or
/// if `size` is non-zero and smaller than `mixing_factor` (every chunk would
/// be empty). `size == 0` yields an empty sequence.
///
/// # Examples
///
/// ```
/// use rand::{rngs::StdRng, SeedableRng};
/// use sortedness::generator::generate;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// assert_eq!(generate(10, 1, &mut rng).unwrap(), (0..10).collect::<Vec<_>>());
/// ```
pub fn generate<R: Rng + ?Sized>(
    size: usize,
    mixing_factor: usize,
    rng: &mut R,
) -> Result<Vec<usize>> {
    generate_with_layout(size, mixing_factor, ChunkLayout::SlidingWindow, rng)
}

/// Generates a partially shuffled sequence with an explicit [`ChunkLayout`].
///
/// # Errors
///
/// Same conditions as [`generate`].
pub fn generate_with_layout<R: Rng + ?Sized>(
    size: usize,
    mixing_factor: usize,
    layout: ChunkLayout,
    rng: &mut R,
) -> Result<Vec<usize>> {
    validate(size, mixing_factor)?;
    if size == 0 {
        return Ok(Vec::new());
    }

    let chunk_size = size / mixing_factor;
    let mut chunks: Vec<Vec<usize>> = (0..mixing_factor)
        .map(|i| {
            layout
                .chunk_bounds(i, chunk_size, size, mixing_factor)
                .collect()
        })
        .collect();

    let total: usize = chunks.iter().map(Vec::len).sum();
    let mut mixed = Vec::with_capacity(total);
    for _ in 1..mixing_factor {
        // Remaining chunks keep their relative order so a seed fixes the output.
        let picked = rng.gen_range(0..chunks.len());
        let mut chunk = chunks.remove(picked);
        chunk.shuffle(rng);
        mixed.append(&mut chunk);
    }

    // Exactly one chunk is left; it goes in unshuffled.
    let position = rng.gen_range(0..=mixed.len());
    mixed.splice(position..position, chunks.into_iter().flatten());

    Ok(mixed)
}

fn validate(size: usize, mixing_factor: usize) -> Result<()> {
    if mixing_factor == 0 {
        return Err(SortednessError::InvalidArgument {
            size,
            mixing_factor,
            reason: "mixing_factor must be at least 1",
        });
    }
    if size != 0 && mixing_factor > size {
        return Err(SortednessError::InvalidArgument {
            size,
            mixing_factor,
            reason: "mixing_factor exceeds size, chunks would be empty",
        });
    }
    Ok(())
}

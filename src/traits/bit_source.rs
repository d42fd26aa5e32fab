/*
 * SPDX-FileCopyrightText: 2024 Tommaso Fontana
 * SPDX-FileCopyrightText: 2024 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::BitOrder;
use crate::error::Error;

/// Read-only random access over a logical bit sequence.
///
/// `pos` arguments index bits in append order; the packing selected by
/// `O` is invisible at this level. Reads never mutate the source, so any
/// number of readers may share one.
pub trait BitSource<O: BitOrder> {
    /// Total number of logical bits.
    fn num_bits(&self) -> usize;

    /// Counts consecutive zero bits starting at `pos`, stopping at the
    /// first one bit. Returns `None` if no one bit occurs before the end
    /// of the sequence — uniformly, on every storage kind.
    fn count_leading_zeros(&self, pos: usize) -> Option<usize>;

    /// Counts consecutive one bits starting at `pos`. A run cut short by
    /// the end of the sequence is reported as-is; there is no sentinel.
    fn count_leading_ones(&self, pos: usize) -> usize;

    /// Reads `n` bits starting at `pos`, most significant first: the bit
    /// at `pos` becomes the highest bit of the result.
    ///
    /// Fails with [`Error::UnexpectedEnd`] if fewer than `n` bits remain
    /// and with [`Error::WidthExceeded`] if the bits read so far would not
    /// fit the 128-bit accumulator.
    fn get_bits(&self, n: usize, pos: usize) -> Result<u128, Error>;

    /// Reads a unary codeword at `pos`, returning `(n, bits_consumed)`
    /// with `bits_consumed == n`.
    fn read_unary(&self, pos: usize) -> Result<(u64, usize), Error> {
        let zeros = self.count_leading_zeros(pos).ok_or(Error::UnexpectedEnd)?;
        Ok((zeros as u64 + 1, zeros + 1))
    }

    /// Renders the logical bit sequence as a string of `0`/`1`, first
    /// appended bit on the left.
    fn bit_string(&self) -> String {
        let mut repr = String::with_capacity(self.num_bits());
        for pos in 0..self.num_bits() {
            match self.get_bits(1, pos) {
                Ok(1) => repr.push('1'),
                _ => repr.push('0'),
            }
        }
        repr
    }
}

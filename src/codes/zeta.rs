/*
 * SPDX-FileCopyrightText: 2024 Tommaso Fontana
 * SPDX-FileCopyrightText: 2024 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! ζ codes.
//!
//! The ζ code with parameter `k ≥ 1` groups values by their bit length in
//! steps of `k`: a value with `l` significant bits falls in the class
//! `h = ⌈l / k⌉`, written in unary, followed by an offset within the
//! class written in `h·k - 1` bits, with one extra bit for the upper part
//! of the class. ζ with `k = 1` coincides bit for bit with the
//! [γ](super::gamma) code; larger `k` favours distributions with heavier
//! tails.
//!
//! # References
//!
//! Paolo Boldi, Sebastiano Vigna. "Codes for the World-Wide Web", Internet
//! Mathematics, vol. 2, no. 4, pp. 407-429, 2005.

use super::top_set_bit;
use crate::error::Error;
use crate::traits::words::narrow;
use crate::traits::{BitBuffer, BitOrder, BitSource, Word};

/// Returns the length of the ζ code with parameter `k ≥ 1` for
/// `value ≥ 1`.
#[must_use]
#[inline]
pub fn len_zeta(value: u64, k: u64) -> usize {
    debug_assert!(value >= 1);
    debug_assert!(k >= 1);
    let l = top_set_bit(value) as u64;
    let h = l.div_ceil(k);
    let n = h * k;
    let m = n - (k - 1);
    let threshold = 1u128 << m.min(127);
    (h + n - 1) as usize + usize::from((value as u128) >= threshold)
}

/// Trait for writing ζ codes.
///
/// This is the trait you should pull in scope to write ζ codes.
pub trait ZetaWrite<O: BitOrder>: BitBuffer<O> {
    fn write_zeta(&mut self, value: u64, k: u64) -> Result<usize, Error> {
        if value == 0 || k == 0 {
            return Err(Error::NonPositive);
        }
        let l = top_set_bit(value) as u64;
        let h = l.div_ceil(k);
        let n = h.checked_mul(k).ok_or(Error::Overflow)?;
        // m ≤ l + 1 ≤ 65, so the threshold fits comfortably
        let m = n - (k - 1);
        let threshold = 1u128 << m;
        self.write_unary(h);
        let written = if (value as u128) < threshold {
            self.append_bits(value as u128 - threshold / 2, n as usize - 1);
            h + n - 1
        } else {
            self.append_bits((value >> 1) as u128, n as usize - 1);
            self.append_bits((value & 1) as u128, 1);
            h + n
        };
        if !self.is_valid() {
            return Err(Error::CapacityExceeded);
        }
        Ok(written as usize)
    }
}

/// Trait for reading ζ codes.
///
/// This is the trait you should pull in scope to read ζ codes.
pub trait ZetaRead<O: BitOrder>: BitSource<O> {
    fn read_zeta<T: Word>(&self, pos: usize, k: u64) -> Result<(T, usize), Error> {
        if k == 0 {
            return Err(Error::NonPositive);
        }
        let (h, read) = self.read_unary(pos)?;
        let n = h.checked_mul(k).ok_or(Error::Overflow)? - 1;
        if n == 0 {
            return Ok((T::ONE, read));
        }
        let exp = (h - 1).checked_mul(k).ok_or(Error::Overflow)?;
        if exp >= T::BITS as u64 {
            return Err(Error::WidthExceeded);
        }
        let x = self.get_bits(n as usize, pos + read)?;
        let low_class = 1u128 << exp;
        if x < low_class {
            let value = x | low_class;
            Ok((narrow::<T>(value)?, read + n as usize))
        } else {
            // the offset spills into one extra bit
            if x >> (T::BITS - 1) != 0 {
                return Err(Error::WidthExceeded);
            }
            let bit = self.get_bits(1, pos + read + n as usize)?;
            let value = (x << 1) | bit;
            Ok((narrow::<T>(value)?, read + n as usize + 1))
        }
    }
}

impl<O: BitOrder, B: BitBuffer<O>> ZetaWrite<O> for B {}
impl<O: BitOrder, S: BitSource<O>> ZetaRead<O> for S {}

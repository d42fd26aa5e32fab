/*
 * SPDX-FileCopyrightText: 2024 Tommaso Fontana
 * SPDX-FileCopyrightText: 2024 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use common_traits::*;

use crate::error::Error;

/// This is a trait alias for all the properties we need from the unsigned
/// types that act as storage elements of a buffer or as decode targets:
/// `u8` up to `u128`, plus `usize`.
///
/// Every value that crosses a trait boundary travels as a `u128`, the
/// widest supported target; the casts bundled here move words in and out
/// of that working width.
pub trait Word:
    UnsignedInt + ToBytes + FromBytes + FiniteRangeNumber + UpcastableInto<u128> + CastableFrom<u128>
{
}
impl<W> Word for W where
    W: UnsignedInt
        + ToBytes
        + FromBytes
        + FiniteRangeNumber
        + UpcastableInto<u128>
        + CastableFrom<u128>
{
}

/// Narrows a 128-bit accumulator to `W`, failing if any significant bit
/// would be lost.
#[inline]
pub(crate) fn narrow<W: Word>(value: u128) -> Result<W, Error> {
    let narrowed = W::cast_from(value);
    let widened: u128 = narrowed.upcast();
    if widened != value {
        return Err(Error::WidthExceeded);
    }
    Ok(narrowed)
}

/// Mask with the low `n` bits set, saturating at the full 128-bit width.
#[inline(always)]
pub(crate) fn low_mask(n: usize) -> u128 {
    if n >= 128 {
        u128::MAX
    } else {
        (1u128 << n) - 1
    }
}

/// Left shift that returns zero instead of overflowing the shift amount.
#[inline(always)]
pub(crate) fn shl(value: u128, n: usize) -> u128 {
    if n >= 128 {
        0
    } else {
        value << n
    }
}

/// Right shift that returns zero instead of overflowing the shift amount.
#[inline(always)]
pub(crate) fn shr(value: u128, n: usize) -> u128 {
    if n >= 128 {
        0
    } else {
        value >> n
    }
}

/// Reverses the low `n` bits of `bits`, discarding the rest.
///
/// `n` must be at most 128.
#[inline(always)]
pub(crate) fn reverse_low_bits(bits: u128, n: usize) -> u128 {
    debug_assert!(n <= 128);
    if n == 0 {
        return 0;
    }
    (bits & low_mask(n)).reverse_bits() >> (128 - n)
}

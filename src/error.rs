/*
 * SPDX-FileCopyrightText: 2024 Tommaso Fontana
 * SPDX-FileCopyrightText: 2024 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! The error type shared by buffer primitives, encoders, and decoders.

/// Errors reported by bit-level reads and by the code algorithms.
///
/// None of the operations in this crate panic on bad input: encoders reject
/// out-of-domain values and full fixed-width buffers, decoders reject
/// truncated or overwide codewords, and all of it surfaces here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Codewords are indexed from 1; zero (and a zero ζ parameter) cannot
    /// be encoded.
    #[error("value must be strictly positive")]
    NonPositive,

    /// A fixed-width buffer ran out of room while encoding. The buffer is
    /// invalid and its contents must not be used.
    #[error("bit buffer capacity exceeded")]
    CapacityExceeded,

    /// The bit sequence ended before the codeword did, or no terminating
    /// one bit was found.
    #[error("unexpected end of bit sequence")]
    UnexpectedEnd,

    /// The decoded value does not fit in the requested integer type.
    #[error("value does not fit in the target width")]
    WidthExceeded,

    /// An intermediate computation overflowed its working width.
    #[error("arithmetic overflow")]
    Overflow,
}

/*
 * SPDX-FileCopyrightText: 2024 Tommaso Fontana
 * SPDX-FileCopyrightText: 2024 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

Implementations of the three storage kinds behind
[`BitBuffer`](crate::traits::BitBuffer) and
[`BitSource`](crate::traits::BitSource).

- [`WordBuffer`] packs bits into a single fixed-width word. It is the only
  storage that can run out of room: overrunning the word width makes it
  invalid rather than failing the append.
- [`IntBuffer`] packs bits into an arbitrary-precision integer and never
  runs out of room.
- [`VecBuffer`] packs bits into a growable array of words, filling each
  element completely before starting the next one.

All three exist for both bit orders. Under [`Msb0`](crate::traits::Msb0)
the word and integer storages hold, at any time, exactly the number whose
binary representation is the bit sequence written so far; under
[`Lsb0`](crate::traits::Lsb0) bit *i* of the storage is the *i*-th
appended bit. The array storage instead fills element 0 first, packing
within each element from the selected end.

The arithmetic throughout these implementations happens on a 128-bit
image of the current element, so a single pair of guarded shifts covers
every element width.

*/

pub mod word_buffer;
pub use word_buffer::WordBuffer;

pub mod int_buffer;
pub use int_buffer::IntBuffer;

pub mod vec_buffer;
pub use vec_buffer::VecBuffer;
